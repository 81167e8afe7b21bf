use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Adds the current-generation entry columns (`value`, `co2_emitted`,
/// `date`, `notes`) next to the legacy ones. Existing rows are left
/// untouched and keep only the legacy fields populated; the application
/// normalizes the two generations at read time.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One ALTER per column: SQLite only supports a single ADD COLUMN
        // per statement.
        manager
            .alter_table(
                Table::alter()
                    .table(CarbonEntries::Table)
                    .add_column(decimal_len_null(CarbonEntries::Value, 16, 4))
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(CarbonEntries::Table)
                    .add_column(decimal_len_null(CarbonEntries::Co2Emitted, 16, 4))
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(CarbonEntries::Table)
                    .add_column(date_null(CarbonEntries::Date))
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(CarbonEntries::Table)
                    .add_column(string_null(CarbonEntries::Notes))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            CarbonEntries::Value,
            CarbonEntries::Co2Emitted,
            CarbonEntries::Date,
            CarbonEntries::Notes,
        ] {
            manager
                .alter_table(
                    Table::alter()
                        .table(CarbonEntries::Table)
                        .drop_column(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CarbonEntries {
    Table,
    Value,
    Co2Emitted,
    Date,
    Notes,
}
