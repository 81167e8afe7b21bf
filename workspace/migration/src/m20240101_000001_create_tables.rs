use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Username).unique_key())
                    .col(decimal_len_null(Users::CarbonGoalKg, 16, 4))
                    .to_owned(),
            )
            .await?;

        // Create carbon_entries table with the original column names.
        // A later migration adds the renamed columns alongside these.
        manager
            .create_table(
                Table::create()
                    .table(CarbonEntries::Table)
                    .if_not_exists()
                    .col(pk_auto(CarbonEntries::Id))
                    .col(integer(CarbonEntries::UserId))
                    .col(string(CarbonEntries::Category))
                    .col(string(CarbonEntries::ActivityType))
                    .col(decimal_len_null(CarbonEntries::Amount, 16, 4))
                    .col(decimal_len_null(CarbonEntries::Co2Kg, 16, 4))
                    .col(date_null(CarbonEntries::DateRecorded))
                    .col(string_null(CarbonEntries::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_carbon_entry_user")
                            .from(CarbonEntries::Table, CarbonEntries::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CarbonEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    CarbonGoalKg,
}

#[derive(DeriveIden)]
enum CarbonEntries {
    Table,
    Id,
    UserId,
    Category,
    ActivityType,
    Amount,
    Co2Kg,
    DateRecorded,
    Description,
}
