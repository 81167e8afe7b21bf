use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// A single logged activity with its computed emission.
///
/// The table carries two generations of column names because the schema was
/// renamed without migrating existing rows: `amount`/`co2_kg`/
/// `date_recorded`/`description` are the legacy columns, `value`/
/// `co2_emitted`/`date`/`notes` the current ones. New rows are written with
/// the current columns only; reads go through the compute crate's
/// normalizer, which reconciles both generations.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "carbon_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    /// One of the five known categories, stored lowercase.
    pub category: String,
    /// Activity key scoped to `category`, e.g. `electricity_kwh`.
    pub activity_type: String,
    // Legacy columns.
    #[sea_orm(column_type = "Decimal(Some((16, 4)))", nullable)]
    pub amount: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))", nullable)]
    pub co2_kg: Option<Decimal>,
    pub date_recorded: Option<NaiveDate>,
    pub description: Option<String>,
    // Current columns.
    #[sea_orm(column_type = "Decimal(Some((16, 4)))", nullable)]
    pub value: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))", nullable)]
    pub co2_emitted: Option<Decimal>,
    pub date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
