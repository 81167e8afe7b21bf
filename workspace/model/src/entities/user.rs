use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Represents a user of the platform.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    /// Annual CO2 budget in kilograms. `None` means the user never set a
    /// goal; callers substitute the platform default. A stored goal is
    /// always positive (enforced at the API boundary).
    #[sea_orm(column_type = "Decimal(Some((16, 4)))", nullable)]
    pub carbon_goal_kg: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    // A user owns multiple activity entries.
    #[sea_orm(has_many = "super::carbon_entry::Entity")]
    CarbonEntry,
}

impl Related<super::carbon_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CarbonEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
