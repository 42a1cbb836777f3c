use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "foods")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    /// Minor units, already rounded.
    pub price: i64,
    pub food_image: String,
    pub menu_id: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

// Menu references are checked by the services, not by the schema.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
