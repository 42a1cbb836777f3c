use sea_orm::{EntityTrait, Schema};
use sea_orm_migration::prelude::*;

use crate::entity::{Foods, Invoices, Menus, OrderItems, Orders, Tables, Users};

#[derive(DeriveMigrationName)]
pub struct Migration;

async fn create_collection<E>(manager: &SchemaManager<'_>, schema: &Schema, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait + Copy,
{
    manager
        .create_table(
            schema
                .create_table_from_entity(entity)
                .if_not_exists()
                .to_owned(),
        )
        .await?;
    for mut index in schema.create_index_from_entity(entity) {
        manager.create_index(index.if_not_exists().to_owned()).await?;
    }
    Ok(())
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        create_collection(manager, &schema, Menus).await?;
        create_collection(manager, &schema, Tables).await?;
        create_collection(manager, &schema, Foods).await?;
        create_collection(manager, &schema, Orders).await?;
        create_collection(manager, &schema, OrderItems).await?;
        create_collection(manager, &schema, Invoices).await?;
        create_collection(manager, &schema, Users).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(Invoices).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(OrderItems).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(Orders).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(Foods).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(Tables).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(Menus).if_exists().to_owned()).await?;
        Ok(())
    }
}
