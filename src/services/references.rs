//! Existence checks for records referenced by id from another collection.
//!
//! The schema has no foreign keys, so every dependent write (food -> menu, order -> table,
//! order item -> food, invoice -> order) calls [`ensure_exists`] first. The check and the
//! write are separate statements; a referenced record removed in between is not detected.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::{
    entity::{Foods, Menus, Orders, Tables, foods, menus, orders, tables},
    error::{AppError, AppResult},
};

/// A collection other records point at through its business key.
pub trait Referenced: EntityTrait {
    const LABEL: &'static str;

    fn key() -> Self::Column;
}

impl Referenced for Menus {
    const LABEL: &'static str = "Menu";

    fn key() -> menus::Column {
        menus::Column::Id
    }
}

impl Referenced for Tables {
    const LABEL: &'static str = "Table";

    fn key() -> tables::Column {
        tables::Column::Id
    }
}

impl Referenced for Foods {
    const LABEL: &'static str = "Food";

    fn key() -> foods::Column {
        foods::Column::Id
    }
}

impl Referenced for Orders {
    const LABEL: &'static str = "Order";

    fn key() -> orders::Column {
        orders::Column::Id
    }
}

/// Point lookup of `value` on the collection's key. A failed lookup is reported as a
/// validation failure rather than read as "absent".
pub async fn find_referenced<E, C>(db: &C, value: &str) -> AppResult<Option<E::Model>>
where
    E: Referenced,
    C: ConnectionTrait,
{
    E::find()
        .filter(E::key().eq(value))
        .one(db)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, entity = E::LABEL, key = value, "reference lookup failed");
            AppError::BadRequest(format!("could not verify {} reference", E::LABEL))
        })
}

pub async fn exists<E, C>(db: &C, value: &str) -> AppResult<bool>
where
    E: Referenced,
    C: ConnectionTrait,
{
    Ok(find_referenced::<E, C>(db, value).await?.is_some())
}

/// Abort a dependent write with [`AppError::DependencyNotFound`] unless `value` exists.
pub async fn ensure_exists<E, C>(db: &C, value: &str) -> AppResult<E::Model>
where
    E: Referenced,
    C: ConnectionTrait,
{
    match find_referenced::<E, C>(db, value).await? {
        Some(model) => Ok(model),
        None => {
            tracing::warn!(entity = E::LABEL, key = value, "referenced record not found");
            Err(AppError::DependencyNotFound(E::LABEL))
        }
    }
}
