//! Base repository contract shared by every entity store.

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::Id;

/// CRUD operations over one table keyed by a storage-assigned [`Id`].
///
/// Lookups report absence as `None`, never as an error. `update` and
/// `delete` succeed when no row matches and report the number of rows the
/// statement affected, so `0` means nothing matched.
#[async_trait]
pub trait CrudRepository<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// Insert every attribute except the identity and return the item
    /// carrying the identity storage assigned.
    async fn add(&self, item: T) -> AppResult<T>;

    async fn find_by_id(&self, id: Id) -> AppResult<Option<T>>;

    /// Every row, in identity order. Empty table gives an empty `Vec`.
    async fn list(&self) -> AppResult<Vec<T>>;

    /// Overwrite every mutable attribute of the row matching `item`'s identity.
    async fn update(&self, item: &T) -> AppResult<u64>;

    async fn delete(&self, id: Id) -> AppResult<u64>;
}

/// Map every row with the entity's single row conversion, stopping at the
/// first row that does not fit the domain model.
pub(crate) fn map_rows<M, T, E>(rows: Vec<M>) -> AppResult<Vec<T>>
where
    T: TryFrom<M, Error = E>,
    AppError: From<E>,
{
    rows.into_iter()
        .map(|row| T::try_from(row).map_err(AppError::from))
        .collect()
}

/// Map an optional row with the entity's single row conversion.
pub(crate) fn map_row<M, T, E>(row: Option<M>) -> AppResult<Option<T>>
where
    T: TryFrom<M, Error = E>,
    AppError: From<E>,
{
    row.map(T::try_from).transpose().map_err(AppError::from)
}
