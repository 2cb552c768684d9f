use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::filter::MovementQuery;
use crate::models::movement::PagedMovements;
use crate::models::product::Product;

/// Source of account movements (the upstream movements provider).
///
/// The query service depends only on this trait, so the HTTP client, the
/// in-memory provider and test doubles are interchangeable.
#[async_trait]
pub trait MovementsProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch one page of movements. Pagination and filtering happen on the
    /// provider side; unset fields of `query` mean "no filter".
    async fn get_movements(&self, query: &MovementQuery) -> Result<PagedMovements, CoreError>;
}

/// Read-only lookup of products by id.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// `Ok(None)` when no product has this id.
    async fn find_product_by_id(&self, product_id: i64) -> Result<Option<Product>, CoreError>;
}
