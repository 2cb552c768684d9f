use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

use crate::errors::CoreError;
use crate::models::filter::MovementQuery;
use crate::models::movement::{Movement, PagedMovements};
use crate::models::product::Product;
use crate::services::account_resolver::MovementClassifier;
use super::traits::{MovementsProvider, ProductStore};

/// Product table held in memory. Immutable once built, so lookups need no
/// locking.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductStore {
    products: HashMap<i64, Product>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a list of products. A later duplicate id replaces
    /// an earlier one.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.product_id, p)).collect(),
        }
    }

    /// Load a store from a JSON array of products.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let bytes = std::fs::read(path.as_ref())?;
        let products: Vec<Product> = serde_json::from_slice(&bytes)?;
        Ok(Self::from_products(products))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_product_by_id(&self, product_id: i64) -> Result<Option<Product>, CoreError> {
        Ok(self.products.get(&product_id).cloned())
    }
}

/// Movements provider backed by a fixed list of movements.
///
/// Applies every filter of the query and paginates locally, so it behaves
/// like a real upstream for local runs and end-to-end tests. A missing page
/// number means page 1; a missing page size means "everything on one page".
pub struct InMemoryMovementsProvider {
    movements: Vec<Movement>,
    classifier: MovementClassifier,
}

impl InMemoryMovementsProvider {
    pub fn new(movements: Vec<Movement>, classifier: MovementClassifier) -> Self {
        Self {
            movements,
            classifier,
        }
    }

    fn matches(&self, movement: &Movement, query: &MovementQuery) -> bool {
        query
            .account_number
            .as_ref()
            .map_or(true, |a| &movement.account == a)
            && query
                .movement_type
                .map_or(true, |t| self.classifier.matches(movement, t))
            && query
                .account_from
                .as_ref()
                .map_or(true, |a| &movement.account_from == a)
            && query
                .account_to
                .as_ref()
                .map_or(true, |a| &movement.account_to == a)
            && query.amount_in_range(movement.amount)
    }
}

#[async_trait]
impl MovementsProvider for InMemoryMovementsProvider {
    fn name(&self) -> &str {
        "InMemory"
    }

    async fn get_movements(&self, query: &MovementQuery) -> Result<PagedMovements, CoreError> {
        let selected: Vec<&Movement> = self
            .movements
            .iter()
            .filter(|m| self.matches(m, query))
            .collect();

        let page_number = query.page_number.unwrap_or(1).max(1);
        let page_size = match query.page_size {
            Some(size) => size,
            None => u32::try_from(selected.len()).unwrap_or(u32::MAX),
        };

        let skip = (page_number as usize - 1).saturating_mul(page_size as usize);
        let movements = selected
            .into_iter()
            .skip(skip)
            .take(page_size as usize)
            .cloned()
            .collect();

        Ok(PagedMovements::new(page_number, page_size, movements))
    }
}
