pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use std::sync::Arc;

use errors::CoreError;
use models::{filter::MovementsRequest, movement::PagedMovements, settings::Settings};
use providers::{
    http_client::HttpMovementsProvider,
    in_memory::InMemoryProductStore,
    traits::{MovementsProvider, ProductStore},
};
use services::{
    account_resolver::{AccountResolver, MovementClassifier},
    movement_service::MovementService,
};

/// Main entry point for the movements core library.
/// Wires a product store and an upstream provider into the query service.
#[must_use]
pub struct MovementsCore {
    service: MovementService,
}

impl std::fmt::Debug for MovementsCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovementsCore")
            .field(
                "fiscal_transfer_account",
                &self.service.resolver().classifier().fiscal_transfer_account(),
            )
            .finish()
    }
}

impl MovementsCore {
    /// Build from explicit collaborators (tests, embedding).
    pub fn new(
        store: Arc<dyn ProductStore>,
        provider: Arc<dyn MovementsProvider>,
        classifier: MovementClassifier,
    ) -> Self {
        let resolver = AccountResolver::new(store, classifier);
        Self {
            service: MovementService::new(resolver, provider),
        }
    }

    /// Build the production wiring: HTTP upstream client plus the product
    /// table from `settings.products_file` (empty when not configured).
    pub fn from_settings(settings: &Settings) -> Result<Self, CoreError> {
        let store = match &settings.products_file {
            Some(path) => InMemoryProductStore::load_from_file(path)?,
            None => InMemoryProductStore::new(),
        };
        let provider = HttpMovementsProvider::from_settings(settings);
        Ok(Self::new(
            Arc::new(store),
            Arc::new(provider),
            MovementClassifier::new(settings.fiscal_transfer_account.clone()),
        ))
    }

    /// Run one `GetMovements` query.
    pub async fn get_movements(&self, request: MovementsRequest) -> Result<PagedMovements, CoreError> {
        self.service.get_movements(request).await
    }

    /// External account for a product.
    pub async fn resolve_account(&self, product_id: i64) -> Result<String, CoreError> {
        self.service.resolver().resolve(product_id).await
    }

    pub fn service(&self) -> &MovementService {
        &self.service
    }
}
