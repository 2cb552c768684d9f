use std::sync::Arc;
use tracing::{info, warn};

use crate::errors::CoreError;
use crate::models::filter::MovementsRequest;
use crate::models::movement::PagedMovements;
use crate::providers::traits::MovementsProvider;
use super::account_resolver::AccountResolver;

/// The `GetMovements` query: validate, resolve the product's account, ask the
/// upstream provider for exactly one page, hand the page back untouched.
///
/// Order of failure:
/// 1. invalid request → `Validation` (store and provider untouched)
/// 2. unknown product → `ProductNotFound` (provider untouched)
/// 3. provider failure → propagated as is, no retry
pub struct MovementService {
    resolver: AccountResolver,
    provider: Arc<dyn MovementsProvider>,
}

impl MovementService {
    pub fn new(resolver: AccountResolver, provider: Arc<dyn MovementsProvider>) -> Self {
        Self { resolver, provider }
    }

    pub fn resolver(&self) -> &AccountResolver {
        &self.resolver
    }

    pub async fn get_movements(&self, request: MovementsRequest) -> Result<PagedMovements, CoreError> {
        let request = request.validate()?;
        let product_id = request.product_id;
        let account = self.resolver.resolve(product_id).await?;

        let query = request.into_query(account.clone());
        info!(
            product_id,
            provider = self.provider.name(),
            movement_type = ?query.movement_type,
            page_number = ?query.page_number,
            page_size = ?query.page_size,
            "fetching movements"
        );

        let page = match self.provider.get_movements(&query).await {
            Ok(page) => page,
            Err(e) => {
                warn!(product_id, provider = self.provider.name(), error = %e, "upstream movements call failed");
                return Err(e);
            }
        };

        if page.exceeds_page_size() {
            warn!(
                product_id,
                returned = page.len(),
                page_size = page.page_size,
                "upstream page holds more movements than its page size"
            );
        }
        let foreign = page.movements.iter().filter(|m| m.account != account).count();
        if foreign > 0 {
            warn!(product_id, foreign, "upstream returned movements for another account");
        }

        Ok(page)
    }
}
