use std::sync::Arc;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::movement::{Movement, MovementType};
use crate::providers::traits::ProductStore;

/// Well-known account on the other side of fiscal transfers.
pub const DEFAULT_FISCAL_TRANSFER_ACCOUNT: &str = "NL02FISC0000000001";

/// Direction of money flow relative to the queried account, derived purely
/// from counterparties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One side of the movement is the fiscal-transfer account.
    FiscalTransfer,
    /// Money enters `account`.
    Incoming,
    /// Money leaves `account`.
    Outgoing,
    /// Neither side is `account`.
    Internal,
}

/// Classifies movements by counterparty. Amount sign is never consulted:
/// sign says debit/credit, not category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementClassifier {
    fiscal_transfer_account: String,
}

impl MovementClassifier {
    pub fn new(fiscal_transfer_account: impl Into<String>) -> Self {
        Self {
            fiscal_transfer_account: fiscal_transfer_account.into(),
        }
    }

    pub fn fiscal_transfer_account(&self) -> &str {
        &self.fiscal_transfer_account
    }

    pub fn direction(&self, movement: &Movement) -> Direction {
        if movement.account_from == self.fiscal_transfer_account
            || movement.account_to == self.fiscal_transfer_account
        {
            Direction::FiscalTransfer
        } else if movement.enters_account() {
            Direction::Incoming
        } else if movement.leaves_account() {
            Direction::Outgoing
        } else {
            Direction::Internal
        }
    }

    /// Does `movement` belong to the `wanted` movement-type filter?
    ///
    /// - `Interest`, `Fee`, `Tax`, `Unknown`: the source's tag, as is.
    /// - `Incoming`: sent by the fiscal-transfer account into `account`, or
    ///   tagged `Incoming`.
    /// - `Outgoing`: leaves `account` towards a regular counterparty, or tagged
    ///   `Outgoing`.
    /// - `FiscalTransfer`: tagged `FiscalTransfer`, or an untagged (`Unknown`)
    ///   movement touching the fiscal-transfer account.
    pub fn matches(&self, movement: &Movement, wanted: MovementType) -> bool {
        match wanted {
            MovementType::Interest | MovementType::Fee | MovementType::Tax | MovementType::Unknown => {
                movement.movement_type == wanted
            }
            MovementType::Incoming => {
                movement.movement_type == MovementType::Incoming
                    || (movement.account_from == self.fiscal_transfer_account
                        && movement.enters_account())
            }
            MovementType::Outgoing => {
                movement.movement_type == MovementType::Outgoing
                    || self.direction(movement) == Direction::Outgoing
            }
            MovementType::FiscalTransfer => {
                movement.movement_type == MovementType::FiscalTransfer
                    || (movement.movement_type == MovementType::Unknown
                        && self.direction(movement) == Direction::FiscalTransfer)
            }
        }
    }
}

impl Default for MovementClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_FISCAL_TRANSFER_ACCOUNT)
    }
}

/// Maps a product id to the external account the upstream is queried with.
///
/// Holds only shared read-only handles; safe to call concurrently.
pub struct AccountResolver {
    store: Arc<dyn ProductStore>,
    classifier: MovementClassifier,
}

impl AccountResolver {
    pub fn new(store: Arc<dyn ProductStore>, classifier: MovementClassifier) -> Self {
        Self { store, classifier }
    }

    /// External account of `product_id`, or `ProductNotFound`.
    pub async fn resolve(&self, product_id: i64) -> Result<String, CoreError> {
        let product = self
            .store
            .find_product_by_id(product_id)
            .await?
            .ok_or(CoreError::ProductNotFound(product_id))?;
        debug!(product_id, product_type = %product.product_type, "resolved product account");
        Ok(product.external_account)
    }

    pub fn classifier(&self) -> &MovementClassifier {
        &self.classifier
    }

    pub fn direction(&self, movement: &Movement) -> Direction {
        self.classifier.direction(movement)
    }

    pub fn matches(&self, movement: &Movement, wanted: MovementType) -> bool {
        self.classifier.matches(movement, wanted)
    }
}
