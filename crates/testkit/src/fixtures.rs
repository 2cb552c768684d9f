//! Account numbers shared by seed data and assertions.
//!
//! Tests receive an `AccountFixtures` value instead of reading global
//! constants, so a test can swap any account without affecting others.

use movements_core::services::account_resolver::{MovementClassifier, DEFAULT_FISCAL_TRANSFER_ACCOUNT};

/// Immutable set of accounts a test scenario works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountFixtures {
    /// Account of product 1; the account being queried.
    pub customer: String,
    /// Customer's own account at another bank (deposits / withdrawals).
    pub customer_nominated: String,
    pub interest: String,
    pub fee: String,
    pub tax: String,
    /// Well-known fiscal-transfer counterparty.
    pub fiscal_transfer: String,
    /// Account of product 2.
    pub secondary_product: String,
}

impl AccountFixtures {
    pub fn standard() -> Self {
        Self {
            customer: "NL91FAKE0417164300".to_string(),
            customer_nominated: "NL20INGB0001234567".to_string(),
            interest: "NL13FAKE0000000100".to_string(),
            fee: "NL86FAKE0000000200".to_string(),
            tax: "NL59FAKE0000000300".to_string(),
            fiscal_transfer: DEFAULT_FISCAL_TRANSFER_ACCOUNT.to_string(),
            secondary_product: "NL54FAKE0062046222".to_string(),
        }
    }

    /// Same fixtures with a different customer account.
    pub fn with_customer(mut self, account: impl Into<String>) -> Self {
        self.customer = account.into();
        self
    }

    /// Classifier that knows this scenario's fiscal-transfer account.
    pub fn classifier(&self) -> MovementClassifier {
        MovementClassifier::new(self.fiscal_transfer.clone())
    }
}

impl Default for AccountFixtures {
    fn default() -> Self {
        Self::standard()
    }
}
