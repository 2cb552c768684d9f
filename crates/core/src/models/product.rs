use serde::{Deserialize, Serialize};

/// Kind of financial product a customer holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    SavingsRetirement,
    Savings,
    Investment,
    Payment,
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductType::SavingsRetirement => write!(f, "SavingsRetirement"),
            ProductType::Savings => write!(f, "Savings"),
            ProductType::Investment => write!(f, "Investment"),
            ProductType::Payment => write!(f, "Payment"),
        }
    }
}

/// A product record. Every product maps to exactly one external account,
/// which is the account the upstream provider is queried with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i64,
    pub product_type: ProductType,
    pub external_account: String,
}

impl Product {
    pub fn new(product_id: i64, product_type: ProductType, external_account: impl Into<String>) -> Self {
        Self {
            product_id,
            product_type,
            external_account: external_account.into(),
        }
    }
}
