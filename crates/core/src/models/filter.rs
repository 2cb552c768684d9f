use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;
use super::movement::MovementType;

/// Raw `GetMovements` query parameters, exactly as the caller sent them.
///
/// Every field is optional here so that missing required parameters can be
/// reported together by [`MovementsRequest::validate`] instead of failing on
/// the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementsRequest {
    pub product_id: Option<i64>,
    #[serde(default, deserialize_with = "movement_type_filter")]
    pub movement_type: Option<MovementType>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub account_from: Option<String>,
    pub account_to: Option<String>,
    pub amount_min: Option<Decimal>,
    pub amount_max: Option<Decimal>,
}

impl MovementsRequest {
    /// Request for one page of a product's movements, no filters.
    pub fn page(product_id: i64, page_number: u32, page_size: u32) -> Self {
        Self {
            product_id: Some(product_id),
            page_number: Some(page_number),
            page_size: Some(page_size),
            ..Self::default()
        }
    }

    pub fn with_movement_type(mut self, movement_type: MovementType) -> Self {
        self.movement_type = Some(movement_type);
        self
    }

    pub fn with_account_from(mut self, account: impl Into<String>) -> Self {
        self.account_from = Some(account.into());
        self
    }

    pub fn with_account_to(mut self, account: impl Into<String>) -> Self {
        self.account_to = Some(account.into());
        self
    }

    pub fn with_amount_range(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.amount_min = min;
        self.amount_max = max;
        self
    }

    /// Check required parameters and filter consistency.
    ///
    /// Blank counterparty filters are treated as unset; nothing else is
    /// defaulted.
    pub fn validate(self) -> Result<ValidatedRequest, CoreError> {
        let mut problems = Vec::new();

        if self.product_id.is_none() {
            problems.push("productId is required".to_string());
        }
        match self.page_number {
            None => problems.push("pageNumber is required".to_string()),
            Some(0) => problems.push("pageNumber must be at least 1".to_string()),
            Some(_) => {}
        }
        match self.page_size {
            None => problems.push("pageSize is required".to_string()),
            Some(0) => problems.push("pageSize must be at least 1".to_string()),
            Some(_) => {}
        }
        if let (Some(min), Some(max)) = (self.amount_min, self.amount_max) {
            if min > max {
                problems.push(format!("amountMin ({min}) must not exceed amountMax ({max})"));
            }
        }

        match (self.product_id, self.page_number, self.page_size) {
            (Some(product_id), Some(page_number), Some(page_size)) if problems.is_empty() => {
                Ok(ValidatedRequest {
                    product_id,
                    page_number,
                    page_size,
                    movement_type: self.movement_type,
                    account_from: non_blank(self.account_from),
                    account_to: non_blank(self.account_to),
                    amount_min: self.amount_min,
                    amount_max: self.amount_max,
                })
            }
            _ => Err(CoreError::Validation(problems.join("; "))),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// `movementType` filter: any casing of a variant name; blank means unset.
fn movement_type_filter<'de, D>(deserializer: D) -> Result<Option<MovementType>, D::Error>
where
    D: Deserializer<'de>,
{
    match non_blank(Option::<String>::deserialize(deserializer)?) {
        Some(name) => MovementType::from_str(&name)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// A request that passed validation. Required parameters are no longer optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub product_id: i64,
    pub page_number: u32,
    pub page_size: u32,
    pub movement_type: Option<MovementType>,
    pub account_from: Option<String>,
    pub account_to: Option<String>,
    pub amount_min: Option<Decimal>,
    pub amount_max: Option<Decimal>,
}

impl ValidatedRequest {
    /// Build the upstream arguments for the resolved account.
    pub fn into_query(self, account_number: String) -> MovementQuery {
        MovementQuery {
            page_number: Some(self.page_number),
            page_size: Some(self.page_size),
            account_number: Some(account_number),
            movement_type: self.movement_type,
            account_from: self.account_from,
            account_to: self.account_to,
            amount_min: self.amount_min,
            amount_max: self.amount_max,
        }
    }
}

/// Arguments of one upstream `get_movements` call.
///
/// `None` means "no filter on this dimension". Unset values are omitted when
/// encoded as a query string, never sent as zero or "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movement_type: Option<MovementType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_min: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_max: Option<Decimal>,
}

impl MovementQuery {
    /// True when `amount` lies inside the (optional) amount bounds.
    pub fn amount_in_range(&self, amount: Decimal) -> bool {
        self.amount_min.map_or(true, |min| amount >= min)
            && self.amount_max.map_or(true, |max| amount <= max)
    }
}
