use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Category of an account movement.
///
/// `Interest`, `Fee` and `Tax` are explicit tags set by the upstream source.
/// `Incoming`, `Outgoing` and `FiscalTransfer` describe money flow and are
/// mostly useful as query filters; see `AccountResolver::matches`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MovementType {
    #[default]
    Unknown,
    Interest,
    Fee,
    Tax,
    Incoming,
    Outgoing,
    FiscalTransfer,
}

impl MovementType {
    /// Every variant, in declaration order.
    pub const ALL: [MovementType; 7] = [
        MovementType::Unknown,
        MovementType::Interest,
        MovementType::Fee,
        MovementType::Tax,
        MovementType::Incoming,
        MovementType::Outgoing,
        MovementType::FiscalTransfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Unknown => "Unknown",
            MovementType::Interest => "Interest",
            MovementType::Fee => "Fee",
            MovementType::Tax => "Tax",
            MovementType::Incoming => "Incoming",
            MovementType::Outgoing => "Outgoing",
            MovementType::FiscalTransfer => "FiscalTransfer",
        }
    }
}

impl std::fmt::Display for MovementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MovementType {
    type Err = CoreError;

    /// Case-insensitive variant name lookup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MovementType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Validation(format!("unknown movement type '{s}'")))
    }
}

/// A single recorded change to an account's balance.
///
/// `account` is always the account that was queried ("this side").
/// `account_from` / `account_to` carry the real money flow and may both
/// differ from `account`. A negative `amount` debits `account`, a positive
/// one credits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub movement_id: i64,
    pub account: String,
    pub movement_type: MovementType,
    pub amount: Decimal,
    pub account_from: String,
    pub account_to: String,
}

impl Movement {
    /// True when money enters `account`.
    pub fn enters_account(&self) -> bool {
        self.account_to == self.account
    }

    /// True when money leaves `account`.
    pub fn leaves_account(&self) -> bool {
        self.account_from == self.account
    }
}

/// One page of movements as returned by the upstream provider.
///
/// The service never re-sorts or trims `movements`; ordering is the
/// provider's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedMovements {
    pub page_number: u32,
    pub page_size: u32,
    #[serde(default)]
    pub movements: Vec<Movement>,
}

impl PagedMovements {
    pub fn new(page_number: u32, page_size: u32, movements: Vec<Movement>) -> Self {
        Self {
            page_number,
            page_size,
            movements,
        }
    }

    /// Number of movements on this page.
    pub fn len(&self) -> usize {
        self.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }

    /// True when the page holds more movements than its declared size.
    pub fn exceeds_page_size(&self) -> bool {
        self.movements.len() > self.page_size as usize
    }
}
