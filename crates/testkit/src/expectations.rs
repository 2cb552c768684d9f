//! Building expected pages and comparing them with what the service returned.

use movements_core::models::movement::{Movement, MovementType, PagedMovements};
use rust_decimal::Decimal;

use crate::fixtures::AccountFixtures;

/// Movements on `account` selected the way the legacy movements tests pick
/// their expected set for a movement-type filter:
///
/// - `Incoming`: sent by the fiscal-transfer account;
/// - `FiscalTransfer`: non-negative amount (sign-based, kept for
///   compatibility with existing upstream fixtures);
/// - anything else: tag equality.
pub fn legacy_selection(
    movements: &[Movement],
    account: &str,
    movement_type: MovementType,
    accounts: &AccountFixtures,
) -> Vec<Movement> {
    movements
        .iter()
        .filter(|m| m.account == account)
        .filter(|m| match movement_type {
            MovementType::Incoming => m.account_from == accounts.fiscal_transfer,
            MovementType::FiscalTransfer => m.amount >= Decimal::ZERO,
            other => m.movement_type == other,
        })
        .cloned()
        .collect()
}

/// Envelope around `movements` with the requested page metadata.
pub fn expected_page(page_number: u32, page_size: u32, movements: Vec<Movement>) -> PagedMovements {
    PagedMovements::new(page_number, page_size, movements)
}

/// Assert two pages are equal: metadata plus the full ordered movement list,
/// every field of every movement. Reports the first differing index.
#[track_caller]
pub fn assert_pages_equal(expected: &PagedMovements, actual: &PagedMovements) {
    assert_eq!(expected.page_number, actual.page_number, "pageNumber differs");
    assert_eq!(expected.page_size, actual.page_size, "pageSize differs");
    assert_eq!(
        expected.movements.len(),
        actual.movements.len(),
        "movement count differs"
    );
    for (index, (want, got)) in expected.movements.iter().zip(&actual.movements).enumerate() {
        assert_eq!(want, got, "movement #{index} differs");
    }
}
