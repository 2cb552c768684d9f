//! Deterministic seed data.
//!
//! Every unit `i` yields six movements with ids `i * 6 + base_offset + k`
//! (k = 0..6), amounts shifted by `i` so records stay distinguishable:
//!
//! | k | scenario        | type     | amount       | from → to              |
//! |---|-----------------|----------|--------------|------------------------|
//! | 0 | interest        | Interest | 0.42 + i     | interest → customer    |
//! | 1 | fee             | Fee      | -0.59 - i    | customer → fee         |
//! | 2 | tax             | Tax      | -200.77 - i  | customer → tax         |
//! | 3 | fiscal transfer | Unknown  | 17000 + i    | fiscal → customer      |
//! | 4 | incoming        | Interest | 500 + i      | nominated → customer   |
//! | 5 | outgoing        | Interest | -700 - i     | customer → nominated   |
//!
//! The tags on rows 3-5 mirror what the upstream source actually sends.

use movements_core::models::movement::{Movement, MovementType};
use movements_core::models::product::{Product, ProductType};
use rust_decimal::Decimal;

use crate::fixtures::AccountFixtures;

/// Movements generated per unit.
pub const MOVEMENTS_PER_UNIT: usize = 6;

/// First movement id when no other offset is requested.
pub const DEFAULT_BASE_OFFSET: i64 = 1000;

pub fn seed_movements(units: usize, base_offset: i64, accounts: &AccountFixtures) -> Vec<Movement> {
    let customer = &accounts.customer;
    let mut movements = Vec::with_capacity(units * MOVEMENTS_PER_UNIT);

    for i in 0..units {
        let step = Decimal::from(i as i64);
        let id = |k: i64| i as i64 * MOVEMENTS_PER_UNIT as i64 + base_offset + k;
        let movement = |k: i64, movement_type: MovementType, amount: Decimal, from: &String, to: &String| Movement {
            movement_id: id(k),
            account: customer.clone(),
            movement_type,
            amount,
            account_from: from.clone(),
            account_to: to.clone(),
        };

        movements.push(movement(
            0,
            MovementType::Interest,
            Decimal::new(42, 2) + step,
            &accounts.interest,
            customer,
        ));
        movements.push(movement(
            1,
            MovementType::Fee,
            Decimal::new(-59, 2) - step,
            customer,
            &accounts.fee,
        ));
        movements.push(movement(
            2,
            MovementType::Tax,
            Decimal::new(-20077, 2) - step,
            customer,
            &accounts.tax,
        ));
        movements.push(movement(
            3,
            MovementType::Unknown,
            Decimal::from(17000) + step,
            &accounts.fiscal_transfer,
            customer,
        ));
        movements.push(movement(
            4,
            MovementType::Interest,
            Decimal::from(500) + step,
            &accounts.customer_nominated,
            customer,
        ));
        movements.push(movement(
            5,
            MovementType::Interest,
            Decimal::from(-700) - step,
            customer,
            &accounts.customer_nominated,
        ));
    }

    movements
}

/// `seed_movements` with the default id offset.
pub fn standard_movements(units: usize, accounts: &AccountFixtures) -> Vec<Movement> {
    seed_movements(units, DEFAULT_BASE_OFFSET, accounts)
}

/// Product table: product 1 → customer account, product 2 → secondary account.
pub fn seed_products(accounts: &AccountFixtures) -> Vec<Product> {
    vec![
        Product::new(1, ProductType::SavingsRetirement, accounts.customer.clone()),
        Product::new(2, ProductType::SavingsRetirement, accounts.secondary_product.clone()),
    ]
}
