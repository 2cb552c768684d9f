//! Test harness for the movements service: account fixtures, deterministic
//! seed data, a recording mock upstream and page assertions.

pub mod expectations;
pub mod fixtures;
pub mod mock_provider;
pub mod seed;

pub use expectations::{assert_pages_equal, expected_page, legacy_selection};
pub use fixtures::AccountFixtures;
pub use mock_provider::MockMovementsProvider;
pub use seed::{seed_movements, seed_products, standard_movements, DEFAULT_BASE_OFFSET, MOVEMENTS_PER_UNIT};
