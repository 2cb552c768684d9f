pub mod filter;
pub mod movement;
pub mod product;
pub mod settings;
