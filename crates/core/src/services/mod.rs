pub mod account_resolver;
pub mod movement_service;
