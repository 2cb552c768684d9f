pub mod api_types;
pub mod error;
pub mod routes;
pub mod state;
