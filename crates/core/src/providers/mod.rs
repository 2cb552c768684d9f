pub mod traits;

// Provider / store implementations
pub mod http_client;
pub mod in_memory;
