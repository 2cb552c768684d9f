//! Shared state handed to every handler.

use movements_core::{errors::CoreError, models::settings::Settings, MovementsCore};

pub const SERVICE_NAME: &str = "movements-server";

/// Read-only after construction; handlers only borrow it.
#[derive(Debug)]
pub struct AppState {
    pub core: MovementsCore,
}

impl AppState {
    pub fn new(core: MovementsCore) -> Self {
        Self { core }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, CoreError> {
        Ok(Self::new(MovementsCore::from_settings(settings)?))
    }
}
