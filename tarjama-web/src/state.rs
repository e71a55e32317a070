use std::sync::Arc;
use tarjama::MachineTranslator;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<dyn MachineTranslator>,
}

impl AppState {
    pub fn new(translator: Arc<dyn MachineTranslator>) -> Self {
        Self { translator }
    }
}
