use std::sync::Arc;

use farelens_core::airports::AirportDirectory;
use tokio::sync::RwLock;

use crate::history::SearchHistoryEntry;
use crate::saved::SavedFlight;
use crate::supplier::SupplierClient;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<AirportDirectory>,
    pub supplier: Arc<dyn SupplierClient>,
    /// Saved flights, newest first. Per-process, like the browser
    /// localStorage it replaces.
    pub saved: Arc<RwLock<Vec<SavedFlight>>>,
    /// Recent searches, newest first, capped.
    pub history: Arc<RwLock<Vec<SearchHistoryEntry>>>,
}

impl AppState {
    pub fn new(directory: Arc<AirportDirectory>, supplier: Arc<dyn SupplierClient>) -> Self {
        Self {
            directory,
            supplier,
            saved: Arc::new(RwLock::new(Vec::new())),
            history: Arc::new(RwLock::new(Vec::new())),
        }
    }
}
