use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::pledge::Pledge;
use crate::store::pledge_store::PledgeStore;

/// Shared application state: the store handle plus the session's in-memory
/// copy of the pledge collection. The collection is loaded once at startup
/// and flushed back through `save()` after every mutation; the file itself
/// has no cross-process locking (last write wins).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PledgeStore>,
    pub pledges: Arc<Mutex<Vec<Pledge>>>,
}

impl AppState {
    pub fn new(store: PledgeStore, pledges: Vec<Pledge>) -> Self {
        AppState {
            store: Arc::new(store),
            pledges: Arc::new(Mutex::new(pledges)),
        }
    }
}
