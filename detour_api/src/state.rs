use parking_lot::RwLock;

use crate::history::RouteHistory;

pub struct AppState {
    pub history: RwLock<RouteHistory>,
}
