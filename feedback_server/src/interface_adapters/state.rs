use chrono::{Local, NaiveDateTime};
use std::sync::Arc;

use crate::domain::ports::Clock;

// Application state shared with the failure-translation middleware.
#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> so tests can inject a fixed clock.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

// System clock adapter: local wall time without an offset.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
