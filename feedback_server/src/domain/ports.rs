use chrono::NaiveDateTime;
use std::sync::Arc;

// Port for reading the server's local wall clock (no timezone).
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

// Lets shared clock handles from app state be injected directly.
impl<C> Clock for Arc<C>
where
    C: Clock + ?Sized,
{
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
