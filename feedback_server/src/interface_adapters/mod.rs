// Interface adapters: HTTP wire types, failure translation, and routing.

pub mod failures;
pub mod handlers;
pub mod middleware;
pub mod protocol;
pub mod routes;
pub mod state;
