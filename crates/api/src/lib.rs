pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::create_doh_routes;
pub use state::{AppState, ClientIpPolicy};
