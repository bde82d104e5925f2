mod doh_server_mock;
mod scripted_transport;

#[allow(unused_imports)]
pub use doh_server_mock::MockDohServer;
#[allow(unused_imports)]
pub use scripted_transport::{endpoints, Reply, ScriptedTransport};
