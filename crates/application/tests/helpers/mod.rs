mod mock_upstream;

#[allow(unused_imports)]
pub use mock_upstream::{wire_query, MockUpstreamResolver};
