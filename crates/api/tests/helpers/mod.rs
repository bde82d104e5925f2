mod mock_upstream;

#[allow(unused_imports)]
pub use mock_upstream::{
    probe_body, query_without_opt, test_app, MockUpstreamResolver, JSON_ANSWER, WIRE_ANSWER,
};
