pub mod load_balancer;
pub mod transport;

pub use load_balancer::{PoolManager, RaceStrategy, SequentialStrategy, Strategy};
pub use transport::{HttpsTransport, UpstreamTransport};
