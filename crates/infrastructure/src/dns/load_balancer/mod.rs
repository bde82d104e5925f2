pub mod pool;
pub mod race;
pub mod sequential;
pub mod strategy;

pub use pool::PoolManager;
pub use race::RaceStrategy;
pub use sequential::SequentialStrategy;
pub use strategy::{QueryContext, Strategy};
