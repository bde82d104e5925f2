pub mod config;
pub mod logging;

pub use config::{layer_overrides, load_config, EnvOverrides};
pub use logging::init_logging;
