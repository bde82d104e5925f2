//! Ferrous DoH Domain Layer
pub mod client_address;
pub mod config;
pub mod errors;
pub mod wire;

pub use client_address::ClientAddress;
pub use config::{Config, ConfigError, ConfigOverrides, UpstreamStrategy};
pub use errors::{DomainError, UpstreamFailure};
pub use wire::{EcsPrefixes, MessageRewriter};
