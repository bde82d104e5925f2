pub mod dns;

pub use dns::{ProxyDnsQueryUseCase, ResolveJsonQueryUseCase};
