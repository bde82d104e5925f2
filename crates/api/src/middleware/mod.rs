pub mod probe_guard;

pub use probe_guard::reject_probe;
