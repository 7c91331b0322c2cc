//! # Linesmith Core
//!
//! Core crate for Linesmith: math aliases and platform-agnostic input types
//! shared by the debug drawer and host integration crates.

pub mod input;
pub mod math;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the core version. Hosts call this once at startup.
pub fn init() {
    log::info!("Linesmith Core v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
