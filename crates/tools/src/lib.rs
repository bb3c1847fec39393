//! Developer tooling: read-only inspection of the world and rendered frames.
//!
//! # Invariants
//! - Inspectors never mutate what they inspect.

mod inspector;

pub use inspector::{FrameReport, WorldInspector, WorldSummary};

pub fn crate_info() -> &'static str {
    "tilecast-tools v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}
