//! URL validation logic
//!
//! Structural checks on extracted candidates and HTTP liveness probes.

pub mod syntax;
pub mod verifier;

// Re-export commonly used items
pub use syntax::is_valid_url;
pub use verifier::{HttpVerifier, ProbeUrl};
