//! Adapters - Ways of reaching the core from outside Rust

#[cfg(feature = "python")]
pub mod python;
