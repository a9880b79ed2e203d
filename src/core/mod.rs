//! Core library components.
//!
//! The two checks and the types they share. Nothing here prints; the
//! `cli` module owns stdout.

pub mod constants;
pub mod kms;
pub mod tls;
pub mod types;
