//! # whatis support
//!
//! Shared string helpers for the whatis crates.
//!
//! This crate provides:
//! - Comma-joined list rendering for function signatures
//! - Splitting of `::` type paths into namespace and name
//! - Indented layout for error chains

pub mod rendering;
