//! Core type and error-chain rendering for whatis.

pub mod cause;
pub mod chain;
pub mod describe;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod render;

pub use chain::{ChainRenderer, describe_error_chain, describe_error_chain_of};
pub use describe::{Describe, Inspect, Results};
pub use descriptor::{ChanDir, TypeDescriptor};
pub use error::{Result, WhatisError};
pub use registry::{ErrorTypeRegistration, ErrorTypes};
pub use render::{UNKNOWN, describe, describe_descriptor, describe_type, describe_value, render};

#[doc(hidden)]
pub use inventory;
