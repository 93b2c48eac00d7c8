//! # whatis — what type is this?
//!
//! Debugging helpers that turn a value's type, or a chain of wrapped
//! errors, into a readable string.
//!
//! ```
//! use std::collections::HashMap;
//! use whatis::{describe, Describe};
//!
//! #[derive(Describe)]
//! #[describe(namespace = "app.models")]
//! struct Item;
//!
//! let index: HashMap<String, Box<Item>> = HashMap::new();
//! assert_eq!(describe(&index), "map[string]*app.models.Item");
//! ```

pub use whatis_core::*;
pub use whatis_macros::Describe;
pub use whatis_support::rendering;
