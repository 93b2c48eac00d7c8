//! Type descriptors.
//!
//! [`TypeDescriptor`] is the shape of a type as far as rendering is
//! concerned: a leaf (primitive or named) or a composite that nests
//! further descriptors.

use std::borrow::Cow;
use std::fmt;

use crate::error::{Result, WhatisError};

/// Structural description of a type.
///
/// # Examples
/// ```
/// use whatis_core::TypeDescriptor;
///
/// let item = TypeDescriptor::named("app.models", "Item");
/// let map = TypeDescriptor::map(
///     TypeDescriptor::primitive("string"),
///     TypeDescriptor::pointer(item),
/// );
/// assert_eq!(map.to_string(), "map[string]*app.models.Item");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// Built-in type known by its bare name (`i32`, `bool`).
    Primitive {
        name: Cow<'static, str>,
    },

    /// User-defined type living in a dotted namespace.
    Named {
        namespace: Cow<'static, str>,
        name: Cow<'static, str>,
    },

    /// Indirection to a single value (`*T`).
    Pointer(Box<TypeDescriptor>),

    /// Array with a length fixed by the type (`[N]T`).
    FixedArray {
        len: usize,
        elem: Box<TypeDescriptor>,
    },

    /// Growable or unsized sequence (`[]T`).
    Sequence(Box<TypeDescriptor>),

    /// Associative map (`map[K]V`).
    Map {
        key: Box<TypeDescriptor>,
        value: Box<TypeDescriptor>,
    },

    /// Queue restricted to a communication direction.
    Chan {
        dir: ChanDir,
        elem: Box<TypeDescriptor>,
    },

    /// Callable with positional parameters and results.
    Function {
        name: Option<Cow<'static, str>>,
        params: Vec<TypeDescriptor>,
        results: Vec<TypeDescriptor>,
    },
}

impl TypeDescriptor {
    pub fn primitive(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Primitive { name: name.into() }
    }

    pub fn named(
        namespace: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::Named {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Builds a leaf from a Rust type path such as `std::any::type_name` returns.
    ///
    /// Single-segment paths become primitives, anything else a named type
    /// whose namespace is the dotted module path.
    ///
    /// ```
    /// use whatis_core::TypeDescriptor;
    ///
    /// assert_eq!(
    ///     TypeDescriptor::from_type_path("core::num::error::ParseIntError"),
    ///     TypeDescriptor::named("core.num.error", "ParseIntError"),
    /// );
    /// assert_eq!(TypeDescriptor::from_type_path("u8"), TypeDescriptor::primitive("u8"));
    /// ```
    pub fn from_type_path(path: &'static str) -> Self {
        let (namespace, name) = whatis_support::rendering::split_type_path(path);
        if namespace.is_empty() {
            Self::primitive(name)
        } else {
            Self::named(namespace, name)
        }
    }

    pub fn pointer(elem: TypeDescriptor) -> Self {
        Self::Pointer(Box::new(elem))
    }

    pub fn array(len: usize, elem: TypeDescriptor) -> Self {
        Self::FixedArray {
            len,
            elem: Box::new(elem),
        }
    }

    pub fn sequence(elem: TypeDescriptor) -> Self {
        Self::Sequence(Box::new(elem))
    }

    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn chan(dir: ChanDir, elem: TypeDescriptor) -> Self {
        Self::Chan {
            dir,
            elem: Box::new(elem),
        }
    }

    /// An anonymous function signature.
    pub fn function(params: Vec<TypeDescriptor>, results: Vec<TypeDescriptor>) -> Self {
        Self::Function {
            name: None,
            params,
            results,
        }
    }

    /// A function signature carrying its declared name.
    pub fn named_function(
        name: impl Into<Cow<'static, str>>,
        params: Vec<TypeDescriptor>,
        results: Vec<TypeDescriptor>,
    ) -> Self {
        Self::Function {
            name: Some(name.into()),
            params,
            results,
        }
    }

    /// Short name of the variant, used as a tracing field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Primitive { .. } => "primitive",
            Self::Named { .. } => "named",
            Self::Pointer(_) => "pointer",
            Self::FixedArray { .. } => "array",
            Self::Sequence(_) => "sequence",
            Self::Map { .. } => "map",
            Self::Chan { .. } => "chan",
            Self::Function { .. } => "func",
        }
    }

    /// Returns `true` for primitive and named leaves.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Primitive { .. } | Self::Named { .. })
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render(self))
    }
}

/// Permitted communication direction of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChanDir {
    /// Receive-only (`<-chan T`).
    Recv,
    /// Send-only (`chan<- T`).
    Send,
    /// Both directions (`chan T`).
    Both,
}

// Indexed by `ChanDir::bits() - 1`.
const CHAN_TOKENS: [&str; 3] = ["<-chan", "chan<-", "chan"];

impl ChanDir {
    /// The token written before the element type.
    #[inline]
    pub fn token(self) -> &'static str {
        CHAN_TOKENS[usize::from(self.bits() - 1)]
    }

    /// Raw encoding: receive = 1, send = 2, both = 3 (receive | send).
    #[inline]
    pub fn bits(self) -> u8 {
        match self {
            ChanDir::Recv => 1,
            ChanDir::Send => 2,
            ChanDir::Both => 3,
        }
    }
}

impl TryFrom<u8> for ChanDir {
    type Error = WhatisError;

    fn try_from(bits: u8) -> Result<Self> {
        match bits {
            1 => Ok(ChanDir::Recv),
            2 => Ok(ChanDir::Send),
            3 => Ok(ChanDir::Both),
            other => Err(WhatisError::UnknownChanDir(other)),
        }
    }
}

impl fmt::Display for ChanDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
