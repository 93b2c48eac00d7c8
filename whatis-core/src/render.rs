//! # The Type Renderer
//!
//! Turns a [`TypeDescriptor`] into a diagnostic string by recursive
//! descent: composites prefix or wrap the rendering of their element
//! types, leaves print their qualified name.
//!
//! ```text
//! Pointer     *T
//! FixedArray  [N]T
//! Sequence    []T
//! Map         map[K]V
//! Chan        <-chan T | chan<- T | chan T
//! Function    func name(P1, P2) (R1, R2) {}
//! Leaf        namespace.Name | name | ¯\_(ツ)_/¯
//! ```
//!
//! The output is a diagnostic string, not a parseable type grammar.

use tracing::trace;

use whatis_support::rendering::render_list;

use crate::describe::{Describe, Inspect};
use crate::descriptor::TypeDescriptor;

/// Returned whenever there is no concrete type information.
pub const UNKNOWN: &str = r"¯\_(ツ)_/¯";

/// Describes the static type of `value`.
///
/// # Examples
/// ```
/// use whatis_core::describe;
///
/// let counts = vec![[0u8; 4]];
/// assert_eq!(describe(&counts), "[][4]u8");
/// assert_eq!(describe(&&counts), "*[][4]u8");
/// ```
pub fn describe<T: Describe + ?Sized>(_value: &T) -> String {
    describe_type::<T>()
}

/// Describes `T` without needing a value.
pub fn describe_type<T: Describe + ?Sized>() -> String {
    describe_descriptor(&T::type_descriptor())
}

/// Describes a value that may be absent.
///
/// `None` plays the role of an empty dynamic value and renders as
/// [`UNKNOWN`].
///
/// ```
/// use whatis_core::{describe_value, UNKNOWN};
///
/// let flag = true;
/// assert_eq!(describe_value(Some(&flag)), "bool");
/// assert_eq!(describe_value(None), UNKNOWN);
/// ```
pub fn describe_value(value: Option<&dyn Inspect>) -> String {
    match value {
        Some(value) => describe_descriptor(&value.descriptor()),
        None => {
            trace!("described absent value");
            UNKNOWN.to_string()
        }
    }
}

/// Renders `descriptor`, falling back to [`UNKNOWN`] for an empty result.
pub fn describe_descriptor(descriptor: &TypeDescriptor) -> String {
    let rendered = render(descriptor);
    trace!(
        kind = descriptor.kind(),
        leaf = descriptor.is_leaf(),
        rendered = %rendered,
        "described type"
    );
    if rendered.is_empty() {
        UNKNOWN.to_string()
    } else {
        rendered
    }
}

/// Recursively renders a descriptor.
pub fn render(descriptor: &TypeDescriptor) -> String {
    match descriptor {
        TypeDescriptor::Pointer(elem) => format!("*{}", render(elem)),
        TypeDescriptor::FixedArray { len, elem } => format!("[{len}]{}", render(elem)),
        TypeDescriptor::Sequence(elem) => format!("[]{}", render(elem)),
        TypeDescriptor::Map { key, value } => {
            format!("map[{}]{}", render(key), render(value))
        }
        TypeDescriptor::Chan { dir, elem } => format!("{} {}", dir.token(), render(elem)),
        TypeDescriptor::Function {
            name,
            params,
            results,
        } => render_function(name.as_deref(), params, results),
        TypeDescriptor::Primitive { name } => render_leaf("", name),
        TypeDescriptor::Named { namespace, name } => render_leaf(namespace, name),
    }
}

fn render_leaf(namespace: &str, name: &str) -> String {
    if !namespace.is_empty() {
        format!("{namespace}.{name}")
    } else if !name.is_empty() {
        name.to_string()
    } else {
        UNKNOWN.to_string()
    }
}

fn render_function(
    name: Option<&str>,
    params: &[TypeDescriptor],
    results: &[TypeDescriptor],
) -> String {
    let mut out = match name {
        Some(name) if !name.is_empty() => format!("func {name}("),
        _ => "func (".to_string(),
    };

    out.push_str(&render_list(&params.iter().map(render).collect::<Vec<_>>()));
    out.push(')');

    match results {
        [] => {}
        [single] => {
            out.push(' ');
            out.push_str(&render(single));
        }
        many => {
            out.push_str(" (");
            out.push_str(&render_list(&many.iter().map(render).collect::<Vec<_>>()));
            out.push(')');
        }
    }

    out.push_str(" {}");
    out
}
