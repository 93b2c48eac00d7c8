//! # The Error Chain Renderer
//!
//! Walks an error and its [`source`](std::error::Error::source) chain,
//! writing one line per link:
//!
//! ```text
//! whatis_core.cause.Wrapped[loading profile - connection refused]
//!   whatis_core.cause.Message[connection refused]
//! ```
//!
//! Each link's type is looked up in an [`ErrorTypes`] registry. Behind a
//! `&dyn Error` the concrete type is otherwise unknowable, so unregistered
//! links render their type as [`UNKNOWN`]. [`describe_error_chain_of`] keeps
//! the static type of the head link and names it even when unregistered.
//!
//! The chain is followed until `source()` returns `None`. A cyclic
//! `source` relation never terminates.

use std::any::type_name;
use std::borrow::Cow;
use std::error::Error;

use tracing::{instrument, trace};

use whatis_support::rendering::{ChainEntry, render_chain_indented};

use crate::descriptor::TypeDescriptor;
use crate::registry::ErrorTypes;
use crate::render::{UNKNOWN, describe_descriptor};

/// Renders `err` and its causes with the default [`ChainRenderer`].
///
/// # Examples
/// ```
/// use whatis_core::cause::{Message, Wrapped};
/// use whatis_core::{describe_error_chain, UNKNOWN};
///
/// let inner = Message::new("disk full");
/// let outer = Wrapped::new(format!("saving - {inner}"), inner);
///
/// assert_eq!(
///     describe_error_chain(Some(&outer)),
///     "whatis_core.cause.Wrapped[saving - disk full]\n  whatis_core.cause.Message[disk full]"
/// );
/// assert_eq!(describe_error_chain(None), UNKNOWN);
/// ```
pub fn describe_error_chain(err: Option<&(dyn Error + 'static)>) -> String {
    ChainRenderer::default().render(err)
}

/// Like [`describe_error_chain`], but names the head link from its static type
/// when the registry does not know it.
///
/// ```
/// use whatis_core::describe_error_chain_of;
///
/// #[derive(Debug)]
/// struct Timeout;
///
/// impl std::fmt::Display for Timeout {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("timed out")
///     }
/// }
///
/// impl std::error::Error for Timeout {}
///
/// assert!(describe_error_chain_of(Some(&Timeout)).ends_with(".Timeout[timed out]"));
/// ```
pub fn describe_error_chain_of<E: Error + 'static>(err: Option<&E>) -> String {
    ChainRenderer::default().render_of(err)
}

/// Configurable error chain renderer.
///
/// ```rust,ignore
/// let text = ChainRenderer::new()
///     .indent_unit("\t")
///     .registry(&my_types)
///     .render(Some(&err));
/// ```
#[derive(Debug, Clone)]
pub struct ChainRenderer<'r> {
    indent_unit: Cow<'static, str>,
    registry: &'r ErrorTypes,
}

impl Default for ChainRenderer<'static> {
    fn default() -> Self {
        Self {
            indent_unit: Cow::Borrowed("  "),
            registry: ErrorTypes::global(),
        }
    }
}

impl ChainRenderer<'static> {
    /// Two-space indentation over the process-wide registry.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'r> ChainRenderer<'r> {
    /// Sets the string repeated once per depth level.
    pub fn indent_unit(mut self, unit: impl Into<Cow<'static, str>>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    /// Uses `registry` instead of the process-wide one.
    pub fn registry<'s>(self, registry: &'s ErrorTypes) -> ChainRenderer<'s> {
        ChainRenderer {
            indent_unit: self.indent_unit,
            registry,
        }
    }

    /// Renders `err` and every cause below it.
    ///
    /// Every link is named through the registry; links it does not know
    /// render their type as [`UNKNOWN`]. Prefer [`render_of`](Self::render_of)
    /// when the head error's concrete type is at hand.
    #[instrument(skip_all, name = "describe_error_chain")]
    pub fn render(&self, err: Option<&(dyn Error + 'static)>) -> String {
        let Some(err) = err else {
            trace!("described absent error");
            return UNKNOWN.to_string();
        };
        self.render_links(err, None)
    }

    /// Renders `err` and every cause below it, naming the head link from `E`.
    ///
    /// The registry is consulted first; an unregistered head falls back
    /// to the type path of `E`.
    #[instrument(skip_all, name = "describe_error_chain")]
    pub fn render_of<E: Error + 'static>(&self, err: Option<&E>) -> String {
        let Some(err) = err else {
            trace!("described absent error");
            return UNKNOWN.to_string();
        };
        let head = self
            .registry
            .describe(err)
            .unwrap_or_else(|| TypeDescriptor::from_type_path(type_name::<E>()));
        self.render_links(err, Some(head))
    }

    fn render_links(
        &self,
        head: &(dyn Error + 'static),
        mut head_descriptor: Option<TypeDescriptor>,
    ) -> String {
        let mut entries = Vec::new();
        let mut current = Some(head);

        while let Some(link) = current {
            let descriptor = head_descriptor
                .take()
                .or_else(|| self.registry.describe(link));
            let rendered_type = match descriptor {
                Some(descriptor) => describe_descriptor(&descriptor),
                None => UNKNOWN.to_string(),
            };
            trace!(depth = entries.len(), error_type = %rendered_type, "Chain link");

            entries.push(ChainEntry {
                type_name: rendered_type,
                message: link.to_string(),
            });
            current = link.source();
        }

        render_chain_indented(&entries, &self.indent_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cause::{Message, Wrapped};
    use crate::describe::Describe;

    #[derive(Debug, thiserror::Error)]
    #[error("rate limited")]
    struct Throttled;

    impl Describe for Throttled {
        fn type_descriptor() -> TypeDescriptor {
            TypeDescriptor::pointer(TypeDescriptor::named("net", "Throttled"))
        }
    }

    fn four_links() -> Wrapped {
        let e1 = Message::new("error 1");
        let e2 = Wrapped::new(format!("error 2 - {e1}"), e1);
        let e3 = Wrapped::new(format!("error 3 - {e2}"), e2);
        Wrapped::new(format!("error 4 - {e3}"), e3)
    }

    #[test]
    fn four_link_chain() {
        let e4 = four_links();

        assert_eq!(
            describe_error_chain(Some(&e4)),
            "whatis_core.cause.Wrapped[error 4 - error 3 - error 2 - error 1]\n\
             \x20 whatis_core.cause.Wrapped[error 3 - error 2 - error 1]\n\
             \x20   whatis_core.cause.Wrapped[error 2 - error 1]\n\
             \x20     whatis_core.cause.Message[error 1]"
        );
    }

    #[test]
    fn line_count_and_indent() {
        let e4 = four_links();
        let rendered = describe_error_chain(Some(&e4));
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        for (depth, line) in lines.iter().enumerate() {
            let leading = line.len() - line.trim_start().len();
            assert_eq!(leading, depth * 2);
        }
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn absent_error_is_unknown() {
        assert_eq!(describe_error_chain(None), UNKNOWN);
    }

    #[test]
    fn single_link() {
        let err = Message::new("alone");
        assert_eq!(
            describe_error_chain(Some(&err)),
            "whatis_core.cause.Message[alone]"
        );
    }

    #[test]
    fn unregistered_link_is_unknown() {
        let err = Wrapped::new("calling upstream", Throttled);
        assert_eq!(
            describe_error_chain(Some(&err)),
            format!("whatis_core.cause.Wrapped[calling upstream]\n  {UNKNOWN}[rate limited]")
        );
    }

    #[test]
    fn custom_registry() {
        let types = ErrorTypes::new();
        types.register::<Throttled>().unwrap();

        let err = Wrapped::new("calling upstream", Throttled);
        let rendered = ChainRenderer::new().registry(&types).render(Some(&err));

        assert_eq!(rendered, format!("{UNKNOWN}[calling upstream]\n  *net.Throttled[rate limited]"));
    }

    #[test]
    fn custom_indent_unit() {
        let inner = Message::new("inner");
        let err = Wrapped::new("outer", inner);
        let rendered = ChainRenderer::new().indent_unit("\t").render(Some(&err));

        assert_eq!(
            rendered,
            "whatis_core.cause.Wrapped[outer]\n\twhatis_core.cause.Message[inner]"
        );
    }

    #[test]
    fn std_error_inside_chain() {
        let parse = "nope".parse::<u16>().unwrap_err();
        let err = Wrapped::new(format!("reading port - {parse}"), parse);
        let rendered = describe_error_chain(Some(&err));
        let last = rendered.lines().last().unwrap();

        assert!(last.starts_with("  "));
        assert!(last.contains("ParseIntError["));
        assert!(last.ends_with("invalid digit found in string]"));
    }

    #[test]
    fn unregistered_head_named_from_static_type() {
        assert_eq!(
            describe_error_chain_of(Some(&Throttled)),
            "whatis_core.chain.tests.Throttled[rate limited]"
        );
        assert!(!describe_error_chain_of(Some(&Throttled)).contains(UNKNOWN));
    }

    #[test]
    fn registered_head_prefers_registry() {
        let types = ErrorTypes::new();
        types.register::<Throttled>().unwrap();

        let rendered = ChainRenderer::new().registry(&types).render_of(Some(&Throttled));
        assert_eq!(rendered, "*net.Throttled[rate limited]");
    }

    #[test]
    fn static_head_over_registered_causes() {
        let err = Wrapped::new("outer", Message::new("inner"));
        assert_eq!(
            describe_error_chain_of(Some(&err)),
            describe_error_chain(Some(&err))
        );
    }

    #[test]
    fn absent_static_error_is_unknown() {
        assert_eq!(describe_error_chain_of::<Message>(None), UNKNOWN);
    }
}
