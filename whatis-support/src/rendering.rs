//! Text rendering utilities for type shapes and error chains.
//!
//! Provides helpers to join rendered types, split Rust type paths
//! into a dotted namespace and a bare name, and lay out causal
//! chains one indented line per link.

/// Renders a list of already-rendered items separated by `", "`.
///
/// # Examples
/// ```
/// use whatis_support::rendering::render_list;
///
/// assert_eq!(render_list(&["int", "string", "bool"]), "int, string, bool");
/// let empty: [&str; 0] = [];
/// assert_eq!(render_list(&empty), "");
/// ```
pub fn render_list(items: &[impl AsRef<str>]) -> String {
    items
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Splits a `::` separated type path into a dotted namespace and a name.
///
/// The namespace is empty when the path has a single segment. Generic
/// arguments are dropped before splitting, so `a::B<c::D>` names `B`.
///
/// ```
/// use whatis_support::rendering::split_type_path;
///
/// let (namespace, name) = split_type_path("my_app::services::user::UserService");
/// assert_eq!(namespace, "my_app.services.user");
/// assert_eq!(name, "UserService");
///
/// let (namespace, name) = split_type_path("u8");
/// assert_eq!(namespace, "");
/// assert_eq!(name, "u8");
/// ```
pub fn split_type_path(path: &str) -> (String, &str) {
    let path = match path.find('<') {
        Some(generics) => &path[..generics],
        None => path,
    };
    match path.rsplit_once("::") {
        Some((namespace, name)) => (dotted(namespace), name),
        None => (String::new(), path),
    }
}

/// Rewrites a `::` module path with `.` separators.
///
/// ```
/// use whatis_support::rendering::dotted;
///
/// assert_eq!(dotted("app::models"), "app.models");
/// ```
pub fn dotted(module_path: &str) -> String {
    module_path.replace("::", ".")
}

/// Returns `unit` repeated `depth` times.
pub fn indent(depth: usize, unit: &str) -> String {
    unit.repeat(depth)
}

/// One link of a causal chain, ready for layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEntry {
    /// Rendered type of the link
    pub type_name: String,
    /// The link's own message
    pub message: String,
}

/// Lays out a causal chain, one line per entry.
///
/// Line `i` is `unit` repeated `i` times, the type name, then the
/// message in square brackets. Lines are joined by `\n` with no
/// trailing newline.
///
/// ```text
/// app.Wrapped[outer - inner]
///   app.Message[inner]
/// ```
pub fn render_chain_indented(entries: &[ChainEntry], unit: &str) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(depth, entry)| {
            format!(
                "{}{}[{}]",
                indent(depth, unit),
                entry.type_name,
                entry.message,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
