//! Component naming and the synthetic export declaration.

use std::path::Path;

/// Suffix of every generated component function name.
pub const COMPONENT_SUFFIX: &str = "__AstroComponent_";

/// Generates the default export that anchors type-checking of the body.
///
/// Produces output like:
/// ```text
/// export default function Card__AstroComponent_(_props: Record<string, any>): any {}
/// ```
pub(crate) fn export_declaration(component_name: &str) -> String {
    format!(
        "export default function {component_name}{COMPONENT_SUFFIX}(_props: Record<string, any>): any {{}}"
    )
}

/// Extracts a component name from a filename.
///
/// Given a path like `/path/to/my-card.astro`, returns `"MyCard"`.
/// Returns an empty string if no valid name can be extracted, which leaves
/// the generated function with the bare suffix as its name.
pub fn component_name_from_path(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .map(sanitize_component_name)
        .unwrap_or_default()
}

/// Sanitizes a component name to be a valid TypeScript identifier.
/// - Removes leading non-alphabetic characters (like `+` or digits)
/// - Converts to PascalCase, starting a new word after `-`, `.` or whitespace
/// - Drops any other character that cannot appear in an identifier
fn sanitize_component_name(name: &str) -> String {
    let name = name.trim_start_matches(|c: char| !c.is_alphabetic());

    let mut result = String::with_capacity(name.len());
    let mut capitalize_next = true;

    for c in name.chars() {
        if c.is_alphanumeric() || c == '_' {
            if capitalize_next {
                result.extend(c.to_uppercase());
                capitalize_next = false;
            } else {
                result.push(c);
            }
        } else if c == '-' || c == '.' || c.is_whitespace() {
            capitalize_next = true;
        }
    }

    result
}
