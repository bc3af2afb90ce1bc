//! Filename helpers shared by photo storage and report export.

/// Longest component (in chars) produced by [`sanitize_component`].
pub const MAX_COMPONENT_CHARS: usize = 96;

/// Reduces a user-supplied string to a safe single path component.
///
/// Keeps alphanumerics (any script), `-`, `_` and `.`; every other run of
/// characters becomes a single `_`. Leading dots and underscores are
/// stripped so the result is never `.`, `..` or a hidden file. Returns
/// `None` if nothing usable remains.
///
/// # Examples
///
/// ```
/// use assetcheck_core::util::sanitize_component;
///
/// assert_eq!(sanitize_component("front view.jpg").as_deref(), Some("front_view.jpg"));
/// assert_eq!(sanitize_component("../../etc/passwd").as_deref(), Some("etc_passwd"));
/// assert_eq!(sanitize_component("김서현").as_deref(), Some("김서현"));
/// assert_eq!(sanitize_component("../"), None);
/// ```
pub fn sanitize_component(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut last_was_sep = false;
    for c in raw.trim().chars() {
        if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
            out.push(c);
            last_was_sep = false;
        } else if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }

    let cleaned: String = out
        .trim_start_matches(['.', '_'])
        .chars()
        .take(MAX_COMPONENT_CHARS)
        .collect();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Final path component of a client filename (some browsers send full paths).
pub fn base_name(raw: &str) -> &str {
    raw.rsplit(['/', '\\']).next().unwrap_or(raw)
}
