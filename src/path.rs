//! Embedded-path normalization.
//!
//! Embedded paths are forward-slash separated and relative to the set root.
//! Normalization collapses repeated separators, strips a leading `/` or `./`,
//! and drops `.` segments. `..` segments are rejected entirely — an embedded
//! path can never escape its resource set.

/// Split a path into normalized segments.
///
/// Returns `None` if any segment is `..`. An empty result (e.g. for `""`,
/// `"."`, or `"/"`) denotes the set root.
pub(crate) fn segments(path: &str) -> Option<impl Iterator<Item = &str> + Clone> {
    let parts = path.split('/').filter(|s| !s.is_empty() && *s != ".");
    if parts.clone().any(|s| s == "..") {
        return None;
    }
    Some(parts)
}

/// Normalize a path into its owned joined form, or `None` if it escapes.
///
/// Used on the registration side, where paths are stored; lookups use
/// [`segments`] directly and never allocate.
pub(crate) fn normalize(path: &str) -> Option<String> {
    let mut out = String::with_capacity(path.len());
    for seg in segments(path)? {
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(seg);
    }
    Some(out)
}
