//! Type name shortening for diagnostics.

/// Strips module paths from a type name, including inside generic arguments.
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut path = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            path.push(c);
        } else {
            push_last_segment(&mut out, &path);
            path.clear();
            out.push(c);
        }
    }
    push_last_segment(&mut out, &path);

    out
}

fn push_last_segment(out: &mut String, path: &str) {
    out.push_str(path.rsplit("::").next().unwrap_or(path));
}
