// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop a trailing comma qualifier from a display name.
/// "Jens Hansen, Siumut" → ("Jens Hansen", true). The flag marks that a
/// conversion happened so the caller can log it.
pub fn split_qualifier(name: &str) -> (String, bool) {
    match name.split_once(',') {
        Some((kept, _)) => (normalize_ws(kept), true),
        None => (normalize_ws(name), false),
    }
}

/// Strip a literal `mailto:` prefix; an empty address is no address.
pub fn strip_mailto(href: &str) -> Option<String> {
    let addr = href.strip_prefix("mailto:").unwrap_or(href).trim();
    if addr.is_empty() { None } else { Some(s!(addr)) }
}

/// One raw group label yields both forms: display name (underscores →
/// spaces) and slug (spaces → underscores, lower-cased). Same content,
/// different formatting.
pub fn group_parts(raw: &str) -> (String, String) {
    (raw.replace('_', " "), raw.replace(' ', "_").to_lowercase())
}
