/// Characters rejected by at least one common filesystem
const INVALID_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

fn is_invalid(c: char) -> bool {
    INVALID_CHARS.contains(&c) || c.is_control()
}

pub fn has_invalid_chars(name: &str) -> bool {
    name.chars().any(is_invalid)
}

/// Replace every invalid character with `replacement`
pub fn sanitize_filename(name: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if is_invalid(c) {
            out.push_str(replacement);
        } else {
            out.push(c);
        }
    }
    out
}

/// Expand an episode naming pattern.
///
/// `%T` show name, `%s`/`%S` season (plain / two digits),
/// `%e`/`%E` episode (plain / two digits), `%%` a literal percent.
/// Unknown placeholders are kept verbatim.
pub fn format_pattern(pattern: &str, show_name: &str, season: u32, episode: u32) -> String {
    let mut out = String::with_capacity(pattern.len() + show_name.len());
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('T') => out.push_str(show_name),
            Some('s') => out.push_str(&season.to_string()),
            Some('S') => out.push_str(&format!("{:02}", season)),
            Some('e') => out.push_str(&episode.to_string()),
            Some('E') => out.push_str(&format!("{:02}", episode)),
            Some('%') => out.push('%'),
            Some(other) => {
                out.push('%');
                out.push(other);
            }
            None => out.push('%'),
        }
    }

    out.trim().to_string()
}
