//! Field splitting for robot-mode lines
//!
//! A line is `TAG:` followed by comma separated fields. String fields are
//! double-quoted and may contain commas; a quote inside a string is written
//! as `\"` or `""`. Empty fields (`a,,b`) are kept.

/// Split a robot line into its tag and fields.
///
/// Returns `None` when the line has no `TAG:` prefix.
pub fn split_line(line: &str) -> Option<(&str, Vec<String>)> {
    let line = line.trim();
    let (tag, rest) = line.split_once(':')?;
    if tag.is_empty() || !tag.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    Some((tag, split_fields(rest)))
}

/// Split the part after the tag into fields
pub fn split_fields(rest: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = rest.chars().peekable();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '\\' if chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' if chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => current.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
    }

    if !rest.is_empty() {
        fields.push(current);
    }
    fields
}
