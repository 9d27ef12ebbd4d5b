//! Value normalization for comparison
//!
//! Fixed-order cleanup applied to every raw metadata value: trim, then
//! lowercase, then collapse whitespace runs to a single space. The
//! collapsed form is what a per-field transformer sees, so token
//! structure survives. After the transform, remaining whitespace is
//! stripped so every fuzzy term is a single token.

/// Normalize a raw metadata value ahead of the per-field transform
pub fn normalize_value(value: &str, lowercase: bool, whitespace: bool) -> String {
    let mut result = value.trim().to_string();
    if lowercase {
        result = result.to_lowercase();
    }
    if whitespace {
        result = collapse_whitespace(&result);
    }
    result
}

/// Collapse runs of whitespace into a single ASCII space
fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(c);
            prev_was_space = false;
        }
    }

    result
}

/// Strip every remaining whitespace character from a transformed value
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
