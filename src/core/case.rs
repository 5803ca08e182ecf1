//! Case restoration
//!
//! Lookups and rule matching work on lowercase tokens. These helpers carry
//! the capitalization of the caller's word over to the produced word.

/// Returns true if `s` counts as fully upper-case
///
/// ASCII strings only need to be free of lowercase letters, so `"HTTP2"` and
/// `"A-B"` are upper-case. Any non-ASCII byte switches to the strict Unicode
/// test where every char must be upper-case.
pub fn is_upper(s: &str) -> bool {
    if s.is_ascii() {
        return !s.bytes().any(|b| b.is_ascii_lowercase());
    }
    s.chars().all(char::is_uppercase)
}

/// Returns true if `s` starts upper-case and has no other upper-case chars
pub fn is_title(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => !chars.any(char::is_uppercase),
        _ => false,
    }
}

/// Upper-case the first char of `s` and lower-case the rest
pub fn to_title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Reproduce the case style of `original` on `candidate`
///
/// # Examples
///
/// ```
/// use inflect::core::case::restore_case;
///
/// assert_eq!(restore_case("OX", "oxen"), "OXEN");
/// assert_eq!(restore_case("Ox", "oxen"), "Oxen");
/// assert_eq!(restore_case("ox", "OXEN"), "oxen");
/// assert_eq!(restore_case("oxen", "oxen"), "oxen");
/// ```
pub fn restore_case(original: &str, candidate: &str) -> String {
    if original == candidate {
        return candidate.to_string();
    }

    if is_upper(original) {
        return candidate.to_uppercase();
    }

    let starts_upper = original
        .chars()
        .next()
        .is_some_and(|first| is_upper(first.encode_utf8(&mut [0; 4])));
    if starts_upper {
        return to_title(candidate);
    }

    candidate.to_lowercase()
}

/// Case handling for a rule substitution
///
/// The substitution keeps the unmatched part of `original` as it was, so only
/// two styles need fixing: all-caps words get an all-caps result and strictly
/// title-case words get a title-case result. camelCase, PascalCase and other
/// mixed words keep `replaced` untouched.
pub fn restore_rule_case(original: &str, replaced: String) -> String {
    if is_upper(original) {
        replaced.to_uppercase()
    } else if is_title(original) {
        to_title(&replaced)
    } else {
        replaced
    }
}
