//! Shape predicates for contact fields. Kept as named functions so their
//! boundary behaviour can be locked down with tests independently of the
//! rules that call them.

/// Returns true when `value` looks like an email address: exactly one
/// `@`, at least one character before it, at least one character between
/// `@` and the final `.`, at least one character after the final `.`, and
/// no whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || parts.next().is_some() {
        return false;
    }
    if local.contains(char::is_whitespace) || domain.contains(char::is_whitespace) {
        return false;
    }
    match domain.rfind('.') {
        Some(index) => index > 0 && index + 1 < domain.len(),
        None => false,
    }
}

/// Returns true when `value` looks like a dialable mobile number. Spaces,
/// hyphens and parentheses are stripped first; what remains must be an
/// optional leading `+` followed by a first digit 1-9 and up to fifteen
/// more digits, and must be at least ten characters long.
pub fn is_valid_mobile(value: &str) -> bool {
    let stripped: String = value
        .chars()
        .filter(|ch| !ch.is_whitespace() && !matches!(ch, '-' | '(' | ')'))
        .collect();
    if stripped.len() < 10 {
        return false;
    }
    let digits = stripped.strip_prefix('+').unwrap_or(&stripped);
    if digits.is_empty() || digits.len() > 16 {
        return false;
    }
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) if ('1'..='9').contains(&first) => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_digit())
}
