//! Credential and free-text input validation.
//!
//! These are pure functions: they never fail, never touch the backend, and
//! run before any stored-procedure call. Handlers translate a negative
//! result into a 400-class response.

use serde::Serialize;

/// Symbols accepted as the "special character" class for passwords.
const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

const MIN_PASSWORD_LEN: usize = 8;

/// Maximum length retained by `sanitize_input`.
const MAX_INPUT_LEN: usize = 500;

#[derive(Debug, Clone, Serialize)]
pub struct PasswordValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Checks the shape of an email address: exactly one `@`, a non-empty local
/// part, a domain containing an interior `.`, and no whitespace anywhere.
/// No DNS or mailbox verification.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false, // zero or more than one '@'
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    // The dot must have at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len())
}

/// Checks password strength, collecting every failing rule so the caller can
/// display all reasons at once. A password passing all five checks is valid
/// with an empty error list.
pub fn validate_password(password: &str) -> PasswordValidation {
    let mut errors = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one number".to_string());
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        errors.push("Password must contain at least one special character".to_string());
    }

    PasswordValidation {
        valid: errors.is_empty(),
        errors,
    }
}

/// Conservative free-text filter: trims surrounding whitespace, strips `<`
/// and `>`, and truncates to 500 characters.
///
/// This is defense-in-depth in front of parameterized backend calls, not an
/// HTML sanitizer. It must not be relied on to stop all injection vectors.
pub fn sanitize_input(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|&c| c != '<' && c != '>')
        .take(MAX_INPUT_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_plain_address() {
        assert!(validate_email("user@example.com"));
    }

    #[test]
    fn test_email_accepts_subdomain() {
        assert!(validate_email("hr@jobs.example.co.uk"));
    }

    #[test]
    fn test_email_rejects_missing_at() {
        assert!(!validate_email("not-an-email"));
    }

    #[test]
    fn test_email_rejects_dotless_domain() {
        assert!(!validate_email("a@b"));
    }

    #[test]
    fn test_email_rejects_double_at() {
        assert!(!validate_email("a@b@c.com"));
    }

    #[test]
    fn test_email_rejects_whitespace() {
        assert!(!validate_email("user @example.com"));
        assert!(!validate_email("user@exa mple.com"));
    }

    #[test]
    fn test_email_rejects_empty_local_part() {
        assert!(!validate_email("@example.com"));
    }

    #[test]
    fn test_email_rejects_trailing_dot() {
        assert!(!validate_email("user@example."));
    }

    #[test]
    fn test_email_rejects_leading_dot_domain() {
        assert!(!validate_email("user@.com"));
    }

    #[test]
    fn test_password_too_short() {
        let r = validate_password("Ab1!");
        assert!(!r.valid);
        assert!(r.errors.iter().any(|e| e.contains("8 characters")));
    }

    #[test]
    fn test_password_strong_passes() {
        let r = validate_password("Str0ng!pass");
        assert!(r.valid);
        assert!(r.errors.is_empty());
    }

    #[test]
    fn test_password_collects_all_failures() {
        // Lowercase-only and short: everything but the lowercase rule fails.
        let r = validate_password("abc");
        assert!(!r.valid);
        assert_eq!(r.errors.len(), 4);
    }

    #[test]
    fn test_password_missing_uppercase_only() {
        let r = validate_password("weakpass1!");
        assert!(!r.valid);
        assert_eq!(r.errors.len(), 1);
        assert!(r.errors[0].contains("uppercase"));
    }

    #[test]
    fn test_password_missing_symbol_only() {
        let r = validate_password("Weakpass1");
        assert!(!r.valid);
        assert_eq!(r.errors.len(), 1);
        assert!(r.errors[0].contains("special character"));
    }

    #[test]
    fn test_sanitize_strips_angle_brackets_and_trims() {
        // Only the delimiters go; everything between them stays.
        assert_eq!(sanitize_input("  <script>x</script>  "), "scriptx/script");
    }

    #[test]
    fn test_sanitize_preserves_inner_whitespace() {
        assert_eq!(sanitize_input(" hello  world "), "hello  world");
    }

    #[test]
    fn test_sanitize_truncates_long_input() {
        let long = "a".repeat(1000);
        assert_eq!(sanitize_input(&long).chars().count(), 500);
    }

    #[test]
    fn test_sanitize_empty_input() {
        assert_eq!(sanitize_input("   "), "");
    }
}
