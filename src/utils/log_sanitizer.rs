//! Log sanitization utilities for masking sensitive data.
//!
//! Emails are personal data; mask them before they reach a log line.

/// Number of leading characters left visible.
const VISIBLE_CHARS: usize = 3;

/// Mask an email address for safe logging.
///
/// Shows only the first 3 characters of the local part (or fewer if it is
/// shorter) followed by asterisks and the domain.
///
/// # Examples
/// ```
/// use user_store::utils::log_sanitizer::mask_email;
///
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local_part, domain)) => format!("{}***@{}", visible_prefix(local_part), domain),
        None => format!("{}***", visible_prefix(email)),
    }
}

fn visible_prefix(s: &str) -> String {
    s.chars().take(VISIBLE_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email_normal() {
        assert_eq!(mask_email("user@example.com"), "use***@example.com");
        assert_eq!(mask_email("johndoe@test.org"), "joh***@test.org");
    }

    #[test]
    fn test_mask_email_short_local_part() {
        assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
        assert_eq!(mask_email("a@test.org"), "a***@test.org");
    }

    #[test]
    fn test_mask_email_invalid() {
        assert_eq!(mask_email("notanemail"), "not***");
    }

    #[test]
    fn test_mask_email_multibyte() {
        assert_eq!(mask_email("用户名字@example.com"), "用户名***@example.com");
    }
}
