//! Local form validation: the checks that run before any network call.

use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld`, case-insensitive. The same shape the signup form has
/// always enforced; anything fancier is the backend's problem.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern compiles")
});

/// First local check that fails during signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupIssue {
    /// The email field does not look like an address.
    InvalidEmail,
    /// Password and confirmation differ.
    PasswordMismatch,
}

impl SignupIssue {
    /// The toast message shown for this rejection.
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidEmail => "Email is not valid!",
            Self::PasswordMismatch => "Password does not match!",
        }
    }
}

/// Whether the string passes the email shape check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// The login button is live exactly when both fields hold something.
pub fn can_submit_login(username: &str, password: &str) -> bool {
    !username.is_empty() && !password.is_empty()
}

/// The signup button is live exactly when every field holds something.
/// Content checks wait until submission.
pub fn can_submit_signup(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> bool {
    !username.is_empty() && !email.is_empty() && !password.is_empty() && !confirm_password.is_empty()
}

/// Local checks run before the signup request goes out. Order matters:
/// email shape first, then confirmation match. A failure aborts the flow
/// with no request issued.
pub fn validate_signup(
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), SignupIssue> {
    if !is_valid_email(email) {
        return Err(SignupIssue::InvalidEmail);
    }
    if password != confirm_password {
        return Err(SignupIssue::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("user.name+tag@example.co.uk"));
        // Case-insensitive on both sides of the @.
        assert!(is_valid_email("USER@EXAMPLE.COM"));
    }

    #[test]
    fn test_invalid_email_shapes() {
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user example@example.com"));
    }

    #[test]
    fn test_signup_rejects_bad_email_first() {
        // Both checks would fail; the email one wins.
        assert_eq!(
            validate_signup("bad", "secret", "different"),
            Err(SignupIssue::InvalidEmail)
        );
    }

    #[test]
    fn test_signup_rejects_password_mismatch() {
        assert_eq!(
            validate_signup("a@b.com", "secret", "secre"),
            Err(SignupIssue::PasswordMismatch)
        );
    }

    #[test]
    fn test_signup_accepts_valid_input() {
        assert_eq!(validate_signup("a@b.com", "secret", "secret"), Ok(()));
    }

    #[test]
    fn test_login_button_enablement() {
        // Enabled iff both fields are non-empty.
        assert!(can_submit_login("alice", "secret"));
        assert!(!can_submit_login("", "secret"));
        assert!(!can_submit_login("alice", ""));
        assert!(!can_submit_login("", ""));
    }

    #[test]
    fn test_signup_button_enablement() {
        assert!(can_submit_signup("alice", "a@b.com", "secret", "secret"));
        assert!(!can_submit_signup("", "a@b.com", "secret", "secret"));
        assert!(!can_submit_signup("alice", "", "secret", "secret"));
        assert!(!can_submit_signup("alice", "a@b.com", "", "secret"));
        assert!(!can_submit_signup("alice", "a@b.com", "secret", ""));
        // A mismatched confirmation still enables the button; the content
        // check happens on submit.
        assert!(can_submit_signup("alice", "a@b.com", "secret", "different"));
    }

    #[test]
    fn test_issue_messages_are_distinct() {
        assert_ne!(
            SignupIssue::InvalidEmail.message(),
            SignupIssue::PasswordMismatch.message()
        );
    }
}
