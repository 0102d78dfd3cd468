//! Client-side input checks run before anything reaches the backend.

use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));
static INDIA_PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+91|0)?[6-9]\d{9}$").expect("valid phone regex"));
static INTERNATIONAL_PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{7,14}$").expect("valid phone regex"));
static OTP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}$").expect("valid otp regex"));

/// Loose `local@domain.tld` check.
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() {
        return Err("Email is required");
    }
    if !EMAIL_RE.is_match(email) {
        return Err("Enter a valid email");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.trim().is_empty() {
        return Err("Password is required");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Result<(), &'static str> {
    if password == confirmation {
        Ok(())
    } else {
        Err("Confirm Password and Password must match")
    }
}

/// Indian mobile numbers (optional `+91`/`0` prefix) or generic E.164.
///
/// Spaces and dashes are ignored.
pub fn validate_phone_number(phone: &str) -> bool {
    let cleaned: String = phone
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '-')
        .collect();
    INDIA_PHONE_RE.is_match(&cleaned) || INTERNATIONAL_PHONE_RE.is_match(&cleaned)
}

/// One-time codes are exactly four digits.
pub fn validate_otp(otp: &str) -> bool {
    OTP_RE.is_match(otp)
}

/// Both note fields must contain something other than whitespace.
pub fn is_note_input_valid(title: &str, content: &str) -> bool {
    !title.trim().is_empty() && !content.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_at_sign_and_domain() {
        assert_eq!(validate_email("abc"), Err("Enter a valid email"));
        assert_eq!(validate_email("a@b"), Err("Enter a valid email"));
        assert_eq!(validate_email("   "), Err("Email is required"));
        assert_eq!(validate_email("a@b.com"), Ok(()));
    }

    #[test]
    fn password_needs_six_characters() {
        assert_eq!(
            validate_password("12345"),
            Err("Password must be at least 6 characters")
        );
        assert_eq!(validate_password("123456"), Ok(()));
        assert_eq!(validate_password(""), Err("Password is required"));
    }

    #[test]
    fn confirmation_must_match() {
        assert!(validate_password_confirmation("secret1", "secret1").is_ok());
        assert!(validate_password_confirmation("secret1", "secret2").is_err());
    }

    #[test]
    fn phone_numbers() {
        assert!(validate_phone_number("98765 43210"));
        assert!(validate_phone_number("+91-9876543210"));
        assert!(validate_phone_number("+14155552671"));
        assert!(!validate_phone_number("12345"));
        assert!(!validate_phone_number("abc"));
    }

    #[test]
    fn otp_is_four_digits() {
        assert!(validate_otp("1234"));
        assert!(!validate_otp("123456"));
        assert!(!validate_otp("12a4"));
    }

    #[test]
    fn note_input_rejects_blank_fields() {
        assert!(!is_note_input_valid("", "body"));
        assert!(!is_note_input_valid("title", "  \n"));
        assert!(is_note_input_valid("title", "body"));
    }
}
