//! Phone number handling for the login gate: digit sanitization, progressive
//! display formatting, and masking for the verification screen.

/// Maximum digits accepted for a login phone number.
pub const LOGIN_PHONE_DIGITS: usize = 10;

/// Strip non-digits and truncate to the login length.
pub fn sanitize_login_phone(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(LOGIN_PHONE_DIGITS)
        .collect()
}

/// Whether the input reduces to exactly 10 digits.
pub fn is_valid_login_phone(input: &str) -> bool {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.len() == LOGIN_PHONE_DIGITS
}

/// Progressive display formatting: `(555`, `(555) 123`, `(555) 123-4567`.
pub fn format_login_phone(digits: &str) -> String {
    if digits.len() >= 6 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else if digits.len() >= 3 {
        format!("({}) {}", &digits[..3], &digits[3..])
    } else {
        digits.to_string()
    }
}

/// Mask all but the last two digits for display on the verification screen.
pub fn mask_phone(phone: &str) -> String {
    let len = phone.chars().count();
    if len <= 2 {
        return phone.to_string();
    }
    phone
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i < len - 2 && c.is_ascii_digit() {
                '*'
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_and_caps_at_ten() {
        assert_eq!(sanitize_login_phone("(555) 123-4567"), "5551234567");
        assert_eq!(sanitize_login_phone("555123456789012"), "5551234567");
        assert!(sanitize_login_phone("abc").is_empty());
    }

    #[test]
    fn test_sanitized_length_never_exceeds_ten() {
        for input in ["", "5", "5551234567", "+1 (555) 123-4567 ext 99"] {
            assert!(sanitize_login_phone(input).len() <= LOGIN_PHONE_DIGITS);
        }
    }

    #[test]
    fn test_valid_login_phone_requires_exactly_ten_digits() {
        assert!(is_valid_login_phone("5551234567"));
        assert!(is_valid_login_phone("(555) 123-4567"));
        assert!(!is_valid_login_phone("555123456"));
        assert!(!is_valid_login_phone("55512345678"));
        assert!(!is_valid_login_phone(""));
    }

    #[test]
    fn test_progressive_formatting() {
        assert_eq!(format_login_phone("55"), "55");
        assert_eq!(format_login_phone("555"), "(555) ");
        assert_eq!(format_login_phone("55512"), "(555) 12");
        assert_eq!(format_login_phone("5551234567"), "(555) 123-4567");
    }

    #[test]
    fn test_mask_keeps_last_two_digits() {
        assert_eq!(mask_phone("5551234567"), "********67");
        assert_eq!(mask_phone("(555) 123-4567"), "(***) ***-**67");
        assert_eq!(mask_phone("12"), "12");
    }
}
