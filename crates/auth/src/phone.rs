//! Phone validation, formatting, and code generation.

use rand::Rng;

/// Validate an Iranian mobile number.
///
/// Non-digit characters are stripped first; what remains must be
/// exactly `09` followed by nine digits.
pub fn validate_phone(phone: &str) -> bool {
    let cleaned: String = phone.chars().filter(char::is_ascii_digit).collect();
    cleaned.len() == 11 && cleaned.starts_with("09")
}

/// Format a phone number for display (`0912-345-6789`).
///
/// Numbers that do not match the mobile pattern come back unchanged.
pub fn format_phone(phone: &str) -> String {
    let cleaned: String = phone.chars().filter(char::is_ascii_digit).collect();
    if cleaned.len() == 11 && cleaned.starts_with("09") {
        format!("{}-{}-{}", &cleaned[..4], &cleaned[4..7], &cleaned[7..])
    } else {
        phone.to_string()
    }
}

/// Generate a uniformly random 6-digit code.
pub fn generate_code() -> String {
    rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}
