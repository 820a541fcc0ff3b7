/// Generates a reference code of the form `{prefix}-{random}`.
///
/// The random part uses uppercase letters and digits only so codes stay
/// readable on invoices and in support conversations.
///
/// # Arguments
/// - `prefix` - Short code family marker, e.g. `"BK"` or `"TXN"`
/// - `length` - Number of random characters after the dash
use rand::Rng;

pub fn generate_code(prefix: &str, length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    let mut rng = rand::rng();

    let random: String = (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();

    format!("{}-{}", prefix, random)
}

/// Generates a booking reference code, e.g. `BK-4F7K2M9Q`.
pub fn booking_code() -> String {
    generate_code("BK", 8)
}

/// Generates a payment transaction code, e.g. `TXN-8A3JD02MZL`.
pub fn transaction_code() -> String {
    generate_code("TXN", 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_code_with_prefix_and_length() {
        let code = generate_code("BK", 8);
        assert!(code.starts_with("BK-"));
        assert_eq!(code.len(), 3 + 8);
    }

    #[test]
    fn uses_uppercase_alphanumeric_charset() {
        let code = booking_code();
        let random = code.strip_prefix("BK-").unwrap();
        assert!(random
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn consecutive_codes_differ() {
        // Eight random characters over a 36-symbol alphabet; a collision here
        // would point at a broken RNG rather than bad luck.
        assert_ne!(transaction_code(), transaction_code());
    }
}
