/// Checks an email address for the `local@domain.tld` shape.
///
/// Mirrors the permissive validation the API has always done: one `@`, no
/// whitespace, and a dot somewhere in the domain part.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_address() {
        assert!(is_valid_email("guest@example.com"));
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(!is_valid_email("guest.example.com"));
    }

    #[test]
    fn rejects_whitespace() {
        assert!(!is_valid_email("gu est@example.com"));
    }

    #[test]
    fn rejects_domain_without_dot() {
        assert!(!is_valid_email("guest@example"));
    }

    #[test]
    fn rejects_trailing_dot_domain() {
        assert!(!is_valid_email("guest@example."));
    }
}
