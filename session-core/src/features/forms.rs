//! Client-side form checks, mirroring the backend's validation rules.

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_TITLE_LENGTH: usize = 10;
pub const MIN_ARTICLE_LENGTH: usize = 20;

pub fn has_min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// `local@domain` with no whitespace and both parts non-empty
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// At least 8 characters with a lowercase letter, an uppercase letter,
/// a digit and a symbol
pub fn is_strong_password(value: &str) -> bool {
    has_min_chars(value, MIN_PASSWORD_LENGTH)
        && value.chars().any(|c| c.is_lowercase())
        && value.chars().any(|c| c.is_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| !c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("alice@localhost"));
        assert!(!is_valid_email("alice"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("a@b@c"));
        assert!(!is_valid_email("a b@c.d"));
    }

    #[test]
    fn password_strength() {
        assert!(is_strong_password("Secret12!"));
        assert!(is_strong_password("Secret12_"));
        assert!(!is_strong_password("Sec12!"));
        assert!(!is_strong_password("secret12!"));
        assert!(!is_strong_password("SECRET12!"));
        assert!(!is_strong_password("Secretxx!"));
        assert!(!is_strong_password("Secret123"));
    }

    #[test]
    fn min_chars_counts_characters_not_bytes() {
        assert!(has_min_chars("été", 3));
        assert!(!has_min_chars("été", 4));
    }
}
