//! Input validation for registration.
//!
//! These checks are pure and synchronous; they run at the boundary before
//! the credential store is touched.

/// Symbols that count toward the password policy's "special character"
pub const PASSWORD_SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

const MIN_PASSWORD_LEN: usize = 8;

/// Normalize an email for storage and lookup: trimmed and lowercased.
///
/// All store access goes through the normalized form, so `" A@B.com "` and
/// `"a@b.com"` are the same account.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate email format
///
/// Permissive `local@domain.tld` shape: the local part allows alphanumerics
/// plus `._%+-`, the domain allows alphanumerics plus `.-`, and the TLD is
/// at least two letters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
    {
        return false;
    }

    let Some((name, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validate password strength
///
/// At least 8 characters, with at least one lowercase letter, one uppercase
/// letter, one digit, and one symbol from [`PASSWORD_SYMBOLS`].
pub fn is_valid_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}
