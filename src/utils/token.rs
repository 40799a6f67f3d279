//! Opaque session token generation.

use uuid::Uuid;

/// Generates a fresh opaque session token.
///
/// UUID v4 carries 122 bits of CSPRNG entropy, rendered in the canonical
/// hyphenated form. The token is a bearer credential: it is stored on the
/// user row at login and matched by equality until logout clears it.
pub fn generate_token() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_token_has_canonical_uuid_length() {
        assert_eq!(generate_token().len(), 36);
    }

    #[test]
    fn test_token_is_hyphenated() {
        let token = generate_token();
        let hyphens: Vec<usize> = token
            .char_indices()
            .filter(|(_, c)| *c == '-')
            .map(|(i, _)| i)
            .collect();

        assert_eq!(hyphens, vec![8, 13, 18, 23]);
    }

    #[test]
    fn test_tokens_are_unique() {
        let mut tokens = HashSet::new();

        for _ in 0..1000 {
            tokens.insert(generate_token());
        }

        assert_eq!(tokens.len(), 1000);
    }
}
