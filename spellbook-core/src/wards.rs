//! Protective wards: signature format checking and rate limiting.
//!
//! Both checks are illustrative placeholders and must stay that way. The
//! signature check is a format gate, not cryptographic verification, and
//! the rate limiter tracks no state.

/// Check that a magic signature is plausibly formatted.
///
/// True iff the signature is at least 8 characters and every character is
/// alphanumeric. Length counts characters, not bytes.
#[must_use]
pub fn validate_magic_signature(signature: &str) -> bool {
    signature.chars().count() >= 8 && signature.chars().all(char::is_alphanumeric)
}

/// Rate-limit gate for spell casting.
///
/// Always permits; no per-wizard state is tracked.
#[must_use]
pub fn rate_limit_check(_wizard_id: &str) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_signature_passes() {
        assert!(validate_magic_signature("alnum1234"));
        assert!(validate_magic_signature("abcd1234"));
    }

    #[test]
    fn short_signature_fails() {
        assert!(!validate_magic_signature("short"));
        assert!(!validate_magic_signature("abc1234"));
        assert!(!validate_magic_signature(""));
    }

    #[test]
    fn non_alphanumeric_signature_fails() {
        assert!(!validate_magic_signature("has spaces"));
        assert!(!validate_magic_signature("under_score1"));
        assert!(!validate_magic_signature("dash-12345"));
    }

    #[test]
    fn signature_length_counts_characters_not_bytes() {
        // 8 Cyrillic letters: 16 bytes, 8 characters.
        assert!(validate_magic_signature("магиямаг"));
        // 7 characters, even though the byte length exceeds 8.
        assert!(!validate_magic_signature("магияма"));
    }

    #[test]
    fn rate_limit_always_permits() {
        assert!(rate_limit_check("gandalf"));
        assert!(rate_limit_check(""));
        assert!(rate_limit_check("wizard-9000"));
    }

    proptest::proptest! {
        #[test]
        fn proptest_rate_limit_permits_any_wizard(id in ".*") {
            proptest::prop_assert!(rate_limit_check(&id));
        }

        #[test]
        fn proptest_short_signatures_always_fail(sig in ".{0,7}") {
            proptest::prop_assert!(!validate_magic_signature(&sig));
        }

        #[test]
        fn proptest_long_ascii_alnum_signatures_always_pass(
            sig in "[a-zA-Z0-9]{8,64}",
        ) {
            proptest::prop_assert!(validate_magic_signature(&sig));
        }
    }
}
