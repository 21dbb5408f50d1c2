//! Property tests for signing, verification, decoding and validation

use proptest::prelude::*;
use twt::{MacAlgorithm, TokenCodec, TokenConfig, TwtError};

fn any_config() -> impl Strategy<Value = TokenConfig> {
    prop::sample::select(MacAlgorithm::ALL.to_vec()).prop_flat_map(|algorithm| {
        (
            1..=algorithm.hex_len(),
            prop::option::of(prop::sample::select(vec!['.', '~', '|', '§'])),
        )
            .prop_map(move |(digest_length, separator)| TokenConfig {
                algorithm,
                digest_length,
                separator,
            })
    })
}

fn codec(config: TokenConfig) -> TokenCodec {
    TokenCodec::new(config).unwrap()
}

proptest! {
    #[test]
    fn prop_sign_then_verify_returns_payload(
        config in any_config(),
        payload in any::<String>(),
        secret in any::<String>(),
    ) {
        let codec = codec(config);
        let token = codec.sign(&payload, &secret).unwrap();
        prop_assert_eq!(codec.verify(&token, &secret), Ok(payload.as_str()));
    }

    #[test]
    fn prop_decode_returns_payload(
        config in any_config(),
        payload in any::<String>(),
        secret in any::<String>(),
    ) {
        let codec = codec(config);
        let token = codec.sign(&payload, &secret).unwrap();
        prop_assert_eq!(codec.decode(&token), payload.as_str());
    }

    #[test]
    fn prop_signed_tokens_validate(
        config in any_config(),
        payload in any::<String>(),
        secret in any::<String>(),
    ) {
        let codec = codec(config);
        let token = codec.sign(&payload, &secret).unwrap();
        prop_assert!(codec.validate(&token));
        prop_assert_eq!(token.chars().count(), config.token_len(payload.chars().count()));
    }

    #[test]
    fn prop_wrong_secret_fails(
        payload in any::<String>(),
        secret in "\\PC{0,40}",
        other in "\\PC{0,40}",
    ) {
        prop_assume!(secret != other);
        let codec = TokenCodec::canonical();
        let token = codec.sign(&payload, &secret).unwrap();
        prop_assert_eq!(codec.verify(&token, &other), Err(TwtError::InvalidMac));
    }

    #[test]
    fn prop_mutated_digest_fails(
        config in any_config(),
        payload in any::<String>(),
        secret in any::<String>(),
        position in any::<prop::sample::Index>(),
        replacement in prop::sample::select("0123456789abcdefXYZ .".chars().collect::<Vec<_>>()),
    ) {
        let codec = codec(config);
        let token = codec.sign(&payload, &secret).unwrap();

        let digest_start = token.len() - config.digest_length;
        let idx = digest_start + position.index(config.digest_length);
        let original = token.as_bytes()[idx] as char;
        prop_assume!(original != replacement);

        let mut mutated = token.clone();
        mutated.replace_range(idx..=idx, &replacement.to_string());
        prop_assert_eq!(codec.verify(&mutated, &secret), Err(TwtError::InvalidMac));
    }

    #[test]
    fn prop_truncated_or_extended_separator_token_is_malformed(
        payload in any::<String>(),
        secret in any::<String>(),
        extra in prop::sample::select("0123456789abcdef".chars().collect::<Vec<_>>()),
    ) {
        let codec = codec(TokenConfig::legacy_dotted());
        let token = codec.sign(&payload, &secret).unwrap();

        let mut shorter = token.clone();
        shorter.pop();
        prop_assert!(!codec.validate(&shorter));

        let mut longer = token;
        longer.push(extra);
        prop_assert!(!codec.validate(&longer));
    }

    #[test]
    fn prop_short_digest_is_malformed(
        payload in "[g-z ]{0,16}",
        secret in any::<String>(),
    ) {
        let codec = TokenCodec::canonical();
        let mut token = codec.sign(&payload, &secret).unwrap();
        token.pop();
        prop_assert!(!codec.validate(&token));
        prop_assert_eq!(codec.verify(&token, &secret), Err(TwtError::InvalidMac));
    }

    #[test]
    fn prop_decode_and_validate_never_panic(config in any_config(), token in any::<String>()) {
        let codec = codec(config);
        let payload = codec.decode(&token);
        prop_assert!(token.starts_with(payload));
        let _ = codec.validate(&token);
    }
}
