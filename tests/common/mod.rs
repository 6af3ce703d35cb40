// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use std::sync::Once;

use chain_search::{Token, TokenId, TokenRegistry};
use tracing::Level;

static TRACING: Once = Once::new();

/// Route tracing output through the test harness.
#[allow(unused)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// A registry holding `codes`, which must all be valid.
#[allow(unused)]
pub fn registry_of(codes: &[&str]) -> TokenRegistry {
    let mut registry = TokenRegistry::new();
    for code in codes {
        assert!(registry.add_token_direct(code), "rejected {:?}", code);
    }
    registry
}

/// Codes of the tokens in `chain`, in chain order.
#[allow(unused)]
pub fn codes_of(registry: &TokenRegistry, chain: &[TokenId]) -> Vec<String> {
    registry
        .resolve(chain)
        .into_iter()
        .map(|token| token.code().to_owned())
        .collect()
}

/// Id of the token with `code`.
#[allow(unused)]
pub fn id_of(registry: &TokenRegistry, code: &str) -> TokenId {
    registry
        .get_all_tokens()
        .iter()
        .find(|token| token.code() == code)
        .map(Token::id)
        .unwrap_or_else(|| panic!("no token {:?}", code))
}

/// Assert that each token in `chain` gives what the next one takes.
#[allow(unused)]
pub fn assert_connected(registry: &TokenRegistry, chain: &[TokenId]) {
    let tokens = registry.resolve(chain);
    assert_eq!(tokens.len(), chain.len(), "chain has unregistered ids");
    for pair in tokens.windows(2) {
        assert_eq!(
            pair[0].gives(),
            pair[1].takes(),
            "{} does not connect to {}",
            pair[0].code(),
            pair[1].code()
        );
    }
}
