// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Token registry.
//!
//! The registry owns every token of a session and hands out identifiers in
//! creation order. It is an ordinary owned value: callers construct one,
//! pass it by reference to the search, and `reset` it to start over.

use crate::search::{ChainSearch, SearchOptions};
use crate::token::{Token, TokenId};

/// Owned collection of validated tokens.
///
/// Tokens are stored in creation order, so `tokens[i]` has id `i + 1`
/// until the next `reset`. Iteration order is therefore deterministic,
/// which the search relies on when trying every token as a start.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    tokens: Vec<Token>,
    next_id: TokenId,
}

impl TokenRegistry {
    /// Create an empty registry whose first token will get id 1.
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            next_id: TokenId::FIRST,
        }
    }

    /// Remove all tokens and restart identifiers at 1.
    pub fn reset(&mut self) {
        self.tokens.clear();
        self.next_id = TokenId::FIRST;
    }

    /// Validate `code` and register it as a new token.
    ///
    /// Returns false, leaving the registry untouched, when `code` is not
    /// exactly six ASCII digits.
    pub fn add_token_direct(&mut self, code: &str) -> bool {
        let Some(token) = Token::try_new(self.next_id, code) else {
            return false;
        };
        self.next_id = self.next_id.next();
        self.tokens.push(token);
        true
    }

    /// All tokens in ascending id order.
    pub fn get_all_tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Look up a token by id.
    pub fn get(&self, id: TokenId) -> Option<&Token> {
        // Ids are dense from 1 within a session.
        let index = (id.value() as usize).checked_sub(1)?;
        self.tokens.get(index).filter(|token| token.id() == id)
    }

    /// Resolve a chain of ids to tokens, skipping ids that are not registered.
    pub fn resolve(&self, chain: &[TokenId]) -> Vec<&Token> {
        chain.iter().filter_map(|&id| self.get(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Find the longest chain over the current tokens.
    ///
    /// `timeout_seconds` bounds wall-clock time; when it runs out the best
    /// chain found so far is returned. `log_progress` only controls tracing
    /// output.
    pub fn find_longest_chain(&self, timeout_seconds: Option<u64>, log_progress: bool) -> Vec<TokenId> {
        let options = SearchOptions::new()
            .with_timeout_secs(timeout_seconds)
            .with_progress(log_progress);
        ChainSearch::new(self, options).run().chain
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::new()
    }
}
