// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Token value types.
//!
//! A token is a six-digit code. The first three digits are what the token
//! *takes*, the last three what it *gives*. Token A connects to token B
//! when `A.gives == B.takes`.
//!
//! Tokens are only created by [`TokenRegistry`](crate::registry::TokenRegistry),
//! which validates the code and assigns the identifier.

pub mod half;

pub use half::{is_valid_code, split_code, Half, CODE_LENGTH, HALF_LENGTH};

use std::fmt;

/// Identifier of a token, assigned in creation order starting at 1.
///
/// This is a newtype wrapper to prevent mixing token ids with positions
/// or counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenId(u32);

impl TokenId {
    /// The first identifier handed out by a fresh registry.
    pub const FIRST: TokenId = TokenId(1);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the underlying value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// The identifier following this one.
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A registered token.
///
/// The code is immutable after creation; `takes` and `gives` are derived
/// from it once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    id: TokenId,
    code: String,
    takes: Half,
    gives: Half,
}

impl Token {
    /// Validate `code` and build a token with the given id.
    ///
    /// Returns None if `code` is not exactly six ASCII digits.
    pub(crate) fn try_new(id: TokenId, code: &str) -> Option<Self> {
        let (takes, gives) = split_code(code)?;
        Some(Self {
            id,
            code: code.to_owned(),
            takes,
            gives,
        })
    }

    pub fn id(&self) -> TokenId {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// First three digits of the code.
    pub fn takes(&self) -> Half {
        self.takes
    }

    /// Last three digits of the code.
    pub fn gives(&self) -> Half {
        self.gives
    }

    /// Whether `next` may follow this token in a chain.
    pub fn connects_to(&self, next: &Token) -> bool {
        self.gives == next.takes
    }
}
