// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Longest chain search over six-digit tokens.
//!
//! Each token is a six-digit code: the first three digits are what it
//! *takes*, the last three what it *gives*. Token A can be followed by token
//! B when `A.gives == B.takes`. The crate finds a long ordered chain of such
//! tokens within an optional time budget.
//!
//! # Architecture
//!
//! Three layers, leaf first:
//!
//! ## Registry
//!
//! [`TokenRegistry`] validates codes and assigns ids in creation order. It
//! is an owned value with an explicit `reset`, not global state.
//!
//! ## Graph (immutable during search)
//!
//! [`ChainGraph`] indexes tokens by their takes half and lists, for each
//! token, the tokens it connects to. Built once per search.
//!
//! ## Search (mutable, per invocation)
//!
//! [`ChainSearch`] runs a memoized depth-first traversal from every token,
//! keeping the longest chain. The traversal uses an explicit frame stack,
//! owned ancestor sets per frame, and a cooperative deadline.
//!
//! The search is a heuristic: memo entries are keyed by token only and are
//! reused whatever the ancestors, so the result is not guaranteed to be the
//! longest simple path (which is NP-hard in general).
//!
//! # Example
//!
//! ```
//! use chain_search::TokenRegistry;
//!
//! let mut registry = TokenRegistry::new();
//! assert!(registry.add_token_direct("100200"));
//! assert!(registry.add_token_direct("200300"));
//! assert!(!registry.add_token_direct("12x456"));
//!
//! let chain = registry.find_longest_chain(None, false);
//! assert_eq!(chain.len(), 2);
//! ```

pub mod graph;
pub mod io;
pub mod registry;
pub mod search;
pub mod token;

// Re-export commonly used types
pub use graph::{build_graph, ChainGraph};
pub use registry::TokenRegistry;
pub use search::{ChainSearch, SearchOptions, SearchOutcome};
pub use token::{Token, TokenId};
