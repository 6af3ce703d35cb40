// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Longest chain search.
//!
//! [`ChainSearch`] builds the connection graph once, then tries every
//! registered token as a start in registry order, keeping the longest chain
//! seen. All starts share one memo, so later starts mostly reuse earlier
//! work.
//!
//! # Time budget
//!
//! The deadline is checked before every fresh node expansion and after every
//! start attempt. When it fires, the search stops and returns the best chain
//! found so far; the start that was in progress contributes nothing.
//!
//! # Example
//!
//! ```
//! use chain_search::registry::TokenRegistry;
//! use chain_search::search::{ChainSearch, SearchOptions};
//!
//! let mut registry = TokenRegistry::new();
//! for code in ["100200", "200300", "300400"] {
//!     registry.add_token_direct(code);
//! }
//!
//! let outcome = ChainSearch::new(&registry, SearchOptions::new()).run();
//! let ids: Vec<u32> = outcome.chain.iter().map(|id| id.value()).collect();
//! assert_eq!(ids, vec![1, 2, 3]);
//! assert!(!outcome.timed_out);
//! ```

pub mod deadline;
pub mod dfs;
pub mod options;
pub mod path;
pub mod statistics;

pub use deadline::{Deadline, SearchInterrupted};
pub use dfs::{SearchMemo, Traversal};
pub use options::SearchOptions;
pub use path::ChainPath;
pub use statistics::{Counters, Statistics};

use std::time::Duration;

use tracing::{info, warn};

use crate::graph::ChainGraph;
use crate::registry::TokenRegistry;
use crate::token::TokenId;

/// Result of one search invocation.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best chain found, as token ids in chain order. Empty only when there
    /// were no tokens or the budget ran out before any start completed.
    pub chain: Vec<TokenId>,
    pub statistics: Statistics,
    pub elapsed: Duration,
    /// Whether the time budget cut the search short.
    pub timed_out: bool,
}

/// A single search over the tokens of a registry.
///
/// The registry is borrowed for the duration of the search and cannot be
/// modified meanwhile.
pub struct ChainSearch<'r> {
    registry: &'r TokenRegistry,
    options: SearchOptions,
}

impl<'r> ChainSearch<'r> {
    pub fn new(registry: &'r TokenRegistry, options: SearchOptions) -> Self {
        Self { registry, options }
    }

    /// Run the search to completion or until the deadline.
    pub fn run(self) -> SearchOutcome {
        let deadline = Deadline::start(self.options.timeout);
        let log_progress = self.options.log_progress;
        let tokens = self.registry.get_all_tokens();

        if log_progress {
            info!("Starting longest chain search with {} tokens", tokens.len());
        }

        let graph = ChainGraph::build(tokens, log_progress);
        if log_progress {
            info!("Graph built with {} nodes", graph.node_count());
            info!("Total edges in graph: {}", graph.edge_count());
        }

        let mut traversal = Traversal::new(&graph, deadline, log_progress);
        let mut longest: Option<ChainPath> = None;
        let mut timed_out = false;

        for (index, token) in tokens.iter().enumerate() {
            if log_progress && index % 100 == 0 {
                info!("Searching from starting point {}/{}", index + 1, tokens.len());
            }
            traversal.statistics_mut().increment(Counters::StartsAttempted);

            match traversal.longest_from(token.id()) {
                Ok(path) => {
                    if path.len() > longest.as_ref().map_or(0, ChainPath::len) {
                        if log_progress {
                            info!("New longest chain found: {} tokens", path.len());
                        }
                        longest = Some(path);
                    }
                }
                Err(interrupted) => {
                    warn!("{}", interrupted);
                    timed_out = true;
                    break;
                }
            }

            if let Err(interrupted) = deadline.check() {
                warn!("{}", interrupted);
                timed_out = true;
                break;
            }
        }

        let chain = longest.as_ref().map(ChainPath::to_vec).unwrap_or_default();
        let elapsed = deadline.elapsed();
        let statistics = traversal.statistics().clone();

        info!(
            "Found longest chain with {} tokens in {:.2} seconds",
            chain.len(),
            elapsed.as_secs_f64()
        );
        info!(
            "Total nodes processed: {}",
            statistics.get(Counters::NodesProcessed)
        );

        SearchOutcome {
            chain,
            statistics,
            elapsed,
            timed_out,
        }
    }
}
