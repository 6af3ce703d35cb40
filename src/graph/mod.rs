// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Directed connection graph over tokens.
//!
//! Computed once per search from the registry contents and never modified
//! afterwards. There is an edge `a -> b` whenever `a.gives == b.takes`.
//!
//! # Neighbor order
//!
//! Neighbors of a token are listed in the iteration order of the input
//! tokens (ascending id for a registry). The search breaks ties between
//! equal-length chains by taking the first one found, so this order is
//! part of the observable behaviour.
//!
//! Self-loops (a token whose gives equals its own takes) are kept here;
//! the search skips them.

use std::collections::HashMap;

use tracing::debug;

use crate::token::{Half, Token, TokenId};

/// Adjacency lists keyed by token id.
#[derive(Debug, Clone, Default)]
pub struct ChainGraph {
    adjacency: HashMap<TokenId, Vec<TokenId>>,
}

impl ChainGraph {
    /// Build the graph from `tokens`.
    ///
    /// When `log_progress` is set, emits a debug event every 100 nodes.
    pub fn build(tokens: &[Token], log_progress: bool) -> Self {
        // Index tokens by what they take.
        let mut takes_to_ids: HashMap<Half, Vec<TokenId>> = HashMap::new();
        for token in tokens {
            takes_to_ids.entry(token.takes()).or_default().push(token.id());
        }

        let mut adjacency = HashMap::with_capacity(tokens.len());
        for token in tokens {
            let neighbors = takes_to_ids.get(&token.gives()).cloned().unwrap_or_default();
            adjacency.insert(token.id(), neighbors);

            if log_progress && adjacency.len() % 100 == 0 {
                debug!("Built graph for {}/{} tokens", adjacency.len(), tokens.len());
            }
        }

        Self { adjacency }
    }

    /// Tokens reachable in one step from `id`, in discovery order.
    ///
    /// Unknown ids have no neighbors.
    #[inline]
    pub fn neighbors(&self, id: TokenId) -> &[TokenId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

/// Build the adjacency graph for `tokens` without progress logging.
pub fn build_graph(tokens: &[Token]) -> ChainGraph {
    ChainGraph::build(tokens, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TokenRegistry;

    fn registry(codes: &[&str]) -> TokenRegistry {
        let mut registry = TokenRegistry::new();
        for code in codes {
            assert!(registry.add_token_direct(code));
        }
        registry
    }

    fn ids(values: &[u32]) -> Vec<TokenId> {
        values.iter().copied().map(TokenId::new).collect()
    }

    #[test]
    fn test_linear_chain() {
        let registry = registry(&["100200", "200300", "300400"]);
        let graph = build_graph(registry.get_all_tokens());

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.neighbors(TokenId::new(1)), ids(&[2]).as_slice());
        assert_eq!(graph.neighbors(TokenId::new(2)), ids(&[3]).as_slice());
        assert!(graph.neighbors(TokenId::new(3)).is_empty());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_neighbors_in_id_order() {
        // Three tokens take "200"; token 1 gives "200".
        let registry = registry(&["100200", "200900", "200300", "200400"]);
        let graph = build_graph(registry.get_all_tokens());

        assert_eq!(graph.neighbors(TokenId::new(1)), ids(&[2, 3, 4]).as_slice());
    }

    #[test]
    fn test_self_loop_is_kept() {
        let registry = registry(&["555555"]);
        let graph = build_graph(registry.get_all_tokens());

        assert_eq!(graph.neighbors(TokenId::new(1)), ids(&[1]).as_slice());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_empty_and_unknown() {
        let graph = build_graph(&[]);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.neighbors(TokenId::new(42)).is_empty());
    }

    #[test]
    fn test_every_node_present_even_without_edges() {
        let registry = registry(&["111222", "333444"]);
        let graph = build_graph(registry.get_all_tokens());
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }
}
