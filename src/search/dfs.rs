// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memoized depth-first traversal.
//!
//! Computes, for a start token, the longest chain reachable from it. The
//! traversal runs on an explicit stack of frames rather than native
//! recursion, so chain length is bounded by heap, not by thread stack.
//!
//! # Visiting a node
//!
//! Each time a node is reached it falls into exactly one case, checked in
//! this order:
//!
//! 1. **Memoized**: a result for the node is cached; reuse it.
//! 2. **Cycle**: the node is an ancestor on the current branch; treat it as
//!    a terminal `[node]`. The parent extends it like any other child, so a
//!    chain may end by revisiting one of its ancestors.
//! 3. **Fresh**: check the deadline, then push a frame that walks the
//!    node's neighbors.
//!
//! When a frame has seen all its neighbors, its result is cached and handed
//! to the parent frame.
//!
//! # Approximation
//!
//! The memo is keyed by node only. A node reached first under one set of
//! ancestors keeps that result for every later visit, even where a
//! different ancestor set would allow a longer simple path. Cycle cuts are
//! similarly final. The result is a long chain, not necessarily the longest
//! simple path.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::deadline::{Deadline, SearchInterrupted};
use super::path::ChainPath;
use super::statistics::{Counters, Statistics};
use crate::graph::ChainGraph;
use crate::token::TokenId;

/// Best chain per node, valid for one search invocation.
#[derive(Debug, Default)]
pub struct SearchMemo {
    entries: HashMap<TokenId, ChainPath>,
}

impl SearchMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, node: TokenId) -> Option<&ChainPath> {
        self.entries.get(&node)
    }

    pub fn insert(&mut self, node: TokenId, path: ChainPath) {
        self.entries.insert(node, path);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One in-progress fresh expansion.
#[derive(Debug)]
struct Frame {
    node: TokenId,

    /// Ancestors of this node plus the node itself. Owned by the frame, so
    /// sibling branches never observe each other's ancestors.
    ancestors: HashSet<TokenId>,

    /// Index of the next neighbor to try.
    cursor: usize,

    /// Best child chain so far, if any neighbor has reported.
    best_tail: Option<ChainPath>,
}

impl Frame {
    fn new(node: TokenId, parent_ancestors: &HashSet<TokenId>) -> Self {
        let mut ancestors = parent_ancestors.clone();
        ancestors.insert(node);
        Self {
            node,
            ancestors,
            cursor: 0,
            best_tail: None,
        }
    }

    /// Next neighbor to visit, skipping self-loops.
    fn next_neighbor(&mut self, graph: &ChainGraph) -> Option<TokenId> {
        let neighbors = graph.neighbors(self.node);
        while let Some(&neighbor) = neighbors.get(self.cursor) {
            self.cursor += 1;
            if neighbor != self.node {
                return Some(neighbor);
            }
        }
        None
    }

    fn best_len(&self) -> usize {
        1 + self.best_tail.as_ref().map_or(0, ChainPath::len)
    }

    /// Record a child's result. Only a strictly longer chain replaces the
    /// current best, so the first neighbor wins ties.
    fn offer(&mut self, child: ChainPath) {
        if child.len() + 1 > self.best_len() {
            self.best_tail = Some(child);
        }
    }

    fn finish(self) -> ChainPath {
        ChainPath::cons(self.node, self.best_tail)
    }
}

/// Outcome of reaching a node.
enum Visit {
    /// Answer known without expansion (memo hit or cycle cut).
    Done(ChainPath),
    /// The node must be expanded.
    Expand(Frame),
}

/// Traversal state shared by all start attempts of one search.
pub struct Traversal<'g> {
    graph: &'g ChainGraph,
    deadline: Deadline,
    memo: SearchMemo,
    statistics: Statistics,
    log_progress: bool,
}

impl<'g> Traversal<'g> {
    pub fn new(graph: &'g ChainGraph, deadline: Deadline, log_progress: bool) -> Self {
        Self {
            graph,
            deadline,
            memo: SearchMemo::new(),
            statistics: Statistics::new(),
            log_progress,
        }
    }

    pub fn memo(&self) -> &SearchMemo {
        &self.memo
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub(crate) fn statistics_mut(&mut self) -> &mut Statistics {
        &mut self.statistics
    }

    /// Longest chain starting at `start`, visited with no ancestors.
    ///
    /// Fails only when the deadline passes; frames still in progress are
    /// discarded, completed memo entries are kept.
    pub fn longest_from(&mut self, start: TokenId) -> Result<ChainPath, SearchInterrupted> {
        let root = match self.visit(start, &HashSet::new())? {
            Visit::Done(path) => return Ok(path),
            Visit::Expand(frame) => frame,
        };

        let mut stack = vec![root];
        while let Some(frame) = stack.last_mut() {
            if let Some(neighbor) = frame.next_neighbor(self.graph) {
                match self.visit(neighbor, &frame.ancestors)? {
                    Visit::Done(path) => frame.offer(path),
                    Visit::Expand(child) => stack.push(child),
                }
                continue;
            }

            // All neighbors seen: cache and report to the parent.
            let Some(frame) = stack.pop() else { break };
            let node = frame.node;
            let result = frame.finish();
            self.memo.insert(node, result.clone());
            match stack.last_mut() {
                Some(parent) => parent.offer(result),
                None => return Ok(result),
            }
        }

        // The root frame always returns from inside the loop.
        Ok(ChainPath::single(start))
    }

    fn visit(&mut self, node: TokenId, ancestors: &HashSet<TokenId>) -> Result<Visit, SearchInterrupted> {
        let processed = self.statistics.increment(Counters::NodesProcessed);
        if self.log_progress && processed % 1000 == 0 {
            debug!(
                "Processed {} nodes in {:.2}s",
                processed,
                self.deadline.elapsed().as_secs_f64()
            );
        }

        if let Some(path) = self.memo.get(node) {
            self.statistics.increment(Counters::MemoHits);
            return Ok(Visit::Done(path.clone()));
        }

        if ancestors.contains(&node) {
            self.statistics.increment(Counters::CycleCuts);
            return Ok(Visit::Done(ChainPath::single(node)));
        }

        self.deadline.check()?;
        self.statistics.increment(Counters::Expansions);
        Ok(Visit::Expand(Frame::new(node, ancestors)))
    }
}
