// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shared chain paths.
//!
//! Every memo entry is `[node] + best child path`, so the paths of a search
//! share long common tails. `ChainPath` is a persistent singly-linked list:
//! prepending a node is O(1) and never copies the tail.

use std::rc::Rc;

use crate::token::TokenId;

/// An immutable, non-empty chain of token ids.
#[derive(Debug, Clone)]
pub struct ChainPath(Rc<Link>);

#[derive(Debug)]
struct Link {
    head: TokenId,
    len: usize,
    tail: Option<ChainPath>,
}

impl ChainPath {
    /// A chain consisting of `node` alone.
    pub fn single(node: TokenId) -> Self {
        Self::cons(node, None)
    }

    /// `node` followed by `tail`.
    pub fn cons(node: TokenId, tail: Option<ChainPath>) -> Self {
        let len = 1 + tail.as_ref().map_or(0, ChainPath::len);
        Self(Rc::new(Link {
            head: node,
            len,
            tail,
        }))
    }

    /// First token of the chain.
    #[cfg(test)]
    pub(crate) fn head(&self) -> TokenId {
        self.0.head
    }

    /// Number of tokens in the chain. Always at least 1.
    pub fn len(&self) -> usize {
        self.0.len
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { next: Some(self) }
    }

    pub fn to_vec(&self) -> Vec<TokenId> {
        let mut ids = Vec::with_capacity(self.len());
        ids.extend(self.iter());
        ids
    }
}

/// Iterator over the ids of a [`ChainPath`], head first.
pub struct Iter<'a> {
    next: Option<&'a ChainPath>,
}

impl Iterator for Iter<'_> {
    type Item = TokenId;

    fn next(&mut self) -> Option<TokenId> {
        let path = self.next?;
        self.next = path.0.tail.as_ref();
        Some(path.0.head)
    }
}

impl Drop for Link {
    // Unlink iteratively; the default drop would recurse once per node.
    fn drop(&mut self) {
        let mut next = self.tail.take();
        while let Some(ChainPath(rc)) = next {
            match Rc::try_unwrap(rc) {
                Ok(mut link) => next = link.tail.take(),
                Err(_) => break,
            }
        }
    }
}
