//! Lazy pre-order search over a concept forest
//!
//! The traversal keeps one child iterator per open level, so it yields a
//! match as soon as it is found and can be dropped at any point without
//! walking the rest of the tree.

use super::concept::ConceptNode;

/// Iterator over concepts matching a query, in pre-order
pub struct Matches<'a> {
    query: &'a str,
    stack: Vec<std::slice::Iter<'a, ConceptNode>>,
    visited: usize,
}

impl<'a> Matches<'a> {
    /// Number of nodes tested so far
    pub fn visited(&self) -> usize {
        self.visited
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a ConceptNode;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(node) => {
                    self.visited += 1;
                    if !node.children.is_empty() {
                        self.stack.push(node.children.iter());
                    }
                    if node.matches(self.query) {
                        return Some(node);
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Concepts in `forest` matching `query`, parents before children
pub fn find_matches<'a>(query: &'a str, forest: &'a [ConceptNode]) -> Matches<'a> {
    Matches {
        query,
        stack: vec![forest.iter()],
        visited: 0,
    }
}
