//! Prefix tries for keyword and operator recognition.
//!
//! A [`PrefixTrie`] is built once from a word list and never changes
//! afterwards. The lexer walks it one character at a time with
//! [`PrefixTrie::step`], holding a [`NodeId`] as its position; a node is
//! [terminal](PrefixTrie::is_terminal) when the path from the root to it
//! spells a complete word.
//!
//! Nodes live in an [`IndexVec`] arena, with the root always at index 0.

use munch_util::{define_idx, IndexVec};
use rustc_hash::FxHashMap;

use crate::error::TrieError;

define_idx!(
    /// Handle to a node of a [`PrefixTrie`].
    NodeId
);

#[derive(Clone, Debug, Default)]
struct TrieNode {
    children: FxHashMap<char, NodeId>,
    terminal: bool,
}

/// An immutable prefix tree over characters.
///
/// # Example
///
/// ```
/// use munch_lex::trie::PrefixTrie;
///
/// let trie = PrefixTrie::build(["=", "=="]).unwrap();
/// let eq = trie.start('=').unwrap();
/// assert!(trie.is_terminal(eq));
/// let eq_eq = trie.step(eq, '=').unwrap();
/// assert!(trie.is_terminal(eq_eq));
/// assert!(trie.step(eq_eq, '=').is_none());
/// ```
#[derive(Clone, Debug)]
pub struct PrefixTrie {
    nodes: IndexVec<NodeId, TrieNode>,
    words: usize,
}

impl PrefixTrie {
    /// The root node. Never terminal.
    pub const ROOT: NodeId = NodeId(0);

    /// Builds a trie containing every word in `words`.
    ///
    /// Duplicate words are accepted and stored once. An empty word is
    /// rejected, since it would make the root terminal.
    pub fn build<I, S>(words: I) -> Result<Self, TrieError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self {
            nodes: IndexVec::new(),
            words: 0,
        };
        trie.nodes.push(TrieNode::default());

        for (index, word) in words.into_iter().enumerate() {
            let word = word.as_ref();
            if word.is_empty() {
                return Err(TrieError::EmptyWord { index });
            }
            trie.insert(word);
        }
        Ok(trie)
    }

    fn insert(&mut self, word: &str) {
        let mut node = Self::ROOT;
        for c in word.chars() {
            node = match self.nodes[node].children.get(&c) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(c, child);
                    child
                },
            };
        }
        if !self.nodes[node].terminal {
            self.nodes[node].terminal = true;
            self.words += 1;
        }
    }

    /// The child of `node` reached by `c`, if any configured word continues
    /// that way.
    #[inline]
    pub fn step(&self, node: NodeId, c: char) -> Option<NodeId> {
        self.nodes.get(node)?.children.get(&c).copied()
    }

    /// Shorthand for `step(PrefixTrie::ROOT, c)`.
    #[inline]
    pub fn start(&self, c: char) -> Option<NodeId> {
        self.step(Self::ROOT, c)
    }

    /// Returns true if a configured word ends exactly at `node`.
    #[inline]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes.get(node).is_some_and(|n| n.terminal)
    }

    /// Walks `prefix` from the root.
    pub fn walk(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .chars()
            .try_fold(Self::ROOT, |node, c| self.step(node, c))
    }

    /// Returns true if `word` is a complete configured word.
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| self.is_terminal(node))
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every stored word, sorted.
    pub fn words(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.words);
        let mut stack = vec![(Self::ROOT, String::new())];
        while let Some((node, prefix)) = stack.pop() {
            let entry = &self.nodes[node];
            if entry.terminal {
                out.push(prefix.clone());
            }
            for (&c, &child) in &entry.children {
                let mut next = prefix.clone();
                next.push(c);
                stack.push((child, next));
            }
        }
        out.sort();
        out
    }
}
