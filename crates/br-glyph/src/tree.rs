use std::cmp::Ordering;

use br_core::codec::{DotPattern, alphabet};
use br_core::traits::Encoder;

/// Noeud de l'arbre : motif, lettre décodée et sous-arbres possédés.
#[derive(Debug)]
struct TreeNode {
    key: DotPattern,
    symbol: char,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn new(key: DotPattern, symbol: char) -> Self {
        Self {
            key,
            symbol,
            left: None,
            right: None,
        }
    }
}

/// Arbre binaire de recherche (non équilibré) motif → lettre.
///
/// Built once from the alphabet, inserted 'a' → 'z', read-only afterwards.
/// Lookup is O(log n) expected, O(n) worst case.
///
/// # Example
/// ```
/// use br_core::{BrailleEncoder, Encoder};
/// use br_glyph::tree::SymbolTree;
///
/// let tree = SymbolTree::from_encoder(&BrailleEncoder);
/// assert_eq!(tree.len(), 26);
/// assert_eq!(tree.lookup(BrailleEncoder.to_binary('m')), Some('m'));
/// ```
#[derive(Debug, Default)]
pub struct SymbolTree {
    root: Option<Box<TreeNode>>,
    len: usize,
}

impl SymbolTree {
    /// Build the tree from every letter of the alphabet, in alphabet order.
    #[must_use]
    pub fn from_encoder(encoder: &impl Encoder) -> Self {
        let mut tree = Self::default();
        for letter in alphabet() {
            tree.insert(encoder.to_binary(letter), letter);
        }
        log::debug!(
            "Arbre de décodage construit : {} symboles, profondeur {}",
            tree.len,
            tree.depth()
        );
        tree
    }

    /// Standard unbalanced insertion. Returns `false` (tree unchanged) when
    /// the key is already present.
    fn insert(&mut self, key: DotPattern, symbol: char) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    log::warn!("Motif {:#08b} déjà associé à '{}'", key.bits(), node.symbol);
                    return false;
                }
            };
        }
        *slot = Some(Box::new(TreeNode::new(key, symbol)));
        self.len += 1;
        true
    }

    /// Exact-match lookup, `None` when no letter carries `key`.
    #[must_use]
    pub fn lookup(&self, key: DotPattern) -> Option<char> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node.symbol),
            };
        }
        None
    }

    /// Number of stored symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Nodes on the longest root-to-leaf path (0 for an empty tree).
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut level: Vec<&TreeNode> = self.root.as_deref().into_iter().collect();
        while !level.is_empty() {
            depth += 1;
            level = level
                .into_iter()
                .flat_map(|n| n.left.as_deref().into_iter().chain(n.right.as_deref()))
                .collect();
        }
        depth
    }

    /// In-order traversal: (pattern, letter) pairs by increasing pattern.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }
}

/// In-order iterator over a [`SymbolTree`].
pub struct Iter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut node: Option<&'a TreeNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = (DotPattern, char);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some((node.key, node.symbol))
    }
}
