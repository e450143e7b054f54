use log::{debug, trace};

use super::priority_queue::PriorityQueue;
use crate::tools::freq_count::FrequencyTable;

/// Index of a node inside its tree's arena.
pub type NodeId = usize;

/// A node is either a symbol-carrying leaf or an internal node with exactly two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Leaf { symbol: char, weight: u64 },
    Internal { left: NodeId, right: NodeId, weight: u64 },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }
}

/// Huffman tree stored as an arena of nodes addressed by index.
///
/// An empty tree has no root. A tree with one distinct symbol is a lone leaf with no internal
/// node above it. Otherwise N leaves hang under N-1 internal nodes.
#[derive(Debug, Clone, Default)]
pub struct HuffTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl HuffTree {
    /// Build the tree for a frequency table.
    ///
    /// Leaves are queued in ascending symbol order and the queue breaks weight ties first-in
    /// first-out, so the same frequencies always give the same tree.
    pub fn from_frequencies(freqs: &FrequencyTable) -> Self {
        let mut symbols: Vec<(char, u64)> = freqs.iter().map(|(&c, &f)| (c, f)).collect();
        symbols.sort_unstable_by_key(|&(c, _)| c);
        debug!("Building Huffman tree from {} distinct symbols", symbols.len());

        let mut tree = HuffTree {
            nodes: Vec::with_capacity((symbols.len() * 2).saturating_sub(1)),
            root: None,
        };
        let mut queue = PriorityQueue::with_capacity(symbols.len());
        for (symbol, weight) in symbols {
            let id = tree.add(Node::Leaf { symbol, weight });
            queue.push(id, weight);
        }

        // Pop two, merge, push back, until one is left. The first popped goes left.
        while let Some(left) = queue.pop() {
            let right = match queue.pop() {
                Some(right) => right,
                None => {
                    tree.root = Some(left.data);
                    break;
                }
            };
            let weight = left.weight + right.weight;
            trace!(
                "Merging nodes {} ({}) and {} ({})",
                left.data,
                left.weight,
                right.data,
                right.weight
            );
            let id = tree.add(Node::Internal {
                left: left.data,
                right: right.data,
                weight,
            });
            queue.push(id, weight);
        }

        debug!(
            "Tree complete: {} leaves, {} internal nodes",
            tree.leaf_count(),
            tree.internal_count()
        );
        tree
    }

    /// Assemble a tree from an arena and root that the caller has already checked.
    pub(crate) fn from_parts(nodes: Vec<Node>, root: Option<NodeId>) -> Self {
        Self { nodes, root }
    }

    fn add(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total weight of the tree, which is the symbol count of the text it was built from.
    pub fn weight(&self) -> u64 {
        self.root.map_or(0, |r| self.nodes[r].weight())
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Leaf { .. }))
            .count()
    }

    pub fn internal_count(&self) -> usize {
        self.nodes.len() - self.leaf_count()
    }

    /// Pre-order walk from the root: node, then left subtree, then right subtree.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }
}

/// Iterator behind [`HuffTree::preorder`]. Uses an explicit stack so skewed trees cannot
/// exhaust the call stack.
pub struct Preorder<'a> {
    tree: &'a HuffTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        let node = &tree.nodes[id];
        if let Node::Internal { left, right, .. } = node {
            // Right goes on first so left comes off first
            self.stack.push(*right);
            self.stack.push(*left);
        }
        Some(node)
    }
}

/// Trees are equal when they have the same shape with the same symbols at the leaves.
/// Weights and arena layout are ignored; weights never travel in the serialized form.
impl PartialEq for HuffTree {
    fn eq(&self, other: &Self) -> bool {
        let mut a = self.preorder();
        let mut b = other.preorder();
        loop {
            match (a.next(), b.next()) {
                (None, None) => return true,
                (Some(Node::Leaf { symbol: x, .. }), Some(Node::Leaf { symbol: y, .. })) => {
                    if x != y {
                        return false;
                    }
                }
                (Some(Node::Internal { .. }), Some(Node::Internal { .. })) => {}
                _ => return false,
            }
        }
    }
}

impl Eq for HuffTree {}

#[cfg(test)]
mod test {
    use super::{HuffTree, Node};
    use crate::tools::freq_count::count_frequencies;

    /// Every internal node must have two distinct, in-range children and each node but the
    /// root must be referenced exactly once.
    fn assert_full_binary(tree: &HuffTree) {
        let mut parents = vec![0_usize; tree.nodes.len()];
        for node in &tree.nodes {
            if let Node::Internal { left, right, weight } = node {
                assert_ne!(left, right);
                parents[*left] += 1;
                parents[*right] += 1;
                assert_eq!(
                    *weight,
                    tree.node(*left).weight() + tree.node(*right).weight()
                );
            }
        }
        let root = tree.root().unwrap();
        for (id, count) in parents.iter().enumerate() {
            assert_eq!(*count, if id == root { 0 } else { 1 });
        }
    }

    #[test]
    fn empty_test() {
        let tree = HuffTree::from_frequencies(&count_frequencies(""));
        assert!(tree.is_empty());
        assert_eq!(tree.weight(), 0);
        assert_eq!(tree.preorder().count(), 0);
    }

    #[test]
    fn single_symbol_test() {
        let tree = HuffTree::from_frequencies(&count_frequencies("zzzz"));
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.internal_count(), 0);
        let root = tree.root().unwrap();
        assert_eq!(*tree.node(root), Node::Leaf { symbol: 'z', weight: 4 });
    }

    #[test]
    fn aabcd_shape_test() {
        let tree = HuffTree::from_frequencies(&count_frequencies("aabcd"));
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.internal_count(), 3);
        assert_eq!(tree.weight(), 5);
        assert_full_binary(&tree);

        // b+c -> 2, then d(1) + a(2) -> 3, then (b c)(2) + (d a)(3) -> 5
        let shape: String = tree
            .preorder()
            .map(|n| match n {
                Node::Leaf { symbol, .. } => *symbol,
                Node::Internal { .. } => '*',
            })
            .collect();
        assert_eq!(shape, "**bc*da");
    }

    #[test]
    fn node_counts_test() {
        let text = "the quick brown fox jumps over the lazy dog, Ѐ€🔥";
        let freqs = count_frequencies(text);
        let tree = HuffTree::from_frequencies(&freqs);
        assert_eq!(tree.leaf_count(), freqs.len());
        assert_eq!(tree.internal_count(), freqs.len() - 1);
        assert_eq!(tree.weight(), text.chars().count() as u64);
        assert_full_binary(&tree);
    }

    #[test]
    fn deterministic_test() {
        let a = HuffTree::from_frequencies(&count_frequencies("mississippi river"));
        // Same multiset of symbols in another order
        let b = HuffTree::from_frequencies(&count_frequencies("revir ippississim"));
        assert_eq!(a, b);
        let shape_a: Vec<Node> = a.preorder().copied().collect();
        let shape_b: Vec<Node> = b.preorder().copied().collect();
        assert_eq!(shape_a, shape_b);
    }

    #[test]
    fn equality_ignores_weights_test() {
        let a = HuffTree::from_frequencies(&count_frequencies("aab"));
        let b = HuffTree::from_frequencies(&count_frequencies("aaaaab"));
        let c = HuffTree::from_frequencies(&count_frequencies("abb"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
