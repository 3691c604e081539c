use std::fmt;

use crate::graphs::graph::Shape;

/// Identity of a line graph node: the identity of a base edge.
///
/// Simple base graphs identify an edge by its endpoints alone, multigraphs
/// need the key as well. A node of the wrong arity for its base graph never
/// exists.
///
/// The derived order is lexicographic over the endpoints and then the key,
/// and is used to visit every undirected line graph edge once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LineNode<V, K> {
    Pair(V, V),
    Keyed(V, V, K),
}

impl<V, K> LineNode<V, K>
where
    V: Ord + Copy,
    K: Copy,
{
    /// Node for the base edge `(source, key, target)` of a graph with shape `base`.
    ///
    /// Undirected endpoints are ordered smaller first, so both orientations
    /// of an edge map to the same node.
    pub fn from_edge((source, key, target): (V, K, V), base: Shape) -> Self {
        let (source, target) = if !base.directed && target < source {
            (target, source)
        } else {
            (source, target)
        };

        if base.multi {
            LineNode::Keyed(source, target, key)
        } else {
            LineNode::Pair(source, target)
        }
    }

    pub fn endpoints(&self) -> (V, V) {
        match *self {
            LineNode::Pair(source, target) | LineNode::Keyed(source, target, _) => {
                (source, target)
            }
        }
    }

    pub fn key(&self) -> Option<K> {
        match *self {
            LineNode::Pair(..) => None,
            LineNode::Keyed(_, _, key) => Some(key),
        }
    }
}

impl<V, K> From<(V, V)> for LineNode<V, K> {
    fn from((source, target): (V, V)) -> Self {
        LineNode::Pair(source, target)
    }
}

impl<V, K> From<(V, V, K)> for LineNode<V, K> {
    fn from((source, target, key): (V, V, K)) -> Self {
        LineNode::Keyed(source, target, key)
    }
}

impl<V, K> fmt::Display for LineNode<V, K>
where
    V: fmt::Display,
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineNode::Pair(source, target) => write!(f, "({source}, {target})"),
            LineNode::Keyed(source, target, key) => write!(f, "({source}, {target}, {key})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_edges_are_canonically_oriented() {
        let node = LineNode::from_edge((3u32, 0usize, 1u32), Shape::UNDIRECTED);
        assert_eq!(node, LineNode::Pair(1, 3));

        let node = LineNode::from_edge((3u32, 2usize, 1u32), Shape::UNDIRECTED_MULTI);
        assert_eq!(node, LineNode::Keyed(1, 3, 2));
    }

    #[test]
    fn directed_edges_keep_their_orientation() {
        let node = LineNode::from_edge((3u32, 0usize, 1u32), Shape::DIRECTED);
        assert_eq!(node, LineNode::Pair(3, 1));
        assert_eq!(node.endpoints(), (3, 1));
        assert_eq!(node.key(), None);

        let node = LineNode::from_edge((3u32, 4usize, 1u32), Shape::DIRECTED_MULTI);
        assert_eq!(node.key(), Some(4));
    }

    #[test]
    fn conversions_and_display() {
        let pair: LineNode<u32, usize> = (0, 1).into();
        let keyed: LineNode<u32, usize> = (0, 1, 2).into();

        assert_eq!(pair.to_string(), "(0, 1)");
        assert_eq!(keyed.to_string(), "(0, 1, 2)");
        assert!(pair < keyed, "pairs sort before keyed nodes");
        assert!(LineNode::<u32, usize>::Keyed(0, 1, 0) < LineNode::Keyed(0, 1, 1));
    }
}
