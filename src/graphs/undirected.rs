use crate::graphs::edges::ReadEdges;

/// Incidence access for undirected graphs.
///
/// `Undirected` is the analogue of [`Directed`](crate::graphs::directed::Directed)
/// for undirected graphs: edges are unordered connections between two
/// (not necessarily distinct) vertices.
///
/// Iteration uses associated iterator types, so implementations can avoid
/// extra allocation and avoid dynamic dispatch.
pub trait Undirected: ReadEdges {
    /// Returns every edge incident to `vertex`, oriented away from it.
    ///
    /// Each item is a triple `(vertex, key, other)`.
    /// A loop edge at `vertex` is yielded exactly once, with `other == vertex`.
    fn incident(&self, vertex: Self::Vertex) -> Self::Edges<'_>;

    /// Returns an iterator over all edges whose endpoints are `a` and `b`
    /// (in either order).
    ///
    /// Each item is oriented as `(a, key, b)`.
    /// For `a == b`, this returns all loop edges at `a`.
    /// Implementations should walk the smaller of the two incidence lists.
    fn links(&self, a: Self::Vertex, b: Self::Vertex) -> Self::Edges<'_>;

    /// Returns true when `key` names an edge whose endpoints are `a` and `b`
    /// in some order.
    fn has_link(&self, a: Self::Vertex, key: Self::Key, b: Self::Vertex) -> bool {
        self.links(a, b).any(|(_, k, _)| k == key)
    }
}
