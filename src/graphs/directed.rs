use crate::graphs::edges::ReadEdges;

/// Incidence access for directed graphs.
///
/// Edges are triples `(source, key, destination)`.
/// The line graph translator uses the outgoing edges of a destination to find
/// successors and the ingoing edges of a source to find predecessors.
///
/// Iteration uses associated iterator types, so implementations can avoid
/// extra allocation and avoid dynamic dispatch.
pub trait Directed: ReadEdges {
    /// Returns all outgoing edges from the given source vertex.
    ///
    /// The source component of every item is equal to `source`.
    fn outgoing(&self, source: Self::Vertex) -> Self::Edges<'_>;

    /// Returns the number of edges with the given source vertex.
    fn outgoing_degree(&self, vertex: Self::Vertex) -> usize {
        self.outgoing(vertex).count()
    }

    /// Returns all incoming edges to the given destination vertex.
    ///
    /// The destination component of every item is equal to `destination`.
    fn ingoing(&self, destination: Self::Vertex) -> Self::Edges<'_>;

    /// Returns the number of edges with the given destination vertex.
    fn ingoing_degree(&self, vertex: Self::Vertex) -> usize {
        self.ingoing(vertex).count()
    }

    /// Returns an iterator over all edges whose source is `from`,
    /// and whose destination is `to`.
    ///
    /// Implementations should walk the smaller of the outgoing list of `from`
    /// and the ingoing list of `to`.
    fn connections(&self, from: Self::Vertex, to: Self::Vertex) -> Self::Edges<'_>;

    /// Returns true when `(from, key, to)` is an edge of the graph.
    fn has_edge(&self, from: Self::Vertex, key: Self::Key, to: Self::Vertex) -> bool {
        self.connections(from, to).any(|(_, k, _)| k == key)
    }
}
