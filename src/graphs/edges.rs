use std::hash::Hash;

/// Common vertex and edge key types used by edge-related traits.
///
/// An edge is always described by a triple `(source, key, target)`.
/// Simple graphs still carry a key, it is just never needed to tell two
/// edges between the same endpoints apart. Multigraphs use it to distinguish
/// parallel edges, and keys are only unique per endpoint pair.
pub trait Edges {
    /// Type used to identify vertices.
    ///
    /// Typically a small copyable value such as `usize`. The total order is
    /// used to canonicalize undirected endpoint pairs.
    type Vertex: Ord + Hash + Copy;

    /// Type used to tell parallel edges apart.
    type Key: Ord + Hash + Copy;
}

/// A graph that supports read-only access to its edges.
///
/// Each edge is yielded as a triple `(source, key, target)`.
/// For undirected graphs every edge is yielded exactly once, in whatever
/// orientation the implementation stores it.
pub trait ReadEdges: Edges {
    /// Iterator over edge triples.
    ///
    /// The order of edges depends on the implementation, but should be stable
    /// for a given graph instance unless the graph is mutated.
    type Edges<'a>: Iterator<Item = (Self::Vertex, Self::Key, Self::Vertex)>
    where
        Self: 'a;

    /// Returns an iterator over all edges in the graph.
    fn edges(&self) -> Self::Edges<'_>;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

/// A graph that supports insertion of edges.
pub trait InsertEdge: Edges {
    /// Inserts a new edge (directed or undirected) into the graph.
    ///
    /// The `endpoints` parameter is a pair `(u, v)`:
    /// - For a directed graph, this is `(source, destination)`.
    /// - For an undirected graph, the order of the vertices is ignored.
    ///
    /// Missing endpoints are added to the vertex set.
    /// On success, returns `Some(key)` identifying the inserted edge among
    /// the edges between the same endpoints. Returns `None` when the edge
    /// cannot be inserted, e.g. a second edge between the same endpoints of
    /// a simple graph.
    fn insert_edge(&mut self, endpoints: (Self::Vertex, Self::Vertex)) -> Option<Self::Key>;
}

/// A graph that supports removal of edges.
pub trait RemoveEdge: Edges {
    /// Removes the edge `(source, key, target)`.
    ///
    /// Returns `true` when an edge was removed and `false` when no such edge
    /// exists. Endpoints stay in the vertex set.
    /// For undirected graphs the endpoints may be given in either order.
    fn remove_edge(&mut self, edge: (Self::Vertex, Self::Key, Self::Vertex)) -> bool;
}
