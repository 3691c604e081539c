/// Read access to the vertex set of a graph.
///
/// Vertices without any edge are still part of the set.
pub trait Vertices {
    type Vertex;

    /// Iterator over the vertex set, in no particular order.
    type Vertices<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_>;

    /// Size of the vertex set.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}
