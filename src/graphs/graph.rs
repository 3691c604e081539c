use std::fmt;

use crate::graphs::{
    directed::Directed,
    edges::Edges,
    undirected::Undirected,
    vertices::Vertices,
};

/// Shape flags of a graph: directedness and support for parallel edges.
///
/// A shape is fixed when a graph is created. It is also used to describe how
/// a line graph is derived from its base graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub directed: bool,
    pub multi: bool,
}

impl Shape {
    pub const UNDIRECTED: Shape = Shape {
        directed: false,
        multi: false,
    };

    pub const UNDIRECTED_MULTI: Shape = Shape {
        directed: false,
        multi: true,
    };

    pub const DIRECTED: Shape = Shape {
        directed: true,
        multi: false,
    };

    pub const DIRECTED_MULTI: Shape = Shape {
        directed: true,
        multi: true,
    };

    /// Same directedness, without parallel edges.
    pub fn simple(self) -> Self {
        Self {
            multi: false,
            ..self
        }
    }

    /// Same directedness, with parallel edges.
    pub fn multi(self) -> Self {
        Self {
            multi: true,
            ..self
        }
    }

    /// Returns true when a line graph with shape `derivation` can be derived
    /// from a base graph of this shape.
    ///
    /// Directedness has to match. A multi derivation needs a multigraph,
    /// since a simple graph has no keys to count parallel incidences with.
    pub fn supports(self, derivation: Shape) -> bool {
        self.directed == derivation.directed && (self.multi || !derivation.multi)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.directed { "directed" } else { "undirected" };
        let multiplicity = if self.multi { "multi" } else { "simple" };
        write!(f, "{direction} {multiplicity}")
    }
}

/// A structure that reports its shape flags.
pub trait Shaped {
    /// True when edges are ordered pairs.
    fn is_directed(&self) -> bool;

    /// True when two vertices may be joined by several edges.
    fn is_multi(&self) -> bool;

    fn shape(&self) -> Shape {
        Shape {
            directed: self.is_directed(),
            multi: self.is_multi(),
        }
    }
}

/// High level abstraction for a finite graph.
///
/// Graph composes two separate components a vertex store and an edge store.
/// The Vertices type is responsible for describing the vertex set.
/// The Edges type is responsible for the edge set, its shape and the
/// incidence structure, in both the directed and the undirected reading.
/// Only the reading matching [`Shaped::is_directed`] is meaningful.
///
/// This trait does not prescribe how vertices and edges are stored.
/// Concrete graph types can use a single structure for both roles or use
/// separate structures for vertex data and edge data.
pub trait Graph {
    /// Vertex storage component.
    type Vertices: Vertices<Vertex = <Self::Edges as Edges>::Vertex>;

    /// Edge storage component.
    type Edges: Directed + Undirected + Shaped;

    /// Returns a shared reference to the edge storage.
    fn edge_store(&self) -> &Self::Edges;

    /// Returns a shared reference to the vertex storage.
    fn vertex_store(&self) -> &Self::Vertices;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_derivations() {
        assert!(Shape::UNDIRECTED.supports(Shape::UNDIRECTED));
        assert!(Shape::UNDIRECTED_MULTI.supports(Shape::UNDIRECTED));
        assert!(Shape::DIRECTED_MULTI.supports(Shape::DIRECTED_MULTI));

        assert!(!Shape::UNDIRECTED.supports(Shape::UNDIRECTED_MULTI), "no keys to count");
        assert!(!Shape::DIRECTED.supports(Shape::UNDIRECTED), "directedness differs");
        assert!(!Shape::UNDIRECTED_MULTI.supports(Shape::DIRECTED_MULTI));
    }

    #[test]
    fn simple_and_multi_keep_direction() {
        assert_eq!(Shape::DIRECTED_MULTI.simple(), Shape::DIRECTED);
        assert_eq!(Shape::UNDIRECTED.multi(), Shape::UNDIRECTED_MULTI);
        assert_eq!(Shape::DIRECTED.to_string(), "directed simple");
        assert_eq!(Shape::UNDIRECTED_MULTI.to_string(), "undirected multi");
    }
}
