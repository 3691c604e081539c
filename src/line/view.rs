use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    graphs::{
        directed::Directed,
        edges::{Edges, ReadEdges},
        graph::{Graph, Shape, Shaped},
        undirected::Undirected,
        vertices::Vertices,
    },
    line::{
        node::LineNode,
        translator::{self, Adjacent, BaseEdge},
    },
};

/// Edge store of a base graph.
pub type Store<G> = <G as Graph>::Edges;

/// Base graph vertex type.
pub type Vertex<G> = <Store<G> as Edges>::Vertex;

/// Base graph edge key type.
pub type Key<G> = <Store<G> as Edges>::Key;

/// Line graph node of a base graph `G`.
pub type Node<G> = LineNode<Vertex<G>, Key<G>>;

/// A read-only view of the line graph of a base graph.
///
/// Each node of the line graph is an edge of the base graph, and two nodes
/// are adjacent when their base edges share an endpoint (undirected) or when
/// the first one ends where the second one starts (directed).
///
/// The view keeps a handle to the base graph and its shape flags, and
/// nothing else. Every query is answered from the current content of the
/// base graph, so mutating it through [`LineGraphView::base_mut`] is visible
/// to the next query. The handle can be anything dereferencing to the graph:
/// `&G`, `&mut G`, `Rc<G>`, ...
///
/// Queries about nodes that do not exist, including nodes of the wrong arity
/// for the base graph, answer `false`, `None` or an empty iterator.
///
/// ```
/// use linegraph::{AdjacencyList, LineGraphView, LineNode, Shape};
///
/// let cycle = AdjacencyList::from_edges(Shape::UNDIRECTED, [(0, 1), (1, 2), (2, 3), (3, 0)]);
/// let line = LineGraphView::new(&cycle);
///
/// assert!(line.has_edge(&LineNode::Pair(0, 1), &LineNode::Pair(1, 2)));
/// assert!(!line.has_edge(&LineNode::Pair(0, 1), &LineNode::Pair(2, 3)));
/// assert_eq!(line.edge_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct LineGraphView<B> {
    graph: B,
    /// Shape of the base graph, which decides node identities.
    base: Shape,
    /// Shape of the line graph.
    derivation: Shape,
}

impl<B, G> LineGraphView<B>
where
    B: Deref<Target = G>,
    G: Graph,
{
    /// Line graph with the same shape as its base graph.
    pub fn new(graph: B) -> Self {
        let base = graph.edge_store().shape();
        debug!(%base, "created line graph view");

        Self {
            graph,
            base,
            derivation: base,
        }
    }

    /// Line graph with an explicit shape.
    ///
    /// Directedness must match the base graph. A simple derivation of a
    /// multigraph keeps the keyed node identities and counts every adjacent
    /// pair once. A multi derivation of a simple graph is rejected.
    pub fn with_derivation(graph: B, derivation: Shape) -> Result<Self> {
        let base = graph.edge_store().shape();
        if !base.supports(derivation) {
            warn!(%base, %derivation, "unsupported line graph derivation");
            return Err(Error::UnsupportedDerivation {
                base,
                requested: derivation,
            });
        }

        debug!(%base, %derivation, "created line graph view");
        Ok(Self {
            graph,
            base,
            derivation,
        })
    }

    /// The underlying graph.
    pub fn base(&self) -> &G {
        &self.graph
    }

    /// Shape of the line graph.
    pub fn derivation(&self) -> Shape {
        self.derivation
    }

    pub fn is_directed(&self) -> bool {
        self.derivation.directed
    }

    pub fn is_multigraph(&self) -> bool {
        self.derivation.multi
    }

    fn store<'s>(&'s self) -> &'s Store<G>
    where
        G: 's,
    {
        self.graph.edge_store()
    }

    /// Base edge named by `node`, if it currently exists.
    fn decode(&self, node: &Node<G>) -> Option<BaseEdge<Vertex<G>, Key<G>>> {
        let store = self.store();

        match (*node, self.base.multi) {
            (LineNode::Pair(source, target), false) if self.base.directed => {
                store.connections(source, target).next()
            }
            (LineNode::Pair(source, target), false) => store.links(source, target).next(),
            (LineNode::Keyed(source, target, key), true) => {
                let exists = if self.base.directed {
                    store.has_edge(source, key, target)
                } else {
                    store.has_link(source, key, target)
                };
                exists.then_some((source, key, target))
            }
            _ => None,
        }
    }

    /// Number of nodes, that is the number of base edges.
    pub fn node_count(&self) -> usize {
        self.store().edge_count()
    }

    /// Same as [`LineGraphView::node_count`].
    pub fn order(&self) -> usize {
        self.node_count()
    }

    /// Returns true when `node` names an existing base edge.
    pub fn has_node(&self, node: &Node<G>) -> bool {
        self.decode(node).is_some()
    }

    /// Returns true when the line graph has an edge from `node` to `other`.
    ///
    /// For undirected line graphs the argument order does not matter.
    pub fn has_edge(&self, node: &Node<G>, other: &Node<G>) -> bool {
        self.edge_multiplicity(node, other) > 0
    }

    /// Number of line graph edges from `node` to `other`.
    ///
    /// Always 0 or 1 for simple derivations.
    pub fn edge_multiplicity(&self, node: &Node<G>, other: &Node<G>) -> usize {
        match (self.decode(node), self.decode(other)) {
            (Some(first), Some(second)) => translator::multiplicity(first, second, self.derivation),
            _ => 0,
        }
    }

    /// Nodes adjacent to `node`, with the multiplicity of each line graph edge.
    ///
    /// For directed line graphs these are the successors.
    pub fn adjacent(&self, node: &Node<G>) -> Adjacency<'_, G> {
        let adjacent = match self.decode(node) {
            Some(edge) => translator::adjacent(self.store(), edge, self.derivation),
            None => Adjacent::Empty,
        };
        Adjacency::new(adjacent, self.base)
    }

    /// Nodes adjacent to `node`.
    ///
    /// A neighbor is repeated once per line graph edge in multi derivations.
    /// For directed line graphs these are the successors.
    pub fn neighbors(&self, node: &Node<G>) -> Neighbors<'_, G> {
        Neighbors::new(self.adjacent(node))
    }

    /// Nodes reached by a line graph edge leaving `node`.
    pub fn successors(&self, node: &Node<G>) -> Neighbors<'_, G> {
        self.neighbors(node)
    }

    /// Nodes with a line graph edge into `node`.
    ///
    /// Same as [`LineGraphView::neighbors`] for undirected line graphs.
    pub fn predecessors(&self, node: &Node<G>) -> Neighbors<'_, G> {
        if !self.derivation.directed {
            return self.neighbors(node);
        }

        let adjacent = match self.decode(node) {
            Some(edge) => translator::predecessors(self.store(), edge),
            None => Adjacent::Empty,
        };
        Neighbors::new(Adjacency::new(adjacent, self.base))
    }

    /// Number of line graph edges at `node`, or `None` when it does not exist.
    ///
    /// This is the number of items of [`LineGraphView::neighbors`], so for
    /// directed line graphs it counts outgoing edges only.
    pub fn degree(&self, node: &Node<G>) -> Option<usize> {
        self.out_degree(node)
    }

    /// Number of line graph edges leaving `node`.
    pub fn out_degree(&self, node: &Node<G>) -> Option<usize> {
        let edge = self.decode(node)?;
        if self.derivation.directed {
            let (_, _, target) = edge;
            return Some(self.store().outgoing_degree(target));
        }

        Some(
            translator::adjacent(self.store(), edge, self.derivation)
                .map(|(_, count)| count)
                .sum(),
        )
    }

    /// Number of line graph edges entering `node`.
    pub fn in_degree(&self, node: &Node<G>) -> Option<usize> {
        if !self.derivation.directed {
            return self.out_degree(node);
        }

        let (source, _, _) = self.decode(node)?;
        Some(self.store().ingoing_degree(source))
    }

    /// All nodes, one per base edge.
    ///
    /// The order follows the edge enumeration of the base graph.
    pub fn nodes(&self) -> Nodes<'_, G> {
        Nodes {
            edges: self.store().edges(),
            base: self.base,
        }
    }

    /// All line graph edges as `(node, other)` pairs.
    ///
    /// Undirected edges are reported once, from their smaller node.
    /// Edges are repeated per multiplicity in multi derivations.
    pub fn edges(&self) -> LineEdges<'_, G> {
        LineEdges {
            store: self.store(),
            base: self.base,
            derivation: self.derivation,
            edges: self.store().edges(),
            current: None,
            pending: None,
        }
    }

    /// Number of line graph edges, counting multiplicity.
    pub fn edge_count(&self) -> usize {
        let store = self.store();
        let incidences: usize = store
            .edges()
            .map(|edge| {
                translator::adjacent(store, edge, self.derivation)
                    .map(|(_, count)| count)
                    .sum::<usize>()
            })
            .sum();

        if self.derivation.directed {
            incidences
        } else {
            incidences / 2
        }
    }
}

impl<B, G> LineGraphView<B>
where
    B: DerefMut<Target = G>,
    G: Graph,
{
    /// Mutable access to the underlying graph.
    ///
    /// The view stays valid: later queries see the mutated graph.
    pub fn base_mut(&mut self) -> &mut G {
        &mut self.graph
    }
}

impl<B, G> fmt::Display for LineGraphView<B>
where
    B: Deref<Target = G>,
    G: Graph,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LineGraphView of {} graph with {} vertices and {} edges",
            self.base,
            self.graph.vertex_store().vertex_count(),
            self.store().edge_count()
        )
    }
}

/// Iterator over the nodes of a line graph.
pub struct Nodes<'a, G>
where
    G: Graph + 'a,
{
    edges: <Store<G> as ReadEdges>::Edges<'a>,
    base: Shape,
}

impl<'a, G> Iterator for Nodes<'a, G>
where
    G: Graph + 'a,
{
    type Item = Node<G>;

    fn next(&mut self) -> Option<Self::Item> {
        self.edges
            .next()
            .map(|edge| LineNode::from_edge(edge, self.base))
    }
}

/// Iterator over `(node, multiplicity)` pairs adjacent to a node.
pub struct Adjacency<'a, G>
where
    G: Graph + 'a,
{
    adjacent: Adjacent<'a, Store<G>>,
    base: Shape,
}

impl<'a, G> Adjacency<'a, G>
where
    G: Graph + 'a,
{
    fn new(adjacent: Adjacent<'a, Store<G>>, base: Shape) -> Self {
        Self { adjacent, base }
    }
}

impl<'a, G> Iterator for Adjacency<'a, G>
where
    G: Graph + 'a,
{
    type Item = (Node<G>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.adjacent
            .next()
            .map(|(edge, count)| (LineNode::from_edge(edge, self.base), count))
    }
}

/// Iterator over the neighbors of a node, repeated per multiplicity.
pub struct Neighbors<'a, G>
where
    G: Graph + 'a,
{
    adjacency: Adjacency<'a, G>,
    pending: Option<(Node<G>, usize)>,
}

impl<'a, G> Neighbors<'a, G>
where
    G: Graph + 'a,
{
    fn new(adjacency: Adjacency<'a, G>) -> Self {
        Self {
            adjacency,
            pending: None,
        }
    }
}

impl<'a, G> Iterator for Neighbors<'a, G>
where
    G: Graph + 'a,
{
    type Item = Node<G>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((node, remaining)) = self.pending.as_mut() {
            let node = *node;
            *remaining -= 1;
            if *remaining == 0 {
                self.pending = None;
            }
            return Some(node);
        }

        let (node, count) = self.adjacency.next()?;
        if count > 1 {
            self.pending = Some((node, count - 1));
        }
        Some(node)
    }
}

/// Iterator over the edges of a line graph.
///
/// Walks the base edges once and expands each into its adjacent edges.
/// Undirected pairs are only reported from their smaller node, which visits
/// every pair once without remembering visited pairs.
pub struct LineEdges<'a, G>
where
    G: Graph + 'a,
{
    store: &'a Store<G>,
    base: Shape,
    derivation: Shape,
    edges: <Store<G> as ReadEdges>::Edges<'a>,
    current: Option<(Node<G>, Adjacency<'a, G>)>,
    pending: Option<((Node<G>, Node<G>), usize)>,
}

impl<'a, G> Iterator for LineEdges<'a, G>
where
    G: Graph + 'a,
{
    type Item = (Node<G>, Node<G>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((pair, remaining)) = self.pending.as_mut() {
                let pair = *pair;
                *remaining -= 1;
                if *remaining == 0 {
                    self.pending = None;
                }
                return Some(pair);
            }

            if let Some((node, adjacency)) = self.current.as_mut() {
                if let Some((other, count)) = adjacency.next() {
                    if self.derivation.directed || *node < other {
                        self.pending = Some(((*node, other), count));
                    }
                    continue;
                }
            }

            let edge = self.edges.next()?;
            let adjacent = translator::adjacent(self.store, edge, self.derivation);
            self.current = Some((
                LineNode::from_edge(edge, self.base),
                Adjacency::new(adjacent, self.base),
            ));
        }
    }
}
