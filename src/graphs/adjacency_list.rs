use std::{
    collections::hash_map::{Iter, Keys},
    hash::Hash,
    iter::Copied,
    slice,
};

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::graphs::{
    directed::Directed,
    edges::{Edges, InsertEdge, ReadEdges, RemoveEdge},
    graph::{Graph, Shape, Shaped},
    undirected::Undirected,
    vertices::Vertices,
};

/// Mutable adjacency list graph of any [`Shape`].
///
/// Every vertex owns a list of `(key, other)` entries.
/// For directed graphs `outgoing[u]` holds the targets of edges leaving `u`
/// and `ingoing[v]` holds the sources of edges entering `v`.
/// For undirected graphs only `outgoing` is used: a non-loop edge `{u, v}`
/// is stored once in the list of `u` and once in the list of `v`, a loop is
/// stored once in the list of its vertex.
///
/// Keys are assigned per endpoint pair, starting at zero and reusing the
/// lowest free key. In simple graphs every edge has key zero.
#[derive(Debug, Clone)]
pub struct AdjacencyList<V> {
    shape: Shape,
    outgoing: FxHashMap<V, Vec<(usize, V)>>,
    ingoing: FxHashMap<V, Vec<(usize, V)>>,
    edge_count: usize,
}

impl<V> AdjacencyList<V>
where
    V: Ord + Hash + Copy,
{
    /// Empty graph with the given shape.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            outgoing: FxHashMap::default(),
            ingoing: FxHashMap::default(),
            edge_count: 0,
        }
    }

    pub fn undirected() -> Self {
        Self::new(Shape::UNDIRECTED)
    }

    pub fn undirected_multi() -> Self {
        Self::new(Shape::UNDIRECTED_MULTI)
    }

    pub fn directed() -> Self {
        Self::new(Shape::DIRECTED)
    }

    pub fn directed_multi() -> Self {
        Self::new(Shape::DIRECTED_MULTI)
    }

    /// Builds a graph of the given shape from a list of endpoint pairs.
    ///
    /// Pairs that cannot be inserted (repeated pairs in a simple graph)
    /// are skipped.
    pub fn from_edges<I>(shape: Shape, edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new(shape);
        for endpoints in edges {
            graph.insert_edge(endpoints);
        }
        graph
    }

    /// Adds an isolated vertex. Returns false when it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.outgoing.contains_key(&vertex) {
            return false;
        }

        self.outgoing.insert(vertex, Vec::new());
        if self.shape.directed {
            self.ingoing.insert(vertex, Vec::new());
        }
        true
    }

    /// Keys of the edges stored from `u` towards `v`.
    fn keys_between(&self, u: V, v: V) -> impl Iterator<Item = usize> + '_ {
        self.outgoing
            .get(&u)
            .into_iter()
            .flatten()
            .filter(move |&&(_, other)| other == v)
            .map(|&(key, _)| key)
    }

    /// Lists walked by ingoing queries.
    ///
    /// Undirected graphs keep a single symmetric incidence list.
    fn ingoing_lists(&self) -> &FxHashMap<V, Vec<(usize, V)>> {
        if self.shape.directed {
            &self.ingoing
        } else {
            &self.outgoing
        }
    }
}

fn detach<V: Copy + Eq>(list: Option<&mut Vec<(usize, V)>>, key: usize, other: V) -> bool {
    let Some(list) = list else {
        return false;
    };

    match list.iter().position(|&(k, o)| k == key && o == other) {
        Some(index) => {
            list.remove(index);
            true
        }
        None => false,
    }
}

impl<V> Edges for AdjacencyList<V>
where
    V: Ord + Hash + Copy,
{
    type Vertex = V;

    type Key = usize;
}

impl<V> ReadEdges for AdjacencyList<V>
where
    V: Ord + Hash + Copy,
{
    type Edges<'a>
        = AdjacencyEdges<'a, V>
    where
        Self: 'a;

    /// Iterator over all edges in the graph.
    ///
    /// Undirected edges are yielded once, with the smaller endpoint first.
    fn edges(&self) -> AdjacencyEdges<'_, V> {
        AdjacencyEdges::scan(&self.outgoing, !self.shape.directed)
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<V> InsertEdge for AdjacencyList<V>
where
    V: Ord + Hash + Copy,
{
    fn insert_edge(&mut self, (u, v): (V, V)) -> Option<usize> {
        let mut taken: Vec<usize> = self.keys_between(u, v).collect();
        if !self.shape.multi && !taken.is_empty() {
            return None;
        }

        taken.sort_unstable();
        let key = taken
            .iter()
            .enumerate()
            .find(|&(index, &key)| index != key)
            .map_or(taken.len(), |(index, _)| index);

        self.add_vertex(u);
        self.add_vertex(v);

        self.outgoing.entry(u).or_default().push((key, v));
        if self.shape.directed {
            self.ingoing.entry(v).or_default().push((key, u));
        } else if u != v {
            self.outgoing.entry(v).or_default().push((key, u));
        }
        self.edge_count += 1;

        trace!(key, shape = %self.shape, "inserted edge");
        Some(key)
    }
}

impl<V> RemoveEdge for AdjacencyList<V>
where
    V: Ord + Hash + Copy,
{
    fn remove_edge(&mut self, (u, key, v): (V, usize, V)) -> bool {
        if !detach(self.outgoing.get_mut(&u), key, v) {
            return false;
        }

        if self.shape.directed {
            detach(self.ingoing.get_mut(&v), key, u);
        } else if u != v {
            detach(self.outgoing.get_mut(&v), key, u);
        }
        self.edge_count -= 1;

        trace!(key, shape = %self.shape, "removed edge");
        true
    }
}

impl<V> Directed for AdjacencyList<V>
where
    V: Ord + Hash + Copy,
{
    fn outgoing(&self, source: V) -> AdjacencyEdges<'_, V> {
        AdjacencyEdges::around(&self.outgoing, source, None, false)
    }

    fn outgoing_degree(&self, vertex: V) -> usize {
        self.outgoing.get(&vertex).map_or(0, Vec::len)
    }

    fn ingoing(&self, destination: V) -> AdjacencyEdges<'_, V> {
        AdjacencyEdges::around(self.ingoing_lists(), destination, None, true)
    }

    fn ingoing_degree(&self, vertex: V) -> usize {
        self.ingoing_lists().get(&vertex).map_or(0, Vec::len)
    }

    /// Walks the shorter of the outgoing list of `from` and the ingoing list
    /// of `to`.
    fn connections(&self, from: V, to: V) -> AdjacencyEdges<'_, V> {
        if self.ingoing_degree(to) < self.outgoing_degree(from) {
            AdjacencyEdges::around(self.ingoing_lists(), to, Some(from), true)
        } else {
            AdjacencyEdges::around(&self.outgoing, from, Some(to), false)
        }
    }
}

impl<V> Undirected for AdjacencyList<V>
where
    V: Ord + Hash + Copy,
{
    fn incident(&self, vertex: V) -> AdjacencyEdges<'_, V> {
        AdjacencyEdges::around(&self.outgoing, vertex, None, false)
    }

    /// Walks the shorter of the two incidence lists.
    fn links(&self, a: V, b: V) -> AdjacencyEdges<'_, V> {
        if self.outgoing_degree(b) < self.outgoing_degree(a) {
            AdjacencyEdges::around(&self.outgoing, b, Some(a), true)
        } else {
            AdjacencyEdges::around(&self.outgoing, a, Some(b), false)
        }
    }
}

impl<V> Shaped for AdjacencyList<V> {
    fn is_directed(&self) -> bool {
        self.shape.directed
    }

    fn is_multi(&self) -> bool {
        self.shape.multi
    }
}

impl<V> Vertices for AdjacencyList<V>
where
    V: Ord + Hash + Copy,
{
    type Vertex = V;

    type Vertices<'a>
        = Copied<Keys<'a, V, Vec<(usize, V)>>>
    where
        Self: 'a;

    fn vertices(&self) -> Copied<Keys<'_, V, Vec<(usize, V)>>> {
        self.outgoing.keys().copied()
    }

    fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }
}

impl<V> Graph for AdjacencyList<V>
where
    V: Ord + Hash + Copy,
{
    type Vertices = Self;
    type Edges = Self;

    fn edge_store(&self) -> &Self {
        self
    }

    fn vertex_store(&self) -> &Self {
        self
    }
}

/// Iterator over edges of an [`AdjacencyList`].
///
/// The iterator yields triples `(source, key, destination)`.
/// It either walks the list of a single anchor vertex or scans the lists of
/// all vertices, optionally filtering by the other endpoint.
pub struct AdjacencyEdges<'a, V> {
    /// Remaining lists for whole graph scans.
    rest: Option<Iter<'a, V, Vec<(usize, V)>>>,
    /// Anchor vertex and the unread part of its list.
    current: Option<(V, slice::Iter<'a, (usize, V)>)>,
    /// Only entries whose other endpoint equals this value are yielded.
    other: Option<V>,
    /// Entries of ingoing lists name sources, the anchor is the destination.
    reversed: bool,
    /// Skip entries whose other endpoint sorts before the anchor, so that
    /// symmetric undirected storage yields every edge once.
    canonical: bool,
}

impl<'a, V> AdjacencyEdges<'a, V>
where
    V: Ord + Hash + Copy,
{
    fn scan(lists: &'a FxHashMap<V, Vec<(usize, V)>>, canonical: bool) -> Self {
        Self {
            rest: Some(lists.iter()),
            current: None,
            other: None,
            reversed: false,
            canonical,
        }
    }

    fn around(
        lists: &'a FxHashMap<V, Vec<(usize, V)>>,
        anchor: V,
        other: Option<V>,
        reversed: bool,
    ) -> Self {
        Self {
            rest: None,
            current: lists.get(&anchor).map(|list| (anchor, list.iter())),
            other,
            reversed,
            canonical: false,
        }
    }

    /// Entries left in the list being walked.
    #[cfg(test)]
    fn unread(&self) -> usize {
        self.current.as_ref().map_or(0, |(_, entries)| entries.len())
    }
}

impl<'a, V> Iterator for AdjacencyEdges<'a, V>
where
    V: Ord + Hash + Copy,
{
    type Item = (V, usize, V);

    fn next(&mut self) -> Option<Self::Item> {
        let (filter, reversed, canonical) = (self.other, self.reversed, self.canonical);

        loop {
            if let Some((anchor, entries)) = self.current.as_mut() {
                let anchor = *anchor;
                for &(key, other) in entries.by_ref() {
                    if filter.is_some_and(|wanted| other != wanted) {
                        continue;
                    }
                    if canonical && other < anchor {
                        continue;
                    }

                    return Some(if reversed {
                        (other, key, anchor)
                    } else {
                        (anchor, key, other)
                    });
                }
            }

            let (&anchor, list) = self.rest.as_mut()?.next()?;
            self.current = Some((anchor, list.iter()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted<I: Iterator<Item = (u32, usize, u32)>>(edges: I) -> Vec<(u32, usize, u32)> {
        let mut edges: Vec<_> = edges.collect();
        edges.sort_unstable();
        edges
    }

    #[test]
    fn default_shapes_are_empty() {
        for shape in [
            Shape::UNDIRECTED,
            Shape::UNDIRECTED_MULTI,
            Shape::DIRECTED,
            Shape::DIRECTED_MULTI,
        ] {
            let graph = AdjacencyList::<u32>::new(shape);
            assert_eq!(graph.shape(), shape);
            assert_eq!(graph.vertex_count(), 0, "{shape} has no vertices");
            assert_eq!(graph.edge_count(), 0, "{shape} has no edges");
            assert_eq!(graph.edges().count(), 0);
        }
    }

    #[test]
    fn undirected_edges_are_yielded_once_in_canonical_order() {
        let graph = AdjacencyList::from_edges(Shape::UNDIRECTED, [(2, 1), (1, 3), (3, 3)]);

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(
            sorted(graph.edges()),
            vec![(1, 0, 2), (1, 0, 3), (3, 0, 3)],
            "each undirected edge once, smaller endpoint first"
        );
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn simple_graph_rejects_parallel_edges() {
        let mut graph = AdjacencyList::undirected();
        assert_eq!(graph.insert_edge((0u32, 1)), Some(0));
        assert_eq!(graph.insert_edge((1, 0)), None, "same unordered pair");
        assert_eq!(graph.edge_count(), 1);

        let mut digraph = AdjacencyList::directed();
        assert_eq!(digraph.insert_edge((0u32, 1)), Some(0));
        assert_eq!(digraph.insert_edge((1, 0)), Some(0), "reverse is a new edge");
        assert_eq!(digraph.insert_edge((0, 1)), None);
        assert_eq!(digraph.edge_count(), 2);
    }

    #[test]
    fn multigraph_keys_reuse_lowest_free_key() {
        let mut graph = AdjacencyList::undirected_multi();
        assert_eq!(graph.insert_edge((0u32, 1)), Some(0));
        assert_eq!(graph.insert_edge((1, 0)), Some(1));
        assert_eq!(graph.insert_edge((0, 1)), Some(2));

        assert!(graph.remove_edge((1, 1, 0)));
        assert_eq!(graph.insert_edge((0, 1)), Some(1), "key 1 was freed");
        assert_eq!(graph.insert_edge((0, 1)), Some(3));
        assert_eq!(graph.links(1, 0).count(), 4);
    }

    #[test]
    fn undirected_incidence_counts_loops_once() {
        let graph = AdjacencyList::from_edges(Shape::UNDIRECTED, [(0u32, 0), (0, 1), (0, 2)]);

        let incident = sorted(graph.incident(0));
        assert_eq!(incident, vec![(0, 0, 0), (0, 0, 1), (0, 0, 2)]);
        assert_eq!(graph.outgoing_degree(0), 3, "the loop is stored once");
        assert_eq!(sorted(graph.incident(1)), vec![(1, 0, 0)]);
        assert_eq!(sorted(graph.links(1, 0)), vec![(1, 0, 0)]);
        assert!(graph.has_link(1, 0, 0));
        assert!(!graph.has_link(1, 1, 0));
        assert_eq!(graph.links(1, 2).count(), 0);
    }

    #[test]
    fn directed_outgoing_and_ingoing() {
        // edges: 0 -> 1, 1 -> 0, 2 -> 1, 1 -> 1
        let graph = AdjacencyList::from_edges(Shape::DIRECTED, [(0u32, 1), (1, 0), (2, 1), (1, 1)]);

        assert_eq!(sorted(graph.outgoing(1)), vec![(1, 0, 0), (1, 0, 1)]);
        assert_eq!(sorted(graph.ingoing(1)), vec![(0, 0, 1), (1, 0, 1), (2, 0, 1)]);
        assert_eq!(graph.outgoing_degree(2), 1);
        assert_eq!(graph.ingoing_degree(2), 0);
        assert_eq!(graph.ingoing_degree(1), 3);

        assert_eq!(sorted(graph.connections(2, 1)), vec![(2, 0, 1)]);
        assert_eq!(graph.connections(1, 2).count(), 0);
        assert!(Directed::has_edge(&graph, 1, 0, 1));

        let total_out: usize = graph.vertices().map(|v| graph.outgoing_degree(v)).sum();
        let total_in: usize = graph.vertices().map(|v| graph.ingoing_degree(v)).sum();
        assert_eq!(total_out, graph.edge_count(), "sum of outgoing degrees");
        assert_eq!(total_in, graph.edge_count(), "sum of ingoing degrees");
    }

    #[test]
    fn removal_updates_both_sides() {
        let mut graph = AdjacencyList::from_edges(Shape::DIRECTED_MULTI, [(0u32, 1), (0, 1), (1, 2)]);

        assert!(graph.remove_edge((0, 0, 1)));
        assert!(!graph.remove_edge((0, 0, 1)), "already removed");
        assert!(!graph.remove_edge((1, 0, 0)), "wrong direction");
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(sorted(graph.ingoing(1)), vec![(0, 1, 1)]);
        assert_eq!(graph.vertex_count(), 3, "vertices survive edge removal");

        let mut undirected = AdjacencyList::from_edges(Shape::UNDIRECTED, [(0u32, 1), (1, 1)]);
        assert!(undirected.remove_edge((1, 0, 0)), "either endpoint order");
        assert!(undirected.remove_edge((1, 0, 1)));
        assert_eq!(undirected.incident(0).count(), 0);
        assert_eq!(undirected.incident(1).count(), 0);
        assert_eq!(undirected.edge_count(), 0);
    }

    #[test]
    fn isolated_vertices_and_unknown_vertices() {
        let mut graph = AdjacencyList::<u32>::directed();
        assert!(graph.add_vertex(7));
        assert!(!graph.add_vertex(7));
        assert_eq!(graph.vertex_count(), 1);

        assert_eq!(graph.outgoing(7).count(), 0);
        assert_eq!(graph.outgoing(8).count(), 0, "unknown vertex has no edges");
        assert_eq!(graph.ingoing(8).count(), 0);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn pair_lookups_walk_the_shorter_list() {
        let leaves = 1000u32;
        let mut star = AdjacencyList::undirected();
        for leaf in 1..=leaves {
            star.insert_edge((0, leaf));
        }
        star.insert_edge((leaves, leaves + 1));

        let hub_first = star.links(0, leaves);
        assert!(hub_first.unread() <= 2, "walks the leaf list, not the hub");
        assert_eq!(sorted(hub_first), vec![(0, 0, leaves)], "oriented as asked");
        assert_eq!(sorted(star.links(leaves, 0)), vec![(leaves, 0, 0)]);
        assert!(star.has_link(0, 0, leaves));

        let mut fan = AdjacencyList::directed_multi();
        for leaf in 1..=leaves {
            fan.insert_edge((0, leaf));
        }
        fan.insert_edge((0, 7));

        let from_hub = fan.connections(0, 7);
        assert!(from_hub.unread() <= 2, "walks the ingoing list of the target");
        assert_eq!(sorted(from_hub), vec![(0, 0, 7), (0, 1, 7)]);
        assert!(Directed::has_edge(&fan, 0, 1, 7));
        assert!(!Directed::has_edge(&fan, 7, 0, 0), "direction is kept");
        assert_eq!(fan.connections(0, leaves + 1).count(), 0);
    }
}
