//! Adjacency of base edges in the line graph sense.
//!
//! Every function here takes an existing base edge `(source, key, target)`
//! and answers from the live incidence lists of the base graph, so the work
//! per query is bounded by the degrees of the edge's endpoints.
//!
//! Rules, for an undirected derivation:
//! - `e'` is adjacent to `e` when they are distinct and share an endpoint.
//!   A self-loop is never adjacent to itself.
//! - In a multi derivation the multiplicity is the number of endpoint
//!   occurrences of `e` that can be paired with a distinct, equal endpoint
//!   occurrence of `e'`: 2 when both endpoints coincide (parallel edges and
//!   parallel loops), 1 otherwise.
//!
//! For a directed derivation `e' = (x, y)` succeeds `e = (u, v)` when
//! `x == v`, and precedes it when `y == u`. A self-loop is its own successor
//! and its own predecessor. Every directed line graph edge has multiplicity 1.
//!
//! A simple derivation reports multiplicity 1 for every adjacent pair.

use crate::graphs::{directed::Directed, edges::ReadEdges, graph::Shape, undirected::Undirected};

/// A base edge as `(source, key, target)`.
pub type BaseEdge<V, K> = (V, K, V);

/// Multiplicity of the line graph edge from `first` to `second`.
///
/// Zero when there is no such edge. This is a direct incidence test and does
/// not look at the base graph, so both edges must be known to exist.
pub fn multiplicity<V, K>(first: BaseEdge<V, K>, second: BaseEdge<V, K>, derivation: Shape) -> usize
where
    V: Eq,
    K: Eq,
{
    let (u1, k1, v1) = first;
    let (u2, k2, v2) = second;

    let count = if derivation.directed {
        usize::from(v1 == u2)
    } else {
        let coincide = (u1 == u2 && v1 == v2) || (u1 == v2 && v1 == u2);
        if coincide && k1 == k2 {
            0
        } else if coincide {
            2
        } else {
            usize::from(u1 == u2 || u1 == v2 || v1 == u2 || v1 == v2)
        }
    };

    if derivation.multi {
        count
    } else {
        count.min(1)
    }
}

/// Lazy sequence of `(adjacent edge, multiplicity)` pairs.
///
/// Adjacent edges are oriented away from the shared endpoint for undirected
/// derivations and keep their direction otherwise.
/// The order follows the incidence lists of the base graph, which is
/// implementation defined but stable while the base graph is not mutated.
pub enum Adjacent<'a, E>
where
    E: Directed + Undirected + 'a,
{
    Undirected(UndirectedAdjacent<'a, E>),
    Directed(DirectedAdjacent<'a, E>),
    Empty,
}

impl<'a, E> Iterator for Adjacent<'a, E>
where
    E: Directed + Undirected + 'a,
{
    type Item = (BaseEdge<E::Vertex, E::Key>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Adjacent::Undirected(adjacent) => adjacent.next(),
            Adjacent::Directed(adjacent) => adjacent.next(),
            Adjacent::Empty => None,
        }
    }
}

/// Edges adjacent to `edge` in a line graph derived with shape `derivation`.
///
/// For directed derivations these are the successors of `edge`.
pub fn adjacent<E>(store: &E, edge: BaseEdge<E::Vertex, E::Key>, derivation: Shape) -> Adjacent<'_, E>
where
    E: Directed + Undirected,
{
    if derivation.directed {
        successors(store, edge)
    } else {
        Adjacent::Undirected(UndirectedAdjacent::new(store, edge, derivation.multi))
    }
}

/// Edges of a directed base graph that start where `edge` ends.
pub fn successors<E>(store: &E, (_, _, target): BaseEdge<E::Vertex, E::Key>) -> Adjacent<'_, E>
where
    E: Directed + Undirected,
{
    Adjacent::Directed(DirectedAdjacent {
        incidences: store.outgoing(target),
    })
}

/// Edges of a directed base graph that end where `edge` starts.
pub fn predecessors<E>(store: &E, (source, _, _): BaseEdge<E::Vertex, E::Key>) -> Adjacent<'_, E>
where
    E: Directed + Undirected,
{
    Adjacent::Directed(DirectedAdjacent {
        incidences: store.ingoing(source),
    })
}

/// Undirected adjacency: incident edges of the source, then of the target.
pub struct UndirectedAdjacent<'a, E>
where
    E: Undirected + 'a,
{
    edge: BaseEdge<E::Vertex, E::Key>,
    multi: bool,
    near: <E as ReadEdges>::Edges<'a>,
    /// Absent for self-loops, whose endpoints share one incidence list.
    far: Option<<E as ReadEdges>::Edges<'a>>,
}

impl<'a, E> UndirectedAdjacent<'a, E>
where
    E: Undirected + 'a,
{
    pub fn new(store: &'a E, edge: BaseEdge<E::Vertex, E::Key>, multi: bool) -> Self {
        let (source, _, target) = edge;
        Self {
            edge,
            multi,
            near: store.incident(source),
            far: (source != target).then(|| store.incident(target)),
        }
    }
}

impl<'a, E> Iterator for UndirectedAdjacent<'a, E>
where
    E: Undirected + 'a,
{
    type Item = (BaseEdge<E::Vertex, E::Key>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (source, key, target) = self.edge;

        for (_, other_key, other) in self.near.by_ref() {
            if other_key == key && other == target {
                continue;
            }

            // Edges back to the target share both endpoints with this edge.
            let count = if self.multi && other == target { 2 } else { 1 };
            return Some(((source, other_key, other), count));
        }

        for (_, other_key, other) in self.far.as_mut()?.by_ref() {
            // Already reported from the source side.
            if other == source {
                continue;
            }
            return Some(((target, other_key, other), 1));
        }

        None
    }
}

/// Directed adjacency: one incidence list, every entry with multiplicity 1.
pub struct DirectedAdjacent<'a, E>
where
    E: Directed + 'a,
{
    incidences: <E as ReadEdges>::Edges<'a>,
}

impl<'a, E> Iterator for DirectedAdjacent<'a, E>
where
    E: Directed + 'a,
{
    type Item = (BaseEdge<E::Vertex, E::Key>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.incidences.next().map(|edge| (edge, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::{adjacency_list::AdjacencyList, edges::InsertEdge};

    fn collect(adjacent: Adjacent<'_, AdjacencyList<u32>>) -> Vec<((u32, usize, u32), usize)> {
        let mut items: Vec<_> = adjacent.collect();
        items.sort_unstable();
        items
    }

    #[test]
    fn path_in_undirected_simple_graph() {
        let graph = AdjacencyList::from_edges(Shape::UNDIRECTED, [(0u32, 1), (1, 2), (2, 3)]);

        assert_eq!(
            collect(adjacent(&graph, (1, 0, 2), Shape::UNDIRECTED)),
            vec![((1, 0, 0), 1), ((2, 0, 3), 1)],
            "middle edge touches both ends"
        );
        assert_eq!(
            collect(adjacent(&graph, (0, 0, 1), Shape::UNDIRECTED)),
            vec![((1, 0, 2), 1)]
        );
    }

    #[test]
    fn undirected_self_loop_is_adjacent_to_others_but_not_itself() {
        let graph = AdjacencyList::from_edges(Shape::UNDIRECTED, [(0u32, 0), (0, 1)]);

        assert_eq!(
            collect(adjacent(&graph, (0, 0, 0), Shape::UNDIRECTED)),
            vec![((0, 0, 1), 1)]
        );
        assert_eq!(
            collect(adjacent(&graph, (0, 0, 1), Shape::UNDIRECTED)),
            vec![((0, 0, 0), 1)]
        );
        assert_eq!(multiplicity((0, 0, 0), (0, 0, 0), Shape::UNDIRECTED), 0);
        assert_eq!(multiplicity((0, 0, 0), (0, 0, 1), Shape::UNDIRECTED_MULTI), 1);
    }

    #[test]
    fn parallel_edges_count_both_shared_endpoints() {
        let graph = AdjacencyList::from_edges(Shape::UNDIRECTED_MULTI, [(0u32, 1), (1, 0), (1, 2)]);

        assert_eq!(
            collect(adjacent(&graph, (0, 0, 1), Shape::UNDIRECTED_MULTI)),
            vec![((0, 1, 1), 2), ((1, 0, 2), 1)]
        );
        assert_eq!(
            collect(adjacent(&graph, (0, 0, 1), Shape::UNDIRECTED)),
            vec![((0, 1, 1), 1), ((1, 0, 2), 1)],
            "a simple derivation collapses the multiplicity"
        );
        assert_eq!(multiplicity((0, 0, 1), (1, 1, 0), Shape::UNDIRECTED_MULTI), 2);
        assert_eq!(multiplicity((0, 0, 1), (1, 1, 0), Shape::UNDIRECTED), 1);
        assert_eq!(multiplicity((0, 0, 1), (1, 0, 0), Shape::UNDIRECTED_MULTI), 0, "same edge");
    }

    #[test]
    fn parallel_loops_pair_both_occurrences() {
        let mut graph = AdjacencyList::undirected_multi();
        graph.insert_edge((5u32, 5));
        graph.insert_edge((5, 5));
        graph.insert_edge((5, 6));

        assert_eq!(
            collect(adjacent(&graph, (5, 0, 5), Shape::UNDIRECTED_MULTI)),
            vec![((5, 0, 6), 1), ((5, 1, 5), 2)]
        );
        assert_eq!(multiplicity((5, 0, 5), (5, 1, 5), Shape::UNDIRECTED_MULTI), 2);
        assert_eq!(multiplicity((5, 0, 5), (6, 0, 5), Shape::UNDIRECTED_MULTI), 1);
    }

    #[test]
    fn directed_successors_and_predecessors() {
        let graph = AdjacencyList::from_edges(Shape::DIRECTED, [(0u32, 1), (1, 2), (1, 3), (3, 1)]);

        assert_eq!(
            collect(adjacent(&graph, (0, 0, 1), Shape::DIRECTED)),
            vec![((1, 0, 2), 1), ((1, 0, 3), 1)]
        );
        assert_eq!(
            collect(predecessors(&graph, (1, 0, 2))),
            vec![((0, 0, 1), 1), ((3, 0, 1), 1)]
        );
        assert_eq!(collect(successors(&graph, (1, 0, 2))), vec![]);

        assert_eq!(multiplicity((0, 0, 1), (1, 0, 2), Shape::DIRECTED), 1);
        assert_eq!(multiplicity((1, 0, 2), (0, 0, 1), Shape::DIRECTED), 0);
        assert_eq!(multiplicity((1, 0, 3), (3, 0, 1), Shape::DIRECTED_MULTI), 1);
        assert_eq!(multiplicity((3, 0, 1), (1, 0, 3), Shape::DIRECTED_MULTI), 1);
    }

    #[test]
    fn directed_self_loop_is_its_own_successor() {
        let graph = AdjacencyList::from_edges(Shape::DIRECTED_MULTI, [(0u32, 0), (0, 0), (0, 1)]);

        assert_eq!(
            collect(adjacent(&graph, (0, 0, 0), Shape::DIRECTED_MULTI)),
            vec![((0, 0, 0), 1), ((0, 0, 1), 1), ((0, 1, 0), 1)]
        );
        assert_eq!(
            collect(predecessors(&graph, (0, 0, 0))),
            vec![((0, 0, 0), 1), ((0, 1, 0), 1)]
        );
        assert_eq!(multiplicity((0, 0, 0), (0, 0, 0), Shape::DIRECTED), 1);
        assert_eq!(multiplicity((0, 1, 0), (0, 0, 0), Shape::DIRECTED_MULTI), 1);
    }

    #[test]
    fn edges_without_shared_endpoints_are_not_adjacent() {
        assert_eq!(multiplicity((0u32, 0usize, 1u32), (2, 0, 3), Shape::UNDIRECTED), 0);
        assert_eq!(multiplicity((0u32, 0usize, 1u32), (2, 0, 3), Shape::DIRECTED), 0);
    }
}
