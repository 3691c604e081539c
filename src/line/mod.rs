//! Lazy line graph views.
//!
//! The line graph of a base graph has one node per base edge. Two nodes are
//! joined when their base edges share an endpoint, or, for directed graphs,
//! when the first edge ends where the second one starts.
//!
//! Nothing is materialized: [`view::LineGraphView`] decodes the queried
//! nodes into base edges and asks [`translator`] for their adjacency in the
//! live base graph.

pub mod node;
pub mod translator;
pub mod view;
