//! Read-only line graph views.
//!
//! [`LineGraphView`] exposes the line graph of any [`Graph`] without building
//! it: nodes are base edges and every query is translated into incidence
//! queries against the live base graph. [`AdjacencyList`] is a mutable base
//! graph covering the four shapes (directed or not, simple or multi).

pub mod error;
pub mod graphs;
pub mod line;

pub use error::{Error, Result};
pub use graphs::{
    adjacency_list::AdjacencyList,
    graph::{Graph, Shape, Shaped},
};
pub use line::{node::LineNode, view::LineGraphView};
