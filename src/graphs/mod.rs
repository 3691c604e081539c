pub mod adjacency_list;
pub mod directed;
pub mod edges;
pub mod graph;
pub mod undirected;
pub mod vertices;
