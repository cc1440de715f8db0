//! Weighted graphs with classic traversal and path-finding algorithms.
//!
//! A graph is either directed or undirected, addresses its vertices by their
//! values and stores integer edge weights in an [adjacency
//! list](storage::AdjList) or an [adjacency matrix](storage::AdjMatrix). The
//! algorithms work on both storages through the [`Graph`](core::Graph) trait.
//!
//! ```
//! use wayfind::prelude::*;
//!
//! let mut graph = AdjList::new_undirected();
//!
//! for city in ["NYC", "LA", "Chicago", "Denver", "Miami"] {
//!     graph.add_vertex(city).unwrap();
//! }
//!
//! graph.add_edge(&"NYC", &"LA", 4).unwrap();
//! graph.add_edge(&"NYC", &"Chicago", 2).unwrap();
//! graph.add_edge(&"LA", &"Denver", 1).unwrap();
//! graph.add_edge(&"Chicago", &"Denver", 5).unwrap();
//! graph.add_edge(&"Denver", &"Miami", 3).unwrap();
//!
//! graph.bfs(&"NYC").unwrap();
//! assert_eq!(graph.get_vertex(&"Miami").unwrap().distance(), Some(3));
//!
//! let shortest_paths = graph.dijkstra(&"NYC").unwrap();
//! let miami = graph.find_vertex(&"Miami").unwrap();
//! assert_eq!(shortest_paths.dist(miami), Some(8));
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod infra;
pub mod storage;

pub mod prelude {
    pub use crate::core::{
        marker::{Directed, EdgeType, Undirected},
        Create, Graph, GraphError, Neighbors, VertexId, Vertices,
    };
    pub use crate::storage::{AdjList, AdjMatrix};
}
