//! Graph algorithms.
//!
//! Each algorithm is a free function generic over the [`Graph`](crate::core::Graph)
//! trait and is also available as a provided method of the trait. The
//! single-source algorithms write their results into the vertex records of the
//! graph and validate the source before touching anything.

pub mod all_pairs;
mod queue;
pub mod shortest_paths;
pub mod spanning_tree;
mod traversal;

#[doc(inline)]
pub use self::{
    all_pairs::{floyd_warshall, AllPairs},
    shortest_paths::{dijkstra, PathReconstruction, ShortestPaths},
    spanning_tree::{prim, SpanningForest},
    traversal::{bfs, dfs},
};
