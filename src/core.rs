pub mod error;
pub mod id;
pub mod marker;
pub mod vertex;
pub mod weight;

mod graph;

pub use error::GraphError;
pub use graph::*;
pub use id::VertexId;
pub use vertex::{Color, Vertex, VertexState};
pub use weight::Weight;
