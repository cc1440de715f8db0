//! Graph storages.
//!
//! Both storages implement the same [`Graph`](crate::core::Graph) contract and
//! differ in the memory layout and the order in which neighbors are
//! enumerated.
//!
//! |                | **[AdjList]**         | **[AdjMatrix]**      |
//! |----------------|-----------------------|----------------------|
//! | add vertex     | _O(V)_                | _O(V)_ + _O*(V²)_    |
//! | add edge       | _O(V)_                | _O(V)_               |
//! | neighbors      | _O(d)_                | _O(V)_               |
//! | remove vertex  | _O(V + E)_            | unsupported          |
//! | remove edge    | _O(V + d)_            | _O(V)_               |
//! | space          | _O(V + E)_            | _O(V²)_              |
//! | neighbor order | edge insertion        | ascending position   |
//!
//! * _V_ – vertex count
//! * _E_ – edge count
//! * _d_ – vertex degree
//! * _O*(..)_ – amortized complexity
//!
//! Vertices are addressed by value and looked up by a linear scan, which is
//! where the _O(V)_ term of the mutating operations comes from.

pub mod adj_list;
pub mod adj_matrix;

#[doc(inline)]
pub use self::{
    adj_list::AdjList,
    adj_matrix::{AdjMatrix, ZeroWeight},
};
