use std::fmt;

use arbitrary::Arbitrary;

use crate::core::{error::GraphError, id::VertexId, Graph, Weight};

/// A single mutation addressed by vertex values, so that the same sequence can
/// be replayed on storages with different internal layouts.
#[derive(Debug, Arbitrary, Clone, PartialEq, Eq)]
pub enum MutOp<V, W> {
    AddVertex(V),
    RemoveVertex(V),
    AddEdge(V, V, W),
    RemoveEdge(V, V),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutOpResult<V, W> {
    AddVertex(Result<VertexId, GraphError<V>>),
    RemoveVertex(Result<V, GraphError<V>>),
    AddEdge(Result<(), GraphError<V>>),
    RemoveEdge(Result<W, GraphError<V>>),
}

impl<V, W> MutOpResult<V, W> {
    pub fn is_ok(&self) -> bool {
        match self {
            MutOpResult::AddVertex(result) => result.is_ok(),
            MutOpResult::RemoveVertex(result) => result.is_ok(),
            MutOpResult::AddEdge(result) => result.is_ok(),
            MutOpResult::RemoveEdge(result) => result.is_ok(),
        }
    }
}

impl<V: PartialEq + Clone, W: Weight> MutOp<V, W> {
    pub fn apply<G>(&self, graph: &mut G) -> MutOpResult<V, W>
    where
        G: Graph<V, W> + ?Sized,
    {
        match self {
            MutOp::AddVertex(value) => MutOpResult::AddVertex(graph.add_vertex(value.clone())),
            MutOp::RemoveVertex(value) => MutOpResult::RemoveVertex(graph.remove_vertex(value)),
            MutOp::AddEdge(src, dst, weight) => {
                MutOpResult::AddEdge(graph.add_edge(src, dst, *weight))
            }
            MutOp::RemoveEdge(src, dst) => MutOpResult::RemoveEdge(graph.remove_edge(src, dst)),
        }
    }
}

#[derive(Arbitrary, Clone)]
pub struct MutOpsSeq<V, W>(pub Vec<MutOp<V, W>>);

impl<V, W> IntoIterator for MutOpsSeq<V, W> {
    type Item = MutOp<V, W>;
    type IntoIter = std::vec::IntoIter<MutOp<V, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V, W> MutOpsSeq<V, W>
where
    V: PartialEq + Clone + fmt::Debug,
    W: Weight,
{
    /// Applies the operations while printing them as Rust code, which turns a
    /// fuzzer finding into a regression test.
    pub fn replay<G>(self, graph: &mut G)
    where
        G: Graph<V, W> + ?Sized,
    {
        println!("let mut graph; // AdjList or AdjMatrix");
        println!();

        for op in self {
            match &op {
                MutOp::AddVertex(value) => println!("graph.add_vertex({value:?});"),
                MutOp::RemoveVertex(value) => println!("graph.remove_vertex(&{value:?});"),
                MutOp::AddEdge(src, dst, weight) => {
                    println!("graph.add_edge(&{src:?}, &{dst:?}, {weight:?});")
                }
                MutOp::RemoveEdge(src, dst) => {
                    println!("graph.remove_edge(&{src:?}, &{dst:?});")
                }
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl<V: fmt::Debug, W: fmt::Debug> fmt::Debug for MutOpsSeq<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")
    }
}
