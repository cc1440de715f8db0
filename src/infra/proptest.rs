use std::fmt;

use proptest::{
    prelude::Rng,
    strategy::{NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};
use rustc_hash::FxHashSet;

use crate::core::{marker::EdgeType, Create, Weight};

/// Strategy for random graphs whose vertex values are `0..n` and edge weights
/// are drawn from `weight`.
pub fn graph<W: Strategy>(weight: W) -> GraphStrategy<W>
where
    W::Value: Weight,
{
    GraphStrategy::new(weight)
}

/// Generated graph description, independent of the storage and directedness.
///
/// The edges connect distinct vertices and no unordered pair appears twice, so
/// the description is valid both as a directed and as an undirected graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomGraph<W> {
    vertex_count: usize,
    edges: Vec<(usize, usize, W)>,
}

impl<W: Weight> RandomGraph<W> {
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edges(&self) -> &[(usize, usize, W)] {
        &self.edges
    }

    pub fn build<G: Create<usize, W>>(&self, edge_type: EdgeType) -> G {
        let mut graph = G::with_capacity(edge_type, self.vertex_count);

        for value in 0..self.vertex_count {
            graph
                .add_vertex(value)
                .expect("vertex values are distinct");
        }

        for &(src, dst, weight) in &self.edges {
            graph
                .add_edge(&src, &dst, weight)
                .expect("edges connect distinct pairs");
        }

        graph
    }
}

#[derive(Debug)]
pub struct StrategyParams {
    max_size: usize,
    connected: bool,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 64,
            connected: false,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    /// Every vertex is reachable from every other one when the edges are
    /// considered undirected.
    pub fn connected(self) -> Self {
        Self {
            connected: true,
            ..self
        }
    }
}

#[derive(Debug)]
pub struct GraphStrategy<W> {
    weight: W,
    params: StrategyParams,
}

impl<W: Strategy> GraphStrategy<W> {
    pub fn new(weight: W) -> Self {
        Self::with_params(weight, StrategyParams::default())
    }

    pub fn with_params(weight: W, params: StrategyParams) -> Self {
        Self { weight, params }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `graph(0..10).max_size(100).connected()`.
    pub fn max_size(self, max_size: usize) -> Self {
        Self {
            params: self.params.max_size(max_size),
            ..self
        }
    }

    pub fn connected(self) -> Self {
        Self {
            params: self.params.connected(),
            ..self
        }
    }
}

impl<W: Strategy> Strategy for GraphStrategy<W>
where
    W::Value: Weight,
{
    type Tree = GraphValueTree<W::Tree>;
    type Value = RandomGraph<W::Value>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let n = runner.rng().gen_range(0..=self.params.max_size);
        let p = runner.rng().gen::<f32>();

        // Efficient generation of large random networks
        // http://vlado.fmf.uni-lj.si/pub/networks/doc/ms/rndgen.pdf

        let mut edges = Vec::new();

        let mut v = 1;
        let mut w = usize::MAX; // -1

        while v < n {
            let r: f32 = runner.rng().gen();
            w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

            while w >= v && v < n {
                w -= v;
                v += 1;
            }

            if v < n {
                let weight = self.weight.new_tree(runner)?;

                // Half of the edges go from the lower vertex so that directed
                // cycles are possible.
                let (src, dst) = if runner.rng().gen_bool(0.5) {
                    (w, v)
                } else {
                    (v, w)
                };

                edges.push((src, dst, weight));
            }
        }

        // Removing a vertex or an edge could break the connectivity.
        let no_shrink = self.params.connected;

        if self.params.connected {
            let mut components = UnionFind::new(n);

            for &(src, dst, _) in &edges {
                components.union(src, dst);
            }

            for v in 1..n {
                if components.union(v - 1, v) {
                    let weight = self.weight.new_tree(runner)?;
                    edges.push((v - 1, v, weight));
                }
            }
        }

        Ok(GraphValueTree {
            vertex_count: n,
            edges,
            structure: None,
            attr: None,
            no_shrink,
        })
    }
}

struct UnionFind {
    parents: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parents: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parents[x] != x {
            self.parents[x] = self.parents[self.parents[x]];
            x = self.parents[x];
        }
        x
    }

    // Returns true if the sets were disjoint.
    fn union(&mut self, x: usize, y: usize) -> bool {
        let (x, y) = (self.find(x), self.find(y));
        self.parents[x] = y;
        x != y
    }
}

pub struct GraphValueTree<W: ValueTree> {
    vertex_count: usize,
    edges: Vec<(usize, usize, W)>,
    structure: Option<ShrinkStructureState>,
    attr: Option<ShrinkAttrState>,
    no_shrink: bool,
}

impl<W: ValueTree> fmt::Debug for GraphValueTree<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphValueTree")
            .field("vertex_count", &self.vertex_count)
            .field("edges", &self.edges.len())
            .field("no_shrink", &self.no_shrink)
            .finish()
    }
}

impl<W: ValueTree> ValueTree for GraphValueTree<W>
where
    W::Value: Weight,
{
    type Value = RandomGraph<W::Value>;

    fn current(&self) -> Self::Value {
        let empty = FxHashSet::default();
        let (removed_vertices, removed_edges) = match self.structure {
            Some(ref state) => (
                &state.current.removed_vertices,
                &state.current.removed_edges,
            ),
            None => (&empty, &empty),
        };

        // Remaining vertices are renumbered to keep the values contiguous.
        let mut ids = Vec::with_capacity(self.vertex_count);
        let mut next = 0;

        for v in 0..self.vertex_count {
            if removed_vertices.contains(&v) {
                ids.push(None);
            } else {
                ids.push(Some(next));
                next += 1;
            }
        }

        let edges = self
            .edges
            .iter()
            .enumerate()
            .filter(|(e, _)| !removed_edges.contains(e))
            .filter_map(|(_, (src, dst, weight))| Some((ids[*src]?, ids[*dst]?, weight.current())))
            .collect();

        RandomGraph {
            vertex_count: next,
            edges,
        }
    }

    fn simplify(&mut self) -> bool {
        if self.no_shrink {
            return false;
        }

        // First try to remove as many vertices and edges as possible, then
        // simplify the weights of what remained.

        let structure = self
            .structure
            .get_or_insert_with(|| ShrinkStructureState::new(self.vertex_count, &self.edges));
        let attr = self.attr.get_or_insert_with(ShrinkAttrState::new);

        structure.simplify(self.vertex_count, &self.edges)
            || attr.simplify(&mut self.edges, structure)
    }

    fn complicate(&mut self) -> bool {
        match (self.structure.as_mut(), self.attr.as_mut()) {
            (Some(structure), Some(attr)) => {
                structure.complicate(self.vertex_count, &self.edges)
                    || attr.complicate(&mut self.edges)
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShrinkStructure {
    Vertex(usize),
    Edge(usize),
}

#[derive(Debug, Clone, Default)]
struct Removed {
    removed_vertices: FxHashSet<usize>,
    removed_edges: FxHashSet<usize>,
}

#[derive(Debug, Clone)]
struct ShrinkStructureState {
    current: Removed,
    high: Option<Removed>,
    command: Option<ShrinkStructure>,
}

impl ShrinkStructureState {
    fn new<W>(vertex_count: usize, edges: &[(usize, usize, W)]) -> Self {
        let command = if vertex_count > 0 {
            Some(ShrinkStructure::Vertex(0))
        } else if !edges.is_empty() {
            Some(ShrinkStructure::Edge(0))
        } else {
            None
        };

        Self {
            current: Removed::default(),
            high: None,
            command,
        }
    }

    fn simplify<W>(&mut self, vertex_count: usize, edges: &[(usize, usize, W)]) -> bool {
        let Some(command) = self.command else {
            return false;
        };

        self.high = Some(self.current.clone());

        match command {
            ShrinkStructure::Vertex(v) => {
                self.current.removed_vertices.insert(v);
            }
            ShrinkStructure::Edge(e) => {
                self.current.removed_edges.insert(e);
            }
        }

        self.command = self.next_command(command, vertex_count, edges);
        true
    }

    fn complicate<W>(&mut self, _vertex_count: usize, _edges: &[(usize, usize, W)]) -> bool {
        match self.high.take() {
            Some(high) => {
                self.current = high;
                true
            }
            None => false,
        }
    }

    fn vertex_exists(&self, v: usize) -> bool {
        !self.current.removed_vertices.contains(&v)
    }

    fn edge_exists(&self, e: usize, (src, dst): (usize, usize)) -> bool {
        !(self.current.removed_vertices.contains(&src)
            || self.current.removed_vertices.contains(&dst)
            || self.current.removed_edges.contains(&e))
    }

    fn next_command<W>(
        &self,
        command: ShrinkStructure,
        vertex_count: usize,
        edges: &[(usize, usize, W)],
    ) -> Option<ShrinkStructure> {
        let first_edge = |from: usize| {
            (from..edges.len())
                .find(|&e| {
                    let (src, dst, _) = edges[e];
                    self.edge_exists(e, (src, dst))
                })
                .map(ShrinkStructure::Edge)
        };

        match command {
            ShrinkStructure::Vertex(v) => ((v + 1)..vertex_count)
                .find(|&w| self.vertex_exists(w))
                .map(ShrinkStructure::Vertex)
                .or_else(|| first_edge(0)),
            ShrinkStructure::Edge(e) => first_edge(e + 1),
        }
    }
}

#[derive(Debug, Clone)]
struct ShrinkAttrState {
    edge: usize,
    previous: Option<usize>,
}

// The implementation is adapted from VecValueTree
// (https://github.com/proptest-rs/proptest/blob/ef305c4fadd7c0ba13a349f542da00d290116ccb/proptest/src/collection.rs#L603-L672).
impl ShrinkAttrState {
    fn new() -> Self {
        Self {
            edge: 0,
            previous: None,
        }
    }

    fn simplify<W: ValueTree>(
        &mut self,
        edges: &mut [(usize, usize, W)],
        structure: &ShrinkStructureState,
    ) -> bool {
        while self.edge < edges.len() {
            let (src, dst, weight) = &mut edges[self.edge];

            if structure.edge_exists(self.edge, (*src, *dst)) && weight.simplify() {
                self.previous = Some(self.edge);
                return true;
            }

            self.edge += 1;
        }

        false
    }

    fn complicate<W: ValueTree>(&mut self, edges: &mut [(usize, usize, W)]) -> bool {
        match self.previous {
            Some(e) if edges[e].2.complicate() => true,
            _ => {
                self.previous = None;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::{prelude::*, test_runner::TestRunner};

    use super::*;
    use crate::{
        core::{marker::Undirected, Graph, Vertices},
        storage::{AdjList, AdjMatrix},
    };

    #[test]
    fn simplifies_structure_and_weights() {
        let strategy = graph(0..100i32).max_size(64);
        let mut runner = TestRunner::deterministic();
        let mut tree = loop {
            let tree = strategy.new_tree(&mut runner).unwrap();
            if !tree.current().edges().is_empty() {
                break tree;
            }
        };

        loop {
            let graph = tree.current();

            if graph.edges().is_empty() {
                if !tree.complicate() {
                    break;
                }
            } else if !tree.simplify() {
                break;
            }
        }

        let graph = tree.current();

        // No loops and multi edges => two vertices connected with one edge.
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edges().len(), 1);
        assert_eq!(graph.edges()[0].2, 0);
    }

    proptest! {
        #[test]
        fn connected_graphs_are_connected(graph in graph(any::<u8>()).max_size(32).connected()) {
            let mut graph = graph.build::<AdjList<usize, u8>>(Undirected);
            if graph.vertex_count() == 0 {
                return Ok(());
            }

            graph.bfs(&0).unwrap();
            prop_assert!(graph.vertices().all(|v| v.distance().is_some()));
        }

        #[test]
        fn builds_in_both_storages(graph in graph(any::<i16>()).max_size(32), directed in any::<bool>()) {
            let list = graph.build::<AdjList<usize, i16>>(directed.into());
            let matrix = graph.build::<AdjMatrix<usize, i16>>(directed.into());

            prop_assert_eq!(list.vertex_count(), graph.vertex_count());
            prop_assert_eq!(list.edge_count(), graph.edges().len());
            prop_assert_eq!(matrix.edge_count(), graph.edges().len());
        }
    }
}
