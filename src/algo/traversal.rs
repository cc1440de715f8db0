use std::collections::VecDeque;

use tracing::debug;

use crate::core::{
    error::GraphError,
    id::VertexId,
    vertex::{Color, VertexState},
    weight::Weight,
    Graph,
};

/// Breadth-first search from `source`.
///
/// Afterwards, every vertex reachable from the source has its hop count in
/// [`distance`](crate::core::Vertex::distance) and the vertex it was discovered
/// from in [`parent`](crate::core::Vertex::parent). Unreachable vertices have
/// infinite distance and no parent. Neighbors are discovered in the natural
/// order of the storage.
pub fn bfs<V, W, G>(graph: &mut G, source: &V) -> Result<(), GraphError<V>>
where
    V: PartialEq + Clone,
    W: Weight,
    G: Graph<V, W> + ?Sized,
{
    let source = graph.require_vertex(source)?;
    debug!(%source, "bfs started");

    let mut states = graph.states();
    for state in states.iter_mut() {
        state.color = Color::Unvisited;
        state.distance = None;
        state.parent = None;
    }

    states[source.as_usize()].color = Color::InProgress;
    states[source.as_usize()].distance = Some(W::zero());

    let mut queue = VecDeque::from([source]);
    let mut reached = 1;

    while let Some(vertex) = queue.pop_front() {
        let next_distance = states[vertex.as_usize()]
            .distance
            .and_then(|distance| distance.checked_add(W::one()));

        for (neighbor, _) in graph.neighbors(vertex) {
            let state = &mut states[neighbor.as_usize()];

            if state.color == Color::Unvisited {
                state.color = Color::InProgress;
                state.distance = next_distance;
                state.parent = Some(vertex);
                queue.push_back(neighbor);
                reached += 1;
            }
        }

        states[vertex.as_usize()].color = Color::Done;
    }

    graph.commit_states(states);

    debug!(%source, reached, "bfs finished");
    Ok(())
}

/// Depth-first search from `source` with discovery and finishing times.
///
/// A single counter starting at zero is incremented before recording each
/// discovery and each finish, so the times of one run are distinct values in
/// `1..=2k` where `k` is the number of reached vertices. Vertices not reachable
/// from the source keep the times from whatever run set them last.
///
/// The traversal uses an explicit stack and visits vertices in the same order
/// as the recursive formulation would.
pub fn dfs<V, W, G>(graph: &mut G, source: &V) -> Result<(), GraphError<V>>
where
    V: PartialEq + Clone,
    W: Weight,
    G: Graph<V, W> + ?Sized,
{
    let source = graph.require_vertex(source)?;
    debug!(%source, "dfs started");

    let mut states = graph.states();
    for state in states.iter_mut() {
        state.color = Color::Unvisited;
        state.parent = None;
    }

    let time = visit::<V, W, G>(graph, source, &mut states);
    graph.commit_states(states);

    debug!(%source, time, "dfs finished");
    Ok(())
}

fn visit<V, W, G>(graph: &G, source: VertexId, states: &mut [VertexState<W>]) -> usize
where
    V: PartialEq + Clone,
    W: Weight,
    G: Graph<V, W> + ?Sized,
{
    let mut time = 0;
    discover(&mut states[source.as_usize()], &mut time);

    let mut stack = vec![(source, graph.neighbors(source))];

    while let Some((vertex, neighbors)) = stack.last_mut() {
        let vertex = *vertex;
        let next = neighbors.find(|(neighbor, _)| {
            states[neighbor.as_usize()].color == Color::Unvisited
        });

        match next {
            Some((next, _)) => {
                let state = &mut states[next.as_usize()];
                state.parent = Some(vertex);
                discover(state, &mut time);

                stack.push((next, graph.neighbors(next)));
            }
            None => {
                stack.pop();

                let state = &mut states[vertex.as_usize()];
                state.color = Color::Done;
                time += 1;
                state.finishing_time = time;
            }
        }
    }

    time
}

fn discover<W>(state: &mut VertexState<W>, time: &mut usize) {
    *time += 1;
    state.discovery_time = *time;
    state.color = Color::InProgress;
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        algo::tests::{cities, ROUTES, ROUTES_CYCLIC},
        core::{
            marker::{Directed, EdgeType, Undirected},
            Create, Vertices,
        },
        infra::proptest::graph,
        storage::{AdjList, AdjMatrix},
    };

    fn distance_of<G: Graph<&'static str, i32>>(graph: &G, city: &'static str) -> Option<i32> {
        graph.get_vertex(&city).unwrap().distance()
    }

    fn times_of<G: Graph<&'static str, i32>>(graph: &G, city: &'static str) -> (usize, usize) {
        let vertex = graph.get_vertex(&city).unwrap();
        (vertex.discovery_time(), vertex.finishing_time())
    }

    fn check_bfs<G: Create<&'static str, i32>>() {
        let mut graph = cities::<G>(Undirected, ROUTES);
        graph.bfs(&"NYC").unwrap();

        assert_eq!(distance_of(&graph, "NYC"), Some(0));
        assert_eq!(distance_of(&graph, "LA"), Some(1));
        assert_eq!(distance_of(&graph, "Chicago"), Some(1));
        assert_eq!(distance_of(&graph, "Denver"), Some(2));
        assert_eq!(distance_of(&graph, "Miami"), Some(3));

        let denver = graph.get_vertex(&"Denver").unwrap();
        assert_eq!(denver.parent(), graph.find_vertex(&"LA"));
        assert_eq!(denver.color(), Color::Done);
        assert_eq!(graph.get_vertex(&"NYC").unwrap().parent(), None);

        let mut graph = cities::<G>(Undirected, ROUTES_CYCLIC);
        graph.bfs(&"NYC").unwrap();
        assert_eq!(distance_of(&graph, "Miami"), Some(1));
    }

    fn check_bfs_unreachable<G: Create<&'static str, i32>>() {
        let mut graph = cities::<G>(Directed, ROUTES);
        graph.add_vertex("Boston").unwrap();

        graph.bfs(&"Denver").unwrap();

        assert_eq!(distance_of(&graph, "Denver"), Some(0));
        assert_eq!(distance_of(&graph, "Miami"), Some(1));
        assert_eq!(distance_of(&graph, "NYC"), None);
        assert_eq!(distance_of(&graph, "Boston"), None);

        let nyc = graph.get_vertex(&"NYC").unwrap();
        assert_eq!(nyc.parent(), None);
        assert_eq!(nyc.color(), Color::Unvisited);
    }

    fn check_dfs<G: Create<&'static str, i32>>(edge_type: EdgeType, denver: (usize, usize)) {
        let mut graph = cities::<G>(edge_type, ROUTES);
        graph.dfs(&"NYC").unwrap();

        assert_eq!(times_of(&graph, "NYC").0, 1);
        assert_eq!(times_of(&graph, "Denver"), denver);

        for vertex in graph.vertices() {
            assert!(vertex.finishing_time() > vertex.discovery_time());
            assert_eq!(vertex.color(), Color::Done);
        }
    }

    fn check_dfs_keeps_stale_times<G: Create<&'static str, i32>>() {
        let mut graph = cities::<G>(Directed, ROUTES);

        graph.dfs(&"NYC").unwrap();
        let nyc_times = times_of(&graph, "NYC");

        graph.bfs(&"NYC").unwrap();
        graph.dfs(&"Denver").unwrap();

        // Not reachable from Denver.
        assert_eq!(times_of(&graph, "NYC"), nyc_times);
        assert_eq!(graph.get_vertex(&"NYC").unwrap().color(), Color::Unvisited);
        // Distances from the preceding breadth-first search survive.
        assert_eq!(distance_of(&graph, "Miami"), Some(3));
        assert_eq!(times_of(&graph, "Denver"), (1, 4));
        assert_eq!(times_of(&graph, "Miami"), (2, 3));
    }

    #[test]
    fn bfs_adj_list() {
        check_bfs::<AdjList<_, _>>();
    }

    #[test]
    fn bfs_adj_matrix() {
        check_bfs::<AdjMatrix<_, _>>();
    }

    #[test]
    fn bfs_unreachable_adj_list() {
        check_bfs_unreachable::<AdjList<_, _>>();
    }

    #[test]
    fn bfs_unreachable_adj_matrix() {
        check_bfs_unreachable::<AdjMatrix<_, _>>();
    }

    #[test]
    fn dfs_undirected_adj_list() {
        check_dfs::<AdjList<_, _>>(Undirected, (3, 8));
    }

    #[test]
    fn dfs_undirected_adj_matrix() {
        check_dfs::<AdjMatrix<_, _>>(Undirected, (3, 8));
    }

    #[test]
    fn dfs_directed_adj_list() {
        check_dfs::<AdjList<_, _>>(Directed, (3, 6));
    }

    #[test]
    fn dfs_directed_adj_matrix() {
        check_dfs::<AdjMatrix<_, _>>(Directed, (3, 6));
    }

    #[test]
    fn dfs_keeps_stale_times_adj_list() {
        check_dfs_keeps_stale_times::<AdjList<_, _>>();
    }

    #[test]
    fn dfs_keeps_stale_times_adj_matrix() {
        check_dfs_keeps_stale_times::<AdjMatrix<_, _>>();
    }

    #[test]
    fn dfs_long_path() {
        let mut graph = AdjList::<u32, u8>::new_directed();
        let n = 10_000;

        for value in 0..n {
            graph.add_vertex(value).unwrap();
        }
        for value in 1..n {
            graph.add_edge(&(value - 1), &value, 1).unwrap();
        }

        graph.dfs(&0).unwrap();

        let last = graph.vertex(VertexId::from_usize(n as usize - 1)).unwrap();
        assert_eq!(last.discovery_time(), n as usize);
        assert_eq!(last.finishing_time(), n as usize + 1);
        assert_eq!(
            graph.vertex(VertexId::from_usize(0)).unwrap().finishing_time(),
            2 * n as usize
        );
    }

    proptest! {
        #[test]
        fn bfs_distance_is_hop_count(graph in graph(any::<u8>()).max_size(48), directed in any::<bool>()) {
            let mut graph = graph.build::<AdjList<usize, u8>>(directed.into());
            if graph.vertex_count() == 0 {
                return Ok(());
            }

            graph.bfs(&0).unwrap();

            let expected = petgraph_hops(&graph);
            for (id, vertex) in graph.vertices().enumerate() {
                prop_assert_eq!(vertex.distance().map(usize::from), expected[id]);
            }
        }

        #[test]
        fn dfs_times_are_parenthesized(graph in graph(any::<i16>()).max_size(48), directed in any::<bool>()) {
            let mut graph = graph.build::<AdjMatrix<usize, i16>>(directed.into());
            if graph.vertex_count() == 0 {
                return Ok(());
            }

            graph.dfs(&0).unwrap();

            let reached = graph.vertices().filter(|v| v.color() == Color::Done).collect::<Vec<_>>();
            let mut times = reached
                .iter()
                .flat_map(|v| [v.discovery_time(), v.finishing_time()])
                .collect::<Vec<_>>();
            times.sort_unstable();
            prop_assert_eq!(times, (1..=2 * reached.len()).collect::<Vec<_>>());

            for vertex in &reached {
                if let Some(parent) = vertex.parent() {
                    let parent = graph.vertex(parent).unwrap();
                    prop_assert!(parent.discovery_time() < vertex.discovery_time());
                    prop_assert!(vertex.finishing_time() < parent.finishing_time());
                }
            }
        }
    }

    fn petgraph_hops<G: Graph<usize, u8>>(graph: &G) -> Vec<Option<usize>> {
        let mut petgraph = petgraph::Graph::<(), ()>::new();
        let nodes = graph
            .vertex_ids()
            .map(|_| petgraph.add_node(()))
            .collect::<Vec<_>>();

        for id in graph.vertex_ids() {
            for (neighbor, _) in graph.neighbors(id) {
                petgraph.add_edge(nodes[id.as_usize()], nodes[neighbor.as_usize()], ());
            }
        }

        let hops = petgraph::algo::dijkstra(&petgraph, nodes[0], None, |_| 1usize);
        nodes.iter().map(|node| hops.get(node).copied()).collect()
    }
}
