mod common;

use common::{RANDOM_SEED, petgraph_random, wayfind_random};
use fastrand::Rng;
use petgraph::{prelude::*, visit::Bfs};
use wayfind::{
    core::{marker::Undirected, Graph},
    storage::{AdjList, AdjMatrix},
};

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.25])]
fn adj_list_bfs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let mut graph: AdjList<u32, u32> =
        wayfind_random(Undirected, N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench_local(|| graph.bfs(&0));
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.25])]
fn adj_matrix_bfs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let mut graph: AdjMatrix<u32, u32> =
        wayfind_random(Undirected, N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench_local(|| graph.bfs(&0));
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.25])]
fn petgraph_bfs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph =
        petgraph_random::<petgraph::Undirected>(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let start = NodeIndex::new(0);

    bencher.bench(|| {
        let mut bfs = Bfs::new(&graph, start);
        let mut count = 0;
        while bfs.next(&graph).is_some() {
            count += 1;
        }
        count
    });
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.25])]
fn adj_list_dfs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let mut graph: AdjList<u32, u32> =
        wayfind_random(Undirected, N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench_local(|| graph.dfs(&0));
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.25])]
fn adj_list_prim_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let mut graph: AdjList<u32, u32> =
        wayfind_random(Undirected, N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench_local(|| graph.prim(&0));
}
