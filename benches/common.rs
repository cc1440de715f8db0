#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;
use wayfind::core::{marker::EdgeType, Create};

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        // Based on the implementation in wayfind::infra::proptest.

        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

pub fn wayfind_random<G: Create<u32, u32>>(
    edge_type: EdgeType,
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> G {
    let mut graph = G::with_capacity(edge_type, vertex_count);

    for value in 0..vertex_count as u32 {
        graph.add_vertex(value).unwrap();
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(&(u as u32), &(v as u32), rng.u32(1..100)).unwrap();
    }

    graph
}

pub fn petgraph_random<Ty: petgraph::EdgeType>(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<u32, u32, Ty> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for value in 0..vertex_count as u32 {
        graph.add_node(value);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.u32(1..100));
    }

    graph
}
