#![no_main]

use libfuzzer_sys::fuzz_target;

use wayfind::{
    core::{Graph, Vertices},
    infra::{
        arbitrary::{MutOp, MutOpsSeq},
        testing::check_potential_isomorphism,
    },
    storage::{AdjList, AdjMatrix},
};

fuzz_target!(|input: (bool, MutOpsSeq<i8, u8>)| {
    let (directed, ops) = input;
    let mut adj_list = AdjList::new(directed);
    let mut adj_matrix = AdjMatrix::new(directed);

    for op in ops {
        // The matrix cannot remove vertices.
        if matches!(op, MutOp::RemoveVertex(_)) {
            continue;
        }

        let list_result = op.apply(&mut adj_list);
        let matrix_result = op.apply(&mut adj_matrix);

        assert_eq!(list_result, matrix_result, "results differ for {op:?}");
        assert!(
            check_potential_isomorphism(&adj_list, &adj_matrix),
            "storages are not isomorphic after {op:?}"
        );
    }

    let Some(source) = adj_list.vertex_value(0usize.into()).copied() else {
        return;
    };

    adj_list.bfs(&source).unwrap();
    adj_matrix.bfs(&source).unwrap();

    assert!(
        adj_list
            .vertices()
            .map(|v| v.distance())
            .eq(adj_matrix.vertices().map(|v| v.distance())),
        "breadth-first hop counts differ"
    );

    let list_paths = adj_list.dijkstra(&source).unwrap();
    let matrix_paths = adj_matrix.dijkstra(&source).unwrap();

    for id in adj_list.vertex_ids() {
        assert_eq!(
            list_paths.dist(id),
            matrix_paths.dist(id),
            "shortest distance to {id} differs"
        );
    }
});
