#![no_main]

use libfuzzer_sys::fuzz_target;

use wayfind::{
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    storage::{AdjMatrix, ZeroWeight},
};

fuzz_target!(|input: (bool, bool, MutOpsSeq<i8, i8>)| {
    let (directed, zero_absent, ops) = input;
    let zero_weight = if zero_absent {
        ZeroWeight::Absent
    } else {
        ZeroWeight::Edge
    };
    let mut graph = AdjMatrix::with_zero_weight(directed, zero_weight);

    for op in ops {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
