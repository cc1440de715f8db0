#![no_main]

use libfuzzer_sys::fuzz_target;

use wayfind::{
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
    storage::AdjList,
};

fuzz_target!(|input: (bool, MutOpsSeq<i8, i8>)| {
    let (directed, ops) = input;
    let mut graph = AdjList::new(directed);

    for op in ops {
        op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
