//! Output must not depend on arrival order or on the run.

use ormshift::prelude::*;
use ormshift_testing_fixtures::combined_model;
use proptest::prelude::*;

fn fingerprint(model: Model) -> String {
    let batch: Batch = ModelSnapshot::from_model(Dialect::Snapshot, model)
        .into_extractions()
        .into_iter()
        .collect();

    batch
        .prepare(&PrepareOptions::default())
        .unwrap()
        .generate(&Generator::default())
        .fingerprint()
}

#[test]
fn repeated_runs_are_identical() {
    assert_eq!(fingerprint(combined_model()), fingerprint(combined_model()));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn arrival_order_does_not_matter(
        entities in Just(combined_model().entities).prop_shuffle(),
        contexts in Just(combined_model().contexts).prop_shuffle(),
        results in Just(combined_model().results).prop_shuffle(),
        seed in any::<u64>(),
    ) {
        let mut contexts = contexts;
        for (i, context) in contexts.iter_mut().enumerate() {
            // rotate tables and procedures by a per-context amount
            let shift = usize::try_from(seed.rotate_left(u32::try_from(i).unwrap_or(0)) % 7).unwrap_or(0);
            if !context.tables.is_empty() {
                let by = shift % context.tables.len();
                context.tables.rotate_left(by);
            }
            if !context.stored_procedures.is_empty() {
                let by = shift % context.stored_procedures.len();
                context.stored_procedures.rotate_left(by);
            }
        }

        let shuffled = Model { entities, contexts, results };
        prop_assert_eq!(fingerprint(shuffled), fingerprint(combined_model()));
    }
}
