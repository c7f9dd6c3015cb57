use std::collections::HashSet;

use proptest::prelude::*;
use taskviz::store::TaskStore;

use crate::common::builders::TaskDraftBuilder;

// Pre-existing manual ids drawn from the same `T<n>` space the generator uses,
// so collisions actually happen.
fn taken_ids() -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::hash_set(1u32..20, 0..8).prop_map(|s| s.into_iter().collect())
}

proptest! {
    #[test]
    fn generated_ids_are_unique_and_smallest_free(
        taken in taken_ids(),
        adds in 1usize..25,
    ) {
        let mut store = TaskStore::new();
        for n in &taken {
            store
                .add(&TaskDraftBuilder::new("manual").id(&format!("T{n}")).build())
                .unwrap();
        }

        let mut expected = Vec::new();
        let mut used: HashSet<u32> = taken.iter().copied().collect();
        let mut next = 1u32;
        for _ in 0..adds {
            while used.contains(&next) {
                next += 1;
            }
            used.insert(next);
            expected.push(format!("T{next}"));
        }

        let mut generated = Vec::new();
        for i in 0..adds {
            let before = store.len();
            let task = store
                .add(&TaskDraftBuilder::new(&format!("auto {i}")).build())
                .unwrap();
            generated.push(task.id.clone());
            prop_assert_eq!(store.len(), before + 1);
        }

        prop_assert_eq!(&generated, &expected);

        let all: HashSet<&str> = store.list().iter().map(|t| t.id.as_str()).collect();
        prop_assert_eq!(all.len(), store.len());
    }

    #[test]
    fn add_either_grows_by_one_or_leaves_store_unchanged(
        title in "[ a-z]{0,6}",
        hours in prop_oneof![Just(String::new()), "-?[0-9]{1,2}(\\.[0-9])?", "[a-z]{1,3}"],
        importance in prop_oneof![Just(String::new()), "-?[0-9]{1,2}(\\.[05])?"],
    ) {
        let mut store = TaskStore::new();
        store.add(&TaskDraftBuilder::new("seed").build()).unwrap();
        let before = store.snapshot();

        let draft = TaskDraftBuilder::new(&title)
            .hours(&hours)
            .importance(&importance)
            .build();

        match store.add(&draft) {
            Ok(_) => {
                prop_assert_eq!(store.len(), before.len() + 1);
                prop_assert_eq!(&store.list()[..before.len()], before.as_slice());
            }
            Err(_) => prop_assert_eq!(store.list(), before.as_slice()),
        }
    }
}
