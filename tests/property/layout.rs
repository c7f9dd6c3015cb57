use std::f64::consts::PI;

use proptest::prelude::*;
use taskviz::graph::layout;
use taskviz::store::TaskRecord;

fn task_list() -> impl Strategy<Value = Vec<TaskRecord>> {
    proptest::collection::vec(
        ("[A-E][0-9]?", proptest::collection::vec("[A-E][0-9]?", 0..4), ".{0,30}"),
        0..12,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(id, deps, title)| {
                let mut t = TaskRecord::new(id, title);
                t.dependencies = deps;
                t
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn layout_is_a_pure_function_of_input(tasks in task_list()) {
        let first = layout(&tasks);
        let second = layout(&tasks);
        prop_assert_eq!(&first, &second);

        // Bit-identical, not merely approximately equal.
        for (a, b) in first.nodes.iter().zip(second.nodes.iter()) {
            prop_assert_eq!(a.position.x.to_bits(), b.position.x.to_bits());
            prop_assert_eq!(a.position.y.to_bits(), b.position.y.to_bits());
        }
    }

    #[test]
    fn one_node_per_task_and_angles_increase(tasks in task_list()) {
        let graph = layout(&tasks);
        prop_assert_eq!(graph.nodes.len(), tasks.len());
        prop_assert_eq!(graph.is_empty(), tasks.is_empty());

        if let Some(first) = graph.nodes.first() {
            prop_assert!((first.angle + PI / 2.0).abs() < 1e-12);
        }
        for pair in graph.nodes.windows(2) {
            prop_assert!(pair[0].angle < pair[1].angle);
        }
    }

    #[test]
    fn edges_only_connect_present_ids(tasks in task_list()) {
        let graph = layout(&tasks);
        let expected: usize = tasks
            .iter()
            .map(|t| {
                t.dependencies
                    .iter()
                    .filter(|d| tasks.iter().any(|o| &o.id == *d))
                    .count()
            })
            .sum();
        prop_assert_eq!(graph.edges.len(), expected);

        for edge in &graph.edges {
            prop_assert!(tasks.iter().any(|t| t.id == edge.from));
            prop_assert!(tasks.iter().any(|t| t.id == edge.to));
        }
    }
}
