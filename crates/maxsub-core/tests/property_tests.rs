//! # Property-Based Tests
//!
//! Invariants of the run-merge solver checked with proptest against a
//! brute-force reference on short arrays.
//!
//! The merge rule is greedy, so exact equality with brute force is asserted
//! only where the rule is exact (at most two runs, single-sign arrays). On
//! arbitrary arrays the solver is checked for soundness: its answer is a real
//! subarray sum and never exceeds the optimum.

use maxsub_core::{
    Element, MergeEngine, PrefixSums, Resolution, Segmenter, Sum, largest_gap, max_subarray_sum,
    solve,
};
use proptest::collection::vec;
use proptest::prelude::*;

/// O(n²) reference: maximum over every `values[i..=j]`.
fn brute_force(values: &[Element]) -> Sum {
    let mut best = Sum::MIN;
    for i in 0..values.len() {
        let mut acc: Sum = 0;
        for &v in &values[i..] {
            acc += Sum::from(v);
            best = best.max(acc);
        }
    }
    best
}

/// Arrays with exactly two runs separated by a negative gap, optionally
/// padded with negatives on both sides.
fn two_run_array() -> impl Strategy<Value = Vec<Element>> {
    (
        vec(-20i64..0, 0..3),
        vec(0i64..20, 1..4),
        vec(-20i64..0, 1..4),
        vec(0i64..20, 1..4),
        vec(-20i64..0, 0..3),
    )
        .prop_map(|(lead, a, gap, b, trail)| [lead, a, gap, b, trail].concat())
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// The reported interval really sums to the reported answer, and the
    /// answer never beats the true optimum.
    #[test]
    fn solution_is_sound(values in vec(-20i64..20, 1..=12)) {
        let solution = solve(&values).expect("solve");
        let best = solution.best;

        let interval: Sum = values[best.start()..=best.end()]
            .iter()
            .map(|&v| Sum::from(v))
            .sum();
        prop_assert_eq!(interval, solution.sum());
        prop_assert!(solution.sum() <= brute_force(&values));
    }

    /// The answer is at least every initial run and every single element.
    #[test]
    fn solution_dominates_runs_and_elements(values in vec(-20i64..20, 1..=12)) {
        let sum = max_subarray_sum(&values).expect("sum");
        let prefix = PrefixSums::new(&values);
        let runs = Segmenter::segment(&values, &prefix).expect("segment");

        for run in runs.iter() {
            prop_assert!(sum >= run.sum());
        }
        let max_element = values.iter().copied().max().expect("non-empty");
        prop_assert!(sum >= Sum::from(max_element));
    }

    /// With at most two runs the greedy rule is exact.
    #[test]
    fn two_runs_match_brute_force(values in two_run_array()) {
        prop_assert_eq!(max_subarray_sum(&values).expect("sum"), brute_force(&values));
    }

    /// Every element negative: the answer is the largest element.
    #[test]
    fn all_negative_is_max_element(values in vec(-1000i64..0, 1..=12)) {
        let solution = solve(&values).expect("solve");
        let max_element = values.iter().copied().max().expect("non-empty");

        prop_assert_eq!(solution.sum(), Sum::from(max_element));
        prop_assert_eq!(solution.resolution, Resolution::AllNegative);
        prop_assert_eq!(solution.sum(), brute_force(&values));
    }

    /// Every element non-negative: the answer is the whole array.
    #[test]
    fn all_non_negative_is_total(values in vec(0i64..1000, 1..=12)) {
        let total: Sum = values.iter().map(|&v| Sum::from(v)).sum();
        prop_assert_eq!(max_subarray_sum(&values).expect("sum"), total);
    }

    /// A single element is its own answer, across the whole i64 range.
    #[test]
    fn single_element(x in any::<i64>()) {
        prop_assert_eq!(max_subarray_sum(&[x]).expect("sum"), Sum::from(x));
    }

    /// Running the engine on its own terminal collection merges nothing.
    #[test]
    fn fixed_point_is_idempotent(values in vec(-20i64..20, 1..=16)) {
        let prefix = PrefixSums::new(&values);
        let mut runs = Segmenter::segment(&values, &prefix).expect("segment");
        prop_assume!(!runs.is_empty());

        let engine = MergeEngine::new(&prefix);
        engine.run(&mut runs).expect("run");
        let terminal = runs.clone();

        let again = engine.run(&mut runs).expect("rerun");
        prop_assert_eq!(again.merges, 0);
        prop_assert_eq!(runs, terminal);
    }

    /// `run` ends where repeated leftmost-first `step`s end.
    #[test]
    fn run_matches_repeated_steps(values in vec(-20i64..20, 1..=32)) {
        let prefix = PrefixSums::new(&values);
        let mut runs = Segmenter::segment(&values, &prefix).expect("segment");
        prop_assume!(!runs.is_empty());
        let mut stepped = runs.clone();
        let engine = MergeEngine::new(&prefix);

        let outcome = engine.run(&mut runs).expect("run");

        let mut steps = 0;
        while engine.step(&mut stepped).expect("step").is_some() {
            steps += 1;
        }
        prop_assert_eq!(outcome.merges, steps);
        prop_assert_eq!(runs, stepped);
    }

    /// Merges never exceed `runs - 1`.
    #[test]
    fn merge_count_bounded(values in vec(-20i64..20, 1..=24)) {
        let solution = solve(&values).expect("solve");
        prop_assert!(solution.merges <= solution.initial_runs.saturating_sub(1));
    }

    /// Same input, same answer and same interval.
    #[test]
    fn deterministic(values in vec(-50i64..50, 1..=24)) {
        prop_assert_eq!(solve(&values).expect("first"), solve(&values).expect("second"));
    }

    /// Largest gap equals the maximum pairwise absolute difference.
    #[test]
    fn largest_gap_matches_pairwise(values in vec(any::<i64>(), 1..=12)) {
        let mut expected: Sum = 0;
        for &a in &values {
            for &b in &values {
                expected = expected.max((Sum::from(a) - Sum::from(b)).abs());
            }
        }
        prop_assert_eq!(largest_gap(&values).expect("gap"), expected);
    }
}
