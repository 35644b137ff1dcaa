// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Shrinking and the Suite Runner
//!
//! Shrink candidates must be strictly smaller than their origin so the
//! search terminates, the search must end on a value that still fails, and
//! the size schedule must never grow between trials.

use std::cell::Cell;
use std::rc::Rc;

use cim_propcheck::runner::size_for_trial;
use cim_propcheck::sampleable::{shrink_int, shrink_nat, NatSampler, VecSampler};
use cim_propcheck::shrink::shrink_value;
use cim_propcheck::{run_suite, Configuration, Gen, Prop};
use proptest::prelude::*;

proptest! {
    /// Property: Every natural candidate is strictly smaller
    #[test]
    fn prop_shrink_nat_strictly_decreasing(n in any::<u64>()) {
        let candidates = shrink_nat(n);
        prop_assert!(candidates.iter().all(|&c| c < n));
        if n > 0 {
            prop_assert_eq!(candidates.last().copied(), Some(n - 1));
        }
    }

    /// Property: Integer candidates decrease the measure `(|x|, x < 0)`
    #[test]
    fn prop_shrink_int_decreases_measure(x in any::<i64>()) {
        let measure = |v: i64| (v.unsigned_abs(), v < 0);
        prop_assert!(shrink_int(x).into_iter().all(|c| measure(c) < measure(x)));
    }

    /// Property: Shrinking a monotone predicate finds its least failing value
    #[test]
    fn prop_shrink_finds_threshold(threshold in 0u64..1_000, extra in 0u64..10_000) {
        let start = threshold + extra;
        let (value, shrinks) = shrink_value(&NatSampler, start, |&x| x >= threshold);

        prop_assert_eq!(value, threshold);
        prop_assert_eq!(shrinks == 0, start == threshold);
    }

    /// Property: A shrunk list still fails and is no longer than the original
    #[test]
    fn prop_shrunk_list_still_fails(
        xs in prop::collection::vec(0u64..100, 1..12),
        bound in 0u64..100,
    ) {
        prop_assume!(xs.iter().any(|&x| x >= bound));
        let fails = |ys: &Vec<u64>| ys.iter().any(|&y| y >= bound);
        let (shrunk, _) = shrink_value(&VecSampler::new(NatSampler), xs.clone(), fails);

        prop_assert!(fails(&shrunk));
        prop_assert!(shrunk.len() <= xs.len());
        prop_assert_eq!(shrunk, vec![bound]);
    }

    /// Property: Sizes never increase from one trial to the next
    #[test]
    fn prop_size_schedule_non_increasing(num_inst in 1usize..500, max_size in 0usize..10_000) {
        let sizes: Vec<usize> = (0..num_inst)
            .map(|i| size_for_trial(i, num_inst, max_size))
            .collect();

        prop_assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
        prop_assert!(sizes.iter().all(|&s| s < max_size.max(1)));
        prop_assert_eq!(sizes.last().copied(), Some(0));
    }

    /// Property: The suite stops right after the first failing trial
    #[test]
    fn prop_suite_short_circuits(fail_at in 0usize..40, seed in any::<u64>()) {
        let runs = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&runs);
        let prop = Prop::check("fails once", move || {
            let n = counter.get();
            counter.set(n + 1);
            n != fail_at
        });
        let cfg = Configuration::default().with_num_inst(40);
        let report = run_suite(&prop, &cfg, &mut Gen::from_seed(seed));

        prop_assert_eq!(runs.get(), fail_at + 1);
        prop_assert_eq!(report.trials.len(), fail_at + 1);
        prop_assert_eq!(report.failure().map(|t| t.index), Some(fail_at));
    }
}
