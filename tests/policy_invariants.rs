//! Property tests shared by every replacement policy.
//!
//! Random victims are not seed-stable, so these check invariants that hold
//! for any choice of victim.

use pagesim::{MissRate, PageRef, PolicyKind, Simulator};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet, VecDeque};

fn kind_strategy() -> impl Strategy<Value = PolicyKind> {
    prop_oneof![
        Just(PolicyKind::Fifo),
        Just(PolicyKind::Lru),
        Just(PolicyKind::Random),
    ]
}

fn trace_strategy() -> impl Strategy<Value = Vec<PageRef>> {
    prop::collection::vec((0u32..16).prop_map(PageRef::new), 0..200)
}

proptest! {
    #[test]
    fn resident_set_never_exceeds_capacity(
        kind in kind_strategy(),
        capacity in 1usize..12,
        trace in trace_strategy(),
    ) {
        let mut sim = Simulator::new(kind, capacity).unwrap();
        for page in trace {
            let step = sim.step(page);
            prop_assert!(step.resident <= capacity);
            prop_assert_eq!(step.frames.len(), capacity);

            let occupied: Vec<_> = step.frames.iter().flatten().collect();
            prop_assert_eq!(occupied.len(), step.resident);
            let unique: HashSet<_> = occupied.iter().collect();
            prop_assert_eq!(unique.len(), occupied.len());
            prop_assert!(step.frames.contains(&Some(page)));
        }
    }

    #[test]
    fn hits_never_change_frames(
        kind in kind_strategy(),
        capacity in 1usize..8,
        trace in trace_strategy(),
    ) {
        let mut sim = Simulator::new(kind, capacity).unwrap();
        let mut before = vec![None; capacity];
        for page in trace {
            let step = sim.step(page);
            if step.is_hit() {
                prop_assert_eq!(&step.frames, &before);
                prop_assert!(!step.fault);
            }
            before = step.frames;
        }
    }

    #[test]
    fn miss_rate_is_bounded(
        kind in kind_strategy(),
        capacity in 1usize..12,
        trace in trace_strategy(),
    ) {
        let mut sim = Simulator::new(kind, capacity).unwrap();
        let stats = sim.run(&trace);

        prop_assert!(stats.faults <= stats.counted);
        prop_assert!(stats.counted <= stats.references);
        prop_assert_eq!(stats.hits + stats.admissions + stats.evictions, stats.references);
        prop_assert_eq!(stats.faults, stats.evictions);
        prop_assert!(stats.admissions <= capacity as u64);

        prop_assert_eq!(stats.miss_rate().is_defined(), stats.counted > 0);
        match stats.miss_rate() {
            MissRate::Percent(rate) => {
                prop_assert!(stats.counted > 0);
                prop_assert!((0.0..=100.0).contains(&rate));
            }
            MissRate::Undefined => prop_assert_eq!(stats.counted, 0),
        }
    }

    #[test]
    fn fifo_victim_is_oldest_admission(
        capacity in 1usize..6,
        trace in trace_strategy(),
    ) {
        let mut sim = Simulator::new(PolicyKind::Fifo, capacity).unwrap();
        let mut admitted: VecDeque<PageRef> = VecDeque::new();
        for page in trace {
            let step = sim.step(page);
            if step.access.is_miss() {
                if let Some(victim) = step.access.victim() {
                    prop_assert_eq!(admitted.pop_front(), Some(victim));
                }
                admitted.push_back(page);
            }
        }
    }

    #[test]
    fn lru_victim_is_least_recently_used(
        capacity in 1usize..6,
        trace in trace_strategy(),
    ) {
        let mut sim = Simulator::new(PolicyKind::Lru, capacity).unwrap();
        let mut last_use: HashMap<PageRef, usize> = HashMap::new();
        let mut resident: Vec<PageRef> = Vec::new();
        for (time, page) in trace.into_iter().enumerate() {
            let step = sim.step(page);
            if let Some(victim) = step.access.victim() {
                let oldest = resident.iter().min_by_key(|p| last_use[*p]).copied();
                prop_assert_eq!(oldest, Some(victim));
            }
            last_use.insert(page, time);
            resident = step.frames.iter().flatten().copied().collect();
        }
    }
}
