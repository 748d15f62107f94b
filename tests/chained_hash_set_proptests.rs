// ChainedHashSet property tests over the public API.
//
// Property 1: add/contains/size bookkeeping.
//  - After a successful add(k): contains(k) and len grew by exactly one.
//  - add(k) on a present key fails and len is unchanged.
//
// Property 2: remove is exact and idempotent.
//  - After a successful remove(k): !contains(k), len shrank by one, and a
//    second remove(k) fails.
//  - remove(k) on an absent key changes neither len nor display().
use chained_hashset::{AddError, ChainedHashSet};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_add_bookkeeping(
        buckets in 1usize..=16,
        keys in proptest::collection::vec("[a-c]{0,3}", 1..64),
    ) {
        let mut s = ChainedHashSet::with_buckets(buckets).unwrap();
        for k in keys {
            let present = s.contains(&k);
            let before = s.len();
            match s.add(k.clone()) {
                Ok(_) => {
                    prop_assert!(!present);
                    prop_assert!(s.contains(&k));
                    prop_assert_eq!(s.len(), before + 1);
                }
                Err(AddError::Duplicate) => {
                    prop_assert!(present);
                    prop_assert_eq!(s.len(), before);
                }
            }
        }
        prop_assert_eq!(s.iter().count(), s.len());
    }
}

proptest! {
    #[test]
    fn prop_remove_exact_and_idempotent(
        buckets in 1usize..=16,
        keys in proptest::collection::vec("[a-c]{0,3}", 0..32),
        probes in proptest::collection::vec("[a-d]{0,3}", 1..32),
    ) {
        let mut s = ChainedHashSet::with_buckets(buckets).unwrap();
        for k in keys {
            let _ = s.add(k);
        }
        for k in probes {
            let before_len = s.len();
            if s.contains(&k) {
                prop_assert_eq!(s.remove(&k), Some(k.clone()));
                prop_assert!(!s.contains(&k));
                prop_assert_eq!(s.len(), before_len - 1);
                let snapshot = s.display();
                prop_assert!(s.remove(&k).is_none());
                prop_assert_eq!(s.display(), snapshot);
            } else {
                let snapshot = s.display();
                prop_assert!(s.remove(&k).is_none());
                prop_assert_eq!(s.len(), before_len);
                prop_assert_eq!(s.display(), snapshot);
            }
        }
    }
}
