#![cfg(test)]

// Property tests for ChainedHashSet kept inside the crate so they can
// inspect chains directly.

use crate::chained_hash_set::{AddError, ChainedHashSet};
use crate::rolling_hash;
use proptest::prelude::*;
use std::collections::HashSet;

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Add(usize),
    Remove(usize),
    Contains(usize),
    ContainsFresh(String),
    Display,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<OpI>)> {
    (1usize..=12, proptest::collection::vec("[a-z]{0,5}", 1..=10)).prop_flat_map(
        |(buckets, pool)| {
            let idx = 0..pool.len();
            let op = prop_oneof![
                3 => idx.clone().prop_map(OpI::Add),
                2 => idx.clone().prop_map(OpI::Remove),
                2 => idx.clone().prop_map(OpI::Contains),
                1 => "[a-z]{0,5}".prop_map(OpI::ContainsFresh),
                1 => Just(OpI::Display),
            ];
            proptest::collection::vec(op, 1..80)
                .prop_map(move |ops| (buckets, pool.clone(), ops))
        },
    )
}

fn check_structure(sut: &ChainedHashSet, model: &HashSet<String>) -> Result<(), TestCaseError> {
    let mut seen = HashSet::new();
    let mut total = 0;
    for (i, chain) in sut.buckets().enumerate() {
        for k in chain {
            prop_assert_eq!(sut.bucket_of(k), i, "key stored outside its hash bucket");
            prop_assert!(seen.insert(k.clone()), "key stored twice: {:?}", k);
            total += 1;
        }
    }
    prop_assert_eq!(total, sut.len());
    prop_assert_eq!(&seen, model);
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashSet.
// Invariants exercised across random operation sequences:
// - Each live key sits in exactly one bucket, exactly once, and that bucket
//   is the one its hash names.
// - `len` equals the number of stored keys after every op.
// - Duplicate adds fail and change nothing; successful adds land at the
//   tail of their chain.
// - Removal of absent keys changes nothing; successful removal keeps the
//   relative order of the rest of the chain.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((buckets, pool, ops) in arb_scenario()) {
        let mut sut = ChainedHashSet::with_buckets(buckets).unwrap();
        let mut model: HashSet<String> = HashSet::new();

        for op in ops {
            match op {
                OpI::Add(i) => {
                    let k = pool[i].clone();
                    let already = model.contains(&k);
                    let before = sut.bucket(sut.bucket_of(&k)).unwrap().to_vec();
                    match sut.add(k.clone()) {
                        Ok(p) => {
                            prop_assert!(!already, "add must fail on duplicate");
                            prop_assert_eq!(p.bucket, sut.bucket_of(&k));
                            prop_assert_eq!(p.position, before.len());
                            let after = sut.bucket(p.bucket).unwrap();
                            prop_assert_eq!(&after[..before.len()], &before[..]);
                            prop_assert_eq!(after.last(), Some(&k));
                            model.insert(k);
                        }
                        Err(AddError::Duplicate) => {
                            prop_assert!(already, "duplicate error only when key exists");
                            let after = sut.bucket(sut.bucket_of(&k)).unwrap();
                            prop_assert_eq!(after, &before[..]);
                        }
                    }
                }
                OpI::Remove(i) => {
                    let k = &pool[i];
                    let b = sut.bucket_of(k);
                    let mut expected = sut.bucket(b).unwrap().to_vec();
                    expected.retain(|x| x != k);
                    match sut.remove(k) {
                        Some(removed) => {
                            prop_assert!(model.remove(k));
                            prop_assert_eq!(&removed, k);
                        }
                        None => prop_assert!(!model.contains(k)),
                    }
                    prop_assert_eq!(sut.bucket(b).unwrap(), &expected[..]);
                    prop_assert!(!sut.contains(k));
                }
                OpI::Contains(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.contains(k), model.contains(k));
                }
                OpI::ContainsFresh(k) => {
                    prop_assert_eq!(sut.contains(&k), model.contains(&k));
                }
                OpI::Display => {
                    let text = sut.display();
                    prop_assert_eq!(text.lines().count(), sut.bucket_count());
                    for (i, line) in text.lines().enumerate() {
                        let prefix = format!("{}: [", i);
                        prop_assert!(line.starts_with(&prefix));
                        prop_assert!(line.ends_with(']'));
                    }
                }
            }
            check_structure(&sut, &model)?;
        }
    }
}

// Property: bucket placement is a pure function of the key and bucket
// count, shared by every table with that count, and always in range.
proptest! {
    #[test]
    fn prop_hash_is_pure_and_in_range(key in "\\PC{0,16}", buckets in 1usize..=4096) {
        let a = ChainedHashSet::with_buckets(buckets).unwrap();
        let b = ChainedHashSet::with_buckets(buckets).unwrap();
        let h = a.bucket_of(&key);
        prop_assert!(h < buckets);
        prop_assert_eq!(h, a.bucket_of(&key));
        prop_assert_eq!(h, b.bucket_of(&key));
        prop_assert_eq!(h, rolling_hash::bucket_index(&key, buckets as i32));
    }
}

// Property: across the full bucket range, including counts where the
// accumulator overflows 32 bits, the index equals i64 arithmetic truncated
// to i32 after every multiply-add. Runs on the hash alone; a table this
// wide would not fit in memory.
proptest! {
    #[test]
    fn prop_hash_wraps_like_32_bit_ints(key in "\\PC{0,24}", buckets in 1i32..=i32::MAX) {
        let h = rolling_hash::bucket_index(&key, buckets);
        prop_assert!(h < buckets as usize);

        let mut wide: i64 = 0;
        for unit in key.encode_utf16() {
            let truncated = (wide * 31 + i64::from(unit)) as i32;
            wide = i64::from(truncated).rem_euclid(i64::from(buckets));
        }
        prop_assert_eq!(h, wide as usize);
    }
}
