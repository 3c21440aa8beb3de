//! Set and map uniqueness properties

use crate::fast_runner;
use populate::*;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Property: sets hold exactly the requested number of in-range keys
pub fn test_set_keys_are_distinct() {
    let result = fast_runner().run(&(-1000i64..1000, 0i64..64), |(lo, width)| {
        let mut engine = Engine::new();
        let keys = ArithmeticValueGenerator::new(lo, lo + width).unwrap();
        let size = (width + 1) as usize;

        // Every feasible size up to the full interval.
        for n in [0, size / 2, size] {
            let set: BTreeSet<i64> = engine.generate_set(n, &keys).unwrap();
            prop_assert_eq!(set.len(), n);
            prop_assert!(set.iter().all(|k| lo <= *k && *k <= lo + width));

            let hashed: HashSet<i64> = engine.generate_set(n, &keys).unwrap();
            prop_assert_eq!(hashed.len(), n);
        }
        Ok(())
    });

    match result {
        Ok(()) => println!("✓ Set key distinctness property passed"),
        Err(error) => panic!("Set key distinctness property failed: {error}"),
    }
}

/// Property: maps hold exactly the requested number of distinct keys
pub fn test_map_keys_are_distinct() {
    let result = fast_runner().run(&(1u16..40, 0usize..20), |(width, extra)| {
        let mut engine = Engine::new();
        let keys = ArithmeticValueGenerator::new(0u16, width).unwrap();
        let values = StringValueGenerator::new(0, 3, "ab").unwrap();
        let size = (width as usize + 1).saturating_sub(extra);

        let map: BTreeMap<u16, String> = engine.generate_map(size, &keys, &values).unwrap();
        prop_assert_eq!(map.len(), size);
        prop_assert!(map.keys().all(|k| *k <= width));
        prop_assert!(map.values().all(|v| v.len() <= 3));

        let hashed: HashMap<u16, String> = engine.generate_map(size, &keys, &values).unwrap();
        prop_assert_eq!(hashed.len(), size);
        Ok(())
    });

    match result {
        Ok(()) => println!("✓ Map key distinctness property passed"),
        Err(error) => panic!("Map key distinctness property failed: {error}"),
    }
}

/// Property: requesting more keys than the range allows fails before drawing
pub fn test_infeasible_sets_fail() {
    let result = fast_runner().run(&(any::<i8>(), 0u8..50, 1usize..10), |(lo, width, excess)| {
        let hi = lo.saturating_add(width as i8);
        let mut engine = Engine::new();
        let keys = ArithmeticValueGenerator::new(lo, hi).unwrap();
        let span = hi.abs_diff(lo) as usize;
        let size = span + 1 + excess;

        let set: Result<BTreeSet<i8>> = engine.generate_set(size, &keys);
        prop_assert_eq!(
            set,
            Err(PopulateError::RangeExhausted {
                requested: size,
                range: span,
            })
        );

        let map: Result<BTreeMap<i8, u8>> =
            engine.generate_map(size, &keys, &ArithmeticValueGenerator::<u8>::default());
        prop_assert!(
            matches!(map, Err(PopulateError::RangeExhausted { .. })),
            "expected RangeExhausted, got {:?}",
            map
        );
        Ok(())
    });

    match result {
        Ok(()) => println!("✓ Infeasible set property passed"),
        Err(error) => panic!("Infeasible set property failed: {error}"),
    }
}

/// Property: string keys can fill their whole range and no further
pub fn test_string_keys_up_to_their_range() {
    let result = fast_runner().run(&(1usize..4, "[a-e]{1,3}"), |(len, alphabet)| {
        let mut engine = Engine::new();
        let keys = StringValueGenerator::new(len, len, alphabet.clone()).unwrap();
        let symbols: BTreeSet<char> = alphabet.chars().collect();
        let count = symbols.len().pow(len as u32);
        prop_assert_eq!(keys.range(), Range::Distinct(count));

        let set: BTreeSet<String> = engine.generate_set(count, &keys).unwrap();
        prop_assert_eq!(set.len(), count);

        let too_many: Result<BTreeSet<String>> = engine.generate_set(count + 1, &keys);
        prop_assert!(too_many.is_err());
        Ok(())
    });

    match result {
        Ok(()) => println!("✓ String key range property passed"),
        Err(error) => panic!("String key range property failed: {error}"),
    }
}
