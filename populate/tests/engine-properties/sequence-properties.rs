//! Sequential and static array properties

use crate::fast_runner;
use populate::*;
use proptest::prelude::*;
use std::collections::{LinkedList, VecDeque};

/// Property: sequences have the requested length and every element lies in bounds
pub fn test_sequence_length_and_bounds() {
    let result = fast_runner().run(
        &(any::<i32>(), any::<i32>(), 0usize..200),
        |(a, b, size)| {
            let mut engine = Engine::new();
            let values = ArithmeticValueGenerator::new(a, b).unwrap();
            let (lo, hi) = (a.min(b), a.max(b));

            let v: Vec<i32> = engine.generate_sequential(size, &values);
            prop_assert_eq!(v.len(), size);
            prop_assert!(v.iter().all(|x| lo <= *x && *x <= hi));

            let d: VecDeque<i32> = engine.generate_sequential(size, &values);
            prop_assert_eq!(d.len(), size);
            prop_assert!(d.iter().all(|x| lo <= *x && *x <= hi));

            let l: LinkedList<i32> = engine.generate_sequential(size, &values);
            prop_assert_eq!(l.len(), size);
            prop_assert!(l.iter().all(|x| lo <= *x && *x <= hi));
            Ok(())
        },
    );

    match result {
        Ok(()) => println!("✓ Sequence length and bounds property passed"),
        Err(error) => panic!("Sequence length and bounds property failed: {error}"),
    }
}

/// Property: static arrays fill every slot from the interval
pub fn test_fixed_array_bounds() {
    let result = fast_runner().run(&(any::<f64>(), any::<f64>()), |(a, b)| {
        prop_assume!(a.is_finite() && b.is_finite());
        let mut engine = Engine::new();
        let values = ArithmeticValueGenerator::new(a, b).unwrap();

        let array: [f64; 16] = engine.generate_fixed(&values);
        prop_assert!(array.iter().all(|x| a.min(b) <= *x && *x <= a.max(b)));
        Ok(())
    });

    match result {
        Ok(()) => println!("✓ Fixed array bounds property passed"),
        Err(error) => panic!("Fixed array bounds property failed: {error}"),
    }
}
