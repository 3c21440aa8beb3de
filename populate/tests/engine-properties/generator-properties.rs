//! Value generator configuration properties

use crate::fast_runner;
use populate::*;
use proptest::prelude::*;

/// Property: swapped arithmetic bounds describe the same interval
pub fn test_arithmetic_normalization() {
    let result = fast_runner().run(&(any::<u32>(), any::<u32>()), |(a, b)| {
        let forward = ArithmeticValueGenerator::new(a, b).unwrap();
        let reversed = ArithmeticValueGenerator::new(b, a).unwrap();
        prop_assert_eq!(forward, reversed);
        prop_assert_eq!(forward.range(), Range::Span(a.abs_diff(b) as Count));

        let mut engine = Engine::new();
        for _ in 0..16 {
            let value = engine.draw(&reversed);
            prop_assert!(forward.min() <= value && value <= forward.max());
        }
        Ok(())
    });

    match result {
        Ok(()) => println!("✓ Arithmetic normalization property passed"),
        Err(error) => panic!("Arithmetic normalization property failed: {error}"),
    }
}

/// Property: swapped string lengths describe the same generator
pub fn test_string_normalization() {
    let result = fast_runner().run(&(0usize..10, 0usize..10), |(a, b)| {
        let forward = StringValueGenerator::new(a, b, DIGITS).unwrap();
        let reversed = StringValueGenerator::new(b, a, DIGITS).unwrap();
        prop_assert_eq!(&forward, &reversed);
        prop_assert_eq!(forward.min_len(), a.min(b));
        prop_assert_eq!(forward.max_len(), a.max(b));
        Ok(())
    });

    match result {
        Ok(()) => println!("✓ String normalization property passed"),
        Err(error) => panic!("String normalization property failed: {error}"),
    }
}

/// Property: drawn strings respect the length bounds and the alphabet
pub fn test_string_alphabet_membership() {
    let result = fast_runner().run(
        &(0usize..8, 0usize..8, "[a-zA-Z0-9äöü]{1,12}"),
        |(a, b, alphabet)| {
            let mut engine = Engine::new();
            let strings = StringValueGenerator::new(a, b, alphabet.clone()).unwrap();

            let v: Vec<String> = engine.generate_sequential(20, &strings);
            for s in &v {
                let len = s.chars().count();
                prop_assert!(a.min(b) <= len && len <= a.max(b));
                prop_assert!(s.chars().all(|c| alphabet.contains(c)));
            }
            Ok(())
        },
    );

    match result {
        Ok(()) => println!("✓ String alphabet membership property passed"),
        Err(error) => panic!("String alphabet membership property failed: {error}"),
    }
}
