//! Uniform generators over numeric intervals.

use super::{KeyGenerator, Range, ValueGenerator};
use crate::data::{Count, RandomSource};
use crate::error::{PopulateError, Result};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Numeric element types an [`ArithmeticValueGenerator`] can draw.
///
/// Implemented for every primitive integer and floating-point type.
/// `bool` and `char` do not implement it.
pub trait Arithmetic: SampleUniform + PartialOrd + Copy + fmt::Debug + sealed::Sealed {
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;

    /// Reject bounds no interval can be built from.
    fn check_bound(self) -> Result<()>;

    /// The distinct-value range of `[min, max]`.
    fn span(min: Self, max: Self) -> Range;

    /// Draw uniformly from the closed interval `[min, max]`.
    fn sample<R: Rng + ?Sized>(min: Self, max: Self, rng: &mut R) -> Self;
}

macro_rules! integer_arithmetic {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Arithmetic for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                fn check_bound(self) -> Result<()> {
                    Ok(())
                }

                fn span(min: Self, max: Self) -> Range {
                    Range::Span(Count::try_from(max.abs_diff(min)).unwrap_or(Count::MAX))
                }

                fn sample<R: Rng + ?Sized>(min: Self, max: Self, rng: &mut R) -> Self {
                    rng.gen_range(min..=max)
                }
            }
        )*
    };
}

macro_rules! float_arithmetic {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Arithmetic for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                fn check_bound(self) -> Result<()> {
                    if self.is_finite() {
                        Ok(())
                    } else {
                        Err(PopulateError::invalid_configuration(format!(
                            "floating-point bound {self} is not finite"
                        )))
                    }
                }

                fn span(_min: Self, _max: Self) -> Range {
                    Range::Continuous
                }

                fn sample<R: Rng + ?Sized>(min: Self, max: Self, rng: &mut R) -> Self {
                    let width = max - min;
                    if width.is_finite() && width <= <$t>::MAX / 2.0 {
                        rng.gen_range(min..=max)
                    } else {
                        // Width too close to overflow for rand's scale; interpolate instead.
                        let t: $t = rng.gen_range(0.0..=1.0);
                        min * (1.0 - t) + max * t
                    }
                }
            }
        )*
    };
}

integer_arithmetic!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_arithmetic!(f32, f64);

/// Uniform generator over the closed interval `[min, max]`.
///
/// Integers are drawn with an integer-uniform law, floats with a
/// real-uniform law. Reversed bounds are swapped, so
/// `new(24, 10)` and `new(10, 24)` describe the same generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArithmeticValueGenerator<T> {
    min: T,
    max: T,
}

impl<T: Arithmetic> ArithmeticValueGenerator<T> {
    /// Create a generator over `[min, max]`, in either argument order.
    ///
    /// Fails with [`PopulateError::InvalidConfiguration`] when a
    /// floating-point bound is NaN or infinite.
    pub fn new(min: T, max: T) -> Result<Self> {
        min.check_bound()?;
        max.check_bound()?;
        let (min, max) = if max < min { (max, min) } else { (min, max) };
        Ok(ArithmeticValueGenerator { min, max })
    }

    /// The lower bound.
    pub fn min(&self) -> T {
        self.min
    }

    /// The upper bound.
    pub fn max(&self) -> T {
        self.max
    }
}

/// The full representable range of `T`.
impl<T: Arithmetic> Default for ArithmeticValueGenerator<T> {
    fn default() -> Self {
        ArithmeticValueGenerator {
            min: T::MIN,
            max: T::MAX,
        }
    }
}

impl<T: Arithmetic> ValueGenerator for ArithmeticValueGenerator<T> {
    type Value = T;

    fn draw(&self, source: &mut RandomSource) -> T {
        T::sample(self.min, self.max, source)
    }
}

impl<T: Arithmetic> KeyGenerator for ArithmeticValueGenerator<T> {
    fn range(&self) -> Range {
        T::span(self.min, self.max)
    }
}
