//! Value generators and the combinators that compose them.

use crate::data::{Count, RandomSource};
use std::fmt;
use std::marker::PhantomData;

mod arithmetic;
mod string;

pub use arithmetic::*;
pub use string::*;

/// A generator of single random values of type `Value`.
///
/// Generators are immutable configuration: every draw depends only on the
/// configuration and the random source passed in. The engine applies a
/// generator once per element it needs.
pub trait ValueGenerator {
    /// The type of value produced by each draw.
    type Value;

    /// Draw one value from the given random source.
    fn draw(&self, source: &mut RandomSource) -> Self::Value;

    /// Map a function over the drawn values.
    ///
    /// The result never reports a [`Range`]: a mapping may collapse
    /// distinct draws into the same value.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Value) -> U,
    {
        Map { generator: self, f }
    }
}

/// A value generator that knows how many distinct values it can produce.
///
/// Only key generators can drive set and map generation, because the
/// reported range is what bounds the retry loop that enforces uniqueness.
pub trait KeyGenerator: ValueGenerator {
    /// The number of distinct values this generator can produce.
    fn range(&self) -> Range;
}

/// The distinct-value range reported by a [`KeyGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range {
    /// `max - min` of a discrete interval, which holds `span + 1` values.
    Span(Count),
    /// The exact number of distinct values.
    Distinct(Count),
    /// A continuous domain, treated as having no bound on distinct values.
    ///
    /// Floating-point intervals report this. It is a heuristic: a narrow
    /// float interval does hold finitely many values, and requesting more
    /// unique keys than it holds will not terminate.
    Continuous,
}

impl Range {
    /// The reported number, saturated at [`Count::MAX`].
    pub fn count(&self) -> Count {
        match *self {
            Range::Span(n) | Range::Distinct(n) => n,
            Range::Continuous => Count::MAX,
        }
    }

    /// The number of distinct values, or `None` for a continuous domain.
    pub fn distinct(&self) -> Option<Count> {
        match *self {
            Range::Span(n) => Some(n.saturating_add(1)),
            Range::Distinct(n) => Some(n),
            Range::Continuous => None,
        }
    }

    /// Whether `size` pairwise-distinct values can be drawn.
    pub fn admits(&self, size: Count) -> bool {
        match *self {
            Range::Span(n) => n >= size.saturating_sub(1),
            Range::Distinct(n) => n >= size,
            Range::Continuous => true,
        }
    }

    /// The range of a tuple of independent generators.
    fn product(ranges: &[Range]) -> Range {
        ranges
            .iter()
            .try_fold(1 as Count, |total, range| {
                range.distinct().map(|n| total.saturating_mul(n))
            })
            .map_or(Range::Continuous, Range::Distinct)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Range::Span(n) => write!(f, "span of {n}"),
            Range::Distinct(n) => write!(f, "{n} distinct values"),
            Range::Continuous => write!(f, "continuous"),
        }
    }
}

impl<G: ValueGenerator + ?Sized> ValueGenerator for &G {
    type Value = G::Value;

    fn draw(&self, source: &mut RandomSource) -> Self::Value {
        (**self).draw(source)
    }
}

impl<G: KeyGenerator + ?Sized> KeyGenerator for &G {
    fn range(&self) -> Range {
        (**self).range()
    }
}

impl<G: ValueGenerator + ?Sized> ValueGenerator for Box<G> {
    type Value = G::Value;

    fn draw(&self, source: &mut RandomSource) -> Self::Value {
        (**self).draw(source)
    }
}

impl<G: KeyGenerator + ?Sized> KeyGenerator for Box<G> {
    fn range(&self) -> Range {
        (**self).range()
    }
}

/// Generator returned by [`ValueGenerator::map`].
#[derive(Debug, Clone)]
pub struct Map<G, F> {
    generator: G,
    f: F,
}

impl<G, F, U> ValueGenerator for Map<G, F>
where
    G: ValueGenerator,
    F: Fn(G::Value) -> U,
{
    type Value = U;

    fn draw(&self, source: &mut RandomSource) -> U {
        (self.f)(self.generator.draw(source))
    }
}

/// Generator backed by a closure, see [`from_fn`].
pub struct FromFn<F, T> {
    f: F,
    _marker: PhantomData<fn() -> T>,
}

impl<F: Clone, T> Clone for FromFn<F, T> {
    fn clone(&self) -> Self {
        FromFn {
            f: self.f.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, T> ValueGenerator for FromFn<F, T>
where
    F: Fn(&mut RandomSource) -> T,
{
    type Value = T;

    fn draw(&self, source: &mut RandomSource) -> T {
        (self.f)(source)
    }
}

/// Create a generator from a function of the random source.
///
/// This is the quickest way to build a composite generator out of other
/// generators:
///
/// ```rust,ignore
/// let ages = ArithmeticValueGenerator::new(18u8, 99)?;
/// let names = StringValueGenerator::new(3, 8, ASCII_LOWERCASE)?;
/// let people = from_fn(move |source| (names.draw(source), ages.draw(source)));
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F, T>
where
    F: Fn(&mut RandomSource) -> T,
{
    FromFn {
        f,
        _marker: PhantomData,
    }
}

/// A generator that always produces the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant<T>(pub T);

impl<T: Clone> ValueGenerator for Constant<T> {
    type Value = T;

    fn draw(&self, _source: &mut RandomSource) -> T {
        self.0.clone()
    }
}

impl<T: Clone> KeyGenerator for Constant<T> {
    fn range(&self) -> Range {
        Range::Distinct(1)
    }
}

/// A generator paired with a caller-asserted range.
#[derive(Debug, Clone)]
pub struct AssumeRange<G> {
    generator: G,
    range: Range,
}

impl<G: ValueGenerator> ValueGenerator for AssumeRange<G> {
    type Value = G::Value;

    fn draw(&self, source: &mut RandomSource) -> Self::Value {
        self.generator.draw(source)
    }
}

impl<G: ValueGenerator> KeyGenerator for AssumeRange<G> {
    fn range(&self) -> Range {
        self.range
    }
}

/// Use any generator as a key generator by asserting its range.
///
/// An optimistic range defeats the feasibility check. Pair this with
/// [`Config::with_retry_limit`](crate::Config::with_retry_limit) when the
/// real range is uncertain.
pub fn assume_range<G: ValueGenerator>(generator: G, range: Range) -> AssumeRange<G> {
    AssumeRange { generator, range }
}

macro_rules! tuple_generator {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: ValueGenerator),+> ValueGenerator for ($($name,)+) {
            type Value = ($($name::Value,)+);

            fn draw(&self, source: &mut RandomSource) -> Self::Value {
                ($(self.$idx.draw(source),)+)
            }
        }

        impl<$($name: KeyGenerator),+> KeyGenerator for ($($name,)+) {
            fn range(&self) -> Range {
                Range::product(&[$(self.$idx.range()),+])
            }
        }
    };
}

tuple_generator!(A: 0, B: 1);
tuple_generator!(A: 0, B: 1, C: 2);
tuple_generator!(A: 0, B: 1, C: 2, D: 3);
