//! The generation engine.

use crate::data::{Config, Count, RandomSource};
use crate::error::Result;
use crate::gen::{KeyGenerator, ValueGenerator};
use crate::shape::{FixedContainer, MapContainer, SequentialContainer, SetContainer};
use crate::strategy;

/// Populates containers with random values.
///
/// An engine owns one [`RandomSource`], seeded from platform entropy when
/// the engine is created. Engines are independent of each other; a single
/// engine is meant to be used from one thread at a time.
///
/// ```rust,ignore
/// let mut engine = Engine::new();
/// let digits = ArithmeticValueGenerator::new(0, 9)?;
///
/// let rolls: Vec<i32> = engine.generate_sequential(10, &digits);
/// let unique: BTreeSet<i32> = engine.generate_set(10, &digits)?;
/// ```
#[derive(Debug)]
pub struct Engine {
    source: RandomSource,
    config: Config,
}

impl Engine {
    /// Create an engine with a freshly seeded source and default config.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an engine with a freshly seeded source.
    pub fn with_config(config: Config) -> Self {
        let source = RandomSource::new();
        tracing::debug!(seed = %source.seed(), ?config, "engine created");
        Engine { source, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The engine's random source, for driving generators by hand.
    pub fn source(&mut self) -> &mut RandomSource {
        &mut self.source
    }

    /// Draw a single value.
    pub fn draw<G>(&mut self, generator: &G) -> G::Value
    where
        G: ValueGenerator + ?Sized,
    {
        generator.draw(&mut self.source)
    }

    /// Populate any container from a request matching its shape.
    ///
    /// ```rust,ignore
    /// let names: Vec<String> = engine.generate(Sequence::new(10, &strings))?;
    /// let ids: HashSet<u32> = engine.generate(Keys::new(10, &ids))?;
    /// ```
    pub fn generate<C, R>(&mut self, request: R) -> Result<C>
    where
        R: Request<C>,
    {
        request.fulfil(self)
    }

    /// Append `size` independent draws to a fresh sequential container.
    pub fn generate_sequential<C, G>(&mut self, size: Count, values: &G) -> C
    where
        C: SequentialContainer,
        G: ValueGenerator<Value = C::Item> + ?Sized,
    {
        strategy::populate_sequential(&mut self.source, &self.config, size, values)
    }

    /// Fill every slot of a fixed-capacity container.
    pub fn generate_fixed<C, G>(&mut self, values: &G) -> C
    where
        C: FixedContainer,
        G: ValueGenerator<Value = C::Item> + ?Sized,
    {
        strategy::populate_fixed(&mut self.source, values)
    }

    /// Draw keys until the set holds `size` distinct ones.
    ///
    /// Fails with [`RangeExhausted`](crate::PopulateError::RangeExhausted),
    /// before drawing anything, when `keys` cannot produce `size` distinct
    /// values.
    pub fn generate_set<C, G>(&mut self, size: Count, keys: &G) -> Result<C>
    where
        C: SetContainer,
        G: KeyGenerator<Value = C::Key> + ?Sized,
    {
        strategy::populate_set(&mut self.source, &self.config, size, keys)
    }

    /// Draw key/value pairs until the map holds `size` distinct keys.
    ///
    /// Only the key generator's range is checked; values may repeat. A pair
    /// whose key is already present is discarded whole.
    pub fn generate_map<C, K, V>(&mut self, size: Count, keys: &K, values: &V) -> Result<C>
    where
        C: MapContainer,
        K: KeyGenerator<Value = C::Key> + ?Sized,
        V: ValueGenerator<Value = C::Value> + ?Sized,
    {
        strategy::populate_map(&mut self.source, &self.config, size, keys, values)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// A generation request for containers of type `C`.
///
/// Each request type is implemented only for the containers of one shape,
/// so a request for the wrong shape does not compile.
pub trait Request<C> {
    fn fulfil(self, engine: &mut Engine) -> Result<C>;
}

/// Request for a sequential container of `size` draws.
#[derive(Debug, Clone)]
pub struct Sequence<G> {
    pub size: Count,
    pub values: G,
}

impl<G> Sequence<G> {
    pub fn new(size: Count, values: G) -> Self {
        Sequence { size, values }
    }
}

impl<C, G> Request<C> for Sequence<G>
where
    C: SequentialContainer,
    G: ValueGenerator<Value = C::Item>,
{
    fn fulfil(self, engine: &mut Engine) -> Result<C> {
        Ok(engine.generate_sequential(self.size, &self.values))
    }
}

/// Request for a fixed-capacity container.
#[derive(Debug, Clone)]
pub struct Fixed<G> {
    pub values: G,
}

impl<G> Fixed<G> {
    pub fn new(values: G) -> Self {
        Fixed { values }
    }
}

impl<C, G> Request<C> for Fixed<G>
where
    C: FixedContainer,
    G: ValueGenerator<Value = C::Item>,
{
    fn fulfil(self, engine: &mut Engine) -> Result<C> {
        Ok(engine.generate_fixed(&self.values))
    }
}

/// Request for a set of `size` distinct keys.
#[derive(Debug, Clone)]
pub struct Keys<G> {
    pub size: Count,
    pub keys: G,
}

impl<G> Keys<G> {
    pub fn new(size: Count, keys: G) -> Self {
        Keys { size, keys }
    }
}

impl<C, G> Request<C> for Keys<G>
where
    C: SetContainer,
    G: KeyGenerator<Value = C::Key>,
{
    fn fulfil(self, engine: &mut Engine) -> Result<C> {
        engine.generate_set(self.size, &self.keys)
    }
}

/// Request for a map of `size` entries with distinct keys.
#[derive(Debug, Clone)]
pub struct Entries<K, V> {
    pub size: Count,
    pub keys: K,
    pub values: V,
}

impl<K, V> Entries<K, V> {
    pub fn new(size: Count, keys: K, values: V) -> Self {
        Entries { size, keys, values }
    }
}

impl<C, K, V> Request<C> for Entries<K, V>
where
    C: MapContainer,
    K: KeyGenerator<Value = C::Key>,
    V: ValueGenerator<Value = C::Value>,
{
    fn fulfil(self, engine: &mut Engine) -> Result<C> {
        engine.generate_map(self.size, &self.keys, &self.values)
    }
}
