//! Per-member extraction chains.

use core::any::Any;

use serde::Serialize;
use serde_json::Value;

use crate::destination::Destination;
use crate::error::MapResult;
use crate::mapper::Mapper;
use crate::value::MemberValue;

/// A type-erased extraction step: reads a source and produces the value for
/// one destination member.
pub type Extractor<S> = Box<dyn Fn(&S, &Mapper) -> MapResult<MemberValue> + Send + Sync>;

/// How one destination member is derived from a source of type `S`.
///
/// Holds an ordered chain of extractors. When the member is mapped **every**
/// extractor runs, in registration order, and only the last result is written
/// to the destination. Appending a second extractor therefore overrides the
/// first without removing it; the first still runs and can still fail.
pub struct MemberConfiguration<S> {
    extractors: Vec<Extractor<S>>,
}

impl<S> Default for MemberConfiguration<S> {
    fn default() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }
}

impl<S> core::fmt::Debug for MemberConfiguration<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemberConfiguration")
            .field("extractors", &self.extractors.len())
            .finish()
    }
}

impl<S: Any> MemberConfiguration<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an extractor reading the member's value from the source.
    pub fn map_from<T, F>(&mut self, extract: F) -> &mut Self
    where
        T: Serialize + Any + Send,
        F: Fn(&S) -> MapResult<T> + Send + Sync + 'static,
    {
        self.add_extractor(Box::new(
            move |source: &S, _mapper: &Mapper| -> MapResult<MemberValue> {
                Ok(MemberValue::new(extract(source)?))
            },
        ))
    }

    /// Append an extractor that also receives the executing mapper.
    ///
    /// This is how nested records are mapped: the extractor calls back into
    /// `mapper.map(..)` on a nested part of the source.
    pub fn map_with<T, F>(&mut self, extract: F) -> &mut Self
    where
        T: Serialize + Any + Send,
        F: Fn(&S, &Mapper) -> MapResult<T> + Send + Sync + 'static,
    {
        self.add_extractor(Box::new(
            move |source: &S, mapper: &Mapper| -> MapResult<MemberValue> {
                Ok(MemberValue::new(extract(source, mapper)?))
            },
        ))
    }

    /// Append an extractor that maps a nested JSON value to `N` through the
    /// executing mapper, using whatever `Value -> N` configuration it holds.
    pub fn map_nested<N, F>(&mut self, select: F) -> &mut Self
    where
        N: Destination + Serialize + Send,
        F: Fn(&S) -> MapResult<&Value> + Send + Sync + 'static,
    {
        self.map_with(move |source, mapper| mapper.map::<Value, N>(select(source)?))
    }

    /// Like [`map_nested`](Self::map_nested), but an absent nested value
    /// yields `N::default()` instead of an error.
    pub fn map_nested_or_default<N, F>(&mut self, select: F) -> &mut Self
    where
        N: Destination + Serialize + Send,
        F: Fn(&S) -> Option<&Value> + Send + Sync + 'static,
    {
        self.map_with(move |source, mapper| match select(source) {
            Some(nested) => mapper.map::<Value, N>(nested),
            None => Ok(N::default()),
        })
    }

    /// Append an already type-erased extractor.
    pub fn add_extractor(&mut self, extractor: Extractor<S>) -> &mut Self {
        self.extractors.push(extractor);
        self
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }

    /// Run the whole chain against `source`.
    ///
    /// Returns the last extractor's value, or `None` for an empty chain. The
    /// first failing extractor aborts the chain and its error is returned as is.
    pub fn extract(&self, source: &S, mapper: &Mapper) -> MapResult<Option<MemberValue>> {
        let mut value = None;
        for extractor in &self.extractors {
            value = Some(extractor(source, mapper)?);
        }
        Ok(value)
    }
}
