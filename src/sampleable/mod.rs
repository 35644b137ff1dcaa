// Copyright (c) 2025 - Cowboy AI, Inc.
//! Sampler/Shrinker Capability
//!
//! A `Sampleable` produces random values at a given size and, for any value it
//! produced, a finite list of smaller candidates to try when that value turns
//! out to be a counterexample.
//!
//! # Proxies
//!
//! Samplers work on a proxy representation and only interpret it into the
//! user-facing value at the end. The proxy may be richer than the value, which
//! lets structural shrinking happen on the proxy:
//!
//! ```text
//! sample(size)  ──►  Proxy  ──interpret──►  Value
//!                      │
//!                      └── shrink ──► [Proxy, Proxy, ...]  (each strictly smaller)
//! ```
//!
//! # Contract
//!
//! `shrink` must return a finite list whose elements are each strictly smaller
//! than the input by some well-founded measure of the sampler's choosing. The
//! shrink search relies on this for termination and does not defend against
//! samplers that break it.
//!
//! # Subtypes by Construction
//!
//! [`Sampleable::map`] keeps the base proxy and post-processes the value, so a
//! sampler for a restricted type can be built from an unrestricted one while
//! still shrinking structurally:
//!
//! ```rust,ignore
//! // naturals strictly greater than 10
//! let above_ten = NatSampler.map(|n| n + 11);
//! ```

pub mod collections;
pub mod primitives;

pub use collections::{OptionSampler, PairSampler, VecSampler, MAX_GENERATED_LEN};
pub use primitives::{
    shrink_int, shrink_nat, BoolSampler, CharSampler, IntSampler, NatSampler, StringSampler,
};

use crate::gen::Gen;
use std::fmt::Debug;

/// Random generation and shrinking for one type
pub trait Sampleable {
    /// Type the proxy is interpreted into
    type Value;

    /// Intermediate representation that is sampled and shrunk
    type Proxy: Clone + Debug;

    /// Draw a proxy at the generator's current size
    fn sample(&self, gen: &mut Gen) -> Self::Proxy;

    /// Smaller candidates, most aggressive first
    fn shrink(&self, proxy: &Self::Proxy) -> Vec<Self::Proxy> {
        let _ = proxy;
        Vec::new()
    }

    /// Value represented by a proxy
    fn interpret(&self, proxy: &Self::Proxy) -> Self::Value;

    /// Post-process every sampled value with `f`
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Value) -> U,
    {
        Map { inner: self, f }
    }
}

/// Types with a default sampler
pub trait Arbitrary: Clone + Debug + PartialEq + 'static {
    /// Sampler used by [`crate::prop::Prop::for_all`]
    type Sampler: Sampleable<Value = Self> + 'static;

    fn sampler() -> Self::Sampler;
}

/// Sampler produced by [`Sampleable::map`]
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    inner: S,
    f: F,
}

impl<S, F, U> Sampleable for Map<S, F>
where
    S: Sampleable,
    F: Fn(S::Value) -> U,
{
    type Value = U;
    type Proxy = S::Proxy;

    fn sample(&self, gen: &mut Gen) -> Self::Proxy {
        self.inner.sample(gen)
    }

    fn shrink(&self, proxy: &Self::Proxy) -> Vec<Self::Proxy> {
        self.inner.shrink(proxy)
    }

    fn interpret(&self, proxy: &Self::Proxy) -> U {
        (self.f)(self.inner.interpret(proxy))
    }
}
