// Copyright (c) 2025 - Cowboy AI, Inc.
//! Samplers for container types
//!
//! Containers shrink structurally on their element proxies: a list first
//! tries dropping blocks of elements, then shrinking one element at a time.

use super::{Arbitrary, Sampleable};
use crate::gen::Gen;

/// Longest list a [`VecSampler`] generates, whatever the size parameter
pub const MAX_GENERATED_LEN: usize = 4096;

/// Lists of up to `size` elements, capped at [`MAX_GENERATED_LEN`]
#[derive(Debug, Clone, Default)]
pub struct VecSampler<S> {
    element: S,
}

impl<S> VecSampler<S> {
    pub fn new(element: S) -> Self {
        Self { element }
    }
}

impl<S: Sampleable> Sampleable for VecSampler<S> {
    type Value = Vec<S::Value>;
    type Proxy = Vec<S::Proxy>;

    fn sample(&self, gen: &mut Gen) -> Self::Proxy {
        let max_len = gen.size().min(MAX_GENERATED_LEN) as u64;
        let len = gen.choose_nat(0, max_len);
        (0..len).map(|_| self.element.sample(gen)).collect()
    }

    /// Measure is `(length, element measures)`: removals shorten the list,
    /// element shrinks keep the length and shrink one element.
    fn shrink(&self, proxy: &Self::Proxy) -> Vec<Self::Proxy> {
        let len = proxy.len();
        let mut candidates = Vec::new();

        let mut block = len;
        while block > 0 {
            let mut start = 0;
            while start + block <= len {
                let mut shorter = Vec::with_capacity(len - block);
                shorter.extend_from_slice(&proxy[..start]);
                shorter.extend_from_slice(&proxy[start + block..]);
                candidates.push(shorter);
                start += block;
            }
            block /= 2;
        }

        for (i, element) in proxy.iter().enumerate() {
            for smaller in self.element.shrink(element) {
                let mut candidate = proxy.clone();
                candidate[i] = smaller;
                candidates.push(candidate);
            }
        }

        candidates
    }

    fn interpret(&self, proxy: &Self::Proxy) -> Self::Value {
        proxy.iter().map(|p| self.element.interpret(p)).collect()
    }
}

/// `None` about a quarter of the time, otherwise `Some`
#[derive(Debug, Clone, Default)]
pub struct OptionSampler<S> {
    inner: S,
}

impl<S> OptionSampler<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Sampleable> Sampleable for OptionSampler<S> {
    type Value = Option<S::Value>;
    type Proxy = Option<S::Proxy>;

    fn sample(&self, gen: &mut Gen) -> Self::Proxy {
        if gen.choose_nat(0, 3) == 0 {
            None
        } else {
            Some(self.inner.sample(gen))
        }
    }

    fn shrink(&self, proxy: &Self::Proxy) -> Vec<Self::Proxy> {
        match proxy {
            None => Vec::new(),
            Some(inner) => std::iter::once(None)
                .chain(self.inner.shrink(inner).into_iter().map(Some))
                .collect(),
        }
    }

    fn interpret(&self, proxy: &Self::Proxy) -> Self::Value {
        proxy.as_ref().map(|p| self.inner.interpret(p))
    }
}

/// Pairs, shrinking the first component before the second
#[derive(Debug, Clone, Default)]
pub struct PairSampler<A, B> {
    first: A,
    second: B,
}

impl<A, B> PairSampler<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Sampleable, B: Sampleable> Sampleable for PairSampler<A, B> {
    type Value = (A::Value, B::Value);
    type Proxy = (A::Proxy, B::Proxy);

    fn sample(&self, gen: &mut Gen) -> Self::Proxy {
        let a = self.first.sample(gen);
        let b = self.second.sample(gen);
        (a, b)
    }

    fn shrink(&self, (a, b): &Self::Proxy) -> Vec<Self::Proxy> {
        let lefts = self
            .first
            .shrink(a)
            .into_iter()
            .map(|smaller| (smaller, b.clone()));
        let rights = self
            .second
            .shrink(b)
            .into_iter()
            .map(|smaller| (a.clone(), smaller));
        lefts.chain(rights).collect()
    }

    fn interpret(&self, (a, b): &Self::Proxy) -> Self::Value {
        (self.first.interpret(a), self.second.interpret(b))
    }
}

impl<T: Arbitrary> Arbitrary for Vec<T> {
    type Sampler = VecSampler<T::Sampler>;

    fn sampler() -> Self::Sampler {
        VecSampler::new(T::sampler())
    }
}

impl<T: Arbitrary> Arbitrary for Option<T> {
    type Sampler = OptionSampler<T::Sampler>;

    fn sampler() -> Self::Sampler {
        OptionSampler::new(T::sampler())
    }
}

impl<A: Arbitrary, B: Arbitrary> Arbitrary for (A, B) {
    type Sampler = PairSampler<A::Sampler, B::Sampler>;

    fn sampler() -> Self::Sampler {
        PairSampler::new(A::sampler(), B::sampler())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampleable::{BoolSampler, NatSampler};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_vec_shrink_removes_blocks_then_elements() {
        let sampler = VecSampler::new(NatSampler);
        let candidates = sampler.shrink(&vec![3, 1]);
        assert_eq!(
            candidates,
            vec![
                vec![],
                vec![1],
                vec![3],
                vec![0, 1],
                vec![2, 1],
                vec![3, 0],
            ]
        );
    }

    #[test]
    fn test_vec_empty_has_no_candidates() {
        let sampler = VecSampler::new(NatSampler);
        assert!(sampler.shrink(&vec![]).is_empty());
    }

    #[test]
    fn test_vec_length_bounded_by_size() {
        let sampler = <Vec<u64> as Arbitrary>::sampler();
        let mut gen = Gen::from_seed(9);
        gen.set_size(4);
        for _ in 0..100 {
            let xs = sampler.sample(&mut gen);
            assert!(xs.len() <= 4);
            assert!(xs.iter().all(|&x| x <= 4));
        }
    }

    #[test]
    fn test_vec_length_capped_for_huge_sizes() {
        let sampler = VecSampler::new(BoolSampler);
        let mut gen = Gen::from_seed(21);
        gen.set_size(usize::MAX);
        for _ in 0..20 {
            assert!(sampler.sample(&mut gen).len() <= MAX_GENERATED_LEN);
        }
    }

    #[test]
    fn test_option_shrinks_to_none_first() {
        let sampler = OptionSampler::new(NatSampler);
        assert_eq!(sampler.shrink(&Some(2)), vec![None, Some(0), Some(1)]);
        assert!(sampler.shrink(&None).is_empty());
    }

    #[test]
    fn test_pair_shrinks_left_then_right() {
        let sampler = PairSampler::new(NatSampler, BoolSampler);
        assert_eq!(
            sampler.shrink(&(2, true)),
            vec![(0, true), (1, true), (2, false)]
        );
        assert_eq!(sampler.interpret(&(2, true)), (2, true));
    }
}
