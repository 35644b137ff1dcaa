// Copyright (c) 2025 - Cowboy AI, Inc.
//! Samplers for primitive types

use super::{Arbitrary, Sampleable, VecSampler};
use crate::gen::Gen;

/// Printable characters, ordered from most to least preferred when shrinking
const ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Shrink candidates for a natural number
///
/// Yields `n - n`, `n - n/2`, `n - n/4`, ..., `n - 1`: the most aggressive
/// candidate first and always `n - 1` last, so a greedy search reaches the
/// least failing value of a monotone predicate. Every candidate is `< n`.
pub fn shrink_nat(n: u64) -> Vec<u64> {
    let mut candidates = Vec::new();
    let mut delta = n;
    while delta > 0 {
        candidates.push(n - delta);
        delta /= 2;
    }
    candidates
}

/// Shrink candidates for an integer
///
/// Measure is `(|x|, x < 0)`: negative values first try their positive
/// mirror, then magnitudes shrink toward zero keeping the sign.
pub fn shrink_int(x: i64) -> Vec<i64> {
    let magnitude = x.unsigned_abs();
    let mut candidates = Vec::new();

    if x < 0 {
        if let Ok(mirror) = i64::try_from(magnitude) {
            candidates.push(mirror);
        }
    }

    // every m < magnitude <= 2^63 fits in an i64
    candidates.extend(shrink_nat(magnitude).into_iter().map(|m| {
        let m = m as i64;
        if x < 0 {
            -m
        } else {
            m
        }
    }));
    candidates
}

fn size_bound(gen: &Gen) -> u64 {
    u64::try_from(gen.size()).unwrap_or(u64::MAX)
}

/// Naturals in `0..=size`
#[derive(Debug, Clone, Copy, Default)]
pub struct NatSampler;

impl Sampleable for NatSampler {
    type Value = u64;
    type Proxy = u64;

    fn sample(&self, gen: &mut Gen) -> u64 {
        let hi = size_bound(gen);
        gen.choose_nat(0, hi)
    }

    fn shrink(&self, proxy: &u64) -> Vec<u64> {
        shrink_nat(*proxy)
    }

    fn interpret(&self, proxy: &u64) -> u64 {
        *proxy
    }
}

/// Integers in `-size..=size`
#[derive(Debug, Clone, Copy, Default)]
pub struct IntSampler;

impl Sampleable for IntSampler {
    type Value = i64;
    type Proxy = i64;

    fn sample(&self, gen: &mut Gen) -> i64 {
        let bound = i64::try_from(gen.size()).unwrap_or(i64::MAX);
        gen.choose_int(-bound, bound)
    }

    fn shrink(&self, proxy: &i64) -> Vec<i64> {
        shrink_int(*proxy)
    }

    fn interpret(&self, proxy: &i64) -> i64 {
        *proxy
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BoolSampler;

impl Sampleable for BoolSampler {
    type Value = bool;
    type Proxy = bool;

    fn sample(&self, gen: &mut Gen) -> bool {
        gen.choose_bool()
    }

    fn shrink(&self, proxy: &bool) -> Vec<bool> {
        if *proxy {
            vec![false]
        } else {
            Vec::new()
        }
    }

    fn interpret(&self, proxy: &bool) -> bool {
        *proxy
    }
}

/// Printable ASCII characters
///
/// The proxy is a position in a fixed alphabet that starts with lowercase
/// letters; the size bounds how far into the alphabet sampling may reach.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharSampler;

impl Sampleable for CharSampler {
    type Value = char;
    type Proxy = u64;

    fn sample(&self, gen: &mut Gen) -> u64 {
        let last = (ALPHABET.len() - 1) as u64;
        let hi = size_bound(gen).min(last);
        gen.choose_nat(0, hi)
    }

    fn shrink(&self, proxy: &u64) -> Vec<u64> {
        shrink_nat(*proxy)
    }

    fn interpret(&self, proxy: &u64) -> char {
        let index = usize::try_from(*proxy)
            .unwrap_or(usize::MAX)
            .min(ALPHABET.len() - 1);
        char::from(ALPHABET[index])
    }
}

/// Strings of printable ASCII, shrinking like a list of characters
#[derive(Debug, Clone, Default)]
pub struct StringSampler {
    chars: VecSampler<CharSampler>,
}

impl Sampleable for StringSampler {
    type Value = String;
    type Proxy = Vec<u64>;

    fn sample(&self, gen: &mut Gen) -> Vec<u64> {
        self.chars.sample(gen)
    }

    fn shrink(&self, proxy: &Vec<u64>) -> Vec<Vec<u64>> {
        self.chars.shrink(proxy)
    }

    fn interpret(&self, proxy: &Vec<u64>) -> String {
        self.chars.interpret(proxy).into_iter().collect()
    }
}

impl Arbitrary for u64 {
    type Sampler = NatSampler;

    fn sampler() -> NatSampler {
        NatSampler
    }
}

impl Arbitrary for i64 {
    type Sampler = IntSampler;

    fn sampler() -> IntSampler {
        IntSampler
    }
}

impl Arbitrary for bool {
    type Sampler = BoolSampler;

    fn sampler() -> BoolSampler {
        BoolSampler
    }
}

impl Arbitrary for char {
    type Sampler = CharSampler;

    fn sampler() -> CharSampler {
        CharSampler
    }
}

impl Arbitrary for String {
    type Sampler = StringSampler;

    fn sampler() -> StringSampler {
        StringSampler::default()
    }
}
