// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! This module contains property-based tests using proptest for the
//! combinator laws and the shrinking laws of the checker.

mod combinator_laws;
mod shrink_laws;
