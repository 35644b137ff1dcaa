// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Entry Point
//!
//! This test suite uses proptest to verify laws that must hold for all
//! inputs: soundness of the result combinators and the monotonicity and
//! termination of shrinking and the size schedule.

mod property;
