// Copyright (c) 2025 - Cowboy AI, Inc.
//! Propositions
//!
//! A `Prop` is the declarative statement under test. Its shape is a closed set
//! of variants, each of which has exactly one testing strategy in
//! [`crate::testable::run_prop`]:
//!
//! ```text
//! Prop
//!   ├── Decide       decidable atom with a printable form
//!   ├── Not          negation
//!   ├── And / Or     connectives
//!   ├── Iff          equivalence
//!   ├── ForAll       ∀ x : α, β x          (α has a sampler)
//!   ├── Guarded      P → β                 (P decidable)
//!   ├── Unused       ∀ _ : α, β            (β ignores the bound value)
//!   ├── Subtype      ∀ x, P x → β x        (sampler enforces P)
//!   └── ForAllTypes  ∀ X : Type, f X
//! ```
//!
//! Binder names are supplied when the proposition is built, so failure
//! reports can say `x := 5` without any syntactic preprocessing.
//!
//! # Example
//!
//! ```rust,ignore
//! use cim_propcheck::prop::Prop;
//!
//! // ∀ x : ℕ, x > 10 → x > 5
//! let prop = Prop::for_all::<u64>("x", |&x| {
//!     Prop::implies(format!("{x} > 10"), x > 10, move || {
//!         Prop::decide(format!("{x} > 5"), x > 5)
//!     })
//! });
//! ```

use std::fmt;
use std::fmt::Debug;
use std::rc::Rc;

use crate::sampleable::{Arbitrary, Sampleable};
use crate::testable::quantifier::{ForAllBinder, Quantifier, SubtypeBinder};

/// Representative types a type quantifier is instantiated with, in order
pub const TYPE_REPRESENTATIVES: [&str; 2] = ["i64", "String"];

/// Decidable proposition with a printable form
#[derive(Clone)]
pub struct Atom {
    text: String,
    decide: Rc<dyn Fn() -> bool>,
}

impl Atom {
    /// Atom whose truth value is already known
    pub fn new(text: impl Into<String>, holds: bool) -> Self {
        Self {
            text: text.into(),
            decide: Rc::new(move || holds),
        }
    }

    /// Atom whose decision procedure runs each time it is tested
    pub fn lazy<F>(text: impl Into<String>, decide: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Self {
            text: text.into(),
            decide: Rc::new(decide),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Run the decision procedure
    pub fn holds(&self) -> bool {
        (self.decide)()
    }
}

/// `guard → body`, where the body is only built once the guard holds
#[derive(Clone)]
pub struct Guarded {
    pub(crate) guard: Atom,
    pub(crate) body: Rc<dyn Fn() -> Prop>,
}

/// `∀ _ : α, body` where the body does not mention the bound value
#[derive(Clone)]
pub struct Unused {
    pub(crate) var: String,
    pub(crate) witness: String,
    pub(crate) body: Box<Prop>,
}

/// `∀ X : Type, f X`, tested at the representative types
#[derive(Clone)]
pub struct TypeQuantifier {
    pub(crate) var: String,
    pub(crate) instances: Vec<(&'static str, Rc<dyn Fn() -> Prop>)>,
}

/// Proposition family indexed by a type
///
/// Implemented by propositions that are generic in a type, such as
/// "reversing a list twice is the identity" for lists of any element type.
///
/// ```rust,ignore
/// struct ReverseTwice;
///
/// impl Polymorphic for ReverseTwice {
///     fn instantiate<T: Arbitrary>(&self) -> Prop {
///         Prop::for_all::<Vec<T>>("xs", |xs| {
///             let mut twice = xs.clone();
///             twice.reverse();
///             twice.reverse();
///             Prop::decide("reverse (reverse xs) = xs", &twice == xs)
///         })
///     }
/// }
/// ```
pub trait Polymorphic {
    fn instantiate<T: Arbitrary>(&self) -> Prop;
}

/// Statement under test
#[derive(Clone)]
pub enum Prop {
    Decide(Atom),
    Not(Box<Prop>),
    And(Box<Prop>, Box<Prop>),
    Or(Box<Prop>, Box<Prop>),
    Iff(Box<Prop>, Box<Prop>),
    ForAll(Rc<dyn Quantifier>),
    Guarded(Guarded),
    Unused(Unused),
    Subtype(Rc<dyn Quantifier>),
    ForAllTypes(TypeQuantifier),
}

impl Prop {
    /// Decidable atom with a known truth value
    pub fn decide(text: impl Into<String>, holds: bool) -> Self {
        Prop::Decide(Atom::new(text, holds))
    }

    /// Decidable atom evaluated when tested
    pub fn check<F>(text: impl Into<String>, decide: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Prop::Decide(Atom::lazy(text, decide))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(p: Prop) -> Self {
        Prop::Not(Box::new(p))
    }

    pub fn and(p: Prop, q: Prop) -> Self {
        Prop::And(Box::new(p), Box::new(q))
    }

    pub fn or(p: Prop, q: Prop) -> Self {
        Prop::Or(Box::new(p), Box::new(q))
    }

    pub fn iff(p: Prop, q: Prop) -> Self {
        Prop::Iff(Box::new(p), Box::new(q))
    }

    /// `∀ var : T, body var` using the default sampler of `T`
    pub fn for_all<T>(var: impl Into<String>, body: impl Fn(&T) -> Prop + 'static) -> Self
    where
        T: Arbitrary,
    {
        Self::for_all_in(var, T::sampler(), body)
    }

    /// `∀ var, body var` drawing values from `sampler`
    pub fn for_all_in<S, F>(var: impl Into<String>, sampler: S, body: F) -> Self
    where
        S: Sampleable + 'static,
        S::Value: Debug,
        F: Fn(&S::Value) -> Prop + 'static,
    {
        Prop::ForAll(Rc::new(ForAllBinder::new(var.into(), sampler, body)))
    }

    /// `guard → body`
    ///
    /// Samples for which the guard fails are discarded rather than counted as
    /// vacuously true.
    pub fn implies<F>(guard: impl Into<String>, holds: bool, body: F) -> Self
    where
        F: Fn() -> Prop + 'static,
    {
        Prop::Guarded(Guarded {
            guard: Atom::new(guard, holds),
            body: Rc::new(body),
        })
    }

    /// `∀ _ : T, body` where the body does not depend on the bound value
    ///
    /// Tested without sampling; `T::default()` serves as the witness that
    /// `T` is inhabited.
    pub fn for_all_unused<T>(var: impl Into<String>, body: Prop) -> Self
    where
        T: Default + Debug,
    {
        Prop::Unused(Unused {
            var: var.into(),
            witness: format!("{:?}", T::default()),
            body: Box::new(body),
        })
    }

    /// `∀ var, P var → body var` with a sampler that only produces values
    /// satisfying `P`
    ///
    /// `guard` prints `P` for a given value; it is used for labels only.
    pub fn for_all_such_that<S, G, F>(var: impl Into<String>, sampler: S, guard: G, body: F) -> Self
    where
        S: Sampleable + 'static,
        S::Value: Debug,
        G: Fn(&S::Value) -> String + 'static,
        F: Fn(&S::Value) -> Prop + 'static,
    {
        Prop::Subtype(Rc::new(SubtypeBinder::new(var.into(), sampler, guard, body)))
    }

    /// `∀ var : Type, family var`
    pub fn for_all_types<P>(var: impl Into<String>, family: P) -> Self
    where
        P: Polymorphic + 'static,
    {
        let family = Rc::new(family);
        let ints = Rc::clone(&family);
        let strings = family;

        Prop::ForAllTypes(TypeQuantifier {
            var: var.into(),
            instances: vec![
                (
                    TYPE_REPRESENTATIVES[0],
                    Rc::new(move || ints.instantiate::<i64>()) as Rc<dyn Fn() -> Prop>,
                ),
                (
                    TYPE_REPRESENTATIVES[1],
                    Rc::new(move || strings.instantiate::<String>()) as Rc<dyn Fn() -> Prop>,
                ),
            ],
        })
    }
}

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prop::Decide(atom) => write!(f, "{}", atom.text()),
            Prop::Not(p) => write!(f, "¬({p})"),
            Prop::And(p, q) => write!(f, "({p} ∧ {q})"),
            Prop::Or(p, q) => write!(f, "({p} ∨ {q})"),
            Prop::Iff(p, q) => write!(f, "({p} ↔ {q})"),
            Prop::ForAll(q) | Prop::Subtype(q) => write!(f, "∀ {}, …", q.var()),
            Prop::Guarded(g) => write!(f, "{} → …", g.guard.text()),
            Prop::Unused(u) => write!(f, "∀ {}, {}", u.var, u.body),
            Prop::ForAllTypes(t) => write!(f, "∀ {} : Type, …", t.var),
        }
    }
}

impl Debug for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prop({self})")
    }
}
