//! # Keel Math
//!
//! Numerical utilities for the Keel quantitative analytics library.
//!
//! This crate provides:
//!
//! - **Solvers**: Root-finding algorithms (bounded Newton-Raphson, Bisection,
//!   and a Newton-then-bisection hybrid)
//!
//! ## Design Philosophy
//!
//! - **Bounded Work**: Every iteration is capped; no solver can loop forever
//! - **Numerical Stability**: Flat slopes and runaway steps are detected, not divided through
//! - **Reentrant**: Solvers are free functions over closures with no hidden state

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::unreadable_literal)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        bisection, hybrid, newton_raphson, SolverConfig, SolverMethod, SolverResult,
    };
}

pub use error::{MathError, MathResult};
