//! # Keel Core
//!
//! Core types and conventions for the Keel quantitative analytics library.
//!
//! This crate provides the foundational building blocks used throughout Keel:
//!
//! - **Types**: [`CashFlow`], [`DatedCashFlow`] and the admissible [`RateBounds`]
//! - **Day Count**: The fixed 365.25-day year used to turn day offsets into years
//!
//! ## Design Philosophy
//!
//! - **Pure Data**: Every type is an immutable value; nothing is cached between calls
//! - **Explicit Over Implicit**: Conventions are named types, not magic numbers
//!
//! ## Example
//!
//! ```rust
//! use keel_core::prelude::*;
//!
//! let flows = [CashFlow::new(0.0, -1000.0), CashFlow::new(365.25, 1100.0)];
//! assert_eq!(Act36525.year_fraction(flows[1].offset_days()), 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::unreadable_literal)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act36525, DayCount};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlow, DatedCashFlow, RateBounds, MAX_RATE, MIN_RATE};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{CashFlow, DatedCashFlow, RateBounds};
