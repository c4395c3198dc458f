#![deny(unsafe_code, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Type-checked chaining over possibly absent values, with a fallback at any step.

pub mod absent;
pub mod chain;
pub mod error;
pub mod held;

pub use absent::Absent;
pub use chain::{Chain, ChainExt, Chainer};
pub use error::AbsentError;
pub use held::{Held, IntoHeld};
