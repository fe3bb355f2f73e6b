//! Fluent request chain building
//!
//! Split by concern: [`core`] holds the immutable `Wrapper` chain node and
//! wrapper-level options, [`options`] the per-call options and flexible verb
//! arguments, [`methods`] the terminal verbs that merge, dispatch and wrap.

pub mod core;
pub mod methods;
pub mod options;

pub use self::core::{Segment, Wrapper, WrapperOptions};
pub use methods::Outcome;
pub use options::{CallArgs, RequestOptions};
