//! # Lazy Seq: Composable Pull-Driven Sequences
//!
//! Build pipelines of lazily evaluated sequences and drain them with terminal
//! operations. Nothing is computed until a consumer pulls.
//!
//! ## Core Traits
//!
//! - **[`Sequence`]**: a node that can move to its next item and lend it out
//! - **[`Restart`]**: a node that can rebuild itself from its initial state
//!
//! ## Layers
//!
//! - **Sources** ([`build`]): slices, shared vectors, std iterators,
//!   generators, single values, files read line by line
//! - **Adapters** ([`compose`]): take, skip, filter, map, zip, chain, cycle,
//!   flat_map, scan and friends
//! - **Consumers** ([`consume`]): count, collect, fold, find, max, eq, ...
//!
//! ## Example
//!
//! ```
//! use lazy_seq::*;
//!
//! // Sum of the squares of the odd numbers below 10
//! let total = gen_until(0, 10)
//!     .filter(|n| n % 2 == 1)
//!     .map(|n| n * n)
//!     .sum();
//! assert_eq!(total, 1 + 9 + 25 + 49 + 81);
//! ```
//!
//! Items are lent out for a single pull. A returned reference has to be
//! dropped before the sequence is pulled again:
//!
//! ```compile_fail
//! use lazy_seq::*;
//!
//! let data = [1, 2];
//! let mut seq = from_slice(&data).map(|x| x + 1);
//! let first = seq.next();
//! let second = seq.next();
//! assert_ne!(first, second);
//! ```
//!
//! ## Logging
//!
//! Events are emitted through [`tracing`]; install a subscriber to see them.
//! The crate never installs one itself.

pub mod build;
pub mod compose;
pub mod consume;
mod error;
pub mod iter;
pub mod prelude;
mod sequence;

pub use build::*;
pub use error::SequenceError;
pub use sequence::*;
