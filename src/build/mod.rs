//! Building sequences from scratch
//!
//! This module provides the source nodes: sequences with no upstream.

mod collection;
mod func;
mod generator;
mod lines;

// Re-export building blocks
pub use collection::{from_iter, from_slice, from_vec, FromIter, FromSlice, FromVec};
pub use func::{empty, from_fn, once, repeat, Empty, FromFn, Once, Repeat};
pub use generator::{gen, gen_step, gen_until, generate, Generator};
pub use lines::{lines, try_lines, Lines};
