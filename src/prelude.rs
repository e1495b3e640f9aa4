//! Commonly used imports
//!
//! Use `use lazy_seq::prelude::*;` for quick access to the traits and the
//! source constructors. Adapters and consumers are methods on [`Sequence`].

// Core traits
pub use crate::{Restart, Sequence, SequenceError};

// Sources
pub use crate::build::{
    empty, from_fn, from_iter, from_slice, from_vec, gen, gen_step, gen_until, generate, lines,
    once, repeat, try_lines,
};
