//! Combining sequences together
//!
//! This module provides the adapters: nodes that own one or two upstream
//! sequences and transform what flows out of them. Each adapter is a struct
//! plus a constructor function; the same operations are available as
//! methods on [`Sequence`](crate::Sequence).

mod chain;
mod cycle;
mod filter;
mod flat_map;
mod map;
mod scan;
mod skip;
mod take;
mod zip;

// Re-export composition operations
pub use chain::{chain, Chain};
pub use cycle::{cycle, fuse, Cycle, Fuse};
pub use filter::{filter, filter_map, Filter, FilterMap};
pub use flat_map::{flat_map, FlatMap};
pub use map::{inspect, map, Inspect, Map};
pub use scan::{scan, Scan};
pub use skip::{skip, skip_while, Skip, SkipWhile};
pub use take::{take, take_while, Take, TakeWhile};
pub use zip::{zip, Zip};
