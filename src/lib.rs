//! Creates labeled 1D and 2D histograms on a plotting backend, handing out
//! generated names and line colors along the way.

extern crate num_traits as num;
extern crate parking_lot;
#[macro_use]
extern crate log;

mod core;
pub use crate::core::*;
pub mod st;
pub mod concurrent;
pub mod registry;

pub use crate::concurrent::SharedFactory;
pub use crate::registry::Registry;
pub use crate::st::{builder, HistogramFactory, FIRST_HISTNUM};

#[cfg(test)]
pub mod tests;
