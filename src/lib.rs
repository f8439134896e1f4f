//! vecmix — map over an integer sequence, widen another into a tagged union,
//! and append a string through a mutable borrow.

pub mod cli;
pub mod core;
pub mod logging;
