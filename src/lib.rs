//! memview
//!
//! Terminal table for a member list: search, paginate, select, edit and
//! delete rows fetched once from a JSON source.
//!
//! The pure core lives in [`state`] (no I/O, fully unit-testable); the
//! impure shell is [`source`] (fetching) and [`view`] (terminal).

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
