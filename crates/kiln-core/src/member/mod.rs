//! Cluster member address notation.
//!
//! Well-known cluster members can be configured either as plain
//! `host:port` addresses or in a compact grouped form that lists
//! several ports against one host:
//!
//! ```text
//! 10.0.0.1:5701                   one member
//! 10.0.0.1:0[5701;5703-5705]      four members on one host
//! ```
//!
//! Inside the brackets, groups are separated by `;` and each group is
//! a single port or an inclusive ascending `low-high` range. The
//! expansion flattens every specification into concrete `host:port`
//! addresses, preserving order.

mod expand;

pub use expand::expand_members;
