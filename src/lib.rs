//! Split a component wiring diagram into two groups by cutting a few wires.
//!
//! [`Wiring`] parses `<label>: <label> <label> ...` lines into an undirected
//! graph. [`cuts::estimate`] samples random component pairs, counts which wires
//! keep showing up on the paths between them and removes the most frequent
//! ones, which for a graph with a small well-separated cut are the cut wires.
//!
//! ```
//! use wiring_cut::cuts::{estimate, CutConfig};
//! use wiring_cut::Wiring;
//!
//! let wiring: Wiring = "\
//! a0: a1 a2 a3
//! a1: a2 a3
//! a2: a3
//! b0: b1 b2 b3
//! b1: b2 b3
//! b2: b3
//! a0: b0
//! a1: b1
//! a2: b2"
//!     .parse()
//!     .unwrap();
//! let config = CutConfig {
//!     seed: Some(1),
//!     ..CutConfig::default()
//! };
//! let estimate = estimate(&wiring, &config).unwrap();
//! assert_eq!(3, estimate.cut.size);
//! assert_eq!(16, estimate.product());
//! ```

pub mod connectivity;
pub mod cuts;
pub mod error;
pub mod wiring;

pub use error::{Error, Result};
pub use wiring::{Node, Wiring};
