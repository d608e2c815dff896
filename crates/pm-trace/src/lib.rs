//! Loop topology extraction for pipe mazes.
//!
//! Two stages run against a freshly parsed grid:
//! - Start resolution reads the four neighbors of the start tile, encodes
//!   which of them open back toward it as a 4-bit signature, and assigns
//!   the unique two-opening shape as the start's alias.
//! - The crawler then follows the pipe from the start's first table-order
//!   exit. Every shape has exactly two openings, one of which is always
//!   the arrival side, so each step has a single continuation and the walk
//!   terminates exactly on the start revisit.
//!
//! Both stages fail fast on malformed maps; see [`pm_core::Error`] for the
//! failure kinds.

mod crawl;
mod resolve;

pub use crawl::{PipeLoop, extract_loop};
pub use resolve::{neighbor_signature, resolve_start};
