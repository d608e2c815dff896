//! Umbrella crate for the `pipe-maze` workspace.
//!
//! Re-exports the foundational crates so downstream code can depend on a
//! single name. The pipeline over a parsed [`Grid`] is:
//! [`extract_loop`] (resolves the start tile and walks the cycle), then
//! [`classify_interior`] (tags enclosed tiles), then [`summarize`]
//! (read-only census).

pub use pm_core::*;
pub use pm_interior::*;
pub use pm_report::*;
pub use pm_trace::*;
