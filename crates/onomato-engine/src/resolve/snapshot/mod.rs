//! # Snapshot Testing Support
//!
//! - **`normalize`**: renders resolved fields as stable text for `insta`
//!   snapshots
//! - **`invariants`**: ordering and collision checks every resolution must
//!   pass

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
