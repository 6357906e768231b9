//! # Boundary
//!
//! Capabilities the resolver hands to (or expects from) the presentation
//! layer. The resolver itself never performs I/O.
//!
//! - **`lookup`**: `EntryLookup` and the lazy `CrossRefLink` attached to `sfx:`
//!   fragments
//! - **`images`**: `ImageStore` for `img:` fragments, with a directory-backed
//!   `FsImageStore`

pub mod images;
pub mod lookup;

pub use images::{AssetError, FsImageStore, ImageStore};
pub use lookup::{CrossRefLink, EntryLookup, NoLookup, SfxLabel};
