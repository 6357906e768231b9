//! # Segment Kinds
//!
//! Each kind owns its syntax: delimiter constants and the pattern that
//! recognises it. The classifier only decides the order they are tried in.
//!
//! ## Types
//!
//! - **`JumpSyntax`**: `_<field><N>:<payload>`
//! - **`HideSyntax`**: `-<field><N>` with an optional `/<i>,<j>` part list
//! - **`ImageSyntax`**: `img:<url>`, `@` marks a local reference
//! - **`LinkSyntax`**: `[<absolute url>](<label>)`
//! - **`SfxSyntax`**: `sfx:<id>`
//! - **`ListMarker`**: leading `"- "` on plain text

pub mod hide;
pub mod image;
pub mod jump;
pub mod link;
pub mod list_marker;
pub mod sfx;

pub use hide::HideSyntax;
pub use image::ImageSyntax;
pub use jump::JumpSyntax;
pub use link::LinkSyntax;
pub use list_marker::ListMarker;
pub use sfx::SfxSyntax;

/// Separates segments within a field block.
pub const SEPARATOR: char = ';';
