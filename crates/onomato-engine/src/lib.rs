pub mod boundary;
pub mod catalog;
pub mod fields;
pub mod resolve;

// Re-export key types for easier usage
pub use boundary::{
    AssetError, CrossRefLink, EntryLookup, FsImageStore, ImageStore, NoLookup, SfxLabel,
};
pub use catalog::{Catalog, CatalogEntry, CatalogError};
pub use fields::{FieldBlock, FieldInput, FieldMap, UnknownFieldError};
pub use resolve::{Entry, Fragment, Hidden, Position, ResolvedFields, Resolver, resolve};
