//! Onix Asset - Catalog of loadable model assets
//!
//! This crate scans an asset directory for model files and `.asset.toml`
//! sidecars, and answers whether a map's model references can be loaded.

mod catalog;
mod types;

pub use catalog::AssetCatalog;
pub use types::{AssetFile, AssetMeta, AssetType};
