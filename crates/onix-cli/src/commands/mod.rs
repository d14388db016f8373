//! CLI command implementations

pub mod convert;
pub mod inspect;
pub mod path;
pub mod simulate;
pub mod validate;
