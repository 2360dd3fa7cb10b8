//! REST resource layer for the Lago API.
//!
//! This module contains the generic resource-dispatch machinery:
//!
//! - [`ApiResource`]: the verb-to-HTTP mapping every resource shares
//! - [`ResourcePath`] / [`get_path`] / [`build_path`]: declarative endpoint
//!   tables with parent-scoped paths and identifier escaping
//! - [`Page`] / [`PaginationMeta`] / [`PageParams`]: the uniform list
//!   envelope
//! - [`ResourceError`]: resource-level error semantics
//!
//! Concrete resources live in [`resources`].

mod errors;
mod pagination;
mod path;
mod resource;
pub mod resources;

pub use errors::ResourceError;
pub use pagination::{Page, PageParams, PaginationMeta};
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::ApiResource;

pub(crate) use resource::{unwrap_entity, unwrap_optional_entity};
