//! `specdex` Core: shared data model and error types
//!
//! This crate provides the specification document model and the
//! configuration error types shared across `specdex` (CLI) and
//! `specdex-catalog` (catalog builder).

pub mod error;
pub mod model;

pub use model::{
    DocumentType, NavItem, NavSection, SUPPORTED_EXTENSIONS, SpecContent, SpecDocument,
    SpecMetadata, SpecRoute, SpecStatus,
};
