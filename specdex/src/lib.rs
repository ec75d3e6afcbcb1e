//! `specdex` - browse a protocol's specification and blog content
//!
//! Command-line front end over the `specdex-catalog` builder: category
//! listings, single-document resolution, navigation trees, static route
//! parameters and blog posts.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
