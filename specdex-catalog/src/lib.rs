//! Specification catalog builder for `specdex`.
//!
//! Walks a content directory of markdown and JSON specifications, derives
//! display metadata from filename conventions and in-document markers,
//! and exposes category listings, single-document resolution, navigation
//! trees and static route parameters. A flat blog directory reader with
//! YAML frontmatter lives alongside it.

pub mod blog;
pub mod catalog;
pub mod error;
pub mod metadata;
pub mod navigation;
pub mod routes;
pub mod title;

pub use blog::{BlogFrontmatter, BlogPost, BlogPostMeta, BlogReader, PublishFilter, format_date};
pub use catalog::{DEFAULT_EXCLUDED_CATEGORIES, SpecCatalog};
pub use error::CatalogError;
pub use metadata::{Extraction, default_metadata, extract_metadata};
pub use navigation::{build_navigation, category_navigation, spec_href, total_spec_count};
pub use routes::{category_routes, parse_route_slug, static_routes};
pub use title::{capitalize_category, humanize_filename};
