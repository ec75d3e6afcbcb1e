//! Static route parameters for specification detail pages.
//!
//! A detail route is `/specifications/<category>/<slug..>` where the
//! catch-all `slug` is either `[slug]` or `[subcategory, slug]`.

use crate::catalog::SpecCatalog;
use crate::error::CatalogError;
use specdex_core::{SpecDocument, SpecRoute};

/// Route parameters for one document.
#[must_use]
pub fn route_for(spec: &SpecDocument) -> SpecRoute {
    let slug = match &spec.subcategory {
        Some(sub) => vec![sub.clone(), spec.slug.clone()],
        None => vec![spec.slug.clone()],
    };
    SpecRoute {
        category: spec.category.clone(),
        slug,
    }
}

/// Every detail route in the catalog, grouped by category in category
/// order, then in collector order within a category.
///
/// # Errors
///
/// Returns the first `CatalogError` hit while listing or scanning.
pub fn static_routes(catalog: &SpecCatalog) -> Result<Vec<SpecRoute>, CatalogError> {
    let mut routes = Vec::new();
    for category in catalog.categories()? {
        routes.extend(catalog.specifications(&category)?.iter().map(route_for));
    }
    Ok(routes)
}

/// Category index routes: one entry per listed category.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the root cannot be listed.
pub fn category_routes(catalog: &SpecCatalog) -> Result<Vec<String>, CatalogError> {
    catalog.categories()
}

/// Split a catch-all slug into `(subcategory, slug)`.
///
/// Returns `None` for an empty slug or one with more than two segments,
/// neither of which [`static_routes`] ever produces.
#[must_use]
pub fn parse_route_slug(parts: &[String]) -> Option<(Option<&str>, &str)> {
    match parts {
        [slug] => Some((None, slug.as_str())),
        [sub, slug] => Some((Some(sub.as_str()), slug.as_str())),
        _ => None,
    }
}
