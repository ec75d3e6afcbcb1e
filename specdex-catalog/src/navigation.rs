//! Sidebar navigation built from the catalog.
//!
//! Category scans are independent filesystem reads, so each runs on the
//! blocking pool and the results are joined before sorting.

use crate::catalog::SpecCatalog;
use crate::error::CatalogError;
use crate::title::capitalize_category;
use specdex_core::{NavItem, NavSection, SpecDocument};
use tokio::task::JoinSet;
use tracing::debug;

/// URL prefix for specification detail pages.
pub const HREF_PREFIX: &str = "/specifications";

/// Link to a document: `/specifications/<category>[/<subcategory>]/<slug>`.
#[must_use]
pub fn spec_href(spec: &SpecDocument) -> String {
    match &spec.subcategory {
        Some(sub) => format!("{HREF_PREFIX}/{}/{sub}/{}", spec.category, spec.slug),
        None => format!("{HREF_PREFIX}/{}/{}", spec.category, spec.slug),
    }
}

fn nav_item(spec: &SpecDocument) -> NavItem {
    NavItem {
        title: spec.title.clone(),
        href: spec_href(spec),
        status: spec.status,
    }
}

fn section_for(category: &str, specs: &[SpecDocument]) -> NavSection {
    NavSection {
        title: capitalize_category(category),
        category: category.to_string(),
        items: specs.iter().map(nav_item).collect(),
    }
}

/// Navigation for a single category. `None` when it holds no documents.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the category cannot be scanned.
pub fn category_navigation(
    catalog: &SpecCatalog,
    category: &str,
) -> Result<Option<NavSection>, CatalogError> {
    let specs = catalog.specifications(category)?;
    if specs.is_empty() {
        return Ok(None);
    }
    Ok(Some(section_for(category, &specs)))
}

/// One section per category, sorted by section title.
///
/// Categories are scanned concurrently. Empty categories still get a
/// section with no items.
///
/// # Errors
///
/// Returns the first scan failure. Scans still queued are cancelled.
pub async fn build_navigation(catalog: &SpecCatalog) -> Result<Vec<NavSection>, CatalogError> {
    let categories = catalog.categories()?;
    let mut scans = JoinSet::new();

    for category in categories {
        let catalog = catalog.clone();
        scans.spawn_blocking(move || {
            let specs = catalog.specifications(&category)?;
            Ok::<_, CatalogError>(section_for(&category, &specs))
        });
    }

    let mut sections = Vec::with_capacity(scans.len());
    while let Some(joined) = scans.join_next().await {
        sections.push(joined??);
    }

    sections.sort_by(|a, b| a.title.cmp(&b.title));
    debug!(sections = sections.len(), "built navigation");
    Ok(sections)
}

/// Total number of documents across all categories.
///
/// # Errors
///
/// Returns the first scan failure.
pub async fn total_spec_count(catalog: &SpecCatalog) -> Result<usize, CatalogError> {
    let mut counts = JoinSet::new();
    for category in catalog.categories()? {
        let catalog = catalog.clone();
        counts.spawn_blocking(move || catalog.spec_count(&category));
    }

    let mut total = 0;
    while let Some(joined) = counts.join_next().await {
        total += joined??;
    }
    Ok(total)
}
