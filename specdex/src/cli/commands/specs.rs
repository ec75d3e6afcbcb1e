//! Specification catalog command handlers
//!
//! Implements `specs categories`, `specs list`, `specs show`, `specs nav`
//! and `specs routes`.

use serde::Serialize;
use specdex_catalog::navigation::HREF_PREFIX;
use specdex_catalog::{
    SpecCatalog, build_navigation, category_navigation, parse_route_slug, static_routes,
};
use specdex_core::{NavSection, SpecDocument};

use super::print_json;
use crate::cli::args::{FormatArgs, OutputFormat, SpecsListArgs, SpecsNavArgs, SpecsShowArgs};
use crate::config::SiteConfig;
use crate::error::SpecdexError;

/// Largest edit distance at which an unknown category gets a suggestion.
const SUGGESTION_DISTANCE: usize = 3;

#[derive(Serialize)]
struct CategorySummary<'a> {
    category: &'a str,
    title: &'a str,
    count: usize,
}

/// List categories with document counts.
///
/// # Errors
///
/// Returns a catalog error if the content root cannot be scanned.
pub async fn categories(config: &SiteConfig, args: &FormatArgs) -> Result<(), SpecdexError> {
    let catalog = config.catalog();
    let mut sections = build_navigation(&catalog).await?;
    sections.sort_by(|a, b| a.category.cmp(&b.category));
    tracing::info!(categories = sections.len(), "listed categories");

    let summaries: Vec<_> = sections
        .iter()
        .map(|s| CategorySummary {
            category: &s.category,
            title: &s.title,
            count: s.items.len(),
        })
        .collect();

    match args.format {
        OutputFormat::Json => print_json(&summaries)?,
        OutputFormat::Human => {
            let width = summaries.iter().map(|s| s.category.len()).max().unwrap_or(0);
            for s in &summaries {
                println!("{:<width$}  {}", s.category, plural(s.count, "specification"));
            }
            let total: usize = summaries.iter().map(|s| s.count).sum();
            println!(
                "\n{} across {}",
                plural(total, "specification"),
                plural(summaries.len(), "category")
            );
        }
    }
    Ok(())
}

/// List documents in one category.
///
/// # Errors
///
/// Returns `SpecdexError::NotFound` for an unknown category, or a catalog
/// error if scanning fails.
pub fn list(config: &SiteConfig, args: &SpecsListArgs) -> Result<(), SpecdexError> {
    let catalog = config.catalog();
    ensure_category(&catalog, &args.category)?;

    let specs: Vec<SpecDocument> = catalog
        .specifications(&args.category)?
        .into_iter()
        .filter(|s| args.status.is_none_or(|status| s.status == status))
        .filter(|s| args.document_type.is_none_or(|t| s.document_type == t))
        .collect();

    match args.format {
        OutputFormat::Json => print_json(&specs)?,
        OutputFormat::Human => print_spec_table(&specs),
    }
    Ok(())
}

fn print_spec_table(specs: &[SpecDocument]) {
    if specs.is_empty() {
        println!("(no specifications)");
        return;
    }

    let paths: Vec<String> = specs
        .iter()
        .map(|s| match &s.subcategory {
            Some(sub) => format!("{sub}/{}", s.slug),
            None => s.slug.clone(),
        })
        .collect();
    let title_w = specs.iter().map(|s| s.title.len()).max().unwrap_or(0);
    let version_w = specs.iter().map(|s| s.version.len()).max().unwrap_or(0);
    let path_w = paths.iter().map(String::len).max().unwrap_or(0);

    for (spec, path) in specs.iter().zip(&paths) {
        println!(
            "{:<title_w$}  {:<8}  {:<version_w$}  {:<path_w$}  {}",
            spec.title,
            spec.status.label(),
            spec.version,
            path,
            spec.document_type,
        );
    }
}

/// Show one document.
///
/// # Errors
///
/// Returns `SpecdexError::Usage` for a malformed slug,
/// `SpecdexError::NotFound` when nothing matches, or a catalog error.
pub fn show(config: &SiteConfig, args: &SpecsShowArgs) -> Result<(), SpecdexError> {
    let catalog = config.catalog();
    ensure_category(&catalog, &args.category)?;

    let parts: Vec<String> = args.slug.split('/').map(str::to_string).collect();
    let (route_sub, slug) = parse_route_slug(&parts).ok_or_else(|| {
        SpecdexError::Usage(format!(
            "invalid slug '{}': expected <slug> or <subcategory>/<slug>",
            args.slug
        ))
    })?;
    let subcategory = match (route_sub, args.subcategory.as_deref()) {
        (Some(_), Some(_)) => {
            return Err(SpecdexError::Usage(
                "give the subcategory either in the slug or with --subcategory, not both"
                    .to_string(),
            ));
        }
        (from_slug, from_flag) => from_slug.or(from_flag),
    };

    let Some(found) = catalog.specification(&args.category, slug, subcategory)? else {
        let location = subcategory.map_or_else(
            || args.category.clone(),
            |sub| format!("{}/{sub}", args.category),
        );
        return Err(SpecdexError::NotFound(format!(
            "specification '{slug}' not found in '{location}'"
        )));
    };

    if args.raw {
        print!("{}", found.content);
        return Ok(());
    }

    match args.format {
        OutputFormat::Json => print_json(&found)?,
        OutputFormat::Human => {
            let meta = &found.metadata;
            println!("Title:    {}", meta.title);
            println!("Status:   {}", meta.status);
            println!("Version:  {}", meta.version);
            if !meta.last_updated.is_empty() {
                println!("Updated:  {}", meta.last_updated);
            }
            if let Some(id) = &meta.spec_id {
                println!("ID:       {id}");
            }
            println!("Type:     {}", found.document_type);
            println!();
            print!("{}", found.content);
            if !found.content.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}

/// Print the navigation tree.
///
/// # Errors
///
/// Returns `SpecdexError::NotFound` for an unknown category, or a catalog
/// error if scanning fails.
pub async fn nav(config: &SiteConfig, args: &SpecsNavArgs) -> Result<(), SpecdexError> {
    let catalog = config.catalog();

    let sections: Vec<NavSection> = match &args.category {
        Some(category) => {
            ensure_category(&catalog, category)?;
            category_navigation(&catalog, category)?
                .into_iter()
                .collect()
        }
        None => build_navigation(&catalog).await?,
    };

    match args.format {
        OutputFormat::Json => print_json(&sections)?,
        OutputFormat::Human => {
            if sections.is_empty() {
                println!("(no specifications)");
            }
            for (i, section) in sections.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{}", section.title);
                let title_w = section.items.iter().map(|it| it.title.len()).max().unwrap_or(0);
                for item in &section.items {
                    println!(
                        "  {:<10} {:<title_w$}  {}",
                        format!("[{}]", item.status),
                        item.title,
                        config.link(&item.href),
                    );
                }
            }
        }
    }
    Ok(())
}

/// Print static route parameters.
///
/// # Errors
///
/// Returns a catalog error if scanning fails.
pub fn routes(config: &SiteConfig, args: &FormatArgs) -> Result<(), SpecdexError> {
    let routes = static_routes(&config.catalog())?;
    tracing::info!(routes = routes.len(), "collected static routes");

    match args.format {
        OutputFormat::Json => print_json(&routes)?,
        OutputFormat::Human => {
            for route in &routes {
                let href = format!("{HREF_PREFIX}/{}/{}", route.category, route.slug.join("/"));
                println!("{}", config.link(&href));
            }
        }
    }
    Ok(())
}

/// Fail with a suggestion when `category` is not a listed category.
fn ensure_category(catalog: &SpecCatalog, category: &str) -> Result<(), SpecdexError> {
    let known = catalog.categories()?;
    if known.iter().any(|c| c == category) {
        return Ok(());
    }

    let hint = suggest(category, &known)
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default();
    Err(SpecdexError::NotFound(format!(
        "category '{category}' not found{hint}"
    )))
}

/// Closest known name within [`SUGGESTION_DISTANCE`] edits.
fn suggest<'a>(input: &str, known: &'a [String]) -> Option<&'a str> {
    known
        .iter()
        .map(|name| (name.as_str(), strsim::damerau_levenshtein(input, name)))
        .filter(|(_, dist)| *dist <= SUGGESTION_DISTANCE)
        .min_by_key(|(_, dist)| *dist)
        .map(|(name, _)| name)
}

fn plural(count: usize, noun: &str) -> String {
    match (count, noun.strip_suffix('y')) {
        (1, _) => format!("1 {noun}"),
        (_, Some(stem)) => format!("{count} {stem}ies"),
        (_, None) => format!("{count} {noun}s"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_suggest_close_match() {
        let known = names(&["identity", "infrastructure", "token"]);
        assert_eq!(suggest("identiy", &known), Some("identity"));
        assert_eq!(suggest("tokne", &known), Some("token"));
        assert_eq!(suggest("governance", &known), None);
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "specification"), "1 specification");
        assert_eq!(plural(0, "specification"), "0 specifications");
        assert_eq!(plural(3, "category"), "3 categories");
        assert_eq!(plural(1, "category"), "1 category");
    }
}
