//! Blog command handlers
//!
//! Implements `blog list`, `blog show` and `blog slugs`.

use specdex_catalog::format_date;

use super::print_json;
use crate::cli::args::{BlogShowArgs, FormatArgs, OutputFormat};
use crate::config::SiteConfig;
use crate::error::SpecdexError;

/// List visible posts, newest first.
///
/// # Errors
///
/// Returns a catalog error if a post cannot be read or has invalid
/// frontmatter.
pub fn list(config: &SiteConfig, args: &FormatArgs) -> Result<(), SpecdexError> {
    let posts = config.blog().all_posts()?;
    tracing::info!(posts = posts.len(), filter = ?config.publish_filter, "listed posts");

    match args.format {
        OutputFormat::Json => print_json(&posts)?,
        OutputFormat::Human => {
            if posts.is_empty() {
                println!("(no posts)");
            }
            let dates: Vec<String> = posts
                .iter()
                .map(|p| format_date(&p.frontmatter.date))
                .collect();
            let date_w = dates.iter().map(String::len).max().unwrap_or(0);
            let slug_w = posts.iter().map(|p| p.slug.len()).max().unwrap_or(0);
            for (post, date) in posts.iter().zip(&dates) {
                let marker = if post.frontmatter.published { "" } else { "  (unpublished)" };
                println!(
                    "{date:<date_w$}  {:<slug_w$}  {}{marker}",
                    post.slug, post.frontmatter.title
                );
            }
        }
    }
    Ok(())
}

/// Show one post.
///
/// # Errors
///
/// Returns `SpecdexError::NotFound` when the post does not exist or is
/// unpublished under the production gate.
pub fn show(config: &SiteConfig, args: &BlogShowArgs) -> Result<(), SpecdexError> {
    let Some(post) = config.blog().post_by_slug(&args.slug)? else {
        return Err(SpecdexError::NotFound(format!(
            "post '{}' not found",
            args.slug
        )));
    };

    match args.format {
        OutputFormat::Json => print_json(&post)?,
        OutputFormat::Human => {
            let fm = &post.frontmatter;
            println!("{}", fm.title);
            println!("{} · {}", fm.author, format_date(&fm.date));
            if !fm.tags.is_empty() {
                println!("Tags: {}", fm.tags.join(", "));
            }
            if !fm.excerpt.is_empty() {
                println!("\n{}", fm.excerpt);
            }
            println!();
            print!("{}", post.content.trim_start_matches(['\r', '\n']));
            if !post.content.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}

/// List every post slug, published or not.
///
/// # Errors
///
/// Returns a catalog error if the blog directory cannot be read.
pub fn slugs(config: &SiteConfig, args: &FormatArgs) -> Result<(), SpecdexError> {
    let slugs = config.blog().all_slugs()?;
    match args.format {
        OutputFormat::Json => print_json(&slugs)?,
        OutputFormat::Human => {
            for slug in &slugs {
                println!("{slug}");
            }
        }
    }
    Ok(())
}
