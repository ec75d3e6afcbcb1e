//! `specdex version`

use serde::Serialize;
use specdex_core::SUPPORTED_EXTENSIONS;

use super::print_json;
use crate::cli::args::{OutputFormat, VersionArgs};
use crate::error::SpecdexError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    supported_extensions: &'static [&'static str],
}

const INFO: VersionInfo = VersionInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
    supported_extensions: &SUPPORTED_EXTENSIONS,
};

/// Print the version and the specification file types this build reads.
///
/// # Errors
///
/// Returns `SpecdexError::Json` if serialization fails.
pub fn run(args: &VersionArgs) -> Result<(), SpecdexError> {
    match args.format {
        OutputFormat::Json => print_json(&INFO)?,
        OutputFormat::Human => {
            println!("{} {}", INFO.name, INFO.version);
            println!("reads: {}", INFO.supported_extensions.join(", "));
        }
    }
    Ok(())
}
