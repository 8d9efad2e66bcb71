// Content loading with graceful fallback
//
// A broken or missing content file is not fatal: the built-in table is used
// and a warning is logged, so the page always has something to show.

use log::{info, warn};
use std::fs;
use std::path::Path;

use crate::builtin::builtin_content;
use crate::error::ContentResult;
use crate::records::PortfolioContent;

/// Parse a JSON content payload.
pub fn parse_content(json: &str) -> ContentResult<PortfolioContent> {
    Ok(serde_json::from_str(json)?)
}

/// Load content from `path`, falling back to the built-in table when no path
/// is given or the file cannot be read or parsed.
pub fn load_content(path: Option<&Path>) -> PortfolioContent {
    let path = match path {
        Some(path) => path,
        None => {
            info!("No content file provided, using built-in content");
            return builtin_content();
        }
    };

    let result = fs::read_to_string(path)
        .map_err(Into::into)
        .and_then(|json| parse_content(&json));

    match result {
        Ok(content) => {
            info!("Loaded content from {}", path.display());
            content
        }
        Err(e) => {
            warn!("{}", e);
            warn!("Falling back to built-in content");
            builtin_content()
        }
    }
}
