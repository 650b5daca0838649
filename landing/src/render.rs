//! Static rendering of the page to HTML strings and files.
//!
//! Uses Leptos 0.8's `RenderHtml` trait. The page has no reactive state, so
//! no owner or hydration scripts are needed.

use std::fs;
use std::path::{Path, PathBuf};

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::{debug, info};

use crate::App;
use crate::document::{PageDocument, PageOptions};
use crate::error::ExportError;

/// Render the bare component tree, without the document shell.
///
/// # Example
///
/// ```rust
/// let html = cloudlift_landing::render_app();
/// assert!(html.starts_with("<nav"));
/// assert!(html.contains("Why Choose CloudLift?"));
/// ```
pub fn render_app() -> String {
    let html = view! { <App /> }.to_html();
    debug!(bytes = html.len(), "rendered app fragment");
    html
}

/// Render the complete HTML document, `<!DOCTYPE html>` included.
///
/// # Example
///
/// ```rust
/// use cloudlift_landing::{PageOptions, render_page};
///
/// let html = render_page(&PageOptions::default());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("<title>CloudLift</title>"));
/// ```
pub fn render_page(options: &PageOptions) -> String {
    let doc = view! { <PageDocument options=options.clone() /> };

    // Leptos doesn't include DOCTYPE, so we add it
    let html = format!("<!DOCTYPE html>\n{}", doc.to_html());
    debug!(bytes = html.len(), title = %options.title, "rendered page document");
    html
}

/// Write already rendered HTML to `path`, creating missing parent directories.
pub fn write_html(path: &Path, html: &str) -> Result<PathBuf, ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, html).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bytes = html.len(), "page written");
    Ok(path.to_path_buf())
}

/// Render the full document and write it to `path`.
pub fn export_page(options: &PageOptions, path: &Path) -> Result<PathBuf, ExportError> {
    write_html(path, &render_page(options))
}
