//! Widget asset loading
//!
//! The HTML template and stylesheet are read once at startup and combined
//! into the resource body. A missing or unreadable file is fatal.

use crate::error::AssetError;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the widget markup
pub const HTML_FILE: &str = "search.html";
/// File name of the widget stylesheet
pub const CSS_FILE: &str = "search.css";

/// Attempts to locate the assets directory relative to `current_dir`.
///
/// Looks for `./assets`, then `../assets` (when running from a subdir), and
/// falls back to the relative path `assets`.
pub fn locate_assets_directory(current_dir: &Path) -> PathBuf {
    if current_dir.join("assets").exists() {
        return current_dir.join("assets");
    }

    if let Some(parent) = current_dir.parent() {
        if parent.join("assets").exists() {
            return parent.join("assets");
        }
    }

    PathBuf::from("assets")
}

/// Reads both asset files from `assets_dir` and returns the resource body.
pub fn load_widget_body(assets_dir: &Path) -> Result<String, AssetError> {
    let html = read_asset(&assets_dir.join(HTML_FILE))?;
    let css = read_asset(&assets_dir.join(CSS_FILE))?;

    info!(
        assets_dir = %assets_dir.display(),
        html_bytes = html.len(),
        css_bytes = css.len(),
        "Loaded widget assets"
    );

    Ok(embed_stylesheet(&html, &css))
}

/// Appends the stylesheet to the markup as an inline `<style>` block.
pub fn embed_stylesheet(html: &str, css: &str) -> String {
    format!("{}\n<style>\n{}\n</style>\n", html.trim_end(), css.trim_end())
}

fn read_asset(path: &Path) -> Result<String, AssetError> {
    std::fs::read_to_string(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crate_assets() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
    }

    #[test]
    fn embeds_css_in_style_block() {
        let body = embed_stylesheet("<div>hi</div>\n", ".a { color: red; }\n");
        assert_eq!(body, "<div>hi</div>\n<style>\n.a { color: red; }\n</style>\n");
    }

    #[test]
    fn loads_bundled_assets() {
        let body = load_widget_body(&crate_assets()).unwrap();
        assert!(body.contains("bg-search-root"));
        assert!(body.contains("<style>"));
        assert!(body.contains(".bg-search__results"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = load_widget_body(Path::new("/nonexistent/boston-globe-assets")).unwrap_err();
        assert!(err.to_string().contains(HTML_FILE));
    }

    #[test]
    fn locates_assets_from_crate_root() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        assert_eq!(locate_assets_directory(root), crate_assets());
        assert_eq!(locate_assets_directory(&root.join("src")), crate_assets());
    }
}
