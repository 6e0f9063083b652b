//! URL metadata fetch worker.
//!
//! Link cards can fill their title and description from the page itself.
//! Fetches run as blocking tasks on the runtime's blocking pool; results
//! come back over a channel the GUI drains each frame, so a slow or dead
//! site never stalls a render.

use std::io::Read;
use std::sync::mpsc::Sender;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Pages are read up to this many bytes; metadata lives in the head.
const MAX_HTML_BYTES: u64 = 512 * 1024;

#[derive(Debug, Clone)]
pub struct MetadataRequest {
    pub project_id: String,
    pub link_id: String,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct MetadataResult {
    pub project_id: String,
    pub link_id: String,
    pub outcome: Result<PageMetadata, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Dispatches fetches and reports results over `tx`.
pub struct MetadataFetcher {
    tx: Sender<MetadataResult>,
    runtime: tokio::runtime::Handle,
}

impl MetadataFetcher {
    pub fn new(tx: Sender<MetadataResult>, runtime: tokio::runtime::Handle) -> Self {
        Self { tx, runtime }
    }

    /// Fetch in the background; the result arrives as a `MetadataResult`.
    pub fn fetch(&self, req: MetadataRequest) {
        let tx = self.tx.clone();
        self.runtime.spawn_blocking(move || {
            debug!("[metadata] Fetching {}", req.url);
            let outcome = fetch_page(&req.url);
            let _ = tx.send(MetadataResult {
                project_id: req.project_id,
                link_id: req.link_id,
                outcome,
            });
        });
    }
}

fn fetch_page(url: &str) -> Result<PageMetadata, String> {
    let response = ureq::get(url)
        .set(
            "User-Agent",
            concat!("devdeck/", env!("CARGO_PKG_VERSION")),
        )
        .set("Accept", "text/html")
        .call()
        .map_err(|e| format!("Request failed: {e}"))?;

    let mut buf = Vec::new();
    response
        .into_reader()
        .take(MAX_HTML_BYTES)
        .read_to_end(&mut buf)
        .map_err(|e| format!("Failed to read response: {e}"))?;

    Ok(extract_metadata(&String::from_utf8_lossy(&buf)))
}

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());

// Attribute order in <meta> tags varies, so match both directions.
static DESC_CONTENT_AFTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?is)<meta[^>]*?(?:name|property)\s*=\s*["'](?:og:)?description["'][^>]*?content\s*=\s*["']([^"']*)["']"#,
    )
    .unwrap()
});
static DESC_CONTENT_BEFORE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?is)<meta[^>]*?content\s*=\s*["']([^"']*)["'][^>]*?(?:name|property)\s*=\s*["'](?:og:)?description["']"#,
    )
    .unwrap()
});

/// Pulls title and description out of raw HTML.
pub fn extract_metadata(html: &str) -> PageMetadata {
    let title = TITLE_RE
        .captures(html)
        .map(|c| clean_text(&c[1]))
        .filter(|t| !t.is_empty());

    let description = DESC_CONTENT_AFTER
        .captures(html)
        .or_else(|| DESC_CONTENT_BEFORE.captures(html))
        .map(|c| clean_text(&c[1]))
        .filter(|d| !d.is_empty());

    PageMetadata { title, description }
}

/// Decodes the common entities and collapses whitespace runs.
fn clean_text(raw: &str) -> String {
    let decoded = raw
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_title() {
        let html = "<html><head><title>\n  My Project &amp; Docs\n</title></head></html>";
        let meta = extract_metadata(html);
        assert_eq!(meta.title.as_deref(), Some("My Project & Docs"));
        assert_eq!(meta.description, None);
    }

    #[test]
    fn test_extracts_description_both_attribute_orders() {
        let after = r#"<meta name="description" content="A dashboard">"#;
        assert_eq!(
            extract_metadata(after).description.as_deref(),
            Some("A dashboard")
        );

        let before = r#"<meta content="A dashboard" name="description">"#;
        assert_eq!(
            extract_metadata(before).description.as_deref(),
            Some("A dashboard")
        );
    }

    #[test]
    fn test_prefers_plain_description_and_accepts_og() {
        let html = r#"<meta property="og:description" content="From og tag">"#;
        assert_eq!(
            extract_metadata(html).description.as_deref(),
            Some("From og tag")
        );
    }

    #[test]
    fn test_empty_title_is_none() {
        let meta = extract_metadata("<title>   </title>");
        assert_eq!(meta.title, None);
    }

    #[test]
    fn test_no_metadata_in_plain_text() {
        assert_eq!(extract_metadata("not html at all"), PageMetadata::default());
    }
}
