//! Whole-site build: every page rendered into a standalone HTML document.
use std::fmt::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, warn};

use super::{history, power, standings, teams, Page};
use crate::data_provider::{DataError, LeagueDataProvider, LOAD_FAILURE_MESSAGE};
use crate::formatting::escape_html;
use crate::sorting::{SortDirection, SortKey};
use crate::types::LEAGUE_NAME;

const STYLE: &str = r#"
body { font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; margin: 0; background: #0f1115; color: #e6e6e6; }
nav { display: flex; gap: 12px; padding: 12px 20px; background: #171a21; }
nav .link { color: #9aa4b2; text-decoration: none; font-weight: 700; }
nav .link.active { color: #ffb347; }
main { max-width: 1100px; margin: 0 auto; padding: 20px; }
.muted { color: #9aa4b2; font-size: 12px; }
.chip { display: inline-block; padding: 2px 8px; border-radius: 999px; background: #252a35; font-size: 12px; }
.chip.delta.up { color: #5fd38d; } .chip.delta.down { color: #ff6b6b; }
.rank-row, .card { background: #171a21; border-radius: 10px; padding: 12px; margin-bottom: 10px; }
.rank-top { display: flex; justify-content: space-between; gap: 8px; flex-wrap: wrap; }
.rank-name { font-weight: 900; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 10px; }
.bio { margin-top: 10px; white-space: pre-wrap; line-height: 1.35; }
table { width: 100%; border-collapse: collapse; }
th, td { padding: 6px 8px; text-align: left; border-bottom: 1px solid #252a35; }
.error { display: block; padding: 12px; border-radius: 10px; background: #3a1c1c; color: #ffb4b4; }
footer { padding: 20px; text-align: center; }
"#;

/// Nav bar with the link for `current` marked active
pub fn format_nav(current: Page) -> String {
    let links: String = Page::all()
        .iter()
        .map(|page| {
            let class = if *page == current { "link active" } else { "link" };
            format!(
                "<a class=\"{}\" href=\"{}\">{}</a>",
                class,
                page.file_name(),
                escape_html(page.title())
            )
        })
        .collect();
    format!("<nav>{}</nav>", links)
}

/// Visible error box shown in place of a page's content
pub fn format_error_box() -> String {
    format!(
        "<div id=\"errorBox\" class=\"error\">{}</div>\n",
        escape_html(LOAD_FAILURE_MESSAGE)
    )
}

/// Wrap a page fragment in the shared document shell
pub fn format_document(page: Page, body: &str, generated_at: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{league} · {title}</title>
<style>{style}</style>
</head>
<body data-page="{id}">
{nav}
<main>
<h1>{title}</h1>
{body}</main>
<footer class="muted">Generated {generated_at}</footer>
</body>
</html>
"#,
        league = escape_html(LEAGUE_NAME),
        title = escape_html(page.title()),
        style = STYLE,
        id = page.id(),
        nav = format_nav(page),
        body = body,
        generated_at = escape_html(generated_at),
    )
}

/// Render one page's fragment; a load failure becomes the error box
pub async fn render_page_body(
    provider: &dyn LeagueDataProvider,
    page: Page,
    sort: Option<(SortKey, SortDirection)>,
) -> String {
    let result: Result<String, DataError> = match page {
        Page::Power => power::render(provider).await,
        Page::Standings => standings::render(provider, sort).await,
        Page::History => history::render(provider).await,
        Page::Teams => teams::render(provider).await,
    };
    match result {
        Ok(body) => body,
        Err(e) => {
            warn!("BUILD: {} page failed to load: {}", page.id(), e);
            format_error_box()
        }
    }
}

/// Write every page into `out_dir`, returning the number of pages written
pub async fn run(
    provider: &dyn LeagueDataProvider,
    out_dir: &Path,
    sort: Option<(SortKey, SortDirection)>,
    time_format: &str,
) -> Result<usize> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let mut generated_at = String::new();
    write!(generated_at, "{}", Local::now().format(time_format))
        .with_context(|| format!("Invalid time_format '{}'", time_format))?;
    let mut written = 0;
    for page in Page::all() {
        let body = render_page_body(provider, page, sort).await;
        let document = format_document(page, &body, &generated_at);
        let path = out_dir.join(page.file_name());
        tokio::fs::write(&path, document)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("BUILD: wrote {}", path.display());
        written += 1;
    }

    println!("Wrote {} pages to {}", written, out_dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::MockProvider;

    #[test]
    fn test_nav_marks_only_current_page_active() {
        let nav = format_nav(Page::History);
        assert!(nav.contains(r#"<a class="link active" href="history.html">History</a>"#));
        assert!(nav.contains(r#"<a class="link" href="index.html">Power Rankings</a>"#));
        assert_eq!(nav.matches("active").count(), 1);
    }

    #[test]
    fn test_document_shell() {
        let doc = format_document(Page::Teams, "<p>x</p>\n", "2026-10-16 09:00");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"<body data-page="teams">"#));
        assert!(doc.contains("<h1>Teams</h1>\n<p>x</p>\n</main>"));
        assert!(doc.contains("Generated 2026-10-16 09:00"));
    }

    #[tokio::test]
    async fn test_failed_load_renders_error_box() {
        let body = render_page_body(&MockProvider::failing(), Page::Standings, None).await;
        assert!(body.contains(r#"id="errorBox""#));
        assert!(body.contains("Couldn’t load data files."));
    }

    #[tokio::test]
    async fn test_build_writes_all_pages() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("site");
        let written = run(
            &MockProvider::new(),
            &out,
            Some((SortKey::Record, SortDirection::Descending)),
            "%Y",
        )
        .await
        .unwrap();
        assert_eq!(written, 4);

        for page in Page::all() {
            assert!(out.join(page.file_name()).exists());
        }
        let standings = std::fs::read_to_string(out.join("standings.html")).unwrap();
        let bears = standings.find("<b>Bears</b>").unwrap();
        let wolves = standings.find("<b>Wolves</b>").unwrap();
        assert!(bears < wolves);
        assert!(standings.contains(r#"<a class="link active" href="standings.html">"#));
    }

    #[tokio::test]
    async fn test_build_rejects_invalid_time_format() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&MockProvider::new(), dir.path(), None, "%Q").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_build_with_failing_provider_still_writes_pages() {
        let dir = tempfile::tempdir().unwrap();
        let written = run(&MockProvider::failing(), dir.path(), None, "%Y").await.unwrap();
        assert_eq!(written, 4);
        let index = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains(r#"id="errorBox""#));
    }
}
