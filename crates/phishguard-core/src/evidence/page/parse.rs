//! Parse fetched markup into PageEvidence.

use anyhow::{anyhow, Result};
use scraper::{Html, Selector};

use super::super::{Anchor, PageEvidence};

/// Parses `html` for the title text and all anchor elements.
///
/// The HTML5 parser is total, so structurally broken markup still yields
/// evidence: a missing `<title>` becomes an empty title and a page without
/// anchors an empty list. Anchors keep document order; a missing `href`
/// attribute becomes an empty string rather than dropping the anchor.
pub(crate) fn parse_page(html: &str) -> Result<PageEvidence> {
    let title_sel = Selector::parse("title").map_err(|e| anyhow!("title selector: {e}"))?;
    let anchor_sel = Selector::parse("a").map_err(|e| anyhow!("anchor selector: {e}"))?;

    let doc = Html::parse_document(html);

    let title = doc
        .select(&title_sel)
        .next()
        .map(|t| t.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let anchors = doc
        .select(&anchor_sel)
        .map(|a| Anchor {
            href: a.value().attr("href").unwrap_or("").to_string(),
        })
        .collect();

    Ok(PageEvidence { title, anchors })
}
