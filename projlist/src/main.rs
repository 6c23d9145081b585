//! Harvest the projection list from the PROJ documentation index and
//! print it as a Rust source table for `projmaps/src/projections.rs`.
//! There is no automated hand-off: the output is meant to be pasted in.
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro)]

use std::time::Duration;

use anyhow::{anyhow, Context};
use log::warn;
use scraper::{Html, Selector};

const DOC_URL: &str = "https://proj.org/operations/projections/index.html";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
/// Every entry gets the same ellipsoid/datum/units tail.
const DEFINITION_TAIL: &str = "+ellps=WGS84 +datum=WGS84 +units=m +no_defs";
/// Separates the short code from the long name in each list item.
const SEPARATOR: char = '–';

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("[fetch] {DOC_URL}");
    let body = ureq::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .get(DOC_URL)
        .call()
        .context("could not fetch the projection index; check your connection")?
        .into_string()
        .context("reading response body")?;
    println!("[fetch] ok ({} bytes)", body.len());

    let entries = parse_projection_list(&body)?;
    println!("[parse] {} projections", entries.len());

    println!("\n// --- paste into projmaps/src/projections.rs ---");
    print!("{}", format_table(&entries));
    Ok(())
}

/// Extract `(long name, PROJ definition)` pairs from the first `<ul>` in
/// the document body. Items missing the `<code>` tag or the separator are
/// reported and skipped; they never abort the scrape.
fn parse_projection_list(html: &str) -> anyhow::Result<Vec<(String, String)>> {
    let document = Html::parse_document(html);
    let list_sel = Selector::parse("body ul").map_err(|e| anyhow!("selector: {e}"))?;
    let item_sel = Selector::parse("li").map_err(|e| anyhow!("selector: {e}"))?;
    let code_sel = Selector::parse("code").map_err(|e| anyhow!("selector: {e}"))?;

    let list = document
        .select(&list_sel)
        .next()
        .ok_or_else(|| anyhow!("no projection list (<ul>) found in the page body"))?;

    let mut entries = Vec::new();
    for item in list.select(&item_sel) {
        let Some(code_el) = item.select(&code_sel).next() else {
            warn!("list item without a <code> tag, skipping");
            continue;
        };
        let code = code_el.text().collect::<String>().trim().to_string();
        let text = item.text().collect::<String>();
        let Some((_, long_name)) = text.split_once(SEPARATOR) else {
            warn!("could not parse the text for code '{code}', skipping");
            continue;
        };
        entries.push((long_name.trim().to_string(), format!("+proj={code} {DEFINITION_TAIL}")));
    }
    Ok(entries)
}

/// Literal Rust initializer, copy-paste friendly.
fn format_table(entries: &[(String, String)]) -> String {
    let mut out = String::from("pub const PROJECTIONS: &[(&str, &str)] = &[\n");
    for (name, definition) in entries {
        out.push_str(&format!("    ({name:?}, {definition:?}),\n"));
    }
    out.push_str("];\n");
    out
}
