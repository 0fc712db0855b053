//! Wiki fetch collaborator: nation discovery, per-nation vehicle listings
//! and page retrieval, using a simple blocking HTTP client. Parsing of the
//! fetched listings is separated from transport so it stays testable
//! offline.

use std::time::Duration;

use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use crate::error::{ScrapeError, ScrapeResult};
use crate::parse::text_of;

pub const BASE_URL: &str = "https://wiki.warthunder.com";

/// The three vehicle environments the wiki categorizes pages under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Ground,
    Aviation,
    Naval,
}

impl Terrain {
    /// Landing page listing the per-nation tech trees.
    fn landing_page(self) -> &'static str {
        match self {
            Terrain::Ground => "Ground_vehicles",
            Terrain::Aviation => "Aviation",
            Terrain::Naval => "Fleet",
        }
    }
}

/// A blocking agent with sane defaults for polite crawling.
pub fn agent() -> ureq::Agent {
    ureq::Agent::new_with_config(
        ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .user_agent(concat!("wt_wiki_scraper/", env!("CARGO_PKG_VERSION")))
            .build(),
    )
}

/// Nation name → tech-tree URL for one environment.
pub fn nations(agent: &ureq::Agent, terrain: Terrain) -> ScrapeResult<Vec<(String, Url)>> {
    let url = format!("{BASE_URL}/{}", terrain.landing_page());
    let html = http_get(agent, &url)?;
    Ok(parse_nations(&html))
}

/// Vehicle title → page URL from one nation's category listing.
pub fn vehicles_by_nation(agent: &ureq::Agent, nation_url: &Url) -> ScrapeResult<Vec<(String, Url)>> {
    let html = http_get(agent, nation_url.as_str())?;
    Ok(parse_vehicle_list(&html))
}

/// Fetch one vehicle page by title, returning the raw HTML and the terrain
/// the wiki categorizes it under. Pages outside the three vehicle
/// categories (bombs, rockets, update notes) are an error; the caller
/// decides whether to skip them.
pub fn fetch_vehicle_page(agent: &ureq::Agent, title: &str) -> ScrapeResult<(String, Terrain)> {
    let mut url = base();
    if let Ok(mut segments) = url.path_segments_mut() {
        // push() percent-encodes the title, matching the wiki's URL scheme
        segments.pop_if_empty().push(title);
    }
    let html = http_get(agent, url.as_str())?;
    let terrain =
        detect_terrain(&html).ok_or_else(|| ScrapeError::UnknownCategory(title.to_string()))?;
    Ok((html, terrain))
}

/// Filesystem-safe storage key for a page title: the decimal codepoint of
/// every character, dash-separated. Titles carry quotes, slashes and
/// parentheses that no portable filename survives.
pub fn storage_key(title: &str) -> String {
    title
        .chars()
        .map(|c| (c as u32).to_string())
        .collect::<Vec<_>>()
        .join("-")
}

/// Inverse of [`storage_key`]. `None` when the key is not a dash-separated
/// codepoint list.
pub fn title_from_key(key: &str) -> Option<String> {
    key.split('-')
        .map(|part| part.parse::<u32>().ok().and_then(char::from_u32))
        .collect()
}

fn base() -> Url {
    Url::parse(BASE_URL).unwrap()
}

fn http_get(agent: &ureq::Agent, url: &str) -> ScrapeResult<String> {
    debug!(url, "fetching");
    let response = agent.get(url).call().map_err(Box::new)?;
    response
        .into_body()
        .read_to_string()
        .map_err(|e| ScrapeError::Http(Box::new(e)))
}

/// The nations table's first row holds two links per nation: a flag image
/// and a text link. Only the text links carry a usable name.
fn parse_nations(html: &str) -> Vec<(String, Url)> {
    let doc = Html::parse_document(html);
    let row = Selector::parse(".wt-class-table tr").unwrap();
    let link = Selector::parse("a").unwrap();
    let base = base();

    let Some(first_row) = doc.select(&row).next() else {
        return Vec::new();
    };
    first_row
        .select(&link)
        .skip(1)
        .step_by(2)
        .filter_map(|a| {
            let name = text_of(a);
            let href = a.value().attr("href")?;
            let url = base.join(href).ok()?;
            (!name.is_empty()).then_some((name, url))
        })
        .collect()
}

fn parse_vehicle_list(html: &str) -> Vec<(String, Url)> {
    let doc = Html::parse_document(html);
    let entry = Selector::parse(".mw-category-group li a").unwrap();
    let base = base();

    doc.select(&entry)
        .filter_map(|a| {
            let name = text_of(a);
            let href = a.value().attr("href")?;
            let url = base.join(href).ok()?;
            (!name.is_empty()).then_some((name, url))
        })
        .collect()
}

/// The page's first normal category link names its environment.
fn detect_terrain(html: &str) -> Option<Terrain> {
    let doc = Html::parse_document(html);
    let selector = Selector::parse(".mw-normal-catlinks ul li").unwrap();
    let category = doc.select(&selector).next().map(text_of)?.to_lowercase();
    if category.contains("ground") {
        Some(Terrain::Ground)
    } else if category.contains("aviation") {
        Some(Terrain::Aviation)
    } else if category.contains("fleet") {
        Some(Terrain::Naval)
    } else {
        None
    }
}
