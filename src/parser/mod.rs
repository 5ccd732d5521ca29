pub mod extract;
pub mod lines;

use tracing::info;

use crate::page::{Anchor, Page};
use crate::profile::Profile;
use extract::{about, education, experience, featured, recommendations, skills, top_card};

/// Parse a rendered profile document and extract every section.
pub fn process_page(html: &str, url: Option<&str>) -> Profile {
    let page = Page::parse(html);
    extract_profile(&page, url)
}

/// Runs every section extractor in order. A missing section leaves its field
/// empty and never affects the others.
pub fn extract_profile(page: &Page, url: Option<&str>) -> Profile {
    info!("Extracting profile {}", url.unwrap_or("<unknown url>"));

    let mut profile = top_card::extract(page, url);
    let about_section = page.locate(Anchor::About);
    profile.about = about::extract(page, about_section);
    profile.featured = featured::extract(page);
    profile.experience = experience::extract(page);
    profile.education = education::extract(page);
    profile.skills = skills::extract(page, about_section);
    profile.recommendations = recommendations::extract(page);

    info!(
        "Extracted {} experience, {} education, {} skills, {} featured, {} recommendations",
        profile.experience.len(),
        profile.education.len(),
        profile.skills.len(),
        profile.featured.len(),
        profile.recommendations.len(),
    );
    profile
}

// ── Tests ──
