use tracing::{debug, info};

use crate::page::{Anchor, Field, Page};
use crate::profile::Recommendation;

/// Recommendations received: the active tab panel of the section.
pub fn extract(page: &Page) -> Vec<Recommendation> {
    let Some(section) = page.locate(Anchor::Recommendations) else {
        debug!("No recommendations section");
        return Vec::new();
    };
    let Some(panel) = page.first(Field::RecommendationPanel, section) else {
        debug!("Recommendations section without a visible panel");
        return Vec::new();
    };

    let recs: Vec<Recommendation> = page
        .items(Field::RecommendationItem, panel)
        .into_iter()
        .map(|item| Recommendation {
            recommender_name: page.text(Field::EntityTitle, item),
            recommender_headline: page.text(Field::EntitySubtitle, item),
            recommender_url: page.attr(Field::EntityLink, "href", item),
            relationship: page.text(Field::EntityCaption, item),
            text: page.expanded_text(Field::Description, item),
        })
        .filter(Recommendation::is_viable)
        .collect();

    info!("Recommendations found: {}", recs.len());
    recs
}
