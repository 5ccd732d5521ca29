use tracing::debug;

use crate::page::{inner_text, Field, Page};
use crate::profile::Profile;

/// Scalar fields of the profile header. List sections are left empty.
pub fn extract(page: &Page, url: Option<&str>) -> Profile {
    let root = page.root();
    let (follower_count, connection_count) = network_counts(page);

    let url = url
        .map(String::from)
        .or_else(|| page.attr(Field::CanonicalLink, "href", root))
        .or_else(|| page.attr(Field::OgUrl, "content", root));

    let profile = Profile {
        url,
        name: page.text(Field::Name, root),
        headline: page.text(Field::Headline, root),
        location: page.text(Field::Location, root),
        profile_picture_url: page.attr(Field::ProfilePicture, "src", root),
        banner_picture_url: page.attr(Field::Banner, "src", root),
        website: page.attr(Field::Website, "href", root),
        follower_count,
        connection_count,
        ..Default::default()
    };
    debug!(name = ?profile.name, headline = ?profile.headline, "top card");
    profile
}

/// Follower and connection counts, kept as displayed ("500+", "1,204").
fn network_counts(page: &Page) -> (Option<String>, Option<String>) {
    let mut followers = None;
    let mut connections = None;

    for item in page.items(Field::NetworkCountItem, page.root()) {
        let Some(count) = page.text(Field::NetworkCountValue, item) else {
            continue;
        };
        let label = inner_text(item).unwrap_or_default().to_lowercase();
        if label.contains("follower") {
            followers = Some(count);
        } else if label.contains("connection") {
            connections = Some(count);
        }
    }

    (followers, connections)
}
