use tracing::{debug, info};

use crate::page::{Anchor, Field, Page};
use crate::profile::FeaturedItem;

const UNKNOWN_KIND: &str = "Unknown";

pub fn extract(page: &Page) -> Vec<FeaturedItem> {
    let Some(section) = page.locate(Anchor::Featured) else {
        debug!("No featured section");
        return Vec::new();
    };

    let items: Vec<FeaturedItem> = page
        .items(Field::FeaturedItem, section)
        .into_iter()
        .map(|item| FeaturedItem {
            title: page.text(Field::FeaturedTitle, item),
            link: page.attr(Field::FeaturedLink, "href", item),
            description: page.text(Field::FeaturedDescription, item),
            image_url: page.attr(Field::FeaturedImage, "src", item),
            kind: page
                .text(Field::FeaturedType, item)
                .or_else(|| Some(UNKNOWN_KIND.to_string())),
        })
        .filter(FeaturedItem::is_viable)
        .collect();

    info!("Featured items found: {}", items.len());
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_items() {
        let html = r#"<section><div id="featured"></div>
          <div class="pvs-carousel"><ul>
            <li class="artdeco-carousel__item">
              <div class="pvs-content__top-bar"><span aria-hidden="true">Link</span></div>
              <a class="optional-action-target-wrapper" href="https://blog.example/post">
                <div class="pvs-media-content__image"><img src="https://media/thumb.png"></div>
                <div class="pvs-media-content__preview">
                  <div class="text-heading-small">Scaling Rust services</div>
                  <div class="text-body-small">Notes from a year in production</div>
                </div>
              </a>
            </li>
            <li class="artdeco-carousel__item">
              <a class="optional-action-target-wrapper" href="https://example/empty"></a>
            </li>
            <li class="artdeco-carousel__item">
              <div class="pvs-media-content__preview"><div class="text-heading-small">Untyped</div></div>
            </li>
          </ul></div></section>"#;
        let page = Page::parse(html);
        let items = extract(&page);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title.as_deref(), Some("Scaling Rust services"));
        assert_eq!(items[0].link.as_deref(), Some("https://blog.example/post"));
        assert_eq!(items[0].description.as_deref(), Some("Notes from a year in production"));
        assert_eq!(items[0].image_url.as_deref(), Some("https://media/thumb.png"));
        assert_eq!(items[0].kind.as_deref(), Some("Link"));
        assert_eq!(items[1].kind.as_deref(), Some("Unknown"));
    }
}
