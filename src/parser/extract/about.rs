use scraper::ElementRef;

use crate::page::{Field, Page};

pub fn extract(page: &Page, section: Option<ElementRef<'_>>) -> Option<String> {
    let section = section?;
    page.text(Field::AboutHidden, section)
        .or_else(|| page.expanded_text(Field::AboutBody, section))
}
