pub mod layout;

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::warn;

pub use layout::{Anchor, Field, Layout, LinkedIn2024};

static TRUNCATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:…|\.\.\.)\s?see more$|…\s?less$").unwrap());

/// Elements that start a new line in rendered text.
const LINE_BREAKING: &[&str] = &["br", "p", "div", "li"];

/// A parsed profile document plus the layout used to query it.
///
/// Every lookup walks the layout's selectors for a field in order and returns
/// the first hit; no lookup errors, absence is `None` or an empty `Vec`.
pub struct Page {
    document: Html,
    layout: Box<dyn Layout>,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self::with_layout(html, LinkedIn2024)
    }

    pub fn with_layout(html: &str, layout: impl Layout + 'static) -> Self {
        Page {
            document: Html::parse_document(html),
            layout: Box::new(layout),
        }
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.document.root_element()
    }

    /// Root of a section. An empty marker element stands for its parent.
    pub fn locate(&self, anchor: Anchor) -> Option<ElementRef<'_>> {
        let id = self.layout.anchor_id(anchor);
        let selector = Selector::parse(&format!("[id=\"{}\"]", id)).ok()?;
        let marker = self.document.select(&selector).next()?;
        if marker.children().any(|c| c.value().is_element()) {
            Some(marker)
        } else {
            marker.parent().and_then(ElementRef::wrap)
        }
    }

    pub fn first<'a>(&'a self, field: Field, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.compiled(field)
            .find_map(|sel| scope.select(&sel).next())
    }

    /// Rendered text of the first match.
    pub fn text<'a>(&'a self, field: Field, scope: ElementRef<'a>) -> Option<String> {
        self.compiled(field)
            .find_map(|sel| scope.select(&sel).next().and_then(inner_text))
    }

    pub fn attr<'a>(&'a self, field: Field, name: &str, scope: ElementRef<'a>) -> Option<String> {
        self.compiled(field).find_map(|sel| {
            scope
                .select(&sel)
                .next()
                .and_then(|el| el.value().attr(name))
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(String::from)
        })
    }

    /// Rendered text of every match, in document order, empties dropped.
    pub fn all_text<'a>(&'a self, field: Field, scope: ElementRef<'a>) -> Vec<String> {
        self.compiled(field)
            .map(|sel| scope.select(&sel).filter_map(inner_text).collect::<Vec<_>>())
            .find(|texts| !texts.is_empty())
            .unwrap_or_default()
    }

    /// Outermost matches only: a match nested inside another match is dropped.
    pub fn items<'a>(&'a self, field: Field, scope: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        self.compiled(field)
            .map(|sel| outermost(scope.select(&sel).collect()))
            .find(|items| !items.is_empty())
            .unwrap_or_default()
    }

    /// Full text of a "see more" block: the hidden complete copy if present,
    /// otherwise the visible fragments with the truncation marker removed.
    pub fn expanded_text<'a>(&'a self, field: Field, scope: ElementRef<'a>) -> Option<String> {
        let container = self.first(field, scope)?;
        if let Some(full) = self.text(Field::HiddenText, container) {
            return Some(full);
        }
        let joined = self.all_text(Field::VisibleFragment, container).join("\n");
        let cleaned = TRUNCATION_RE.replace(joined.trim(), "");
        let cleaned = cleaned.trim();
        (!cleaned.is_empty()).then(|| cleaned.to_string())
    }

    fn compiled(&self, field: Field) -> impl Iterator<Item = Selector> + '_ {
        self.layout
            .selectors(field)
            .iter()
            .filter_map(move |css| match Selector::parse(css) {
                Ok(sel) => Some(sel),
                Err(e) => {
                    warn!(?field, selector = *css, error = ?e, "skipping invalid selector");
                    None
                }
            })
    }
}

fn outermost(matches: Vec<ElementRef<'_>>) -> Vec<ElementRef<'_>> {
    let ids: HashSet<_> = matches.iter().map(|m| m.id()).collect();
    matches
        .into_iter()
        .filter(|m| !m.ancestors().any(|a| ids.contains(&a.id())))
        .collect()
}

/// Text as a browser would render it: one line per block, whitespace
/// collapsed, blank lines dropped.
pub fn inner_text(el: ElementRef<'_>) -> Option<String> {
    let mut raw = String::new();
    for node in el.descendants() {
        match node.value() {
            Node::Text(text) => raw.push_str(text),
            Node::Element(e) if LINE_BREAKING.contains(&e.name()) => raw.push('\n'),
            _ => {}
        }
    }
    let text = raw
        .lines()
        .map(|l| l.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    (!text.is_empty()).then_some(text)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    struct Tiny;

    impl Layout for Tiny {
        fn anchor_id(&self, _anchor: Anchor) -> &'static str {
            "box"
        }

        fn selectors(&self, field: Field) -> &'static [&'static str] {
            match field {
                Field::Name => &["h1.primary", "h1"],
                Field::ListItem => &["li.item"],
                Field::Website => &["a.site", "a"],
                Field::Headline => &["p:::nonsense", "p.headline"],
                _ => LinkedIn2024.selectors(field),
            }
        }
    }

    #[test]
    fn falls_back_in_order() {
        let page = Page::with_layout("<h1>  Jane   Doe </h1>", Tiny);
        assert_eq!(page.text(Field::Name, page.root()).as_deref(), Some("Jane Doe"));

        let page = Page::with_layout("<h1>Other</h1><h1 class='primary'>Jane</h1>", Tiny);
        assert_eq!(page.text(Field::Name, page.root()).as_deref(), Some("Jane"));
    }

    #[test]
    fn absent_is_none_not_error() {
        let page = Page::with_layout("<div></div>", Tiny);
        assert!(page.text(Field::Name, page.root()).is_none());
        assert!(page.attr(Field::Website, "href", page.root()).is_none());
        assert!(page.all_text(Field::Name, page.root()).is_empty());
        assert!(page.items(Field::ListItem, page.root()).is_empty());
        assert!(page.expanded_text(Field::Description, page.root()).is_none());
        assert!(page.locate(Anchor::About).is_none());
    }

    #[test]
    fn empty_text_falls_through() {
        let page = Page::with_layout("<h1 class='primary'>  </h1><h1>Jane</h1>", Tiny);
        // "h1.primary" matches but is blank, so "h1" answers; its first match is
        // the blank one again, so the field is absent.
        assert!(page.text(Field::Name, page.root()).is_none());
    }

    #[test]
    fn invalid_selector_is_skipped() {
        let page = Page::with_layout("<p class='headline'>Builder</p>", Tiny);
        assert_eq!(page.text(Field::Headline, page.root()).as_deref(), Some("Builder"));
    }

    #[test]
    fn attribute_lookup() {
        let page = Page::with_layout("<a href=' '>x</a><a class='site' href='https://jane.dev'>x</a>", Tiny);
        assert_eq!(page.attr(Field::Website, "href", page.root()).as_deref(), Some("https://jane.dev"));
    }

    #[test]
    fn items_keep_only_outermost() {
        let html = "<ul><li class='item'>A<ul><li class='item'>A1</li></ul></li><li class='item'>B</li></ul>";
        let page = Page::with_layout(html, Tiny);
        let items = page.items(Field::ListItem, page.root());
        assert_eq!(items.len(), 2);
        assert_eq!(inner_text(items[1]).as_deref(), Some("B"));
    }

    #[test]
    fn locate_marker_resolves_to_parent() {
        let html = "<section class='card'><div id='box'></div><p>inside</p></section>";
        let page = Page::with_layout(html, Tiny);
        let section = page.locate(Anchor::About).unwrap();
        assert_eq!(section.value().name(), "section");

        let html = "<section id='box'><p>inside</p></section>";
        let page = Page::with_layout(html, Tiny);
        assert_eq!(page.locate(Anchor::About).unwrap().value().name(), "section");
    }

    #[test]
    fn expanded_prefers_hidden_copy() {
        let html = r#"<div class="inline-show-more-text--is-collapsed">
            <span aria-hidden="true">Short…see more</span>
            <span class="visually-hidden">The whole story.</span>
        </div>"#;
        let page = Page::parse(html);
        assert_eq!(
            page.expanded_text(Field::Description, page.root()).as_deref(),
            Some("The whole story.")
        );
    }

    #[test]
    fn expanded_joins_fragments_and_strips_marker() {
        let html = r#"<div class="inline-show-more-text">
            <span aria-hidden="true">First part</span>
            <span aria-hidden="true">second part…see more</span>
        </div>"#;
        let page = Page::parse(html);
        assert_eq!(
            page.expanded_text(Field::Description, page.root()).as_deref(),
            Some("First part\nsecond part")
        );
    }

    #[test]
    fn inner_text_breaks_lines() {
        let page = Page::parse("<div id='x'>Line one<br>Line   two<p>Para</p></div>");
        let div = page.root().select(&Selector::parse("#x").unwrap()).next().unwrap();
        assert_eq!(inner_text(div).as_deref(), Some("Line one\nLine two\nPara"));
    }
}
