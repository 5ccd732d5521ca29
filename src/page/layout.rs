/// Stable section identifiers on a profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    About,
    Featured,
    Experience,
    Education,
    Skills,
    Recommendations,
}

/// Named structural queries. Extractors ask for a `Field`; the layout decides
/// which selectors answer it and in what order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    // Top card
    Name,
    Headline,
    Location,
    ProfilePicture,
    Banner,
    Website,
    NetworkCountItem,
    NetworkCountValue,
    CanonicalLink,
    OgUrl,

    // Collapsed text
    HiddenText,
    VisibleFragment,
    Description,

    // About
    AboutHidden,
    AboutBody,

    // Featured carousel
    FeaturedItem,
    FeaturedTitle,
    FeaturedLink,
    FeaturedDescription,
    FeaturedImage,
    FeaturedType,

    // List entities (experience, education, skills, recommendations)
    ListItem,
    Entity,
    EntityTitle,
    EntitySubtitle,
    EntityCaption,
    EntityLines,
    EntityLink,
    EducationLines,
    CompanyLogoLink,
    RoleItem,
    SkillItem,
    TopSkills,
    TopSkillsEntity,
    RecommendationPanel,
    RecommendationItem,
}

/// Query adapter for one rendering of the host page. Swap the implementation
/// when the markup changes; extractors stay untouched.
pub trait Layout: Send + Sync {
    /// Element id marking the section.
    fn anchor_id(&self, anchor: Anchor) -> &'static str;

    /// CSS selectors for `field`, primary first.
    fn selectors(&self, field: Field) -> &'static [&'static str];
}

/// Profile markup as rendered in mid-2024.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedIn2024;

impl Layout for LinkedIn2024 {
    fn anchor_id(&self, anchor: Anchor) -> &'static str {
        match anchor {
            Anchor::About => "about",
            Anchor::Featured => "featured",
            Anchor::Experience => "experience",
            Anchor::Education => "education",
            Anchor::Skills => "skills",
            Anchor::Recommendations => "recommendations",
        }
    }

    fn selectors(&self, field: Field) -> &'static [&'static str] {
        match field {
            Field::Name => &[".pv-text-details__left-panel h1", "h1"],
            Field::Headline => &["div.text-body-medium.break-words"],
            Field::Location => &["span.text-body-small.inline.t-black--light.break-words"],
            Field::ProfilePicture => &[
                ".pv-top-card-profile-picture__image--show",
                ".pv-top-card-profile-picture__container img",
                "img.profile-photo-edit__preview",
                ".pv-top-card-profile-picture__image",
            ],
            Field::Banner => &[
                "img#profile-background-image-target-image",
                ".profile-banner__image",
            ],
            Field::Website => &["section.pv-top-card--website a"],
            Field::NetworkCountItem => &["ul.pv-top-card--list li", "li.text-body-small"],
            Field::NetworkCountValue => &["span.t-bold"],
            Field::CanonicalLink => &["link[rel=\"canonical\"]"],
            Field::OgUrl => &["meta[property=\"og:url\"]"],

            Field::HiddenText => &["span.visually-hidden"],
            Field::VisibleFragment => &["span[aria-hidden=\"true\"]"],
            Field::Description => &["div[class*=\"inline-show-more-text\"]"],

            Field::AboutHidden => &[".inline-show-more-text--is-collapsed span.visually-hidden"],
            Field::AboutBody => &[
                ".inline-show-more-text--is-collapsed",
                "div.display-flex.ph5.pv3 div[class*=\"inline-show-more-text\"]",
            ],

            Field::FeaturedItem => &[
                ".pvs-carousel .artdeco-carousel__item",
                "li.artdeco-carousel__item",
            ],
            Field::FeaturedTitle => &[".pvs-media-content__preview .text-heading-small"],
            Field::FeaturedLink => &["a.optional-action-target-wrapper"],
            Field::FeaturedDescription => &[".pvs-media-content__preview .text-body-small"],
            Field::FeaturedImage => &[".pvs-media-content__image img"],
            Field::FeaturedType => &[".pvs-content__top-bar span[aria-hidden=\"true\"]"],

            Field::ListItem => &[
                "div.pvs-list__outer-container > ul > li.artdeco-list__item",
                "ul > li.artdeco-list__item",
                "li.pvs-list__paged-list-item",
            ],
            Field::Entity => &["div[data-view-name=\"profile-component-entity\"]"],
            Field::EntityTitle => &[
                ".hoverable-link-text span[aria-hidden=\"true\"]",
                "div.t-bold span[aria-hidden=\"true\"]",
            ],
            Field::EntitySubtitle => &[
                "span.t-14.t-normal:not(.t-black--light) span[aria-hidden=\"true\"]",
            ],
            Field::EntityCaption => &["span.t-14.t-normal.t-black--light span[aria-hidden=\"true\"]"],
            Field::EntityLines => &["span.t-14.t-normal span[aria-hidden=\"true\"]"],
            Field::EntityLink => &["a.optional-action-target-wrapper"],
            Field::EducationLines => &[
                "span.t-14.t-normal span[aria-hidden=\"true\"], \
                 div.pvs-entity__sub-components div.t-14.t-normal:not([class*=\"inline-show-more-text\"]) > span[aria-hidden=\"true\"]",
            ],
            Field::CompanyLogoLink => &[
                "a[data-field=\"experience_company_logo\"]",
                "a.optional-action-target-wrapper",
            ],
            Field::RoleItem => &[
                "div.pvs-entity__sub-components li[class*=\"pvs-list__item--with-top-padding\"]",
            ],
            Field::SkillItem => &[
                "div.pvs-list__outer-container > ul > li",
                "ul > li.artdeco-list__item",
            ],
            Field::TopSkills => &[".display-flex.align-items-center.t-14.t-normal span[aria-hidden=\"true\"]"],
            Field::TopSkillsEntity => &[
                "[data-view-name=\"profile-component-entity\"] div:not(.t-bold) > span[aria-hidden=\"true\"]",
            ],
            Field::RecommendationPanel => &[
                ".artdeco-tabpanel.active",
                ".artdeco-tabpanel:not([hidden])",
            ],
            Field::RecommendationItem => &[
                "div > ul > li.artdeco-list__item",
                "li.artdeco-list__item",
            ],
        }
    }
}
