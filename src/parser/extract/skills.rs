use scraper::ElementRef;
use tracing::{debug, info};

use crate::page::{Anchor, Field, Page};

const TOP_SKILLS_LABEL: &str = "top skills";
const SKILL_SEPARATOR: char = '•';

/// Skills section first; when it yields nothing, the "Top skills" line in the
/// about card.
pub fn extract(page: &Page, about: Option<ElementRef<'_>>) -> Vec<String> {
    let mut skills: Vec<String> = page
        .locate(Anchor::Skills)
        .map(|section| {
            page.items(Field::SkillItem, section)
                .into_iter()
                .filter_map(|item| page.text(Field::EntityTitle, item))
                .filter(|name| !name.to_lowercase().starts_with("show all"))
                .collect()
        })
        .unwrap_or_default();

    if skills.is_empty() {
        if let Some(about) = about {
            skills = top_skills(page, about);
            if !skills.is_empty() {
                debug!("Skills taken from the about card");
            }
        }
    }

    info!("Skills found: {}", skills.len());
    skills
}

fn top_skills(page: &Page, about: ElementRef<'_>) -> Vec<String> {
    [Field::TopSkills, Field::TopSkillsEntity]
        .into_iter()
        .filter_map(|field| page.text(field, about))
        .find(|line| !line.to_lowercase().contains(TOP_SKILLS_LABEL))
        .map(|line| {
            line.split(SKILL_SEPARATOR)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
