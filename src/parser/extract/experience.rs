use scraper::ElementRef;
use tracing::{debug, info};

use crate::page::{Anchor, Field, Page};
use crate::parser::lines::{self, Fact, EXPERIENCE_RULES};
use crate::profile::Experience;

const SEPARATOR: char = '·';

/// One entry per role. A company block with nested roles yields one entry per
/// role, all sharing the company's name and link.
pub fn extract(page: &Page) -> Vec<Experience> {
    let Some(section) = page.locate(Anchor::Experience) else {
        debug!("No experience section");
        return Vec::new();
    };

    let mut entries = Vec::new();
    for item in page.items(Field::ListItem, section) {
        let Some(entity) = page.first(Field::Entity, item) else {
            debug!("Experience item without entity block, skipped");
            continue;
        };

        let roles = page.items(Field::RoleItem, item);
        if roles.is_empty() {
            entries.extend(single_role(page, item, entity));
        } else {
            entries.extend(multi_role(page, item, entity, &roles));
        }
    }

    info!("Experience items found: {}", entries.len());
    entries
}

fn single_role(page: &Page, item: ElementRef<'_>, entity: ElementRef<'_>) -> Option<Experience> {
    let mut exp = Experience {
        title: page.text(Field::EntityTitle, entity),
        company_name: page
            .text(Field::EntitySubtitle, entity)
            .and_then(|line| company_from_subtitle(&line)),
        company_url: page.attr(Field::CompanyLogoLink, "href", entity),
        description: page
            .expanded_text(Field::Description, entity)
            .or_else(|| page.expanded_text(Field::Description, item)),
        is_multi_role: false,
        ..Default::default()
    };

    let text_lines = page.all_text(Field::EntityLines, entity);
    lines::apply_experience(&mut exp, lines::classify_all(&text_lines, EXPERIENCE_RULES));

    if !exp.is_viable() {
        debug!("Experience item without title or company, skipped");
        return None;
    }
    Some(exp)
}

fn multi_role(
    page: &Page,
    item: ElementRef<'_>,
    entity: ElementRef<'_>,
    roles: &[ElementRef<'_>],
) -> Vec<Experience> {
    let company_name = page.text(Field::EntityTitle, entity);
    let company_url = page.attr(Field::CompanyLogoLink, "href", item);
    // Company subtitle reads like "Full-time · 3 yrs 2 mos"
    let company_type = page
        .text(Field::EntitySubtitle, entity)
        .and_then(|line| {
            lines::classify(&line, EXPERIENCE_RULES)
                .into_iter()
                .find_map(|fact| match fact {
                    Fact::EmploymentType(t) => Some(t),
                    _ => None,
                })
        });

    roles
        .iter()
        .filter_map(|&role| {
            let mut exp = Experience {
                title: page.text(Field::EntityTitle, role),
                employment_type: company_type.clone(),
                description: page.expanded_text(Field::Description, role),
                is_multi_role: true,
                ..Default::default()
            };
            let text_lines = page.all_text(Field::EntityLines, role);
            lines::apply_experience(&mut exp, lines::classify_all(&text_lines, EXPERIENCE_RULES));

            // company fields are shared by every role
            exp.company_name = company_name.clone();
            exp.company_url = company_url.clone();

            if exp.title.is_none() {
                debug!("Role without title under {:?}, skipped", company_name);
                return None;
            }
            Some(exp)
        })
        .collect()
}

fn company_from_subtitle(line: &str) -> Option<String> {
    line.split(SEPARATOR)
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
