use scraper::ElementRef;
use tracing::{debug, info};

use crate::page::{Anchor, Field, Page};
use crate::parser::lines::{self, EDUCATION_RULES};
use crate::profile::Education;

pub fn extract(page: &Page) -> Vec<Education> {
    let Some(section) = page.locate(Anchor::Education) else {
        debug!("No education section");
        return Vec::new();
    };

    let entries: Vec<Education> = page
        .items(Field::ListItem, section)
        .into_iter()
        .filter_map(|item| entry(page, item))
        .collect();

    info!("Education items found: {}", entries.len());
    entries
}

fn entry(page: &Page, item: ElementRef<'_>) -> Option<Education> {
    let mut edu = Education {
        school_name: page.text(Field::EntityTitle, item),
        school_url: page.attr(Field::EntityLink, "href", item),
        description: page.expanded_text(Field::Description, item),
        ..Default::default()
    };
    if !edu.is_viable() {
        debug!("Education item without school name, skipped");
        return None;
    }

    let text_lines = page.all_text(Field::EducationLines, item);
    lines::apply_education(&mut edu, lines::classify_all(&text_lines, EDUCATION_RULES));

    // No recognised degree keyword: the line under the school name is the degree.
    if edu.degree_name.is_none() && edu.field_of_study.is_none() {
        if let Some(line) = page.text(Field::EntitySubtitle, item) {
            let repeats_school = edu
                .school_name
                .as_deref()
                .is_some_and(|school| line.contains(school));
            if !repeats_school {
                let (degree, field) = lines::split_degree(&line);
                edu.degree_name = degree;
                edu.field_of_study = field;
            }
        }
    }

    Some(edu)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Page {
        let html = std::fs::read_to_string("tests/fixtures/full_profile.html").unwrap();
        Page::parse(&html)
    }

    #[test]
    fn degree_dates_grade_activities() {
        let entries = extract(&fixture());
        assert_eq!(entries.len(), 2);
        let mit = &entries[0];
        assert_eq!(mit.school_name.as_deref(), Some("Massachusetts Institute of Technology"));
        assert_eq!(mit.school_url.as_deref(), Some("https://www.linkedin.com/school/mit/"));
        assert_eq!(mit.degree_name.as_deref(), Some("Bachelor of Science"));
        assert_eq!(mit.field_of_study.as_deref(), Some("Computer Science, AI"));
        assert_eq!(mit.start_date.as_deref(), Some("2012"));
        assert_eq!(mit.end_date.as_deref(), Some("2016"));
        assert_eq!(mit.grade.as_deref(), Some("4.8/5.0"));
        assert_eq!(mit.activities.as_deref(), Some("Robotics Club, Chess Team"));
        assert_eq!(mit.description.as_deref(), Some("Thesis on distributed consensus."));
    }

    #[test]
    fn subtitle_fallback_for_unrecognised_degree() {
        let entries = extract(&fixture());
        let school = &entries[1];
        assert_eq!(school.school_name.as_deref(), Some("Lakeside School"));
        assert_eq!(school.degree_name.as_deref(), Some("High School Diploma"));
        assert!(school.field_of_study.is_none());
        assert!(school.grade.is_none());
    }

    #[test]
    fn item_without_school_is_dropped() {
        let html = r#"<section><div id="education"></div>
          <div class="pvs-list__outer-container"><ul>
            <li class="artdeco-list__item">
              <span class="t-14 t-normal"><span aria-hidden="true">Master of Science, Physics</span></span>
            </li>
          </ul></div></section>"#;
        assert!(extract(&Page::parse(html)).is_empty());
    }
}
