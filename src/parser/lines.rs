use std::sync::LazyLock;

use regex::Regex;

use crate::profile::{Education, Experience};

static ROLE_DATES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+ \d{4} - (?:\w+ \d{4}|Present)").unwrap());
static SCHOOL_DATES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\w+ )?\d{4} - (?:(?:\w+ )?\d{4}|Present)").unwrap());
static PLACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\w\s]+, [\w\s]+").unwrap());

const SEPARATOR: char = '·';
const EMPLOYMENT_KEYWORDS: &[&str] = &[
    "full-time",
    "part-time",
    "self-employed",
    "freelance",
    "contract",
    "internship",
    "apprenticeship",
    "seasonal",
];
const WORKPLACE_MARKERS: &[&str] = &["Remote", "On-site", "Hybrid"];
const DEGREE_WORDS: &[&str] = &["bachelor", "master", "phd", "ph.d", "degree", "doctor"];
const DEGREE_ABBREVIATIONS: &[&str] = &[
    "bs", "bsc", "ba", "bfa", "beng", "ms", "msc", "ma", "mfa", "meng", "mba", "phd", "md", "jd",
    "llb", "llm",
];

/// One piece of information recovered from a free-text line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fact {
    Dates {
        start: String,
        end: String,
        duration: Option<String>,
    },
    EmploymentType(String),
    CompanyHint(String),
    Location(String),
    Degree {
        name: String,
        field: Option<String>,
    },
    Grade(String),
    Activities(String),
}

/// A rule either claims a line (returning its facts) or passes.
pub type Rule = fn(&str) -> Option<Vec<Fact>>;

pub const EXPERIENCE_RULES: &[Rule] = &[role_dates, employment_type, location];
pub const EDUCATION_RULES: &[Rule] = &[school_dates, degree, grade, activities];

/// First rule that claims the line wins. Unclaimed lines yield nothing.
pub fn classify(line: &str, rules: &[Rule]) -> Vec<Fact> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }
    rules.iter().find_map(|rule| rule(line)).unwrap_or_default()
}

pub fn classify_all<S: AsRef<str>>(lines: &[S], rules: &[Rule]) -> Vec<Fact> {
    lines
        .iter()
        .flat_map(|l| classify(l.as_ref(), rules))
        .collect()
}

/// Fold facts into an entry in order; a later fact overwrites an earlier one.
/// A company hint only fills a company name that is still missing.
pub fn apply_experience(entry: &mut Experience, facts: Vec<Fact>) {
    let mut hint = None;
    for fact in facts {
        match fact {
            Fact::Dates { start, end, duration } => {
                entry.start_date = Some(start);
                entry.end_date = Some(end);
                entry.duration = duration;
            }
            Fact::EmploymentType(t) => entry.employment_type = Some(t),
            Fact::CompanyHint(c) => hint = Some(c),
            Fact::Location(l) => entry.location = Some(l),
            _ => {}
        }
    }
    if entry.company_name.is_none() {
        entry.company_name = hint;
    }
}

pub fn apply_education(entry: &mut Education, facts: Vec<Fact>) {
    for fact in facts {
        match fact {
            Fact::Dates { start, end, .. } => {
                entry.start_date = Some(start);
                entry.end_date = Some(end);
            }
            Fact::Degree { name, field } => {
                entry.degree_name = Some(name);
                entry.field_of_study = field;
            }
            Fact::Grade(g) => entry.grade = Some(g),
            Fact::Activities(a) => entry.activities = Some(a),
            _ => {}
        }
    }
}

/// `"<Degree>, <Field>"` split at the first comma; the field keeps any later
/// commas.
pub fn split_degree(line: &str) -> (Option<String>, Option<String>) {
    let (name, field) = match line.split_once(',') {
        Some((name, field)) => (name, field),
        None => (line, ""),
    };
    (non_empty(name), non_empty(field))
}

// ── Rules ──

fn role_dates(line: &str) -> Option<Vec<Fact>> {
    ROLE_DATES_RE.is_match(line).then(|| split_dates(line)).flatten()
}

fn school_dates(line: &str) -> Option<Vec<Fact>> {
    SCHOOL_DATES_RE.is_match(line).then(|| split_dates(line)).flatten()
}

fn split_dates(line: &str) -> Option<Vec<Fact>> {
    let (range, duration) = match line.split_once(SEPARATOR) {
        Some((range, rest)) => (range, non_empty(rest)),
        None => (line, None),
    };
    let (start, end) = range.trim().split_once(" - ")?;
    Some(vec![Fact::Dates {
        start: start.trim().to_string(),
        end: end.trim().to_string(),
        duration,
    }])
}

fn employment_type(line: &str) -> Option<Vec<Fact>> {
    if !line.contains(SEPARATOR) {
        return None;
    }
    let segments: Vec<&str> = line.split(SEPARATOR).map(str::trim).collect();
    let is_type = |s: &str| {
        let lower = s.to_lowercase();
        EMPLOYMENT_KEYWORDS.iter().any(|kw| lower.contains(kw))
    };
    // The type normally follows the company; a leading type only counts
    // when nothing after the separator names one.
    let idx = (1..segments.len())
        .find(|&i| is_type(segments[i]))
        .or_else(|| is_type(segments[0]).then_some(0))?;

    let mut facts = vec![Fact::EmploymentType(segments[idx].to_string())];
    if idx > 0 && !segments[0].is_empty() {
        facts.push(Fact::CompanyHint(segments[0].to_string()));
    }
    Some(facts)
}

fn location(line: &str) -> Option<Vec<Fact>> {
    let is_place = PLACE_RE.is_match(line) || WORKPLACE_MARKERS.iter().any(|m| line.contains(m));
    is_place.then(|| vec![Fact::Location(line.to_string())])
}

fn degree(line: &str) -> Option<Vec<Fact>> {
    if !line.contains(',') || !has_degree_keyword(line) {
        return None;
    }
    let (name, field) = split_degree(line);
    Some(vec![Fact::Degree {
        name: name?,
        field,
    }])
}

fn has_degree_keyword(line: &str) -> bool {
    let lower = line.to_lowercase();
    if DEGREE_WORDS.iter().any(|w| lower.contains(w)) {
        return true;
    }
    lower
        .split(|c: char| !c.is_alphanumeric() && c != '.')
        .map(|w| w.replace('.', ""))
        .any(|w| DEGREE_ABBREVIATIONS.contains(&w.as_str()))
}

fn grade(line: &str) -> Option<Vec<Fact>> {
    let value = strip_prefix_ci(line, "grade:")?;
    Some(non_empty(value).map(Fact::Grade).into_iter().collect())
}

fn activities(line: &str) -> Option<Vec<Fact>> {
    let value = strip_prefix_ci(line, "activities and societies:")?;
    Some(non_empty(value).map(Fact::Activities).into_iter().collect())
}

fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &line[prefix.len()..])
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

// ── Tests ──
