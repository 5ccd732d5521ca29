use serde::{Deserialize, Serialize};

/// Aggregate record for one profile page. Field names on the wire follow the
/// collection backend's columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "linkedin_url")]
    pub url: Option<String>,
    pub name: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "profile_pic_url")]
    pub profile_picture_url: Option<String>,
    #[serde(rename = "banner_pic_url")]
    pub banner_picture_url: Option<String>,
    pub website: Option<String>,
    #[serde(rename = "followers")]
    pub follower_count: Option<String>,
    #[serde(rename = "connections")]
    pub connection_count: Option<String>,
    pub about: Option<String>,
    #[serde(default)]
    pub featured: Vec<FeaturedItem>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: Option<String>,
    pub company_name: Option<String>,
    #[serde(rename = "company_linkedin_url")]
    pub company_url: Option<String>,
    pub employment_type: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_multi_role: bool,
}

impl Experience {
    pub fn is_viable(&self) -> bool {
        self.title.is_some() || self.company_name.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub school_name: Option<String>,
    #[serde(rename = "school_linkedin_url")]
    pub school_url: Option<String>,
    pub degree_name: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub grade: Option<String>,
    pub activities: Option<String>,
    pub description: Option<String>,
}

impl Education {
    pub fn is_viable(&self) -> bool {
        self.school_name.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturedItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl FeaturedItem {
    pub fn is_viable(&self) -> bool {
        self.title.is_some() || self.description.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommender_name: Option<String>,
    pub recommender_headline: Option<String>,
    #[serde(rename = "recommender_linkedin_url")]
    pub recommender_url: Option<String>,
    pub relationship: Option<String>,
    #[serde(rename = "recommendation_text")]
    pub text: Option<String>,
}

impl Recommendation {
    pub fn is_viable(&self) -> bool {
        self.recommender_name.is_some() && self.text.is_some()
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_backend_columns() {
        let profile = Profile {
            url: Some("https://www.linkedin.com/in/jane/".into()),
            profile_picture_url: Some("https://media/pic.jpg".into()),
            follower_count: Some("1,204".into()),
            experience: vec![Experience {
                title: Some("Engineer".into()),
                company_url: Some("https://www.linkedin.com/company/acme/".into()),
                is_multi_role: true,
                ..Default::default()
            }],
            recommendations: vec![Recommendation {
                recommender_name: Some("Sam".into()),
                text: Some("Great colleague".into()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["linkedin_url"], "https://www.linkedin.com/in/jane/");
        assert_eq!(json["profile_pic_url"], "https://media/pic.jpg");
        assert_eq!(json["followers"], "1,204");
        assert!(json["connections"].is_null());
        assert_eq!(json["experience"][0]["company_linkedin_url"], "https://www.linkedin.com/company/acme/");
        assert_eq!(json["experience"][0]["is_multi_role"], true);
        assert_eq!(json["recommendations"][0]["recommendation_text"], "Great colleague");
        assert!(json["skills"].as_array().unwrap().is_empty());
    }

    #[test]
    fn featured_type_key() {
        let item = FeaturedItem {
            title: Some("Talk".into()),
            kind: Some("Link".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "Link");
    }

    #[test]
    fn viability_rules() {
        assert!(!Experience::default().is_viable());
        assert!(Experience { company_name: Some("Acme".into()), ..Default::default() }.is_viable());
        assert!(!Education { degree_name: Some("BS".into()), ..Default::default() }.is_viable());
        assert!(!FeaturedItem { link: Some("https://x".into()), ..Default::default() }.is_viable());
        assert!(!Recommendation { recommender_name: Some("Sam".into()), ..Default::default() }.is_viable());
    }
}
