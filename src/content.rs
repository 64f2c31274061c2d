use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PROFILE_ASSET: &str = "profile.json";

pub static PROFILE: LazyLock<Profile> = LazyLock::new(|| {
    Profile::load().unwrap_or_else(|err| {
        log::error!("failed to load profile content: {err}");
        Profile::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content asset not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content: {0}")]
    ParseError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub contact: Contact,
    pub roles: Vec<String>,
    pub stats: Vec<Stat>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub competencies: Vec<String>,
    pub certifications: Vec<String>,
    pub achievements: Vec<String>,
    pub expertise: Vec<String>,
    pub languages: Vec<String>,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub leetcode: String,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub label: String,
    pub value: f64,
    pub suffix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub location: String,
    pub degree: String,
    pub period_label: String,
    pub period: String,
    pub score_label: String,
    pub score: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub date: String,
    pub category: String,
    pub summary: String,
    pub technologies: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub name: String,
    pub icon: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent, drives the progress bar.
    pub level: f64,
}

impl Profile {
    pub fn load() -> Result<Self, ContentError> {
        let file = Assets::get(PROFILE_ASSET)
            .ok_or_else(|| ContentError::NotFound(PROFILE_ASSET.to_string()))?;
        Self::from_json(&file.data)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, ContentError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn project_categories(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|p| p.category.as_str())
    }
}

pub fn profile() -> &'static Profile {
    &PROFILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_profile_loads() {
        let profile = Profile::load().expect("embedded profile should parse");
        assert_eq!(profile.name, "Piyush Bhardwaj");
        assert!(!profile.roles.is_empty());
        assert!(!profile.projects.is_empty());
        assert!(profile
            .skills
            .iter()
            .flat_map(|c| &c.skills)
            .all(|s| (0.0..=100.0).contains(&s.level)));
        assert!(profile.stats.iter().any(|s| s.value.fract() != 0.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let profile = Profile::from_json(br#"{ "name": "Someone", "roles": ["Dev"] }"#)
            .expect("partial profile should parse");
        assert_eq!(profile.name, "Someone");
        assert_eq!(profile.roles, vec!["Dev"]);
        assert!(profile.projects.is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = Profile::from_json(b"{ not json").unwrap_err();
        assert!(matches!(err, ContentError::ParseError(_)));
    }

    #[test]
    fn test_contact_links() {
        let contact = Contact {
            email: "me@example.com".to_string(),
            phone: "+91 75203 19768".to_string(),
            ..Default::default()
        };
        assert_eq!(contact.mailto(), "mailto:me@example.com");
        assert_eq!(contact.tel(), "tel:+917520319768");
    }
}
