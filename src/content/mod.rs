//! # Portfolio content
//!
//! Everything the page shows as text lives in a [`PortfolioContent`] value,
//! deserialized from RON. A default document is compiled into the binary;
//! `VITRINE_CONTENT` can point at a replacement file.

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, VitrineError},
    gfx::color::parse_hex,
};

const BUILTIN: &str = include_str!("portfolio.ron");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub subtitle: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counter {
    pub label: String,
    pub value: u32,
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub heading: String,
    /// Emphasized tail of the heading
    pub emphasis: String,
    pub description: String,
    pub counters: Vec<Counter>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCard {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Software {
    pub name: String,
    /// Proficiency in percent
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub cards: Vec<SkillCard>,
    pub software: Vec<Software>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub dates: String,
    pub company: String,
    pub role: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub software: Vec<String>,
    pub description: String,
    /// `#RRGGBB`
    pub color: String,
    /// `#RRGGBB`
    pub accent: String,
}

impl Project {
    /// Thumbnail gradient end points as packed sRGB
    pub fn gradient(&self) -> (u32, u32) {
        (
            parse_hex(&self.color).unwrap_or(0x000000),
            parse_hex(&self.accent).unwrap_or(0x000000),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub years: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactItem {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub emphasis: String,
    pub subtitle: String,
    pub items: Vec<ContactItem>,
    pub availability: String,
    pub footer_copy: String,
    pub footer_note: String,
}

/// The whole page text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub about: About,
    pub skills: Skills,
    pub experience: Experience,
    pub projects: Vec<Project>,
    pub education: Education,
    pub contact: Contact,
}

impl PortfolioContent {
    /// The content compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_ron(BUILTIN)
    }

    pub fn from_ron(text: &str) -> Result<Self> {
        let content: Self = ron::from_str(text)?;
        content.validate()?;
        Ok(content)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let content = Self::from_ron(&text)?;
        log::info!("Loaded portfolio content from {}", path.display());
        Ok(content)
    }

    /// Letters of the hero title, spaces included
    pub fn title_letters(&self) -> Vec<char> {
        self.profile.name.to_uppercase().chars().collect()
    }

    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    pub fn validate(&self) -> Result<()> {
        for software in &self.skills.software {
            if software.level > 100 {
                return Err(VitrineError::InvalidContent(format!(
                    "software '{}' has level {} (expected 0-100)",
                    software.name, software.level
                )));
            }
        }

        let mut ids = HashSet::new();
        for project in &self.projects {
            if !ids.insert(project.id) {
                return Err(VitrineError::InvalidContent(format!(
                    "duplicate project id {}",
                    project.id
                )));
            }
            for color in [&project.color, &project.accent] {
                if parse_hex(color).is_none() {
                    return Err(VitrineError::InvalidContent(format!(
                        "project {} has invalid color '{}'",
                        project.id, color
                    )));
                }
            }
        }

        if self.profile.name.trim().is_empty() {
            return Err(VitrineError::InvalidContent("profile name is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_valid() {
        let content = PortfolioContent::builtin().unwrap();
        assert_eq!(content.projects.len(), 5);
        assert_eq!(content.skills.software.len(), 4);
        assert_eq!(content.title_letters().len(), 9);
    }

    #[test]
    fn duplicate_project_ids_are_rejected() {
        let mut content = PortfolioContent::builtin().unwrap();
        content.projects[1].id = content.projects[0].id;
        assert!(matches!(
            content.validate(),
            Err(VitrineError::InvalidContent(_))
        ));
    }

    #[test]
    fn out_of_range_levels_and_bad_colors_are_rejected() {
        let mut content = PortfolioContent::builtin().unwrap();
        content.skills.software[0].level = 101;
        assert!(content.validate().is_err());

        let mut content = PortfolioContent::builtin().unwrap();
        content.projects[0].accent = "beige".into();
        assert!(content.validate().is_err());
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        assert!(matches!(
            PortfolioContent::from_ron("(profile: ("),
            Err(VitrineError::ContentParse(_))
        ));
    }
}
