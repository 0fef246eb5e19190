//! Section identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one block of the document in `sectionOrder`.
///
/// Serialized as a plain string: built-ins use their lowercase name, custom
/// sections use the section's own name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionId {
    Education,
    Experience,
    Skills,
    Projects,
    Certifications,
    /// User-defined section, keyed by name in `customSections`.
    Custom(String),
}

impl SectionId {
    /// Built-in sections in default render order.
    pub const BUILT_IN: [SectionId; 5] = [
        SectionId::Education,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Certifications,
    ];

    /// Identifier as stored in JSON.
    pub fn as_str(&self) -> &str {
        match self {
            SectionId::Education => "education",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Certifications => "certifications",
            SectionId::Custom(name) => name,
        }
    }

    /// Heading printed above the section.
    pub fn title(&self) -> &str {
        match self {
            SectionId::Education => "Education",
            SectionId::Experience => "Professional Experience",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Certifications => "Certifications",
            SectionId::Custom(name) => name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, SectionId::Custom(_))
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        match s {
            "education" => SectionId::Education,
            "experience" => SectionId::Experience,
            "skills" => SectionId::Skills,
            "projects" => SectionId::Projects,
            "certifications" => SectionId::Certifications,
            other => SectionId::Custom(other.to_string()),
        }
    }
}

impl From<String> for SectionId {
    fn from(s: String) -> Self {
        match SectionId::from(s.as_str()) {
            SectionId::Custom(_) => SectionId::Custom(s),
            built_in => built_in,
        }
    }
}

impl From<SectionId> for String {
    fn from(id: SectionId) -> Self {
        match id {
            SectionId::Custom(name) => name,
            built_in => built_in.as_str().to_string(),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
