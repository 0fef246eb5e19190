//! # Resume Data Store
//!
//! [`ResumeData`] is the in-memory record the renderer reads and the caller
//! edits. It is an owned value passed around explicitly; there is no global
//! store.
//!
//! ## Example
//!
//! ```
//! use resume_builder::resume::{Education, ResumeData, SectionId};
//!
//! let mut data = ResumeData::default();
//! data.personal.name = "Jane Doe".into();
//! data.push_education(Education {
//!     degree: "BSc Physics".into(),
//!     institution: "MIT".into(),
//!     ..Default::default()
//! });
//! data.move_section_down(0);
//! assert_eq!(data.section_order[1], SectionId::Education);
//!
//! let json = data.to_json()?;
//! assert_eq!(ResumeData::from_json(&json)?, data);
//! # Ok::<(), resume_builder::ResumeError>(())
//! ```

mod json;
mod section;
mod types;

pub use section::SectionId;
pub use types::{
    Certification, CustomEntry, Education, Experience, Personal, Project, SkillKind, Skills,
};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ResumeError;
use types::null_as_default;

/// Identifier older data files keep at the head of `sectionOrder`.
const LEGACY_PERSONAL: &str = "personal";

/// Root aggregate of everything printed on a resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeData {
    #[serde(deserialize_with = "null_as_default")]
    pub personal: Personal,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Skills,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<Certification>,
    /// Sections keyed by name, ordered so output is deterministic.
    #[serde(alias = "custom_sections", deserialize_with = "null_as_default")]
    pub custom_sections: BTreeMap<String, Vec<CustomEntry>>,
    #[serde(alias = "section_order", deserialize_with = "null_as_default")]
    pub section_order: Vec<SectionId>,
}

impl Default for ResumeData {
    fn default() -> Self {
        Self {
            personal: Personal::default(),
            education: Vec::new(),
            experience: Vec::new(),
            skills: Skills::default(),
            projects: Vec::new(),
            certifications: Vec::new(),
            custom_sections: BTreeMap::new(),
            section_order: SectionId::BUILT_IN.to_vec(),
        }
    }
}

impl ResumeData {
    pub fn push_education(&mut self, entry: Education) {
        self.education.push(entry);
    }

    pub fn push_experience(&mut self, entry: Experience) {
        self.experience.push(entry);
    }

    pub fn push_project(&mut self, entry: Project) {
        self.projects.push(entry);
    }

    pub fn push_certification(&mut self, entry: Certification) {
        self.certifications.push(entry);
    }

    /// Append an entry to a custom section, creating the section (and its
    /// `sectionOrder` slot) on first use.
    ///
    /// Names that are blank or collide with a built-in identifier are
    /// rejected.
    pub fn add_custom_entry(&mut self, section: &str, entry: CustomEntry) -> Result<(), ResumeError> {
        let name = section.trim();
        if name.is_empty() {
            return Err(ResumeError::InvalidSection(
                "custom section name is empty".to_string(),
            ));
        }
        let id = SectionId::from(name);
        if !id.is_custom() || name == LEGACY_PERSONAL {
            return Err(ResumeError::InvalidSection(format!(
                "'{}' is a reserved section name",
                name
            )));
        }

        self.custom_sections
            .entry(name.to_string())
            .or_default()
            .push(entry);
        if !self.section_order.contains(&id) {
            self.section_order.push(id);
        }
        Ok(())
    }

    /// Remove entry `index` from `section`.
    ///
    /// Skills are edited per group with [`set_skills`](Self::set_skills)
    /// and cannot be removed by index. On error the store is unchanged.
    pub fn remove_entry(&mut self, section: &SectionId, index: usize) -> Result<(), ResumeError> {
        match section {
            SectionId::Education => remove_at(&mut self.education, section, index),
            SectionId::Experience => remove_at(&mut self.experience, section, index),
            SectionId::Projects => remove_at(&mut self.projects, section, index),
            SectionId::Certifications => remove_at(&mut self.certifications, section, index),
            SectionId::Skills => Err(ResumeError::InvalidSection(
                "skills are replaced per group, not removed by index".to_string(),
            )),
            SectionId::Custom(name) => match self.custom_sections.get_mut(name) {
                Some(entries) => remove_at(entries, section, index),
                None => Err(ResumeError::InvalidSection(format!(
                    "no custom section named '{}'",
                    name
                ))),
            },
        }
    }

    /// Replace one skill group from multi-line text, one skill per line.
    pub fn set_skills(&mut self, kind: SkillKind, text: &str) {
        *self.skills.get_mut(kind) = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
    }

    /// Swap the section at `index` with the one before it.
    pub fn move_section_up(&mut self, index: usize) {
        if index > 0 && index < self.section_order.len() {
            self.section_order.swap(index - 1, index);
        }
    }

    /// Swap the section at `index` with the one after it.
    pub fn move_section_down(&mut self, index: usize) {
        if index + 1 < self.section_order.len() {
            self.section_order.swap(index, index + 1);
        }
    }

    /// Make `section_order` list every built-in section and every custom
    /// section exactly once.
    ///
    /// Keeps the relative order of valid entries, drops duplicates and
    /// custom names with no section (which covers the legacy `"personal"`
    /// slot unless a custom section really has that name), then appends
    /// whatever is missing.
    pub fn sync_section_order(&mut self) {
        let mut order: Vec<SectionId> = Vec::with_capacity(self.section_order.len());

        for id in self.section_order.drain(..) {
            let keep = match &id {
                SectionId::Custom(name) => self.custom_sections.contains_key(name),
                _ => true,
            };
            if keep && !order.contains(&id) {
                order.push(id);
            }
        }

        for id in SectionId::BUILT_IN {
            if !order.contains(&id) {
                order.push(id);
            }
        }
        for name in self.custom_sections.keys() {
            let id = SectionId::Custom(name.clone());
            if !order.contains(&id) {
                order.push(id);
            }
        }

        self.section_order = order;
    }
}

fn remove_at<T>(entries: &mut Vec<T>, section: &SectionId, index: usize) -> Result<(), ResumeError> {
    if index >= entries.len() {
        return Err(ResumeError::InvalidSection(format!(
            "{} has no entry {} ({} entries)",
            section,
            index,
            entries.len()
        )));
    }
    entries.remove(index);
    Ok(())
}
