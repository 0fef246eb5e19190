//! JSON import/export of the data store.

use tracing::debug;

use super::ResumeData;
use crate::error::ResumeError;

impl ResumeData {
    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, ResumeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a data file and repair its section order.
    pub fn from_json(json: &str) -> Result<Self, ResumeError> {
        let mut data: ResumeData = serde_json::from_str(json)?;
        data.sync_section_order();
        debug!(
            sections = data.section_order.len(),
            custom = data.custom_sections.len(),
            "Loaded resume data"
        );
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::{
        Certification, CustomEntry, Education, Experience, Project, SectionId, SkillKind,
    };
    use pretty_assertions::assert_eq;

    fn sample() -> ResumeData {
        let mut data = ResumeData::default();
        data.personal.name = "Jane Doe".into();
        data.personal.email = "jane@example.com".into();
        data.personal.summary = "Line one\nLine two".into();
        data.push_education(Education {
            degree: "BSc".into(),
            institution: "MIT".into(),
            year: "2020".into(),
            gpa: "3.9".into(),
        });
        data.push_experience(Experience {
            position: "Engineer".into(),
            company: "Acme".into(),
            duration: "2020 - 2024".into(),
            description: "Built things".into(),
        });
        data.push_project(Project {
            name: "Widget".into(),
            ..Default::default()
        });
        data.push_certification(Certification {
            name: "CKA".into(),
            issuer: "CNCF".into(),
            date: "2023".into(),
        });
        data.set_skills(SkillKind::Languages, "English\nGerman");
        data.add_custom_entry(
            "Awards",
            CustomEntry {
                title: "Best Paper".into(),
                date: "2022".into(),
                description: String::new(),
            },
        )
        .unwrap();
        data.move_section_up(2);
        data
    }

    #[test]
    fn test_round_trip_without_image() {
        let data = sample();
        let json = data.to_json().unwrap();
        assert_eq!(ResumeData::from_json(&json).unwrap(), data);
        assert!(json.contains("\"profileImage\": null"));
        assert!(json.contains("\n  \"personal\": {"));
    }

    #[test]
    fn test_round_trip_with_image() {
        let mut data = sample();
        data.personal.profile_image = Some((0..=255).collect());
        let json = data.to_json().unwrap();
        assert_eq!(ResumeData::from_json(&json).unwrap(), data);
    }

    #[test]
    fn test_round_trip_with_empty_image() {
        let mut data = sample();
        data.personal.profile_image = Some(Vec::new());
        let json = data.to_json().unwrap();
        assert!(json.contains("\"profileImage\": \"\""));
        assert_eq!(ResumeData::from_json(&json).unwrap(), data);
    }

    #[test]
    fn test_camel_case_keys() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("customSections").is_some());
        assert!(value.get("sectionOrder").is_some());
        assert_eq!(value["sectionOrder"][1], "skills");
        assert_eq!(value["sectionOrder"][5], "Awards");
    }

    #[test]
    fn test_legacy_file() {
        let json = r#"{
            "personal": {"name": "Old", "email": null, "profile_image": ""},
            "education": null,
            "skills": {"technical": ["Rust"]},
            "custom_sections": {"Awards": [{"title": "X"}]},
            "section_order": ["personal", "skills", "education"]
        }"#;
        let data = ResumeData::from_json(json).unwrap();
        assert_eq!(data.personal.name, "Old");
        assert_eq!(data.personal.email, "");
        assert_eq!(data.personal.profile_image, Some(vec![]));
        assert!(data.education.is_empty());
        assert_eq!(data.skills.technical, vec!["Rust"]);
        assert_eq!(
            data.section_order,
            vec![
                SectionId::Skills,
                SectionId::Education,
                SectionId::Experience,
                SectionId::Projects,
                SectionId::Certifications,
                SectionId::Custom("Awards".into()),
            ]
        );
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(ResumeData::from_json("{}").unwrap(), ResumeData::default());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            ResumeData::from_json("{not json"),
            Err(ResumeError::Json(_))
        ));
    }
}
