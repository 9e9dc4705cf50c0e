//! Test-only helpers for constructing catalog records.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::dataset::{Course, Dataset, Education, Level, Outcome, Pathway, Progression};

/// Create a deterministic course with default fields.
pub fn course(id: &str, level: Level, prerequisites: &[&str]) -> Course {
    Course {
        id: id.to_string(),
        name: format!("{} name", id),
        code: id.to_uppercase(),
        level,
        description: format!("{} description", id),
        prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
        tech_prep: Vec::new(),
        domain: "Information Technology".to_string(),
        subdomain: "IT Support".to_string(),
        outcomes: vec![Outcome {
            role: format!("{} role", id),
            level: "Entry".to_string(),
            salary_range: "$40,000 - $55,000".to_string(),
            job_openings: 500,
            salary_increase: None,
        }],
        skills: Vec::new(),
        certifications: Vec::new(),
        education: Education {
            sub_ba: 40,
            bachelors: 55,
            graduate: 5,
        },
    }
}

/// Create a pathway with one progression stage per listed course.
pub fn pathway(id: &str, courses: &[&str]) -> Pathway {
    Pathway {
        id: id.to_string(),
        name: format!("{} name", id),
        description: format!("{} description", id),
        courses: courses.iter().map(|c| c.to_string()).collect(),
        progression: courses
            .iter()
            .map(|course_id| Progression {
                course_id: course_id.to_string(),
                role: format!("{} role", course_id),
                level: "Entry".to_string(),
                duration: "4 weeks".to_string(),
                salary_increase: None,
            })
            .collect(),
        total_duration: format!("{} weeks", courses.len() * 4),
        career_outlook: format!("{} outlook", id),
        domain: "Information Technology".to_string(),
    }
}

pub fn dataset(courses: Vec<Course>, pathways: Vec<Pathway>) -> Dataset {
    Dataset { courses, pathways }
}

/// A dataset (and optional config) written into a scratch directory.
pub struct TempCatalog {
    dir: TempDir,
}

impl TempCatalog {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.dir.path().join("dataset.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("catalog.toml")
    }

    /// Serialize `dataset` to `dataset.json` and return its path.
    pub fn write_dataset(&self, dataset: &Dataset) -> Result<PathBuf> {
        let raw = serde_json::to_string_pretty(dataset).context("serialize dataset")?;
        self.write_raw_dataset(&raw)
    }

    /// Write arbitrary text to `dataset.json`, for malformed-input tests.
    pub fn write_raw_dataset(&self, raw: &str) -> Result<PathBuf> {
        let path = self.dataset_path();
        fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    pub fn write_config(&self, contents: &str) -> Result<PathBuf> {
        let path = self.config_path();
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
