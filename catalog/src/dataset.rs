use serde::{Deserialize, Serialize};

/// Course level. Foundation courses are entry-level; advanced courses build on
/// one or more prerequisites.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Foundation,
    Advanced,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Foundation => "Foundation",
            Level::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub role: String,
    pub level: String,
    pub salary_range: String,
    pub job_openings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_increase: Option<String>,
}

/// Share of job holders per education category, in percent.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Education {
    #[serde(rename = "subBA")]
    pub sub_ba: u8,
    pub bachelors: u8,
    pub graduate: u8,
}

impl Education {
    pub fn total(&self) -> u32 {
        u32::from(self.sub_ba) + u32::from(self.bachelors) + u32::from(self.graduate)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    pub code: String,
    pub level: Level,
    pub description: String,
    pub prerequisites: Vec<String>,
    pub tech_prep: Vec<String>,
    pub domain: String,
    pub subdomain: String,
    pub outcomes: Vec<Outcome>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub education: Education,
}

impl Course {
    /// The headline outcome shown on cards and panels.
    pub fn primary_outcome(&self) -> Option<&Outcome> {
        self.outcomes.first()
    }

    pub fn requires(&self, course_id: &str) -> bool {
        self.prerequisites.iter().any(|id| id == course_id)
    }
}

/// One stage of a pathway: the course taken and the role it leads to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub course_id: String,
    pub role: String,
    pub level: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_increase: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pathway {
    pub id: String,
    pub name: String,
    pub description: String,
    pub courses: Vec<String>,
    pub progression: Vec<Progression>,
    pub total_duration: String,
    pub career_outlook: String,
    pub domain: String,
}

impl Pathway {
    pub fn includes(&self, course_id: &str) -> bool {
        self.courses.iter().any(|id| id == course_id)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dataset {
    pub courses: Vec<Course>,
    pub pathways: Vec<Pathway>,
}
