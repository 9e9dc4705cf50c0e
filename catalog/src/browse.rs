//! Card and panel views for the catalog browser.
//!
//! Builders here combine the [`Catalog`] with the current [`ViewState`] and
//! config limits. They return plain serializable data so the renderer never
//! queries the catalog itself.

use serde::Serialize;

use crate::core::query::Catalog;
use crate::core::types::{JobOpeningsSize, OpeningsThresholds};
use crate::core::view::{Selection, ViewState};
use crate::dataset::{Course, Level, Outcome, Pathway};
use crate::io::config::DetailConfig;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutcomeView {
    pub role: String,
    pub level: String,
    pub salary_range: String,
    /// Thousands-separated, e.g. `1,200`.
    pub job_openings: String,
    pub salary_increase: Option<String>,
}

impl OutcomeView {
    fn from_outcome(outcome: &Outcome) -> Self {
        Self {
            role: outcome.role.clone(),
            level: outcome.level.clone(),
            salary_range: outcome.salary_range.clone(),
            job_openings: format_count(outcome.job_openings),
            salary_increase: outcome.salary_increase.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CourseCard {
    pub id: String,
    pub code: String,
    pub name: String,
    pub level_label: &'static str,
    pub highlighted: bool,
    /// Codes of the resolved prerequisites.
    pub prerequisites: Vec<String>,
    pub outcome: Option<OutcomeView>,
    pub openings_size: Option<JobOpeningsSize>,
    pub next_count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CourseSection {
    pub title: &'static str,
    pub cards: Vec<CourseCard>,
}

/// Filtered courses grouped by level.
///
/// The foundation section is always present; the advanced section only when
/// it has cards.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CourseListing {
    pub sections: Vec<CourseSection>,
}

impl CourseListing {
    pub fn card_ids(&self) -> Vec<&str> {
        self.sections
            .iter()
            .flat_map(|section| section.cards.iter().map(|card| card.id.as_str()))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathwayCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub course_count: usize,
    pub total_duration: String,
    pub domain: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CourseRef {
    pub id: String,
    pub code: String,
    pub name: String,
}

impl CourseRef {
    fn from_course(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            code: course.code.clone(),
            name: course.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathwayRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EducationView {
    pub sub_ba: u8,
    pub bachelors: u8,
    pub graduate: u8,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CoursePanel {
    pub id: String,
    pub code: String,
    pub name: String,
    pub level_label: &'static str,
    pub description: String,
    pub subdomain: String,
    pub prerequisites: Vec<CourseRef>,
    pub tech_prep: Vec<String>,
    pub outcome: Option<OutcomeView>,
    pub next_steps: Vec<CourseRef>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub education: EducationView,
    pub pathways: Vec<PathwayRef>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StageView {
    pub step: usize,
    pub course_name: String,
    pub role: String,
    pub level: String,
    /// Duration plus the salary increase when one is recorded.
    pub timing: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathwayPanel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub total_duration: String,
    pub course_count: usize,
    pub stages: Vec<StageView>,
    pub career_outlook: String,
}

/// The side panel for whatever is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    Course(CoursePanel),
    Pathway(PathwayPanel),
}

pub fn course_card(
    catalog: &Catalog,
    course: &Course,
    view: &ViewState,
    thresholds: &OpeningsThresholds,
) -> CourseCard {
    let outcome = course.primary_outcome();
    CourseCard {
        id: course.id.clone(),
        code: course.code.clone(),
        name: course.name.clone(),
        level_label: course.level.label(),
        highlighted: view.is_highlighted_course(&course.id),
        prerequisites: catalog
            .course_prerequisites(&course.id)
            .into_iter()
            .map(|prereq| prereq.code.clone())
            .collect(),
        outcome: outcome.map(OutcomeView::from_outcome),
        openings_size: outcome
            .map(|outcome| JobOpeningsSize::classify(outcome.job_openings, thresholds)),
        next_count: catalog.next_courses(&course.id).len(),
    }
}

pub fn course_listing(
    catalog: &Catalog,
    view: &ViewState,
    thresholds: &OpeningsThresholds,
) -> CourseListing {
    let filtered = catalog.filter_courses(&view.filter);
    let cards_for = |level: Level| -> Vec<CourseCard> {
        filtered
            .iter()
            .filter(|course| course.level == level)
            .map(|course| course_card(catalog, course, view, thresholds))
            .collect()
    };

    let mut sections = vec![CourseSection {
        title: "Foundation Courses",
        cards: cards_for(Level::Foundation),
    }];
    let advanced = cards_for(Level::Advanced);
    if !advanced.is_empty() {
        sections.push(CourseSection {
            title: "Advanced Courses",
            cards: advanced,
        });
    }
    CourseListing { sections }
}

pub fn pathway_card(pathway: &Pathway, view: &ViewState) -> PathwayCard {
    PathwayCard {
        id: pathway.id.clone(),
        name: pathway.name.clone(),
        description: pathway.description.clone(),
        course_count: pathway.courses.len(),
        total_duration: pathway.total_duration.clone(),
        domain: pathway.domain.clone(),
        highlighted: view.is_highlighted_pathway(&pathway.id),
    }
}

pub fn pathway_listing(catalog: &Catalog, view: &ViewState) -> Vec<PathwayCard> {
    catalog
        .filter_pathways(&view.filter)
        .into_iter()
        .map(|pathway| pathway_card(pathway, view))
        .collect()
}

/// Detail panel for `course_id`, or `None` if it does not resolve.
pub fn course_panel(
    catalog: &Catalog,
    course_id: &str,
    limits: &DetailConfig,
) -> Option<CoursePanel> {
    let course = catalog.course_by_id(course_id)?;
    Some(CoursePanel {
        id: course.id.clone(),
        code: course.code.clone(),
        name: course.name.clone(),
        level_label: course.level.label(),
        description: course.description.clone(),
        subdomain: course.subdomain.clone(),
        prerequisites: catalog
            .course_prerequisites(course_id)
            .into_iter()
            .map(CourseRef::from_course)
            .collect(),
        tech_prep: course.tech_prep.clone(),
        outcome: course.primary_outcome().map(OutcomeView::from_outcome),
        next_steps: catalog
            .next_courses(course_id)
            .into_iter()
            .map(CourseRef::from_course)
            .collect(),
        skills: course
            .skills
            .iter()
            .take(limits.max_skills)
            .cloned()
            .collect(),
        certifications: course
            .certifications
            .iter()
            .take(limits.max_certifications)
            .cloned()
            .collect(),
        education: EducationView {
            sub_ba: course.education.sub_ba,
            bachelors: course.education.bachelors,
            graduate: course.education.graduate,
        },
        pathways: catalog
            .pathways_by_course(course_id)
            .into_iter()
            .map(|pathway| PathwayRef {
                id: pathway.id.clone(),
                name: pathway.name.clone(),
            })
            .collect(),
    })
}

/// Detail panel for `pathway_id`, or `None` if it does not resolve.
pub fn pathway_panel(catalog: &Catalog, pathway_id: &str) -> Option<PathwayPanel> {
    let pathway = catalog.pathway_by_id(pathway_id)?;
    let stages = catalog
        .pathway_stages(pathway_id)
        .into_iter()
        .map(|stage| {
            let progression = stage.progression;
            let timing = match &progression.salary_increase {
                Some(increase) => format!(
                    "Duration: {} - Salary increase: {}",
                    progression.duration, increase
                ),
                None => format!("Duration: {}", progression.duration),
            };
            StageView {
                step: stage.step,
                course_name: stage
                    .course
                    .map(|course| course.name.clone())
                    .unwrap_or_else(|| progression.course_id.clone()),
                role: progression.role.clone(),
                level: progression.level.clone(),
                timing,
            }
        })
        .collect();

    Some(PathwayPanel {
        id: pathway.id.clone(),
        name: pathway.name.clone(),
        description: pathway.description.clone(),
        total_duration: pathway.total_duration.clone(),
        course_count: pathway.courses.len(),
        stages,
        career_outlook: pathway.career_outlook.clone(),
    })
}

/// Panel for the current selection. A selection that no longer resolves shows
/// nothing.
pub fn selected_detail(
    catalog: &Catalog,
    view: &ViewState,
    limits: &DetailConfig,
) -> Option<Detail> {
    match &view.selection {
        Selection::None => None,
        Selection::Course(id) => course_panel(catalog, id, limits).map(Detail::Course),
        Selection::Pathway(id) => pathway_panel(catalog, id).map(Detail::Pathway),
    }
}

/// Format `n` with `,` thousands separators.
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::{CatalogFilter, DomainFilter};
    use crate::core::types::ActiveView;
    use crate::test_support::{course, dataset, pathway};

    fn catalog() -> Catalog {
        let mut net = course("net", Level::Advanced, &["support"]);
        net.outcomes[0].job_openings = 2500;
        net.outcomes[0].salary_increase = Some("20-25%".to_string());
        net.skills = (1..=8).map(|n| format!("skill {}", n)).collect();
        net.certifications = (1..=5).map(|n| format!("cert {}", n)).collect();
        let mut path = pathway("ops", &["support", "net"]);
        path.progression[1].salary_increase = Some("20-25%".to_string());
        Catalog::new(dataset(
            vec![course("support", Level::Foundation, &[]), net],
            vec![path],
        ))
        .expect("catalog")
    }

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(800), "800");
        assert_eq!(format_count(1200), "1,200");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn card_summarizes_relationships() {
        let catalog = catalog();
        let mut view = ViewState::default();
        view.select_course("net");
        let thresholds = OpeningsThresholds::default();

        let support = catalog.course_by_id("support").expect("support");
        let card = course_card(&catalog, support, &view, &thresholds);
        assert_eq!(card.next_count, 1);
        assert!(card.prerequisites.is_empty());
        assert!(!card.highlighted);
        assert_eq!(card.openings_size, Some(JobOpeningsSize::Small));

        let net = catalog.course_by_id("net").expect("net");
        let card = course_card(&catalog, net, &view, &thresholds);
        assert_eq!(card.prerequisites, vec!["SUPPORT"]);
        assert!(card.highlighted);
        assert_eq!(card.openings_size, Some(JobOpeningsSize::Large));
        assert_eq!(
            card.outcome.map(|outcome| outcome.job_openings),
            Some("2,500".to_string())
        );
    }

    #[test]
    fn listing_omits_empty_advanced_section() {
        let catalog = catalog();
        let thresholds = OpeningsThresholds::default();

        let all = course_listing(&catalog, &ViewState::default(), &thresholds);
        let titles: Vec<&str> = all.sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Foundation Courses", "Advanced Courses"]);
        assert_eq!(all.card_ids(), vec!["support", "net"]);

        let view = ViewState::new(
            CatalogFilter::new(DomainFilter::All, "SUPPORT NAME"),
            ActiveView::Courses,
        );
        let filtered = course_listing(&catalog, &view, &thresholds);
        let titles: Vec<&str> = filtered.sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Foundation Courses"]);
        assert_eq!(filtered.card_ids(), vec!["support"]);
    }

    #[test]
    fn course_panel_truncates_skills_and_certifications() {
        let catalog = catalog();
        let panel = course_panel(&catalog, "net", &DetailConfig::default()).expect("panel");
        assert_eq!(panel.skills.len(), 6);
        assert_eq!(panel.certifications, vec!["cert 1", "cert 2", "cert 3"]);
        assert_eq!(panel.prerequisites[0].id, "support");
        assert!(panel.next_steps.is_empty());
        assert_eq!(panel.pathways[0].id, "ops");
        assert!(course_panel(&catalog, "missing", &DetailConfig::default()).is_none());
    }

    #[test]
    fn pathway_panel_numbers_stages() {
        let catalog = catalog();
        let panel = pathway_panel(&catalog, "ops").expect("panel");
        assert_eq!(panel.course_count, 2);
        assert_eq!(panel.stages[0].step, 1);
        assert_eq!(panel.stages[0].course_name, "support name");
        assert_eq!(panel.stages[0].timing, "Duration: 4 weeks");
        assert_eq!(
            panel.stages[1].timing,
            "Duration: 4 weeks - Salary increase: 20-25%"
        );
        assert!(pathway_panel(&catalog, "missing").is_none());
    }

    #[test]
    fn selected_detail_follows_selection() {
        let catalog = catalog();
        let limits = DetailConfig::default();
        let mut view = ViewState::default();
        assert_eq!(selected_detail(&catalog, &view, &limits), None);

        view.select_pathway("ops");
        assert!(matches!(
            selected_detail(&catalog, &view, &limits),
            Some(Detail::Pathway(panel)) if panel.id == "ops"
        ));

        view.select_course("ghost");
        assert_eq!(selected_detail(&catalog, &view, &limits), None);
    }
}
