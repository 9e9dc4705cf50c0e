//! Text rendering for listings and detail panels.

use anyhow::Result;
use minijinja::{Environment, context};
use tracing::debug;

use crate::browse::{CourseListing, CoursePanel, Detail, PathwayCard, PathwayPanel};

const COURSES_TEMPLATE: &str = include_str!("templates/courses.txt");
const PATHWAYS_TEMPLATE: &str = include_str!("templates/pathways.txt");
const COURSE_TEMPLATE: &str = include_str!("templates/course.txt");
const PATHWAY_TEMPLATE: &str = include_str!("templates/pathway.txt");

/// Template engine wrapper around minijinja.
pub struct Renderer {
    env: Environment<'static>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template("courses", COURSES_TEMPLATE)
            .expect("courses template should be valid");
        env.add_template("pathways", PATHWAYS_TEMPLATE)
            .expect("pathways template should be valid");
        env.add_template("course", COURSE_TEMPLATE)
            .expect("course template should be valid");
        env.add_template("pathway", PATHWAY_TEMPLATE)
            .expect("pathway template should be valid");
        Self { env }
    }

    pub fn course_listing(&self, listing: &CourseListing) -> Result<String> {
        debug!(sections = listing.sections.len(), "rendering course listing");
        let template = self.env.get_template("courses")?;
        Ok(template.render(context! { sections => &listing.sections })?)
    }

    pub fn pathway_listing(&self, cards: &[PathwayCard]) -> Result<String> {
        debug!(cards = cards.len(), "rendering pathway listing");
        let template = self.env.get_template("pathways")?;
        Ok(template.render(context! { pathways => cards })?)
    }

    pub fn course_panel(&self, panel: &CoursePanel) -> Result<String> {
        let template = self.env.get_template("course")?;
        Ok(template.render(context! { panel => panel })?)
    }

    pub fn pathway_panel(&self, panel: &PathwayPanel) -> Result<String> {
        let template = self.env.get_template("pathway")?;
        Ok(template.render(context! { panel => panel })?)
    }

    pub fn detail(&self, detail: &Detail) -> Result<String> {
        match detail {
            Detail::Course(panel) => self.course_panel(panel),
            Detail::Pathway(panel) => self.pathway_panel(panel),
        }
    }
}
