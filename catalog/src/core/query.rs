//! Read-only relational queries over a validated dataset.
//!
//! Prerequisites are stored as forward edges (course -> required course ids).
//! "Next courses" is the transposed adjacency and is computed on demand by a
//! reverse scan rather than materialized.

use std::collections::{BTreeSet, HashMap, HashSet};

use anyhow::{Result, bail};
use tracing::{debug, warn};

use crate::core::filter::CatalogFilter;
use crate::core::invariants::validate_dataset;
use crate::dataset::{Course, Dataset, Level, Pathway, Progression};

/// An immutable dataset plus id indices.
///
/// Construct with [`Catalog::new`], which rejects datasets with duplicate ids,
/// dangling references, bad education splits or prerequisite cycles.
#[derive(Debug, Clone)]
pub struct Catalog {
    dataset: Dataset,
    course_index: HashMap<String, usize>,
    pathway_index: HashMap<String, usize>,
}

/// A pathway progression entry resolved against the course table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathwayStage<'a> {
    /// 1-based position within the pathway.
    pub step: usize,
    pub progression: &'a Progression,
    pub course: Option<&'a Course>,
}

impl Catalog {
    pub fn new(dataset: Dataset) -> Result<Self> {
        let errors = validate_dataset(&dataset);
        if !errors.is_empty() {
            bail!("dataset invariants failed:\n- {}", errors.join("\n- "));
        }
        Ok(Self::index(dataset))
    }

    /// Build indices without validation. First occurrence of an id wins.
    fn index(dataset: Dataset) -> Self {
        let mut course_index = HashMap::new();
        for (pos, course) in dataset.courses.iter().enumerate() {
            course_index.entry(course.id.clone()).or_insert(pos);
        }
        let mut pathway_index = HashMap::new();
        for (pos, pathway) in dataset.pathways.iter().enumerate() {
            pathway_index.entry(pathway.id.clone()).or_insert(pos);
        }
        debug!(
            courses = dataset.courses.len(),
            pathways = dataset.pathways.len(),
            "catalog indexed"
        );
        Self {
            dataset,
            course_index,
            pathway_index,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn courses(&self) -> &[Course] {
        &self.dataset.courses
    }

    pub fn pathways(&self) -> &[Pathway] {
        &self.dataset.pathways
    }

    pub fn course_by_id(&self, id: &str) -> Option<&Course> {
        self.course_index
            .get(id)
            .map(|&pos| &self.dataset.courses[pos])
    }

    pub fn pathway_by_id(&self, id: &str) -> Option<&Pathway> {
        self.pathway_index
            .get(id)
            .map(|&pos| &self.dataset.pathways[pos])
    }

    /// Courses with exactly `level`, in dataset order.
    pub fn courses_by_level(&self, level: Level) -> Vec<&Course> {
        self.dataset
            .courses
            .iter()
            .filter(|course| course.level == level)
            .collect()
    }

    pub fn foundation_courses(&self) -> Vec<&Course> {
        self.courses_by_level(Level::Foundation)
    }

    pub fn advanced_courses(&self) -> Vec<&Course> {
        self.courses_by_level(Level::Advanced)
    }

    pub fn courses_with_prerequisites(&self) -> Vec<&Course> {
        self.dataset
            .courses
            .iter()
            .filter(|course| !course.prerequisites.is_empty())
            .collect()
    }

    /// Distinct course domains, sorted.
    pub fn all_domains(&self) -> BTreeSet<&str> {
        self.dataset
            .courses
            .iter()
            .map(|course| course.domain.as_str())
            .collect()
    }

    /// Direct prerequisites of `course_id`, in the course's declared order.
    ///
    /// Unknown courses yield an empty list. Unresolvable prerequisite ids are
    /// skipped.
    pub fn course_prerequisites(&self, course_id: &str) -> Vec<&Course> {
        let Some(course) = self.course_by_id(course_id) else {
            return Vec::new();
        };
        course
            .prerequisites
            .iter()
            .filter_map(|prereq| {
                let resolved = self.course_by_id(prereq);
                if resolved.is_none() {
                    warn!(course = course_id, prereq = %prereq, "prerequisite does not resolve");
                }
                resolved
            })
            .collect()
    }

    /// Courses that list `course_id` as a prerequisite, in dataset order.
    pub fn next_courses(&self, course_id: &str) -> Vec<&Course> {
        self.dataset
            .courses
            .iter()
            .filter(|course| course.requires(course_id))
            .collect()
    }

    /// Pathways that include `course_id`, in dataset order.
    pub fn pathways_by_course(&self, course_id: &str) -> Vec<&Pathway> {
        self.dataset
            .pathways
            .iter()
            .filter(|pathway| pathway.includes(course_id))
            .collect()
    }

    /// Progression stages of `pathway_id` with their courses resolved.
    pub fn pathway_stages(&self, pathway_id: &str) -> Vec<PathwayStage<'_>> {
        let Some(pathway) = self.pathway_by_id(pathway_id) else {
            return Vec::new();
        };
        pathway
            .progression
            .iter()
            .enumerate()
            .map(|(index, progression)| PathwayStage {
                step: index + 1,
                progression,
                course: self.course_by_id(&progression.course_id),
            })
            .collect()
    }

    /// Every transitive prerequisite of `course_id`, each once.
    ///
    /// A course always appears after its own prerequisites. The visited set
    /// bounds the walk even if a cycle slipped past validation.
    pub fn prerequisite_chain(&self, course_id: &str) -> Vec<&Course> {
        let mut visited = HashSet::new();
        let mut chain = Vec::new();
        if let Some(course) = self.course_by_id(course_id) {
            visited.insert(course.id.as_str());
            for prereq in &course.prerequisites {
                self.collect_chain(prereq, &mut visited, &mut chain);
            }
        }
        chain
    }

    fn collect_chain<'a>(
        &'a self,
        course_id: &str,
        visited: &mut HashSet<&'a str>,
        chain: &mut Vec<&'a Course>,
    ) {
        let Some(course) = self.course_by_id(course_id) else {
            return;
        };
        if !visited.insert(course.id.as_str()) {
            return;
        }
        for prereq in &course.prerequisites {
            self.collect_chain(prereq, visited, chain);
        }
        chain.push(course);
    }

    pub fn filter_courses(&self, filter: &CatalogFilter) -> Vec<&Course> {
        self.dataset
            .courses
            .iter()
            .filter(|course| filter.matches_course(course))
            .collect()
    }

    pub fn filter_pathways(&self, filter: &CatalogFilter) -> Vec<&Pathway> {
        self.dataset
            .pathways
            .iter()
            .filter(|pathway| filter.matches_pathway(pathway))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::DomainFilter;
    use crate::test_support::{course, dataset, pathway};

    fn ids<'a>(courses: &[&'a Course]) -> Vec<&'a str> {
        courses.iter().map(|course| course.id.as_str()).collect()
    }

    fn ladder() -> Catalog {
        let mut cloud = course("cloud", Level::Advanced, &["support", "net"]);
        cloud.domain = "Cloud".to_string();
        Catalog::new(dataset(
            vec![
                course("support", Level::Foundation, &[]),
                course("net", Level::Advanced, &["support"]),
                cloud,
                course("sec", Level::Advanced, &["net"]),
            ],
            vec![
                pathway("ops", &["support", "net", "sec"]),
                pathway("cloud_path", &["support", "cloud"]),
            ],
        ))
        .expect("valid catalog")
    }

    #[test]
    fn new_rejects_invalid_dataset() {
        let err = Catalog::new(dataset(
            vec![course("a", Level::Advanced, &["ghost"])],
            vec![pathway("p", &["nope"])],
        ))
        .expect_err("invalid dataset");
        let message = err.to_string();
        assert!(message.contains("dataset invariants failed"));
        assert!(message.contains("prerequisite 'ghost' does not resolve"));
        assert!(message.contains("course 'nope' does not resolve"));
    }

    #[test]
    fn lookups_are_total() {
        let catalog = ladder();
        for course in catalog.courses() {
            assert_eq!(catalog.course_by_id(&course.id), Some(course));
        }
        assert!(catalog.course_by_id("missing").is_none());
        assert_eq!(
            catalog.pathway_by_id("ops").map(|p| p.id.as_str()),
            Some("ops")
        );
        assert!(catalog.pathway_by_id("missing").is_none());
    }

    #[test]
    fn levels_partition_courses() {
        let catalog = ladder();
        let foundation = catalog.foundation_courses();
        let advanced = catalog.advanced_courses();
        assert_eq!(ids(&foundation), vec!["support"]);
        assert_eq!(ids(&advanced), vec!["net", "cloud", "sec"]);
        assert_eq!(foundation.len() + advanced.len(), catalog.courses().len());
        assert!(foundation.iter().all(|c| !advanced.contains(c)));
        assert_eq!(
            ids(&catalog.courses_with_prerequisites()),
            vec!["net", "cloud", "sec"]
        );
    }

    #[test]
    fn domains_are_sorted_and_distinct() {
        let catalog = ladder();
        let domains: Vec<&str> = catalog.all_domains().into_iter().collect();
        assert_eq!(domains, vec!["Cloud", "Information Technology"]);
    }

    #[test]
    fn prerequisites_preserve_declared_order() {
        let catalog = ladder();
        assert_eq!(
            ids(&catalog.course_prerequisites("cloud")),
            vec!["support", "net"]
        );
        assert!(catalog.course_prerequisites("support").is_empty());
        assert!(catalog.course_prerequisites("missing").is_empty());
    }

    #[test]
    fn unresolved_prerequisites_are_skipped() {
        let catalog = Catalog::index(dataset(
            vec![
                course("a", Level::Foundation, &[]),
                course("b", Level::Advanced, &["ghost", "a"]),
            ],
            Vec::new(),
        ));
        assert_eq!(ids(&catalog.course_prerequisites("b")), vec!["a"]);
    }

    #[test]
    fn next_courses_is_reverse_of_prerequisites() {
        let catalog = ladder();
        assert_eq!(ids(&catalog.next_courses("support")), vec!["net", "cloud"]);
        assert_eq!(ids(&catalog.next_courses("net")), vec!["cloud", "sec"]);
        assert!(catalog.next_courses("sec").is_empty());
        assert!(catalog.next_courses("missing").is_empty());

        for a in catalog.courses() {
            for b in catalog.courses() {
                let forward = b.prerequisites.contains(&a.id);
                let reverse = catalog.next_courses(&a.id).contains(&b);
                assert_eq!(forward, reverse, "{} -> {}", a.id, b.id);
            }
        }
    }

    #[test]
    fn pathways_by_course_keeps_dataset_order() {
        let catalog = ladder();
        let found: Vec<&str> = catalog
            .pathways_by_course("support")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(found, vec!["ops", "cloud_path"]);
        assert!(catalog.pathways_by_course("missing").is_empty());
    }

    #[test]
    fn pathway_stages_resolve_courses() {
        let catalog = ladder();
        let stages = catalog.pathway_stages("cloud_path");
        assert_eq!(stages.len(), 2);
        assert_eq!(stages[0].step, 1);
        assert_eq!(stages[1].step, 2);
        assert_eq!(stages[1].course.map(|c| c.id.as_str()), Some("cloud"));
        assert!(catalog.pathway_stages("missing").is_empty());
    }

    #[test]
    fn prerequisite_chain_is_transitive_and_ordered() {
        let catalog = ladder();
        assert_eq!(
            ids(&catalog.prerequisite_chain("cloud")),
            vec!["support", "net"]
        );
        assert_eq!(
            ids(&catalog.prerequisite_chain("sec")),
            vec!["support", "net"]
        );
        assert!(catalog.prerequisite_chain("support").is_empty());
        assert!(catalog.prerequisite_chain("missing").is_empty());
    }

    #[test]
    fn prerequisite_chain_terminates_on_cycles() {
        let catalog = Catalog::index(dataset(
            vec![
                course("a", Level::Advanced, &["b"]),
                course("b", Level::Advanced, &["a"]),
            ],
            Vec::new(),
        ));
        assert_eq!(ids(&catalog.prerequisite_chain("a")), vec!["b"]);
    }

    #[test]
    fn filters_apply_domain_and_search() {
        let catalog = ladder();
        let cloud_only = CatalogFilter::new(DomainFilter::Only("Cloud".to_string()), "");
        assert_eq!(ids(&catalog.filter_courses(&cloud_only)), vec!["cloud"]);

        let search = CatalogFilter::new(DomainFilter::All, "NET NAME");
        assert_eq!(ids(&catalog.filter_courses(&search)), vec!["net"]);

        let pathways: Vec<&str> = catalog
            .filter_pathways(&CatalogFilter::new(DomainFilter::All, "OPS"))
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(pathways, vec!["ops"]);
    }
}
