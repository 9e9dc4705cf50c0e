//! Semantic dataset invariants not expressible via JSON Schema.

use std::collections::{HashMap, HashSet};

use crate::dataset::{Course, Dataset};

/// Check cross-record invariants:
/// - No duplicate course or pathway ids
/// - Every prerequisite, pathway course and progression course id resolves
/// - Education percentages sum to 100
/// - The prerequisite graph has no cycles
///
/// Returns every violation as a stable message (empty on success).
pub fn validate_dataset(dataset: &Dataset) -> Vec<String> {
    let mut errors = Vec::new();

    let mut course_ids = HashSet::new();
    for course in &dataset.courses {
        if !course_ids.insert(course.id.as_str()) {
            errors.push(format!("duplicate course id '{}'", course.id));
        }
    }

    let mut pathway_ids = HashSet::new();
    for pathway in &dataset.pathways {
        if !pathway_ids.insert(pathway.id.as_str()) {
            errors.push(format!("duplicate pathway id '{}'", pathway.id));
        }
    }

    for course in &dataset.courses {
        for prereq in &course.prerequisites {
            if !course_ids.contains(prereq.as_str()) {
                errors.push(format!(
                    "course '{}': prerequisite '{}' does not resolve",
                    course.id, prereq
                ));
            }
        }
        let total = course.education.total();
        if total != 100 {
            errors.push(format!(
                "course '{}': education percentages sum to {}, expected 100",
                course.id, total
            ));
        }
    }

    for pathway in &dataset.pathways {
        for course_id in &pathway.courses {
            if !course_ids.contains(course_id.as_str()) {
                errors.push(format!(
                    "pathway '{}': course '{}' does not resolve",
                    pathway.id, course_id
                ));
            }
        }
        for (index, stage) in pathway.progression.iter().enumerate() {
            if !course_ids.contains(stage.course_id.as_str()) {
                errors.push(format!(
                    "pathway '{}': progression[{}] course '{}' does not resolve",
                    pathway.id, index, stage.course_id
                ));
            }
        }
    }

    errors.extend(prerequisite_cycles(&dataset.courses));
    errors
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

/// Depth-first search over resolvable prerequisite edges, in dataset order.
///
/// Each cycle is reported once, as the path that closes it.
fn prerequisite_cycles(courses: &[Course]) -> Vec<String> {
    let by_id: HashMap<&str, &Course> = courses
        .iter()
        .rev()
        .map(|course| (course.id.as_str(), course))
        .collect();
    let mut marks: HashMap<&str, Mark> = HashMap::new();
    let mut stack = Vec::new();
    let mut errors = Vec::new();

    for course in courses {
        visit(course, &by_id, &mut marks, &mut stack, &mut errors);
    }
    errors
}

fn visit<'a>(
    course: &'a Course,
    by_id: &HashMap<&'a str, &'a Course>,
    marks: &mut HashMap<&'a str, Mark>,
    stack: &mut Vec<&'a str>,
    errors: &mut Vec<String>,
) {
    let id = course.id.as_str();
    match marks.get(id) {
        Some(Mark::Done) => return,
        Some(Mark::Visiting) => {
            let start = stack.iter().position(|seen| *seen == id).unwrap_or(0);
            let mut cycle: Vec<&str> = stack[start..].to_vec();
            cycle.push(id);
            errors.push(format!("prerequisite cycle: {}", cycle.join(" -> ")));
            return;
        }
        None => {}
    }

    marks.insert(id, Mark::Visiting);
    stack.push(id);
    for prereq in &course.prerequisites {
        if let Some(&next) = by_id.get(prereq.as_str()) {
            visit(next, by_id, marks, stack, errors);
        }
    }
    stack.pop();
    marks.insert(id, Mark::Done);
}
