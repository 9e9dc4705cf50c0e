//! Transient browser state: filters, the active tab and the current selection.
//!
//! The view state never touches the dataset; it only records ids that the
//! presentation layer resolves through the [`Catalog`](crate::core::query::Catalog).

use crate::core::filter::{CatalogFilter, DomainFilter};
use crate::core::types::ActiveView;

/// At most one course or one pathway is selected at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Course(String),
    Pathway(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub filter: CatalogFilter,
    pub selection: Selection,
    pub active_view: ActiveView,
}

impl ViewState {
    pub fn new(filter: CatalogFilter, active_view: ActiveView) -> Self {
        Self {
            filter,
            selection: Selection::None,
            active_view,
        }
    }

    /// Select a course, dropping any selected pathway.
    pub fn select_course(&mut self, course_id: impl Into<String>) {
        self.selection = Selection::Course(course_id.into());
    }

    /// Select a pathway, dropping any selected course.
    pub fn select_pathway(&mut self, pathway_id: impl Into<String>) {
        self.selection = Selection::Pathway(pathway_id.into());
    }

    pub fn set_domain(&mut self, domain: DomainFilter) {
        self.filter.domain = domain;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_active_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    /// Reset filters and selection. The active tab is kept.
    pub fn clear(&mut self) {
        self.filter = CatalogFilter::default();
        self.selection = Selection::None;
    }

    pub fn selected_course_id(&self) -> Option<&str> {
        match &self.selection {
            Selection::Course(id) => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn selected_pathway_id(&self) -> Option<&str> {
        match &self.selection {
            Selection::Pathway(id) => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn is_highlighted_course(&self, course_id: &str) -> bool {
        self.selected_course_id() == Some(course_id)
    }

    pub fn is_highlighted_pathway(&self, pathway_id: &str) -> bool {
        self.selected_pathway_id() == Some(pathway_id)
    }
}
