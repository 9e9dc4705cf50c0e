//! Domain + search-term predicates used by the course and pathway listings.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::dataset::{Course, Pathway};

/// Keyword that selects every domain.
pub const ALL_DOMAINS: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DomainFilter {
    #[default]
    All,
    Only(String),
}

impl DomainFilter {
    pub fn matches(&self, domain: &str) -> bool {
        match self {
            DomainFilter::All => true,
            DomainFilter::Only(wanted) => wanted == domain,
        }
    }
}

impl FromStr for DomainFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_DOMAINS {
            Ok(DomainFilter::All)
        } else {
            Ok(DomainFilter::Only(s.to_string()))
        }
    }
}

impl fmt::Display for DomainFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainFilter::All => f.write_str(ALL_DOMAINS),
            DomainFilter::Only(domain) => f.write_str(domain),
        }
    }
}

/// Listing filter: an exact domain (or all) plus a case-insensitive search term.
///
/// Only the empty string disables searching; the term is not trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub domain: DomainFilter,
    pub search: String,
}

impl CatalogFilter {
    pub fn new(domain: DomainFilter, search: impl Into<String>) -> Self {
        Self {
            domain,
            search: search.into(),
        }
    }

    /// Match on domain, then on `name`, `domain` or any skill.
    pub fn matches_course(&self, course: &Course) -> bool {
        if !self.domain.matches(&course.domain) {
            return false;
        }
        let Some(needle) = self.needle() else {
            return true;
        };
        contains_folded(&course.name, &needle)
            || contains_folded(&course.domain, &needle)
            || course
                .skills
                .iter()
                .any(|skill| contains_folded(skill, &needle))
    }

    /// Match on domain, then on `name` or `description`.
    pub fn matches_pathway(&self, pathway: &Pathway) -> bool {
        if !self.domain.matches(&pathway.domain) {
            return false;
        }
        let Some(needle) = self.needle() else {
            return true;
        };
        contains_folded(&pathway.name, &needle) || contains_folded(&pathway.description, &needle)
    }

    fn needle(&self) -> Option<String> {
        (!self.search.is_empty()).then(|| self.search.to_lowercase())
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
