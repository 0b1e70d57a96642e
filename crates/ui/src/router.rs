//! The site's navigation authority
//!
//! [`SiteRouter::init`] validates the route table once at startup and
//! returns the handle the binary hands to the launch context. Components
//! read it back with `use_context::<SiteRouter>()`.

use std::collections::HashSet;

use dioxus::logger::tracing::{debug, info, warn};

use crate::error::RouteTableError;
use crate::routes::{Route, RouteDescriptor, Segment, ROUTE_TABLE};

/// How navigation state is kept
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryMode {
    /// Browser URL and history API (web platform)
    #[default]
    Browser,
    /// In-memory stack (desktop platform)
    Memory,
}

/// Owning handle over the validated route table
#[derive(Clone, Debug, PartialEq)]
pub struct SiteRouter {
    history: HistoryMode,
    routes: &'static [RouteDescriptor],
    initial_path: Option<String>,
}

impl SiteRouter {
    pub fn init(history: HistoryMode) -> Result<Self, RouteTableError> {
        validate_table(&ROUTE_TABLE)?;

        for descriptor in &ROUTE_TABLE {
            debug!(
                path = descriptor.path,
                name = descriptor.name,
                view = descriptor.view,
                "registered route"
            );
        }
        info!(?history, routes = ROUTE_TABLE.len(), "router initialised");

        Ok(Self {
            history,
            routes: &ROUTE_TABLE,
            initial_path: None,
        })
    }

    /// Open at `path` instead of `/`. Only honoured with [`HistoryMode::Memory`];
    /// browser history always starts at the address bar URL.
    pub fn starting_at(mut self, path: impl Into<String>) -> Self {
        self.initial_path = Some(path.into());
        self
    }

    pub fn initial_path(&self) -> Option<&str> {
        self.initial_path.as_deref()
    }

    pub fn history(&self) -> HistoryMode {
        self.history
    }

    pub fn routes(&self) -> &'static [RouteDescriptor] {
        self.routes
    }

    /// Resolve a concrete URL path to its route.
    pub fn resolve(&self, url: &str) -> Result<Route, RouteTableError> {
        url.parse::<Route>().map_err(|err| {
            warn!(url, "no route matches");
            RouteTableError::Unmatched {
                url: url.to_string(),
                reason: err.to_string(),
            }
        })
    }
}

/// Check a table for malformed patterns, duplicates and overlaps.
pub fn validate_table(table: &[RouteDescriptor]) -> Result<(), RouteTableError> {
    let mut paths = HashSet::new();
    let mut names = HashSet::new();

    for descriptor in table {
        check_pattern(descriptor)?;
        if !paths.insert(descriptor.path) {
            return Err(RouteTableError::DuplicatePath {
                path: descriptor.path,
            });
        }
        if !names.insert(descriptor.name) {
            return Err(RouteTableError::DuplicateName {
                name: descriptor.name,
            });
        }
    }

    for (i, first) in table.iter().enumerate() {
        for second in &table[i + 1..] {
            if patterns_overlap(first, second) {
                return Err(RouteTableError::OverlappingPaths {
                    first: first.path,
                    second: second.path,
                });
            }
        }
    }

    Ok(())
}

fn check_pattern(descriptor: &RouteDescriptor) -> Result<(), RouteTableError> {
    let malformed = |reason| RouteTableError::MalformedPattern {
        path: descriptor.path,
        reason,
    };

    if !descriptor.path.starts_with('/') {
        return Err(malformed("must start with `/`"));
    }
    if descriptor.path.len() > 1 && descriptor.path.ends_with('/') {
        return Err(malformed("trailing `/`"));
    }
    if descriptor.path.contains("//") {
        return Err(malformed("empty segment"));
    }
    if descriptor
        .segments()
        .any(|segment| segment == Segment::Param(""))
    {
        return Err(malformed("parameter without a name"));
    }
    if descriptor.name.is_empty() {
        return Err(malformed("route has no name"));
    }
    Ok(())
}

/// Two patterns overlap when some concrete URL matches both.
fn patterns_overlap(first: &RouteDescriptor, second: &RouteDescriptor) -> bool {
    let a: Vec<_> = first.segments().collect();
    let b: Vec<_> = second.segments().collect();
    a.len() == b.len()
        && a.iter().zip(&b).all(|pair| match pair {
            (Segment::Static(x), Segment::Static(y)) => x == y,
            _ => true,
        })
}
