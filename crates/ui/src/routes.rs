//! Route definitions for the site

use dioxus::prelude::*;

use crate::components::Layout;
use crate::views::{AboutView, HomeView, NewsView, PeopleView, ProjectView, TagView, WorkView};

/// A single entry of the route table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Path pattern, `:`-prefixed segments are named parameters
    pub path: &'static str,
    /// Unique name used for programmatic navigation
    pub name: &'static str,
    /// View component rendered for this route
    pub view: &'static str,
}

/// One `/`-separated piece of a path pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Static(&'a str),
    Param(&'a str),
}

impl RouteDescriptor {
    /// Pattern segments; the root path `/` has none.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'static>> {
        let path: &'static str = self.path;
        path.split('/').filter(|s| !s.is_empty()).map(|s| {
            match s.strip_prefix(':') {
                Some(name) => Segment::Param(name),
                None => Segment::Static(s),
            }
        })
    }

    /// Names of the parameters in the pattern, in order
    pub fn param_names(&self) -> Vec<&'static str> {
        self.segments()
            .filter_map(|segment| match segment {
                Segment::Param(name) => Some(name),
                Segment::Static(_) => None,
            })
            .collect()
    }
}

/// The route table, in the same order as the [`Route`] variants.
pub static ROUTE_TABLE: [RouteDescriptor; 7] = [
    RouteDescriptor { path: "/", name: "Home", view: "HomeView" },
    RouteDescriptor { path: "/about", name: "About", view: "AboutView" },
    RouteDescriptor { path: "/work", name: "Work", view: "WorkView" },
    RouteDescriptor { path: "/tag/:tagName", name: "Tag", view: "TagView" },
    RouteDescriptor { path: "/project/:projectName", name: "Project", view: "ProjectView" },
    RouteDescriptor { path: "/people", name: "People", view: "PeopleView" },
    RouteDescriptor { path: "/news", name: "News", view: "NewsView" },
];

/// Application routes
///
/// Every page is rendered inside [`Layout`]. Matching and parameter
/// extraction are done by the `Routable` derive.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)]
        Home {},
        #[route("/about", AboutView)]
        About {},
        #[route("/work", WorkView)]
        Work {},
        #[route("/tag/:tag_name", TagView)]
        Tag { tag_name: String },
        #[route("/project/:project_name", ProjectView)]
        Project { project_name: String },
        #[route("/people", PeopleView)]
        People {},
        #[route("/news", NewsView)]
        News {},
}

impl Route {
    /// Table entry this route was declared from
    pub fn descriptor(&self) -> &'static RouteDescriptor {
        let index = match self {
            Route::Home {} => 0,
            Route::About {} => 1,
            Route::Work {} => 2,
            Route::Tag { .. } => 3,
            Route::Project { .. } => 4,
            Route::People {} => 5,
            Route::News {} => 6,
        };
        &ROUTE_TABLE[index]
    }

    pub fn name(&self) -> &'static str {
        self.descriptor().name
    }

    /// Parameter values keyed by their pattern names, e.g. `("tagName", "rust")`
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        let values: Vec<&str> = match self {
            Route::Tag { tag_name } => vec![tag_name.as_str()],
            Route::Project { project_name } => vec![project_name.as_str()],
            _ => Vec::new(),
        };
        self.descriptor().param_names().into_iter().zip(values).collect()
    }

    /// Parameterless routes, in table order, for the navigation bar
    pub fn navigation() -> Vec<Route> {
        ROUTE_TABLE
            .iter()
            .filter(|descriptor| descriptor.param_names().is_empty())
            .filter_map(|descriptor| descriptor.path.parse().ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Fill every parameter of a pattern with `value`.
    fn concrete(descriptor: &RouteDescriptor, value: &str) -> String {
        let segments: Vec<String> = descriptor
            .segments()
            .map(|segment| match segment {
                Segment::Static(s) => s.to_string(),
                Segment::Param(_) => value.to_string(),
            })
            .collect();
        format!("/{}", segments.join("/"))
    }

    #[test]
    fn every_declared_path_resolves_to_its_route() {
        for descriptor in &ROUTE_TABLE {
            let url = concrete(descriptor, "sample");
            let route: Route = url.parse().expect("declared path should parse");
            assert_eq!(route.descriptor(), descriptor, "{url}");
            assert_eq!(route.name(), descriptor.name);
        }
    }

    #[test]
    fn static_paths_parse_verbatim() {
        let cases = [
            ("/", Route::Home {}),
            ("/about", Route::About {}),
            ("/work", Route::Work {}),
            ("/people", Route::People {}),
            ("/news", Route::News {}),
        ];
        for (url, expected) in cases {
            assert_eq!(url.parse::<Route>().ok(), Some(expected), "{url}");
        }
    }

    #[test]
    fn tag_path_extracts_tag_name() {
        for tag in ["foo", "rust", "design-systems"] {
            let route: Route = format!("/tag/{tag}").parse().unwrap();
            assert_eq!(route, Route::Tag { tag_name: tag.to_string() });
            assert_eq!(route.name(), "Tag");
            assert_eq!(route.descriptor().view, "TagView");
            assert_eq!(route.params(), vec![("tagName", tag)]);
        }
    }

    #[test]
    fn project_path_extracts_project_name() {
        for project in ["bar", "harbour-lights"] {
            let route: Route = format!("/project/{project}").parse().unwrap();
            assert_eq!(route, Route::Project { project_name: project.to_string() });
            assert_eq!(route.name(), "Project");
            assert_eq!(route.descriptor().view, "ProjectView");
            assert_eq!(route.params(), vec![("projectName", project)]);
        }
    }

    #[test]
    fn params_are_percent_decoded() {
        let route: Route = "/tag/hello%20world".parse().unwrap();
        assert_eq!(route, Route::Tag { tag_name: "hello world".to_string() });
        assert_eq!(route.params(), vec![("tagName", "hello world")]);
    }

    #[test]
    fn empty_params_match_nothing() {
        assert!("/tag/".parse::<Route>().is_err());
        assert!("/project/".parse::<Route>().is_err());
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!("/about/".parse::<Route>().ok(), Some(Route::About {}));
    }

    #[test]
    fn static_routes_have_no_params() {
        for route in Route::navigation() {
            assert!(route.params().is_empty(), "{}", route.name());
        }
    }

    #[test]
    fn names_and_paths_are_distinct() {
        let names: HashSet<_> = ROUTE_TABLE.iter().map(|d| d.name).collect();
        let paths: HashSet<_> = ROUTE_TABLE.iter().map(|d| d.path).collect();
        assert_eq!(names.len(), 7);
        assert_eq!(paths.len(), 7);
    }

    #[test]
    fn undeclared_path_matches_nothing() {
        assert!("/does-not-exist".parse::<Route>().is_err());
        assert!("/tag/foo/extra".parse::<Route>().is_err());
    }

    #[test]
    fn urls_render_from_routes() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::News {}.to_string(), "/news");
        assert_eq!(Route::Tag { tag_name: "foo".into() }.to_string(), "/tag/foo");
        assert_eq!(
            Route::Project { project_name: "bar".into() }.to_string(),
            "/project/bar"
        );
    }

    #[test]
    fn navigation_follows_table_order() {
        let names: Vec<_> = Route::navigation().iter().map(Route::name).collect();
        assert_eq!(names, ["Home", "About", "Work", "People", "News"]);
    }

    #[test]
    fn segments_split_static_and_param_parts() {
        let segments: Vec<_> = ROUTE_TABLE[4].segments().collect();
        assert_eq!(
            segments,
            [Segment::Static("project"), Segment::Param("projectName")]
        );
        assert_eq!(ROUTE_TABLE[0].segments().count(), 0);
    }
}
