//! Route Table
//!
//! Client-side routes and path matching. The first record whose pattern
//! matches wins, so static paths are listed before parameterized ones.

use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;

use crate::api::encode_path_segment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Login,
    Register,
    ProjectCreate,
    ProjectDetails,
    Profile,
    NotFound,
}

impl RouteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Home => "home",
            RouteName::Login => "login",
            RouteName::Register => "register",
            RouteName::ProjectCreate => "project-create",
            RouteName::ProjectDetails => "project-details",
            RouteName::Profile => "profile",
            RouteName::NotFound => "not-found",
        }
    }

    /// Path pattern from the route table
    pub fn path(&self) -> &'static str {
        ROUTES
            .iter()
            .find(|record| record.name == *self)
            .map(|record| record.path)
            .unwrap_or("/")
    }
}

/// Guard flags declared by a route
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_guest: bool,
}

impl RouteMeta {
    pub const NONE: Self = Self { requires_auth: false, requires_guest: false };
    pub const AUTH: Self = Self { requires_auth: true, requires_guest: false };
    pub const GUEST: Self = Self { requires_auth: false, requires_guest: true };

    /// A flag is set if any matched record sets it
    pub fn merge(self, other: Self) -> Self {
        Self {
            requires_auth: self.requires_auth || other.requires_auth,
            requires_guest: self.requires_guest || other.requires_guest,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct RouteRecord {
    pub path: &'static str,
    pub name: RouteName,
    pub meta: RouteMeta,
}

const CATCH_ALL: &str = "*";

pub static ROUTES: &[RouteRecord] = &[
    RouteRecord { path: "/", name: RouteName::Home, meta: RouteMeta::NONE },
    RouteRecord { path: "/login", name: RouteName::Login, meta: RouteMeta::GUEST },
    RouteRecord { path: "/register", name: RouteName::Register, meta: RouteMeta::GUEST },
    RouteRecord { path: "/projects/create", name: RouteName::ProjectCreate, meta: RouteMeta::AUTH },
    RouteRecord { path: "/projects/:id", name: RouteName::ProjectDetails, meta: RouteMeta::NONE },
    RouteRecord { path: "/profile", name: RouteName::Profile, meta: RouteMeta::AUTH },
    RouteRecord { path: CATCH_ALL, name: RouteName::NotFound, meta: RouteMeta::NONE },
];

/// Outcome of matching a location against the table
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoute {
    pub name: RouteName,
    /// Normalized path, without query or fragment
    pub path: String,
    pub params: BTreeMap<&'static str, String>,
    pub matched: Vec<&'static RouteRecord>,
}

impl ResolvedRoute {
    /// Flags accumulated over every matched record
    pub fn meta(&self) -> RouteMeta {
        self.matched
            .iter()
            .fold(RouteMeta::default(), |meta, record| meta.merge(record.meta))
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

fn segments(location: &str) -> Vec<&str> {
    let path = location.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn match_pattern(pattern: &'static str, path: &[&str]) -> Option<BTreeMap<&'static str, String>> {
    let mut params = BTreeMap::new();
    if pattern == CATCH_ALL {
        return Some(params);
    }

    let expected: Vec<&'static str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    if expected.len() != path.len() {
        return None;
    }

    for (&want, &got) in expected.iter().zip(path) {
        match want.strip_prefix(':') {
            Some(name) => {
                params.insert(name, percent_decode_str(got).decode_utf8_lossy().into_owned());
            }
            None if want == got => {}
            None => return None,
        }
    }
    Some(params)
}

/// Client path of a project's detail page
pub fn project_path(id: &str) -> String {
    format!("/projects/{}", encode_path_segment(id))
}

/// Match a location (path, optionally with query and fragment) to a route
pub fn resolve(location: &str) -> ResolvedRoute {
    let parts = segments(location);
    let path = format!("/{}", parts.join("/"));

    let (record, params) = ROUTES
        .iter()
        .find_map(|record| match_pattern(record.path, &parts).map(|params| (record, params)))
        .unwrap_or_else(|| (&ROUTES[ROUTES.len() - 1], BTreeMap::new()));

    ResolvedRoute {
        name: record.name,
        path,
        params,
        matched: vec![record],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes() {
        assert_eq!(resolve("/").name, RouteName::Home);
        assert_eq!(resolve("/login").name, RouteName::Login);
        assert_eq!(resolve("/register").name, RouteName::Register);
        assert_eq!(resolve("/profile").name, RouteName::Profile);
    }

    #[test]
    fn test_create_wins_over_details() {
        let route = resolve("/projects/create");
        assert_eq!(route.name, RouteName::ProjectCreate);
        assert!(route.params.is_empty());
    }

    #[test]
    fn test_details_captures_id() {
        let route = resolve("/projects/42");
        assert_eq!(route.name, RouteName::ProjectDetails);
        assert_eq!(route.param("id"), Some("42"));
    }

    #[test]
    fn test_project_path_keeps_id_in_one_segment() {
        let href = project_path("a/b c?");
        assert_eq!(href, "/projects/a%2Fb%20c%3F");

        let route = resolve(&href);
        assert_eq!(route.name, RouteName::ProjectDetails);
        assert_eq!(route.param("id"), Some("a/b c?"));

        assert_eq!(resolve(&project_path("42")).param("id"), Some("42"));
    }

    #[test]
    fn test_query_fragment_and_trailing_slash_ignored() {
        let route = resolve("/profile/?tab=settings#top");
        assert_eq!(route.name, RouteName::Profile);
        assert_eq!(route.path, "/profile");

        assert_eq!(resolve("").path, "/");
        assert_eq!(resolve("?page=2").name, RouteName::Home);
    }

    #[test]
    fn test_unknown_paths_fall_through_to_not_found() {
        for location in ["/nope", "/projects", "/projects/1/edit", "/login/extra"] {
            let route = resolve(location);
            assert_eq!(route.name, RouteName::NotFound, "{}", location);
            assert_eq!(route.meta(), RouteMeta::NONE);
        }
    }

    #[test]
    fn test_route_flags_match_table() {
        assert_eq!(resolve("/").meta(), RouteMeta::NONE);
        assert_eq!(resolve("/login").meta(), RouteMeta::GUEST);
        assert_eq!(resolve("/register").meta(), RouteMeta::GUEST);
        assert_eq!(resolve("/projects/create").meta(), RouteMeta::AUTH);
        assert_eq!(resolve("/projects/9").meta(), RouteMeta::NONE);
        assert_eq!(resolve("/profile").meta(), RouteMeta::AUTH);
    }

    #[test]
    fn test_meta_merge_is_any() {
        assert_eq!(RouteMeta::AUTH.merge(RouteMeta::GUEST), RouteMeta {
            requires_auth: true,
            requires_guest: true,
        });
        assert_eq!(RouteMeta::NONE.merge(RouteMeta::NONE), RouteMeta::NONE);
    }

    #[test]
    fn test_name_paths() {
        assert_eq!(RouteName::Login.path(), "/login");
        assert_eq!(RouteName::Home.path(), "/");
        assert_eq!(RouteName::ProjectCreate.as_str(), "project-create");
    }
}
