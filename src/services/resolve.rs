//! Route identifier → record lookups for the detail views.

use crate::models::{BlogPost, Project};

/// Projects are addressed by their position in the loaded collection.
pub fn resolve_project<'a>(projects: &'a [Project], route_id: &str) -> Option<&'a Project> {
    parse_index(route_id).and_then(|idx| projects.get(idx))
}

/// Posts are addressed by their `id`, compared as text.
pub fn resolve_post<'a>(posts: &'a [BlogPost], route_id: &str) -> Option<&'a BlogPost> {
    let route_id = route_id.trim();
    posts.iter().find(|p| p.id.matches(route_id))
}

pub fn parse_index(route_id: &str) -> Option<usize> {
    route_id.trim().parse::<usize>().ok()
}

pub fn project_href(index: usize) -> String {
    format!("/projects/{index}")
}
