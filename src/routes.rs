//! Route table for the editor front end's pages.

use serde::Serialize;

/// Pages the front end can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Index,
    Web,
    Mobile,
    Config,
}

/// Path-to-page mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
}

/// Registered routes in declaration order.
pub const ROUTES: [Route; 4] = [
    Route {
        path: "/",
        page: Page::Index,
    },
    Route {
        path: "/web",
        page: Page::Web,
    },
    Route {
        path: "/mobile",
        page: Page::Mobile,
    },
    Route {
        path: "/config",
        page: Page::Config,
    },
];

/// Look up the page registered for `path`.
pub fn find(path: &str) -> Option<Page> {
    ROUTES.iter().find(|r| r.path == path).map(|r| r.page)
}
