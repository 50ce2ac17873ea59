//! Static client-side route table.
//!
//! The router consumes literal paths only; there are no parameterized or
//! wildcard segments. The table is built once at startup and never changes.

/// One client-side route: a literal path and the label shown in navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub label: &'static str,
}

/// Ordered route table. Paths must stay unique.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        label: "Home",
    },
    RouteEntry {
        path: "/dashboard",
        label: "Dashboard",
    },
];

/// Look up a route by exact literal path.
///
/// Trailing slashes are not normalized; "/dashboard/" does not match.
pub fn find(path: &str) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|route| route.path == path)
}
