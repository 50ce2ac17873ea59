//! Application pages module
//!
//! One component per client-side route:
//! - Home ("/")
//! - Dashboard ("/dashboard")
//!
//! plus the not-found page used as the router fallback.

mod dashboard;
mod home;
mod not_found;

pub use dashboard::DashboardView;
pub use home::HomeView;
pub use not_found::NotFoundPage;
