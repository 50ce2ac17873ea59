use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{A, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::core::routes::ROUTES;
use crate::ui::pages::{DashboardView, HomeView, NotFoundPage};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // default document title; pages override it
        <Title text="Geopanel - Spatial Data Explorer"/>

        <Router>
            <div class="app-shell">
                <NavBar/>
                <main class="app-main">
                    <Routes fallback=NotFoundPage>
                        <Route path=path!("/") view=HomeView/>
                        <Route path=path!("/dashboard") view=DashboardView/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Top navigation bar. Links are rendered from the static route table so the
/// header and the router never disagree about which paths exist.
#[component]
fn NavBar() -> impl IntoView {
    // Memo is Copy, so every link closure can capture it.
    let pathname = use_location().pathname;

    view! {
        <header class="navbar">
            <A href="/" attr:class="navbar-brand">"Geopanel"</A>
            <nav class="navbar-links">
                {ROUTES
                    .iter()
                    .map(|route| {
                        let is_active = move || pathname.get() == route.path;
                        view! {
                            <A
                                href=route.path
                                attr:class=move || {
                                    if is_active() { "nav-link nav-link-active" } else { "nav-link" }
                                }
                            >
                                {route.label}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
