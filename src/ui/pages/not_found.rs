//! Not found page component
//!
//! Shown by the router fallback when no route matches the current path.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Geopanel - Page Not Found"/>

        <div class="page not-found">
            <h1 class="not-found-code">"404"</h1>
            <h2 class="not-found-title">"Page Not Found"</h2>
            <p class="not-found-text">
                "The page you're looking for doesn't exist or has been moved."
            </p>
            <div class="not-found-actions">
                <A href="/" attr:class="btn btn-primary">"Go Home"</A>
                <A href="/dashboard" attr:class="btn btn-secondary">"Open Dashboard"</A>
            </div>
        </div>
    }
}
