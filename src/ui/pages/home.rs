//! Home page component
//!
//! Landing view for the explorer: a short hero, the live API status and a
//! link into the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::api::{ApiStatus, fetch_status};
use crate::core::config::Config;
use crate::ui::common::LoadingSpinner;
use crate::ui::icon::{Icon, icons};

/// Home page component
#[component]
pub fn HomeView() -> impl IntoView {
    let status = RwSignal::new(None::<Result<ApiStatus, String>>);

    // One status probe per mount; the result replaces the spinner.
    let config = Config::from_build_env();
    spawn_local(async move {
        status.set(Some(fetch_status(&config.api_base_url).await));
    });

    view! {
        <Title text="Geopanel - Home"/>

        <div class="page home">
            <section class="hero">
                <h1 class="hero-title">"Geopanel"</h1>
                <p class="hero-subtitle">
                    "Browse land cover, productivity, climate and livestock rasters "
                    "as map cutouts, straight from the Spatial Data API."
                </p>
                <A href="/dashboard" attr:class="btn btn-primary">
                    "Open Dashboard"
                    <Icon name=icons::ARROW_RIGHT class="icon icon-inline"/>
                </A>
            </section>

            <section class="status-card">
                <h2 class="status-title">
                    <Icon name=icons::GLOBE class="icon"/>
                    "API status"
                </h2>
                {move || match status.get() {
                    None => view! {
                        <LoadingSpinner message="Checking the API...".to_string()/>
                    }
                        .into_any(),
                    Some(Ok(api)) => view! {
                        <p class="status-ok">{api.message}</p>
                    }
                        .into_any(),
                    Some(Err(message)) => view! {
                        <p class="status-error">
                            <Icon name=icons::ALERT_CIRCLE class="icon icon-inline"/>
                            {message}
                        </p>
                    }
                        .into_any(),
                }}
            </section>
        </div>
    }
}
