//! Dashboard page component
//!
//! Cutout request form: pick a layer, a year and a bounding box, then
//! preview the PNG the API renders for it.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::config::Config;
use crate::core::query::{BoundingBox, CutoutQuery, Layer, MAX_YEAR, MIN_YEAR};
use crate::ui::icon::{Icon, icons};

/// Dashboard page component
#[component]
pub fn DashboardView() -> impl IntoView {
    // Form state, seeded with the example cutout from the API docs.
    let layer = RwSignal::new(Layer::Land);
    let year = RwSignal::new(MIN_YEAR.to_string());
    let lon1 = RwSignal::new("-11.2843".to_string());
    let lat1 = RwSignal::new("16.9779".to_string());
    let lon2 = RwSignal::new("-12.3143".to_string());
    let lat2 = RwSignal::new("16.4229".to_string());

    let preview_url = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    let on_render = move |_| {
        error.set(None);

        let parse = |signal: RwSignal<String>, name: &str| {
            signal
                .get()
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("{name} must be a number"))
        };

        let parsed = parse(lon1, "Longitude 1").and_then(|a| {
            let b = parse(lat1, "Latitude 1")?;
            let c = parse(lon2, "Longitude 2")?;
            let d = parse(lat2, "Latitude 2")?;
            let year = year
                .get()
                .trim()
                .parse::<u16>()
                .map_err(|_| "Year must be a number".to_string())?;
            Ok(CutoutQuery {
                layer: layer.get(),
                bbox: BoundingBox::new(a, b, c, d),
                year,
            })
        });

        let config = Config::from_build_env();
        let url = parsed
            .and_then(|query| query.url(&config.api_base_url).map_err(|e| e.to_string()));

        match url {
            Ok(url) => preview_url.set(Some(url)),
            Err(message) => {
                preview_url.set(None);
                error.set(Some(message));
            }
        }
    };

    view! {
        <Title text="Geopanel - Dashboard"/>

        <div class="page dashboard">
            <h1 class="page-title">
                <Icon name=icons::LAYERS class="icon"/>
                "Cutout dashboard"
            </h1>

            <div class="cutout-form">
                <label class="field">
                    <span class="field-label">"Layer"</span>
                    <select on:change=move |ev| {
                        if let Some(selected) = Layer::from_str(&event_target_value(&ev)) {
                            layer.set(selected);
                        }
                    }>
                        {Layer::ALL
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <option
                                        value=option.as_str()
                                        selected=move || layer.get() == option
                                    >
                                        {option.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>

                <label class="field">
                    <span class="field-label">
                        {format!("Year ({MIN_YEAR}-{MAX_YEAR})")}
                    </span>
                    <input
                        type="number"
                        prop:value=move || year.get()
                        on:input=move |ev| year.set(event_target_value(&ev))
                    />
                </label>

                <div class="field-row">
                    <CoordinateField label="Longitude 1" value=lon1/>
                    <CoordinateField label="Latitude 1" value=lat1/>
                    <CoordinateField label="Longitude 2" value=lon2/>
                    <CoordinateField label="Latitude 2" value=lat2/>
                </div>

                <button class="btn btn-primary" on:click=on_render>
                    "Render cutout"
                </button>
            </div>

            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <p class="form-error">
                                <Icon name=icons::ALERT_CIRCLE class="icon icon-inline"/>
                                {message}
                            </p>
                        }
                    })
            }}

            {move || {
                preview_url
                    .get()
                    .map(|url| {
                        view! {
                            <figure class="preview">
                                <img src=url.clone() alt="Rendered cutout"/>
                                <figcaption class="preview-caption">{url}</figcaption>
                            </figure>
                        }
                    })
            }}
        </div>
    }
}

/// Decimal text input bound to a string signal.
#[component]
fn CoordinateField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input
                type="text"
                inputmode="decimal"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
