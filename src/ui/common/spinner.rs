use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner-sm",
            SpinnerSize::Medium => "spinner-md",
        }
    }
}

/// Circular loading spinner
#[component]
pub fn Spinner(
    /// Spinner size
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Optional label text
    #[prop(default = String::new())]
    label: String,
) -> impl IntoView {
    view! {
        <div class="spinner-container">
            <div class=format!("spinner {}", size.class()) role="status" aria-live="polite">
                <div class="spinner-circle-inner"></div>
                <span class="sr-only">"Loading..."</span>
            </div>
            {(!label.is_empty()).then(|| view! {
                <div class="spinner-label">{label.clone()}</div>
            })}
        </div>
    }
}

/// Centered spinner with a message
#[component]
pub fn LoadingSpinner(
    /// Loading message
    #[prop(default = "Loading...".to_string())]
    message: String,
) -> impl IntoView {
    view! {
        <div class="spinner-centered">
            <Spinner size=SpinnerSize::Medium label=message/>
        </div>
    }
}
