mod spinner;

pub use spinner::{LoadingSpinner, Spinner, SpinnerSize};
