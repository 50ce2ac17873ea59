use wasm_bindgen::JsCast;

use geopanel::app::App;

fn main() {
    console_error_panic_hook::set_once();

    // The host page provides the mount target; mounting happens exactly once
    // per page load and there is no teardown path.
    let mount_point = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("app"))
        .expect("host page must contain an element with id \"app\"");

    leptos::logging::log!("mounting geopanel into #app");

    leptos::mount::mount_to(mount_point.unchecked_into(), App).forget();
}
