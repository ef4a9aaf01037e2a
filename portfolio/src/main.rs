// Anton Osika portfolio - Leptos 0.8 CSR entry point

use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = portfolio::mount() {
        web_sys::console::error_1(&JsValue::from_str(&format!("portfolio failed to mount: {err}")));
    }
}
