use log::{error, info, Level};
use stone_eng_frontend::{App, AppProps, PROPS_ELEMENT_ID, ROOT_ELEMENT_ID};

fn read_props() -> Option<AppProps> {
    let document = web_sys::window()?.document()?;
    let text = document.get_element_by_id(PROPS_ELEMENT_ID)?.text_content()?;
    match serde_json::from_str(&text) {
        Ok(props) => Some(props),
        Err(e) => {
            error!("Could not parse page props: {}", e);
            None
        }
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let Some(props) = read_props() else {
        error!("No page props found, skipping hydration");
        return;
    };
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ROOT_ELEMENT_ID))
    else {
        error!("No #{} element to hydrate", ROOT_ELEMENT_ID);
        return;
    };

    info!("Hydrating page with {} gallery entries", props.gallery.len());
    yew::Renderer::<App>::with_root_and_props(root, props).hydrate();
}
