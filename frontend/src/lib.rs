pub mod components {
    pub mod about;
    pub mod app;
    pub mod contact_form;
    pub mod footer;
    pub mod gallery;
}
pub mod contact;
pub mod models;
pub mod parallax;
pub mod smooth_scroll;

pub use components::app::{App, AppProps};

/// Id of the `<script>` element carrying the serialized `AppProps`.
pub const PROPS_ELEMENT_ID: &str = "site-props";
/// Id of the element the application is rendered into.
pub const ROOT_ELEMENT_ID: &str = "app";
