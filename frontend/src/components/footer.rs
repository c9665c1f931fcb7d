use yew::prelude::*;

use crate::smooth_scroll::{scroll_to_anchor, ANCHORS};

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/stone.eng_/";

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <nav class="menu">
                { for ANCHORS.iter().map(|&(id, label)| nav_link(id, label)) }
            </nav>
            <div class="sns">
                <a href={INSTAGRAM_URL} class="logo">
                    <img src="/glyph-logo_May2016.png" alt="Instagram Logo" width="20" height="20" />
                </a>
            </div>
            <div class="signature">{"© 2022 Stone.Eng"}</div>
        </footer>
    }
}

fn nav_link(id: &'static str, label: &'static str) -> Html {
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor(id);
    });

    html! {
        <a href={format!("#{}", id)} {onclick}>{label}</a>
    }
}
