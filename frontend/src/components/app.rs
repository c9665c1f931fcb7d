use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::components::about::About;
use crate::components::contact_form::Contact;
use crate::components::footer::Footer;
use crate::components::gallery::Gallery;
use crate::models::{GalleryEntry, SiteOptions};

/// Everything the page needs from the server. Serialized into the
/// document so the browser can hydrate with the same values.
#[derive(Clone, Debug, Default, PartialEq, Properties, Serialize, Deserialize)]
pub struct AppProps {
    pub gallery: Vec<GalleryEntry>,
    pub options: SiteOptions,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <>
            <style>
            {r#".main { display: flex; flex-direction: column; align-items: center; }
                .hero img { width: 100%; height: auto; }
                .title { display: flex; align-items: center; gap: 2rem; padding: 4rem 1rem; }
                .title-logo img { width: 160px; height: 160px; }
                .grid { display: grid; grid-template-columns: repeat(auto-fill, 300px); gap: 1rem; list-style: none; padding: 0; justify-content: center; }
                .gallery-item img { width: 300px; height: 300px; object-fit: cover; }
                .about {
                    width: 100%;
                    padding: 6rem 1rem;
                    background-image: url('/about-bg.jpg');
                    background-size: cover;
                    background-repeat: no-repeat;
                    color: #fff;
                }
                .about-shop img { width: 240px; height: auto; }
                .contact-form form { display: flex; flex-direction: column; gap: 0.75rem; max-width: 480px; }
                .menu { display: flex; gap: 1.5rem; justify-content: center; }
                .footer { padding: 2rem 1rem; text-align: center; }"#}
            </style>
            <main class="main">
                <div id="top" class="hero">
                    <img src="/IMG_2035.JPG" alt="IMG_2035.JPG" width="3000" height="1260" />
                </div>

                <div class="title">
                    <div class="title-logo">
                        <img src="/logo-original.png" alt="titleLogo" width="3000" height="3000" />
                    </div>
                    <div class="title-text">
                        {"Stone.Eng"}<br />
                        {"\"Everyday is handmade\""}<br />
                        {"Something little by little"}<br />
                    </div>
                </div>

                <Gallery
                    entries={props.gallery.clone()}
                    link_base={props.options.gallery_link_base.clone()}
                />
                <About />
                <Contact options={props.options.clone()} />
            </main>
            <Footer />
        </>
    }
}
