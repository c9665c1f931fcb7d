use yew::prelude::*;

use crate::models::GalleryEntry;

/// Edge length of the square box every gallery image is displayed in.
pub const TILE_SIZE: u32 = 300;

/// What a single gallery item renders as.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryTile {
    pub key: String,
    pub href: Option<String>,
    pub src: String,
    pub caption: String,
}

impl GalleryTile {
    pub fn from_entry(entry: &GalleryEntry, link_base: &str) -> Self {
        Self {
            key: entry.id.clone(),
            href: entry.link.as_ref().map(|link| format!("{}{}", link_base, link)),
            src: entry.image_url().to_string(),
            caption: entry.title.clone().unwrap_or_default(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub entries: Vec<GalleryEntry>,
    #[prop_or_default]
    pub link_base: String,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let tiles = props
        .entries
        .iter()
        .map(|entry| GalleryTile::from_entry(entry, &props.link_base));

    html! {
        <div id="gallery" class="gallery">
            <h1 class="gallery-title">{"GALLERY"}</h1>
            <div class="gallery-images">
                <ul class="grid">
                    { for tiles.map(render_tile) }
                </ul>
            </div>
        </div>
    }
}

fn render_tile(tile: GalleryTile) -> Html {
    let GalleryTile { key, href, src, caption } = tile;
    let image = html! {
        <img
            src={src}
            alt={caption.clone()}
            width={TILE_SIZE.to_string()}
            height={TILE_SIZE.to_string()}
            loading="lazy"
        />
    };

    html! {
        <li key={key} class="gallery-item">
            if let Some(href) = href {
                <a href={href}>{image}</a>
            } else {
                {image}
            }
            if !caption.is_empty() {
                <p class="gallery-caption">{caption}</p>
            }
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GalleryImage;
    use chrono::{TimeZone, Utc};

    fn entry(id: &str, title: Option<&str>, link: Option<&str>) -> GalleryEntry {
        GalleryEntry {
            id: id.to_string(),
            title: title.map(str::to_string),
            link: link.map(str::to_string),
            image: Some(GalleryImage {
                url: format!("https://images.example/{}.jpg", id),
                width: 1200,
                height: 800,
            }),
            created_at: Utc.with_ymd_and_hms(2022, 4, 1, 9, 30, 0).single(),
        }
    }

    async fn render(entries: Vec<GalleryEntry>, link_base: &str) -> String {
        let link_base = link_base.to_string();
        yew::ServerRenderer::<Gallery>::with_props(move || GalleryProps { entries, link_base })
            .hydratable(false)
            .render()
            .await
    }

    #[test]
    fn tile_uses_link_base_and_title() {
        let tile = GalleryTile::from_entry(&entry("a1", Some("Stool"), Some("stool")), "/gallery/");
        assert_eq!(tile.key, "a1");
        assert_eq!(tile.href.as_deref(), Some("/gallery/stool"));
        assert_eq!(tile.src, "https://images.example/a1.jpg");
        assert_eq!(tile.caption, "Stool");
    }

    #[test]
    fn tile_without_title_or_link_degrades() {
        let tile = GalleryTile::from_entry(&entry("a1", None, None), "/gallery/");
        assert_eq!(tile.href, None);
        assert_eq!(tile.caption, "");
    }

    #[tokio::test]
    async fn renders_one_item_per_entry_in_order() {
        let entries = vec![
            entry("c", Some("Chair"), Some("chair")),
            entry("a", Some("Lamp"), Some("lamp")),
            entry("b", Some("Shelf"), Some("shelf")),
        ];
        let html = render(entries, "").await;

        assert_eq!(html.matches("<li").count(), 3);
        let positions: Vec<usize> = ["c", "a", "b"]
            .iter()
            .map(|id| html.find(&format!("https://images.example/{}.jpg", id)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains(r#"href="chair""#));
        assert!(html.contains("Shelf"));
    }

    #[tokio::test]
    async fn empty_gallery_renders_no_items() {
        let html = render(Vec::new(), "").await;
        assert!(html.contains("GALLERY"));
        assert_eq!(html.matches("<li").count(), 0);
    }

    #[tokio::test]
    async fn missing_title_and_link_still_render() {
        let html = render(vec![entry("x", None, None)], "/gallery/").await;
        assert_eq!(html.matches("<li").count(), 1);
        assert!(html.contains("https://images.example/x.jpg"));
        assert!(!html.contains("<a"));
        assert!(!html.contains("gallery-caption"));
    }

    #[tokio::test]
    async fn entry_without_image_keeps_its_place() {
        let mut broken = entry("draft", Some("Draft"), None);
        broken.image = None;
        let html = render(vec![entry("a", None, None), broken, entry("b", None, None)], "").await;

        assert_eq!(html.matches("<li").count(), 3);
        assert!(html.contains("Draft"));
        let a = html.find("https://images.example/a.jpg").unwrap();
        let b = html.find("https://images.example/b.jpg").unwrap();
        assert!(a < html.find("Draft").unwrap() && html.find("Draft").unwrap() < b);
    }

    #[tokio::test]
    async fn display_box_is_fixed() {
        let html = render(vec![entry("x", None, Some("x"))], "/gallery/").await;
        assert!(html.contains(r#"width="300""#));
        assert!(html.contains(r#"height="300""#));
        assert!(html.contains(r#"href="/gallery/x""#));
    }
}
