use stone_eng_frontend::{App, AppProps, PROPS_ELEMENT_ID, ROOT_ELEMENT_ID};

const BUNDLE_PATH: &str = "/pkg/stone_eng_frontend.js";

/// Server-renders the landing page and wraps it in a full document that
/// carries the props for hydration.
pub async fn render_page(props: AppProps) -> Result<String, serde_json::Error> {
    let props_json = embed_json(&serde_json::to_string(&props)?);
    let body = yew::ServerRenderer::<App>::with_props(move || props)
        .render()
        .await;

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Stone.Eng</title>
<meta name="description" content="Stone.Eng">
<link rel="icon" href="/favicon.ico">
<script type="module">import init from '{bundle}'; init();</script>
</head>
<body>
<div id="{root}">{body}</div>
<script id="{props_id}" type="application/json">{props_json}</script>
</body>
</html>
"#,
        bundle = BUNDLE_PATH,
        root = ROOT_ELEMENT_ID,
        body = body,
        props_id = PROPS_ELEMENT_ID,
        props_json = props_json,
    ))
}

/// `<` only occurs inside JSON strings, so its unicode escape keeps the
/// value intact while making `</script>` impossible.
fn embed_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;
    use stone_eng_frontend::models::{GalleryList, SiteOptions};

    fn props_from(json: &str) -> AppProps {
        let list: GalleryList = serde_json::from_str(json).unwrap();
        AppProps {
            gallery: list.contents,
            options: SiteOptions::default(),
        }
    }

    fn embedded_props(page: &str) -> &str {
        let start_tag = format!(r#"<script id="{}" type="application/json">"#, PROPS_ELEMENT_ID);
        let start = page.find(&start_tag).unwrap() + start_tag.len();
        let end = start + page[start..].find("</script>").unwrap();
        &page[start..end]
    }

    #[tokio::test]
    async fn page_embeds_the_props_it_rendered() {
        let props = props_from(crate::test_support::GALLERY_JSON);
        let page = render_page(props.clone()).await.unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<div id="app">"#));
        assert!(page.contains("https://images.example/chair.jpg"));
        assert!(page.contains(BUNDLE_PATH));

        let embedded: AppProps = serde_json::from_str(embedded_props(&page)).unwrap();
        assert_eq!(embedded, props);
    }

    #[tokio::test]
    async fn hostile_title_cannot_close_the_props_script() {
        let props = props_from(
            r#"{"contents": [{
                "id": "x",
                "title": "</script><script>alert(1)</script>",
                "image": {"url": "https://images.example/x.jpg", "width": 10, "height": 10},
                "createdAt": "2022-04-01T00:00:00Z"
            }]}"#,
        );
        let page = render_page(props.clone()).await.unwrap();

        let raw = embedded_props(&page);
        assert!(!raw.contains('<'));
        let embedded: AppProps = serde_json::from_str(raw).unwrap();
        assert_eq!(embedded.gallery[0].title, props.gallery[0].title);
    }
}
