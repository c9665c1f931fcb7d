use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One gallery item as delivered by the content API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryEntry {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    /// Absent images render as a broken image rather than dropping the entry.
    #[serde(default)]
    pub image: Option<GalleryImage>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

impl GalleryEntry {
    pub fn image_url(&self) -> &str {
        self.image.as_ref().map(|image| image.url.as_str()).unwrap_or("")
    }
}

/// List envelope of the content API. Paging fields are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryList {
    #[serde(deserialize_with = "skip_undecodable")]
    pub contents: Vec<GalleryEntry>,
}

// `createdAt` is informational; anything that is not RFC 3339 becomes None.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|t| t.with_timezone(&Utc)))
}

fn skip_undecodable<'de, D>(deserializer: D) -> Result<Vec<GalleryEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<GalleryEntry>(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping gallery entry: {}", e);
                None
            }
        })
        .collect())
}

/// Switches between the two published page variants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteOptions {
    /// Show the confirmation dialog after a successful contact submission.
    pub alert_on_success: bool,
    /// Prefix joined to an entry's `link` to build the tile href.
    pub gallery_link_base: String,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            alert_on_success: true,
            gallery_link_base: String::new(),
        }
    }
}
