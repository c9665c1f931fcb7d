use stone_eng_frontend::models::{GalleryEntry, GalleryList};

use crate::content::client::{ContentClient, ContentFetchError};

pub const GALLERY_ENDPOINT: &str = "gallery";

/// Gallery entries in the order the content API returns them.
pub async fn load_gallery(client: &ContentClient) -> Result<Vec<GalleryEntry>, ContentFetchError> {
    let list: GalleryList = client.get(GALLERY_ENDPOINT).await?;
    tracing::debug!("Loaded {} gallery entries", list.contents.len());
    Ok(list.contents)
}
