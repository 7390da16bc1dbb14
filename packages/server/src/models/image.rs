use serde::Serialize;
use uuid::Uuid;

use crate::entity::image;

/// A stored image reference.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub id: Uuid,
    /// Durable URL served by the image host.
    #[schema(example = "https://res.cloudinary.com/demo/image/upload/v1/reems/reems-blocks/abc.jpg")]
    pub url: String,
    pub alt: Option<String>,
    /// Identifier assigned by the image host.
    #[schema(example = "reems/reems-blocks/abc")]
    pub public_id: String,
}

impl From<image::Model> for ImageResponse {
    fn from(model: image::Model) -> Self {
        Self {
            id: model.id,
            url: model.url,
            alt: model.alt,
            public_id: model.public_id,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct UploadImageResponse {
    #[schema(example = true)]
    pub success: bool,
    pub image: ImageResponse,
}
