use chrono::{DateTime, Utc};
use common::{BlockRole, BlockType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::service::BlockEdit;
use crate::entity::block;

/// Editable fields of a block. Absent and empty fields clear the value.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateBlockRequest {
    #[schema(example = "Forged wheels")]
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    /// One bullet per line; blank lines are dropped.
    #[schema(example = "One\nTwo\nThree")]
    pub bullets: Option<String>,
}

impl From<UpdateBlockRequest> for BlockEdit {
    fn from(req: UpdateBlockRequest) -> Self {
        Self {
            title: req.title,
            subtitle: req.subtitle,
            body: req.body,
            bullets: req.bullets,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlockResponse {
    pub id: Uuid,
    pub page_id: Uuid,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    #[schema(example = "intro")]
    pub key: String,
    pub role: BlockRole,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    pub order: i32,
    pub bullets: Option<Vec<String>>,
    /// Type-tagged metadata, e.g. `{"type": "WHEELS", "ctaButton": "..."}`.
    #[schema(value_type = Object)]
    pub meta: common::BlockMeta,
    pub updated_at: DateTime<Utc>,
}

impl From<block::Model> for BlockResponse {
    fn from(model: block::Model) -> Self {
        Self {
            id: model.id,
            page_id: model.page_id,
            block_type: model.block_type,
            key: model.key,
            role: model.role,
            title: model.title,
            subtitle: model.subtitle,
            body: model.body,
            order: model.order,
            bullets: model.bullets.map(|b| b.into_inner()),
            meta: model.meta,
            updated_at: model.updated_at,
        }
    }
}

/// Result of a block edit, including the cached paths that were dropped.
#[derive(Serialize, utoipa::ToSchema)]
pub struct UpdateBlockResponse {
    pub block: BlockResponse,
    #[schema(example = json!(["/", "/admin/pages/home"]))]
    pub revalidated: Vec<String>,
}
