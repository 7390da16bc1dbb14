use common::{BlockMeta, BlockRole, BlockType, Bullets};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One content unit of a page. `(page_id, key)` is unique.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "block")]
pub struct Model {
    /// UUIDv7 primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(indexed)]
    pub page_id: Uuid,
    #[sea_orm(belongs_to, from = "page_id", to = "id")]
    pub page: HasOne<super::page::Entity>,

    #[sea_orm(column_name = "type")]
    pub block_type: BlockType,
    /// Human-assigned key, e.g. `hero` or `market_automotive`.
    pub key: String,
    pub role: BlockRole,

    #[sea_orm(column_type = "Text", nullable)]
    pub title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub subtitle: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub body: Option<String>,

    pub order: i32,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub bullets: Option<Bullets>,
    #[sea_orm(column_type = "JsonBinary")]
    pub meta: BlockMeta,

    #[sea_orm(has_many)]
    pub images: HasMany<super::image::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
