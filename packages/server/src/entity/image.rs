use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A hosted media asset. Never mutated after upload.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "image")]
pub struct Model {
    /// UUIDv7 primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub url: String,
    /// Identifier assigned by the image host.
    pub public_id: String,
    pub alt: Option<String>,

    /// NULL until the image is associated with a block.
    pub block_id: Option<Uuid>,
    #[sea_orm(belongs_to, from = "block_id", to = "id")]
    pub block: HasOne<super::block::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
