use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A named document composed of ordered content blocks.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "page")]
pub struct Model {
    /// UUIDv7 primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,

    #[sea_orm(has_many)]
    pub blocks: HasMany<super::block::Entity>,

    pub created_at: DateTimeUtc,
    /// Bumped whenever one of the page's blocks is edited.
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
