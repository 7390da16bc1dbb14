use std::collections::HashMap;

use chrono::Utc;
use common::{BlockImage, ContentBlock, bullets};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionSession, TransactionTrait,
};
use uuid::Uuid;

use crate::entity::{block, image, page};

/// Raw values submitted by the block edit form.
///
/// `None` and `Some("")` both mean "cleared".
#[derive(Debug, Clone, Default)]
pub struct BlockEdit {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    /// Line-delimited bullet text.
    pub bullets: Option<String>,
}

/// A block edit after normalization, exactly as it will be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEdit {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    pub bullets: Option<Vec<String>>,
}

impl BlockEdit {
    pub fn normalize(self) -> NormalizedEdit {
        NormalizedEdit {
            title: non_empty(self.title),
            subtitle: non_empty(self.subtitle),
            body: non_empty(self.body),
            bullets: self.bullets.as_deref().and_then(bullets::parse),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Outcome of a block update that found its block.
#[derive(Debug, Clone)]
pub struct UpdatedBlock {
    pub block: block::Model,
    pub page_slug: String,
}

/// A page together with its blocks, ordered for display.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page: page::Model,
    pub blocks: Vec<ContentBlock>,
}

pub struct ContentService<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ContentService<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_page(&self, slug: &str) -> Result<Option<page::Model>, DbErr> {
        page::Entity::find()
            .filter(page::Column::Slug.eq(slug))
            .one(self.conn)
            .await
    }

    /// Pages ordered by most recent modification.
    pub async fn list_pages(&self) -> Result<Vec<page::Model>, DbErr> {
        page::Entity::find()
            .order_by_desc(page::Column::UpdatedAt)
            .order_by_asc(page::Column::Slug)
            .all(self.conn)
            .await
    }

    /// Raw block rows of a page, ordered by `order` then `key`.
    pub async fn page_blocks(&self, page_id: Uuid) -> Result<Vec<block::Model>, DbErr> {
        block::Entity::find()
            .filter(block::Column::PageId.eq(page_id))
            .order_by_asc(block::Column::Order)
            .order_by_asc(block::Column::Key)
            .all(self.conn)
            .await
    }

    /// Load a page and its blocks with their images attached, or `None` if
    /// no page has this slug.
    pub async fn load_page(&self, slug: &str) -> Result<Option<PageContent>, DbErr> {
        let Some(page) = self.find_page(slug).await? else {
            return Ok(None);
        };

        let rows = self.page_blocks(page.id).await?;
        let block_ids: Vec<Uuid> = rows.iter().map(|b| b.id).collect();

        let mut images_by_block: HashMap<Uuid, Vec<BlockImage>> = HashMap::new();
        if !block_ids.is_empty() {
            let images = image::Entity::find()
                .filter(image::Column::BlockId.is_in(block_ids))
                .order_by_asc(image::Column::CreatedAt)
                .order_by_asc(image::Column::Id)
                .all(self.conn)
                .await?;
            for img in images {
                if let Some(block_id) = img.block_id {
                    images_by_block.entry(block_id).or_default().push(BlockImage {
                        url: img.url,
                        alt: img.alt,
                    });
                }
            }
        }

        let blocks = rows
            .into_iter()
            .map(|row| {
                let images = images_by_block.remove(&row.id).unwrap_or_default();
                to_content_block(row, images)
            })
            .collect();

        Ok(Some(PageContent { page, blocks }))
    }

    pub async fn find_block(&self, id: Uuid) -> Result<Option<block::Model>, DbErr> {
        block::Entity::find_by_id(id).one(self.conn).await
    }

    /// Slug of the page owning a block.
    pub async fn block_page_slug(&self, block_id: Uuid) -> Result<Option<String>, DbErr> {
        let Some(found) = self.find_block(block_id).await? else {
            return Ok(None);
        };
        Ok(page::Entity::find_by_id(found.page_id)
            .one(self.conn)
            .await?
            .map(|p| p.slug))
    }
}

impl<'a, C: ConnectionTrait + TransactionTrait> ContentService<'a, C> {
    /// Apply an edit to one block's text fields and bullets.
    ///
    /// Type, key and order are never touched. The owning page's `updated_at`
    /// is bumped in the same transaction. Returns `None` if the block does
    /// not exist.
    pub async fn update_block(
        &self,
        id: Uuid,
        edit: BlockEdit,
    ) -> Result<Option<UpdatedBlock>, DbErr> {
        let edit = edit.normalize();
        let txn = self.conn.begin().await?;

        let Some(existing) = block::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };
        let owner = page::Entity::find_by_id(existing.page_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("page {}", existing.page_id)))?;

        let now = Utc::now();
        let mut active: block::ActiveModel = existing.into();
        active.title = Set(edit.title);
        active.subtitle = Set(edit.subtitle);
        active.body = Set(edit.body);
        active.bullets = Set(edit.bullets.map(Into::into));
        active.updated_at = Set(now);
        let updated = active.update(&txn).await?;

        let page_slug = owner.slug.clone();
        let mut owner: page::ActiveModel = owner.into();
        owner.updated_at = Set(now);
        owner.update(&txn).await?;

        txn.commit().await?;

        Ok(Some(UpdatedBlock {
            block: updated,
            page_slug,
        }))
    }
}

fn to_content_block(row: block::Model, images: Vec<BlockImage>) -> ContentBlock {
    ContentBlock {
        id: row.id,
        key: row.key,
        block_type: row.block_type,
        role: row.role,
        title: row.title,
        subtitle: row.subtitle,
        body: row.body,
        order: row.order,
        bullets: row.bullets.map(|b| b.into_inner()),
        meta: row.meta,
        images,
    }
}
