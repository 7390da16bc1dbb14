//! Content adaptation: persisted blocks in, typed section view-models out.
//!
//! Every function here is pure. Singleton sections are located by block key,
//! list sections by block type, and lists are ordered by the stored `order`
//! (ties broken by key) so the result does not depend on input sequence.

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::block_type::{BlockRole, BlockType};
use crate::meta::{BlockMeta, HeroButtons};

pub const HERO_KEY: &str = "hero";
pub const INTRO_KEY: &str = "intro";
pub const LIFECYCLE_INTRO_KEY: &str = "lifecycle_intro";
pub const WHEELS_KEY: &str = "wheels";
pub const COMPANY_KEY: &str = "company";
pub const FINAL_CTA_KEY: &str = "final_cta";

const DEFAULT_MARKET_TITLE: &str = "Market segments";
const DEFAULT_CAPABILITIES_TITLE: &str = "Capabilities";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdaptError {
    /// A block the page cannot render without is absent.
    #[error("required block '{key}' not found")]
    MissingBlock { key: &'static str },
}

/// An image uploaded for a block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockImage {
    pub url: String,
    pub alt: Option<String>,
}

/// A persisted block with its images, as read from the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentBlock {
    pub id: Uuid,
    pub key: String,
    pub block_type: BlockType,
    pub role: BlockRole,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    pub order: i32,
    pub bullets: Option<Vec<String>>,
    pub meta: BlockMeta,
    pub images: Vec<BlockImage>,
}

impl ContentBlock {
    /// A block of the given type with no text, bullets or images.
    pub fn new(key: impl Into<String>, block_type: BlockType, order: i32) -> Self {
        Self {
            id: Uuid::now_v7(),
            key: key.into(),
            block_type,
            role: BlockRole::Item,
            title: None,
            subtitle: None,
            body: None,
            order,
            bullets: None,
            meta: BlockMeta::empty(block_type),
            images: Vec::new(),
        }
    }

    fn title_text(&self) -> String {
        self.title.clone().unwrap_or_default()
    }

    fn subtitle_text(&self) -> String {
        self.subtitle.clone().unwrap_or_default()
    }

    fn body_text(&self) -> String {
        self.body.clone().unwrap_or_default()
    }

    fn bullet_list(&self) -> Vec<String> {
        self.bullets.clone().unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroView {
    pub headline: String,
    pub subheadline: String,
    pub description: String,
    pub buttons: HeroButtons,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntroView {
    pub text: String,
    pub bullets: Vec<String>,
    pub cta_button: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct HeroIntroView {
    pub hero: HeroView,
    pub intro: IntroView,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SegmentCard {
    pub title: String,
    pub lead_text: String,
    pub bullets: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct MarketSegmentsView {
    pub title: String,
    pub subtitle: String,
    pub segments: Vec<SegmentCard>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct LifecyclePhase {
    pub title: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct LifecycleView {
    pub title: String,
    pub intro: String,
    pub phases: Vec<LifecyclePhase>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct PhotoView {
    pub url: String,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityItem {
    pub title: String,
    /// Legacy textual captions, shown when no image has been uploaded.
    pub photos: Vec<String>,
    /// Uploaded images, preferred for display.
    pub photo_urls: Vec<PhotoView>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_bullets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_text: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct CapabilitiesView {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<CapabilityItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForgedWheelsView {
    pub title: String,
    pub subtitle: String,
    pub text: String,
    pub bullets: Vec<String>,
    pub cta_button: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyView {
    pub title: String,
    pub subtitle: String,
    pub text: String,
    pub slogan: String,
    pub final_cta: String,
}

/// Every section of the home page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub hero: HeroView,
    pub intro: IntroView,
    pub market_segments: MarketSegmentsView,
    pub lifecycle: LifecycleView,
    pub capabilities: CapabilitiesView,
    pub forged_wheels: ForgedWheelsView,
    pub company: CompanyView,
}

fn find_by_key<'a>(blocks: &'a [ContentBlock], key: &str) -> Option<&'a ContentBlock> {
    blocks.iter().find(|b| b.key == key)
}

fn require_key<'a>(
    blocks: &'a [ContentBlock],
    key: &'static str,
) -> Result<&'a ContentBlock, AdaptError> {
    find_by_key(blocks, key).ok_or(AdaptError::MissingBlock { key })
}

/// Blocks of one type ordered by `(order, key)`.
fn sorted_of_type(blocks: &[ContentBlock], block_type: BlockType) -> Vec<&ContentBlock> {
    let mut matching: Vec<&ContentBlock> = blocks
        .iter()
        .filter(|b| b.block_type == block_type)
        .collect();
    matching.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.key.cmp(&b.key)));
    matching
}

/// Split a header/items section into its (first) header and its items.
fn split_header(
    blocks: &[ContentBlock],
    block_type: BlockType,
) -> (Option<&ContentBlock>, Vec<&ContentBlock>) {
    let (headers, items): (Vec<&ContentBlock>, Vec<&ContentBlock>) = sorted_of_type(blocks, block_type)
        .into_iter()
        .partition(|b| b.role.is_header());
    (headers.into_iter().next(), items)
}

/// Hero banner and intro. Both blocks are required.
pub fn adapt_hero_and_intro(blocks: &[ContentBlock]) -> Result<HeroIntroView, AdaptError> {
    let hero = require_key(blocks, HERO_KEY)?;
    let intro = require_key(blocks, INTRO_KEY)?;

    Ok(HeroIntroView {
        hero: HeroView {
            headline: hero.title_text(),
            subheadline: hero.subtitle_text(),
            description: hero.body_text(),
            buttons: hero.meta.hero_buttons().cloned().unwrap_or_default(),
        },
        intro: IntroView {
            text: intro.body_text(),
            bullets: intro.bullet_list(),
            cta_button: intro.meta.cta_button().unwrap_or_default().to_owned(),
        },
    })
}

pub fn adapt_market_segments(blocks: &[ContentBlock]) -> MarketSegmentsView {
    let (header, items) = split_header(blocks, BlockType::MarketSegment);

    MarketSegmentsView {
        title: header
            .and_then(|h| h.title.clone())
            .unwrap_or_else(|| DEFAULT_MARKET_TITLE.to_owned()),
        subtitle: header.map(ContentBlock::subtitle_text).unwrap_or_default(),
        segments: items
            .into_iter()
            .map(|b| SegmentCard {
                title: b.title_text(),
                lead_text: b.body_text(),
                bullets: b.bullet_list(),
            })
            .collect(),
    }
}

/// Lifecycle section. A missing intro block yields empty title and intro.
pub fn adapt_lifecycle(blocks: &[ContentBlock]) -> LifecycleView {
    let intro = find_by_key(blocks, LIFECYCLE_INTRO_KEY);

    LifecycleView {
        title: intro.map(ContentBlock::title_text).unwrap_or_default(),
        intro: intro.map(ContentBlock::body_text).unwrap_or_default(),
        phases: sorted_of_type(blocks, BlockType::LifecycleStage)
            .into_iter()
            .map(|b| LifecyclePhase {
                title: b.title_text(),
                text: b.body_text(),
            })
            .collect(),
    }
}

pub fn adapt_capabilities(blocks: &[ContentBlock]) -> CapabilitiesView {
    let (header, items) = split_header(blocks, BlockType::Capability);

    CapabilitiesView {
        title: header
            .and_then(|h| h.title.clone())
            .unwrap_or_else(|| DEFAULT_CAPABILITIES_TITLE.to_owned()),
        subtitle: header.map(ContentBlock::subtitle_text).unwrap_or_default(),
        items: items
            .into_iter()
            .map(|b| CapabilityItem {
                title: b.title_text(),
                photos: b.meta.photo_captions().to_vec(),
                photo_urls: b
                    .images
                    .iter()
                    .map(|img| PhotoView {
                        url: img.url.clone(),
                        alt: img.alt.clone().unwrap_or_default(),
                    })
                    .collect(),
                text: b.body_text(),
                additional_bullets: b.bullets.clone(),
                additional_text: b.meta.additional_text().map(str::to_owned),
            })
            .collect(),
    }
}

/// Forged wheels section. The `wheels` block is required.
pub fn adapt_forged_wheels(blocks: &[ContentBlock]) -> Result<ForgedWheelsView, AdaptError> {
    let wheels = require_key(blocks, WHEELS_KEY)?;

    Ok(ForgedWheelsView {
        title: wheels.title_text(),
        subtitle: wheels.subtitle_text(),
        text: wheels.body_text(),
        bullets: wheels.bullet_list(),
        cta_button: wheels.meta.cta_button().unwrap_or_default().to_owned(),
    })
}

/// Company section. `company` is required, `final_cta` is not.
pub fn adapt_company(blocks: &[ContentBlock]) -> Result<CompanyView, AdaptError> {
    let company = require_key(blocks, COMPANY_KEY)?;
    let final_cta = find_by_key(blocks, FINAL_CTA_KEY);

    Ok(CompanyView {
        title: company.title_text(),
        subtitle: company.subtitle_text(),
        text: company.body_text(),
        slogan: company.meta.slogan().unwrap_or_default().to_owned(),
        final_cta: final_cta.map(ContentBlock::body_text).unwrap_or_default(),
    })
}

/// Adapt a page's blocks into every home page section.
pub fn adapt_home(blocks: &[ContentBlock]) -> Result<HomeView, AdaptError> {
    let HeroIntroView { hero, intro } = adapt_hero_and_intro(blocks)?;

    Ok(HomeView {
        hero,
        intro,
        market_segments: adapt_market_segments(blocks),
        lifecycle: adapt_lifecycle(blocks),
        capabilities: adapt_capabilities(blocks),
        forged_wheels: adapt_forged_wheels(blocks)?,
        company: adapt_company(blocks)?,
    })
}
