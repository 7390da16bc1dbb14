#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of content block kinds a page is assembled from.
///
/// When the `sea-orm` feature is enabled, this enum can be used directly in SeaORM entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    /// Top-of-page banner with headline and two buttons.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "HERO"))]
    Hero,
    /// Introductory paragraph with bullets under the banner.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "INTRO"))]
    Intro,
    /// Market segment card, or the section header when its role is `Header`.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "MARKET_SEGMENT"))]
    MarketSegment,
    /// One phase of the product lifecycle.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "LIFECYCLE_STAGE"))]
    LifecycleStage,
    /// Title and intro text of the lifecycle section.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "LIFECYCLE_INTRO"))]
    LifecycleIntro,
    /// Capability item, or the section header when its role is `Header`.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "CAPABILITY"))]
    Capability,
    /// Forged wheels feature section.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "WHEELS"))]
    Wheels,
    /// Company description with slogan.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "COMPANY"))]
    Company,
    /// Closing call to action.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "CTA"))]
    Cta,
}

impl BlockType {
    /// All block types, in page order.
    pub const ALL: &'static [BlockType] = &[
        Self::Hero,
        Self::Intro,
        Self::MarketSegment,
        Self::LifecycleStage,
        Self::LifecycleIntro,
        Self::Capability,
        Self::Wheels,
        Self::Company,
        Self::Cta,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "HERO",
            Self::Intro => "INTRO",
            Self::MarketSegment => "MARKET_SEGMENT",
            Self::LifecycleStage => "LIFECYCLE_STAGE",
            Self::LifecycleIntro => "LIFECYCLE_INTRO",
            Self::Capability => "CAPABILITY",
            Self::Wheels => "WHEELS",
            Self::Company => "COMPANY",
            Self::Cta => "CTA",
        }
    }

    /// Returns true for the types whose section is split into a header and items.
    pub fn has_header(&self) -> bool {
        matches!(self, Self::MarketSegment | Self::Capability)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown block type: {s}"))
    }
}

/// Position of a block inside a header/items section.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema,
)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")
)]
#[serde(rename_all = "lowercase")]
pub enum BlockRole {
    /// Carries the section title/subtitle and is not listed as an item.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "header"))]
    Header,
    #[default]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "item"))]
    Item,
}

impl BlockRole {
    pub fn is_header(&self) -> bool {
        matches!(self, Self::Header)
    }
}

/// Role of an administrative operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")
)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "ADMIN"))]
    Admin,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "EDITOR"))]
    Editor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Editor => "EDITOR",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
