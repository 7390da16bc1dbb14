use serde::{Deserialize, Serialize};

use crate::block_type::BlockType;

/// Captions of the two hero banner buttons.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HeroButtons {
    #[serde(default)]
    pub primary: String,
    #[serde(default)]
    pub secondary: String,
}

/// Type-specific extra fields of a block.
///
/// Stored as a JSON document tagged with the block type, e.g.
/// `{"type": "WHEELS", "ctaButton": "Send us your wheel specification"}`.
/// Each variant declares exactly the optional fields its section reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sea-orm", derive(sea_orm::FromJsonQueryResult))]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum BlockMeta {
    Hero {
        #[serde(default)]
        buttons: HeroButtons,
    },
    Intro {
        #[serde(default)]
        cta_button: Option<String>,
    },
    MarketSegment,
    LifecycleStage,
    LifecycleIntro,
    Capability {
        /// Textual photo captions kept for blocks without uploaded images.
        #[serde(default)]
        photos: Vec<String>,
        #[serde(default)]
        additional_text: Option<String>,
    },
    Wheels {
        #[serde(default)]
        cta_button: Option<String>,
    },
    Company {
        #[serde(default)]
        slogan: Option<String>,
    },
    Cta,
}

impl BlockMeta {
    /// Metadata with every optional field unset for the given block type.
    pub fn empty(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Hero => Self::Hero {
                buttons: HeroButtons::default(),
            },
            BlockType::Intro => Self::Intro { cta_button: None },
            BlockType::MarketSegment => Self::MarketSegment,
            BlockType::LifecycleStage => Self::LifecycleStage,
            BlockType::LifecycleIntro => Self::LifecycleIntro,
            BlockType::Capability => Self::Capability {
                photos: Vec::new(),
                additional_text: None,
            },
            BlockType::Wheels => Self::Wheels { cta_button: None },
            BlockType::Company => Self::Company { slogan: None },
            BlockType::Cta => Self::Cta,
        }
    }

    /// The block type this metadata variant belongs to.
    pub fn block_type(&self) -> BlockType {
        match self {
            Self::Hero { .. } => BlockType::Hero,
            Self::Intro { .. } => BlockType::Intro,
            Self::MarketSegment => BlockType::MarketSegment,
            Self::LifecycleStage => BlockType::LifecycleStage,
            Self::LifecycleIntro => BlockType::LifecycleIntro,
            Self::Capability { .. } => BlockType::Capability,
            Self::Wheels { .. } => BlockType::Wheels,
            Self::Company { .. } => BlockType::Company,
            Self::Cta => BlockType::Cta,
        }
    }

    pub fn hero_buttons(&self) -> Option<&HeroButtons> {
        match self {
            Self::Hero { buttons } => Some(buttons),
            _ => None,
        }
    }

    /// Caption of the section's call-to-action button (intro and wheels).
    pub fn cta_button(&self) -> Option<&str> {
        match self {
            Self::Intro { cta_button } | Self::Wheels { cta_button } => cta_button.as_deref(),
            _ => None,
        }
    }

    pub fn slogan(&self) -> Option<&str> {
        match self {
            Self::Company { slogan } => slogan.as_deref(),
            _ => None,
        }
    }

    pub fn photo_captions(&self) -> &[String] {
        match self {
            Self::Capability { photos, .. } => photos,
            _ => &[],
        }
    }

    pub fn additional_text(&self) -> Option<&str> {
        match self {
            Self::Capability {
                additional_text, ..
            } => additional_text.as_deref(),
            _ => None,
        }
    }
}

/// Ordered bullet list persisted as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(feature = "sea-orm", derive(sea_orm::FromJsonQueryResult))]
#[serde(transparent)]
pub struct Bullets(pub Vec<String>);

impl Bullets {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Bullets {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}
