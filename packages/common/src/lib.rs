pub mod adapt;
pub mod block_type;
pub mod bullets;
pub mod media;
pub mod meta;

pub use adapt::{AdaptError, BlockImage, ContentBlock, HomeView};
pub use block_type::{BlockRole, BlockType, UserRole};
pub use meta::{BlockMeta, Bullets, HeroButtons};
