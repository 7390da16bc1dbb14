pub mod block;
pub mod image;
pub mod page;
pub mod user;
