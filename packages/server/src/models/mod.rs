pub mod auth;
pub mod block;
pub mod contact;
pub mod image;
pub mod page;
