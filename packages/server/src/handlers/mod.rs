pub mod admin;
pub mod auth;
pub mod block;
pub mod contact;
pub mod page;
pub mod site;
pub mod upload;
