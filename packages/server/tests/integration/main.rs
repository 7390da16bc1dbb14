mod auth;
mod blocks;
mod common;
mod contact;
mod indexes;
mod pages;
mod upload;
