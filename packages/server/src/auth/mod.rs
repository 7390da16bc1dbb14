pub mod access;
pub mod credentials;
pub mod session;
