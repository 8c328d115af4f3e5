pub mod auth;
pub mod author;
pub mod book;
pub mod normalize;
pub mod user;
