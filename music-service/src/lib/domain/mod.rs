pub mod auth;
pub mod errors;
pub mod playlist;
pub mod rating;
pub mod song;
