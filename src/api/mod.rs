pub mod assets;
pub mod auth;
pub mod health;
pub mod my_assets;
pub mod swagger;
pub mod users;
