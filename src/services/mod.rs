pub mod asset_service;
pub mod my_asset_service;
pub mod token_service;
pub mod user_service;
