/// API route modules
pub mod health;
pub mod imports;
pub mod playlists;
pub mod search;
