pub mod analysis;
pub mod auth;
pub mod imports;
pub mod orders;
