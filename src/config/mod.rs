// Configuration module
// Contains named load profiles for the HTTP client and session counts

pub mod load_profiles;

pub use load_profiles::{get_load_profile, LoadProfile};
