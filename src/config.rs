//! Application Configuration
//!
//! Compile-time settings for the backend connection and UI timing.

/// Backend base URL, overridable at build time with `RECIPEATS_API_URL`
pub const API_BASE_URL: &str = match option_env!("RECIPEATS_API_URL") {
    Some(url) => url,
    None => "http://localhost:3001",
};

/// localStorage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "recipeats-token";

/// How long a snackbar notice stays on screen
pub const SNACKBAR_HIDE_MS: u32 = 4000;

/// Delay before a cancelled dialog resets its form, so the close animation
/// doesn't show the fields clearing
pub const FORM_CLEAR_DELAY_MS: u32 = 250;
