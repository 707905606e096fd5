//! Client Routes
//!
//! Paths the app navigates between, and a redirect helper for async flows.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is in a path segment or query value
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Signup,
    Login,
    Recipes,
    Recipe(u32),
    /// Email verification link target
    Verify(String),
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            AppRoute::Home => "/".to_string(),
            AppRoute::Signup => "/signup".to_string(),
            AppRoute::Login => "/login".to_string(),
            AppRoute::Recipes => "/recipes".to_string(),
            AppRoute::Recipe(id) => format!("/recipes/{}", id),
            AppRoute::Verify(token) => format!("/verify?token={}", encode_component(token)),
        }
    }
}

/// Parse the `:id` route param
pub fn parse_recipe_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Signal that navigates whenever it is set; lets spawned tasks redirect
/// without holding the router's navigate closure
pub fn use_redirect() -> RwSignal<Option<AppRoute>> {
    let target = RwSignal::new(None::<AppRoute>);
    let navigate = use_navigate();
    Effect::new(move |_| {
        if let Some(route) = target.get() {
            navigate(&route.path(), Default::default());
        }
    });
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(AppRoute::Home.path(), "/");
        assert_eq!(AppRoute::Recipes.path(), "/recipes");
        assert_eq!(AppRoute::Recipe(42).path(), "/recipes/42");
    }

    #[test]
    fn test_verify_token_is_encoded() {
        let token = "eyJh.b+c/d=";
        assert_eq!(AppRoute::Verify(token.into()).path(), "/verify?token=eyJh.b%2Bc%2Fd%3D");
        let decoded = percent_encoding::percent_decode_str("eyJh.b%2Bc%2Fd%3D").decode_utf8().unwrap();
        assert_eq!(decoded, token);
    }

    #[test]
    fn test_encode_component_keeps_unreserved() {
        assert_eq!(encode_component("jane_doe-1.x~"), "jane_doe-1.x~");
        assert_eq!(encode_component("a b"), "a%20b");
    }

    #[test]
    fn test_parse_recipe_id() {
        assert_eq!(parse_recipe_id("17"), Some(17));
        assert_eq!(parse_recipe_id("new"), None);
        assert_eq!(parse_recipe_id(""), None);
    }
}
