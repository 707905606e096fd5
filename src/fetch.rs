//! Fetch State
//!
//! Outcome of a view's data load, so a failed request renders an error
//! instead of a spinner that never stops.

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(Vec<String>),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> FetchState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => FetchState::Loaded(value),
            Err(e) => FetchState::Failed(e.messages()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Mutate the loaded value in place; no-op while loading or failed
    pub fn update_loaded(&mut self, f: impl FnOnce(&mut T)) {
        if let FetchState::Loaded(value) = self {
            f(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: FetchState<u32> = FetchState::from_result(Ok(3));
        assert_eq!(ok.loaded(), Some(&3));

        let failed: FetchState<u32> = FetchState::from_result(Err(ApiError::Decode("eof".into())));
        assert_eq!(failed, FetchState::Failed(vec!["could not read response: eof".to_string()]));
        assert!(!failed.is_loading());
    }

    #[test]
    fn test_update_loaded_only_touches_loaded() {
        let mut state = FetchState::Loaded(vec![1, 2]);
        state.update_loaded(|v| v.push(3));
        assert_eq!(state, FetchState::Loaded(vec![1, 2, 3]));

        let mut loading: FetchState<Vec<u32>> = FetchState::default();
        loading.update_loaded(|v| v.push(3));
        assert!(loading.is_loading());
    }
}
