pub mod api;
pub mod picker;

/// Shown instead of the list when the backend has no contract types
pub const EMPTY_PLACEHOLDER: &str = "No contract types available.";
