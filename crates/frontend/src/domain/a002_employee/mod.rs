pub mod api;
pub mod picker;

/// Shown instead of the list when every employee already has a contract
pub const EMPTY_PLACEHOLDER: &str = "No employees found without contracts.";
