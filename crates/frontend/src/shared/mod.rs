pub mod api_error;
pub mod api_utils;
pub mod browser;
pub mod config;
pub mod page_effect;
pub mod picker_list;
