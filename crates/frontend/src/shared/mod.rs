pub mod adapters;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod content;
pub mod date_utils;
pub mod scroll;
pub mod theme;
