pub mod api_utils;
pub mod components;
pub mod crud;
pub mod data_client;
pub mod icons;
pub mod list_utils;
pub mod modal;
