pub mod api_utils;
pub mod backend;
pub mod bridge;
pub mod cells;
pub mod config;
pub mod file_upload;
pub mod form_field;
pub mod icons;
pub mod modal_frame;
pub mod notify;
pub mod stat_card;
