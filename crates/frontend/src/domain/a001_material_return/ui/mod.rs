pub mod list;
pub mod new_entry;
pub mod update_step;
