pub mod entry_paths;
pub mod switch;
pub mod tags;
