mod editor_utils;

pub use editor_utils::{compose_seed, create_editor_buffer, resolve_editor};
