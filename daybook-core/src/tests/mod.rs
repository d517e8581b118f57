mod common;

pub use common::{Rot13, mk_store, write_and_commit};
pub use fake_history::FakeHistory;
