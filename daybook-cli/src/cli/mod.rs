mod cli;

pub use cli::{Cli, Command, CreateArgs, DeleteArgs, EditArgs, EntrySeed, InstallArgs, ListArgs};
