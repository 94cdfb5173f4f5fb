mod output;
mod root;

pub use root::Cli;
