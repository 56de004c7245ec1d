//! Command-line interface.

mod args;
pub mod demo;
pub mod serve;
pub mod urls;
pub mod view;

pub use args::{Cli, Commands, DemoArgs, ServeArgs, UrlsArgs, ViewArgs};
