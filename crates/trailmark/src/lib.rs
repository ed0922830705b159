#![doc = include_str!("../README.md")]

pub mod breadcrumbs;
pub mod config;
pub mod content;
pub mod hierarchy;
pub mod hints;
mod html;
mod permalink;
pub mod schema;
mod site;
pub mod store;

#[cfg(test)]
mod fixtures;

pub use html::*;
pub use permalink::*;
pub use site::*;
