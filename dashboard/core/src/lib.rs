pub use api::Dashboard;

pub mod api;
pub mod catalog;
pub mod composer;
pub mod presentation;
pub mod selection;

#[cfg(test)]
mod fixtures;
