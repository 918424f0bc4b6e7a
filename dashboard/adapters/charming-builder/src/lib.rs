pub use builder::CharmingBuilder;

mod builder;
mod page;
