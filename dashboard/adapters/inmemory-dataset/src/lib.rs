pub use dataset::InMemoryDataset;

mod dataset;
