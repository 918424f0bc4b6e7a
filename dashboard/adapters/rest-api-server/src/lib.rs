pub use server::*;

mod server;
