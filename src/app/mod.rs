pub mod server;

pub use server::{serve, SUBMIT_PATH, TEST_PATH};
