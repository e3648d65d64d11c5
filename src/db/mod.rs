pub mod initialize;
pub mod log;
pub mod models;
pub mod queries;
pub mod store;

pub use store::JobStore;
