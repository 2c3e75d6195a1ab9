pub mod backup;
pub mod filter;
pub mod import;
pub mod session;
pub mod stats;
pub mod store;
