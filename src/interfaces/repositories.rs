pub mod account;
pub mod memory_store;
pub mod project;
