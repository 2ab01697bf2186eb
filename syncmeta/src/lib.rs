pub mod common;
pub mod config;
pub mod file;
pub mod resolve;
pub mod storage;
pub mod store;

#[cfg(test)]
mod tests;
