pub mod config;
pub mod debounce;
pub mod gateway;
pub mod heuristic;
pub mod http;
pub mod prompts;
pub mod service;
pub mod store;
pub mod trends;
