pub mod adapter;
pub mod config;
pub mod handlers;
pub mod http;
pub mod humanize;
pub mod observability;
