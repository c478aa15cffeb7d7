pub mod handler;
pub mod luhn;
pub mod models;
pub mod service;
