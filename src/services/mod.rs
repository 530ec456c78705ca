// src/services/mod.rs
pub mod transport;
pub mod widget;
