// File: finchbot-core/src/lib.rs

pub mod services;

pub use finchbot_common::Error;
