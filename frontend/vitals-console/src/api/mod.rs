//! Backend API proxies

pub mod health;
pub mod mock;
