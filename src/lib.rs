//! noip-updater: No-IP Dynamic DNS client
//!
//! A library for detecting the caller's public IP address and pushing
//! authenticated updates to a No-IP compatible dynamic DNS endpoint
//! whenever the address changes.

pub mod checker;
pub mod config;
pub mod net;
pub mod scheduler;
pub mod updater;
