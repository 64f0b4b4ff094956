#![allow(dead_code)]

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod message;
pub mod navigation;
pub mod onboarding;
pub mod seed;
pub mod toast;

use std::sync::atomic::{AtomicBool, Ordering};

/// Whether debug logging is active, shared between the logger filter and the config toggle.
static DEBUG_LOGGING: AtomicBool = AtomicBool::new(false);

pub fn set_debug_logging(enabled: bool) {
    DEBUG_LOGGING.store(enabled, Ordering::Relaxed);
}

pub fn debug_logging() -> bool {
    DEBUG_LOGGING.load(Ordering::Relaxed)
}
