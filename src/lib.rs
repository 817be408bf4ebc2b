#![doc(test(attr(deny(warnings))))]

//! Form Session offers a sequential data-collection form: a wizard that
//! validates one field at a time, a read-only summary of the submitted values,
//! and a bulk edit mode gated by full validation.

pub mod cli;
pub mod config;
pub mod errors;
pub mod schema;
pub mod session;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Form session tracing initialized.");
    });
}
