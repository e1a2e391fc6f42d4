//! Environment-conditioned selection of the HTML entry template.
//!
//! A production build must consume `index.production.html` (strict CSP) while
//! `index.html` stays source-controlled with the development template. The
//! selector overwrites the working entry at build start and restores it at
//! build end; non-production builds never touch the file. Writes go through a
//! temp file and an atomic rename so the working entry is never observable
//! half-written, and in-process callers can hold a [`SwapGuard`] whose `Drop`
//! restores the development template on every exit path.

pub mod cli;
mod error;
mod mode;
mod selector;

pub use error::Error;
pub use mode::BuildMode;
pub use selector::{
    SwapGuard, TemplatePair, DEVELOPMENT_TEMPLATE, PRODUCTION_TEMPLATE, WORKING_ENTRY,
};
