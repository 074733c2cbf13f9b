//! Mediapack - well-known media package element flavors
//!
//! This crate provides the fixed registry of named `type/subtype` flavors
//! used to classify media package elements (tracks, catalogs, attachments,
//! images), the flavor value type itself, and the conventional manifest
//! file name.

// Enforce strict code quality and reliability
#![deny(
    // Safety
    unsafe_code,

    // Correctness
    missing_debug_implementations,
    unreachable_pub,

    // Future compatibility
    future_incompatible,

    // Rust 2018 idioms
    rust_2018_idioms,

    // All warnings must be fixed
    warnings,
)]
#![warn(
    // Documentation
    missing_docs,

    // Error handling best practices
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::unimplemented,
    clippy::todo,

    // Code clarity and maintainability
    clippy::cognitive_complexity,
    clippy::type_complexity,

    // Best practices
    clippy::clone_on_ref_ptr,
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::if_not_else,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
)]

pub mod exceptions;
pub mod exit_codes;
pub mod logger;
pub mod mediapackage;
pub mod version;

// Re-export the types consumers reach for first
pub use exceptions::MediaPackageError;
pub use mediapackage::elements::MANIFEST_FILENAME;
pub use mediapackage::flavor::ElementFlavor;
