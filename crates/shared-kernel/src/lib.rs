//! # Shared kernel
//!
//! Error types shared across the workspace. Every layer reports failures
//! through its own enum ([`error::DomainError`], [`error::InfrastructureError`],
//! [`error::ApplicationError`]), all of which lift into the root
//! [`error::NamedataError`].

// crates/shared-kernel/src/lib.rs

pub mod error;

pub use error::{
    ApplicationError, ApplicationResult, DomainError, DomainResult, ErrorContext,
    InfraResult, InfrastructureError, NamedataError, Result,
};
