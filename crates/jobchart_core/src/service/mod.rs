//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate parsing, selection, rendering and persistence.
//! - Keep hosts (CLI, FFI) free of storage and selection details.

use crate::repo::kv_store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod assignment_service;
pub mod job_chart_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error surfaced by job chart use cases.
#[derive(Debug)]
pub enum ServiceError {
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "roster storage failed: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
