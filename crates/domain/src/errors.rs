use thiserror::Error;

use crate::host_codec::HostValidationErrors;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Static hosts file not found: {0}")]
    StoreNotFound(String),

    #[error("Permission denied on static hosts file: {0}")]
    PermissionDenied(String),

    #[error("Corrupt static hosts file {path} at line {line}: {errors}")]
    CorruptStore {
        path: String,
        line: usize,
        errors: HostValidationErrors,
    },

    #[error("Invalid static DHCP host: {0}")]
    InvalidHost(HostValidationErrors),

    #[error("Duplicated {field} address: {value}")]
    DuplicateEntry { field: String, value: String },

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    pub fn duplicate(field: &str, value: impl ToString) -> Self {
        Self::DuplicateEntry {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

impl From<HostValidationErrors> for DomainError {
    fn from(errors: HostValidationErrors) -> Self {
        Self::InvalidHost(errors)
    }
}
