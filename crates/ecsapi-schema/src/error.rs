//! Request validation errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Invalid VLAN range '{0}': expected '<from>-<to>' with from <= to")]
    InvalidVlanRange(String),

    #[error("Invalid VLAN id {0}: must be between 1 and 4094")]
    InvalidVlanId(u16),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
