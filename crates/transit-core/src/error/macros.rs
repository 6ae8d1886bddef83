//! Error macros for transit

/// Return an unknown-node error for the given id
#[macro_export]
macro_rules! bail_unknown_node {
    ($id:expr) => {
        return Err($crate::error::TransitError::unknown_node($id))
    };
}

/// Return a usage error with the given message
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::TransitError::UsageError($msg.to_string()))
    };
}
