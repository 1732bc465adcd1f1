use thiserror::Error;

/// Core domain errors - no I/O dependencies
///
/// The command pipeline itself is total: any configuration renders to a
/// string. Errors only arise when parsing user-supplied names into the
/// domain enums.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown device: {0}")]
    UnknownDevice(String),

    #[error("Unknown operating system: {0}")]
    UnknownOperatingSystem(String),

    #[error("Unknown start mode: {0}")]
    UnknownStartMode(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
