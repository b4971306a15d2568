//! Errors raised by the file transfer protocol.

use std::fmt;
use thiserror::Error;

/// Why a satellite refused to store an incoming file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageLimit {
    /// The satellite already holds as many files as it is allowed.
    MaxFilesReached,
    /// The incoming file does not fit in the remaining byte budget.
    MaxStorageReached,
}

impl fmt::Display for StorageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageLimit::MaxFilesReached => write!(f, "Max Files Reached"),
            StorageLimit::MaxStorageReached => write!(f, "Max Storage Reached"),
        }
    }
}

/// Rejections returned by `send_file`.
///
/// An unreachable target is not an error: the request is ignored instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileTransferError {
    /// File absent on the sender, or still being received by it.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// The receiver already owns a file with that name.
    #[error("file already exists on target: {0}")]
    FileAlreadyExists(String),

    /// Capacity or file count cap exceeded on the receiving satellite.
    #[error("no storage space: {0}")]
    NoStorageSpace(StorageLimit),

    /// Concurrent transfer cap reached on the named satellite.
    #[error("no bandwidth available on {0}")]
    NoBandwidth(String),
}
