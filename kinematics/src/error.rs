use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{path} doesn't exist")]
    FileNotFound { path: String },

    #[error("couldn't read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// A row isn't exactly two numeric fields
    #[error("{source_name}, line {line}: {reason}")]
    Parse {
        source_name: String,
        line: u64,
        reason: String,
    },

    /// The two angle series have a different number of rows
    #[error("first angle series has {first} rows, but the second has {second}")]
    FormatMismatch { first: usize, second: usize },

    #[error("no rows in the angle series")]
    EmptySeries,

    #[error("link lengths must be positive, got l1 = {l1}, l2 = {l2}")]
    InvalidLinkLength { l1: f64, l2: f64 },

    /// Frames accumulate a trajectory, so they must be produced in order
    #[error("frame {got} requested, but frame {expected} is next")]
    FrameOutOfOrder { expected: usize, got: usize },

    #[error("frame {got} requested, but there are only {len} frames")]
    FrameOutOfRange { got: usize, len: usize },
}
