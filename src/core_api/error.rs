use std::fmt;

use serde_json::Error as SerdeError;

/// Aggregate errors produced by the ifacedoc API. Document generation
/// itself is a total function; errors only arise at the host boundary,
/// when loading a model or writing output.
#[derive(Debug)]
pub enum IfacedocError {
	/// Failed to encode or decode JSON.
	Serialization(SerdeError),
	/// Failed to perform IO operations.
	Io(std::io::Error),
}

impl fmt::Display for IfacedocError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Serialization(err) => write!(f, "{err}"),
			Self::Io(err) => write!(f, "{err}"),
		}
	}
}

impl std::error::Error for IfacedocError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Serialization(err) => Some(err),
			Self::Io(err) => Some(err),
		}
	}
}

impl From<SerdeError> for IfacedocError {
	fn from(err: SerdeError) -> Self {
		Self::Serialization(err)
	}
}

impl From<std::io::Error> for IfacedocError {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

/// Result type returned by the ifacedoc library.
pub type Result<T> = std::result::Result<T, IfacedocError>;
