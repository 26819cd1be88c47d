use crate::deps::Dependency;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("{} not installed. Run: {}", .0.name(), .0.remediation())]
	MissingDependency(Dependency),
	#[error("Invalid input: {0}")]
	InvalidInput(String),
	#[cfg_attr(not(feature = "hub"), allow(dead_code))]
	#[error("Download failed: {0}")]
	DownloadFailed(String),
	#[error("Export failed: {0}")]
	ExportFailed(String),
	#[error("Configuration error: {0}")]
	ConfigError(String),
	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
	#[error("Serialization error: {0}")]
	SerializationError(String),
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Error::SerializationError(err.to_string())
	}
}

pub type Result<T> = std::result::Result<T, Error>;
