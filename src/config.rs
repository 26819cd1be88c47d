use std::path::PathBuf;

pub const HF_REPO: &str = "Piero2411/YOLOV8s-Barcode-Detection";
pub const HF_FILENAME: &str = "YOLOV8s_Barcode_Detection.pt";
pub const INPUT_SIZE: u32 = 640;
pub const OUTPUT_FILENAME: &str = "yolov8s-barcode.onnx";

const DEFAULT_PYTHON: &str = "python3";
const PYTHON_ENV: &str = "YOLO_EXPORT_PYTHON";

#[derive(Debug, Clone)]
pub struct Config {
	pub hf_repo: String,
	pub hf_filename: String,
	pub input_size: u32,
	pub output_path: PathBuf,
	/// Interpreter that hosts the ultralytics exporter.
	pub python: PathBuf,
}

impl Config {
	pub fn new() -> Self {
		Self {
			hf_repo: HF_REPO.to_string(),
			hf_filename: HF_FILENAME.to_string(),
			input_size: INPUT_SIZE,
			output_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(OUTPUT_FILENAME),
			python: PathBuf::from(DEFAULT_PYTHON),
		}
	}

	pub fn from_env() -> crate::error::Result<Self> {
		Self::with_python_override(std::env::var(PYTHON_ENV).ok())
	}

	fn with_python_override(python: Option<String>) -> crate::error::Result<Self> {
		let mut config = Self::new();

		if let Some(python) = python {
			if python.trim().is_empty() {
				return Err(crate::error::Error::ConfigError(format!(
					"{} is set but empty",
					PYTHON_ENV
				)));
			}
			config.python = PathBuf::from(python);
		}

		Ok(config)
	}
}

impl Default for Config {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn output_lands_next_to_the_crate() {
		let config = Config::new();
		assert_eq!(
			config.output_path.parent().unwrap(),
			std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
		);
		assert_eq!(config.output_path.file_name().unwrap(), OUTPUT_FILENAME);
		assert_eq!(config.input_size, 640);
	}

	#[test]
	fn python_override_replaces_default_interpreter() {
		let config = Config::with_python_override(Some("/opt/venv/bin/python".to_string())).unwrap();
		assert_eq!(config.python, PathBuf::from("/opt/venv/bin/python"));

		let config = Config::with_python_override(None).unwrap();
		assert_eq!(config.python, PathBuf::from(DEFAULT_PYTHON));
	}

	#[test]
	fn empty_python_override_is_rejected() {
		let err = Config::with_python_override(Some("  ".to_string())).unwrap_err();
		assert!(matches!(err, crate::error::Error::ConfigError(_)));
	}
}
