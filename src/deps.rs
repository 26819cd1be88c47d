use crate::error::{Error, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
	/// HuggingFace hub client, compiled in with the `hub` feature.
	HubClient,
	/// The ultralytics Python package that performs the export.
	Ultralytics,
}

impl Dependency {
	/// Checked in this order; the first missing one aborts the run.
	pub const ALL: [Dependency; 2] = [Dependency::HubClient, Dependency::Ultralytics];

	pub fn name(&self) -> &'static str {
		match self {
			Dependency::HubClient => "hf-hub",
			Dependency::Ultralytics => "ultralytics",
		}
	}

	pub fn remediation(&self) -> &'static str {
		match self {
			Dependency::HubClient => "cargo build --release --features hub",
			Dependency::Ultralytics => "pip install ultralytics",
		}
	}
}

pub trait DependencyProbe {
	fn is_available(&self, dep: Dependency) -> bool;
}

pub struct SystemProbe {
	python: PathBuf,
}

impl SystemProbe {
	pub fn new(python: PathBuf) -> Self {
		Self { python }
	}

	fn python_can_import(&self, module: &str) -> bool {
		let status = Command::new(&self.python)
			.arg("-c")
			.arg(format!("import {}", module))
			.stdin(Stdio::null())
			.stdout(Stdio::null())
			.stderr(Stdio::null())
			.status();

		match status {
			Ok(status) => status.success(),
			Err(e) => {
				tracing::debug!("Could not run {:?}: {}", self.python, e);
				false
			}
		}
	}
}

impl DependencyProbe for SystemProbe {
	fn is_available(&self, dep: Dependency) -> bool {
		match dep {
			Dependency::HubClient => cfg!(feature = "hub"),
			Dependency::Ultralytics => self.python_can_import("ultralytics"),
		}
	}
}

pub fn check(probe: &dyn DependencyProbe) -> Result<()> {
	for dep in Dependency::ALL {
		if !probe.is_available(dep) {
			return Err(Error::MissingDependency(dep));
		}
		tracing::debug!("Dependency available: {}", dep.name());
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::RefCell;

	struct Missing {
		missing: Option<Dependency>,
		probed: RefCell<Vec<Dependency>>,
	}

	impl DependencyProbe for Missing {
		fn is_available(&self, dep: Dependency) -> bool {
			self.probed.borrow_mut().push(dep);
			self.missing != Some(dep)
		}
	}

	fn probe(missing: Option<Dependency>) -> Missing {
		Missing {
			missing,
			probed: RefCell::new(Vec::new()),
		}
	}

	#[test]
	fn hub_client_is_checked_before_exporter() {
		let probe = probe(Some(Dependency::HubClient));
		let err = check(&probe).unwrap_err();

		assert!(matches!(err, Error::MissingDependency(Dependency::HubClient)));
		assert_eq!(*probe.probed.borrow(), vec![Dependency::HubClient]);
	}

	#[test]
	fn missing_ultralytics_names_it_with_pip_instruction() {
		let err = check(&probe(Some(Dependency::Ultralytics))).unwrap_err();
		assert_eq!(
			err.to_string(),
			"ultralytics not installed. Run: pip install ultralytics"
		);
	}

	#[test]
	fn all_present_passes() {
		let probe = probe(None);
		assert!(check(&probe).is_ok());
		assert_eq!(probe.probed.borrow().len(), 2);
	}

	#[test]
	fn unrunnable_interpreter_counts_as_missing() {
		let probe = SystemProbe::new(PathBuf::from("/nonexistent/python-for-tests"));
		assert!(!probe.is_available(Dependency::Ultralytics));
	}

	#[cfg(unix)]
	#[test]
	fn interpreter_that_imports_cleanly_counts_as_present() {
		let dir = tempfile::tempdir().unwrap();
		let args = dir.path().join("args");
		let python = crate::test_support::fake_interpreter(
			dir.path(),
			&format!("echo \"$1 $2\" > '{}'\nexit 0", args.display()),
		);

		assert!(SystemProbe::new(python).is_available(Dependency::Ultralytics));
		assert_eq!(
			std::fs::read_to_string(&args).unwrap(),
			"-c import ultralytics\n"
		);
	}

	#[cfg(unix)]
	#[test]
	fn failing_import_counts_as_missing() {
		let dir = tempfile::tempdir().unwrap();
		let python = crate::test_support::fake_interpreter(dir.path(), "exit 1");
		assert!(!SystemProbe::new(python).is_available(Dependency::Ultralytics));
	}

	#[test]
	fn hub_client_follows_feature_flag() {
		let probe = SystemProbe::new(PathBuf::from("python3"));
		assert_eq!(probe.is_available(Dependency::HubClient), cfg!(feature = "hub"));
	}
}
