use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Writes an executable `sh` script that stands in for the Python interpreter.
///
/// It is invoked as `<script> -c <driver> <args...>`, so the driver's own
/// arguments start at `$3`.
pub fn fake_interpreter(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("fake-python");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}
