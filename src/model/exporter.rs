use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

// Ultralytics logs to stdout, so everything it prints is pushed to stderr and
// the final report is the only JSON line we emit on stdout.
const EXPORT_DRIVER: &str = r#"
import contextlib, json, sys
with contextlib.redirect_stdout(sys.stderr):
    from ultralytics import YOLO
    exported = YOLO(sys.argv[1]).export(
        format=sys.argv[2], imgsz=int(sys.argv[3]), simplify=sys.argv[4] == "1"
    )
print(json.dumps({"exported": str(exported)}))
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Onnx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Onnx => "onnx",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportRequest<'a> {
    pub checkpoint: &'a Path,
    pub format: ExportFormat,
    pub image_size: u32,
    pub simplify: bool,
}

impl<'a> ExportRequest<'a> {
    /// Square ONNX export with graph simplification.
    pub fn onnx(checkpoint: &'a Path, image_size: u32) -> Self {
        Self {
            checkpoint,
            format: ExportFormat::Onnx,
            image_size,
            simplify: true,
        }
    }
}

pub trait ModelExporter {
    fn export(&self, request: &ExportRequest<'_>) -> Result<PathBuf>;
}

// Non-UTF-8 paths reach us as lossy text and fail to parse, so such a cache
// location surfaces as a `SerializationError`.
#[derive(Debug, Deserialize)]
struct ExportReport {
    exported: PathBuf,
}

/// Drives `YOLO(checkpoint).export(...)` in a Python interpreter.
pub struct UltralyticsExporter {
    python: PathBuf,
}

impl UltralyticsExporter {
    pub fn new(python: PathBuf) -> Self {
        Self { python }
    }
}

impl ModelExporter for UltralyticsExporter {
    fn export(&self, request: &ExportRequest<'_>) -> Result<PathBuf> {
        tracing::info!(
            "Exporting {:?} to {} (imgsz={}, simplify={})",
            request.checkpoint,
            request.format.as_str(),
            request.image_size,
            request.simplify
        );

        let output = Command::new(&self.python)
            .arg("-c")
            .arg(EXPORT_DRIVER)
            .arg(request.checkpoint)
            .arg(request.format.as_str())
            .arg(request.image_size.to_string())
            .arg(if request.simplify { "1" } else { "0" })
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| {
                Error::ExportFailed(format!("Failed to start {:?}: {}", self.python, e))
            })?;

        if !output.status.success() {
            return Err(Error::ExportFailed(format!(
                "Exporter exited with {}",
                output.status
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let exported = parse_export_report(&stdout)?;

        if !exported.exists() {
            return Err(Error::ExportFailed(format!(
                "Exporter reported {:?} but no file exists there",
                exported
            )));
        }

        Ok(exported)
    }
}

fn parse_export_report(stdout: &str) -> Result<PathBuf> {
    let line = stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| line.starts_with('{'))
        .ok_or_else(|| Error::ExportFailed("Exporter printed no report".to_string()))?;

    let report: ExportReport = serde_json::from_str(line)?;
    Ok(report.exported)
}
