use crate::config::Config;
use crate::deps::{self, DependencyProbe};
use crate::error::Result;
use crate::model::{ArtifactFetcher, ExportRequest, ModelExporter};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub checkpoint: PathBuf,
    pub exported: PathBuf,
    pub output_path: PathBuf,
    pub size_bytes: u64,
}

/// Check dependencies, download the checkpoint, export it and install the
/// result at `config.output_path`.
///
/// The output path is only touched once the export has succeeded, and is
/// replaced in a single rename.
pub fn run(
    config: &Config,
    probe: &dyn DependencyProbe,
    fetcher: &dyn ArtifactFetcher,
    exporter: &dyn ModelExporter,
) -> Result<ExportSummary> {
    deps::check(probe)?;

    println!("Downloading {} from {}...", config.hf_filename, config.hf_repo);
    let checkpoint = fetcher.fetch(&config.hf_repo, &config.hf_filename)?;
    println!("Downloaded to: {}", checkpoint.display());

    println!(
        "Loading model and exporting to ONNX (imgsz={})...",
        config.input_size
    );
    let exported = exporter.export(&ExportRequest::onnx(&checkpoint, config.input_size))?;
    println!("Exported to: {}", exported.display());

    let size_bytes = install_artifact(&exported, &config.output_path)?;
    println!("Copied to: {}", config.output_path.display());

    println!("Done. Model size: {}", format_size_mb(size_bytes));

    Ok(ExportSummary {
        checkpoint,
        exported,
        output_path: config.output_path.clone(),
        size_bytes,
    })
}

/// Copy `src` over `dst`, keeping permissions and modification time.
///
/// The bytes are staged next to `dst` and renamed into place, so a failed copy
/// leaves any existing `dst` untouched. Returns the installed size in bytes.
pub fn install_artifact(src: &Path, dst: &Path) -> Result<u64> {
    let dir = match dst.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let metadata = fs::metadata(src)?;
    let mut source = File::open(src)?;
    let mut staged = NamedTempFile::new_in(dir)?;

    io::copy(&mut source, staged.as_file_mut())?;
    staged.as_file().set_permissions(metadata.permissions())?;
    match metadata.modified() {
        Ok(modified) => staged.as_file().set_modified(modified)?,
        Err(e) => tracing::warn!("Could not read modification time of {:?}: {}", src, e),
    }

    staged.persist(dst).map_err(|e| e.error)?;
    tracing::debug!("Installed {:?} at {:?}", src, dst);

    Ok(fs::metadata(dst)?.len())
}

pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / BYTES_PER_MB)
}
