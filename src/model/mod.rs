pub mod exporter;
pub mod fetcher;

pub use exporter::{ExportRequest, ModelExporter, UltralyticsExporter};
pub use fetcher::{ArtifactFetcher, HubFetcher};
