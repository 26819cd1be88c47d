use clap::Parser;

/// Takes no arguments; the artifact, resolution and destination are fixed.
#[derive(Parser)]
#[command(name = "yolo-barcode-export")]
#[command(
	version,
	about = "Download the YOLOv8s barcode detector from HuggingFace and export it to ONNX",
	long_about = None
)]
pub struct Cli {}
