//! Snapshot export: turn the rendered list view into `todo-list.pdf`.
//!
//! - **raster**: paints a ratatui [`Buffer`](ratatui::buffer::Buffer) into an RGB image
//! - **layout**: A4 page geometry and sliding-window pagination
//! - **pdf**: minimal PDF writer for one JPEG or Helvetica text
//! - **text**: selectable-text rendition paginated by line count
//! - **exporter**: the pipeline tying the steps together

pub mod exporter;
pub mod layout;
pub mod pdf;
pub mod raster;
pub mod text;

pub use exporter::{
    ExportMode, ExportOutcome, RenderedDocument, SnapshotExporter, EXPORT_FILENAME,
    JPEG_QUALITY, OVERSAMPLING,
};
pub use layout::{PageLayout, Placement, A4};
