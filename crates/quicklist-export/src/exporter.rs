//! The export pipeline: capture, encode, paginate, write.

use crate::layout::{PageLayout, A4};
use crate::pdf::{self, SharedResource};
use crate::raster;
use crate::text;
use image::codecs::jpeg::JpegEncoder;
use quicklist_core::{QuicklistError, QuicklistResult};
use quicklist_domain::TodoList;
use quicklist_persistence::AtomicWriter;
use ratatui::buffer::Buffer;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const EXPORT_FILENAME: &str = "todo-list.pdf";
pub const OVERSAMPLING: u32 = 4;
/// Highest quality the JPEG encoder accepts.
pub const JPEG_QUALITY: u8 = 100;

/// Baseline JPEG cannot describe larger images.
const MAX_JPEG_DIMENSION: u32 = u16::MAX as u32;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportMode {
    /// Raster capture of the rendered view, sliced across pages.
    #[default]
    Raster,
    /// The list model laid out as selectable text.
    Text,
}

impl FromStr for ExportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raster" | "image" => Ok(ExportMode::Raster),
            "text" => Ok(ExportMode::Text),
            other => Err(format!("Unknown export mode: {}", other)),
        }
    }
}

/// A finished PDF held in memory.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, page_count: usize },
    /// The view to capture was not mounted; nothing was written.
    NoTarget,
}

pub struct SnapshotExporter;

impl SnapshotExporter {
    /// Rasterizes `view` at [`OVERSAMPLING`], encodes it as JPEG and slices it
    /// across A4 pages.
    pub fn render_snapshot(view: &Buffer) -> QuicklistResult<RenderedDocument> {
        Self::render_snapshot_with(view, &A4, OVERSAMPLING)
    }

    pub fn render_snapshot_with(
        view: &Buffer,
        layout: &PageLayout,
        scale: u32,
    ) -> QuicklistResult<RenderedDocument> {
        if view.area.is_empty() {
            return Err(QuicklistError::Export("view has no area to capture".into()));
        }

        let (width, height) = raster::raster_size(view, scale.max(1));
        if width > MAX_JPEG_DIMENSION || height > MAX_JPEG_DIMENSION {
            return Err(QuicklistError::Export(format!(
                "capture of {}x{} pixels exceeds the JPEG limit",
                width, height
            )));
        }

        let image = raster::rasterize(view, scale);
        let jpeg = Self::encode_jpeg(&image)?;

        let image_height = layout.image_height(width, height);
        let contents: Vec<Vec<u8>> = layout
            .paginate(image_height)
            .iter()
            .map(|p| pdf::image_content(layout, p.x, p.y, p.width, p.height))
            .collect();

        let resource = SharedResource::Jpeg {
            data: &jpeg,
            width,
            height,
        };
        let bytes = pdf::write_document(Vec::new(), layout, &resource, &contents)?;

        tracing::debug!(
            "Rendered {}x{} capture ({} bytes JPEG) onto {} page(s)",
            width,
            height,
            jpeg.len(),
            contents.len()
        );
        Ok(RenderedDocument {
            bytes,
            page_count: contents.len(),
        })
    }

    pub fn encode_jpeg(image: &image::RgbImage) -> QuicklistResult<Vec<u8>> {
        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY)
            .encode_image(image)
            .map_err(|e| QuicklistError::Export(e.to_string()))?;
        Ok(jpeg)
    }

    /// Lays the list out as text pages instead of capturing the view.
    pub fn render_text(list: &TodoList) -> QuicklistResult<RenderedDocument> {
        let contents = text::page_contents(&A4, list);
        let bytes = pdf::write_document(Vec::new(), &A4, &SharedResource::Helvetica, &contents)?;
        Ok(RenderedDocument {
            bytes,
            page_count: contents.len(),
        })
    }

    /// Writes `todo-list.pdf` into `out_dir`.
    pub async fn write(document: &RenderedDocument, out_dir: &Path) -> QuicklistResult<PathBuf> {
        let path = out_dir.join(EXPORT_FILENAME);
        AtomicWriter::write_atomic(&path, &document.bytes).await?;
        tracing::info!(
            "Exported {} page(s) to {}",
            document.page_count,
            path.display()
        );
        Ok(path)
    }

    /// Full raster pipeline. An unmounted view gives [`ExportOutcome::NoTarget`]
    /// and writes nothing.
    pub async fn export_snapshot(
        view: Option<&Buffer>,
        out_dir: &Path,
    ) -> QuicklistResult<ExportOutcome> {
        let Some(view) = view else {
            tracing::warn!("Export requested but the list view is not mounted");
            return Ok(ExportOutcome::NoTarget);
        };
        let document = Self::render_snapshot(view)?;
        let path = Self::write(&document, out_dir).await?;
        Ok(ExportOutcome::Written {
            path,
            page_count: document.page_count,
        })
    }

    pub async fn export_text(list: &TodoList, out_dir: &Path) -> QuicklistResult<ExportOutcome> {
        let document = Self::render_text(list)?;
        let path = Self::write(&document, out_dir).await?;
        Ok(ExportOutcome::Written {
            path,
            page_count: document.page_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    #[test]
    fn test_parse_mode() {
        assert_eq!("Raster".parse::<ExportMode>().unwrap(), ExportMode::Raster);
        assert_eq!("text".parse::<ExportMode>().unwrap(), ExportMode::Text);
        assert!("svg".parse::<ExportMode>().is_err());
        assert_eq!(ExportMode::default(), ExportMode::Raster);
    }

    #[test]
    fn test_jpeg_has_markers() {
        let image = image::RgbImage::from_pixel(8, 8, raster::PAPER);
        let jpeg = SnapshotExporter::encode_jpeg(&image).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
        assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_short_view_is_one_page() {
        let view = Buffer::empty(Rect::new(0, 0, 40, 10));
        let document = SnapshotExporter::render_snapshot(&view).unwrap();
        assert_eq!(document.page_count, 1);
        assert!(document.bytes.starts_with(b"%PDF-1.4"));
    }

    #[test]
    fn test_empty_view_is_an_error() {
        let view = Buffer::empty(Rect::new(0, 0, 0, 0));
        assert!(SnapshotExporter::render_snapshot(&view).is_err());
    }

    #[test]
    fn test_oversized_view_is_rejected() {
        let view = Buffer::empty(Rect::new(0, 0, 10, 1100));
        let result = SnapshotExporter::render_snapshot(&view);
        assert!(matches!(result, Err(QuicklistError::Export(_))));
    }
}
