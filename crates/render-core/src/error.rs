use polyio_stream::StreamError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("polygons have no extent in either direction")]
    DegenerateExtent,

    #[error("label count {labels} does not match polygon count {polygons}")]
    LabelCountMismatch { labels: usize, polygons: usize },

    #[error("label coordinate count {coords} does not match label count {labels}")]
    LabelCoordMismatch { coords: usize, labels: usize },

    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF generation error: {0}")]
    Pdf(String),
}
