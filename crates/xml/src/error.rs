use polyio_stream::StreamError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XmlError {
    #[error("XML parsing error: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("XML writing error: {0}")]
    Write(#[from] quick_xml::Error),

    #[error("missing attribute '{name}' on <{element}>")]
    MissingAttribute {
        element: &'static str,
        name: &'static str,
    },

    #[error("attribute '{name}' on <{element}> is not a number: '{value}'")]
    InvalidNumber {
        element: &'static str,
        name: &'static str,
        value: String,
    },

    #[error("<{element}> declares {name}=\"{declared}\" but {actual} were read")]
    StructuralMismatch {
        element: &'static str,
        name: &'static str,
        declared: usize,
        actual: usize,
    },

    #[error("unexpected element <{found}>, expected <{expected}>")]
    UnexpectedElement {
        expected: &'static str,
        found: String,
    },

    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
