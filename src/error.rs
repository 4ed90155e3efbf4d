use thiserror::Error;

/// Errors from decoding or encoding image files.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Unsupported PNG color type: {0:?}")]
    UnsupportedColorType(png::ColorType),

    #[error("Cannot encode a zero-area image ({width}x{height})")]
    EmptyImage { width: usize, height: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_color_type_message() {
        let error = CodecError::UnsupportedColorType(png::ColorType::Indexed);
        assert_eq!(error.to_string(), "Unsupported PNG color type: Indexed");
    }

    #[test]
    fn test_empty_image_message() {
        let error = CodecError::EmptyImage {
            width: 0,
            height: 12,
        };
        assert_eq!(error.to_string(), "Cannot encode a zero-area image (0x12)");
    }

    #[test]
    fn test_io_error_wraps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: CodecError = io.into();
        assert!(matches!(error, CodecError::Io(_)));
    }
}
