//! Classification of image references sent by the detection service.
//!
//! The service either links an image (`/static/...`, `https://...`) or
//! embeds it as a `data:image/jpeg;base64,...` URI. A terminal cannot show
//! either, so views render a one-line summary instead.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::Cursor;

/// Decoded facts about an embedded `data:` image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedImage {
    pub mime: String,
    pub byte_len: usize,
    /// Pixel size, when the payload decodes as a supported image format.
    pub dimensions: Option<(u32, u32)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef<'a> {
    /// URL or server-relative path.
    Remote(&'a str),
    Embedded(EmbeddedImage),
    /// A `data:` URI that could not be decoded.
    Malformed { reason: &'static str },
}

impl<'a> ImageRef<'a> {
    pub fn inspect(reference: &'a str) -> Self {
        let Some(rest) = reference.strip_prefix("data:") else {
            return ImageRef::Remote(reference);
        };
        let Some((header, payload)) = rest.split_once(',') else {
            return ImageRef::Malformed {
                reason: "missing payload",
            };
        };

        let (mime, is_base64) = match header.strip_suffix(";base64") {
            Some(mime) => (mime, true),
            None => (header, false),
        };
        let mime = if mime.is_empty() {
            "text/plain".to_string()
        } else {
            mime.to_string()
        };

        if !is_base64 {
            return ImageRef::Embedded(EmbeddedImage {
                mime,
                byte_len: payload.len(),
                dimensions: None,
            });
        }

        let Ok(bytes) = STANDARD.decode(payload.trim()) else {
            return ImageRef::Malformed {
                reason: "invalid base64",
            };
        };

        ImageRef::Embedded(EmbeddedImage {
            mime,
            byte_len: bytes.len(),
            dimensions: image_dimensions(&bytes),
        })
    }

    /// One-line, human-readable description.
    pub fn summary(&self) -> String {
        match self {
            ImageRef::Remote(reference) => (*reference).to_string(),
            ImageRef::Embedded(image) => match image.dimensions {
                Some((width, height)) => format!(
                    "embedded {}, {}x{}, {}",
                    image.mime,
                    width,
                    height,
                    format_size(image.byte_len)
                ),
                None => format!("embedded {}, {}", image.mime, format_size(image.byte_len)),
            },
            ImageRef::Malformed { reason } => format!("embedded image (unreadable: {reason})"),
        }
    }
}

fn image_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let value = bytes as f64;
    if value < KB {
        format!("{bytes} B")
    } else if value < KB * KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{:.1} MB", value / (KB * KB))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};

    fn png_data_uri(width: u32, height: u32) -> String {
        let mut bytes = Vec::new();
        RgbImage::new(width, height)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        format!("data:image/png;base64,{}", STANDARD.encode(&bytes))
    }

    #[test]
    fn plain_paths_are_remote() {
        assert_eq!(ImageRef::inspect("/img/car1.jpg"), ImageRef::Remote("/img/car1.jpg"));
        assert_eq!(ImageRef::inspect("/img/car1.jpg").summary(), "/img/car1.jpg");
    }

    #[test]
    fn embedded_png_reports_dimensions() {
        let uri = png_data_uri(7, 3);
        match ImageRef::inspect(&uri) {
            ImageRef::Embedded(image) => {
                assert_eq!(image.mime, "image/png");
                assert_eq!(image.dimensions, Some((7, 3)));
                assert!(image.byte_len > 0);
            }
            other => panic!("expected Embedded, got {other:?}"),
        }
        assert!(ImageRef::inspect(&uri).summary().starts_with("embedded image/png, 7x3, "));
    }

    #[test]
    fn undecodable_payload_keeps_size_only() {
        let uri = format!("data:image/jpeg;base64,{}", STANDARD.encode(b"not a jpeg"));
        assert_eq!(
            ImageRef::inspect(&uri).summary(),
            "embedded image/jpeg, 10 B"
        );
    }

    #[test]
    fn invalid_base64_is_malformed() {
        let summary = ImageRef::inspect("data:image/jpeg;base64,@@@").summary();
        assert_eq!(summary, "embedded image (unreadable: invalid base64)");
    }

    #[test]
    fn missing_comma_is_malformed() {
        assert_eq!(
            ImageRef::inspect("data:image/png;base64"),
            ImageRef::Malformed {
                reason: "missing payload"
            }
        );
    }

    #[test]
    fn sizes_are_humanized() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
