use crate::config::IMAGE_ENDPOINT;
use crate::gallery::environment::ImageCapability;

pub const DEFAULT_QUALITY: u8 = 75;
pub const THUMBNAIL_WIDTHS: [u32; 5] = [320, 480, 640, 800, 1024];
pub const FALLBACK_WIDTH: u32 = 640;
pub const PLACEHOLDER_WIDTH: u32 = 24;
pub const PLACEHOLDER_QUALITY: u8 = 30;
pub const FULL_WIDTH: u32 = 1600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Webp,
    Jpeg,
}

impl ImageFormat {
    fn param(self) -> &'static str {
        match self {
            ImageFormat::Webp => "webp",
            ImageFormat::Jpeg => "jpeg",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ImageFormat::Webp => "image/webp",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

/// Pure string construction; never touches the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    capability: ImageCapability,
}

impl ImageUrlBuilder {
    pub fn new(capability: ImageCapability) -> Self {
        Self { capability }
    }

    pub fn transforms(&self) -> bool {
        self.capability.transform_available
    }

    pub fn build(&self, path: &str, width: u32, format: ImageFormat, quality: u8) -> String {
        if !self.transforms() {
            return path.to_string();
        }
        format!(
            "{}?url={}&w={}&q={}&fm={}&fit=cover",
            IMAGE_ENDPOINT,
            urlencoding::encode(path),
            width,
            quality,
            format.param()
        )
    }

    /// `None` without the endpoint: every candidate would be the same file.
    pub fn srcset(&self, path: &str, widths: &[u32], format: ImageFormat, quality: u8) -> Option<String> {
        if !self.transforms() || widths.is_empty() {
            return None;
        }
        let candidates: Vec<String> = widths
            .iter()
            .map(|w| format!("{} {}w", self.build(path, *w, format, quality), w))
            .collect();
        Some(candidates.join(", "))
    }

    pub fn placeholder(&self, path: &str) -> String {
        self.build(path, PLACEHOLDER_WIDTH, ImageFormat::Webp, PLACEHOLDER_QUALITY)
    }

    /// The lightbox URL; prefetching warms exactly this one.
    pub fn full(&self, path: &str) -> String {
        self.build(path, FULL_WIDTH, ImageFormat::Webp, DEFAULT_QUALITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(available: bool) -> ImageUrlBuilder {
        ImageUrlBuilder::new(ImageCapability::new(available))
    }

    #[test]
    fn unavailable_endpoint_returns_path_untouched() {
        let b = builder(false);
        assert_eq!(b.build("/x.jpg", 720, ImageFormat::Webp, 72), "/x.jpg");
        assert_eq!(b.full("/galeria/foto2.jpg"), "/galeria/foto2.jpg");
        assert_eq!(b.placeholder("/x.jpg"), "/x.jpg");
    }

    #[test]
    fn available_endpoint_encodes_path_and_params() {
        let url = builder(true).build("/x.jpg", 720, ImageFormat::Webp, 72);
        assert!(url.starts_with(IMAGE_ENDPOINT));
        assert!(url.contains("url=%2Fx.jpg"));
        assert!(url.contains("w=720"));
        assert!(url.contains("q=72"));
        assert!(url.contains("fm=webp"));
        assert!(url.contains("fit=cover"));
    }

    #[test]
    fn format_value_is_emitted_verbatim() {
        let jpeg = builder(true).build("/x.jpg", 720, ImageFormat::Jpeg, 72);
        assert_eq!(jpeg, format!("{}?url=%2Fx.jpg&w=720&q=72&fm=jpeg&fit=cover", IMAGE_ENDPOINT));
        let webp = builder(true).build("/x.jpg", 720, ImageFormat::Webp, 72);
        assert!(webp.contains("&fm=webp&"));
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let url = builder(true).build("/galeria/foto 1&2?.jpg", 320, ImageFormat::Jpeg, 75);
        assert!(url.contains("url=%2Fgaleria%2Ffoto%201%262%3F.jpg"));
        assert!(url.contains("fm=jpeg"));
        assert_eq!(url.matches('?').count(), 1);
    }

    #[test]
    fn srcset_lists_every_width() {
        let set = builder(true)
            .srcset("/a.jpg", &[320, 640], ImageFormat::Webp, 75)
            .unwrap();
        let parts: Vec<&str> = set.split(", ").collect();
        assert_eq!(parts.len(), 2);
        assert!(parts[0].ends_with(" 320w"));
        assert!(parts[1].contains("w=640") && parts[1].ends_with(" 640w"));
    }

    #[test]
    fn srcset_absent_without_endpoint() {
        assert!(builder(false).srcset("/a.jpg", &THUMBNAIL_WIDTHS, ImageFormat::Webp, 75).is_none());
        assert!(builder(true).srcset("/a.jpg", &[], ImageFormat::Webp, 75).is_none());
    }
}
