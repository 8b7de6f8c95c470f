//! Image CDN URL construction.
//!
//! The CDN takes transformation parameters as a path segment right after
//! `/upload/`, e.g. `c_fill,w_800,q_80,f_auto/`. Everything else in the URL is
//! left untouched.

use std::fmt;

/// Path served when a record has no image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.jpg";

const UPLOAD_MARKER: &str = "/upload/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crop {
    Fill,
    Fit,
    Scale,
    Thumb,
    Limit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Auto,
    Webp,
    Jpg,
    Png,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gravity {
    Auto,
    Face,
    Center,
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Crop::Fill => "fill",
            Crop::Fit => "fit",
            Crop::Scale => "scale",
            Crop::Thumb => "thumb",
            Crop::Limit => "limit",
        })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Auto => "auto",
            Format::Webp => "webp",
            Format::Jpg => "jpg",
            Format::Png => "png",
        })
    }
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gravity::Auto => "auto",
            Gravity::Face => "face",
            Gravity::Center => "center",
        })
    }
}

/// Transformation options. Zero values are treated as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transform {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub quality: Option<u32>,
    pub crop: Option<Crop>,
    pub format: Option<Format>,
    pub gravity: Option<Gravity>,
    pub blur: Option<u32>,
}

impl Transform {
    /// Builds the parameter segment, including its trailing `/`.
    ///
    /// Order is crop, width, height, quality, format, gravity, blur. Quality
    /// and format default to `auto`.
    pub fn segment(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(crop) = self.crop {
            parts.push(format!("c_{crop}"));
        }
        if let Some(w) = self.width.filter(|v| *v > 0) {
            parts.push(format!("w_{w}"));
        }
        if let Some(h) = self.height.filter(|v| *v > 0) {
            parts.push(format!("h_{h}"));
        }
        match self.quality.filter(|v| *v > 0) {
            Some(q) => parts.push(format!("q_{q}")),
            None => parts.push("q_auto".to_string()),
        }
        parts.push(format!("f_{}", self.format.unwrap_or(Format::Auto)));
        if let Some(gravity) = self.gravity {
            parts.push(format!("g_{gravity}"));
        }
        if let Some(blur) = self.blur.filter(|v| *v > 0) {
            parts.push(format!("e_blur:{blur}"));
        }

        format!("{}/", parts.join(","))
    }
}

/// Builds CDN URLs for one cloud account.
#[derive(Debug, Clone, Default)]
pub struct ImageUrls {
    cloud_name: String,
}

impl ImageUrls {
    pub fn new(cloud_name: impl Into<String>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
        }
    }

    /// Applies `transform` to an image reference.
    ///
    /// - `None` or empty: the placeholder path
    /// - absolute URL with exactly one `/upload/`: segment inserted after it
    /// - any other absolute URL: returned unchanged
    /// - anything else is treated as a public id under this cloud
    pub fn transform(&self, image: Option<&str>, transform: &Transform) -> String {
        let Some(image) = image.map(str::trim).filter(|s| !s.is_empty()) else {
            return PLACEHOLDER_IMAGE.to_string();
        };

        if image.starts_with("http") {
            let mut pieces = image.split(UPLOAD_MARKER);
            return match (pieces.next(), pieces.next(), pieces.next()) {
                (Some(base), Some(path), None) => {
                    format!("{base}{UPLOAD_MARKER}{}{path}", transform.segment())
                }
                _ => image.to_string(),
            };
        }

        format!(
            "https://res.cloudinary.com/{}/image/upload/{}{}",
            self.cloud_name,
            transform.segment(),
            image
        )
    }

    /// Responsive variant: fill crop when a height is given, scale otherwise.
    pub fn optimized(&self, image: Option<&str>, width: u32, height: Option<u32>) -> String {
        self.transform(
            image,
            &Transform {
                width: Some(width),
                height,
                crop: Some(if height.is_some() { Crop::Fill } else { Crop::Scale }),
                quality: Some(80),
                format: Some(Format::Auto),
                ..Transform::default()
            },
        )
    }

    /// Square thumbnail, 300px unless `size` is given.
    pub fn thumbnail(&self, image: Option<&str>, size: Option<u32>) -> String {
        let size = size.unwrap_or(300);
        self.transform(
            image,
            &Transform {
                width: Some(size),
                height: Some(size),
                crop: Some(Crop::Fill),
                quality: Some(75),
                format: Some(Format::Auto),
                gravity: Some(Gravity::Auto),
                blur: None,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_defaults() {
        assert_eq!(Transform::default().segment(), "q_auto,f_auto/");
    }

    #[test]
    fn test_segment_order() {
        let t = Transform {
            width: Some(800),
            height: Some(600),
            quality: Some(80),
            crop: Some(Crop::Fill),
            format: Some(Format::Webp),
            gravity: Some(Gravity::Face),
            blur: Some(200),
        };
        assert_eq!(t.segment(), "c_fill,w_800,h_600,q_80,f_webp,g_face,e_blur:200/");
    }

    #[test]
    fn test_public_id_gets_full_url() {
        let urls = ImageUrls::new("demo");
        let t = Transform {
            width: Some(800),
            quality: Some(80),
            crop: Some(Crop::Fill),
            ..Transform::default()
        };
        assert_eq!(
            urls.transform(Some("v1234567/destination/image.jpg"), &t),
            "https://res.cloudinary.com/demo/image/upload/c_fill,w_800,q_80,f_auto/v1234567/destination/image.jpg"
        );
    }

    #[test]
    fn test_absolute_upload_url_is_rewritten() {
        let urls = ImageUrls::new("demo");
        let out = urls.thumbnail(
            Some("https://res.cloudinary.com/other/image/upload/v1/a.jpg"),
            None,
        );
        assert_eq!(
            out,
            "https://res.cloudinary.com/other/image/upload/c_fill,w_300,h_300,q_75,f_auto,g_auto/v1/a.jpg"
        );
    }

    #[test]
    fn test_foreign_url_is_untouched() {
        let urls = ImageUrls::new("demo");
        let url = "https://images.example.com/photo.jpg";
        assert_eq!(urls.thumbnail(Some(url), None), url);

        let twice = "https://x.com/upload/a/upload/b.jpg";
        assert_eq!(urls.thumbnail(Some(twice), None), twice);
    }

    #[test]
    fn test_missing_image_is_placeholder() {
        let urls = ImageUrls::new("demo");
        assert_eq!(urls.thumbnail(None, None), PLACEHOLDER_IMAGE);
        assert_eq!(urls.optimized(Some("  "), 800, None), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_optimized_crop_depends_on_height() {
        let urls = ImageUrls::new("demo");
        assert!(urls.optimized(Some("a.jpg"), 800, None).contains("c_scale,w_800,q_80,f_auto/"));
        assert!(
            urls.optimized(Some("a.jpg"), 800, Some(400))
                .contains("c_fill,w_800,h_400,q_80,f_auto/")
        );
    }
}
