//! Facility image URL resolution

/// Shown when a facility image is missing or fails to load
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

/// Default API host that serves uploaded media
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Absolute `http(s)` URLs pass through; anything else is treated as a path
/// on the API host.
pub fn resolve_image_url(image: &str, api_base_url: &str) -> String {
    if image.starts_with("http") {
        return image.to_string();
    }
    let base = api_base_url.trim_end_matches('/');
    if image.starts_with('/') {
        format!("{}{}", base, image)
    } else {
        format!("{}/{}", base, image)
    }
}

/// URL to actually request for a box image, honouring earlier load failures
pub fn image_source(image: Option<&str>, api_base_url: &str, failed: bool) -> Option<String> {
    let image = image.filter(|i| !i.trim().is_empty())?;
    if failed {
        Some(PLACEHOLDER_IMAGE_URL.to_string())
    } else {
        Some(resolve_image_url(image, api_base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_are_untouched() {
        let url = "https://cdn.example.com/box.jpg";
        assert_eq!(resolve_image_url(url, DEFAULT_API_BASE_URL), url);
    }

    #[test]
    fn relative_paths_get_the_api_host() {
        assert_eq!(
            resolve_image_url("/media/box_images/a.jpg", "http://localhost:8000/"),
            "http://localhost:8000/media/box_images/a.jpg"
        );
        assert_eq!(
            resolve_image_url("media/a.jpg", "http://api.test"),
            "http://api.test/media/a.jpg"
        );
    }

    #[test]
    fn failed_images_use_placeholder() {
        assert_eq!(
            image_source(Some("/media/a.jpg"), DEFAULT_API_BASE_URL, true).as_deref(),
            Some(PLACEHOLDER_IMAGE_URL)
        );
        assert_eq!(image_source(None, DEFAULT_API_BASE_URL, false), None);
        assert_eq!(image_source(Some("  "), DEFAULT_API_BASE_URL, false), None);
    }
}
