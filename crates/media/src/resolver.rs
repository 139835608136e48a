//! Deterministic media-path resolution for catalog products.

use std::ops::RangeInclusive;

use ecourses_core::ProductId;

use crate::config::MediaConfig;

/// Cover image shared by every course, relative to the base URL.
///
/// All products currently point at the same placeholder. The product id is
/// accepted (and ignored) so per-course art can land without an API change.
const PLACEHOLDER_IMAGE: &str = "images/img_8.jpg";

/// Filename stem shared by every video segment in the course series.
const SERIES_TITLE: &str =
    "Web Design with WordPress Everything from Beginning to End Derri";

/// Product ids with a single preview video; the segment number equals the id.
const PREVIEW_RANGE: RangeInclusive<u32> = 1..=30;

/// Ordered video segments per multi-part course, keyed by product id.
///
/// Curated by hand against the live asset set: segments 13, 18 and 27 no
/// longer exist upstream, and course 11 wraps back to the opening segments.
/// The numbers are data, not a formula; never derive them from the id.
const COURSE_SEGMENTS: &[(u32, &[u32])] = &[
    (5, &[12, 17]),
    (6, &[14, 15]),
    (7, &[16, 19]),
    (8, &[20, 21, 22]),
    (9, &[23, 24, 25]),
    (10, &[26, 28, 29]),
    (11, &[30, 1, 2, 3]),
];

/// Resolves product ids to absolute media URLs.
///
/// Every operation is total: unknown or out-of-range ids yield `None`,
/// never an error. The debug flag only adds diagnostic log lines; it never
/// changes a returned value.
#[derive(Debug, Clone)]
pub struct MediaResolver {
    config: MediaConfig,
}

impl MediaResolver {
    pub fn new(config: MediaConfig) -> Self {
        Self { config }
    }

    /// Resolver over the environment configuration.
    pub fn from_env() -> Self {
        Self::new(MediaConfig::from_env())
    }

    pub fn config(&self) -> &MediaConfig {
        &self.config
    }

    /// Cover image URL for a product.
    pub fn image_url(&self, _product_id: ProductId) -> String {
        format!("{}/{}", self.config.base_url(), PLACEHOLDER_IMAGE)
    }

    /// All cover images for a product; never empty.
    pub fn image_urls(&self, product_id: ProductId) -> Vec<String> {
        vec![self.image_url(product_id)]
    }

    /// Preview video URL; defined for product ids 1 through 30.
    pub fn video_url(&self, product_id: ProductId) -> Option<String> {
        if !PREVIEW_RANGE.contains(&product_id.get()) {
            return None;
        }
        Some(self.video_path(product_id.get()))
    }

    /// Ordered course-module videos; defined only for multi-part courses.
    pub fn video_urls(&self, product_id: ProductId) -> Option<Vec<String>> {
        let (_, segments) = COURSE_SEGMENTS
            .iter()
            .find(|(id, _)| *id == product_id.get())?;
        Some(segments.iter().map(|&n| self.video_path(n)).collect())
    }

    fn video_path(&self, segment: u32) -> String {
        let filename = format!("{SERIES_TITLE} ({segment}).mp4");
        let url = format!("{}/videos/{}", self.config.base_url(), filename);
        if self.config.debug() {
            tracing::debug!(
                segment,
                filename = %filename,
                base_url = %self.config.base_url(),
                url = %url,
                "resolved video path"
            );
        }
        url
    }
}

impl Default for MediaResolver {
    fn default() -> Self {
        Self::new(MediaConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;

    fn test_resolver() -> MediaResolver {
        MediaResolver::new(MediaConfig::new("https://cdn.test"))
    }

    #[test]
    fn image_url_is_the_shared_placeholder() {
        let resolver = test_resolver();
        // Intentional current behavior: the id does not pick the artwork.
        assert_eq!(
            resolver.image_url(ProductId::new(1)),
            "https://cdn.test/images/img_8.jpg"
        );
        assert_eq!(
            resolver.image_url(ProductId::new(9999)),
            "https://cdn.test/images/img_8.jpg"
        );
    }

    #[test]
    fn image_urls_wraps_the_single_cover() {
        let resolver = test_resolver();
        let id = ProductId::new(3);
        assert_eq!(resolver.image_urls(id), vec![resolver.image_url(id)]);
    }

    #[test]
    fn video_url_interpolates_the_product_id() {
        let resolver = test_resolver();
        assert_eq!(
            resolver.video_url(ProductId::new(1)).unwrap(),
            "https://cdn.test/videos/Web Design with WordPress Everything \
             from Beginning to End Derri (1).mp4"
        );
    }

    #[test]
    fn video_url_covers_exactly_ids_1_through_30() {
        let resolver = test_resolver();
        assert!(resolver.video_url(ProductId::new(0)).is_none());
        assert!(resolver.video_url(ProductId::new(1)).is_some());
        assert!(resolver.video_url(ProductId::new(30)).is_some());
        assert!(resolver.video_url(ProductId::new(31)).is_none());
    }

    #[test]
    fn video_urls_follow_the_segment_table() {
        let resolver = test_resolver();
        let urls = resolver.video_urls(ProductId::new(5)).unwrap();
        assert_eq!(
            urls,
            vec![
                "https://cdn.test/videos/Web Design with WordPress Everything \
                 from Beginning to End Derri (12).mp4",
                "https://cdn.test/videos/Web Design with WordPress Everything \
                 from Beginning to End Derri (17).mp4",
            ]
        );
    }

    #[test]
    fn video_urls_preserve_curated_segment_order() {
        let resolver = test_resolver();
        // Course 11 wraps back to the opening segments.
        let urls = resolver.video_urls(ProductId::new(11)).unwrap();
        let segments: Vec<String> = urls
            .iter()
            .map(|u| u.rsplit('(').next().unwrap().trim_end_matches(").mp4").to_string())
            .collect();
        assert_eq!(segments, vec!["30", "1", "2", "3"]);
    }

    #[test]
    fn video_urls_absent_for_single_video_courses() {
        let resolver = test_resolver();
        for id in [1, 2, 3, 4, 12, 30] {
            assert!(
                resolver.video_urls(ProductId::new(id)).is_none(),
                "id {id} has no module table entry"
            );
        }
    }

    #[test]
    fn default_resolver_uses_the_default_origin() {
        let resolver = MediaResolver::default();
        assert!(
            resolver
                .video_url(ProductId::new(7))
                .unwrap()
                .starts_with(DEFAULT_BASE_URL)
        );
    }

    #[test]
    fn misconfigured_base_url_propagates_unvalidated() {
        let resolver = MediaResolver::new(MediaConfig::new("not a url"));
        assert_eq!(
            resolver.image_url(ProductId::new(1)),
            "not a url/images/img_8.jpg"
        );
    }

    #[test]
    fn debug_flag_does_not_change_results() {
        let quiet = MediaResolver::new(MediaConfig::new("https://cdn.test"));
        let chatty = MediaResolver::new(
            MediaConfig::new("https://cdn.test").with_debug(true),
        );
        let id = ProductId::new(8);
        assert_eq!(quiet.video_url(id), chatty.video_url(id));
        assert_eq!(quiet.video_urls(id), chatty.video_urls(id));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every id in 1..=30 has a preview with its own number.
            #[test]
            fn preview_exists_throughout_the_range(id in 1u32..=30) {
                let resolver = test_resolver();
                let url = resolver.video_url(ProductId::new(id)).unwrap();
                let suffix = format!("({}).mp4", id);
                prop_assert!(url.starts_with("https://cdn.test/videos/"));
                prop_assert!(url.ends_with(&suffix));
            }

            /// Property: no preview exists outside 1..=30.
            #[test]
            fn no_preview_outside_the_range(id in 31u32..100_000) {
                let resolver = test_resolver();
                prop_assert!(resolver.video_url(ProductId::new(id)).is_none());
            }

            /// Property: the cover image ignores the product id entirely.
            #[test]
            fn cover_image_is_id_independent(id in any::<u32>()) {
                let resolver = test_resolver();
                let url = resolver.image_url(ProductId::new(id));
                prop_assert_eq!(&url, "https://cdn.test/images/img_8.jpg");
                prop_assert_eq!(resolver.image_urls(ProductId::new(id)), vec![url]);
            }

            /// Property: module lists exist only for the curated course ids.
            #[test]
            fn modules_only_for_curated_courses(id in any::<u32>()) {
                let resolver = test_resolver();
                let expected = matches!(id, 5..=11);
                prop_assert_eq!(
                    resolver.video_urls(ProductId::new(id)).is_some(),
                    expected
                );
            }
        }
    }
}
