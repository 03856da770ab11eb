//! Tests for luminance grids, window averaging, and contrast adjustment

#[cfg(test)]
mod tests {
    use glyphpage::raster::luminance::LuminanceImage;

    #[test]
    fn test_from_raw_validates_shape() {
        assert!(LuminanceImage::from_raw(2, 2, vec![0; 4]).is_ok());
        assert!(LuminanceImage::from_raw(2, 2, vec![0; 3]).is_err());
        assert!(LuminanceImage::from_raw(0, 2, vec![]).is_err());
        assert!(LuminanceImage::from_raw(2, 0, vec![]).is_err());
    }

    #[test]
    fn test_row_major_sample_access() {
        let image = LuminanceImage::from_raw(3, 2, vec![10, 20, 30, 40, 50, 60])
            .expect("valid dimensions");
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.sample(0, 0), Some(10));
        assert_eq!(image.sample(2, 0), Some(30));
        assert_eq!(image.sample(0, 1), Some(40));
        assert_eq!(image.sample(3, 0), None);
        assert_eq!(image.sample(0, 2), None);
    }

    #[test]
    fn test_window_mean_is_real_valued() {
        let image = LuminanceImage::from_raw(2, 2, vec![0, 1, 2, 4]).expect("valid dimensions");
        let mean = image.window_mean(0, 2, 0, 2).expect("non-empty window");
        assert!((mean - 1.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_window_mean_clamps_and_rejects_empty() {
        let image = LuminanceImage::from_raw(3, 3, vec![9; 9]).expect("valid dimensions");

        // Bounds past the edge clamp to the image
        let mean = image.window_mean(1, 10, 1, 10).expect("clamped window");
        assert!((mean - 9.0).abs() < f64::EPSILON);

        // Degenerate windows have no samples
        assert!(image.window_mean(2, 2, 0, 3).is_none());
        assert!(image.window_mean(3, 5, 0, 3).is_none());
        assert!(image.window_mean(0, 3, 1, 1).is_none());
    }

    #[test]
    fn test_contrast_identity_and_rescale() {
        let image =
            LuminanceImage::from_raw(2, 2, vec![100, 110, 120, 130]).expect("valid dimensions");

        let identity = image.with_contrast(1.0).expect("valid factor");
        assert_eq!(identity.sample(0, 0), Some(100));
        assert_eq!(identity.sample(1, 1), Some(130));

        // mean = 115; factor 2 doubles each sample's distance from it
        let boosted = image.with_contrast(2.0).expect("valid factor");
        assert_eq!(boosted.sample(0, 0), Some(85));
        assert_eq!(boosted.sample(1, 0), Some(105));
        assert_eq!(boosted.sample(0, 1), Some(125));
        assert_eq!(boosted.sample(1, 1), Some(145));

        // factor 0 collapses to the rounded mean
        let flat = image.with_contrast(0.0).expect("valid factor");
        assert_eq!(flat.sample(0, 0), Some(115));
        assert_eq!(flat.sample(1, 1), Some(115));
    }

    #[test]
    fn test_contrast_clamps_to_sample_range() {
        let image = LuminanceImage::from_raw(2, 1, vec![0, 255]).expect("valid dimensions");
        let boosted = image.with_contrast(10.0).expect("valid factor");
        assert_eq!(boosted.sample(0, 0), Some(0));
        assert_eq!(boosted.sample(1, 0), Some(255));
    }

    #[test]
    fn test_contrast_rejects_invalid_factors() {
        let image = LuminanceImage::from_raw(1, 1, vec![7]).expect("valid dimensions");
        assert!(image.with_contrast(-0.5).is_err());
        assert!(image.with_contrast(f64::NAN).is_err());
        assert!(image.with_contrast(f64::INFINITY).is_err());
    }
}
