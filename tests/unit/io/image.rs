//! Tests for image decoding helpers and input directory discovery

#[cfg(test)]
mod tests {
    use glyphpage::io::image::{collect_image_files, export_png, load_luminance, load_rgba};
    use image::{Luma, Rgba, RgbaImage};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_png(dir: &Path, name: &str, value: u8) {
        let img = image::GrayImage::from_pixel(4, 4, Luma([value]));
        img.save(dir.join(name)).expect("save test image");
    }

    #[test]
    fn test_load_luminance_applies_contrast() {
        let dir = TempDir::new().expect("temp dir");
        write_png(dir.path(), "gray.png", 200);

        // A solid image has mean 200, so contrast is a no-op on it
        let lum = load_luminance(&dir.path().join("gray.png"), 1.5).expect("loads");
        assert_eq!((lum.width(), lum.height()), (4, 4));
        assert_eq!(lum.sample(0, 0), Some(200));
    }

    #[test]
    fn test_load_errors_on_missing_and_corrupt_files() {
        let dir = TempDir::new().expect("temp dir");
        assert!(load_luminance(&dir.path().join("missing.png"), 1.0).is_err());

        let corrupt = dir.path().join("corrupt.png");
        fs::write(&corrupt, b"not a png").expect("write corrupt file");
        assert!(load_rgba(&corrupt).is_err());

        let error = load_rgba(&corrupt).expect_err("corrupt input");
        assert!(error.to_string().contains("corrupt.png"));
    }

    #[test]
    fn test_collect_image_files_filters_and_sorts() {
        let dir = TempDir::new().expect("temp dir");
        write_png(dir.path(), "b.png", 0);
        write_png(dir.path(), "a.png", 0);
        write_png(dir.path(), "c.PNG", 0);
        fs::write(dir.path().join("notes.txt"), b"skip me").expect("write text file");
        fs::write(dir.path().join("noext"), b"skip me").expect("write bare file");

        let files = collect_image_files(dir.path()).expect("scans");
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.png", "b.png", "c.PNG"]);
    }

    #[test]
    fn test_collect_image_files_empty_directory_is_not_an_error() {
        let dir = TempDir::new().expect("temp dir");
        let files = collect_image_files(dir.path()).expect("scans");
        assert!(files.is_empty());
    }

    #[test]
    fn test_collect_image_files_rejects_non_directories() {
        let dir = TempDir::new().expect("temp dir");
        write_png(dir.path(), "only.png", 0);
        assert!(collect_image_files(&dir.path().join("only.png")).is_err());
        assert!(collect_image_files(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_export_png_creates_parent_directories() {
        let dir = TempDir::new().expect("temp dir");
        let nested = dir.path().join("out/deep/result.png");
        let img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]));

        export_png(&img, &nested).expect("exports");
        assert!(nested.exists());

        let reloaded = load_rgba(&nested).expect("round trip");
        assert_eq!(reloaded.get_pixel(0, 0), &Rgba([1, 2, 3, 255]));
    }
}
