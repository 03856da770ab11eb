//! Tests for command-line parsing and defaults

#[cfg(test)]
mod tests {
    use clap::Parser;
    use glyphpage::io::cli::{Cli, Command};
    use glyphpage::io::configuration::{
        DEFAULT_CANVAS_WIDTH, DEFAULT_COLUMNS, DEFAULT_CONTRAST, DEFAULT_GRID_COLS,
        DEFAULT_GRID_ROWS, DEFAULT_NOISE_SEED,
    };
    use std::path::PathBuf;

    #[test]
    fn test_ascii_defaults() {
        let cli = Cli::try_parse_from(["glyphpage", "ascii", "photo.png"]).expect("parses");
        assert!(!cli.quiet);
        match cli.command {
            Command::Ascii(args) => {
                assert_eq!(args.image, PathBuf::from("photo.png"));
                assert_eq!(args.cols, DEFAULT_COLUMNS);
                assert!(!args.multilevel);
                assert!((args.contrast - DEFAULT_CONTRAST).abs() < f64::EPSILON);
                assert!(args.output.is_none());
            }
            _ => unreachable!("expected the ascii subcommand"),
        }
    }

    #[test]
    fn test_ascii_flags() {
        let cli = Cli::try_parse_from([
            "glyphpage",
            "ascii",
            "photo.png",
            "--cols",
            "80",
            "--multilevel",
            "--contrast",
            "2.0",
            "-o",
            "art.txt",
            "--quiet",
        ])
        .expect("parses");
        assert!(cli.quiet);
        match cli.command {
            Command::Ascii(args) => {
                assert_eq!(args.cols, 80);
                assert!(args.multilevel);
                assert!((args.contrast - 2.0).abs() < f64::EPSILON);
                assert_eq!(args.output, Some(PathBuf::from("art.txt")));
            }
            _ => unreachable!("expected the ascii subcommand"),
        }
    }

    #[test]
    fn test_collage_defaults_and_loop_flag() {
        let cli = Cli::try_parse_from(["glyphpage", "collage", "photos", "--loop", "3"])
            .expect("parses");
        match cli.command {
            Command::Collage(args) => {
                assert_eq!(args.directory, PathBuf::from("photos"));
                assert_eq!(args.output, PathBuf::from("output.gif"));
                assert_eq!(args.rows, DEFAULT_GRID_ROWS);
                assert_eq!(args.cols, DEFAULT_GRID_COLS);
                assert_eq!(args.canvas_width, DEFAULT_CANVAS_WIDTH);
                assert_eq!(args.loop_count, 3);
            }
            _ => unreachable!("expected the collage subcommand"),
        }
    }

    #[test]
    fn test_noise_defaults() {
        let cli = Cli::try_parse_from(["glyphpage", "noise"]).expect("parses");
        match cli.command {
            Command::Noise(args) => {
                assert_eq!(args.seed, DEFAULT_NOISE_SEED);
                assert_eq!(args.frames, 1);
                assert!(args.output.is_none());
            }
            _ => unreachable!("expected the noise subcommand"),
        }
    }

    #[test]
    fn test_missing_input_is_a_parse_error() {
        assert!(Cli::try_parse_from(["glyphpage", "ascii"]).is_err());
        assert!(Cli::try_parse_from(["glyphpage", "collage"]).is_err());
        assert!(Cli::try_parse_from(["glyphpage"]).is_err());
    }
}
