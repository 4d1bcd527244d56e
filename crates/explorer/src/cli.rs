//! Command-line arguments for `cityquad`.

use crate::config::CONFIG_FILE;
use clap::Parser;
use std::path::PathBuf;

/// Store cities in a quadtree, look them up by coordinates, and draw the tree.
#[derive(Parser, Debug)]
#[command(name = "cityquad")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (created with defaults when missing)
    #[arg(short = 'c', long = "config", value_name = "PATH", default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Write the SVG here instead of the configured path
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Skip writing the SVG
    #[arg(long = "no-render")]
    pub no_render: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cityquad"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE));
        assert!(cli.output.is_none());
        assert!(!cli.no_render);
    }

    #[test]
    fn test_config_and_output_flags() {
        let cli =
            Cli::try_parse_from(["cityquad", "--config", "europe.toml", "-o", "europe.svg", "--no-render"])
                .unwrap();
        assert_eq!(cli.config, PathBuf::from("europe.toml"));
        assert_eq!(cli.output, Some(PathBuf::from("europe.svg")));
        assert!(cli.no_render);
    }

    #[test]
    fn test_help_is_not_a_config_path() {
        let err = Cli::try_parse_from(["cityquad", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_bare_argument_is_rejected() {
        let err = Cli::try_parse_from(["cityquad", "cities.toml"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
