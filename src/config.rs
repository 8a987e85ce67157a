/*!
 * Configuration handling for dir2h
 */

use std::path::PathBuf;

use clap::Parser;

/// Extension a file name must end with to be included
pub const HEADER_EXTENSION: &str = ".h";

/// Command-line arguments for dir2h
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dir2h",
    version = env!("CARGO_PKG_VERSION"),
    about = "Create a new header file including all the .h files in a directory",
    long_about = "Scans a directory recursively and prints to stdout a header that includes every .h file found, by bare file name, under the given prefix."
)]
pub struct Args {
    /// Directory to scan
    #[clap(short, long)]
    pub directory: String,

    /// Prefix to add to each include path
    #[clap(short, long)]
    pub prefix: String,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory to scan
    pub root: PathBuf,

    /// Prefix joined with each header name
    pub prefix: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            root: PathBuf::from(args.directory),
            prefix: args.prefix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_options() {
        let args = Args::try_parse_from(["dir2h", "-d", "inc", "-p", "mylib"]).unwrap();
        let config = Config::from_args(args);
        assert_eq!(config.root, PathBuf::from("inc"));
        assert_eq!(config.prefix, "mylib");
    }

    #[test]
    fn test_parse_long_options() {
        let args =
            Args::try_parse_from(["dir2h", "--directory", "src", "--prefix", "foo/bar"]).unwrap();
        assert_eq!(args.directory, "src");
        assert_eq!(args.prefix, "foo/bar");
    }

    #[test]
    fn test_missing_required_options() {
        assert!(Args::try_parse_from(["dir2h", "-d", "inc"]).is_err());
        assert!(Args::try_parse_from(["dir2h", "-p", "mylib"]).is_err());
        assert!(Args::try_parse_from(["dir2h"]).is_err());
    }

    #[test]
    fn test_empty_prefix_is_accepted() {
        let args = Args::try_parse_from(["dir2h", "-d", "inc", "-p", ""]).unwrap();
        assert_eq!(args.prefix, "");
    }
}
