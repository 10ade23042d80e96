use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments
#[derive(Parser)]
#[derive(Clone, Eq, PartialEq, Debug)]
#[command(author, version, about = "Estimate password strength and suggest improvements")]
pub struct Opts {
    /// Set verbosity level.
    ///
    /// Can be used multiple times to increase verbosity.
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Show the password while typing instead of using a hidden prompt.
    #[clap(long)]
    pub show: bool,

    /// Analyze every line of a file instead of prompting. Use `-` for stdin.
    #[clap(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Print the analysis as JSON, one object per password.
    #[clap(long)]
    pub json: bool,

    /// Disable colored output.
    #[clap(long)]
    pub no_color: bool,
}

impl Opts {
    /// Applies process-wide settings derived from the options.
    pub fn process(&self) {
        if self.no_color {
            colored::control::set_override(false);
        }
    }

    /// Whether passwords come from stdin rather than a file path.
    pub fn reads_stdin(&self) -> bool {
        self.file.as_deref().is_some_and(|p| p.as_os_str() == "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let opts = Opts::parse_from(["pwd-analyzer"]);
        assert_eq!(opts.verbose, 0);
        assert!(!opts.show);
        assert!(opts.file.is_none());
        assert!(!opts.json);
    }

    #[test]
    fn test_parse_batch_options() {
        let opts = Opts::parse_from(["pwd-analyzer", "-vv", "--json", "-f", "-"]);
        assert_eq!(opts.verbose, 2);
        assert!(opts.json);
        assert!(opts.reads_stdin());

        let opts = Opts::parse_from(["pwd-analyzer", "--file", "list.txt"]);
        assert!(!opts.reads_stdin());
    }
}
