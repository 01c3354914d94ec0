use std::path::PathBuf;

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};

use crate::counter::{Metric, MetricSet};

#[derive(Debug, Parser)]
#[command(version, about = "Print newline, word, and byte counts for FILE")]
pub struct Options {
    /// File to read
    pub file: PathBuf,

    /// Print the byte counts
    #[clap(short = 'c', long, overrides_with = "bytes")]
    pub bytes: bool,

    /// Print the character counts
    #[clap(short = 'm', long, overrides_with = "chars")]
    pub chars: bool,

    /// Print the newline counts
    #[clap(short = 'l', long, overrides_with = "lines")]
    pub lines: bool,

    /// Print the length of the longest line
    #[clap(short = 'L', long, overrides_with = "max_line_length")]
    pub max_line_length: bool,

    /// Print the word counts
    #[clap(short = 'w', long, overrides_with = "words")]
    pub words: bool,
}

/// Immutable per-invocation configuration: the file to read and the metrics
/// to compute, in display order.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub metrics: MetricSet,
}

impl Config {
    /// Parse the process arguments. Exits on `--help`, `--version`, or a
    /// usage error before any counting happens.
    pub fn from_env() -> anyhow::Result<Self> {
        let matches = Options::command().get_matches();

        Self::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> anyhow::Result<Self> {
        let options = Options::from_arg_matches(matches)?;

        // Flags are displayed in the order they were supplied, so recover
        // each flag's position on the command line.
        let mut requested = Vec::new();

        for (id, metric) in [
            ("bytes", Metric::Bytes),
            ("chars", Metric::Chars),
            ("lines", Metric::Lines),
            ("max_line_length", Metric::MaxLineLength),
            ("words", Metric::Words),
        ] {
            if matches.get_flag(id) {
                if let Some(index) = matches.index_of(id) {
                    requested.push((index, metric));
                }
            }
        }

        requested.sort_by_key(|&(index, _)| index);

        let metrics = if requested.is_empty() {
            MetricSet::default_display()
        } else {
            MetricSet::new(requested.into_iter().map(|(_, metric)| metric))
        };

        Ok(Self {
            path: options.file,
            metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(args: &[&str]) -> Config {
        let matches = Options::command()
            .try_get_matches_from(args)
            .expect("arguments should parse");

        Config::from_matches(&matches).expect("config should build")
    }

    #[test]
    fn no_flags_selects_default_triple() {
        let config = config_from(&["wcount", "file.txt"]);

        assert_eq!(config.metrics, MetricSet::default_display());
    }

    #[test]
    fn flags_keep_supplied_order() {
        let config = config_from(&["wcount", "-w", "-l", "file.txt"]);

        assert_eq!(
            config.metrics.iter().collect::<Vec<_>>(),
            vec![Metric::Words, Metric::Lines]
        );
    }

    #[test]
    fn repeated_flag_is_selected_once() {
        let config = config_from(&["wcount", "-l", "-l", "file.txt"]);

        assert_eq!(
            config.metrics.iter().collect::<Vec<_>>(),
            vec![Metric::Lines]
        );
    }

    #[test]
    fn long_flags_are_accepted() {
        let config = config_from(&["wcount", "--max-line-length", "-c", "file.txt"]);

        assert_eq!(
            config.metrics.iter().collect::<Vec<_>>(),
            vec![Metric::MaxLineLength, Metric::Bytes]
        );
    }

    #[test]
    fn path_is_taken_from_positional_argument() {
        let config = config_from(&["wcount", "-c", "some/dir/input.txt"]);

        assert_eq!(config.path, PathBuf::from("some/dir/input.txt"));
    }
}
