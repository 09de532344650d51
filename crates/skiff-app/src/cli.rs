use std::path::PathBuf;

use clap::Parser;

/// Skiff: a small tabbed browser shell.
#[derive(Parser, Debug)]
#[command(name = "skiff", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. debug, skiff_browser=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Open this address in the first tab instead of the home page.
    #[arg(long)]
    pub url: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "skiff",
            "--config",
            "/tmp/skiff.toml",
            "--log-level",
            "debug",
            "--url",
            "example.com",
            "--print-config",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/skiff.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.url.as_deref(), Some("example.com"));
        assert!(args.print_config);
    }

    #[test]
    fn no_flags_is_all_defaults() {
        let args = Args::try_parse_from(["skiff"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.url.is_none());
        assert!(!args.print_config);
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(Args::try_parse_from(["skiff", "--execute", "ls"]).is_err());
    }
}
