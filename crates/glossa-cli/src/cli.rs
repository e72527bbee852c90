use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use glossa_types::TargetScript;

#[derive(Parser)]
#[command(
    name = "glossa",
    about = "Compare and merge translation resource files",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: ./glossa.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show keys in SOURCE that are missing from TARGET
    Diff(PairArgs),
    /// Show shared keys whose values differ between SOURCE and TARGET
    #[command(name = "diff_content", alias = "diff-content")]
    DiffContent(PairArgs),
    /// Show strings in SOURCE that have not been translated
    #[command(alias = "UT")]
    Untranslated(UntranslatedArgs),
    /// Merge the fields of TARGET into SOURCE and print the result
    Merge(PairArgs),
}

#[derive(Args)]
pub struct PairArgs {
    pub source: Option<PathBuf>,
    pub target: Option<PathBuf>,
}

#[derive(Args)]
pub struct UntranslatedArgs {
    pub source: Option<PathBuf>,
    /// Allow-list of strings accepted as-is, one per line
    #[arg(long, value_name = "DICT")]
    pub dict: Option<PathBuf>,
    /// Script marking a string as translated: a preset name or U+XXXX-U+YYYY
    #[arg(long)]
    pub script: Option<TargetScript>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_diff_defaults() {
        let cli = Cli::try_parse_from(["glossa", "diff"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert!(args.source.is_none());
            assert!(args.target.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_diff_files() {
        let cli = Cli::try_parse_from(["glossa", "diff", "en.json", "zh.json"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.source, Some("en.json".into()));
            assert_eq!(args.target, Some("zh.json".into()));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_diff_content_underscore_name() {
        let cli = Cli::try_parse_from(["glossa", "diff_content", "a.json"]).unwrap();
        assert!(matches!(cli.command, Command::DiffContent(_)));
        let cli = Cli::try_parse_from(["glossa", "diff-content"]).unwrap();
        assert!(matches!(cli.command, Command::DiffContent(_)));
    }

    #[test]
    fn parse_untranslated_alias() {
        let cli = Cli::try_parse_from(["glossa", "UT", "zh.json", "--dict", "words.txt"]).unwrap();
        if let Command::Untranslated(args) = cli.command {
            assert_eq!(args.source, Some("zh.json".into()));
            assert_eq!(args.dict, Some("words.txt".into()));
            assert!(args.script.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_untranslated_script() {
        let cli = Cli::try_parse_from(["glossa", "untranslated", "--script", "hangul"]).unwrap();
        if let Command::Untranslated(args) = cli.command {
            assert_eq!(args.script, TargetScript::preset("hangul"));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_rejects_unknown_script() {
        assert!(Cli::try_parse_from(["glossa", "untranslated", "--script", "elvish"]).is_err());
    }

    #[test]
    fn parse_merge_without_target() {
        let cli = Cli::try_parse_from(["glossa", "merge", "zh.json"]).unwrap();
        if let Command::Merge(args) = cli.command {
            assert_eq!(args.source, Some("zh.json".into()));
            assert!(args.target.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from(["glossa", "diff", "--verbose", "--config", "g.toml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some("g.toml".into()));
    }

    #[test]
    fn parse_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["glossa", "translate"]).is_err());
    }
}
