use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use glossa_diff::{content_diff, missing_keys, UntranslatedFilter};
use glossa_merge::merge;
use glossa_types::{Dictionary, Tree};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::*;
use crate::config::Config;
use crate::error::CommandError;
use crate::input::{load_dictionary, load_tree};

pub fn run_command(cli: Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Diff(args) => cmd_diff(&config, args, out),
        Command::DiffContent(args) => cmd_diff_content(&config, args, out),
        Command::Untranslated(args) => cmd_untranslated(&config, args, out),
        Command::Merge(args) => cmd_merge(&config, args, out),
    }
}

/// Serialize fully before writing so a failure never leaves partial output.
fn emit<T: Serialize>(out: &mut dyn Write, value: &T) -> anyhow::Result<()> {
    let mut text = serde_json::to_string_pretty(value).context("failed to render output")?;
    text.push('\n');
    out.write_all(text.as_bytes()).context("failed to write output")?;
    Ok(())
}

fn reported(result: &Option<Tree>) -> usize {
    result.as_ref().map_or(0, Tree::leaf_count)
}

fn diff_paths(config: &Config, args: PairArgs) -> (PathBuf, PathBuf) {
    (
        args.source.unwrap_or_else(|| config.source_document.clone()),
        args.target.unwrap_or_else(|| config.translated_document.clone()),
    )
}

fn cmd_diff(config: &Config, args: PairArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let (source, target) = diff_paths(config, args);
    let a = load_tree(&source)?;
    let b = load_tree(&target)?;

    let result = missing_keys(&a, Some(&b));
    info!(
        source = %source.display(),
        target = %target.display(),
        missing = reported(&result),
        "missing-key diff"
    );
    emit(out, &result.unwrap_or_else(Tree::empty))
}

fn cmd_diff_content(config: &Config, args: PairArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let (source, target) = diff_paths(config, args);
    let a = load_tree(&source)?;
    let b = load_tree(&target)?;

    let result = content_diff(&a, &b);
    info!(
        source = %source.display(),
        target = %target.display(),
        leaves = reported(&result),
        "content diff"
    );
    emit(out, &result.unwrap_or_else(Tree::empty))
}

/// An explicit `--dict` must be readable; the configured default is
/// optional.
fn resolve_dictionary(config: &Config, explicit: Option<PathBuf>) -> anyhow::Result<Option<Dictionary>> {
    match explicit {
        Some(path) => Ok(Some(load_dictionary(&path)?)),
        None if config.dictionary.is_file() => Ok(Some(load_dictionary(&config.dictionary)?)),
        None => {
            debug!(path = %config.dictionary.display(), "no dictionary file; checking without one");
            Ok(None)
        }
    }
}

fn cmd_untranslated(config: &Config, args: UntranslatedArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let source = args.source.unwrap_or_else(|| config.translated_document.clone());
    let tree = load_tree(&source)?;
    let dictionary = resolve_dictionary(config, args.dict)?;
    let script = args.script.unwrap_or(config.script);

    let result = UntranslatedFilter::new(script)
        .with_dictionary(dictionary.as_ref())
        .filter(&tree);
    info!(
        source = %source.display(),
        script = %script,
        untranslated = reported(&result),
        "untranslated check"
    );
    emit(out, &result)
}

fn cmd_merge(config: &Config, args: PairArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let source = args.source.unwrap_or_else(|| config.translated_document.clone());
    let Some(target) = args.target else {
        return Err(CommandError::MissingArgument {
            argument: "target",
            command: "merge",
        }
        .into());
    };
    if config.is_protected_target(&target) {
        return Err(CommandError::UnsafeMergeTarget(target).into());
    }

    let base = load_tree(&source)?;
    let overlay = load_tree(&target)?;
    info!(
        source = %source.display(),
        target = %target.display(),
        leaves = overlay.leaf_count(),
        "merging"
    );
    emit(out, &merge(base, &overlay))
}
