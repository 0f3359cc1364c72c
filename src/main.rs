use anyhow::{bail, ensure, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use zaliznyak_dict::{
    config::{parse_output_configs, EntrySet},
    entry::Entry,
    entry_parser::EntryParser,
    fixups::{read_substitutions, Substitution},
    markup::{font::FontTable, CleanOptions},
    output,
    pipeline::{self, Exclusions},
    symbol_grammar::SymbolGrammar,
    vocabulary::Vocabulary,
};

struct Args {
    config_path: PathBuf,
    html_path: Option<PathBuf>,
    names_path: Option<PathBuf>,
    encoding: &'static encoding_rs::Encoding,
    cache_path: Option<PathBuf>,
    dump_path: Option<PathBuf>,
    fixups_path: Option<PathBuf>,
    exclude_path: Option<PathBuf>,
    vocabulary_path: Option<PathBuf>,
    clean_options: CleanOptions,
    verbosity: Verbosity,
}

#[derive(Clone, Copy)]
enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

fn usage(opts: &getopts::Options) -> String {
    opts.usage("Usage: zaliznyak-dict [options] CONFIG.csv")
}

fn get_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt("", "html", "Word-exported HTML of the main part (.html or .zip)", "FILE");
    opts.optopt("", "names", "proper-name lines", "FILE");
    opts.optopt("", "encoding", "encoding of the HTML (default utf-8)", "LABEL");
    opts.optopt("", "cache", "cache of cleaned lines", "FILE");
    opts.optopt("", "dump", "write the fixed-up text", "FILE");
    opts.optopt("", "fixups", "CSV of from,to substitutions", "FILE");
    opts.optopt("", "exclude", "line prefixes to skip", "FILE");
    opts.optopt("", "vocabulary", "JSON vocabulary", "FILE");
    opts.optopt("", "skip-paragraphs", "leading paragraphs to skip (default 8)", "N");
    opts.optopt("", "min-length", "drop lines this short (default 8)", "N");
    opts.optflag("v", "verbose", "debug logging");
    opts.optflag("q", "quiet", "no logging");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        print!("{}", usage(&opts));
        return Ok(None);
    }

    let config_path = PathBuf::from(
        matches
            .free
            .get(0)
            .with_context(|| format!("CONFIG.csv is required\n{}", usage(&opts)))?,
    );

    let encoding = match matches.opt_str("encoding") {
        Some(label) => encoding_rs::Encoding::for_label(label.as_bytes())
            .with_context(|| format!("Unknown encoding: {}", label))?,
        None => encoding_rs::UTF_8,
    };

    let defaults = CleanOptions::default();
    let clean_options = CleanOptions {
        skip_paragraphs: parse_number(&matches, "skip-paragraphs", defaults.skip_paragraphs)?,
        min_length: parse_number(&matches, "min-length", defaults.min_length)?,
    };

    let verbosity = match (matches.opt_present("v"), matches.opt_present("q")) {
        (true, true) => bail!("-v and -q are exclusive"),
        (true, false) => Verbosity::Verbose,
        (false, true) => Verbosity::Quiet,
        (false, false) => Verbosity::Normal,
    };

    let path = |name: &str| matches.opt_str(name).map(PathBuf::from);

    Ok(Some(Args {
        config_path,
        html_path: path("html"),
        names_path: path("names"),
        encoding,
        cache_path: path("cache"),
        dump_path: path("dump"),
        fixups_path: path("fixups"),
        exclude_path: path("exclude"),
        vocabulary_path: path("vocabulary"),
        clean_options,
        verbosity,
    }))
}

fn parse_number(matches: &getopts::Matches, name: &str, default: usize) -> Result<usize> {
    match matches.opt_str(name) {
        Some(value) => value
            .parse()
            .with_context(|| format!("Invalid --{}: {:?}", name, value)),
        None => Ok(default),
    }
}

fn init_tracing(verbosity: Verbosity) {
    let default = match verbosity {
        Verbosity::Quiet => "off",
        Verbosity::Normal => "info",
        Verbosity::Verbose => "debug",
    };
    let filter = match verbosity {
        Verbosity::Normal => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
        }
        _ => EnvFilter::new(default),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn main() -> Result<()> {
    let Some(args) = get_args()? else {
        return Ok(());
    };
    init_tracing(args.verbosity);

    ensure!(
        args.config_path.exists(),
        "File not found: {}",
        args.config_path.display()
    );
    let configs = parse_output_configs(&read_to_string(&args.config_path)?)?;

    let vocabulary = match &args.vocabulary_path {
        Some(path) => Vocabulary::from_json(&read_to_string(path)?)
            .with_context(|| format!("Invalid vocabulary: {}", path.display()))?,
        None => Vocabulary::standard(),
    };
    let grammar = SymbolGrammar::new(vocabulary).context("Failed to build symbol grammar")?;
    let parser = EntryParser::new(&grammar);

    let substitutions: Vec<Substitution> = match &args.fixups_path {
        Some(path) => read_substitutions(&read_to_string(path)?)?,
        None => Vec::new(),
    };
    let exclusions = match &args.exclude_path {
        Some(path) => Exclusions::parse(&read_to_string(path)?),
        None => Exclusions::default(),
    };

    let wants = |set: EntrySet| configs.iter().any(|c| c.set == set);

    let common: Vec<Entry> = if wants(EntrySet::Common) {
        let html_path = args
            .html_path
            .as_ref()
            .context("--html is required for the common set")?;

        info!("Processing {}...", html_path.display());
        let lines = pipeline::clean_html_cached(
            html_path,
            args.cache_path.as_deref(),
            args.encoding,
            FontTable::standard(),
            &args.clean_options,
        )?;

        let text = pipeline::correct_lines(&lines, &substitutions);
        if let Some(dump_path) = &args.dump_path {
            fs::write(dump_path, &text)
                .with_context(|| format!("Failed to write {}", dump_path.display()))?;
        }

        let entries = pipeline::parse_common(&text, &exclusions, &parser)?;
        info!(entries = entries.len(), "parsed common entries");
        entries
    } else {
        Vec::new()
    };

    let names: Vec<Entry> = if wants(EntrySet::Names) {
        let names_path = args
            .names_path
            .as_ref()
            .context("--names is required for the names set")?;

        info!("Processing {}...", names_path.display());
        let entries = pipeline::parse_names(&read_to_string(names_path)?, &exclusions, &parser)?;
        info!(entries = entries.len(), "parsed proper names");
        entries
    } else {
        Vec::new()
    };

    if common.is_empty() && names.is_empty() {
        warn!("nothing to write");
    }

    let pb = create_progress_bar(configs.len() as u64, args.verbosity);
    for config in configs.iter().progress_with(pb) {
        let entries = match config.set {
            EntrySet::Common => &common,
            EntrySet::Names => &names,
        };
        output::save(entries, config)
            .with_context(|| format!("Failed to save {:?}", config))?;
    }

    info!("Finished.");

    Ok(())
}

fn create_progress_bar(len: u64, verbosity: Verbosity) -> ProgressBar {
    if let Verbosity::Quiet = verbosity {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
