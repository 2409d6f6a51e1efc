use crate::emit;
use crate::error::FencecatError;
use crate::filter::ExclusionFilter;
use crate::options::{BinaryDetection, FencecatOptions};
use crate::types::{Candidate, RunSummary};
use ignore::WalkBuilder;
use std::env;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

/// Number of leading bytes inspected for binary classification.
const BINARY_SNIFF_LEN: u64 = 8192;

/// Concatenates the text files under `options.input_dir` into
/// `options.output_file`, one fenced block per file, and returns the counts.
///
/// Candidates are emitted in case-insensitive order of their relative path.
/// Binary and unreadable files are skipped; skipping never aborts the run.
pub fn fencecat(options: FencecatOptions) -> Result<RunSummary, FencecatError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting fencecat with input: {}", options.input_dir.display());
    validate_paths(&options.input_dir, &options.output_file)?;
    let filter = ExclusionFilter::new(&options)?;
    let candidates = collect_candidates(&options, &filter);
    emit_all(&options, candidates)
}

fn validate_paths(input_dir: &Path, output_file: &Path) -> Result<(), FencecatError> {
    if !input_dir.exists() {
        return Err(FencecatError::Config(format!(
            "Input directory '{}' does not exist",
            input_dir.display()
        )));
    }
    if !input_dir.is_dir() {
        return Err(FencecatError::Config(format!(
            "'{}' is not a directory",
            input_dir.display()
        )));
    }
    let input_abs = fs::canonicalize(input_dir).map_err(|e| FencecatError::io(input_dir, e))?;
    let output_abs = absolutize(output_file).map_err(|e| FencecatError::io(output_file, e))?;
    if output_abs.starts_with(&input_abs) {
        return Err(FencecatError::Config(
            "Output file cannot be inside input directory".to_string(),
        ));
    }
    Ok(())
}

/// Makes a path absolute without requiring it to exist, resolving through its
/// nearest existing ancestor.
fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if let Ok(canonical) = fs::canonicalize(path) {
        return Ok(canonical);
    }
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    match (parent, path.file_name()) {
        (Some(parent), Some(name)) => match fs::canonicalize(parent) {
            Ok(parent) => Ok(parent.join(name)),
            Err(_) => Ok(env::current_dir()?.join(path)),
        },
        _ => Ok(env::current_dir()?.join(path)),
    }
}

/// Walks the input root and returns the surviving candidates, sorted by the
/// case-insensitive lexicographic order of their relative path.
///
/// All of the walker's implicit filters are disabled: hidden files are
/// candidates, and gitignore handling is the exclusion filter's concern.
fn collect_candidates(options: &FencecatOptions, filter: &ExclusionFilter) -> Vec<Candidate> {
    let mut builder = WalkBuilder::new(&options.input_dir);
    builder
        .hidden(false)
        .parents(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false);
    let mut candidates = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("Warning: {}", err);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let rel = match entry.path().strip_prefix(&options.input_dir) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let rel_path = emit::posix_path(rel);
        if filter.is_excluded(&rel_path) {
            #[cfg(feature = "logging")]
            tracing::debug!("Excluded: {}", rel_path);
            continue;
        }
        candidates.push(Candidate {
            path: entry.into_path(),
            rel_path,
        });
    }
    candidates.sort_by_cached_key(|c| c.rel_path.to_lowercase());
    candidates
}

/// Reads a file for emission. Returns `None` when it classifies as binary.
/// Invalid UTF-8 is replaced, not fatal.
fn read_file_content(path: &Path, detection: BinaryDetection) -> io::Result<Option<String>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::with_capacity(BINARY_SNIFF_LEN as usize);
    reader
        .by_ref()
        .take(BINARY_SNIFF_LEN)
        .read_to_end(&mut bytes)?;
    let is_binary = match detection {
        BinaryDetection::Simple => bytes.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(&bytes).is_binary(),
        BinaryDetection::None => false,
    };
    if is_binary {
        return Ok(None);
    }
    reader.read_to_end(&mut bytes)?;
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

fn emit_all(
    options: &FencecatOptions,
    candidates: Vec<Candidate>,
) -> Result<RunSummary, FencecatError> {
    let cwd = env::current_dir().map_err(|e| FencecatError::io(".", e))?;
    let file = File::create(&options.output_file)
        .map_err(|e| FencecatError::io(&options.output_file, e))?;
    let mut out = BufWriter::new(file);
    let mut summary = RunSummary::default();
    for candidate in candidates {
        match read_file_content(&candidate.path, options.binary_detection) {
            Err(err) => {
                eprintln!("Error reading {}: {}", candidate.path.display(), err);
                summary.skipped += 1;
            }
            Ok(None) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Binary file detected: {}", candidate.path.display());
                summary.skipped += 1;
            }
            Ok(Some(content)) => {
                let label = emit::header_label(&candidate.path, &cwd);
                let lang = emit::fence_language(&candidate.path);
                match emit::write_block(&mut out, &options.separator, &label, &lang, &content) {
                    Ok(()) => summary.processed += 1,
                    Err(err) => {
                        eprintln!("Error writing {}: {}", candidate.path.display(), err);
                        summary.skipped += 1;
                    }
                }
            }
        }
    }
    out.flush()
        .map_err(|e| FencecatError::io(&options.output_file, e))?;
    Ok(summary)
}
