//! Exclusion filtering for candidate paths.
//!
//! Combines an optional gitignore matcher (loaded from a `.gitignore` directly
//! under the input root) with an optional set of user-supplied glob patterns.
//! Both are matched against the candidate's POSIX-style relative path.

use crate::error::FencecatError;
use crate::options::FencecatOptions;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::gitignore::Gitignore;
#[cfg(feature = "gitignore")]
use ignore::gitignore::GitignoreBuilder;
use std::path::Path;

pub(crate) struct ExclusionFilter {
    gitignore: Option<Gitignore>,
    globs: Option<GlobSet>,
}

impl ExclusionFilter {
    pub(crate) fn new(options: &FencecatOptions) -> Result<Self, FencecatError> {
        let gitignore = if options.use_gitignore {
            load_gitignore(&options.input_dir)?
        } else {
            None
        };
        let globs = build_globs(&options.exclude_patterns)?;
        Ok(Self { gitignore, globs })
    }

    /// Returns true when the candidate at `rel_path` should be skipped.
    pub(crate) fn is_excluded(&self, rel_path: &str) -> bool {
        if let Some(ref gitignore) = self.gitignore {
            if gitignore
                .matched_path_or_any_parents(Path::new(rel_path), false)
                .is_ignore()
            {
                return true;
            }
        }
        if let Some(ref globs) = self.globs {
            if globs.is_match(rel_path) {
                return true;
            }
        }
        false
    }
}

fn build_globs(patterns: &[String]) -> Result<Option<GlobSet>, FencecatError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| FencecatError::Pattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    let set = builder
        .build()
        .map_err(|e| FencecatError::Walk(format!("Failed to build glob set: {}", e)))?;
    Ok(Some(set))
}

#[cfg(feature = "gitignore")]
fn load_gitignore(input_dir: &Path) -> Result<Option<Gitignore>, FencecatError> {
    let path = input_dir.join(".gitignore");
    if !path.is_file() {
        return Ok(None);
    }
    let mut builder = GitignoreBuilder::new(input_dir);
    if let Some(err) = builder.add(&path) {
        return Err(FencecatError::Gitignore { path, source: err });
    }
    let matcher = builder
        .build()
        .map_err(|err| FencecatError::Gitignore { path, source: err })?;
    Ok(Some(matcher))
}

#[cfg(not(feature = "gitignore"))]
fn load_gitignore(_input_dir: &Path) -> Result<Option<Gitignore>, FencecatError> {
    Err(FencecatError::Config(
        "gitignore support is not compiled into this build; rebuild with the `gitignore` feature"
            .to_string(),
    ))
}
