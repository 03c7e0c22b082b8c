//! Folder-level collection: scanning trees of source files.
//!
//! Units are independent, so files are tokenized in parallel. A file that
//! cannot be read or analyzed is logged and skipped; the rest of the batch
//! carries on and the failure is reported back to the caller.

use anyhow::Context;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::analyze::tokenize_file;
use crate::config::Config;
use crate::extract::{get_class_names, get_class_property_basic_info, get_use_dependencies, PropertyInfo};

/// Outcome of a folder scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchOutcome<T> {
    pub value: T,
    pub files_scanned: usize,
    /// Files that were skipped, with the reason.
    pub failures: Vec<FileFailure>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

impl<T> BatchOutcome<T> {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Collect the files under `root` that a scan should read, sorted by path.
///
/// A file given as `root` is returned as is.
pub fn collect_files(root: &Path, config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    let skip_hidden = config.should_skip_hidden();

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !(skip_hidden && is_hidden(e)))
    {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !config.has_scanned_extension(path) {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        if config.is_path_excluded(relative) {
            debug!(path = %path.display(), "excluded");
            continue;
        }
        files.push(path.to_path_buf());
    }
    files.sort();
    Ok(files)
}

/// Run `f` on every file in parallel, splitting successes from failures.
fn scan<T, F>(files: &[PathBuf], f: F) -> (Vec<(PathBuf, T)>, Vec<FileFailure>)
where
    T: Send,
    F: Fn(&Path) -> anyhow::Result<T> + Sync,
{
    let results: Vec<_> = files
        .par_iter()
        .map(|path| {
            debug!(path = %path.display(), "scanning");
            (path, f(path.as_path()))
        })
        .collect();

    let mut ok = Vec::new();
    let mut failures = Vec::new();
    for (path, result) in results {
        match result {
            Ok(value) => ok.push((path.clone(), value)),
            Err(e) => {
                warn!(path = %path.display(), error = %format!("{:#}", e), "skipping file");
                failures.push(FileFailure {
                    path: path.clone(),
                    error: format!("{:#}", e),
                });
            }
        }
    }
    (ok, failures)
}

/// Union of the imports of every file under `dir`, de-duplicated and sorted.
pub fn get_use_dependencies_by_folder(
    dir: &Path,
    config: &Config,
) -> anyhow::Result<BatchOutcome<Vec<String>>> {
    let files = collect_files(dir, config)?;
    let (ok, failures) = scan(&files, |path| {
        let tokens = tokenize_file(path)?;
        Ok(get_use_dependencies(&tokens, false))
    });

    let names: BTreeSet<String> = ok.into_iter().flat_map(|(_, uses)| uses).collect();
    info!(
        dir = %dir.display(),
        files = files.len(),
        failed = failures.len(),
        dependencies = names.len(),
        "collected use dependencies"
    );
    Ok(BatchOutcome {
        value: names.into_iter().collect(),
        files_scanned: files.len(),
        failures,
    })
}

/// Maps fully-qualified class names to the files declaring them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassIndex {
    classes: BTreeMap<String, PathBuf>,
}

impl ClassIndex {
    /// Index every class declared under `root`.
    ///
    /// When two files declare the same name the first one by path wins.
    pub fn build(root: &Path, config: &Config) -> anyhow::Result<BatchOutcome<Self>> {
        let files = collect_files(root, config)?;
        let finder = config.class_name_finder();
        let (ok, failures) = scan(&files, |path| {
            let tokens = tokenize_file(path)?;
            Ok(get_class_names(&tokens, true, finder))
        });

        let mut index = ClassIndex::default();
        for (path, names) in ok {
            for name in names {
                index.insert(name, &path);
            }
        }
        info!(root = %root.display(), classes = index.len(), "built class index");
        Ok(BatchOutcome {
            value: index,
            files_scanned: files.len(),
            failures,
        })
    }

    fn insert(&mut self, name: String, path: &Path) {
        if let Some(existing) = self.classes.get(&name) {
            warn!(
                class = %name,
                kept = %existing.display(),
                ignored = %path.display(),
                "class declared twice"
            );
            return;
        }
        self.classes.insert(name, path.to_path_buf());
    }

    /// File declaring `class`. A leading `\` is ignored.
    pub fn file_for(&self, class: &str) -> Option<&Path> {
        self.classes
            .get(class.trim_start_matches('\\'))
            .map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// `(class, file)` pairs ordered by class name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.classes.iter().map(|(k, v)| (k.as_str(), v.as_path()))
    }

    fn require(&self, class: &str) -> anyhow::Result<&Path> {
        self.file_for(class)
            .with_context(|| format!("class {} not found in index", class))
    }
}

/// Union of the imports of the files declaring `classes`, de-duplicated and
/// sorted. Every class must be in the index.
pub fn get_use_dependencies_by_classes(index: &ClassIndex, classes: &[&str]) -> anyhow::Result<Vec<String>> {
    let files: BTreeSet<&Path> = classes
        .iter()
        .map(|class| index.require(class))
        .collect::<anyhow::Result<_>>()?;

    let mut names = BTreeSet::new();
    for file in files {
        let tokens = tokenize_file(file)?;
        names.extend(get_use_dependencies(&tokens, false));
    }
    Ok(names.into_iter().collect())
}

/// Property information for the file declaring `class`.
pub fn get_class_property_basic_info_for(index: &ClassIndex, class: &str) -> anyhow::Result<Vec<PropertyInfo>> {
    let file = index.require(class)?;
    let tokens = tokenize_file(file)?;
    get_class_property_basic_info(&tokens)
        .with_context(|| format!("failed to read properties of {} in {}", class, file.display()))
}
