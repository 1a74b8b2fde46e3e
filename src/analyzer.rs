use anyhow::{Context, Result};
use glob::{Pattern, glob};
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use crate::config::{EXTENSIONS, IGNORE_FILE, INSTALL_DIR, MANIFEST_FILE, NODE_BUILTINS, SKIP_DIRS};
use crate::manifest::{Manifest, read_manifest};

/// Options forwarded to the usage analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Exempt packages that ship executables from the unused lists.
    pub ignore_bin_package: bool,
    /// Leave the missing map empty instead of collecting undeclared imports.
    pub skip_missing: bool,
    /// Directory names to skip, on top of the built-in skip list.
    pub ignore_dirs: Vec<String>,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            ignore_bin_package: false,
            skip_missing: false,
            ignore_dirs: vec![INSTALL_DIR.to_string()],
        }
    }
}

/// What a usage analysis found: declared names never imported, split by
/// manifest section, and imported names never declared, each with the
/// files referencing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub unused_dependencies: Vec<String>,
    pub unused_dev_dependencies: Vec<String>,
    pub missing: BTreeMap<String, Vec<String>>,
}

/// Seam for the usage analysis so the report pipeline can be driven by
/// any implementation, most importantly a canned one in tests.
pub trait UsageAnalyzer {
    fn analyze(&self, root: &Path, options: &AnalyzerOptions) -> Result<Analysis>;
}

/// The production analyzer: walks source files by extension and extracts
/// import specifiers with a regex pass.
pub struct FileScanner;

static IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?m)(?:\b(?:import|export)\b[^'"`;]*?\bfrom\s*['"]([^'"]+)['"]|\bimport\s*['"]([^'"]+)['"]|\b(?:require|import)\s*\(\s*['"]([^'"]+)['"]\s*\))"#,
    )
    .expect("import pattern must compile")
});

impl UsageAnalyzer for FileScanner {
    fn analyze(&self, root: &Path, options: &AnalyzerOptions) -> Result<Analysis> {
        let manifest = read_manifest(root)?;
        let skip_dirs = skip_list(root, options);

        let mut used: HashSet<String> = HashSet::new();
        // Package name to files referencing it, for undeclared imports.
        let mut seen_in: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut scanned = 0usize;

        // Metacharacters in the root itself must match literally.
        let escaped_root = Pattern::escape(&root.display().to_string());

        for ext in EXTENSIONS {
            let pattern = format!("{escaped_root}/**/*.{ext}");
            let entries =
                glob(&pattern).with_context(|| format!("invalid scan pattern `{pattern}`"))?;
            for entry in entries {
                let path = match entry {
                    Ok(path) => path,
                    Err(err) => {
                        trace!("skipping unreadable entry: {err}");
                        continue;
                    }
                };
                if path.is_dir() || path.is_symlink() || should_skip(root, &path, &skip_dirs) {
                    continue;
                }
                let content = match fs::read_to_string(&path) {
                    Ok(content) => content,
                    Err(err) => {
                        trace!("skipping {}: {err}", path.display());
                        continue;
                    }
                };
                scanned += 1;
                for name in imported_packages(&content) {
                    seen_in
                        .entry(name.clone())
                        .or_default()
                        .push(path.display().to_string());
                    used.insert(name);
                }
            }
        }
        debug!(
            "scanned {scanned} source files, {} distinct packages referenced",
            used.len()
        );

        let exempt = if options.ignore_bin_package {
            bin_packages(root, &manifest)
        } else {
            HashSet::new()
        };
        let unused = |declared: &[String]| -> Vec<String> {
            declared
                .iter()
                .filter(|name| !used.contains(*name) && !exempt.contains(*name))
                .cloned()
                .collect()
        };
        let unused_dependencies = unused(&manifest.dependencies);
        let unused_dev_dependencies = unused(&manifest.dev_dependencies);

        let missing = if options.skip_missing {
            BTreeMap::new()
        } else {
            seen_in
                .into_iter()
                .filter(|(name, _)| !manifest.is_declared(name))
                .collect()
        };

        Ok(Analysis {
            unused_dependencies,
            unused_dev_dependencies,
            missing,
        })
    }
}

/// Extracts the distinct package names imported by one file's content.
///
/// Matches static `import`/`export ... from`, side-effect imports, and
/// `require`/dynamic `import` calls, then normalizes each specifier down
/// to a package name. Relative paths and Node builtins yield nothing.
pub(crate) fn imported_packages(content: &str) -> HashSet<String> {
    IMPORT_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .filter_map(|m| package_name(m.as_str()))
        .collect()
}

/// Normalizes an import specifier to the npm package it resolves to.
///
/// `@scope/name/deep` becomes `@scope/name`, `name/deep` becomes `name`.
/// Returns `None` for relative and absolute paths, URL-style specifiers,
/// and Node builtins (with or without the `node:` prefix).
pub(crate) fn package_name(specifier: &str) -> Option<String> {
    let spec = specifier.trim();
    if spec.is_empty() || spec.starts_with('.') || spec.starts_with('/') {
        return None;
    }
    // Valid package names never contain a colon; this covers the node:
    // namespace and URL imports in one check.
    if spec.contains(':') {
        return None;
    }

    let name = if let Some(rest) = spec.strip_prefix('@') {
        let mut parts = rest.splitn(3, '/');
        let scope = parts.next()?;
        let package = parts.next()?;
        if scope.is_empty() || package.is_empty() {
            return None;
        }
        format!("@{scope}/{package}")
    } else {
        spec.split('/').next().unwrap_or(spec).to_string()
    };

    if NODE_BUILTINS.contains(&name.as_str()) {
        return None;
    }
    Some(name)
}

fn skip_list(root: &Path, options: &AnalyzerOptions) -> HashSet<String> {
    let mut dirs: HashSet<String> = SKIP_DIRS.iter().map(|dir| dir.to_string()).collect();
    dirs.extend(options.ignore_dirs.iter().cloned());
    dirs.extend(read_ignore_file(&root.join(IGNORE_FILE)));
    dirs
}

/// Reads an ignore file and returns its non-comment, non-empty lines.
/// A missing or unreadable file yields an empty set.
pub(crate) fn read_ignore_file(path: &Path) -> HashSet<String> {
    fs::read_to_string(path)
        .map(|content| {
            content
                .lines()
                .map(|line| line.split('#').next().unwrap_or(line).trim().to_string())
                .filter(|line| !line.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Checks the path components below the project root against the skip
/// list. Components of the root itself never count.
fn should_skip(root: &Path, path: &Path, skip_dirs: &HashSet<String>) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.components().any(|component| {
        component
            .as_os_str()
            .to_str()
            .is_some_and(|name| skip_dirs.contains(name))
    })
}

/// Declared packages whose installed manifest carries a `bin` field.
/// Their whole point is the executable, so an absent import proves nothing.
fn bin_packages(root: &Path, manifest: &Manifest) -> HashSet<String> {
    let mut exempt = HashSet::new();
    for name in manifest.declared_names() {
        let manifest_path = root.join(INSTALL_DIR).join(&name).join(MANIFEST_FILE);
        let Ok(content) = fs::read_to_string(&manifest_path) else {
            continue;
        };
        let Ok(value) = serde_json::from_str::<serde_json::Value>(&content) else {
            continue;
        };
        if value.get("bin").is_some() {
            trace!("{name} ships executables, exempt from the unused lists");
            exempt.insert(name);
        }
    }
    exempt
}
