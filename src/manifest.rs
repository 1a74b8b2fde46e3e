use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::config::MANIFEST_FILE;
use crate::error::DepMoleError;
use crate::report::DependencyType;

#[derive(Debug, Default, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: Map<String, Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: Map<String, Value>,
    #[serde(default, rename = "peerDependencies")]
    peer_dependencies: Map<String, Value>,
}

/// Declared dependency names from `package.json`, one list per manifest
/// section, in the order the file declares them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    pub peer_dependencies: Vec<String>,
}

impl Manifest {
    pub fn section(&self, kind: DependencyType) -> &[String] {
        match kind {
            DependencyType::Prod => &self.dependencies,
            DependencyType::Dev => &self.dev_dependencies,
            DependencyType::Peer => &self.peer_dependencies,
        }
    }

    pub fn in_section(&self, kind: DependencyType, name: &str) -> bool {
        self.section(kind).iter().any(|declared| declared == name)
    }

    pub fn is_declared(&self, name: &str) -> bool {
        DependencyType::ALL
            .iter()
            .any(|kind| self.in_section(*kind, name))
    }

    /// Every declared name exactly once, sections in manifest order.
    /// A name declared in several sections keeps its first position.
    pub fn declared_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for name in self
            .dependencies
            .iter()
            .chain(&self.dev_dependencies)
            .chain(&self.peer_dependencies)
        {
            if seen.insert(name.as_str()) {
                names.push(name.clone());
            }
        }
        names
    }
}

/// Reads and parses the `package.json` at the project root.
///
/// Sections other than `dependencies`, `devDependencies` and
/// `peerDependencies` are ignored; absent sections come back empty.
///
/// # Arguments
///
/// * `root` - Path to the project directory containing `package.json`.
///
/// # Returns
///
/// Returns `Ok(Manifest)` with the declared names if the file parses.
/// Returns `Err(DepMoleError::ManifestNotFound)` when the file cannot be
/// read and `Err(DepMoleError::ManifestParseError)` when it is not valid
/// JSON.
///
/// # Examples
///
/// ```
/// match read_manifest(Path::new(".")) {
///     Ok(manifest) => println!("{} dependencies", manifest.dependencies.len()),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
pub fn read_manifest(root: &Path) -> Result<Manifest, DepMoleError> {
    let path = root.join(MANIFEST_FILE);
    let content = fs::read_to_string(&path)
        .map_err(|_| DepMoleError::ManifestNotFound { path: path.clone() })?;
    let parsed: PackageJson =
        serde_json::from_str(&content).map_err(|err| DepMoleError::ManifestParseError {
            path,
            details: err.to_string(),
        })?;

    Ok(Manifest {
        dependencies: parsed.dependencies.keys().cloned().collect(),
        dev_dependencies: parsed.dev_dependencies.keys().cloned().collect(),
        peer_dependencies: parsed.peer_dependencies.keys().cloned().collect(),
    })
}
