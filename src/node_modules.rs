use log::trace;
use std::collections::HashSet;
use std::path::Path;

use crate::config::INSTALL_DIR;

/// Checks whether a package directory exists under `node_modules`.
///
/// This is a pure existence probe. It never inspects the directory's
/// contents and never fails: an unreadable or absent install tree simply
/// reads as not installed.
pub fn is_installed(root: &Path, name: &str) -> bool {
    let path = root.join(INSTALL_DIR).join(name);
    let present = path.exists();
    trace!("install probe {}: {present}", path.display());
    present
}

/// Filters candidate names down to the ones present under `node_modules`.
pub fn installed_packages<'a, I>(root: &Path, candidates: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    candidates
        .into_iter()
        .filter(|name| is_installed(root, name))
        .cloned()
        .collect()
}
