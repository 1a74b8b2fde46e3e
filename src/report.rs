use std::collections::HashSet;

use log::trace;

use crate::analyzer::Analysis;
use crate::manifest::Manifest;

/// One package under consideration, classified along three independent axes.
///
/// `declared` means the name appears in some section of `package.json`,
/// `used` means the analyzer saw it imported from source, and `installed`
/// means a directory for it exists under `node_modules`. A record where
/// `declared` is false always has `used == true` and `installed == false`,
/// since such records only come from the analyzer's missing map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    pub name: String,
    pub declared: bool,
    pub used: bool,
    pub installed: bool,
}

impl DependencyRecord {
    pub fn is_healthy(&self) -> bool {
        self.declared && self.used && self.installed
    }

    pub fn is_unused(&self) -> bool {
        self.declared && !self.used
    }

    pub fn is_not_installed(&self) -> bool {
        self.declared && !self.installed
    }

    pub fn is_missing(&self) -> bool {
        !self.declared
    }
}

/// Manifest section a name is declared in. A name can sit in several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyType {
    Prod,
    Dev,
    Peer,
}

impl DependencyType {
    pub const ALL: [DependencyType; 3] = [Self::Prod, Self::Dev, Self::Peer];

    pub fn section_name(self) -> &'static str {
        match self {
            Self::Prod => "dependencies",
            Self::Dev => "devDependencies",
            Self::Peer => "peerDependencies",
        }
    }
}

/// Health buckets derived from the record axes. The buckets are not
/// disjoint: a declared package that is neither used nor installed is
/// both unused and not installed, and shows up under both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Healthy,
    Unused,
    NotInstalled,
    Missing,
}

impl Status {
    pub const ALL: [Status; 4] = [Self::Healthy, Self::Unused, Self::NotInstalled, Self::Missing];

    pub fn matches(self, record: &DependencyRecord) -> bool {
        match self {
            Self::Healthy => record.is_healthy(),
            Self::Unused => record.is_unused(),
            Self::NotInstalled => record.is_not_installed(),
            Self::Missing => record.is_missing(),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy dependencies",
            Self::Unused => "Unused dependencies",
            Self::NotInstalled => "Declared but missing in node_modules",
            Self::Missing => "Missing dependencies (imported but not in package.json)",
        }
    }
}

/// Restricts the report to one manifest section, or keeps everything.
/// Undeclared records belong to no section, so any restriction drops them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Prod,
    Dev,
    Peer,
}

impl TypeFilter {
    fn keeps(self, manifest: &Manifest, record: &DependencyRecord) -> bool {
        let kind = match self {
            Self::All => return true,
            Self::Prod => DependencyType::Prod,
            Self::Dev => DependencyType::Dev,
            Self::Peer => DependencyType::Peer,
        };
        manifest.in_section(kind, &record.name)
    }
}

/// How the selected records are grouped for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayMode {
    /// One section per health bucket, in the given order.
    Status(Vec<Status>),
    /// One section per manifest section. Undeclared records appear nowhere.
    Flat,
}

/// What the user asked to see: a type filter plus a grouping mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub type_filter: TypeFilter,
    pub mode: DisplayMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Status(Status),
    Section(DependencyType),
}

impl GroupKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Status(status) => status.title(),
            Self::Section(kind) => kind.section_name(),
        }
    }
}

pub struct Group<'a> {
    pub kind: GroupKind,
    pub records: Vec<&'a DependencyRecord>,
}

/// The filtered, grouped slice of a report that actually gets displayed.
pub struct ReportView<'a> {
    pub groups: Vec<Group<'a>>,
}

impl ReportView<'_> {
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|group| group.records.is_empty())
    }

    /// Names selected for display, deduplicated, in display order.
    /// This doubles as the verification list for the registry step.
    pub fn names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for group in &self.groups {
            for record in &group.records {
                if seen.insert(record.name.as_str()) {
                    names.push(record.name.clone());
                }
            }
        }
        names
    }

    pub fn has_status(&self, status: Status) -> bool {
        self.groups
            .iter()
            .flat_map(|group| &group.records)
            .any(|record| status.matches(record))
    }
}

/// The full classification of a project: every declared name plus every
/// undeclared import, each as one record.
#[derive(Debug)]
pub struct Report {
    manifest: Manifest,
    records: Vec<DependencyRecord>,
}

impl Report {
    /// Merges the manifest, the usage analysis and the install probe into
    /// one record set.
    ///
    /// Declared names come first, in manifest order. Undeclared imports
    /// follow as synthetic records. An analyzer missing entry whose name
    /// is in fact declared is dropped; the declared record wins.
    ///
    /// # Arguments
    ///
    /// * `manifest` - Declared names per section.
    /// * `analysis` - Unused and missing findings from the analyzer.
    /// * `installed` - Names with a directory under `node_modules`.
    pub fn build(manifest: Manifest, analysis: &Analysis, installed: &HashSet<String>) -> Self {
        let unused: HashSet<&str> = analysis
            .unused_dependencies
            .iter()
            .chain(&analysis.unused_dev_dependencies)
            .map(String::as_str)
            .collect();

        let mut records = Vec::new();
        for name in manifest.declared_names() {
            records.push(DependencyRecord {
                declared: true,
                used: !unused.contains(name.as_str()),
                installed: installed.contains(&name),
                name,
            });
        }
        for name in analysis.missing.keys() {
            if manifest.is_declared(name) {
                trace!("analyzer reported declared package {name} as missing, keeping the declared record");
                continue;
            }
            records.push(DependencyRecord {
                name: name.clone(),
                declared: false,
                used: true,
                installed: false,
            });
        }

        Self { manifest, records }
    }

    pub fn records(&self) -> &[DependencyRecord] {
        &self.records
    }

    pub fn count(&self, status: Status) -> usize {
        self.records
            .iter()
            .filter(|record| status.matches(record))
            .count()
    }

    pub fn declared_count(&self) -> usize {
        self.records.iter().filter(|record| record.declared).count()
    }

    /// Applies the type filter, then partitions the survivors into the
    /// display groups the selection asks for. Records keep their insertion
    /// order inside each group; a record matching several groups appears
    /// in each of them.
    pub fn select(&self, selection: &Selection) -> ReportView<'_> {
        let filtered: Vec<&DependencyRecord> = self
            .records
            .iter()
            .filter(|record| selection.type_filter.keeps(&self.manifest, record))
            .collect();

        let groups = match &selection.mode {
            DisplayMode::Status(statuses) => statuses
                .iter()
                .map(|status| Group {
                    kind: GroupKind::Status(*status),
                    records: filtered
                        .iter()
                        .copied()
                        .filter(|record| status.matches(record))
                        .collect(),
                })
                .collect(),
            DisplayMode::Flat => DependencyType::ALL
                .into_iter()
                .map(|kind| Group {
                    kind: GroupKind::Section(kind),
                    records: filtered
                        .iter()
                        .copied()
                        .filter(|record| self.manifest.in_section(kind, &record.name))
                        .collect(),
                })
                .collect(),
        };

        ReportView { groups }
    }
}
