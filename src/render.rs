use colored::Colorize;
use comfy_table::{Cell, Color, Table};
use std::path::Path;

use crate::package_manager::PackageManager;
use crate::registry::Verification;
use crate::report::{DependencyRecord, Group, GroupKind, Report, ReportView, Status};
use crate::theme::{self, icons};

/// Prints the dependency report to stdout.
///
/// The layout is a header, a summary table over the whole report, then one
/// list section per display group, skipping empty groups. When nothing at
/// all qualifies for display, the sections give way to a single all-good
/// line. A package manager hint follows whenever a displayed record is
/// absent from `node_modules`.
///
/// # Arguments
///
/// * `report` - The full classification, for the summary counts.
/// * `view` - The filtered and grouped records to list.
/// * `root` - The project directory, echoed in the summary table.
/// * `package_manager` - Detected package manager, for the install hint.
pub fn print_report(
    report: &Report,
    view: &ReportView<'_>,
    root: &Path,
    package_manager: PackageManager,
) {
    println!(
        "\n{}",
        theme::info(&format!("{} Dependency Check Report", icons::PACKAGE)).bold()
    );

    if view.is_empty() {
        println!(
            "\n{} {}",
            icons::CHECK,
            theme::success("All dependencies look good!").bold()
        );
        return;
    }

    print_summary_table(report, root);

    for group in &view.groups {
        if group.records.is_empty() {
            continue;
        }
        print_group(group);
    }

    if view.has_status(Status::NotInstalled) {
        println!(
            "\n{}",
            theme::muted(&format!(
                "Run `{}` to restore the packages missing from node_modules.",
                package_manager.install_command()
            ))
        );
    }
}

fn print_summary_table(report: &Report, root: &Path) {
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Project"),
        Cell::new(root.display().to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Declared dependencies"),
        Cell::new(report.declared_count().to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Healthy"),
        Cell::new(report.count(Status::Healthy).to_string()).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Unused"),
        Cell::new(report.count(Status::Unused).to_string()).fg(Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Not installed"),
        Cell::new(report.count(Status::NotInstalled).to_string()).fg(Color::Magenta),
    ]);
    table.add_row(vec![
        Cell::new("Missing"),
        Cell::new(report.count(Status::Missing).to_string()).fg(Color::Red),
    ]);
    println!("{table}");
}

fn print_group(group: &Group<'_>) {
    let title = format!("{} {}:", group_icon(group.kind), group.kind.title());
    println!("\n{}", group_color(group.kind, &title).bold());
    for record in &group.records {
        println!("- {}", record_color(record));
    }
}

fn group_icon(kind: GroupKind) -> &'static str {
    match kind {
        GroupKind::Status(Status::Healthy) => icons::CHECK,
        GroupKind::Status(Status::Unused) => icons::UNUSED,
        GroupKind::Status(Status::NotInstalled) => icons::WARN,
        GroupKind::Status(Status::Missing) => icons::MISSING,
        GroupKind::Section(_) => icons::FOLDER,
    }
}

fn group_color(kind: GroupKind, text: &str) -> colored::ColoredString {
    match kind {
        GroupKind::Status(status) => status_color(status, text),
        GroupKind::Section(_) => theme::info(text),
    }
}

fn status_color(status: Status, text: &str) -> colored::ColoredString {
    match status {
        Status::Healthy => theme::success(text),
        Status::Unused => theme::warning(text),
        Status::NotInstalled => theme::highlight(text),
        Status::Missing => theme::error(text),
    }
}

/// Colors a record line by its most severe status.
fn record_color(record: &DependencyRecord) -> colored::ColoredString {
    if record.is_missing() {
        theme::error(&record.name)
    } else if record.is_unused() {
        theme::warning(&record.name)
    } else if record.is_not_installed() {
        theme::highlight(&record.name)
    } else {
        theme::success(&record.name)
    }
}

pub fn print_verify_header() {
    println!(
        "\n{}",
        theme::info(&format!("{} Verifying dependencies on npm...", icons::SEARCH)).bold()
    );
}

pub fn print_verification(result: &Verification) {
    if result.exists {
        println!(
            "{}",
            theme::success(&format!(
                "{} {} exists on npm. Latest version: {}",
                icons::CHECK,
                result.name,
                result.latest_version()
            ))
        );
    } else {
        println!(
            "{}",
            theme::error(&format!("{} {} not found on npm!", icons::CROSS, result.name))
        );
    }
}
