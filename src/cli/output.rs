//! Output formatting utilities

use crate::application::{ApplyReport, NormalizeReport, PageOutcome, RootRename};
use crate::domain::PageEntry;

/// Summarize the normalization step
pub fn format_normalize_report(report: &NormalizeReport) -> String {
    let mut output = String::new();
    let dry = report.dry_run;

    match report.root {
        RootRename::Renamed => output.push_str(if dry {
            "Would rename page.html to index.html\n"
        } else {
            "Renamed page.html to index.html\n"
        }),
        RootRename::RemovedDuplicate => output.push_str(if dry {
            "Would remove page.html (index.html already exists)\n"
        } else {
            "Removed page.html (index.html already exists)\n"
        }),
        RootRename::NotFound => {
            output.push_str("page.html not found (already renamed or doesn't exist)\n")
        }
        RootRename::Failed => {}
    }

    if report.created.is_empty() {
        output.push_str("No subdirectories needed index.html files\n");
    } else {
        let verb = if dry { "Would create" } else { "Created" };
        for index in &report.created {
            output.push_str(&format!("{} {}\n", verb, index));
        }
    }

    for failure in &report.failed {
        output.push_str(&format!(
            "Could not normalize {}: {}\n",
            failure.page, failure.reason
        ));
    }

    output
}

/// Final summary line(s) of an apply run
pub fn format_apply_report(report: &ApplyReport) -> String {
    let mut output = String::new();

    if report.dry_run {
        output.push_str(&format!(
            "Dry run: {} file(s) would be updated, {} already up to date, skipped {} file(s).\n",
            report.rewritten(),
            report.processed() - report.rewritten(),
            report.skipped()
        ));
    } else {
        output.push_str(&format!(
            "Done! Processed {} file(s), skipped {} file(s).\n",
            report.processed(),
            report.skipped()
        ));
    }

    let failures: Vec<_> = report
        .pages
        .iter()
        .filter_map(|r| match &r.outcome {
            PageOutcome::Failed(reason) => Some((r.page.as_str(), reason.as_str())),
            _ => None,
        })
        .collect();

    if !failures.is_empty() {
        output.push_str("Failed:\n");
        for (page, reason) in failures {
            output.push_str(&format!("  {}: {}\n", page, reason));
        }
    }

    output
}

/// Page table, one row per page
pub fn format_page_list(pages: &[PageEntry], primary_page: &str) -> String {
    if pages.is_empty() {
        return "No pages configured".to_string();
    }

    let width = pages.iter().map(|p| p.path.len()).max().unwrap_or(0);
    let mut output = String::new();
    for page in pages {
        let mut flags = Vec::new();
        if page.path == primary_page {
            flags.push("primary");
        }
        if page.structured_data {
            flags.push("json-ld");
        }

        let line = format!("{:<width$}  {}", page.path, page.canonical, width = width);
        if flags.is_empty() {
            output.push_str(&format!("{}\n", line));
        } else {
            output.push_str(&format!("{}  [{}]\n", line, flags.join(", ")));
        }
    }
    output
}
