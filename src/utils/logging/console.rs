//! Console output utilities
//!
//! Plain-text rendering of a pipeline report for the command line.

use crate::pipeline::PopulationReport;

/// Print the headline numbers of a report
pub fn print_report_summary(report: &PopulationReport, elapsed: std::time::Duration) {
    let summary = &report.summary;
    println!("Analysed {} records in {:?}", summary.row_count, elapsed);
    if let Some((first, last)) = summary.year_range {
        println!("Years: {first}-{last}, regions: {}", summary.region_count);
    }

    let forecast = &report.forecast;
    println!(
        "National population {} in {}, projected {} in {} ({:+} per year)",
        forecast.anchor_population,
        forecast.anchor_year,
        forecast.projected_population,
        forecast.target_year,
        forecast.annual_delta
    );

    println!(
        "Population change {}-{}:",
        report.deltas.base_year(),
        report.deltas.end_year()
    );
    println!("  Top gains:  {}", report.delta_head.join(", "));
    println!("  Top losses: {}", report.delta_tail.join(", "));
}

/// Print the first `num_rows` year-over-year changes
pub fn print_top_changes(report: &PopulationReport, num_rows: usize) {
    println!("Largest year-over-year increases:");
    for change in report.top_changes.iter().take(num_rows) {
        println!(
            "  {:<10} {} {:>12} ({:+})",
            change.record.region_label(),
            change.record.year,
            change.record.population,
            change.diff
        );
    }
}
