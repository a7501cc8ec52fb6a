//! Human-readable cleaning report.

use cleanfile::chars::describe_char;
use cleanfile::{CleaningStats, LineEnding};
use colored::*;
use std::fmt::Write;
use std::path::Path;

const RULE_WIDTH: usize = 70;

/// Renders the report printed after a run.
pub fn render(
    input: &Path,
    output: &Path,
    stats: &CleaningStats,
    line_ending: LineEnding,
    show_details: bool,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "\n{}", rule)?;
    writeln!(out, "{}", "FILE CLEANING REPORT".cyan().bold())?;
    writeln!(out, "{}", rule)?;

    writeln!(out, "\n{}", "Files:".bold())?;
    writeln!(out, "   Input:  {}", input.display())?;
    writeln!(out, "   Output: {}", output.display())?;

    writeln!(out, "\n{}", "Configuration:".bold())?;
    writeln!(out, "   Target OS:              {}", line_ending.label())?;
    writeln!(out, "   Line ending format:     {}", line_ending.description())?;
    if let Some(format) = stats.format_detected {
        writeln!(out, "   Detected format:        {}", format)?;
    }
    if stats.markdown_stripped {
        writeln!(out, "   Markdown stripped:      Yes")?;
    }
    if stats.html_stripped {
        writeln!(out, "   HTML stripped:          Yes")?;
        if stats.html_entities_decoded > 0 {
            writeln!(
                out,
                "   HTML entities decoded:  {}",
                stats.html_entities_decoded
            )?;
        }
    }

    writeln!(out, "\n{}", "Processing Statistics:".bold())?;
    writeln!(out, "   Lines processed:        {}", stats.lines_processed)?;
    if stats.lines_with_issues > 0 {
        writeln!(out, "   Lines with issues:      {}", stats.lines_with_issues)?;
    }
    if stats.line_endings_converted > 0 {
        writeln!(
            out,
            "   Line endings converted: {}",
            stats.line_endings_converted
        )?;
    }
    writeln!(out, "   Total characters:       {}", stats.total_chars)?;

    writeln!(out, "\n{}", "Character Removal Summary:".bold())?;
    if !stats.has_issues() {
        writeln!(out, "   No invalid characters found - file is clean!")?;
    } else {
        writeln!(
            out,
            "   Total removed:        {} characters",
            stats.removed_chars
        )?;
        if stats.zero_width_removed > 0 {
            writeln!(out, "   Zero-width chars:     {}", stats.zero_width_removed)?;
        }
        if stats.control_chars_removed > 0 {
            writeln!(out, "   Control chars:        {}", stats.control_chars_removed)?;
        }
        if stats.non_ascii_removed > 0 {
            writeln!(out, "   Non-ASCII chars:      {}", stats.non_ascii_removed)?;
        }
        if stats.total_chars > 0 {
            writeln!(
                out,
                "\n   Removal rate: {:.2}% of total characters",
                stats.removal_rate()
            )?;
        }
    }

    if show_details && !stats.removed_char_details.is_empty() {
        let thin = "-".repeat(RULE_WIDTH);
        writeln!(out, "\n{}", "Detailed Character Breakdown:".bold())?;
        writeln!(out, "{}", thin)?;
        for (&c, &count) in &stats.removed_char_details {
            writeln!(
                out,
                "   U+{:04X}  {:<40}  {} occurrence(s)",
                c as u32,
                describe_char(c),
                count
            )?;
        }
        writeln!(out, "{}", thin)?;
    }

    writeln!(out, "\n{}", rule)?;
    if stats.has_changes() {
        writeln!(out, "{}", "File cleaned successfully!".green().bold())?;
    } else {
        writeln!(out, "{}", "File processed - no changes needed!".green())?;
    }
    writeln!(out, "{}", rule)?;

    Ok(out)
}
