use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::analyze::{ScoredUser, Summary};
use crate::scoring::Tier;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Format a score with fixed four-decimal precision.
/// The same formatting is used for the table and the CSV artifact so the
/// two surfaces never disagree.
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

fn format_tier(tier: Tier, use_colors: bool) -> String {
    // Left-aligned in a 6-char column ("Medium" is the widest label)
    let label = format!("{:<6}", tier.as_str());
    if !use_colors {
        return label;
    }
    match tier {
        Tier::Elite => label.green().to_string(),
        Tier::High => label.cyan().to_string(),
        Tier::Medium => label.yellow().to_string(),
        Tier::Low => label.red().to_string(),
    }
}

/// Format scored users as a table with columns: Index, Score, Tier, User.
/// Callers pass rows in the order they should appear (usually sorted by
/// score descending). No headers, minimal format.
/// Index column: 3 chars, right-aligned. Score column: 7 chars, right-aligned.
pub fn format_score_table(rows: &[ScoredUser], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No users scored.".to_string();
    }

    let separator = "  ";

    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            // 1-based index, right-aligned with trailing dot
            let index_str = format!("{:>3}.", idx + 1);
            let score_str = format!("{:>7}", format_score(row.breakdown.social_score));
            let tier_str = format_tier(row.breakdown.tier, use_colors);

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    tier_str,
                    separator,
                    row.user_id
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_str, separator, tier_str, separator, row.user_id
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the summary statistics block printed after a batch run.
pub fn format_summary(summary: &Summary, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let heading = "Summary Statistics:";
    if use_colors {
        lines.push(heading.bold().to_string());
    } else {
        lines.push(heading.to_string());
    }
    lines.push("-".repeat(50));
    lines.push(format!("Users scored: {}", summary.user_count));
    lines.push(format!(
        "Average Social Score: {:.2}",
        summary.mean_social_score
    ));

    lines.push(String::new());
    lines.push("Tier Distribution:".to_string());
    for &(tier, count) in &summary.tier_counts {
        lines.push(format!("  {:<6} {:>5}", tier.as_str(), count));
    }

    lines.push(String::new());
    lines.push("Component Score Averages:".to_string());
    for &(name, value) in &summary.component_means {
        lines.push(format!("  {:<20} {:.2}", name, value));
    }

    lines.join("\n")
}

/// Width budget for histogram bars: leave room for the bin label and count,
/// cap so wide terminals don't produce absurd bars.
fn bar_width_budget() -> usize {
    const LABEL_OVERHEAD: usize = 20;
    const MAX_BAR: usize = 40;
    match get_terminal_width() {
        Some(w) if w > LABEL_OVERHEAD + 10 => (w - LABEL_OVERHEAD).min(MAX_BAR),
        _ => MAX_BAR,
    }
}

/// Format a terminal histogram of social scores over `bins` equal-width
/// bins spanning [0,1]. Out-of-range scores land in the edge bins.
pub fn format_histogram(scores: &[f64], bins: usize, use_colors: bool) -> String {
    if scores.is_empty() {
        return "No users scored.".to_string();
    }

    let bins = bins.max(1);
    let mut counts = vec![0usize; bins];
    for &score in scores {
        let idx = if score.is_nan() {
            0
        } else {
            ((score * bins as f64).floor() as isize).clamp(0, bins as isize - 1) as usize
        };
        counts[idx] += 1;
    }

    let max_count = counts.iter().copied().max().unwrap_or(0).max(1);
    let bar_width = bar_width_budget();
    let bin_size = 1.0 / bins as f64;

    let mut lines = Vec::with_capacity(bins + 1);
    let heading = "Distribution of Social Scores:";
    if use_colors {
        lines.push(heading.bold().to_string());
    } else {
        lines.push(heading.to_string());
    }

    for (i, &count) in counts.iter().enumerate() {
        let lo = i as f64 * bin_size;
        let hi = lo + bin_size;
        let len = if count == 0 {
            0
        } else {
            (count * bar_width / max_count).max(1)
        };
        let bar = "#".repeat(len);
        let label = format!("{:.2}-{:.2}", lo, hi);

        if use_colors {
            lines.push(format!("  {} {} {}", label.dimmed(), bar.cyan(), count));
        } else {
            lines.push(format!("  {} {} {}", label, bar, count));
        }
    }

    lines.join("\n")
}

/// Format average component scores as labeled bars with value labels,
/// the companion chart to the score histogram.
pub fn format_component_bars(component_means: &[(&'static str, f64)], use_colors: bool) -> String {
    if component_means.is_empty() {
        return String::new();
    }

    let bar_width = bar_width_budget();

    let mut lines = Vec::with_capacity(component_means.len() + 1);
    let heading = "Average Component Scores:";
    if use_colors {
        lines.push(heading.bold().to_string());
    } else {
        lines.push(heading.to_string());
    }

    for &(name, value) in component_means {
        // Bars scale against the [0,1] score range, not the max component
        let len = ((value.clamp(0.0, 1.0) * bar_width as f64).round() as usize).min(bar_width);
        let bar = "#".repeat(len);
        let label = name.trim_end_matches("_score");

        if use_colors {
            lines.push(format!(
                "  {:<12} {} {:.2}",
                label,
                bar.green(),
                value
            ));
        } else {
            lines.push(format!("  {:<12} {} {:.2}", label, bar, value));
        }
    }

    lines.join("\n")
}
