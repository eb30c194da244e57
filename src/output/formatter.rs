use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;

use crate::scoring::{RankedCarer, ScoreBreakdown};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Two decimals, no compact notation.
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Format a ranking as table with columns: Index, Score, Name, Type
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column is right-aligned, at least 8 chars wide; wider scores push
/// the row out rather than being cut
pub fn format_ranked_table(ranked: &[RankedCarer], use_colors: bool) -> String {
    if ranked.is_empty() {
        return "No carers found.".to_string();
    }

    let score_width = 8;
    let separator = "  ";

    ranked
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>width$}", format_score(entry.score), width = score_width);
            let name = entry.carer.display_name();
            let carer_type = &entry.carer.carer_type;

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    name,
                    separator,
                    carer_type.cyan()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_padded, separator, name, separator, carer_type
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a ranking as tab-separated values for scripting
/// Columns: score, id, first_name, last_name, type (no headers, no colors)
pub fn format_tsv(ranked: &[RankedCarer]) -> String {
    ranked
        .iter()
        .map(|entry| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                format_score(entry.score),
                entry.carer.id,
                entry.carer.first_name,
                entry.carer.last_name,
                entry.carer.carer_type
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    rank: usize,
    score: f64,
    #[serde(flatten)]
    carer: &'a crate::carer::CarerRecord,
}

/// Format a ranking as a pretty-printed JSON array
pub fn format_json(ranked: &[RankedCarer]) -> serde_json::Result<String> {
    let entries: Vec<JsonEntry> = ranked
        .iter()
        .enumerate()
        .map(|(idx, entry)| JsonEntry {
            rank: idx + 1,
            score: entry.score,
            carer: &entry.carer,
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}

/// Format one carer's per-factor breakdown (for the explain command)
pub fn format_breakdown(entry: &RankedCarer, breakdown: &ScoreBreakdown, use_colors: bool) -> String {
    let mut lines = Vec::with_capacity(breakdown.factors.len() + 2);

    let header = format!(
        "{} (id {}, {})",
        entry.carer.display_name(),
        entry.carer.id,
        entry.carer.carer_type
    );
    lines.push(if use_colors {
        header.bold().to_string()
    } else {
        header
    });

    for factor in &breakdown.factors {
        let value = format!("{:>+9.2}", factor.value);
        let value = if !use_colors {
            value
        } else if factor.value < 0.0 {
            value.red().to_string()
        } else {
            value.green().to_string()
        };
        lines.push(format!(
            "  {:<17}{}  {}",
            factor.label, value, factor.description
        ));
    }

    lines.push(format!("  {:<17}{:>9.2}", "Total", breakdown.total));
    lines.join("\n")
}
