//! Journal display formatting

use crate::models::{Book, JournalEntry};
use crate::services::PostingOutcome;

/// Format entries with their lines, in the order given
pub fn format_journal(entries: &[&JournalEntry], book: &Book) -> String {
    if entries.is_empty() {
        return "No journal entries found.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let reference = if entry.reference.is_empty() {
            String::new()
        } else {
            format!("  {}", entry.reference)
        };
        output.push_str(&format!(
            "{} {}{}\n",
            entry.date.format("%Y-%m-%d"),
            entry.id,
            reference
        ));

        for line in &entry.lines {
            let name = book
                .accounts
                .find(&line.account_id)
                .map(|a| a.name.as_str())
                .unwrap_or("?");
            let (debit, credit) = (
                if line.debit.is_zero() { String::new() } else { line.debit.to_string() },
                if line.credit.is_zero() { String::new() } else { line.credit.to_string() },
            );
            let quantity = line
                .quantity
                .map(|q| format!(" x{}", q))
                .unwrap_or_default();
            output.push_str(&format!(
                "    {:<6} {:<26} {:>14} {:>14}{}\n",
                line.account_id, name, debit, credit, quantity
            ));
        }
        output.push('\n');
    }

    output
}

/// One-line confirmation after posting, plus a shortfall warning if any
pub fn format_posting_outcome(outcome: &PostingOutcome) -> String {
    let mut output = format!(
        "Posted entry {} ({} lines)\n",
        outcome.entry_id, outcome.records_posted
    );

    for layer in &outcome.layers_added {
        output.push_str(&format!(
            "  Added inventory layer: {} @ {}\n",
            layer.qty, layer.unit_cost
        ));
    }

    if let Some(consumption) = &outcome.consumption {
        output.push_str(&format!(
            "  Relieved inventory: {} of {}\n",
            consumption.consumed, consumption.requested
        ));
    }

    if let Some(shortfall) = outcome.shortfall() {
        output.push_str(&format!(
            "  Warning: inventory shortfall of {} (not enough stock to cover cost of goods sold)\n",
            shortfall
        ));
    }

    output
}
