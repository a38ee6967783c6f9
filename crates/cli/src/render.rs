//! Plain-text rendering of task results.

use std::fmt::Write;

use crate::task::{LabelCount, LikedPair, ReaderTotal, TaskOutput};

const BAR_WIDTH: usize = 40;
const BAR_CHAR: char = '█';

/// Render a result for the terminal. Graphs render as their DOT text.
pub fn render(output: &TaskOutput) -> String {
    match output {
        TaskOutput::Counts { title, rows } => render_counts(title, rows),
        TaskOutput::Readers { readers } => render_readers(readers),
        TaskOutput::Likes { document_id, strategy, pairs, .. } => render_likes(document_id, strategy, pairs),
        TaskOutput::Graph { dot, .. } => dot.clone(),
    }
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (count * BAR_WIDTH).div_ceil(max);
    std::iter::repeat(BAR_CHAR).take(len).collect()
}

/// One row per label: the label, its count and a bar scaled to the largest count.
pub fn render_counts(title: &str, rows: &[LabelCount]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    if rows.is_empty() {
        let _ = writeln!(out, "  (no data)");
        return out;
    }

    let label_width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
    let max = rows.iter().map(|r| r.count).max().unwrap_or(0);
    for row in rows {
        let _ = writeln!(
            out,
            "  {:<label_width$}  {:>6}  {}",
            row.label,
            row.count,
            bar(row.count, max)
        );
    }
    out
}

fn render_readers(readers: &[ReaderTotal]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Top readers");
    if readers.is_empty() {
        let _ = writeln!(out, "  (no data)");
        return out;
    }
    let width = readers.iter().map(|r| r.visitor_id.len()).max().unwrap_or(0);
    for (rank, reader) in readers.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>3}. {:<width$}  {:>12}",
            rank + 1,
            reader.visitor_id,
            reader.read_time
        );
    }
    out
}

fn render_likes(document_id: &str, strategy: &str, pairs: &[LikedPair]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Also likes for {document_id} ({strategy})");
    if pairs.is_empty() {
        let _ = writeln!(out, "  (no data)");
        return out;
    }
    let width = pairs.iter().map(|p| p.visitor_id.len()).max().unwrap_or(0);
    for pair in pairs {
        let _ = writeln!(
            out,
            "  {:<width$}  {}  x{}",
            pair.visitor_id, pair.document_id, pair.count
        );
    }
    out
}
