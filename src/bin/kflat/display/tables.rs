use std::collections::BTreeMap;
use std::io::{self, Write};

use kegg_flat::registry::{classify, field_order};
use kegg_flat::{Record, RecordType, normalize_label};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

/// A three-column box table; the last column absorbs the remaining width.
struct Table<'a> {
    title: &'a str,
    headers: [&'a str; 3],
    first_w: usize,
    second_w: usize,
}

impl Table<'_> {
    fn third_w(&self) -> usize {
        SAFE_TABLE_WIDTH.saturating_sub(self.first_w + self.second_w + 6)
    }

    fn rule(&self, out: &mut impl Write, left: char, mid: char, right: char) {
        let _ = writeln!(
            out,
            "{INDENT}{left}{}{mid}{}{mid}{}{right}",
            "─".repeat(self.first_w + 2),
            "─".repeat(self.second_w + 2),
            "─".repeat(self.third_w() + 2),
        );
    }

    fn row(&self, out: &mut impl Write, cells: [&str; 3]) {
        let (first_w, second_w, third_w) = (self.first_w, self.second_w, self.third_w());
        let _ = writeln!(
            out,
            "{INDENT}│ {:<first_w$} │ {:>second_w$} │ {:<third_w$} │",
            truncate(cells[0], first_w),
            truncate(cells[1], second_w),
            truncate(cells[2], third_w),
        );
    }

    fn print(&self, out: &mut impl Write, rows: &[[String; 3]]) {
        let _ = writeln!(
            out,
            "{INDENT}┌─ {} ─┐",
            truncate(self.title, SAFE_TABLE_WIDTH - 6)
        );
        self.rule(out, '┌', '┬', '┐');
        self.row(out, self.headers);
        self.rule(out, '├', '┼', '┤');
        for [a, b, c] in rows {
            self.row(out, [a.as_str(), b.as_str(), c.as_str()]);
        }
        self.rule(out, '└', '┴', '┘');
    }
}

/// Prints the canonical fields of `record_type` with their layout class.
pub fn print_field_order(record_type: RecordType) {
    let Some(order) = field_order(record_type) else {
        return;
    };

    let rows: Vec<[String; 3]> = order
        .iter()
        .enumerate()
        .map(|(i, id)| {
            [
                normalize_label(id),
                format!("{}", i + 1),
                classify(id).to_string(),
            ]
        })
        .collect();

    let title = format!("{} Fields", record_type.name().to_uppercase());
    let table = Table {
        title: &title,
        headers: ["Label", "#", "Layout"],
        first_w: 14,
        second_w: 4,
    };

    let mut out = io::stdout().lock();
    table.print(&mut out, &rows);
}

pub fn print_record_types() {
    let rows: Vec<[String; 3]> = RecordType::ALL
        .iter()
        .map(|&ty| {
            let order = field_order(ty).unwrap_or_default();
            let special = order.iter().filter(|id| classify(id).is_special()).count();
            [
                ty.name().to_string(),
                order.len().to_string(),
                format!("{special} special"),
            ]
        })
        .collect();

    let table = Table {
        title: "Record Types",
        headers: ["Type", "Fields", "Blocks"],
        first_w: 12,
        second_w: 6,
    };

    let mut out = io::stdout().lock();
    table.print(&mut out, &rows);
}

/// Per-type record counts of a rendered batch, on stderr.
pub fn print_batch_summary(records: &[Record]) {
    let mut counts: BTreeMap<RecordType, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.record_type()).or_insert(0) += 1;
    }

    let rows: Vec<[String; 3]> = counts
        .into_iter()
        .map(|(ty, count)| {
            let pct = count as f64 / records.len() as f64 * 100.0;
            [ty.name().to_string(), count.to_string(), format!("{pct:.1}%")]
        })
        .collect();

    let table = Table {
        title: "Batch Summary",
        headers: ["Type", "Records", "Share"],
        first_w: 12,
        second_w: 8,
    };

    let mut out = io::stderr().lock();
    table.print(&mut out, &rows);
}
