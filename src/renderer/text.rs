//! Plain-text output from layout results

use crate::grid::GridLayout;

use super::TextConfig;

/// Draw the grid one line per row
///
/// A field's top row shows `[label]` stretched over its columns, the rows
/// below it show `|   |`, and free cells show `.`. `labels` is indexed by
/// [`FieldId`](crate::matrix::FieldId); missing labels render blank.
pub fn render_map(layout: &GridLayout, labels: &[&str], config: &TextConfig) -> String {
    let cell_width = config.cell_width.max(super::config::MIN_CELL_WIDTH);
    let mut lines = Vec::with_capacity(layout.rows.max(0) as usize);

    for y in 0..layout.rows {
        let mut line = String::new();
        let mut x = 0;
        while x < layout.columns {
            let Some((field, data)) = layout
                .field_at(x, y)
                .and_then(|field| layout.grid_data(field).map(|data| (field, data)))
            else {
                line.push('.');
                line.push_str(&" ".repeat(cell_width - 1));
                x += 1;
                continue;
            };

            let inner = data.w.max(1) as usize * cell_width - 2;
            if y == data.y {
                let label: String = labels
                    .get(field.0)
                    .copied()
                    .unwrap_or("")
                    .chars()
                    .take(inner)
                    .collect();
                line.push_str(&format!("[{:<width$}]", label, width = inner));
            } else {
                line.push_str(&format!("|{}|", " ".repeat(inner)));
            }
            x = data.right();
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// List every placement as `label  x=.. y=.. w=.. h=..`
pub fn render_table(layout: &GridLayout, labels: &[&str]) -> String {
    let label_of = |index: usize| labels.get(index).copied().unwrap_or("");
    let width = layout
        .placements
        .iter()
        .map(|(field, _)| label_of(field.0).chars().count())
        .max()
        .unwrap_or(0);

    layout
        .placements
        .iter()
        .map(|(field, data)| {
            format!(
                "{:<width$}  x={} y={} w={} h={}",
                label_of(field.0),
                data.x,
                data.y,
                data.w,
                data.h,
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
