//! Plain aligned-table rendering for string rows.

/// Render headers and rows as an aligned text table, optionally squeezed
/// into `max_width` columns by shrinking the widest columns first.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], max_width: Option<usize>) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    fit_widths(&mut widths, headers, max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate(header, *width), *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string();

    let divider = "-".repeat(header_line.len());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).cloned().unwrap_or_else(|| "-".to_string());
                pad(&truncate(&value, *width), *width)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    loop {
        let total = widths.iter().sum::<usize>() + separators;
        if total <= max_width {
            return;
        }

        // Shrink the widest column that is still above its header width.
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].len().max(4))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);

        let Some(index) = candidate else {
            return;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.chars().count());
    format!("{}{}", value, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_mixed_width_rows() {
        let headers = ["id", "topic_name"];
        let rows = vec![
            vec!["t1".to_string(), "short".to_string()],
            vec!["t200".to_string(), "a much longer topic".to_string()],
        ];

        let table = render(&headers, &rows, None);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[1].chars().all(|c| c == '-'));
        // Both data rows start their second column at the same offset.
        let col = lines[2].find("short").expect("value present");
        assert_eq!(lines[3].find("a much").expect("value present"), col);
    }

    #[test]
    fn squeezes_into_max_width() {
        let headers = ["id", "topic_name"];
        let rows = vec![vec![
            "t1".to_string(),
            "an extremely long topic name that will not fit".to_string(),
        ]];

        let table = render(&headers, &rows, Some(30));
        for line in table.lines() {
            assert!(line.chars().count() <= 30, "line too wide: {line:?}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let headers = ["a", "b"];
        let rows = vec![vec!["x".to_string()]];
        let table = render(&headers, &rows, None);
        assert!(table.lines().nth(2).is_some_and(|line| line.contains('-')));
    }
}
