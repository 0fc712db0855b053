//! Tabular-markup adapter.
//!
//! Converts a `<table>` fragment into a rectangular grid of normalized cell
//! text, row-major, header rows included. Column-spanning header cells are
//! NOT expanded, so consumers index by nominal position; rows may be shorter
//! than their siblings and callers must defend against that. Where header
//! cells exist, [`Grid::column`] offers a named lookup so positional offsets
//! (like the ATGM shift) stay explicit instead of baked-in magic numbers.

use scraper::{ElementRef, Selector};

use crate::text::normalize_ws;

/// A parsed table: every `<tr>` becomes one row of cell text.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Vec<String>>,
    /// Number of leading rows that contain at least one `<th>`.
    header_len: usize,
}

impl Grid {
    /// Flatten a table element into a grid. `<th>` and `<td>` cells are
    /// treated alike; cell text is whitespace-normalized.
    pub fn from_table(table: ElementRef<'_>) -> Grid {
        let tr = Selector::parse("tr").unwrap();
        let cell = Selector::parse("th, td").unwrap();

        let mut rows = Vec::new();
        let mut header_len = 0usize;
        let mut in_header = true;

        for row in table.select(&tr) {
            let mut cells = Vec::new();
            let mut has_th = false;
            for c in row.select(&cell) {
                if c.value().name() == "th" {
                    has_th = true;
                }
                cells.push(normalize_ws(&c.text().collect::<String>()));
            }
            if in_header && has_th {
                header_len += 1;
            } else {
                in_header = false;
            }
            rows.push(cells);
        }

        Grid { rows, header_len }
    }

    /// All rows, headers first.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The leading `<th>`-bearing rows.
    pub fn header_rows(&self) -> &[Vec<String>] {
        &self.rows[..self.header_len]
    }

    /// Everything after the leading header rows.
    pub fn data_rows(&self) -> &[Vec<String>] {
        &self.rows[self.header_len..]
    }

    /// Text of the very first header cell, if any. Data tables carry their
    /// kind there ("Penetration statistics", "Shell details").
    pub fn first_header(&self) -> Option<&str> {
        self.header_rows()
            .iter()
            .flat_map(|r| r.iter())
            .map(String::as_str)
            .find(|s| !s.is_empty())
    }

    /// Named-column lookup: position of the first header cell containing
    /// `label` (case-insensitive). Spanning cells are not expanded, so the
    /// returned index is nominal; callers fall back to fixed positions when
    /// this returns `None`.
    pub fn column(&self, label: &str) -> Option<usize> {
        let needle = label.to_lowercase();
        self.header_rows()
            .iter()
            .find_map(|row| row.iter().position(|c| c.to_lowercase().contains(&needle)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn grid(html: &str) -> Grid {
        let fragment = Html::parse_fragment(html);
        let table = Selector::parse("table").unwrap();
        Grid::from_table(fragment.select(&table).next().unwrap())
    }

    #[test]
    fn rows_keep_nominal_positions() {
        let g = grid(
            r#"<table>
                <tr><th colspan="3">Penetration statistics</th></tr>
                <tr><th>Ammunition</th><th>Type of warhead</th><th>Penetration</th></tr>
                <tr><td>APDS</td><td>APDS</td><td>300</td></tr>
            </table>"#,
        );
        // The colspan header is one cell, not three.
        assert_eq!(g.rows()[0].len(), 1);
        assert_eq!(g.header_rows().len(), 2);
        assert_eq!(g.data_rows(), &[vec!["APDS".to_string(), "APDS".into(), "300".into()]]);
        assert_eq!(g.first_header(), Some("Penetration statistics"));
    }

    #[test]
    fn short_rows_survive() {
        let g = grid("<table><tr><td>a</td><td>b</td></tr><tr><td>c</td></tr></table>");
        assert_eq!(g.rows()[0].len(), 2);
        assert_eq!(g.rows()[1].len(), 1);
        assert!(g.header_rows().is_empty());
    }

    #[test]
    fn named_column_lookup_with_positional_fallback() {
        let g = grid(
            r#"<table>
                <tr><th>Ammunition</th><th>Type of warhead</th><th>10 m</th></tr>
                <tr><td>M456</td><td>HEAT-FS</td><td>400</td></tr>
            </table>"#,
        );
        assert_eq!(g.column("type of warhead"), Some(1));
        assert_eq!(g.column("10 m"), Some(2));
        assert_eq!(g.column("Fuse"), None);
    }

    #[test]
    fn headers_interrupted_by_data_stop_counting() {
        let g = grid(
            r#"<table>
                <tr><th>h</th></tr>
                <tr><td>d</td></tr>
                <tr><th>late header</th></tr>
            </table>"#,
        );
        assert_eq!(g.header_rows().len(), 1);
        assert_eq!(g.data_rows().len(), 2);
    }
}
