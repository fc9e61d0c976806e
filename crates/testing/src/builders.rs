//! Builder for CSV tables used as submissions and ground truth.

use leaderboard_domain::MATCH_COLUMN;

/// Builds CSV bytes column by column.
///
/// Columns are written in the order they were added. Shorter columns are
/// padded with empty cells so the table stays rectangular.
#[derive(Debug, Clone, Default)]
pub struct CsvBuilder {
    columns: Vec<(String, Vec<String>)>,
    bom: bool,
}

impl CsvBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arbitrary column.
    pub fn with_column(mut self, header: &str, values: &[&str]) -> Self {
        self.columns.push((
            header.to_string(),
            values.iter().map(|v| v.to_string()).collect(),
        ));
        self
    }

    /// Add the `match` column.
    pub fn with_match(self, values: &[&str]) -> Self {
        self.with_column(MATCH_COLUMN, values)
    }

    /// Prefix the output with a UTF-8 byte order mark.
    pub fn with_bom(mut self) -> Self {
        self.bom = true;
        self
    }

    /// Render the table.
    pub fn build(&self) -> Vec<u8> {
        let rows = self
            .columns
            .iter()
            .map(|(_, values)| values.len())
            .max()
            .unwrap_or(0);

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(self.columns.iter().map(|(header, _)| header.as_str()))
            .expect("write header");
        for row in 0..rows {
            writer
                .write_record(
                    self.columns
                        .iter()
                        .map(|(_, values)| values.get(row).map(String::as_str).unwrap_or("")),
                )
                .expect("write row");
        }

        let mut data = writer.into_inner().expect("flush csv");
        if self.bom {
            let mut prefixed = "\u{feff}".as_bytes().to_vec();
            prefixed.append(&mut data);
            data = prefixed;
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_rectangular_table() {
        let csv = CsvBuilder::new()
            .with_column("id", &["1", "2", "3"])
            .with_match(&["1", "0"])
            .build();
        assert_eq!(String::from_utf8(csv).unwrap(), "id,match\n1,1\n2,0\n3,\n");
    }

    #[test]
    fn test_bom_prefix() {
        let csv = CsvBuilder::new().with_match(&["1"]).with_bom().build();
        assert!(csv.starts_with("\u{feff}match".as_bytes()));
    }
}
