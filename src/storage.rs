use crate::models::{ChartInput, DrawOptions};
use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One CSV row: `category,value[,error][,error2][,tick]`.
#[derive(Debug, Deserialize)]
struct CsvRow {
    category: String,
    value: f64,
    #[serde(default)]
    error: Option<f64>,
    #[serde(default)]
    error2: Option<f64>,
    #[serde(default)]
    tick: Option<String>,
}

/// Load a chart request from JSON (`ChartInput` layout).
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<ChartInput> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let input: ChartInput = serde_json::from_reader(f)
        .with_context(|| format!("parsing chart JSON {}", path.display()))?;
    Ok(input)
}

/// Load a chart request from CSV with a header row.
///
/// `category` and `value` are required. An optional column becomes part of the request
/// only when every row fills it; empty tick cells count as missing.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<ChartInput> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut rows: Vec<CsvRow> = Vec::new();
    for (i, rec) in rdr.deserialize().enumerate() {
        let row: CsvRow = rec.with_context(|| format!("row {} of {}", i + 1, path.display()))?;
        rows.push(row);
    }

    let all = |f: &dyn Fn(&CsvRow) -> bool| !rows.is_empty() && rows.iter().all(f);
    let error_primary = all(&|r| r.error.is_some())
        .then(|| rows.iter().map(|r| r.error.unwrap_or(0.0)).collect());
    let error_secondary = all(&|r| r.error2.is_some())
        .then(|| rows.iter().map(|r| r.error2.unwrap_or(0.0)).collect());
    let tick_labels = all(&|r| r.tick.as_deref().is_some_and(|t| !t.is_empty()))
        .then(|| rows.iter().map(|r| r.tick.clone().unwrap_or_default()).collect());

    Ok(ChartInput {
        categories: rows.iter().map(|r| r.category.clone()).collect(),
        values: rows.iter().map(|r| r.value).collect(),
        options: DrawOptions {
            error_primary,
            error_secondary,
            axis_label: None,
            tick_labels,
        },
    })
}

/// Load by extension: `.json` or `.csv`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<ChartInput> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("unsupported input format: {:?} (expected .json or .csv)", other),
    }
}

/// Save a chart request as pretty JSON.
pub fn save_json<P: AsRef<Path>>(input: &ChartInput, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(input)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn csv_optional_columns() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("x.csv");
        std::fs::write(&p, "category,value,error,tick\na,0.5,0.1,A\nb,0.7,0.2,B\n").unwrap();
        let input = load_csv(&p).unwrap();
        assert_eq!(input.categories, vec!["a", "b"]);
        assert_eq!(input.values, vec![0.5, 0.7]);
        assert_eq!(input.options.error_primary, Some(vec![0.1, 0.2]));
        assert_eq!(input.options.tick_labels, Some(vec!["A".into(), "B".into()]));
        assert!(input.options.error_secondary.is_none());
    }

    #[test]
    fn csv_partial_column_is_dropped() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("x.csv");
        std::fs::write(&p, "category,value,error\na,0.5,0.1\nb,0.7,\n").unwrap();
        let input = load_csv(&p).unwrap();
        assert!(input.options.error_primary.is_none());
    }

    #[test]
    fn json_roundtrip_through_files() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("x.json");
        let input = ChartInput {
            categories: vec!["a".into()],
            values: vec![0.25],
            options: DrawOptions::new().axis_label("Distance (m)"),
        };
        save_json(&input, &p).unwrap();
        assert_eq!(load(&p).unwrap(), input);
    }

    #[test]
    fn unknown_extension_is_error() {
        assert!(load("chart.txt").is_err());
    }
}
