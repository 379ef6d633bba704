//! CSV rows for projections and scenario lists
//!
//! Projection export: header `Period,Day,Amount`, one row per point. Amounts
//! use the shortest form (`1000`, `1215.51`), not a fixed two decimals.
//! Scenario import: header `label,principal,rate,days[,color]`.

use crate::error::Result;
use crate::projection::Projection;
use crate::scenario::Scenario;
use csv::{ReaderBuilder, WriterBuilder};
use std::io::{Read, Write};
use std::path::Path;

#[derive(serde::Serialize)]
struct PointRow {
    #[serde(rename = "Period")]
    period: u32,
    #[serde(rename = "Day")]
    day: u32,
    #[serde(rename = "Amount")]
    amount: String,
}

/// Raw CSV row for one scenario
#[derive(Debug, serde::Deserialize)]
struct ScenarioRow {
    label: String,
    principal: f64,
    rate: f64,
    days: u32,
    #[serde(default)]
    color: Option<String>,
}

impl ScenarioRow {
    fn into_scenario(self) -> Scenario {
        Scenario {
            label: self.label,
            principal: self.principal,
            annual_rate_percent: self.rate,
            total_days: self.days,
            color: self.color.filter(|c| !c.is_empty()),
        }
    }
}

/// Write every projection point as a CSV row
pub fn write_csv<W: Write>(writer: W, projection: &Projection) -> Result<()> {
    let mut wrt = WriterBuilder::new().from_writer(writer);

    for point in projection {
        wrt.serialize(PointRow {
            period: point.period_index,
            day: point.day_offset,
            amount: point.amount.to_string(),
        })?;
    }
    wrt.flush()?;
    Ok(())
}

/// Write a projection to a CSV file
pub fn write_csv_file<P: AsRef<Path>>(path: P, projection: &Projection) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(file, projection)
}

/// Load scenarios from any reader
pub fn load_scenarios<R: Read>(reader: R) -> Result<Vec<Scenario>> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut scenarios = Vec::new();

    for result in rdr.deserialize() {
        let row: ScenarioRow = result?;
        scenarios.push(row.into_scenario());
    }

    Ok(scenarios)
}

/// Load scenarios from a CSV file
pub fn load_scenarios_file<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let file = std::fs::File::open(path)?;
    load_scenarios(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;
    use crate::params::Parameters;
    use crate::projection::project;

    #[test]
    fn test_write_csv_rows() {
        let projection = project(&Parameters::new(1000.0, 10.0, 14, 7).unwrap()).unwrap();
        let mut out = Vec::new();
        write_csv(&mut out, &projection).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["Period,Day,Amount", "0,0,1000", "1,7,1100", "2,14,1210"]);
    }

    #[test]
    fn test_write_csv_amounts_shortest_form() {
        let projection = project(&Parameters::new(1000.0, 5.0, 30, 1).unwrap()).unwrap();
        let mut out = Vec::new();
        write_csv(&mut out, &projection).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().any(|l| l == "4,4,1215.51"));
        assert!(text.lines().any(|l| l == "1,1,1050"));
    }

    #[test]
    fn test_write_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projection.csv");
        let projection = project(&Parameters::default()).unwrap();

        write_csv_file(&path, &projection).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), projection.len() + 1);
    }

    #[test]
    fn test_load_scenarios() {
        let input = "label,principal,rate,days,color\n\
                     Conservative, 1000, 3, 365, #82ca9d\n\
                     Aggressive,1000,8,365\n";
        let scenarios = load_scenarios(input.as_bytes()).unwrap();

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].label, "Conservative");
        assert_eq!(scenarios[0].color.as_deref(), Some("#82ca9d"));
        assert_eq!(scenarios[1].annual_rate_percent, 8.0);
        assert!(scenarios[1].color.is_none());
    }

    #[test]
    fn test_load_scenarios_bad_number() {
        let input = "label,principal,rate,days\nBroken,abc,3,365\n";
        assert!(matches!(load_scenarios(input.as_bytes()), Err(ProjectionError::Csv(_))));
    }
}
