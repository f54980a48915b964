use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result};

/// Joint angles over time for both joints. Every field has the same length, fixed at load time.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeries {
    time: Vec<f64>,
    angle1_deg: Vec<f64>,
    angle2_deg: Vec<f64>,
}

impl TimeSeries {
    /// Each file has two columns and no header: time in seconds, then a joint angle in degrees.
    /// Times come from the first file.
    pub fn load<P1: AsRef<Path>, P2: AsRef<Path>>(theta1_path: P1, theta2_path: P2) -> Result<Self> {
        let theta1_path = theta1_path.as_ref();
        let theta2_path = theta2_path.as_ref();
        let first = read_rows(open(theta1_path)?, &theta1_path.display().to_string())?;
        let second = read_rows(open(theta2_path)?, &theta2_path.display().to_string())?;
        info!(
            "Loaded {} rows from {} and {}",
            first.len(),
            theta1_path.display(),
            theta2_path.display()
        );
        Self::from_rows(first, second)
    }

    pub fn from_readers<R1: Read, R2: Read>(theta1: R1, theta2: R2) -> Result<Self> {
        let first = read_rows(theta1, "first angle series")?;
        let second = read_rows(theta2, "second angle series")?;
        Self::from_rows(first, second)
    }

    fn from_rows(first: Vec<Record>, second: Vec<Record>) -> Result<Self> {
        if first.len() != second.len() {
            return Err(Error::FormatMismatch {
                first: first.len(),
                second: second.len(),
            });
        }
        if first.is_empty() {
            return Err(Error::EmptySeries);
        }

        // Only the first file's times are used, but they should agree
        if let Some(idx) = first.iter().zip(&second).position(|(a, b)| a.0 != b.0) {
            warn!(
                "Angle series disagree on time at row {}: {} vs {}. Using {}",
                idx, first[idx].0, second[idx].0, first[idx].0
            );
        }
        for pair in first.windows(2) {
            if pair[0].0 > pair[1].0 {
                warn!("Time goes backwards: {} then {}", pair[0].0, pair[1].0);
                break;
            }
        }

        let mut series = Self {
            time: Vec::with_capacity(first.len()),
            angle1_deg: Vec::with_capacity(first.len()),
            angle2_deg: Vec::with_capacity(first.len()),
        };
        for (Record(time, angle1), Record(_, angle2)) in first.into_iter().zip(second) {
            series.time.push(time);
            series.angle1_deg.push(angle1);
            series.angle2_deg.push(angle2);
        }
        Ok(series)
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn angle1_deg(&self) -> &[f64] {
        &self.angle1_deg
    }

    pub fn angle2_deg(&self) -> &[f64] {
        &self.angle2_deg
    }

    /// The time and both joint angles (in degrees) at one row
    pub fn get(&self, idx: usize) -> Option<(f64, (f64, f64))> {
        Some((
            *self.time.get(idx)?,
            (self.angle1_deg[idx], self.angle2_deg[idx]),
        ))
    }
}

fn open(path: &Path) -> Result<fs_err::File> {
    fs_err::File::open(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io {
                path: path.display().to_string(),
                source: err,
            }
        }
    })
}

fn read_rows<R: Read>(reader: R, source_name: &str) -> Result<Vec<Record>> {
    let mut rows = Vec::new();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);
    for rec in reader.records() {
        let rec = rec.map_err(|err| {
            let line = err.position().map(|pos| pos.line()).unwrap_or(0);
            match err.into_kind() {
                csv::ErrorKind::Io(source) => Error::Io {
                    path: source_name.to_string(),
                    source,
                },
                kind => Error::Parse {
                    source_name: source_name.to_string(),
                    line,
                    reason: format!("{:?}", kind),
                },
            }
        })?;
        let line = rec.position().map(|pos| pos.line()).unwrap_or(0);
        let fields = strip_comment(&rec);
        if fields.iter().all(|field| field.is_empty()) {
            continue;
        }
        if fields.len() != 2 {
            return Err(Error::Parse {
                source_name: source_name.to_string(),
                line,
                reason: format!("expected 2 fields, found {}", fields.len()),
            });
        }
        let row: Record = csv::StringRecord::from(fields)
            .deserialize(None)
            .map_err(|err| Error::Parse {
                source_name: source_name.to_string(),
                line,
                reason: err.to_string(),
            })?;
        rows.push(row);
    }
    Ok(rows)
}

// A `#` anywhere starts a comment running to the end of the line
fn strip_comment(rec: &csv::StringRecord) -> Vec<&str> {
    let mut fields = Vec::new();
    for field in rec.iter() {
        if let Some(idx) = field.find('#') {
            fields.push(field[..idx].trim());
            break;
        }
        fields.push(field);
    }
    fields
}

// Time in seconds, then angle in degrees
#[derive(Deserialize)]
struct Record(f64, f64);
