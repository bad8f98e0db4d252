use std::path::Path;

use log::debug;
use regsel_core::Matrix;
use regsel_data::TabularDataset;

use crate::error::{IoError, IoResult};
use crate::fs::write_atomic;

/// Read a CSV file with a header row into a dataset.
///
/// Every cell must parse as a number; the last column is the target.
pub fn read_dataset(path: &Path) -> IoResult<TabularDataset> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let csv_err = |source| IoError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_err)?;
    let headers: Vec<String> = rdr.headers().map_err(csv_err)?.iter().map(str::to_string).collect();

    let mut data = Vec::new();
    let mut n_rows = 0usize;

    for result in rdr.records() {
        let record = result.map_err(csv_err)?;
        for (j, field) in record.iter().enumerate() {
            // NaN and inf parse as f64 but cannot be fitted or saved
            let val = field
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| IoError::Parse {
                    path: path.to_path_buf(),
                    row: n_rows + 1,
                    column: headers.get(j).cloned().unwrap_or_default(),
                    value: field.to_string(),
                })?;
            data.push(val);
        }
        n_rows += 1;
    }

    let data_err = |source| IoError::Data {
        path: path.to_path_buf(),
        source,
    };
    let values = Matrix::new(data, n_rows, headers.len()).map_err(|e| data_err(e.into()))?;
    let dataset = TabularDataset::new(headers, values).map_err(data_err)?;
    debug!(
        "loaded {} rows x {} columns from {}",
        dataset.n_rows(),
        dataset.columns().len(),
        path.display()
    );
    Ok(dataset)
}

/// Write a dataset as CSV: header row, no index column.
pub fn write_dataset(path: &Path, dataset: &TabularDataset) -> IoResult<()> {
    write_atomic(path, |file| {
        let csv_err = |source| IoError::Csv {
            path: path.to_path_buf(),
            source,
        };
        let mut wtr = csv::Writer::from_writer(file);
        wtr.write_record(dataset.columns()).map_err(csv_err)?;

        let values = dataset.values();
        for i in 0..values.nrows() {
            let row = values.row(i).map_err(|e| IoError::Data {
                path: path.to_path_buf(),
                source: e.into(),
            })?;
            wtr.write_record(row.iter().map(|v| v.to_string())).map_err(csv_err)?;
        }

        wtr.flush().map_err(|e| IoError::io(path, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "x1, x2,y\n1,2,3.5\n4,5e-1,-6\n").unwrap();

        let ds = read_dataset(&path).unwrap();
        assert_eq!(ds.columns(), &["x1", "x2", "y"]);
        assert_eq!(ds.n_rows(), 2);
        assert_eq!(ds.target().unwrap(), vec![3.5, -6.0]);

        let out = dir.path().join("copy.csv");
        write_dataset(&out, &ds).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "x1,x2,y\n1,2,3.5\n4,0.5,-6\n");
        assert_eq!(read_dataset(&out).unwrap(), ds);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_dataset(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, IoError::NotFound(_)));
    }

    #[test]
    fn test_non_numeric_cell() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "a,y\n1,2\nred,3\n").unwrap();

        match read_dataset(&path).unwrap_err() {
            IoError::Parse { row, column, value, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "a");
                assert_eq!(value, "red");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_cells_rejected() {
        let dir = tempfile::tempdir().unwrap();
        for (i, bad) in ["NaN", "inf", "-inf"].iter().enumerate() {
            let path = dir.path().join(format!("bad{i}.csv"));
            fs::write(&path, format!("a,y\n1,2\n3,4\n5,{bad}\n")).unwrap();

            match read_dataset(&path).unwrap_err() {
                IoError::Parse { row, column, value, .. } => {
                    assert_eq!(row, 3);
                    assert_eq!(column, "y");
                    assert_eq!(value, *bad);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_ragged_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        fs::write(&path, "a,b,y\n1,2,3\n4,5\n").unwrap();
        assert!(matches!(read_dataset(&path).unwrap_err(), IoError::Csv { .. }));
    }

    #[test]
    fn test_single_column_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.csv");
        fs::write(&path, "y\n1\n2\n").unwrap();
        assert!(matches!(read_dataset(&path).unwrap_err(), IoError::Data { .. }));
    }
}
