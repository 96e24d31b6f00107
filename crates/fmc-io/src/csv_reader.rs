//! Dense labelled CSV reader
//!
//! ```text
//! Shoes size,Hair size,Nose size,class
//! 9,5,5,Man
//! 5,15,5,Woman
//! ```

use crate::reader::{parse_weight, IoError, IoResult, LabelledDataset};
use fmc_core::SparseMatrix;
use std::io::Read;

/// Read a dense dataset; `class_column` names the label column and every
/// other column is a feature
pub fn read_dense<R: Read>(
    reader: R,
    class_column: &str,
    delimiter: u8,
) -> IoResult<LabelledDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let class_index = headers
        .iter()
        .position(|h| h == class_column)
        .ok_or_else(|| IoError::ColumnNotFound(class_column.to_string()))?;

    let features: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != class_index)
        .map(|(_, h)| h.to_string())
        .collect();

    let mut classes = Vec::new();
    let mut triplets = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row = classes.len();

        let mut column = 0;
        for (i, cell) in record.iter().enumerate() {
            if i == class_index {
                classes.push(cell.trim().to_string());
                continue;
            }
            let weight = parse_weight(cell, line)?;
            if weight != 0.0 {
                triplets.push((row, column, weight));
            }
            column += 1;
        }
    }

    let matrix = SparseMatrix::from_triplets(classes.len(), features.len(), triplets)?;
    Ok(LabelledDataset {
        matrix,
        classes,
        features,
    })
}
