//! Coordinate (triplet) CSV reader
//!
//! One line per non-zero weight. Items and features are numbered in order of
//! first appearance, repeated `(item, feature)` pairs are summed.
//!
//! ```text
//! item,class,feature,weight
//! alice,Woman,Hair size,25
//! bob,Man,Shoes size,9
//! ```

use crate::reader::{parse_weight, IoError, IoResult, LabelledDataset};
use fmc_core::SparseMatrix;
use std::collections::HashMap;
use std::io::Read;

const COLUMNS: [&str; 4] = ["item", "class", "feature", "weight"];

pub fn read_coordinate<R: Read>(reader: R, delimiter: u8) -> IoResult<LabelledDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut positions = [0usize; 4];
    for (slot, name) in positions.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| IoError::ColumnNotFound(name.to_string()))?;
    }
    let [item_at, class_at, feature_at, weight_at] = positions;

    let mut items: HashMap<String, usize> = HashMap::new();
    let mut classes: Vec<String> = Vec::new();
    let mut feature_index: HashMap<String, usize> = HashMap::new();
    let mut features: Vec<String> = Vec::new();
    let mut triplets = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let field = |at: usize| record.get(at).unwrap_or_default();

        let item = field(item_at);
        let class = field(class_at);
        let row = match items.get(item) {
            Some(&row) => {
                if classes[row] != class {
                    return Err(IoError::InconsistentClass {
                        item: item.to_string(),
                        expected: classes[row].clone(),
                        found: class.to_string(),
                        line,
                    });
                }
                row
            }
            None => {
                items.insert(item.to_string(), classes.len());
                classes.push(class.to_string());
                classes.len() - 1
            }
        };

        let feature = field(feature_at);
        let column = match feature_index.get(feature) {
            Some(&column) => column,
            None => {
                feature_index.insert(feature.to_string(), features.len());
                features.push(feature.to_string());
                features.len() - 1
            }
        };

        let weight = parse_weight(field(weight_at), line)?;
        triplets.push((row, column, weight));
    }

    let matrix = SparseMatrix::from_triplets(classes.len(), features.len(), triplets)?;
    Ok(LabelledDataset {
        matrix,
        classes,
        features,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_triplets() {
        let data = "\
item,class,feature,weight
alice,Woman,Hair size,25
bob,Man,Shoes size,9
alice,Woman,Shoes size,5
bob,Man,Shoes size,1
";
        let dataset = read_coordinate(data.as_bytes(), b',').unwrap();
        assert_eq!(dataset.features, vec!["Hair size", "Shoes size"]);
        assert_eq!(dataset.classes, vec!["Woman", "Man"]);
        assert_eq!(dataset.matrix.get(0, 0), 25.0);
        assert_eq!(dataset.matrix.get(0, 1), 5.0);
        assert_eq!(dataset.matrix.get(1, 1), 10.0);
        assert_eq!(dataset.matrix.get(1, 0), 0.0);
    }

    #[test]
    fn test_columns_in_any_order() {
        let data = "weight;feature;item;class\n3;x;i1;a\n";
        let dataset = read_coordinate(data.as_bytes(), b';').unwrap();
        assert_eq!(dataset.features, vec!["x"]);
        assert_eq!(dataset.classes, vec!["a"]);
        assert_eq!(dataset.matrix.get(0, 0), 3.0);
    }

    #[test]
    fn test_inconsistent_class() {
        let data = "item,class,feature,weight\ni1,a,x,1\ni1,b,y,1\n";
        let err = read_coordinate(data.as_bytes(), b',').unwrap_err();
        match err {
            IoError::InconsistentClass {
                item,
                expected,
                found,
                line,
            } => {
                assert_eq!(item, "i1");
                assert_eq!(expected, "a");
                assert_eq!(found, "b");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_column() {
        let data = "item,class,feature\ni1,a,x\n";
        assert!(matches!(
            read_coordinate(data.as_bytes(), b','),
            Err(IoError::ColumnNotFound(name)) if name == "weight"
        ));
    }

    #[test]
    fn test_negative_weight() {
        let data = "item,class,feature,weight\ni1,a,x,-2\n";
        assert!(matches!(
            read_coordinate(data.as_bytes(), b','),
            Err(IoError::InvalidWeight { line: 2, .. })
        ));
    }
}
