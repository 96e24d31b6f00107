//! fmc-io - Dataset readers for the Features Maximization Metric
//!
//! Two on-disk layouts are supported:
//!
//! - **Dense**: one row per data vector, one column per feature, plus a
//!   label column (default `class`)
//! - **Coordinate**: one `item,class,feature,weight` line per non-zero weight
//!
//! Both produce a [`LabelledDataset`], the construction inputs of
//! [`fmc_core::FeaturesMaximizationMetric`].

pub mod coordinate_reader;
pub mod csv_reader;
pub mod reader;

pub use coordinate_reader::read_coordinate;
pub use csv_reader::read_dense;
pub use reader::*;
