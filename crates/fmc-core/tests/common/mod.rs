//! Shared datasets for integration tests

#![allow(dead_code)]

use fmc_core::{FeaturesMaximizationMetric, SparseMatrix};

pub const CHARACTERISTICS: [&str; 3] = ["Shoes size", "Hair size", "Nose size"];

/// "What are the physical characteristics that most distinguish men from women?"
pub fn people_characteristics() -> SparseMatrix {
    SparseMatrix::from_dense(&[
        [9.0, 5.0, 5.0],
        [9.0, 10.0, 5.0],
        [9.0, 20.0, 6.0],
        [5.0, 15.0, 5.0],
        [6.0, 25.0, 6.0],
        [5.0, 25.0, 5.0],
    ])
    .expect("valid weights")
}

pub fn people_genders() -> Vec<&'static str> {
    vec!["Man", "Man", "Man", "Woman", "Woman", "Woman"]
}

pub fn people_fmc() -> FeaturesMaximizationMetric {
    FeaturesMaximizationMetric::new(&people_characteristics(), &people_genders(), &CHARACTERISTICS)
        .expect("valid dataset")
}

/// Fifteen people: five men, five women, five children
pub fn family_characteristics() -> SparseMatrix {
    SparseMatrix::from_dense(&[
        [9.0, 5.0, 5.0],
        [9.0, 10.0, 5.0],
        [9.0, 10.0, 6.0],
        [9.0, 15.0, 6.0],
        [9.0, 20.0, 6.0],
        [5.0, 15.0, 5.0],
        [6.0, 20.0, 6.0],
        [5.0, 25.0, 5.0],
        [6.0, 25.0, 5.0],
        [5.0, 25.0, 5.0],
        [3.0, 5.0, 15.0],
        [4.0, 10.0, 15.0],
        [2.0, 5.0, 15.0],
        [3.0, 10.0, 14.0],
        [3.0, 15.0, 14.0],
    ])
    .expect("valid weights")
}

pub fn family_roles() -> Vec<&'static str> {
    let mut roles = vec!["Man"; 5];
    roles.extend(vec!["Woman"; 5]);
    roles.extend(vec!["Child"; 5]);
    roles
}

/// Adults ("0") versus children ("1")
pub fn family_ages() -> Vec<&'static str> {
    let mut ages = vec!["0"; 10];
    ages.extend(vec!["1"; 5]);
    ages
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} (+/- {}), got {}",
        expected,
        tolerance,
        actual
    );
}
