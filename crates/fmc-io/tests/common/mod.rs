//! Shared fixtures for reader tests

use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

pub const PEOPLE_CSV: &str = "\
Shoes size,Hair size,Nose size,class
9,5,5,Man
9,10,5,Man
9,20,6,Man
5,15,5,Woman
6,25,6,Woman
5,25,5,Woman
";

pub const PEOPLE_COORDINATE: &str = "\
item,class,feature,weight
p1,Man,Shoes size,9
p1,Man,Hair size,5
p1,Man,Nose size,5
p2,Man,Shoes size,9
p2,Man,Hair size,10
p2,Man,Nose size,5
p3,Man,Shoes size,9
p3,Man,Hair size,20
p3,Man,Nose size,6
p4,Woman,Shoes size,5
p4,Woman,Hair size,15
p4,Woman,Nose size,5
p5,Woman,Shoes size,6
p5,Woman,Hair size,25
p5,Woman,Nose size,6
p6,Woman,Shoes size,5
p6,Woman,Hair size,25
p6,Woman,Nose size,5
";

/// Write `contents` to `name` inside a fresh temporary directory
pub fn write_temp(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create file");
    file.write_all(contents.as_bytes()).expect("write file");
    (dir, path)
}
