// Copyright (c) 2024 Bastiaan Marinus van de Weerd

use std::{fs, io, path::{Path, PathBuf}};


pub(crate) const YEAR: u16 = 2024;


#[derive(Debug)]
#[allow(dead_code)]
pub(crate) struct InputError { path: PathBuf, source: io::Error }

/// Conventional location of a day’s input: `resources/<year>/<day>/input.txt`.
pub(crate) fn path(day: u8) -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR"))
		.join("resources")
		.join(YEAR.to_string())
		.join(day.to_string())
		.join("input.txt")
}

pub(crate) fn load_from(path: &Path) -> Result<String, InputError> {
	fs::read_to_string(path)
		.map_err(|e| InputError { path: path.to_owned(), source: e })
}

pub(crate) fn load(day: u8) -> Result<String, InputError> {
	load_from(&path(day))
}


#[test]
fn tests() {
	assert!(path(9).ends_with("resources/2024/9/input.txt"));
	let err = load_from(Path::new("does/not/exist.txt")).unwrap_err();
	assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
	assert_eq!(err.path, Path::new("does/not/exist.txt"));
	let manifest = load_from(&Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml")).unwrap();
	assert!(manifest.contains("[package]"));
}
