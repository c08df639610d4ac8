use std::fs;
use std::path::{Path, PathBuf};

use aurora_archive::{error::Error, Archive, BzfArchive};
use aurora_types::{registry, ResourceCategory};
use pretty_assertions::assert_eq;
use tracing::info;
use tracing_test::traced_test;
use walkdir::WalkDir;

fn resources_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("resources")
}

fn validate_bzf(path: &Path) -> Result<(), Error> {
    info!("testing {}", path.display());

    let parent_dir = path.with_extension("");
    info!("comparing to files in {}", parent_dir.display());

    let expected_files = WalkDir::new(&parent_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| !e.file_type().is_dir())
        .count();

    let mut bzf = BzfArchive::open(path)?;
    assert_eq!(bzf.len(), expected_files);

    for i in 0..bzf.len() {
        let resource = bzf.resources()[i];
        assert_eq!(resource.index as usize, i);

        let name = registry().add_file_type(&format!("{i:05}"), resource.file_type);
        let p = parent_dir.join(&name);
        info!("comparing to {}", p.display());

        let expected = fs::read(&p).map_err(Error::Read)?;
        let actual = bzf.resource(i)?;

        assert_eq!(bzf.resource_size(i) as usize, expected.len());
        assert_eq!(expected.len(), actual.len());
        assert_eq!(expected, actual);
    }

    Ok(())
}

#[traced_test]
#[test]
fn validate_bzf_parsing() -> Result<(), Error> {
    let to_test = fs::read_dir(resources_dir())
        .map_err(Error::Read)?
        .filter_map(|res| res.ok())
        .map(|dir_entry| dir_entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == "bzf"))
        .collect::<Vec<_>>();

    assert!(!to_test.is_empty());
    for path in to_test {
        validate_bzf(&path)?;
    }

    Ok(())
}

#[test]
fn classify_sample_resources() -> Result<(), Error> {
    let bzf = BzfArchive::open(resources_dir().join("sample.bzf"))?;

    let categories = bzf
        .resources()
        .iter()
        .map(|r| registry().resource_category(r.file_type))
        .collect::<Vec<_>>();

    assert_eq!(
        categories,
        vec![
            ResourceCategory::Sound,
            ResourceCategory::None,
            ResourceCategory::None,
            ResourceCategory::None,
            ResourceCategory::Image,
        ]
    );

    Ok(())
}

#[test]
fn open_missing_file() {
    let path = resources_dir().join("missing.bzf");

    let error = BzfArchive::open(&path).unwrap_err();
    let Error::Open { path: failed, .. } = error.innermost() else {
        panic!("expected an open error, got {error:?}");
    };
    assert_eq!(failed, &path);
}

#[test]
fn open_non_bzf_file() {
    let path = resources_dir().join("sample").join("00000.wav");

    let error = BzfArchive::open(path).unwrap_err();
    assert_eq!(error.to_string(), "failed reading container");
    assert!(matches!(error.innermost(), Error::FormatMismatch { .. }));
}
