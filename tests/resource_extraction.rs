// tests/resource_extraction.rs

use std::fs;
use std::io::Write;

use hadctl::errors::HadctlError;
use hadctl::resources::ResourceSource;

const BUNDLE: &str = "pseudo-distributed-mode";

const CORE_SITE: &[u8] = b"<configuration>\n  <!-- core -->\n</configuration>\n";
const HDFS_SITE: &[u8] = b"<configuration>\n  <!-- hdfs -->\n</configuration>\n";

fn file_names(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn directory_source_copies_direct_files_only() {
    let root = tempfile::tempdir().unwrap();
    let bundle_dir = root.path().join(BUNDLE);
    fs::create_dir_all(bundle_dir.join("subdir")).unwrap();
    fs::write(bundle_dir.join("core-site.xml"), CORE_SITE).unwrap();
    fs::write(bundle_dir.join("hdfs-site.xml"), HDFS_SITE).unwrap();
    fs::write(bundle_dir.join("subdir/nested.xml"), b"nested").unwrap();

    let target = tempfile::tempdir().unwrap();
    let source = ResourceSource::Directory(root.path().to_path_buf());
    source.extract_into(BUNDLE, target.path()).unwrap();

    assert_eq!(file_names(target.path()), vec!["core-site.xml", "hdfs-site.xml"]);
    assert_eq!(fs::read(target.path().join("core-site.xml")).unwrap(), CORE_SITE);
    assert_eq!(fs::read(target.path().join("hdfs-site.xml")).unwrap(), HDFS_SITE);
}

#[test]
fn archive_source_copies_direct_entries_only() {
    let root = tempfile::tempdir().unwrap();
    let archive_path = root.path().join("hadctl-resources.zip");

    let file = fs::File::create(&archive_path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    writer
        .start_file(format!("{BUNDLE}/core-site.xml"), options)
        .unwrap();
    writer.write_all(CORE_SITE).unwrap();
    writer
        .start_file(format!("{BUNDLE}/hdfs-site.xml"), options)
        .unwrap();
    writer.write_all(HDFS_SITE).unwrap();
    writer
        .add_directory(format!("{BUNDLE}/subdir"), options)
        .unwrap();
    writer
        .start_file(format!("{BUNDLE}/subdir/nested.xml"), options)
        .unwrap();
    writer.write_all(b"nested").unwrap();
    writer.start_file("other-bundle/skip.xml", options).unwrap();
    writer.write_all(b"skip").unwrap();
    writer.finish().unwrap();

    let target = tempfile::tempdir().unwrap();
    let source = ResourceSource::Archive(archive_path);
    source.extract_into(BUNDLE, target.path()).unwrap();

    assert_eq!(file_names(target.path()), vec!["core-site.xml", "hdfs-site.xml"]);
    assert_eq!(fs::read(target.path().join("core-site.xml")).unwrap(), CORE_SITE);
    assert_eq!(fs::read(target.path().join("hdfs-site.xml")).unwrap(), HDFS_SITE);
}

#[test]
fn non_archive_file_is_an_unsupported_location() {
    let root = tempfile::tempdir().unwrap();
    let not_a_zip = root.path().join("resources.zip");
    fs::write(&not_a_zip, b"definitely not a zip archive").unwrap();

    let target = tempfile::tempdir().unwrap();
    let err = ResourceSource::Archive(not_a_zip)
        .extract_into(BUNDLE, target.path())
        .unwrap_err();
    assert!(
        matches!(err, HadctlError::UnsupportedResource(_)),
        "got {err:?}"
    );
}

#[test]
fn missing_bundle_directory_is_an_error() {
    let root = tempfile::tempdir().unwrap();
    let target = tempfile::tempdir().unwrap();
    let err = ResourceSource::Directory(root.path().to_path_buf())
        .extract_into(BUNDLE, target.path())
        .unwrap_err();
    assert!(matches!(err, HadctlError::Io(_)), "got {err:?}");
}
