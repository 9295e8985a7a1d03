// tests/default_conf.rs

//! Configuration synthesis when no conf directory is supplied: the bundled
//! pseudo-distributed template is extracted into a directory under the OS
//! temp dir and used as the conf dir.
//!
//! Environment mutation is process-global; keep this the only test in this
//! binary.

use std::fs;

use hadctl::config::Settings;
use hadctl_test_utils::init_tracing;

#[test]
fn absent_conf_dir_is_synthesized_from_bundled_resources() {
    init_tracing();

    let resources = tempfile::tempdir().unwrap();
    let bundle = resources.path().join("pseudo-distributed-mode");
    fs::create_dir_all(&bundle).unwrap();

    // A value unique to this run, so a leftover synthesized dir from an
    // earlier run cannot satisfy the assertions below.
    let token = resources.path().display().to_string();
    fs::write(
        bundle.join("hdfs-site.xml"),
        format!(
            r#"
            <configuration>
                <property>
                    <name>test.extraction.token</name>
                    <value>{token}</value>
                </property>
            </configuration>
            "#
        ),
    )
    .unwrap();

    unsafe { std::env::set_var("HADCTL_RESOURCES", resources.path()) };

    let home = tempfile::tempdir().unwrap();
    let settings = Settings::new(home.path().to_path_buf(), None).unwrap();

    assert!(settings.conf_dir().join("hdfs-site.xml").is_file());
    assert_eq!(
        settings.conf("test.extraction.token").unwrap().unwrap(),
        token
    );
}
