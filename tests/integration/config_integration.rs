//! Configuration loading through the run context

use crate::integration::test_utils::{with_xdg_env, write_files};
use fileguard::cli::{Commands, RunContext};
use fileguard::config::{ConfigLoader, LOCAL_CONFIG_FILE};
use fileguard::tree::hasher::HashAlgorithm;
use fileguard::tree::policy::FailurePolicy;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults_without_any_file() {
    let test_dir = TempDir::new().unwrap();
    let work = test_dir.path().join("work");
    fs::create_dir_all(&work).unwrap();

    let config = with_xdg_env(&test_dir, || ConfigLoader::load(&work)).unwrap();
    assert_eq!(config.scan.algorithm, HashAlgorithm::Sha256);
    assert_eq!(config.scan.baseline_policy, FailurePolicy::Tolerant);
    assert_eq!(config.scan.compare_policy, FailurePolicy::Strict);
    assert_eq!(config.logging.output, "stderr");
}

#[cfg(target_os = "linux")]
#[test]
fn test_global_file_is_read_from_xdg_config_home() {
    let test_dir = TempDir::new().unwrap();
    let work = test_dir.path().join("work");
    fs::create_dir_all(&work).unwrap();
    write_files(
        test_dir.path(),
        &[(
            "fileguard/config.toml",
            "[scan]\nignore = [\".git\", \"target\"]\nfollow_symlinks = true\n",
        )],
    );

    let config = with_xdg_env(&test_dir, || ConfigLoader::load(&work)).unwrap();
    assert_eq!(config.scan.ignore, vec![".git".to_string(), "target".to_string()]);
    assert!(config.scan.follow_symlinks);
}

#[test]
fn test_config_file_drives_baseline_algorithm() {
    let test_dir = TempDir::new().unwrap();
    let root = test_dir.path().join("root");
    let out = test_dir.path().join("out");
    write_files(&root, &[("a.txt", "hello")]);

    let config_file = test_dir.path().join(LOCAL_CONFIG_FILE);
    fs::write(
        &config_file,
        format!(
            "[scan]\nalgorithm = \"blake3\"\n\n[output]\ndir = \"{}\"\n",
            out.display()
        ),
    )
    .unwrap();

    let ctx = with_xdg_env(&test_dir, || RunContext::new(Some(config_file.clone()), None))
        .unwrap();
    assert_eq!(ctx.config().scan.algorithm, HashAlgorithm::Blake3);

    ctx.execute(&Commands::Baseline {
        root: root.clone(),
        name: "cfg".to_string(),
        algorithm: None,
        policy: None,
    })
    .unwrap();

    let written: Vec<_> = fs::read_dir(&out).unwrap().map(|e| e.unwrap().path()).collect();
    assert_eq!(written.len(), 1);
    let text = fs::read_to_string(&written[0]).unwrap();
    assert!(text.contains("\"algorithm\": \"blake3\""));
}

#[test]
fn test_output_dir_override_beats_config() {
    let test_dir = TempDir::new().unwrap();
    let override_dir = test_dir.path().join("override");
    let config_file = test_dir.path().join("custom.toml");
    fs::write(&config_file, "[output]\ndir = \"/nonexistent/should-not-be-used\"\n").unwrap();

    let ctx = with_xdg_env(&test_dir, || {
        RunContext::new(Some(config_file.clone()), Some(override_dir.clone()))
    })
    .unwrap();
    assert_eq!(ctx.config().output.dir, override_dir);
    assert_eq!(ctx.api().output_dir(), override_dir.as_path());
}

#[test]
fn test_missing_explicit_config_fails() {
    let test_dir = TempDir::new().unwrap();
    let missing = test_dir.path().join("nope.toml");
    let result = with_xdg_env(&test_dir, || RunContext::new(Some(missing.clone()), None));
    assert!(result.is_err());
}
