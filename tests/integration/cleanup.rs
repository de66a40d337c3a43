//! Failure and cleanup integration tests.
//!
//! These tests verify that a failed copy_tree leaves no destination behind,
//! and that remove_all is idempotent.

#[path = "../common/mod.rs"]
mod common;

use common::TestFixture;
use pkgcopy::{CopyOptions, Error, copy_tree, remove_all};
use std::fs;

#[test]
fn test_mkdir_failure_removes_destination() {
    let fx = TestFixture::new();
    fx.write("a.go", "package a");
    fx.write("b/b.go", "package b");
    fx.write("c.go", "package c");

    // A regular file where b/ has to go
    fs::create_dir_all(fx.out()).unwrap();
    fs::write(fx.out().join("b"), "blocker").unwrap();

    let result = copy_tree(fx.src.path(), &fx.out(), &CopyOptions::default());

    match result {
        Err(Error::CreateDir { path, .. }) => assert_eq!(path, fx.out().join("b")),
        other => panic!("Expected CreateDir error, got: {:?}", other),
    }
    assert!(!fx.out().exists(), "Partial copy should be removed");
}

#[cfg(unix)]
#[test]
fn test_link_failure_removes_destination() {
    use std::os::unix::fs::symlink;

    let fx = TestFixture::new();
    fx.write("a.go", "package a");
    symlink("a.go", fx.src.path().join("z.go")).unwrap();

    fs::create_dir_all(fx.out()).unwrap();
    fs::write(fx.out().join("z.go"), "occupied").unwrap();

    let result = copy_tree(fx.src.path(), &fx.out(), &CopyOptions::default());

    assert!(matches!(result, Err(Error::Symlink { .. })));
    assert!(!fx.out().exists());
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_removes_destination() {
    use std::os::unix::fs::PermissionsExt;

    let fx = TestFixture::new();
    fx.write("a.go", "package a");
    fx.write("z.go", "package z");
    let locked = fx.src.path().join("z.go");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not stop a privileged user
    if fs::File::open(&locked).is_ok() {
        return;
    }

    let result = copy_tree(fx.src.path(), &fx.out(), &CopyOptions::default());

    match result {
        Err(Error::Open { path, .. }) => assert_eq!(path, locked),
        other => panic!("Expected Open error, got: {:?}", other),
    }
    assert!(!fx.out().exists());
}

#[test]
fn test_missing_source_is_walk_error() {
    let fx = TestFixture::new();

    let result = copy_tree(
        &fx.src.path().join("missing"),
        &fx.out(),
        &CopyOptions::default(),
    );

    let err = result.unwrap_err();
    assert!(matches!(err, Error::Walk(_)));
    assert_eq!(
        err.io_error().map(std::io::Error::kind),
        Some(std::io::ErrorKind::NotFound)
    );
    assert!(!fx.out().exists());
}

#[test]
fn test_remove_all_after_delete() {
    let fx = TestFixture::new();
    fx.write("a.go", "package a");
    copy_tree(fx.src.path(), &fx.out(), &CopyOptions::default()).unwrap();

    remove_all(&fx.out()).unwrap();
    assert!(!fx.out().exists());
    remove_all(&fx.out()).unwrap();
}

#[test]
fn test_remove_all_never_existed() {
    let fx = TestFixture::new();
    remove_all(&fx.dst.path().join("nothing/here")).unwrap();
}
