//! Filtering integration tests for copy_tree.
//!
//! These tests verify which entries of a Go package tree reach the
//! destination:
//! - Go toolchain file types only
//! - Hidden and underscore entries pruned, `_testdata` excepted
//! - Test files and test data directories controlled by the tests flag

#[path = "../common/mod.rs"]
mod common;

use common::{TestFixture, filtered_files, paths, relative_files};
use pkgcopy::{CopyBuilder, CopyOptions, copy_tree};
use rstest::rstest;
use std::fs;

fn options(include_tests: bool) -> CopyOptions {
    if include_tests {
        CopyOptions::default().with_tests()
    } else {
        CopyOptions::default()
    }
}

#[test]
fn test_package_without_tests() {
    let fx = TestFixture::new();
    fx.create_go_package();

    copy_tree(fx.src.path(), &fx.out(), &options(false)).unwrap();

    assert_eq!(
        relative_files(&fx.out()),
        paths(&[
            "lib.go",
            "cgo/bridge.c",
            "cgo/bridge.h",
            "cgo/asm_amd64.s",
            "cgo/asm_arm.S",
            "cgo/rsrc.syso",
            "cgo/wrap.swigcxx",
            "cpp/impl.cpp",
            "cpp/impl.hpp",
            "objc/view.m",
            "internal/helper.go",
            "nested/pkg/p.go",
        ])
    );
}

#[test]
fn test_package_with_tests() {
    let fx = TestFixture::new();
    fx.create_go_package();

    let stats = copy_tree(fx.src.path(), &fx.out(), &options(true)).unwrap();

    assert_eq!(
        relative_files(&fx.out()),
        paths(&[
            "lib.go",
            "lib_test.go",
            "export_test.go",
            "cgo/bridge.c",
            "cgo/bridge.h",
            "cgo/asm_amd64.s",
            "cgo/asm_arm.S",
            "cgo/rsrc.syso",
            "cgo/wrap.swigcxx",
            "cpp/impl.cpp",
            "cpp/impl.hpp",
            "objc/view.m",
            "internal/helper.go",
            "internal/helper_test.go",
            "testdata/golden.go",
            "_testdata/fixture.go",
            "nested/pkg/p.go",
            "nested/testdata/deep.go",
        ])
    );
    assert_eq!(stats.files_copied, 18);
}

#[rstest]
#[case::without_tests(false)]
#[case::with_tests(true)]
fn test_destination_matches_filter(#[case] include_tests: bool) {
    let fx = TestFixture::new();
    fx.create_go_package();

    copy_tree(fx.src.path(), &fx.out(), &options(include_tests)).unwrap();

    assert_eq!(
        relative_files(&fx.out()),
        filtered_files(fx.src.path(), include_tests)
    );
    // Filtering the copy again changes nothing
    assert_eq!(
        filtered_files(&fx.out(), include_tests),
        filtered_files(fx.src.path(), include_tests)
    );
}

#[rstest]
#[case(false)]
#[case(true)]
fn test_git_directory_never_copied(#[case] include_tests: bool) {
    let fx = TestFixture::new();
    fx.write("main.go", "package main");
    fx.write(".git/objects/pack.go", "package pack");
    fx.write("sub/.git/config.go", "package config");

    copy_tree(fx.src.path(), &fx.out(), &options(include_tests)).unwrap();

    assert!(!fx.out().join(".git").exists());
    assert!(!fx.out().join("sub").exists());
    assert_eq!(relative_files(&fx.out()), paths(&["main.go"]));
}

#[rstest]
#[case("testdata")]
#[case("_testdata")]
fn test_testdata_directories_follow_flag(#[case] dir: &str) {
    let fx = TestFixture::new();
    fx.write("a.go", "package a");
    fx.write(&format!("{dir}/case.go"), "package case");

    let without = fx.dst.path().join("without");
    copy_tree(fx.src.path(), &without, &options(false)).unwrap();
    assert!(!without.join(dir).exists());

    let with = fx.dst.path().join("with");
    copy_tree(fx.src.path(), &with, &options(true)).unwrap();
    assert!(with.join(dir).join("case.go").is_file());
}

#[test]
fn test_other_underscore_directories_always_skipped() {
    let fx = TestFixture::new();
    fx.write("a.go", "package a");
    fx.write("_obj/a.go", "package a");
    fx.write("_testdata2/a.go", "package a");
    fx.write("_gen.go", "package a");

    copy_tree(fx.src.path(), &fx.out(), &options(true)).unwrap();

    assert_eq!(relative_files(&fx.out()), paths(&["a.go"]));
}

#[rstest]
#[case(false, false)]
#[case(true, true)]
fn test_go_test_file_follows_flag(#[case] include_tests: bool, #[case] copied: bool) {
    let fx = TestFixture::new();
    fx.write("foo_test.go", "package foo");

    copy_tree(fx.src.path(), &fx.out(), &options(include_tests)).unwrap();

    assert_eq!(fx.out().join("foo_test.go").exists(), copied);
}

#[rstest]
#[case(false)]
#[case(true)]
fn test_non_go_extensions_never_copied(#[case] include_tests: bool) {
    let fx = TestFixture::new();
    fx.write("foo_test.txt", "notes");
    fx.write("tool.py", "print()");
    fx.write("Makefile", "all:");
    fx.write("upper.GO", "package upper");

    let stats = copy_tree(fx.src.path(), &fx.out(), &options(include_tests)).unwrap();

    assert_eq!(stats.files_copied, 0);
    assert_eq!(stats.files_filtered, 4);
    assert!(relative_files(&fx.out()).is_empty());
    // Nothing to copy means nothing is created
    assert!(!fx.out().exists());
}

#[test]
fn test_file_contents_preserved() {
    let fx = TestFixture::new();
    let body = "package big\n".repeat(10_000);
    fx.write("big/big.go", &body);

    let stats = CopyBuilder::new(fx.src.path(), fx.out()).run().unwrap();

    assert_eq!(fs::read_to_string(fx.out().join("big/big.go")).unwrap(), body);
    assert_eq!(stats.bytes_copied, body.len() as u64);
}

#[test]
fn test_copy_into_existing_destination() {
    let fx = TestFixture::new();
    fx.write("a.go", "package a");
    fs::create_dir_all(fx.out()).unwrap();
    fs::write(fx.out().join("keep.txt"), "untouched").unwrap();
    fs::write(fx.out().join("a.go"), "stale").unwrap();

    copy_tree(fx.src.path(), &fx.out(), &options(false)).unwrap();

    assert_eq!(fs::read_to_string(fx.out().join("a.go")).unwrap(), "package a");
    assert_eq!(
        fs::read_to_string(fx.out().join("keep.txt")).unwrap(),
        "untouched"
    );
}
