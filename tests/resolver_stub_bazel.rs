// tests/resolver_stub_bazel.rs

//! `CommandResolver` against a stub bazel executable (a shell script), so the
//! full subprocess protocol is exercised without a real bazel install.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use bazwatch::bazel::BazelClient;
use bazwatch::errors::BazwatchError;
use bazwatch::resolve::{CommandResolver, Resolver};
use bazwatch_test_utils::{init_tracing, with_timeout};

/// Write an executable stub script and return its path.
fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// A stub that answers both infos and both queries, and insists on seeing
/// the forwarded tool flag first.
const HAPPY_STUB: &str = r#"#!/bin/sh
if [ "$1" != "--keep_going" ]; then
  echo "missing forwarded flag, got: $1" >&2
  exit 9
fi
shift
case "$1" in
info)
  case "$2" in
    output_base) echo "/obase" ;;
    workspace) echo "/wspace" ;;
    *) echo "unexpected info noun: $2" >&2; exit 2 ;;
  esac
  ;;
query)
  case "$2" in
    'kind("source file", deps(set(//foo:bar)))')
      printf '//foo:bar.src\n@ext//lib:code.c\n'
      ;;
    'buildfiles(deps(set(//foo:bar)))')
      printf '//foo:BUILD\n//:WORKSPACE\n'
      ;;
    *) echo "unexpected query: $2" >&2; exit 2 ;;
  esac
  ;;
*)
  echo "unexpected subcommand: $1" >&2
  exit 2
  ;;
esac
"#;

/// A stub whose queries always blow up.
const FAILING_QUERY_STUB: &str = r#"#!/bin/sh
case "$1" in
info) echo "/somewhere" ;;
query) echo "query exploded" >&2; exit 3 ;;
*) exit 2 ;;
esac
"#;

#[tokio::test]
async fn resolves_both_file_sets_and_appends_workspace_file() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "bazel-stub", HAPPY_STUB);

    let client = BazelClient::new(
        stub.to_string_lossy().into_owned(),
        vec!["--keep_going".to_string()],
    );
    let mut resolver = CommandResolver::new(client);

    let sets = with_timeout(resolver.resolve("//foo:bar")).await.unwrap();

    assert_eq!(
        sets.source_files,
        vec![
            PathBuf::from("/wspace/foo/bar.src"),
            PathBuf::from("/obase/external/ext/lib/code.c"),
        ]
    );
    // The workspace file is appended unconditionally; since the query also
    // returned it, it appears twice. Duplicates are tolerated, not deduped.
    assert_eq!(
        sets.build_files,
        vec![
            PathBuf::from("/wspace/foo/BUILD"),
            PathBuf::from("/wspace/WORKSPACE"),
            PathBuf::from("/wspace/WORKSPACE"),
        ]
    );
}

#[tokio::test]
async fn failing_query_surfaces_subcommand_and_stderr() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "bazel-stub", FAILING_QUERY_STUB);

    let client = BazelClient::new(stub.to_string_lossy().into_owned(), Vec::new());
    let mut resolver = CommandResolver::new(client);

    let err = with_timeout(resolver.resolve("//foo:bar"))
        .await
        .unwrap_err();

    match err {
        BazwatchError::ToolFailed {
            subcommand,
            code,
            stderr,
        } => {
            assert!(subcommand.starts_with("query"));
            assert_eq!(code, 3);
            assert!(stderr.contains("query exploded"));
        }
        other => panic!("expected ToolFailed, got: {other:?}"),
    }
}

#[tokio::test]
async fn missing_binary_is_an_io_error() {
    init_tracing();
    let client = BazelClient::new("/definitely/not/a/bazel", Vec::new());
    let mut resolver = CommandResolver::new(client);

    let err = with_timeout(resolver.resolve("//foo:bar"))
        .await
        .unwrap_err();
    assert!(matches!(err, BazwatchError::IoError(_)));
}
