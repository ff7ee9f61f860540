// tests/cli_partition.rs

//! Invocation partitioning: tool flags pass through verbatim, the first bare
//! token is the command, the rest are targets.

use bazwatch::cli::{BazelCommand, CliArgs, Invocation};
use bazwatch::errors::BazwatchError;
use clap::Parser;

fn strs(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[test]
fn flags_anywhere_become_tool_flags() {
    let inv =
        Invocation::partition(&strs(&["--keep_going", "build", "//foo:bar", "--config=dev"]))
            .unwrap();
    assert_eq!(inv.command, BazelCommand::Build);
    assert_eq!(inv.targets, strs(&["//foo:bar"]));
    assert_eq!(inv.tool_flags, strs(&["--keep_going", "--config=dev"]));
}

#[test]
fn multiple_targets_join_into_one_expression() {
    let inv = Invocation::partition(&strs(&["test", "//foo:bar", "//baz:qux"])).unwrap();
    assert_eq!(inv.command, BazelCommand::Test);
    assert_eq!(inv.target_expression(), "//foo:bar //baz:qux");
}

#[test]
fn unknown_command_is_a_usage_error() {
    let err = Invocation::partition(&strs(&["bake", "//foo:bar"])).unwrap_err();
    assert!(matches!(err, BazwatchError::Usage(_)));
    assert!(err.to_string().contains("'build', 'test', or 'run'"));
}

#[test]
fn missing_target_is_a_usage_error() {
    let err = Invocation::partition(&strs(&["build"])).unwrap_err();
    assert!(matches!(err, BazwatchError::Usage(_)));
}

#[test]
fn empty_args_are_a_usage_error() {
    let err = Invocation::partition(&[]).unwrap_err();
    assert!(matches!(err, BazwatchError::Usage(_)));
}

#[test]
fn clap_captures_tool_flags_after_its_own() {
    let args = CliArgs::try_parse_from([
        "bazwatch",
        "--bazel",
        "/opt/bazel",
        "--keep_going",
        "run",
        "//srv:api",
    ])
    .unwrap();

    assert_eq!(args.bazel.as_deref(), Some("/opt/bazel"));
    assert_eq!(args.args, strs(&["--keep_going", "run", "//srv:api"]));

    let inv = Invocation::partition(&args.args).unwrap();
    assert_eq!(inv.command, BazelCommand::Run);
    assert_eq!(inv.targets, strs(&["//srv:api"]));
    assert_eq!(inv.tool_flags, strs(&["--keep_going"]));
}
