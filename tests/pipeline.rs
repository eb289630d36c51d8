//! End-to-end runs of parsed trees against real processes and real files.
//!
//! Output is always redirected into a temporary directory so the suite can
//! observe the bytes without capturing the test harness's own streams.

use std::path::Path;
use std::time::Duration;

use tokio::time::timeout;

use marsh::{cmd, parse};

async fn run(line: &str) -> Result<(), cmd::ExecError> {
    let tree = parse::parse_line(line)
        .expect("parse failed")
        .expect("blank line");
    timeout(Duration::from_secs(10), cmd::execute(tree))
        .await
        .expect("execution timed out")
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read output file")
}

#[tokio::test]
async fn echo_writes_its_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    run(&format!("echo hello world > {}", out.display()))
        .await
        .unwrap();
    assert_eq!(read(&out), "hello world\n");
}

#[tokio::test]
async fn quoting_reaches_the_command_intact() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    run(&format!(r#"echo 'a  b' "c\"d" > {}"#, out.display()))
        .await
        .unwrap();
    assert_eq!(read(&out), "a  b c\"d\n");
}

#[tokio::test]
async fn truncate_then_append_accumulates() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    run(&format!("echo one > {}", out.display())).await.unwrap();
    run(&format!("echo two >> {}", out.display())).await.unwrap();
    run(&format!("echo three >> {}", out.display()))
        .await
        .unwrap();
    assert_eq!(read(&out), "one\ntwo\nthree\n");
}

#[tokio::test]
async fn truncate_discards_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    run(&format!("echo before > {}", out.display()))
        .await
        .unwrap();
    run(&format!("echo after > {}", out.display()))
        .await
        .unwrap();
    assert_eq!(read(&out), "after\n");
}

#[tokio::test]
async fn builtin_pipes_into_external_command() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    run(&format!("echo hello | tr a-z A-Z > {}", out.display()))
        .await
        .unwrap();
    assert_eq!(read(&out), "HELLO\n");
}

#[tokio::test]
async fn three_stage_pipeline_preserves_the_stream() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    run(&format!("printf 'a\\nb\\n' | cat | cat > {}", out.display()))
        .await
        .unwrap();
    assert_eq!(read(&out), "a\nb\n");
}

#[tokio::test]
async fn input_redirect_feeds_the_command() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in");
    let out = dir.path().join("out");
    std::fs::write(&input, "some data\n").unwrap();
    run(&format!("cat < {} > {}", input.display(), out.display()))
        .await
        .unwrap();
    assert_eq!(read(&out), "some data\n");
}

#[tokio::test]
async fn stderr_redirect_captures_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    let err = dir.path().join("err");
    let result = run(&format!("ls /definitely/not/here 2> {}", err.display())).await;
    assert!(result.is_err(), "ls should report failure");
    assert!(!read(&err).is_empty(), "diagnostic should land in the file");
}

#[tokio::test]
async fn err_out_redirect_collects_both_streams() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    run(&format!(
        "sh -c 'echo to-stdout; echo to-stderr >&2' &> {}",
        out.display()
    ))
    .await
    .unwrap();
    let content = read(&out);
    assert!(content.contains("to-stdout\n"), "stdout missing: {content:?}");
    assert!(content.contains("to-stderr\n"), "stderr missing: {content:?}");
}

#[tokio::test]
async fn command_not_found_is_written_to_bound_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let err = dir.path().join("err");
    let result = run(&format!(
        "definitely-not-a-command-xyz 2> {}",
        err.display()
    ))
    .await;
    assert!(matches!(result, Err(cmd::ExecError::CommandNotFound(_))));
    assert_eq!(
        read(&err),
        "definitely-not-a-command-xyz: command not found\n"
    );
}

#[tokio::test]
async fn missing_input_file_fails_without_running_the_command() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let result = run(&format!(
        "cat < /definitely/not/here > {}",
        out.display()
    ))
    .await;
    assert!(matches!(result, Err(cmd::ExecError::Open { .. })));
}

#[tokio::test]
async fn builtin_downstream_of_a_pipe_drains_its_input() {
    // A builtin never reads stdin; a large upstream write must still finish
    // instead of blocking forever on a full kernel pipe buffer.
    let dir = tempfile::tempdir().unwrap();
    let big = dir.path().join("big");
    let out = dir.path().join("out");
    std::fs::write(&big, "x".repeat(256 * 1024)).unwrap();
    run(&format!("cat {} | pwd 1> {}", big.display(), out.display()))
        .await
        .unwrap();
    assert!(read(&out).ends_with('\n'));
}

#[tokio::test]
async fn pipe_failure_prefers_the_left_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = dir.path().join("err");
    let result = run(&format!(
        "definitely-not-a-command-xyz 2> {} | cat",
        err.display()
    ))
    .await;
    assert!(matches!(result, Err(cmd::ExecError::CommandNotFound(_))));
}

#[tokio::test]
async fn type_reports_builtins_and_unknowns() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    run(&format!("type echo > {}", out.display())).await.unwrap();
    assert_eq!(read(&out), "echo is a shell builtin\n");

    run(&format!("type definitely-not-a-command-xyz > {}", out.display()))
        .await
        .unwrap();
    assert_eq!(read(&out), "definitely-not-a-command-xyz: not found\n");
}

#[tokio::test]
async fn quoted_operators_are_ordinary_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    run(&format!("echo '|' '>' '2>' > {}", out.display()))
        .await
        .unwrap();
    assert_eq!(read(&out), "| > 2>\n");
}
