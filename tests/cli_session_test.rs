//! End-to-end runs of the interactive menu with a piped transcript.

use assert_cmd::Command;
use indoc::indoc;
use tempfile::TempDir;

fn vidalyzer(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vidalyzer"));
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("VIDALYZER_CONFIG")
        .args(["--color", "never"]);
    cmd
}

fn run_transcript(script: &str) -> String {
    let dir = TempDir::new().unwrap();
    let output = vidalyzer(&dir).write_stdin(script).assert().success();
    String::from_utf8(output.get_output().stdout.clone()).unwrap()
}

const SETUP: &str = indoc! {"
    1
    2
    u1
    alice
    alice@example.com
    1
    3
    u2
    bob
    bob@example.com
    2
    u1
    v1
    Demo Video
    http://example.com/v1
    120
    Education
"};

#[test]
fn analysis_scenario_prints_result_block() {
    let script = format!(
        "{SETUP}{}",
        indoc! {"
            3
            v1
            u2
            c1
            great video
            3
            v1
            u2
            c2
            terrible content
            3
            v1
            u1
            c3
            okay I guess
            4
            v1
            0
        "}
    );
    let stdout = run_transcript(&script);

    assert!(stdout.contains("Welcome to YouTube Video Analyzer System!"));
    assert!(stdout.contains("Analyzing 3 comments..."));
    assert!(stdout.contains("Quality Score: 5.00/10"));
    assert!(stdout.contains("Total Comments Analyzed: 3"));
    assert!(stdout.contains("Recommendation: Mixed reviews. Watch at your own discretion."));
    assert!(stdout.contains("Goodbye!"));
}

#[test]
fn menu_lists_every_command() {
    let stdout = run_transcript("0\n");
    for line in [
        "1. Create User/Creator/Viewer",
        "4. Analyze Video",
        "12. Display Video Details",
        "16. Save Analysis Result",
        "0. Exit",
    ] {
        assert!(stdout.contains(line), "missing menu line {line:?}");
    }
}

#[test]
fn guards_and_errors_keep_the_session_alive() {
    let stdout = run_transcript(indoc! {"
        2
        3
        4
        99
        8
        nobody
        5
        0
    "});

    assert!(stdout.contains("No video creators available. Create a creator first!"));
    assert!(stdout.contains("No videos available. Create a video first!"));
    assert!(stdout.contains("No videos available!"));
    assert!(stdout.contains("Invalid choice: \"99\""));
    assert!(stdout.contains("User not found: nobody"));
    assert!(stdout.contains("No users in the system."));
    assert!(stdout.contains("Goodbye!"));
}

#[test]
fn deleting_author_keeps_comment_with_placeholder() {
    let script = format!(
        "{SETUP}{}",
        indoc! {"
            3
            v1
            u2
            c1
            love it
            10
            u2
            7
            0
        "}
    );
    let stdout = run_transcript(&script);

    assert!(stdout.contains("User bob deleted successfully!"));
    assert!(stdout.contains("[c1] Comment by [deleted user]: love it"));
}

#[test]
fn deleting_video_updates_creator_total() {
    let script = format!("{SETUP}11\nv1\n8\nu1\n6\n0\n");
    let stdout = run_transcript(&script);

    assert!(stdout.contains("Video 'Demo Video' deleted successfully!"));
    assert!(stdout.contains("Total Videos: 0"));
    assert!(stdout.contains("No videos in the system."));
}

#[test]
fn closed_stdin_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    vidalyzer(&dir).write_stdin("5\n").assert().success();
}

#[test]
fn saved_result_lands_in_working_directory() {
    let dir = TempDir::new().unwrap();
    let script = format!("{SETUP}3\nv1\nu2\nc1\nawesome\n4\nv1\n16\nv1\n0\n");
    let output = vidalyzer(&dir).write_stdin(script).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Result saved to"));

    let saved: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    assert_eq!(saved.len(), 1);
    let text = std::fs::read_to_string(&saved[0]).unwrap();
    assert!(text.starts_with("Quality Score: 10.00/10\n"));
    assert!(text.contains("Recommendation: Highly recommended!"));
}
