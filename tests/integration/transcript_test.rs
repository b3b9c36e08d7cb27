//! Library-level tests against recorded fixtures

use castscribe::config::ClassifierConfig;
use castscribe::{format_lines, format_recording, parse_session, TranscriptError};

use super::helpers::{fixtures_dir, load_fixture};

fn fish_session() -> castscribe::Session {
    let content = load_fixture("fish_session.cast");
    parse_session(content.lines(), &ClassifierConfig::default()).expect("fixture should parse")
}

#[test]
fn one_command_per_boundary() {
    let session = fish_session();
    let commands: Vec<&str> = session.commands.iter().map(|c| c.command.as_str()).collect();
    assert_eq!(
        commands,
        vec!["ls -la", "cat missing.txt", "echo \"hello, world\"", "exit"]
    );
    assert!(session.commands.iter().all(|c| c.is_complete));
}

#[test]
fn timing_is_monotonic_per_command() {
    for cmd in fish_session().commands {
        assert!(cmd.end_time >= cmd.start_time, "{:?}", cmd);
    }
}

#[test]
fn exit_codes_follow_status_markers() {
    let codes: Vec<i32> = fish_session().commands.iter().map(|c| c.exit_code).collect();
    assert_eq!(codes, vec![0, 1, 0, 0]);
}

#[test]
fn typing_echo_and_prompts_are_not_output() {
    let session = fish_session();
    let ls = &session.commands[0];
    assert!(ls.output.starts_with("total 8\n"));
    assert!(ls.output.ends_with("notes.txt"));
    assert!(!ls.output.contains("alice@laptop"));
    assert!(!ls.output.lines().any(|line| line == "cat" || line == "ca"));
}

#[test]
fn working_directory_comes_from_osc7() {
    assert_eq!(
        fish_session().working_dir.as_deref(),
        Some("/home/alice/project")
    );
}

#[test]
fn structured_transcript_snapshot() {
    let output = format_recording(
        &fixtures_dir().join("fish_session.cast"),
        "structured",
        &ClassifierConfig::default(),
    )
    .unwrap();

    insta::with_settings!({filters => vec![(r"Recorded: .+", "Recorded: [time]")]}, {
        insta::assert_snapshot!(output.trim_end(), @r###"
        Terminal Session (fish shell, 80x24)
        Recorded: [time]
        Working Directory: /home/alice/project

        COMMAND: ls -la
        START TIME: 1.512s
        DURATION: 2.488s
        EXIT CODE: 0
        OUTPUT: total 8
        drwxr-xr-x  2 alice alice 4096 Nov 14 22:13 .
        -rw-r--r--  1 alice alice   42 Nov 14 22:13 notes.txt

        COMMAND: cat missing.txt
        START TIME: 4.000s
        DURATION: 2.000s
        EXIT CODE: 1
        OUTPUT: cat: missing.txt: No such file or directory

        COMMAND: echo "hello, world"
        START TIME: 6.000s
        DURATION: 1.500s
        EXIT CODE: 0
        OUTPUT: hello, world

        COMMAND: exit
        START TIME: 7.500s
        DURATION: 0.000s
        EXIT CODE: 0
        OUTPUT: (no output)
        "###);
    });
}

#[test]
fn csv_transcript_escapes_fields() {
    let content = load_fixture("fish_session.cast");
    let output = format_lines(content.lines(), "csv", &ClassifierConfig::default()).unwrap();
    let rows: Vec<&str> = output.lines().collect();

    assert_eq!(
        rows[0],
        "shell,width,height,recorded,working_dir,command,start_time,duration,exit_code,output"
    );
    assert_eq!(rows.len(), 5);
    assert!(rows[3].ends_with(
        ",/home/alice/project,\"echo \"\"hello, world\"\"\",6.000,1.500,0,\"hello, world\""
    ));
    assert!(rows[4].ends_with(",exit,7.500,0.000,0,(no output)"));
}

#[test]
fn minimal_recording_scenario() {
    let content = load_fixture("minimal.cast");
    let session = parse_session(content.lines(), &ClassifierConfig::default()).unwrap();

    assert_eq!(session.commands.len(), 1);
    assert_eq!(session.commands[0].command, "ls -la");
    assert_eq!(session.commands[0].exit_code, 0);
    assert!(session.commands[0].output.contains("total 0"));
    assert_eq!(session.shell_name(), "fish");
}

#[test]
fn bad_header_aborts_reconstruction() {
    let err = format_recording(
        &fixtures_dir().join("bad_header.cast"),
        "structured",
        &ClassifierConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, TranscriptError::MalformedHeader(_)));
}
