use seek_trace::parser::{IoKind, Phase, PhaseCategory};
use seek_trace::timeline::{translate_inputs, translate_str, Translator};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const TRACE: &str = "\
     0.000000 execve(\"./dj_cmd\", [\"./dj_cmd\", \"-direct\"], 0x7ffd) = 0
     0.000031 write(2, \"BEGIN INODE SCAN\\n\", 17) = 17
     0.000012 lseek(3, 1024, SEEK_SET) = 1024 <0.000004>
     0.000020 read(3, \"\\0\\0\\0\"..., 4096) = 4096 <0.000050>
     0.000003 write(2, \"END INODE SCAN\\n\", 15) = 15
scanning inodes done
     0.000007 write(2, \"BEGIN BLOCK SCAN\\n\", 17) = 17
     0.000011 pread(3, \"\"..., 8192, 65536) = 8192 <0.000090>
     0.000009 pread(3, \"\"..., 8192, 16384) = 8192 <0.000080>
     0.000004 write(2, \"END BLOCK SCAN\\n\", 15) = 15
     0.000001 write(2, \"BEGIN BLOCK READ\\n\", 17) = 17
";

#[test]
fn test_event_count_and_order() {
    let timeline = translate_str(TRACE);

    let kinds: Vec<IoKind> = timeline.events.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            IoKind::Seek,
            IoKind::Read,
            IoKind::Seek,
            IoKind::Read,
            IoKind::Seek,
            IoKind::Read
        ]
    );
}

#[test]
fn test_time_is_non_decreasing() {
    let timeline = translate_str(TRACE);
    assert!(timeline.events.windows(2).all(|w| w[0].time <= w[1].time));
}

#[test]
fn test_cursor_continuity() {
    let timeline = translate_str(TRACE);
    for pair in timeline.events.windows(2) {
        assert_eq!(pair[0].end_position(), pair[1].position);
    }
    assert_eq!(timeline.final_state.position, 16384 + 8192);
}

#[test]
fn test_backward_seek_extent() {
    let timeline = translate_str(TRACE);
    let seek = &timeline.events[4];
    assert_eq!(seek.kind, IoKind::Seek);
    assert_eq!(seek.position, 65536 + 8192);
    assert_eq!(seek.extent, 16384 - (65536 + 8192));
}

#[test]
fn test_phases_and_dangling_begin() {
    let timeline = translate_str(TRACE);

    assert_eq!(
        timeline.phases.inode_scan,
        vec![Phase {
            category: PhaseCategory::InodeScan,
            start_time: 31,
            end_time: 66,
        }]
    );
    assert_eq!(
        timeline.phases.block_scan,
        vec![Phase {
            category: PhaseCategory::BlockScan,
            start_time: 73,
            end_time: 97,
        }]
    );
    assert!(timeline.phases.block_read.is_empty());
}

#[test]
fn test_call_durations_attached() {
    let timeline = translate_str(TRACE);
    assert_eq!(timeline.events[0].call_duration, Some(0.000004));
    assert_eq!(timeline.events[2].call_duration, None);
    assert_eq!(timeline.events[3].call_duration, Some(0.000090));
}

#[test]
fn test_unmatched_lines_are_inert() {
    let clean = translate_str(" 0.000010 lseek(3, 4096, SEEK_SET) = 4096\n 0.000005 read(3, buf, 8192) = 8192\n");
    let noisy = translate_str(
        "hello\n 0.000010 lseek(3, 4096, SEEK_SET) = 4096\n--- SIGCHLD ---\n 0.000005 read(3, buf, 8192) = 8192\n+++ exited with 0 +++\n",
    );

    assert_eq!(clean.events, noisy.events);
    assert_eq!(clean.phases, noisy.phases);
    assert_eq!(clean.final_state, noisy.final_state);
}

#[test]
fn test_end_without_begin_ignored() {
    let timeline = translate_str("END BLOCK READ\n 0.000010 write(2, \"BEGIN BLOCK READ\", 16) = 16\nEND BLOCK READ\n");
    assert_eq!(timeline.phases.block_read.len(), 1);
    assert_eq!(timeline.phases.block_read[0].start_time, 10);
}

#[test]
fn test_translator_exposes_pending_state() {
    let mut translator = Translator::new();
    translator.process_line(" 0.000100 write(2, \"BEGIN BLOCK SCAN\\n\", 17) = 17");
    assert_eq!(
        translator.phase_tracker().pending(PhaseCategory::BlockScan),
        Some(100)
    );

    translator.process_line(" 0.000150 write(2, \"END BLOCK SCAN\\n\", 15) = 15");
    assert_eq!(translator.phase_tracker().pending(PhaseCategory::BlockScan), None);
    assert_eq!(translator.state().time, 250);

    let timeline = translator.finish();
    assert_eq!(timeline.phases.block_scan[0].start_time, 100);
    assert_eq!(timeline.phases.block_scan[0].end_time, 250);
}

#[test]
fn test_translate_inputs_concatenates_in_order() {
    let mut first = NamedTempFile::new().unwrap();
    write!(first, " 0.000010 lseek(3, 4096, SEEK_SET) = 4096").unwrap();
    let mut second = NamedTempFile::new().unwrap();
    writeln!(second, " 0.000005 read(3, buf, 8192) = 8192").unwrap();

    let timeline =
        translate_inputs(&[first.path().to_path_buf(), second.path().to_path_buf()]).unwrap();

    assert_eq!(timeline.lines_read, 2);
    assert_eq!(timeline.events.len(), 2);
    assert_eq!(timeline.events[1].time, 15);
    assert_eq!(timeline.final_state.position, 12288);
}

#[test]
fn test_translate_inputs_missing_file() {
    let result = translate_inputs(&[PathBuf::from("/nonexistent/trace.log")]);
    assert!(result.is_err());
}
