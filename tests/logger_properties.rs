#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::collections::HashMap;
use std::fs;
use std::sync::Arc;
use std::thread;

use chrono::NaiveDateTime;
use common::{captured_logger, split_line};
use rustylog::log::{self, LogLevel, LogSink, LoggerError, LoggerHandle};

#[test]
fn every_line_has_the_fixed_shape() {
    let (logger, cap) = captured_logger();
    logger.log(LogLevel::Info, "plain message");
    logger.log(LogLevel::Error, "[brackets] and\ttabs");
    logger.log_raw(200, "out of range");
    logger.flush().unwrap();

    let text = cap.text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);

    let expected = [
        ("INFO", "plain message"),
        ("ERROR", "[brackets] and\ttabs"),
        ("UNKNOWN", "out of range"),
    ];
    for (line, (level, msg)) in lines.iter().zip(expected) {
        let (ts, got_level, thread, got_msg) = split_line(line);
        assert_eq!(ts.len(), "YYYY-MM-DD HH:MM:SS.mmm".len(), "{line}");
        NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S%.3f").unwrap();
        assert_eq!(got_level, level);
        assert!(thread.parse::<u64>().is_ok(), "{line}");
        assert_eq!(got_msg, msg);
    }
}

#[test]
fn flush_happens_exactly_when_threshold_is_crossed() {
    let (logger, cap) = captured_logger();

    // Measure one rendered line, then size the threshold to 2.5 lines.
    logger.info("12345678901234567890");
    let line_len = logger.pending_bytes();
    logger.flush().unwrap();
    let baseline = cap.text().len();
    let flushes = cap.flushes();

    logger.set_buffer_size(line_len * 5 / 2);

    logger.info("abcdefghijabcdefghij");
    assert_eq!(cap.text().len(), baseline, "no flush after first line");
    logger.info("bcdefghijabcdefghija");
    assert_eq!(cap.text().len(), baseline, "no flush after second line");
    logger.info("cdefghijabcdefghijab");
    assert_eq!(cap.text().len(), baseline + 3 * line_len, "flushed on third");
    assert_eq!(cap.flushes(), flushes + 1);
    assert_eq!(logger.pending_bytes(), 0);
}

#[test]
fn exact_threshold_triggers_a_flush() {
    let (logger, cap) = captured_logger();
    logger.info("x");
    let line_len = logger.pending_bytes();
    logger.flush().unwrap();

    logger.set_buffer_size(line_len);
    logger.info("y");
    assert!(cap.text().ends_with("] y\n"));
    assert_eq!(logger.pending_bytes(), 0);
}

#[test]
fn fifty_byte_threshold_flushes_instead_of_buffering_forever() {
    let (logger, cap) = captured_logger();
    logger.set_buffer_size(50);
    for i in 0..3 {
        logger.info(&format!("message number {i:>4}"));
    }
    assert_eq!(cap.text().lines().count(), 3);
    assert_eq!(logger.pending_bytes(), 0);
}

#[test]
fn switching_sink_sends_earlier_lines_to_the_old_sink() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("switch.log");
    let (logger, cap) = captured_logger();

    logger.info("line A");
    logger.info("line B");
    logger.set_log_file(&path).unwrap();
    logger.info("line C");
    logger.shutdown().unwrap();

    let console = cap.text();
    assert_eq!(console.lines().count(), 2);
    assert!(console.contains("] line A\n"));
    assert!(console.contains("] line B\n"));
    assert!(!console.contains("line C"));

    let file = fs::read_to_string(&path).unwrap();
    assert_eq!(file.lines().count(), 1);
    assert!(file.ends_with("] line C\n"));
}

#[test]
fn switching_between_files_keeps_each_line_in_its_own_file() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.log");
    let second = dir.path().join("second.log");
    let (logger, cap) = captured_logger();

    logger.set_log_file(&first).unwrap();
    logger.warning("one");
    logger.set_log_file(&second).unwrap();
    logger.warning("two");
    logger.shutdown().unwrap();

    assert!(cap.text().is_empty());
    let a = fs::read_to_string(&first).unwrap();
    let b = fs::read_to_string(&second).unwrap();
    assert!(a.ends_with("] one\n") && a.lines().count() == 1);
    assert!(b.ends_with("] two\n") && b.lines().count() == 1);
}

#[test]
fn concurrent_writers_produce_whole_lines_in_per_thread_order() {
    const THREADS: usize = 8;
    const MESSAGES: usize = 200;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("concurrent.log");
    let (logger, _) = captured_logger();
    let handle = LoggerHandle::new(logger);
    handle.set_buffer_size(256);
    handle.set_log_file(&path).unwrap();

    let workers: Vec<_> = (0..THREADS)
        .map(|t| {
            let h = handle.clone();
            thread::spawn(move || {
                for m in 0..MESSAGES {
                    h.debug(&format!("worker-{t} seq-{m}"));
                }
            })
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }
    handle.shutdown().unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), THREADS * MESSAGES);

    let mut next_seq: HashMap<usize, usize> = HashMap::new();
    let mut thread_of_worker: HashMap<usize, String> = HashMap::new();
    for line in lines {
        let (_, level, thread, msg) = split_line(line);
        assert_eq!(level, "DEBUG");
        let (worker, seq) = msg
            .strip_prefix("worker-")
            .and_then(|r| r.split_once(" seq-"))
            .unwrap();
        let worker: usize = worker.parse().unwrap();
        let seq: usize = seq.parse().unwrap();

        let expected = next_seq.entry(worker).or_insert(0);
        assert_eq!(seq, *expected, "worker {worker} out of order");
        *expected += 1;

        let tag = thread_of_worker
            .entry(worker)
            .or_insert_with(|| thread.to_owned());
        assert_eq!(tag.as_str(), thread);
    }
    assert!(next_seq.values().all(|&n| n == MESSAGES));

    let distinct: std::collections::HashSet<&String> = thread_of_worker.values().collect();
    assert_eq!(distinct.len(), THREADS);
}

#[test]
fn failed_open_reports_error_and_keeps_logging_to_console() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.log");
    let bad = dir.path().join("no-such-dir").join("bad.log");
    let (logger, cap) = captured_logger();

    logger.set_log_file(&good).unwrap();
    logger.info("before");

    let err = logger.set_log_file(&bad).unwrap_err();
    assert!(matches!(err, LoggerError::OpenLogFile { .. }));
    assert!(err.to_string().contains("bad.log"));
    assert_eq!(logger.log_file(), None);

    logger.info("after");
    logger.flush().unwrap();

    let file = fs::read_to_string(&good).unwrap();
    assert!(file.ends_with("] before\n"));
    assert!(!file.contains("after"));
    assert!(cap.text().ends_with("] after\n"));
}

#[test]
fn global_instance_is_shared_across_threads() {
    let original = log::instance().buffer_size();

    let writer = thread::spawn(|| log::instance().set_buffer_size(4321));
    writer.join().unwrap();

    let seen = thread::spawn(|| log::instance().buffer_size()).join().unwrap();
    assert_eq!(seen, 4321);
    assert!(log::instance().same_logger(log::instance()));

    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| log::instance().clone()))
        .map(|h| h.join().unwrap())
        .collect();
    assert!(handles.iter().all(|h| h.same_logger(log::instance())));

    log::instance().set_buffer_size(original);
}

#[test]
fn dyn_sinks_can_be_injected() {
    let (logger, cap) = captured_logger();
    let sink: Arc<dyn LogSink> = Arc::new(LoggerHandle::new(logger));
    rustylog::logger_warning!(sink, "injected {}", 1);

    // Last handle gone: the logger is torn down and flushes.
    drop(sink);
    let text = cap.text();
    assert!(text.contains("] [WARNING] [Thread "));
    assert!(text.ends_with("] injected 1\n"));
}
