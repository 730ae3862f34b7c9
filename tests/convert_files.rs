// tests/convert_files.rs
//
// File-level conversion: reading reports, output naming, progress callbacks.
//
use std::fs;
use std::path::{Path, PathBuf};

use meter_scrape::config::options::AppOptions;
use meter_scrape::progress::Progress;
use meter_scrape::runner::{convert_file, run};
use meter_scrape::Error;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("meter_scrape_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn write_report(dir: &Path, name: &str, day: &str) -> PathBuf {
    let html = format!(
        r#"<body><p><a name="gn">Данные ГН </a></p>
<table cellpadding="4">
<tr><th>Время</th></tr>
<tr><td>Дата: {day}</td></tr>
<tr><td>12:00</td><td>1,0</td><td>2,0</td><td>3,0</td><td>4,0</td></tr>
</table><h2>end</h2></body>"#
    );
    let (bytes, _, _) = encoding_rs::WINDOWS_1251.encode(&html);
    let path = dir.join(name);
    fs::write(&path, &bytes).unwrap();
    path
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<(PathBuf, usize)>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, _input: &Path, out: &Path, rows: usize) {
        self.done.push((out.to_path_buf(), rows));
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn output_lands_next_to_input_with_suffix() {
    let dir = tmp_dir("next_to_input");
    let input = write_report(&dir, "418.html", "01.07.2024");

    let (out, rows) = convert_file(&input, &AppOptions::default()).unwrap();
    assert_eq!(out, dir.join("418.html.csv"));
    assert_eq!(rows, 1);
    assert_eq!(fs::read_to_string(&out).unwrap(), "01.07.2024;12:00:00;1,0;2,0;3,0;4,0\n");
}

#[test]
fn run_converts_every_input_into_out_dir() {
    let dir = tmp_dir("out_dir");
    let a = write_report(&dir, "a.html", "01.07.2024");
    let b = write_report(&dir, "b.html", "02.07.2024");

    let mut opts = AppOptions::default();
    opts.output.out_dir = Some(dir.join("csv"));

    let mut rec = Recorder::default();
    let summary = run(&[a, b], &opts, Some(&mut rec as &mut dyn Progress)).unwrap();

    assert_eq!(summary.rows_written, 2);
    assert_eq!(summary.files_written, [dir.join("csv/a.html.csv"), dir.join("csv/b.html.csv")]);
    assert_eq!(rec.total, 2);
    assert_eq!(rec.done.len(), 2);
    assert!(rec.finished);
    assert!(fs::read_to_string(dir.join("csv/b.html.csv")).unwrap().starts_with("02.07.2024;"));
}

#[test]
fn unreadable_input_names_the_path() {
    let dir = tmp_dir("missing");
    let missing = dir.join("nope.html");
    match convert_file(&missing, &AppOptions::default()) {
        Err(Error::Read { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn run_stops_at_first_bad_report_but_still_finishes_progress() {
    let dir = tmp_dir("bad_report");
    let bad = dir.join("bad.html");
    fs::write(&bad, b"<html><body>no section</body></html>").unwrap();
    let good = write_report(&dir, "good.html", "01.07.2024");

    let mut rec = Recorder::default();
    let err = run(&[bad, good], &AppOptions::default(), Some(&mut rec as &mut dyn Progress)).unwrap_err();
    assert!(matches!(err, Error::SectionNotFound { .. }));
    assert!(rec.done.is_empty());
    assert!(rec.finished);
}
