use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_trackqc_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

#[test]
fn test_parse_id_accepts_whole_floats() {
    assert_eq!(parse_id("7"), Some(7));
    assert_eq!(parse_id(" -1 "), Some(-1));
    assert_eq!(parse_id("3.0"), Some(3));
    assert_eq!(parse_id("3.5"), None);
    assert_eq!(parse_id("nan"), None);
    assert_eq!(parse_id("abc"), None);
}

#[test]
fn test_load_csv_hit_table() {
    let dir = make_temp_dir();
    let path = dir.join("event.csv");
    write_file(
        &path,
        "EventID,TrackID,X,y,Layer\n1,0,0.0,1.0,0\n1,0,1.0,3.0,1\n\n1,-1,2.5,0.5,2\n",
    );

    let table = load_hit_table(&path, None).unwrap();
    assert_eq!(table.event.track_ids(), &[0, 0, -1]);
    let coords = table.event.coordinates().unwrap();
    assert_eq!(coords.x, vec![0.0, 1.0, 2.5]);
    assert_eq!(coords.y, vec![1.0, 3.0, 0.5]);
    assert!(table.labels.is_none());
}

#[test]
fn test_load_tsv_gz_with_labels_column() {
    let dir = make_temp_dir();
    let path = dir.join("event.tsv.gz");
    write_gz(&path, "trackid\tx\tY\tpred\n4\t0.1\t0.2\t9\n4.0\t0.3\t0.4\t-1\n");

    let table = load_hit_table(&path, Some("pred")).unwrap();
    assert_eq!(table.event.track_ids(), &[4, 4]);
    assert_eq!(table.labels, Some(vec![9, -1]));
}

#[test]
fn test_hit_table_without_coordinates() {
    let dir = make_temp_dir();
    let path = dir.join("ids.csv");
    write_file(&path, "TrackID\n0\n1\n");
    let table = load_hit_table(&path, None).unwrap();
    assert_eq!(table.event.len(), 2);
    assert!(table.event.coordinates().is_none());
}

#[test]
fn test_hit_table_errors() {
    let dir = make_temp_dir();

    let no_track = dir.join("no_track.csv");
    write_file(&no_track, "X,y\n0,1\n");
    assert!(matches!(
        load_hit_table(&no_track, None),
        Err(InputError::MissingColumn { .. })
    ));

    let bad_value = dir.join("bad.csv");
    write_file(&bad_value, "TrackID,X,y\n0,0.0,1.0\n0,oops,1.0\n");
    match load_hit_table(&bad_value, None) {
        Err(InputError::Parse { line, .. }) => assert_eq!(line, 3),
        other => panic!("unexpected {other:?}"),
    }

    for (name, row) in [("nan.csv", "0,1.0,nan"), ("inf.csv", "0,inf,1.0")] {
        let non_finite = dir.join(name);
        write_file(&non_finite, &format!("TrackID,X,y\n0,0.0,1.0\n{row}\n"));
        match load_hit_table(&non_finite, None) {
            Err(InputError::Parse { line, msg, .. }) => {
                assert_eq!(line, 3);
                assert!(msg.starts_with("non-finite"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    let short_row = dir.join("short.csv");
    write_file(&short_row, "TrackID,X,y\n0,0.0\n");
    assert!(matches!(
        load_hit_table(&short_row, None),
        Err(InputError::Parse { line: 2, .. })
    ));

    let header_only = dir.join("header.csv");
    write_file(&header_only, "TrackID,X,y\n");
    assert!(matches!(
        load_hit_table(&header_only, None),
        Err(InputError::Empty(_))
    ));

    let missing_labels = dir.join("labels_missing.csv");
    write_file(&missing_labels, "TrackID\n0\n");
    assert!(matches!(
        load_hit_table(&missing_labels, Some("pred")),
        Err(InputError::MissingColumn { .. })
    ));

    assert!(matches!(
        load_hit_table(&dir.join("absent.csv"), None),
        Err(InputError::Io { .. })
    ));
}

#[test]
fn test_load_labels_mixed_separators() {
    let dir = make_temp_dir();
    let path = dir.join("labels.txt");
    write_file(&path, "5 5\n5,6\n\n-1\n");
    assert_eq!(load_labels(&path).unwrap(), vec![5, 5, 5, 6, -1]);

    let gz = dir.join("labels.txt.gz");
    write_gz(&gz, "1\n2\n");
    assert_eq!(load_labels(&gz).unwrap(), vec![1, 2]);
}

#[test]
fn test_load_labels_errors() {
    let dir = make_temp_dir();
    let empty = dir.join("empty.txt");
    write_file(&empty, "\n\n");
    assert!(matches!(load_labels(&empty), Err(InputError::Empty(_))));

    let bad = dir.join("bad.txt");
    write_file(&bad, "1\nx\n");
    assert!(matches!(
        load_labels(&bad),
        Err(InputError::Parse { line: 2, .. })
    ));
}
