use kyc_store::*;
use std::fs;

const HEADER_LINE: &str = "customer_id,location,data_throughput,latency\n";

#[test]
fn append_to_fresh_path_then_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    assert_eq!(StoreState::of(&path), StoreState::Absent);

    append(&path, &Record::new("C1", "NY", "100", "12.5")).unwrap();

    assert_eq!(StoreState::of(&path), StoreState::Present);
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, format!("{HEADER_LINE}C1,NY,100,12.5\n"));

    let records = read_to_vec(&path).unwrap();
    assert_eq!(records, vec![Record::new("C1", "NY", "100", "12.5")]);
}

#[test]
fn appended_records_land_at_the_tail() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kyc.csv");

    let first = Record::new("C1", "NY", "", "");
    let second = Record::new("C2", "Austin, TX", "50.5", "");
    let third = Record::new("C3", "She said \"hi\"", "", "7");
    for record in [&first, &second, &third] {
        append(&path, record).unwrap();
        let records = read_to_vec(&path).unwrap();
        assert_eq!(records.last(), Some(record));
    }

    assert_eq!(read_to_vec(&path).unwrap(), vec![first, second, third]);
}

#[test]
fn invalid_customer_id_never_creates_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let err = append(&path, &Record::new("", "NY", "100", "12.5")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.to_string(), "Validation error: customer_id required");

    assert!(!path.exists());
    assert_eq!(read_all(&path).unwrap().count(), 0);
}

#[test]
fn invalid_record_leaves_existing_file_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    append(&path, &Record::new("C1", "NY", "1", "2")).unwrap();
    let before = fs::read(&path).unwrap();

    let err = append(&path, &Record::new("C2", "LA", "abc", "")).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::NotNumeric {
            field: "data_throughput",
            ..
        })
    ));

    let err = append(&path, &Record::new("C2", "", "", "")).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::Required { field: "location" })
    ));

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn blank_path_is_a_path_error_for_writes_only() {
    let err = append("   ", &Record::new("C1", "NY", "", "")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Path);

    assert_eq!(read_all("").unwrap().count(), 0);
    assert_eq!(read_all("  ").unwrap().count(), 0);
}

#[test]
fn read_all_on_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope").join("missing.csv");
    assert!(read_to_vec(&path).unwrap().is_empty());
    assert!(!path.exists());
}

#[test]
fn ensure_creates_parent_dirs_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a").join("b").join("kyc.csv");

    let resolved = ensure(&path).unwrap();
    assert_eq!(resolved, path);
    assert_eq!(fs::read_to_string(&path).unwrap(), HEADER_LINE);

    append(&path, &Record::new("C1", "NY", "", "")).unwrap();
    let before = fs::read_to_string(&path).unwrap();

    ensure(&path).unwrap();
    ensure(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn ensure_adds_header_to_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kyc.csv");
    fs::write(&path, "").unwrap();

    ensure(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), HEADER_LINE);
}

#[test]
fn short_rows_are_padded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kyc.csv");
    fs::write(&path, format!("{HEADER_LINE}C2,LA\nC3\n")).unwrap();

    let records = read_to_vec(&path).unwrap();
    assert_eq!(
        records,
        vec![Record::new("C2", "LA", "", ""), Record::new("C3", "", "", "")]
    );
}

#[test]
fn extra_columns_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kyc.csv");
    fs::write(&path, format!("{HEADER_LINE}C4,SF,10,2,oops,more\nC5,LA,1,1\n")).unwrap();

    let records = read_to_vec(&path).unwrap();
    assert_eq!(
        records,
        vec![
            Record::new("C4", "SF", "10", "2"),
            Record::new("C5", "LA", "1", "1"),
        ]
    );
}

#[test]
fn append_writes_raw_strings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kyc.csv");
    append(&path, &Record::new("C1", "NY", "1.50", "1e2")).unwrap();

    let records = read_to_vec(&path).unwrap();
    assert_eq!(records[0].data_throughput, "1.50");
    assert_eq!(records[0].latency, "1e2");
}

#[test]
fn crlf_files_are_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kyc.csv");
    fs::write(
        &path,
        "customer_id,location,data_throughput,latency\r\nC1,NY,100,12.5\r\n",
    )
    .unwrap();

    assert_eq!(
        read_to_vec(&path).unwrap(),
        vec![Record::new("C1", "NY", "100", "12.5")]
    );
}

#[test]
fn invalid_utf8_surfaces_as_io_kind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kyc.csv");
    let mut bytes = HEADER_LINE.as_bytes().to_vec();
    bytes.extend_from_slice(b"C1,\xff\xfe,1,2\n");
    fs::write(&path, bytes).unwrap();

    let mut records = read_all(&path).unwrap();
    let err = records.next().unwrap().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(records.next().is_none());
}

#[test]
fn append_after_unterminated_data_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kyc.csv");
    fs::write(&path, format!("{HEADER_LINE}C1,NY,1,2")).unwrap();

    append(&path, &Record::new("C2", "LA", "3", "4")).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{HEADER_LINE}C1,NY,1,2\nC2,LA,3,4\n")
    );
    assert_eq!(
        read_to_vec(&path).unwrap(),
        vec![
            Record::new("C1", "NY", "1", "2"),
            Record::new("C2", "LA", "3", "4"),
        ]
    );
}

#[test]
fn append_after_unterminated_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kyc.csv");
    fs::write(&path, HEADER_LINE.trim_end()).unwrap();

    append(&path, &Record::new("C1", "NY", "100", "12.5")).unwrap();

    assert_eq!(
        read_to_vec(&path).unwrap(),
        vec![Record::new("C1", "NY", "100", "12.5")]
    );
}

#[test]
fn blank_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kyc.csv");
    fs::write(&path, format!("{HEADER_LINE}C1,NY,1,2\n\n\r\nC2,LA\n\n")).unwrap();

    assert_eq!(
        read_to_vec(&path).unwrap(),
        vec![
            Record::new("C1", "NY", "1", "2"),
            Record::new("C2", "LA", "", ""),
        ]
    );
}
