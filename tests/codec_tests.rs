mod common;
use common::{SAMPLE_TEXT, date, hm, sample_record};
use rworklog::codec::{decode, encode};
use rworklog::errors::AppError;
use rworklog::models::record::WorkLogRecord;

#[test]
fn test_encode_canonical_layout() {
    let text = encode(&sample_record()).expect("complete record");
    assert_eq!(text, SAMPLE_TEXT);
}

#[test]
fn test_encode_rejects_incomplete_record() {
    let mut rec = sample_record();
    rec.break_end = None;

    match encode(&rec) {
        Err(AppError::IncompleteRecord(field)) => assert_eq!(field, "break end"),
        other => panic!("expected IncompleteRecord, got {:?}", other),
    }
}

#[test]
fn test_encode_keeps_blank_task_lines() {
    let mut rec = sample_record();
    rec.tasks_completed = vec!["First".into(), "".into(), "Third".into()];
    rec.tasks_planned = vec![];

    let text = encode(&rec).unwrap();
    assert!(text.contains("* First\n* \n* Third\n\nToday"));
    // an empty list still produces one bare bullet
    assert!(text.contains("Today\n--------------------------------\n* \n\nTotal"));
}

#[test]
fn test_encode_negative_total() {
    let mut rec = sample_record();
    rec.in_time = Some(hm(10, 0));
    rec.out_time = Some(hm(9, 0));
    rec.break_start = Some(hm(12, 0));
    rec.break_end = Some(hm(12, 30));

    let text = encode(&rec).unwrap();
    assert!(text.ends_with("Total Work Hours: -2h -30m\n"));
}

#[test]
fn test_round_trip_reproduces_fields() {
    let records = vec![
        sample_record(),
        WorkLogRecord {
            report_date: date(29, 2, 2024),
            in_time: Some(hm(0, 0)),
            out_time: Some(hm(23, 59)),
            break_start: Some(hm(12, 0)),
            break_end: Some(hm(12, 0)),
            tasks_completed: vec!["Reviewed PR #42 (Today's hotfix)".into()],
            tasks_planned: vec![
                "IN: not a time line".into(),
                "  indented item".into(),
                "Yesterday's leftovers".into(),
            ],
        },
        WorkLogRecord {
            report_date: date(31, 12, 2025),
            in_time: Some(hm(7, 5)),
            out_time: Some(hm(12, 0)),
            break_start: Some(hm(9, 45)),
            break_end: Some(hm(10, 0)),
            tasks_completed: vec![],
            tasks_planned: vec!["Only one".into()],
        },
    ];

    for rec in records {
        let text = encode(&rec).unwrap();
        let decoded = decode(&text).expect("decodable");

        assert_eq!(decoded.in_time, rec.in_time);
        assert_eq!(decoded.out_time, rec.out_time);
        assert_eq!(decoded.break_start, rec.break_start);
        assert_eq!(decoded.break_end, rec.break_end);
        assert_eq!(decoded.tasks_completed, rec.tasks_completed);
        assert_eq!(decoded.tasks_planned, rec.tasks_planned);
        assert_eq!(decoded.header_date, Some(rec.report_date));
        assert!(!decoded.is_partial());
    }
}

#[test]
fn test_decode_zero_padded_hours_and_header() {
    let text = SAMPLE_TEXT
        .replace("IN: 9:00 AM", "IN: 09:00 AM")
        .replace("OUT: 6:00 PM", "OUT: 06:00 PM")
        .replace("BREAK: 1:00 PM - 2:00 PM", "BREAK: 01:00 PM - 02:00 PM");

    let decoded = decode(&text).unwrap();
    assert_eq!(decoded.header_date, Some(date(1, 1, 2025)));
    assert_eq!(decoded.in_time, Some(hm(9, 0)));
    assert_eq!(decoded.out_time, Some(hm(18, 0)));
    assert_eq!(decoded.break_start, Some(hm(13, 0)));
    assert_eq!(decoded.break_end, Some(hm(14, 0)));
}

#[test]
fn test_decode_tolerates_noise_and_crlf() {
    let text = "Some preamble the user typed\r\n\
                ## Yesterday\r\n\
                   IN:    8:30 am   \r\n\
                OUT: 5:15 PM\r\n\
                random note\r\n\
                BREAK: 12:00 PM-12:45 PM\r\n\
                   * indented bullet\r\n\
                *not a bullet\r\n\
                \r\n\
                ## Today\r\n\
                * Plan X\r\n\
                Total Work Hours: 8h 0m\r\n\
                * after total is ignored\r\n";

    let decoded = decode(text).unwrap();
    assert_eq!(decoded.in_time, Some(hm(8, 30)));
    assert_eq!(decoded.out_time, Some(hm(17, 15)));
    assert_eq!(decoded.break_start, Some(hm(12, 0)));
    assert_eq!(decoded.break_end, Some(hm(12, 45)));
    assert_eq!(decoded.tasks_completed, vec!["indented bullet".to_string()]);
    assert_eq!(decoded.tasks_planned, vec!["Plan X".to_string()]);
    assert_eq!(decoded.header_date, None);
}

#[test]
fn test_decode_malformed_times_leave_fields_unset() {
    let text = SAMPLE_TEXT
        .replace("IN: 9:00 AM", "IN: whenever")
        .replace("BREAK: 1:00 PM - 2:00 PM", "BREAK: lunch");

    let decoded = decode(&text).unwrap();
    assert_eq!(decoded.in_time, None);
    assert_eq!(decoded.out_time, Some(hm(18, 0)));
    assert_eq!(decoded.break_start, None);
    assert_eq!(decoded.break_end, None);
    assert!(decoded.is_partial());
    assert_eq!(
        decoded.missing_fields(),
        vec!["IN", "BREAK start", "BREAK end"]
    );
    assert_eq!(decoded.tasks_completed.len(), 2);
}

#[test]
fn test_decode_only_today_marker() {
    let text = "Today\n* Write docs\n* Ship it\n";
    let decoded = decode(text).unwrap();

    assert!(decoded.tasks_completed.is_empty());
    assert_eq!(decoded.tasks_planned, vec!["Write docs", "Ship it"]);
    assert!(decoded.is_partial());
    assert!(decoded.missing_fields().contains(&"Yesterday section"));
}

#[test]
fn test_decode_only_yesterday_marker_runs_to_end() {
    let text = "Yesterday\nIN: 9:00 AM\n* Done 1\n* Done 2\n";
    let decoded = decode(text).unwrap();

    assert_eq!(decoded.tasks_completed, vec!["Done 1", "Done 2"]);
    assert!(decoded.tasks_planned.is_empty());
    assert!(decoded.missing_fields().contains(&"Today section"));
}

#[test]
fn test_decode_without_markers_is_malformed() {
    let text = "Meeting notes\nIN: 9:00 AM\n* something\n";
    assert!(matches!(decode(text), Err(AppError::MalformedDocument)));
    assert!(matches!(decode(""), Err(AppError::MalformedDocument)));
}

#[test]
fn test_decode_drops_bare_bullets() {
    let mut rec = sample_record();
    rec.tasks_planned = vec![];
    let decoded = decode(&encode(&rec).unwrap()).unwrap();
    assert!(decoded.tasks_planned.is_empty());
}

#[test]
fn test_decode_finds_decorated_markers() {
    let bold = "Work Status [01-01-2025]\n\
                **Yesterday**\n\
                IN: 9:00 AM\n\
                OUT: 6:00 PM\n\
                BREAK: 1:00 PM - 2:00 PM\n\
                ---\n\
                * Task A\n\
                \n\
                **Today**\n\
                ---\n\
                * Task C\n\
                \n\
                **Total Work Hours**: 8h 0m\n";

    let decoded = decode(bold).unwrap();
    assert_eq!(decoded.header_date, Some(date(1, 1, 2025)));
    assert_eq!(decoded.in_time, Some(hm(9, 0)));
    assert_eq!(decoded.tasks_completed, vec!["Task A"]);
    assert_eq!(decoded.tasks_planned, vec!["Task C"]);
    assert!(!decoded.is_partial());

    let ruled = "=== Yesterday ===\n* Task A\n=== Today ===\n* Task C\n";
    let decoded = decode(ruled).unwrap();
    assert_eq!(decoded.tasks_completed, vec!["Task A"]);
    assert_eq!(decoded.tasks_planned, vec!["Task C"]);
}

#[test]
fn test_decode_marker_words_inside_tasks_stay_tasks() {
    let text = "Yesterday\n* Fixed Today's build\n* Prepared Total Work Hours sheet\nToday\n* Plan\n";
    let decoded = decode(text).unwrap();

    assert_eq!(
        decoded.tasks_completed,
        vec!["Fixed Today's build", "Prepared Total Work Hours sheet"]
    );
    assert_eq!(decoded.tasks_planned, vec!["Plan"]);
}
