use std::fs;
use tempfile::TempDir;

use mindcare_core::traits::{AppointmentStore, FaqStore};
use mindcare_core::types::{AppointmentRecord, AppointmentStatus};
use mindcare_core::Error;
use mindcare_store::{JsonlAppointmentStore, JsonlFaqStore};

#[test]
fn faq_store_reads_entries_in_file_order_and_skips_blank_lines() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("faq.jsonl");
    fs::write(
        &path,
        concat!(
            r#"{"QuestionID": 1, "Question": "What is anxiety", "Answer": "A feeling of worry."}"#,
            "\n\n",
            r#"{"question": "What is depression", "answer": "A mood disorder."}"#,
            "\n",
        ),
    )
    .unwrap();

    let entries = JsonlFaqStore::new(&path).list_all().expect("list");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, Some(1));
    assert_eq!(entries[0].question, "What is anxiety");
    assert_eq!(entries[1].answer, "A mood disorder.");
}

#[test]
fn empty_faq_file_is_an_empty_corpus() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("faq.jsonl");
    fs::write(&path, "").unwrap();

    assert!(JsonlFaqStore::new(&path).list_all().expect("list").is_empty());
}

#[test]
fn missing_faq_file_is_a_store_error() {
    let tmp = TempDir::new().unwrap();
    let err = JsonlFaqStore::new(tmp.path().join("nope.jsonl")).list_all().expect_err("missing");
    assert!(matches!(err, Error::Store(_)));
    assert!(err.to_string().contains("nope.jsonl"));
}

#[test]
fn malformed_faq_line_names_the_line() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("faq.jsonl");
    fs::write(&path, "{\"Question\": \"q\", \"Answer\": \"a\"}\nnot json\n").unwrap();

    let err = JsonlFaqStore::new(&path).list_all().expect_err("bad line");
    assert!(err.to_string().contains("line 2"), "got: {err}");
}

#[test]
fn appointment_store_appends_one_line_per_put() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested/appointments.jsonl");
    let store = JsonlAppointmentStore::new(&path);
    assert!(store.read_all().expect("read").is_empty());

    let first = AppointmentRecord::confirmed("REF-AAAA0001", "Ana", "Monday", "10am", "Therapy");
    let second = AppointmentRecord::confirmed("REF-BBBB0002", "Ben", "Tuesday", "2pm", "Psychiatry");
    store.put(&first).expect("put");
    store.put(&second).expect("put");

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);

    let records = store.read_all().expect("read");
    assert_eq!(records, vec![first, second]);
    assert!(records.iter().all(|r| r.status == AppointmentStatus::Confirmed));
}
