// Ingestor workflow against an in-memory sink

use crate::common::{create_test_services, RecordingSink, TestDocs};
use docvec::core::config::Config;
use docvec::core::error::{DocvecError, Result};
use docvec::core::extract::{ExtractorRegistry, TextExtractor};
use docvec::core::ingest::{Chunker, DocumentIngestor, FileWalker, ProcessedSet};
use docvec::core::services::Services;
use docvec::core::types::{Document, DocumentFormat};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct CountingExtractor {
    calls: Arc<AtomicUsize>,
}

impl TextExtractor for CountingExtractor {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn extract(&self, document: &Document) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(String::from_utf8_lossy(&document.bytes).into_owned())
    }
}

fn ingestor_with(sink: Arc<RecordingSink>) -> DocumentIngestor {
    create_test_services()
        .create_ingestor_with_sink(sink)
        .unwrap()
}

fn small_chunk_ingestor(sink: Arc<RecordingSink>) -> DocumentIngestor {
    let mut config = Config::default();
    config.ingest.chunk_size = 10;
    config.ingest.overlap = 2;

    Services::new(config)
        .unwrap()
        .create_ingestor_with_sink(sink)
        .unwrap()
}

#[tokio::test]
async fn test_ingest_fixture_collection() {
    let docs = TestDocs::small();
    let sink = RecordingSink::new();
    let mut ingestor = ingestor_with(sink.clone());

    let report = ingestor.ingest_directory(docs.path()).await.unwrap();

    assert_eq!(report.files_total, 4);
    assert_eq!(report.files_succeeded, 3);
    assert_eq!(report.files_failed(), 1);
    assert!(report.failures[0].path.ends_with("blank.txt"));
    assert_eq!(report.chunks_failed, 0);
    assert_eq!(report.chunks_submitted, sink.submissions().len());

    let labels = sink.labels();
    assert_eq!(labels.first().unwrap(), "guide.md [Chunk 1]");
    assert!(labels.contains(&"alpha.txt [Chunk 1]".to_string()));
    assert_eq!(labels.last().unwrap(), "beta.md [Chunk 1]");
}

#[tokio::test]
async fn test_submitted_content_is_trimmed_chunk_text() {
    let docs = TestDocs::with_files(&[("memo.txt", "\n\n  Quarterly memo body.  \n")]);
    let sink = RecordingSink::new();
    let mut ingestor = ingestor_with(sink.clone());

    ingestor.process_file(&docs.file("memo.txt")).await.unwrap();

    assert_eq!(
        sink.submissions(),
        vec![(
            "memo.txt [Chunk 1]".to_string(),
            "Quarterly memo body.".to_string()
        )]
    );
}

#[tokio::test]
async fn test_identical_content_under_another_name_is_skipped() {
    let docs = TestDocs::with_files(&[
        ("2024/report.txt", "Same bytes in both files."),
        ("archive/report-copy.txt", "Same bytes in both files."),
    ]);
    let sink = RecordingSink::new();
    let mut ingestor = ingestor_with(sink.clone());

    let report = ingestor.ingest_directory(docs.path()).await.unwrap();

    assert_eq!(report.files_succeeded, 2);
    assert_eq!(report.files_duplicate, 1);
    assert_eq!(sink.submissions().len(), 1);
    assert_eq!(ingestor.processed().len(), 1);
}

#[tokio::test]
async fn test_identical_content_is_extracted_once() {
    let docs = TestDocs::with_files(&[
        ("2024/report.txt", "Same bytes in both files."),
        ("archive/report-copy.txt", "Same bytes in both files."),
    ]);
    let sink = RecordingSink::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut registry = ExtractorRegistry::empty();
    registry.register(
        DocumentFormat::Txt,
        Box::new(CountingExtractor {
            calls: calls.clone(),
        }),
    );
    let mut ingestor = DocumentIngestor::new(
        Chunker::new(1000, 200).unwrap(),
        FileWalker::new(vec!["txt".to_string()], vec![], 10).unwrap(),
        Arc::new(registry),
        sink.clone(),
        Box::new(ProcessedSet::new()),
    );

    let report = ingestor.ingest_directory(docs.path()).await.unwrap();

    assert_eq!(report.files_total, 2);
    assert_eq!(report.files_duplicate, 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(sink.submissions().len(), 1);
}

#[tokio::test]
async fn test_same_name_different_content_both_processed() {
    let docs = TestDocs::with_files(&[
        ("a/notes.md", "First version."),
        ("b/notes.md", "Second version."),
    ]);
    let sink = RecordingSink::new();
    let mut ingestor = ingestor_with(sink.clone());

    ingestor.ingest_directory(docs.path()).await.unwrap();

    assert_eq!(
        sink.labels(),
        vec!["notes.md [Chunk 1]", "notes.md [Chunk 1]"]
    );
    assert_eq!(ingestor.processed().len(), 2);
}

#[tokio::test]
async fn test_failed_middle_chunk_does_not_stop_the_rest() {
    let docs = TestDocs::with_files(&[("three.txt", "0123456789ABCDEFGHIJ")]);
    let sink = RecordingSink::failing(&["three.txt [Chunk 2]"]);
    let mut ingestor = small_chunk_ingestor(sink.clone());

    let outcome = ingestor.process_file(&docs.file("three.txt")).await.unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.chunk_count, 3);
    assert_eq!(outcome.successful_chunks, 2);
    assert_eq!(
        sink.labels(),
        vec![
            "three.txt [Chunk 1]",
            "three.txt [Chunk 2]",
            "three.txt [Chunk 3]"
        ]
    );
    assert_eq!(ingestor.processed().len(), 1);
}

#[tokio::test]
async fn test_all_chunks_rejected_is_failure_and_retried_later() {
    let docs = TestDocs::with_files(&[
        ("first.txt", "Rejected content."),
        ("second.txt", "Rejected content."),
    ]);
    let sink = RecordingSink::failing(&["first.txt [Chunk 1]"]);
    let mut ingestor = ingestor_with(sink.clone());

    let report = ingestor.ingest_directory(docs.path()).await.unwrap();

    // first.txt was never recorded, so second.txt is not a duplicate
    assert_eq!(report.files_succeeded, 1);
    assert_eq!(report.files_duplicate, 0);
    assert_eq!(report.files_failed(), 1);
    assert_eq!(report.chunks_failed, 1);
    assert_eq!(sink.submissions().len(), 2);
}

#[tokio::test]
async fn test_unsupported_file_fails_without_io_side_effects() {
    let docs = TestDocs::with_files(&[("letter.rtf", "{\\rtf1 hello}")]);
    let sink = RecordingSink::new();
    let mut ingestor = ingestor_with(sink.clone());

    let err = ingestor
        .process_file(&docs.file("letter.rtf"))
        .await
        .unwrap_err();

    assert!(matches!(err, DocvecError::UnsupportedFormat(_)));
    assert!(sink.submissions().is_empty());

    let report = ingestor.ingest_directory(docs.path()).await.unwrap();
    assert_eq!(report.files_total, 0);
}

#[tokio::test]
async fn test_invalid_utf8_text_is_extraction_failure() {
    let mut docs = TestDocs::with_files(&[("good.txt", "Readable.")]);
    docs.add_bytes("bad.txt", &[0xff, 0xfe, 0x00, 0xc3, 0x28]);
    let sink = RecordingSink::new();
    let mut ingestor = ingestor_with(sink.clone());

    let report = ingestor.ingest_directory(docs.path()).await.unwrap();

    assert_eq!(report.files_succeeded, 1);
    assert_eq!(report.files_failed(), 1);
    assert!(report.failures[0].reason.contains("Extraction failed"));
}

#[cfg(feature = "pdf")]
#[tokio::test]
async fn test_corrupt_pdf_is_recorded_and_run_continues() {
    let docs = TestDocs::with_files(&[("broken.pdf", "not really a pdf"), ("ok.md", "Fine.")]);
    let sink = RecordingSink::new();
    let mut ingestor = ingestor_with(sink.clone());

    let report = ingestor.ingest_directory(docs.path()).await.unwrap();

    assert_eq!(report.files_total, 2);
    assert_eq!(report.files_succeeded, 1);
    assert!(report.failures[0].path.ends_with("broken.pdf"));
    assert_eq!(sink.labels(), vec!["ok.md [Chunk 1]"]);
}

#[tokio::test]
async fn test_missing_directory_aborts() {
    let docs = TestDocs::with_files(&[]);
    let mut ingestor = ingestor_with(RecordingSink::new());

    let err = ingestor
        .ingest_directory(&docs.file("missing"))
        .await
        .unwrap_err();

    assert!(err.is_fatal());
}
