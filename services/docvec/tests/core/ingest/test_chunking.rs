// Chunking behaviour: window sizes, boundary selection, overlap

use docvec::core::error::DocvecError;
use docvec::core::ingest::chunker::{chunk, BOUNDARY_MARKERS};
use docvec::core::ingest::Chunker;

#[test]
fn test_short_text_is_single_trimmed_chunk() {
    let text = "   A fifty character note that needs no splitting.\n";
    let chunks = chunk(text, 1000, 200).unwrap();

    assert_eq!(
        chunks,
        vec!["A fifty character note that needs no splitting.".to_string()]
    );
}

#[test]
fn test_text_exactly_chunk_size_is_single_chunk() {
    let text = "x".repeat(1000);
    let chunks = chunk(&text, 1000, 200).unwrap();

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].len(), 1000);
}

#[test]
fn test_blank_text_yields_nothing() {
    assert!(chunk("", 1000, 200).unwrap().is_empty());
    assert!(chunk(" \n\t ", 1000, 200).unwrap().is_empty());
}

#[test]
fn test_zero_chunk_size_rejected() {
    let err = chunk("anything", 0, 0).unwrap_err();
    assert!(matches!(err, DocvecError::ConfigError(_)));
}

#[test]
fn test_repeated_sentences_break_on_period() {
    let text = "A. ".repeat(500);
    let chunker = Chunker::new(1000, 200).unwrap();
    let chunks = chunker.chunk_text(&text, "a.txt");

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].start_offset, 0);
    assert_eq!(chunks[0].end_offset, 999);
    assert!(chunks[0].text.ends_with("A."));
    assert_eq!(chunks[1].start_offset, 799);
    assert_eq!(chunks[1].end_offset, 1500);
}

#[test]
fn test_first_marker_wins_over_closer_paragraph_break() {
    let text = format!("{}. {}\n\n{}", "x".repeat(60), "y".repeat(20), "z".repeat(100));
    let chunks = chunk(&text, 100, 10).unwrap();

    assert_eq!(chunks[0], format!("{}.", "x".repeat(60)));
}

#[test]
fn test_distant_period_falls_through_to_paragraph_break() {
    let text = format!(
        "{}. {}\n\n{}",
        "a".repeat(10),
        "b".repeat(170),
        "c".repeat(218)
    );
    let chunks = chunk(&text, 200, 0).unwrap();

    assert_eq!(chunks[0], format!("{}. {}", "a".repeat(10), "b".repeat(170)));
}

#[test]
fn test_no_boundary_is_hard_cut() {
    let text = "0123456789ABCDEFGHIJ";
    let chunks = chunk(text, 10, 2).unwrap();

    assert_eq!(chunks, vec!["0123456789", "89ABCDEFGH", "GHIJ"]);
}

#[test]
fn test_windows_cover_text_without_gaps() {
    let text = "Sentence one is here. Another follows it! Does a third ask? \
                Yes.\n\nA new paragraph starts. "
        .repeat(40);
    let chunker = Chunker::new(300, 50).unwrap();
    let chunks = chunker.chunk_text(&text, "doc.md");

    assert!(chunks.len() > 1);
    assert_eq!(chunks[0].start_offset, 0);
    assert_eq!(chunks.last().unwrap().end_offset, text.len());

    for pair in chunks.windows(2) {
        assert!(pair[1].start_offset > pair[0].start_offset);
        assert!(pair[1].start_offset <= pair[0].end_offset);
    }
}

#[test]
fn test_chunks_never_exceed_chunk_size() {
    let text = "Word soup without many stops ".repeat(200);
    let chunker = Chunker::new(250, 40).unwrap();

    for c in chunker.chunk_text(&text, "soup.txt") {
        assert!(c.char_len() <= 250, "chunk too long: {}", c.char_len());
    }
}

#[test]
fn test_overlap_not_smaller_than_chunk_size_terminates() {
    let text = "abcdefghij".repeat(10);

    let equal = chunk(&text, 10, 10).unwrap();
    assert_eq!(equal.len(), 100);

    let larger = chunk(&text, 10, 50).unwrap();
    assert_eq!(larger.len(), 100);
    assert_eq!(larger.last().unwrap(), "j");
}

#[test]
fn test_labels_are_one_based() {
    let text = "0123456789ABCDEFGHIJ";
    let chunker = Chunker::new(10, 2).unwrap();
    let labels: Vec<_> = chunker
        .chunk_text(text, "report.pdf")
        .iter()
        .map(|c| c.label())
        .collect();

    assert_eq!(
        labels,
        vec![
            "report.pdf [Chunk 1]",
            "report.pdf [Chunk 2]",
            "report.pdf [Chunk 3]"
        ]
    );
}

#[test]
fn test_marker_priority_order() {
    assert_eq!(BOUNDARY_MARKERS, [". ", "! ", "? ", "\n\n"]);
}
