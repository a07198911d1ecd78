// UTF-8 safety: multi-byte text must chunk without panics and every
// offset must land on a character boundary

use docvec::core::ingest::Chunker;

fn assert_char_safe(text: &str, chunk_size: usize, overlap: usize) -> usize {
    let chunker = Chunker::new(chunk_size, overlap).unwrap();
    let chunks = chunker.chunk_text(text, "utf8.txt");

    for c in &chunks {
        assert!(text.is_char_boundary(c.start_offset));
        assert!(text.is_char_boundary(c.end_offset));
        assert!(c.char_len() <= chunk_size);
        assert!(text[c.start_offset..c.end_offset].contains(c.text.as_str()));
    }

    chunks.len()
}

#[test]
fn test_emoji_text() {
    let text = "🎉🚀✨ launch party 🎊. ".repeat(100);
    assert!(assert_char_safe(&text, 120, 20) > 1);
}

#[test]
fn test_cjk_text() {
    let text = "中文文本处理测试。日本語のテキスト。한국어 텍스트. ".repeat(80);
    assert!(assert_char_safe(&text, 200, 30) > 1);
}

#[test]
fn test_cyrillic_sentences() {
    let text = "Привет мир. Это тест! Работает? ".repeat(60);
    assert!(assert_char_safe(&text, 150, 25) > 1);
}

#[test]
fn test_mixed_scripts_with_paragraphs() {
    let text = "English, العربية, עברית and Ελληνικά.\n\nNext paragraph 🌍\n\n".repeat(50);
    assert!(assert_char_safe(&text, 100, 10) > 1);
}

#[test]
fn test_sizes_are_in_characters() {
    // 4 bytes per char; byte-based sizing would produce 4x the chunks
    let text = "😀".repeat(100);
    let chunker = Chunker::new(50, 0).unwrap();
    let chunks = chunker.chunk_text(&text, "faces.txt");

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].char_len(), 50);
    assert_eq!(chunks[0].end_offset, 200);
}
