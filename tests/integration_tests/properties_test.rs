// tests/integration_tests/properties_test.rs
use proptest::prelude::*;
use smartnote::core::lexicon::is_stop_word;
use smartnote::core::text::word_tokens;
use smartnote::{NoteFormat, extract_structure, key_phrases, readability, word_frequency};

const NOTE_ALPHABET: &str = "[a-zA-Z0-9 #@\\[\\]\\.!?,:\\-\\*\n]{0,200}";

fn note_format() -> impl Strategy<Value = NoteFormat> {
    prop_oneof![Just(NoteFormat::Markdown), Just(NoteFormat::Text)]
}

proptest! {
    #[test]
    fn word_frequency_is_bounded_and_sorted(text in NOTE_ALPHABET, top in 0usize..30) {
        let ranked = word_frequency(&text, 3, top, false);
        let qualifying = word_tokens(&text, 3)
            .iter()
            .filter(|word| !is_stop_word(word))
            .count();

        prop_assert!(ranked.len() <= top);
        prop_assert!(ranked.iter().map(|(_, count)| count).sum::<usize>() <= qualifying);
        prop_assert!(ranked.windows(2).all(|pair| pair[0].1 >= pair[1].1));
    }

    #[test]
    fn key_phrases_contain_only_content_words(text in NOTE_ALPHABET) {
        for (phrase, count) in key_phrases(&text, 2, 4, 50) {
            prop_assert!(count >= 1);
            let words: Vec<&str> = phrase.split(' ').collect();
            prop_assert!((2..=4).contains(&words.len()));
            for word in words {
                prop_assert!(word.chars().count() >= 3, "short token {:?}", word);
                prop_assert!(!is_stop_word(word), "stop word {:?}", word);
            }
        }
    }

    #[test]
    fn flesch_score_stays_in_range(text in NOTE_ALPHABET) {
        let stats = readability(&text);
        prop_assert!((0.0..=100.0).contains(&stats.flesch_reading_ease));
        if stats.sentence_count == 0 || stats.word_count == 0 {
            prop_assert_eq!(stats.syllable_count, 0);
            prop_assert_eq!(stats.flesch_reading_ease, 0.0);
        }
    }

    #[test]
    fn extraction_is_idempotent(text in NOTE_ALPHABET, format in note_format()) {
        let first = extract_structure(&text, format);
        let second = extract_structure(&text, format);
        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(&a.headers, &b.headers);
                prop_assert_eq!(&a.tags, &b.tags);
                prop_assert_eq!(&a.keywords, &b.keywords);
                prop_assert_eq!(&a.todos, &b.todos);
                prop_assert!(a.tags.iter().all(|tag| !tag.is_empty()));
                prop_assert!(a.keywords.iter().all(|keyword| !keyword.is_empty()));
                if format == NoteFormat::Text {
                    prop_assert!(a.headers.is_empty());
                    prop_assert!(a.keywords.is_empty());
                }
                prop_assert_eq!(a.content, text);
            }
            (Err(_), Err(_)) => prop_assert!(text.trim().is_empty()),
            _ => prop_assert!(false, "extraction was not deterministic"),
        }
    }
}
