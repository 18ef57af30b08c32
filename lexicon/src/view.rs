//! Display-ready projection of an [`Entry`]. Nothing here is stored; the
//! renderer builds a view each time it draws.

use std::collections::HashSet;

use dictionary::{Definition, Entry, License, Meaning, Phonetic};

#[derive(Debug, PartialEq)]
pub struct EntryView<'a> {
    pub word: &'a str,
    pub phonetics: Vec<PhoneticView<'a>>,
    pub meanings: Vec<MeaningView<'a>>,
    pub source: Option<&'a str>,
    pub license: Option<&'a License>,
}

#[derive(Debug, PartialEq)]
pub struct PhoneticView<'a> {
    pub text: &'a str,
    pub audio: Option<&'a str>,
}

#[derive(Debug, PartialEq)]
pub struct MeaningView<'a> {
    pub part_of_speech: String,
    /// 1-based position for display, definition
    pub definitions: Vec<(usize, &'a Definition)>,
    pub synonyms: &'a [String],
    pub antonyms: &'a [String],
}

impl<'a> EntryView<'a> {
    pub fn new(entry: &'a Entry) -> Self {
        Self {
            word: &entry.word,
            phonetics: unique_phonetics(&entry.phonetics),
            meanings: entry.meanings.iter().map(MeaningView::new).collect(),
            source: entry.source_urls.first().map(String::as_str),
            license: entry.license.as_ref(),
        }
    }
}

impl<'a> MeaningView<'a> {
    fn new(meaning: &'a Meaning) -> Self {
        Self {
            part_of_speech: meaning.part_of_speech.to_string(),
            definitions: meaning
                .definitions
                .iter()
                .enumerate()
                .map(|(index, definition)| (index + 1, definition))
                .collect(),
            synonyms: &meaning.synonyms,
            antonyms: &meaning.antonyms,
        }
    }
}

/// Keeps the first phonetic for every distinct text, in response order.
/// Phonetics without text are dropped, an empty audio url counts as none.
pub fn unique_phonetics(phonetics: &[Phonetic]) -> Vec<PhoneticView<'_>> {
    let mut seen = HashSet::new();
    phonetics
        .iter()
        .filter_map(|phonetic| {
            let text = phonetic.text.as_deref().filter(|text| !text.is_empty())?;
            if !seen.insert(text) {
                return None;
            }
            Some(PhoneticView {
                text,
                audio: phonetic.audio.as_deref().filter(|audio| !audio.is_empty()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phonetic(text: Option<&str>, audio: Option<&str>) -> Phonetic {
        Phonetic {
            text: text.map(str::to_owned),
            audio: audio.map(str::to_owned),
            source_url: None,
            license: None,
        }
    }

    #[test]
    fn duplicate_phonetics_are_removed_in_order() {
        let phonetics = vec![
            phonetic(Some("/kæt/"), None),
            phonetic(Some("/kæt/"), None),
            phonetic(Some("/kat/"), None),
        ];
        let unique = unique_phonetics(&phonetics);
        let texts: Vec<&str> = unique.iter().map(|phonetic| phonetic.text).collect();
        assert_eq!(texts, vec!["/kæt/", "/kat/"]);
    }

    #[test]
    fn first_seen_phonetic_wins() {
        let phonetics = vec![
            phonetic(Some("/kæt/"), Some("")),
            phonetic(Some("/kæt/"), Some("https://example.com/cat.mp3")),
        ];
        let unique = unique_phonetics(&phonetics);
        assert_eq!(
            unique,
            vec![PhoneticView {
                text: "/kæt/",
                audio: None
            }]
        );
    }

    #[test]
    fn phonetics_without_text_are_dropped() {
        let phonetics = vec![
            phonetic(None, Some("https://example.com/a.mp3")),
            phonetic(Some(""), None),
            phonetic(Some("/ə/"), Some("https://example.com/b.mp3")),
        ];
        let unique = unique_phonetics(&phonetics);
        assert_eq!(
            unique,
            vec![PhoneticView {
                text: "/ə/",
                audio: Some("https://example.com/b.mp3")
            }]
        );
    }

    #[test]
    fn entry_view_numbers_definitions_and_picks_first_source() {
        let entry: Entry = serde_json::from_str(
            r#"{
                "word": "run",
                "meanings": [{
                    "partOfSpeech": "verb",
                    "definitions": [
                        {"definition": "To move swiftly."},
                        {"definition": "To manage.", "example": "She runs the shop."}
                    ],
                    "synonyms": ["sprint"]
                }],
                "sourceUrls": ["https://en.wiktionary.org/wiki/run", "https://example.com/run"]
            }"#,
        )
        .unwrap();
        let view = EntryView::new(&entry);
        assert_eq!(view.word, "run");
        assert!(view.phonetics.is_empty());
        assert_eq!(view.source, Some("https://en.wiktionary.org/wiki/run"));
        assert_eq!(view.license, None);

        let meaning = &view.meanings[0];
        assert_eq!(meaning.part_of_speech, "verb");
        let numbers: Vec<usize> = meaning.definitions.iter().map(|(number, _)| *number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(meaning.definitions[1].1.example.as_deref(), Some("She runs the shop."));
        assert_eq!(meaning.synonyms, &["sprint".to_owned()][..]);
        assert!(meaning.antonyms.is_empty());
    }
}
