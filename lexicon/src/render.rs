use std::io::{self, Write};

use dictionary::Entry;

use crate::state::{LookupState, Session};
use crate::view::EntryView;

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Lexicon")?;
    writeln!(out, "Type a word and press enter, :q to leave.")
}

pub fn footer(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Powered by Free Dictionary API")
}

pub fn render_session(out: &mut impl Write, session: &Session) -> io::Result<()> {
    match &session.phase {
        LookupState::Idle => Ok(()),
        LookupState::Loading => writeln!(out, "Searching..."),
        LookupState::Failure(message) => writeln!(out, "{message}"),
        LookupState::Success(entries) => {
            for (index, entry) in entries.iter().enumerate() {
                if index != 0 {
                    writeln!(out, "----------------------------------------")?;
                }
                render_entry(out, entry)?;
            }
            Ok(())
        }
    }
}

pub fn render_entry(out: &mut impl Write, entry: &Entry) -> io::Result<()> {
    let view = EntryView::new(entry);
    writeln!(out, "{}", view.word)?;
    for phonetic in &view.phonetics {
        match phonetic.audio {
            Some(audio) => writeln!(out, "  {}  ({audio})", phonetic.text)?,
            None => writeln!(out, "  {}", phonetic.text)?,
        }
    }
    for meaning in &view.meanings {
        writeln!(out, "    {}:", meaning.part_of_speech)?;
        for (number, definition) in &meaning.definitions {
            writeln!(out, "        {number}. {}", definition.definition)?;
            if let Some(example) = &definition.example {
                writeln!(out, "          \"{example}\"")?;
            }
            if !definition.synonyms.is_empty() {
                writeln!(out, "          Similar: {}", definition.synonyms.join(", "))?;
            }
            if !definition.antonyms.is_empty() {
                writeln!(out, "          Opposite: {}", definition.antonyms.join(", "))?;
            }
        }
        if !meaning.synonyms.is_empty() {
            writeln!(out, "      Synonyms: {}", meaning.synonyms.join(", "))?;
        }
        if !meaning.antonyms.is_empty() {
            writeln!(out, "      Antonyms: {}", meaning.antonyms.join(", "))?;
        }
    }
    if let Some(source) = view.source {
        writeln!(out, "Source: {source}")?;
    }
    if let Some(license) = view.license {
        writeln!(out, "License: {} ({})", license.name, license.url)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NOT_FOUND_MESSAGE;

    fn rendered(session: &Session) -> String {
        let mut out = Vec::new();
        render_session(&mut out, session).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn success(json: &str) -> Session {
        Session {
            query: String::new(),
            phase: LookupState::Success(serde_json::from_str(json).unwrap()),
        }
    }

    #[test]
    fn idle_renders_nothing() {
        assert_eq!(rendered(&Session::default()), "");
    }

    #[test]
    fn loading_and_failure() {
        let mut session = Session {
            query: "zzzzz".to_owned(),
            phase: LookupState::Loading,
        };
        assert_eq!(rendered(&session), "Searching...\n");
        session.phase = LookupState::Failure(NOT_FOUND_MESSAGE.to_owned());
        assert_eq!(rendered(&session), "Word not found. Please try another word.\n");
    }

    #[test]
    fn full_entry() {
        let session = success(
            r#"[{
                "word": "cat",
                "phonetics": [
                    {"text": "/kæt/", "audio": "https://example.com/cat-us.mp3"},
                    {"text": "/kæt/", "audio": "https://example.com/cat-uk.mp3"},
                    {"text": "/kat/", "audio": ""}
                ],
                "meanings": [{
                    "partOfSpeech": "noun",
                    "definitions": [
                        {"definition": "A small domesticated carnivorous mammal.", "example": "The cat sat on the mat.", "synonyms": ["feline"]},
                        {"definition": "A person.", "antonyms": ["dog"]}
                    ],
                    "synonyms": ["kitty"],
                    "antonyms": ["mouse"]
                }],
                "license": {"name": "CC BY-SA 3.0", "url": "https://creativecommons.org/licenses/by-sa/3.0"},
                "sourceUrls": ["https://en.wiktionary.org/wiki/cat"]
            }]"#,
        );
        let expected = "\
cat
  /kæt/  (https://example.com/cat-us.mp3)
  /kat/
    noun:
        1. A small domesticated carnivorous mammal.
          \"The cat sat on the mat.\"
          Similar: feline
        2. A person.
          Opposite: dog
      Synonyms: kitty
      Antonyms: mouse
Source: https://en.wiktionary.org/wiki/cat
License: CC BY-SA 3.0 (https://creativecommons.org/licenses/by-sa/3.0)
";
        assert_eq!(rendered(&session), expected);
    }

    #[test]
    fn absent_fields_render_nothing() {
        let session = success(r#"[{"word": "hello"}, {"word": "hallo"}]"#);
        assert_eq!(
            rendered(&session),
            "hello\n----------------------------------------\nhallo\n"
        );
    }

    #[test]
    fn empty_success_renders_nothing() {
        assert_eq!(rendered(&success("[]")), "");
    }
}
