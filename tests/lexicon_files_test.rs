use nahuatl_nlp::analysis::orthography::Alphabet;
use nahuatl_nlp::error::{LoadError, NahuatlError, Result};
use nahuatl_nlp::morphology::{Lexicon, LexiconBuilder, MorphemeClass, Segmenter};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

fn write_wordlist(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_several_wordlists() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let affixes = write_wordlist(
        &dir,
        "affixes.tsv",
        "# affixes\nni\tprefix\tsubject\nk\tprefix\tobject\nLi\tsuffix\tabsolutive\n",
    );
    let roots = write_wordlist(
        &dir,
        "roots.tsv",
        "\nitta\troot\tverb\npano\troot\nni\tsuffix\n",
    );

    let lexicon = Lexicon::load(&[&affixes, &roots])?;
    assert_eq!(lexicon.len(), 5);
    assert_eq!(
        lexicon.lookup("ni"),
        BTreeSet::from([MorphemeClass::Prefix, MorphemeClass::Suffix])
    );
    assert!(lexicon.lookup("nikitta").is_empty());
    assert_eq!(lexicon.longest_prefix_matches("nikitta"), vec![2]);

    let stats = lexicon.stats();
    assert_eq!(stats.prefixes, 2);
    assert_eq!(stats.roots, 2);
    assert_eq!(stats.suffixes, 2);

    let segmenter = Segmenter::new(Arc::new(lexicon));
    let segmentation = segmenter.segment("nikitta").unwrap();
    assert_eq!(segmentation.morphemes(), vec!["ni", "k", "itta"]);
    Ok(())
}

#[test]
fn test_duplicate_lines_merge_features() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let first = write_wordlist(&dir, "first.tsv", "kal\troot\tnoun\n");
    let second = write_wordlist(&dir, "second.tsv", "kal\troot\tplace\nkal\troot\n");

    let lexicon = Lexicon::load(&[first, second])?;
    let entries = lexicon.entries("kal");
    assert_eq!(entries.len(), 1);
    assert!(entries[0].has_feature("noun"));
    assert!(entries[0].has_feature("place"));
    Ok(())
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.tsv");

    match Lexicon::load(&[&missing]) {
        Err(NahuatlError::Load(LoadError::Unreadable { origin, .. })) => {
            assert!(origin.ends_with("missing.tsv"));
        }
        other => panic!("expected an unreadable source, got {other:?}"),
    }
}

#[test]
fn test_errors_name_the_line() {
    let dir = TempDir::new().unwrap();

    let columns = write_wordlist(&dir, "columns.tsv", "ni\tprefix\n\nkal\n");
    assert!(matches!(
        Lexicon::load(&[columns]),
        Err(NahuatlError::Load(LoadError::ColumnCount { line: 3, found: 1, .. }))
    ));

    let class = write_wordlist(&dir, "class.tsv", "ni\tprefix\nkal\tnoun\n");
    assert!(matches!(
        Lexicon::load(&[class]),
        Err(NahuatlError::Load(LoadError::UnknownClass { line: 2, .. }))
    ));

    let characters = write_wordlist(&dir, "characters.tsv", "# roots\nkuika\troot\n");
    match Lexicon::load(&[characters]) {
        Err(NahuatlError::Load(LoadError::InvalidCharacter {
            line,
            surface,
            character,
            ..
        })) => {
            assert_eq!(line, 2);
            assert_eq!(surface, "kuika");
            assert_eq!(character, 'u');
        }
        other => panic!("expected an invalid character, got {other:?}"),
    }
}

#[test]
fn test_conflicting_encodings() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = write_wordlist(
        &dir,
        "accents.tsv",
        "t\u{e1}n\troot\nta\u{301}n\troot\n",
    );

    let result = LexiconBuilder::new()
        .with_alphabet(Alphabet::new("tan\u{e1}\u{301}")?)
        .add_file(&path);
    match result {
        Err(NahuatlError::Load(LoadError::ConflictingEncoding {
            line,
            surface,
            existing,
            ..
        })) => {
            assert_eq!(line, 2);
            assert_eq!(surface, "ta\u{301}n");
            assert_eq!(existing, "t\u{e1}n");
        }
        other => panic!("expected conflicting encodings, got {:?}", other.err()),
    }
    Ok(())
}
