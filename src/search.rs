use crate::library::TranscriptionRecord;

/// Filter the library by a case-insensitive substring match on title or
/// body text. An empty query matches everything. Corpus order is kept;
/// there is no ranking or tokenization.
pub fn filter<'a>(
    query: &str,
    corpus: &'a [TranscriptionRecord],
) -> Vec<&'a TranscriptionRecord> {
    let needle = query.to_lowercase();
    corpus
        .iter()
        .filter(|record| {
            record.title.to_lowercase().contains(&needle)
                || record.text.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::SAVED_TRANSCRIPTIONS;

    #[test]
    fn empty_query_returns_whole_corpus_in_order() {
        let results = filter("", SAVED_TRANSCRIPTIONS);
        assert_eq!(results.len(), SAVED_TRANSCRIPTIONS.len());
        let ids: Vec<_> = results.iter().map(|r| r.id).collect();
        let expected: Vec<_> = SAVED_TRANSCRIPTIONS.iter().map(|r| r.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn dentist_matches_exactly_the_voice_memo() {
        let results = filter("dentist", SAVED_TRANSCRIPTIONS);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Voice Memo");
    }

    #[test]
    fn matching_is_case_insensitive_on_title_and_text() {
        let by_title = filter("MEETING", SAVED_TRANSCRIPTIONS);
        assert!(by_title.iter().any(|r| r.title == "Meeting Notes"));

        let by_text = filter("Quantum Mechanics", SAVED_TRANSCRIPTIONS);
        assert_eq!(by_text.len(), 1);
        assert_eq!(by_text[0].title, "Lecture Notes");
    }

    #[test]
    fn results_are_a_subsequence_of_the_corpus() {
        let results = filter("the", SAVED_TRANSCRIPTIONS);
        let mut last_index = 0;
        for record in results {
            let index = SAVED_TRANSCRIPTIONS
                .iter()
                .position(|r| r.id == record.id)
                .unwrap();
            assert!(index >= last_index);
            last_index = index;
        }
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        assert!(filter("zebra crossing", SAVED_TRANSCRIPTIONS).is_empty());
    }
}
