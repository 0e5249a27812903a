/// A set of trigger substrings mapped to one canned response. Groups are
/// tested in order; earlier groups win on overlapping keywords.
struct KeywordGroup {
    keywords: &'static [&'static str],
    response: &'static str,
}

const KEYWORD_GROUPS: &[KeywordGroup] = &[
    KeywordGroup {
        keywords: &["meeting", "project"],
        response: "Based on your recent meeting notes, the project launch is scheduled for March 15th with an approved budget for additional resources. The team expansion is planned for February.",
    },
    KeywordGroup {
        keywords: &["grocery", "food", "shop"],
        response: "From your grocery list transcription, you mentioned needing milk, eggs, bread, chicken, vegetables, fruits, and yogurt. You also noted to get organic produce and whole grain items.",
    },
    KeywordGroup {
        keywords: &["appointment", "dentist", "doctor"],
        response: "According to your voice memo, you need to call the dentist on Monday morning to reschedule your appointment and pick up a prescription before 6 PM.",
    },
    KeywordGroup {
        keywords: &["lecture", "quantum", "study"],
        response: "Your lecture notes cover quantum mechanics chapter 5, including wave-particle duality, uncertainty principle, and quantum entanglement. There's a quiz next week covering chapters 4-6.",
    },
    KeywordGroup {
        keywords: &["travel", "trip", "san francisco"],
        response: "Your travel plans include a trip to San Francisco next month. You want to visit Golden Gate Bridge, Alcatraz, and Fisherman's Wharf. Remember to check flights, book a downtown hotel, and reserve a rental car.",
    },
    KeywordGroup {
        keywords: &["workout", "exercise", "fitness"],
        response: "Your workout routine is: Monday - Upper body, Tuesday - Cardio and core, Wednesday - Legs and glutes, Thursday - Rest, Friday - Full body circuit, Saturday - Yoga and stretching.",
    },
];

const DEFAULT_RESPONSE: &str = "I can help you search through your transcriptions. Try asking about meetings, groceries, appointments, lectures, travel plans, or workouts.";

/// Answer a user message from the fixed keyword table. Case-folds the
/// input, returns the response of the first group with a matching
/// substring, or the default fallback. Total: always non-empty.
pub fn respond(input: &str) -> &'static str {
    let folded = input.to_lowercase();
    for group in KEYWORD_GROUPS {
        if group.keywords.iter().any(|kw| folded.contains(kw)) {
            return group.response;
        }
    }
    DEFAULT_RESPONSE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_reaches_its_group_response() {
        for group in KEYWORD_GROUPS {
            for keyword in group.keywords {
                assert_eq!(respond(keyword), group.response);
            }
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(respond("Tell me about SAN FRANCISCO"), KEYWORD_GROUPS[4].response);
        assert_eq!(respond("My DENTIST called"), KEYWORD_GROUPS[2].response);
    }

    #[test]
    fn earlier_group_wins_for_each_overlapping_pair() {
        // Every adjacent pair of groups, with one keyword from each in
        // reverse textual order, must resolve to the earlier group.
        for pair in KEYWORD_GROUPS.windows(2) {
            let input = format!("{} and {}", pair[1].keywords[0], pair[0].keywords[0]);
            assert_eq!(respond(&input), pair[0].response);
        }
    }

    #[test]
    fn grocery_beats_dentist_in_one_message() {
        assert_eq!(
            respond("add dentist floss to the grocery run"),
            KEYWORD_GROUPS[1].response
        );
    }

    #[test]
    fn unmatched_input_falls_back_to_default() {
        assert_eq!(respond("what's the weather like"), DEFAULT_RESPONSE);
        assert_eq!(respond(""), DEFAULT_RESPONSE);
    }

    #[test]
    fn responder_is_total_and_non_empty() {
        for input in ["", "   ", "xyzzy", "meeting", "日本語"] {
            assert!(!respond(input).is_empty());
        }
    }
}
