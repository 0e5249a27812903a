/// A saved transcription. The sample library is fixed at compile time;
/// records are never created or mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptionRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    /// Display label, not parsed ("Dec 17, 2024", "2 hours ago").
    pub date: &'static str,
    /// Recording length as shown in the list. Recents don't carry one.
    pub duration: Option<&'static str>,
}

/// Full library shown (and searched) in the Saves view.
pub const SAVED_TRANSCRIPTIONS: &[TranscriptionRecord] = &[
    TranscriptionRecord {
        id: "1",
        title: "Meeting Notes",
        text: "Discussed project timeline and deliverables for Q1. Key decisions: Launch date moved to March 15th, budget approved for additional resources, team expansion planned for February. Action items assigned to each department head.",
        date: "Dec 17, 2024",
        duration: Some("5:32"),
    },
    TranscriptionRecord {
        id: "2",
        title: "Grocery List",
        text: "Milk, eggs, bread, chicken, vegetables, fruits, and yogurt for the week ahead. Don't forget organic produce and whole grain items.",
        date: "Dec 17, 2024",
        duration: Some("1:15"),
    },
    TranscriptionRecord {
        id: "3",
        title: "Voice Memo",
        text: "Remember to call dentist on Monday morning to reschedule appointment. Also need to pick up prescription at pharmacy before 6 PM. Update insurance information online.",
        date: "Dec 16, 2024",
        duration: Some("2:08"),
    },
    TranscriptionRecord {
        id: "4",
        title: "Lecture Notes",
        text: "Professor covered chapter 5 on quantum mechanics. Important concepts: wave-particle duality, uncertainty principle, quantum entanglement. Quiz scheduled for next week covering chapters 4-6.",
        date: "Dec 16, 2024",
        duration: Some("45:20"),
    },
    TranscriptionRecord {
        id: "5",
        title: "Ideas for Blog",
        text: "Write about latest AI developments, focus on speech recognition improvements and practical applications in daily life. Include examples of voice assistants and transcription tools.",
        date: "Dec 15, 2024",
        duration: Some("3:42"),
    },
    TranscriptionRecord {
        id: "6",
        title: "Team Discussion",
        text: "Brainstorming session for new product features. Team suggested improvements to user interface and onboarding process. Consider mobile-first design and accessibility features.",
        date: "Dec 14, 2024",
        duration: Some("28:15"),
    },
    TranscriptionRecord {
        id: "7",
        title: "Recipe Instructions",
        text: "Pasta carbonara recipe: Cook pasta al dente, fry bacon until crispy, mix eggs with parmesan, combine everything off heat. Season with black pepper and serve immediately.",
        date: "Dec 13, 2024",
        duration: Some("4:22"),
    },
    TranscriptionRecord {
        id: "8",
        title: "Book Summary",
        text: "Finished reading chapter 8 of productivity book. Key takeaways: time blocking, priority matrix, elimination of non-essential tasks. Apply these techniques starting next week.",
        date: "Dec 12, 2024",
        duration: Some("6:18"),
    },
    TranscriptionRecord {
        id: "9",
        title: "Travel Plans",
        text: "Trip to San Francisco next month. Check flights, book hotel in downtown area, reserve rental car. Visit Golden Gate Bridge, Alcatraz, and Fisherman's Wharf.",
        date: "Dec 11, 2024",
        duration: Some("3:55"),
    },
    TranscriptionRecord {
        id: "10",
        title: "Workout Routine",
        text: "Monday: Upper body strength training. Tuesday: Cardio and core. Wednesday: Legs and glutes. Thursday: Rest day. Friday: Full body circuit. Saturday: Yoga and stretching.",
        date: "Dec 10, 2024",
        duration: Some("2:40"),
    },
];

/// Recent transcriptions shown as chips under the record control on Home.
pub const RECENT_TRANSCRIPTIONS: &[TranscriptionRecord] = &[
    TranscriptionRecord {
        id: "1",
        title: "Meeting Notes",
        text: "Discussed project timeline and deliverables for Q1. Key decisions: Launch date moved to March 15th...",
        date: "2 hours ago",
        duration: None,
    },
    TranscriptionRecord {
        id: "2",
        title: "Grocery List",
        text: "Milk, eggs, bread, chicken, vegetables, fruits, and yogurt for the week ahead...",
        date: "5 hours ago",
        duration: None,
    },
    TranscriptionRecord {
        id: "3",
        title: "Voice Memo",
        text: "Remember to call dentist on Monday morning to reschedule appointment. Also need to pick up prescription...",
        date: "Yesterday",
        duration: None,
    },
    TranscriptionRecord {
        id: "4",
        title: "Lecture Notes",
        text: "Professor covered chapter 5 on quantum mechanics. Important concepts: wave-particle duality, uncertainty principle...",
        date: "Yesterday",
        duration: None,
    },
    TranscriptionRecord {
        id: "5",
        title: "Ideas for Blog",
        text: "Write about latest AI developments, focus on speech recognition improvements and practical applications...",
        date: "2 days ago",
        duration: None,
    },
    TranscriptionRecord {
        id: "6",
        title: "Team Discussion",
        text: "Brainstorming session for new product features. Team suggested improvements to user interface and onboarding...",
        date: "3 days ago",
        duration: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn saved_library_has_ten_records_with_unique_ids() {
        assert_eq!(SAVED_TRANSCRIPTIONS.len(), 10);
        let ids: HashSet<_> = SAVED_TRANSCRIPTIONS.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), SAVED_TRANSCRIPTIONS.len());
    }

    #[test]
    fn recents_have_six_records_without_durations() {
        assert_eq!(RECENT_TRANSCRIPTIONS.len(), 6);
        assert!(RECENT_TRANSCRIPTIONS.iter().all(|r| r.duration.is_none()));
    }

    #[test]
    fn saved_records_all_carry_durations() {
        assert!(SAVED_TRANSCRIPTIONS.iter().all(|r| r.duration.is_some()));
    }
}
