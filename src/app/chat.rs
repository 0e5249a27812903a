use chrono::{DateTime, Local};

use crate::responder;

const GREETING: &str =
    "Hi! I can help you find information from your transcriptions. What would you like to know?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the chat transcript. Appended once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    /// Unique, monotonic by creation order.
    pub seq: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

/// Append-only chat transcript, seeded with the assistant greeting.
/// Replies are delivered separately (after the UI's typing delay) and are
/// guarded by the sequence number of the user message they answer, so a
/// cancelled or stale delivery is a no-op.
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    next_seq: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            next_seq: 0,
        };
        session.append(Role::Assistant, GREETING.to_string());
        session
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a user message. Whitespace-only input is rejected and nothing
    /// is appended. Returns the new message's seq on success.
    pub fn submit(&mut self, input: &str) -> Option<u64> {
        if input.trim().is_empty() {
            return None;
        }
        Some(self.append(Role::User, input.to_string()))
    }

    /// Append the assistant's answer to the user message identified by
    /// `user_seq`. Unknown seqs (e.g. a timer that outlived its message)
    /// deliver nothing.
    pub fn deliver_reply(&mut self, user_seq: u64) -> Option<&ChatMessage> {
        let question = self
            .messages
            .iter()
            .find(|m| m.seq == user_seq && m.role == Role::User)?;
        let reply = responder::respond(&question.content).to_string();
        let seq = self.append(Role::Assistant, reply);
        self.messages.iter().find(|m| m.seq == seq)
    }

    fn append(&mut self, role: Role, content: String) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.messages.push(ChatMessage {
            seq,
            role,
            content,
            timestamp: Local::now(),
        });
        seq
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_contains_exactly_the_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        let greeting = &session.messages()[0];
        assert_eq!(greeting.role, Role::Assistant);
        assert_eq!(greeting.content, GREETING);
    }

    #[test]
    fn submit_appends_a_user_message() {
        let mut session = ChatSession::new();
        let seq = session.submit("What about my meeting?").unwrap();
        let message = session.messages().last().unwrap();
        assert_eq!(message.seq, seq);
        assert_eq!(message.role, Role::User);
        assert_eq!(message.content, "What about my meeting?");
    }

    #[test]
    fn whitespace_only_input_is_rejected() {
        let mut session = ChatSession::new();
        assert!(session.submit("   ").is_none());
        assert!(session.submit("").is_none());
        assert!(session.submit("\n\t").is_none());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn delivered_reply_comes_from_the_responder() {
        let mut session = ChatSession::new();
        let seq = session.submit("What about my meeting?").unwrap();
        let reply = session.deliver_reply(seq).unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, responder::respond("What about my meeting?"));
    }

    #[test]
    fn reply_for_unknown_seq_is_a_no_op() {
        let mut session = ChatSession::new();
        session.submit("groceries?");
        let before = session.messages().len();
        assert!(session.deliver_reply(999).is_none());
        assert_eq!(session.messages().len(), before);
    }

    #[test]
    fn reply_cannot_target_an_assistant_message() {
        let mut session = ChatSession::new();
        let greeting_seq = session.messages()[0].seq;
        assert!(session.deliver_reply(greeting_seq).is_none());
    }

    #[test]
    fn seqs_are_unique_and_monotonic() {
        let mut session = ChatSession::new();
        let first = session.submit("one").unwrap();
        session.deliver_reply(first);
        let second = session.submit("two").unwrap();
        let seqs: Vec<_> = session.messages().iter().map(|m| m.seq).collect();
        let mut sorted = seqs.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(seqs, sorted);
        assert!(second > first);
    }

    #[test]
    fn overlapping_replies_each_answer_their_own_question() {
        let mut session = ChatSession::new();
        let first = session.submit("about my workout").unwrap();
        let second = session.submit("and my travel plans").unwrap();
        let second_reply = session.deliver_reply(second).unwrap().content.clone();
        let first_reply = session.deliver_reply(first).unwrap().content.clone();
        assert_eq!(second_reply, responder::respond("and my travel plans"));
        assert_eq!(first_reply, responder::respond("about my workout"));
    }
}
