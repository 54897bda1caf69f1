//! Scripted Chatbot
//!
//! Answers guest questions from a fixed table of trigger fragments. The first
//! fragment (in table order) found anywhere in the lower-cased question wins;
//! otherwise the bot replies with a fixed fallback.
//!
//! Before matching, punctuation becomes a space and the question is padded
//! with a space on each side, so a fragment starting with a space only
//! matches at the start of a word (`" pet "` skips "carpet").

use serde::{Deserialize, Serialize};

/// Who wrote a chat message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Bot => write!(f, "bot"),
        }
    }
}

/// A single chat line
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

/// Append-only message history for one widget session
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// One scripted answer and the fragments that trigger it
#[derive(Clone, Copy, Debug)]
pub struct FaqEntry {
    pub triggers: &'static [&'static str],
    pub answer: &'static str,
}

pub const GREETING: &str =
    "Hello! Welcome to Senate Guesthouse. Ask me about rooms, rates, facilities or directions.";

pub const FALLBACK_ANSWER: &str = "I'm sorry, I don't have an answer to that yet. \
     Please send us your question through the Contact page and we'll get back to you shortly.";

/// Buttons offered under the chat window
pub const QUICK_QUESTIONS: [&str; 5] = [
    "What are your room rates?",
    "What facilities do you offer?",
    "What time is check-in?",
    "Is breakfast included?",
    "Where are you located?",
];

/// Ordered lookup table; earlier entries win
pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        triggers: &[" rate", " price", " cost", "how much"],
        answer: "Our rooms start at $45 per night for a Standard Single, $65 for a Deluxe Double \
                 and $110 for the Family Suite. Rates include breakfast and Wi-Fi.",
    },
    FaqEntry {
        triggers: &["facilit", "amenit"],
        answer: "We offer free Wi-Fi, air conditioning, a garden terrace, secure parking, \
                 daily housekeeping and a shared lounge with a TV.",
    },
    FaqEntry {
        triggers: &["check-in", "check in", "checkin", "arrive", "arrival"],
        answer: "Check-in is from 2:00 PM. If you expect to arrive late, leave a note in the \
                 booking form and we'll wait for you.",
    },
    FaqEntry {
        triggers: &["check-out", "check out", "checkout"],
        answer: "Check-out is by 11:00 AM. We're happy to hold your luggage afterwards.",
    },
    FaqEntry {
        triggers: &["breakfast", " food", " meal"],
        answer: "Yes, a continental breakfast is included with every stay and served from \
                 7:00 to 10:00 AM.",
    },
    FaqEntry {
        triggers: &[" wifi", " wi-fi", "internet"],
        answer: "Free high-speed Wi-Fi is available in all rooms and common areas.",
    },
    FaqEntry {
        triggers: &[" park"],
        answer: "Secure on-site parking is free for guests.",
    },
    FaqEntry {
        triggers: &[" pet ", " pets ", " dog", " cat "],
        answer: "We're sorry, pets are not allowed at the guesthouse.",
    },
    FaqEntry {
        triggers: &["cancel", "refund"],
        answer: "Cancellations made at least 48 hours before arrival are free of charge.",
    },
    FaqEntry {
        triggers: &[" where ", "locat", "address", "direction"],
        answer: "We're a short walk from the town centre. Full directions are on the Contact page.",
    },
    FaqEntry {
        triggers: &[" book", "reserv", "availab"],
        answer: "You can request a booking on the Contact page. We'll confirm availability by email.",
    },
    FaqEntry {
        triggers: &["contact", " phone", " email", " call "],
        answer: "Reach us through the Contact page form and we'll reply within 24 hours.",
    },
];

/// Find the scripted answer for a question
pub fn lookup(question: &str) -> Option<&'static str> {
    let normalized: String = question
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { ' ' })
        .collect();
    let question = format!(" {normalized} ");
    FAQ.iter()
        .find(|entry| entry.triggers.iter().any(|t| question.contains(t)))
        .map(|entry| entry.answer)
}

/// Chat widget state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chatbot {
    transcript: Transcript,
}

impl Default for Chatbot {
    fn default() -> Self {
        Self::new()
    }
}

impl Chatbot {
    /// Start a session with the greeting already in the transcript
    pub fn new() -> Self {
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::bot(GREETING));
        Self { transcript }
    }

    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Record the question and the bot's reply; blank input is ignored
    pub fn ask(&mut self, question: &str) -> Option<&ChatMessage> {
        if question.trim().is_empty() {
            return None;
        }

        self.transcript.push(ChatMessage::user(question));

        let answer = lookup(question).unwrap_or_else(|| {
            tracing::debug!(question, "No scripted answer, using fallback");
            FALLBACK_ANSWER
        });
        self.transcript.push(ChatMessage::bot(answer));
        self.transcript.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_question() {
        let mut bot = Chatbot::new();
        let reply = bot.ask("what are your room rates").unwrap();
        assert_eq!(reply.sender, Sender::Bot);
        assert_eq!(reply.text, FAQ[0].answer);
    }

    #[test]
    fn test_gibberish_gets_fallback() {
        let mut bot = Chatbot::new();
        assert_eq!(bot.ask("asdfghjkl").unwrap().text, FALLBACK_ANSWER);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("IS BREAKFAST INCLUDED?"), lookup("is breakfast included?"));
        assert!(lookup("Do you have WIFI").is_some());
    }

    #[test]
    fn test_first_entry_in_table_order_wins() {
        // mentions both price and breakfast; price comes first in the table
        assert_eq!(lookup("what does breakfast cost"), Some(FAQ[0].answer));
    }

    #[test]
    fn test_transcript_records_raw_question_then_answer() {
        let mut bot = Chatbot::new();
        bot.ask("  Where ARE you?  ");

        let messages = bot.transcript().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0], ChatMessage::bot(GREETING));
        assert_eq!(messages[1], ChatMessage::user("  Where ARE you?  "));
        assert_eq!(messages[2].sender, Sender::Bot);
    }

    #[test]
    fn test_blank_question_is_ignored() {
        let mut bot = Chatbot::new();
        assert!(bot.ask("   ").is_none());
        assert_eq!(bot.transcript().len(), 1);
    }

    #[test]
    fn test_location_question() {
        let answer = lookup("Where are you located?").unwrap();
        assert!(answer.contains("town centre"));
    }

    #[test]
    fn test_every_quick_question_gets_its_own_answer() {
        let expected = [FAQ[0], FAQ[1], FAQ[2], FAQ[4], FAQ[9]];
        for (question, entry) in QUICK_QUESTIONS.into_iter().zip(expected) {
            assert_eq!(lookup(question), Some(entry.answer), "wrong answer for {question}");
        }
    }

    #[test]
    fn test_fragments_do_not_fire_inside_other_words() {
        assert_ne!(lookup("Is the carpet cleaned daily?"), Some(FAQ[7].answer));
        assert_ne!(lookup("Do rooms have separate beds?"), Some(FAQ[0].answer));
        assert_ne!(lookup("Do you have a facebook page?"), Some(FAQ[10].answer));
        assert_ne!(lookup("Do you offer airport pickup?"), Some(FAQ[1].answer));
    }

    #[test]
    fn test_word_fragments_match_with_punctuation() {
        assert_eq!(lookup("Can I bring my pet?"), Some(FAQ[7].answer));
        assert_eq!(lookup("Rates?"), Some(FAQ[0].answer));
        assert_eq!(lookup("I'd like to book a room"), Some(FAQ[10].answer));
    }
}
