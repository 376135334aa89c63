//! Local handling of questions about the conversation itself ("what was my
//! last message"). These are answered from the caller-supplied transcript
//! without paying for an upstream call.

use crate::models::chat::{ ConversationMessage, Sender };

const RECALL_KEYWORDS: [&str; 5] = [
    "last message",
    "previous message",
    "earlier message",
    "what did you say",
    "what did i ask",
];

pub const NO_HISTORY_REPLY: &str =
    "You haven't sent any previous messages in this conversation yet.";

/// Deliberately narrow: only these phrasings short-circuit the model call.
pub fn is_recall_question(text: &str) -> bool {
    let lowered = text.to_lowercase();
    RECALL_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Answers a recall question from the transcript. The newest user message is
/// the question itself, so the "last message" is the user entry before it.
pub fn recall_reply(messages: &[ConversationMessage]) -> String {
    let user_texts: Vec<&str> = messages
        .iter()
        .filter(|m| m.sender == Sender::User)
        .map(|m| m.text.as_str())
        .collect();

    if user_texts.len() < 2 {
        return NO_HISTORY_REPLY.to_string();
    }
    format!("Your last message was: \"{}\"", user_texts[user_texts.len() - 2])
}
