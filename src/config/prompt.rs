//! Prompt assembly: turns the knowledge base plus the live conversation into
//! the request sent upstream. Two strategies are supported; both guarantee
//! the final turn is user-side so the model is asked for the next reply.

use std::fmt;
use std::str::FromStr;

use crate::config::knowledge::ExampleEntry;
use crate::llm::{ ModelRequest, ModelTurn };
use crate::models::chat::{ ConversationMessage, Sender };
use crate::normalize::strip_training_labels;

/// Cue appended as the final user-side content so the model produces the
/// next `output` turn of the training format.
const OUTPUT_CUE: &str = "output:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyMode {
    /// Everything (examples, user turns, cue) concatenated into one text
    /// block sent as a single user turn.
    Flattened,
    /// One user turn holding the example block, then one role-tagged turn per
    /// conversation message, then a cue turn.
    Structured,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseAssemblyModeError {
    message: String,
}

impl fmt::Display for ParseAssemblyModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseAssemblyModeError {}

impl FromStr for AssemblyMode {
    type Err = ParseAssemblyModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flattened" => Ok(AssemblyMode::Flattened),
            "structured" => Ok(AssemblyMode::Structured),
            _ =>
                Err(ParseAssemblyModeError {
                    message: format!("Invalid assembly mode: '{}'", s),
                }),
        }
    }
}

/// Serializes the knowledge base in the model's training format, one
/// `input:`/`output:` pair per example, in order.
pub fn flatten_examples(examples: &[ExampleEntry]) -> String {
    let mut block = String::new();
    for example in examples {
        block.push_str("input: ");
        block.push_str(example.input);
        block.push('\n');
        block.push_str("output: ");
        block.push_str(example.output);
        block.push('\n');
    }
    block
}

pub fn build_model_request(
    examples: &[ExampleEntry],
    messages: &[ConversationMessage],
    mode: AssemblyMode
) -> ModelRequest {
    match mode {
        AssemblyMode::Flattened => build_flattened(examples, messages),
        AssemblyMode::Structured => build_structured(examples, messages),
    }
}

fn build_flattened(
    examples: &[ExampleEntry],
    messages: &[ConversationMessage]
) -> ModelRequest {
    let mut prompt = flatten_examples(examples);
    for message in messages.iter().filter(|m| m.sender == Sender::User) {
        prompt.push_str("input: ");
        prompt.push_str(&message.text);
        prompt.push('\n');
    }
    prompt.push_str(OUTPUT_CUE);
    ModelRequest { turns: vec![ModelTurn::user(prompt)] }
}

fn build_structured(
    examples: &[ExampleEntry],
    messages: &[ConversationMessage]
) -> ModelRequest {
    let mut turns = Vec::with_capacity(messages.len() + 2);
    turns.push(ModelTurn::user(flatten_examples(examples)));

    for message in messages {
        match message.sender {
            Sender::User => turns.push(ModelTurn::user(message.text.clone())),
            // Bot turns may carry labels leaked from an earlier reply; feeding
            // them back verbatim teaches the model to echo the format again.
            Sender::Bot => turns.push(ModelTurn::model(strip_training_labels(&message.text))),
        }
    }

    turns.push(ModelTurn::user(OUTPUT_CUE));
    ModelRequest { turns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Role;

    fn user(text: &str) -> ConversationMessage {
        ConversationMessage { sender: Sender::User, text: text.to_string() }
    }

    fn bot(text: &str) -> ConversationMessage {
        ConversationMessage { sender: Sender::Bot, text: text.to_string() }
    }

    const EXAMPLES: &[ExampleEntry] = &[
        ExampleEntry { input: "Hello", output: "Hi! How can we help?" },
        ExampleEntry { input: "Contact us", output: "support@cryenx.com" },
    ];

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("Flattened".parse::<AssemblyMode>().unwrap(), AssemblyMode::Flattened);
        assert_eq!("STRUCTURED".parse::<AssemblyMode>().unwrap(), AssemblyMode::Structured);
        assert!("turbo".parse::<AssemblyMode>().is_err());
    }

    #[test]
    fn flattened_prompt_keeps_examples_once_in_order_then_conversation() {
        let messages = vec![user("hi"), bot("Hi! How can we help?"), user("pricing?")];
        let request = build_model_request(EXAMPLES, &messages, AssemblyMode::Flattened);
        assert_eq!(request.turns.len(), 1);
        let prompt = &request.turns[0].text;

        for example in EXAMPLES {
            let pair = format!("input: {}\noutput: {}\n", example.input, example.output);
            assert_eq!(prompt.matches(&pair).count(), 1);
        }
        let first_pair = prompt.find("input: Hello").unwrap();
        let second_pair = prompt.find("input: Contact us").unwrap();
        let live_turn = prompt.find("input: pricing?").unwrap();
        assert!(first_pair < second_pair && second_pair < live_turn);
        assert!(prompt.ends_with("output:"));
    }

    #[test]
    fn flattened_prompt_only_includes_user_turns_from_the_conversation() {
        let messages = vec![user("hi"), bot("output: leaked reply")];
        let request = build_model_request(EXAMPLES, &messages, AssemblyMode::Flattened);
        assert!(!request.turns[0].text.contains("leaked reply"));
    }

    #[test]
    fn structured_request_tags_roles_and_ends_with_user_cue() {
        let messages = vec![user("hi"), bot("Hi! How can we help?"), user("pricing?")];
        let request = build_model_request(EXAMPLES, &messages, AssemblyMode::Structured);

        assert_eq!(request.turns.len(), 5);
        assert_eq!(request.turns[0].role, Role::User);
        assert!(request.turns[0].text.contains("input: Hello"));
        assert_eq!(request.turns[1].role, Role::User);
        assert_eq!(request.turns[2].role, Role::Model);
        assert_eq!(request.turns[3].role, Role::User);
        assert_eq!(request.turns[4].role, Role::User);
        assert_eq!(request.turns.last().unwrap().text, "output:");
    }

    #[test]
    fn structured_request_strips_leaked_labels_from_bot_turns() {
        let messages = vec![user("hi"), bot("output: Hello there!\ninput: next")];
        let request = build_model_request(EXAMPLES, &messages, AssemblyMode::Structured);
        assert_eq!(request.turns[2].text, "Hello there!");
    }

    #[test]
    fn empty_history_still_produces_examples_and_cue() {
        let request = build_model_request(EXAMPLES, &[], AssemblyMode::Structured);
        assert_eq!(request.turns.len(), 2);
        assert!(request.turns[0].text.contains("input: Hello"));
        assert_eq!(request.turns[1].text, "output:");
        assert_eq!(request.turns.last().unwrap().role, Role::User);

        let request = build_model_request(EXAMPLES, &[], AssemblyMode::Flattened);
        assert_eq!(request.turns.len(), 1);
        assert!(request.turns[0].text.ends_with("output:"));
    }
}
