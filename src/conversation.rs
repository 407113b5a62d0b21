//! Page-session conversation state.
//!
//! The browser page mirrors this state machine; keeping it here makes the
//! submit flow a plain value that unit tests can drive without a renderer
//! or a network. One conversation lives exactly as long as one page.

use crate::llm::Message;

/// Fixed turn appended when a submission fails for any reason.
pub const ERROR_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

/// Submission state. At most one request is outstanding at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    Sending,
}

/// An ordered, append-only list of turns plus the submission state.
#[derive(Debug, Default)]
pub struct Conversation {
    turns: Vec<Message>,
    state: ChatState,
}

impl Default for ChatState {
    fn default() -> Self {
        ChatState::Idle
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn turns(&self) -> &[Message] {
        &self.turns
    }

    /// Submit user input. Whitespace-only input and submissions while a
    /// request is in flight are no-ops. Otherwise the user turn is appended
    /// and the full history to send upstream is returned.
    pub fn submit(&mut self, input: &str) -> Option<Vec<Message>> {
        let trimmed = input.trim();
        if trimmed.is_empty() || self.state == ChatState::Sending {
            return None;
        }

        self.turns.push(Message::user(trimmed));
        self.state = ChatState::Sending;
        Some(self.turns.clone())
    }

    /// Record a successful response: append the assistant turn and clear
    /// the in-flight state.
    pub fn resolve(&mut self, content: impl Into<String>) {
        if self.state != ChatState::Sending {
            return;
        }
        self.turns.push(Message::assistant(content));
        self.state = ChatState::Idle;
    }

    /// Record a failed submission: append the fixed error turn and clear
    /// the in-flight state. The turn list stays renderable; the user can
    /// resubmit manually.
    pub fn fail(&mut self) {
        if self.state != ChatState::Sending {
            return;
        }
        self.turns.push(Message::assistant(ERROR_MESSAGE));
        self.state = ChatState::Idle;
    }
}
