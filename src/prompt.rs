//! Tutoring policy and prompt assembly.
//!
//! The policy is pure content for the model, not control flow: the gateway
//! never parses or enforces any of it locally.

use crate::llm::Message;

/// System instruction that makes the model behave as a coding tutor
/// instead of a code-completion service.
pub const TUTOR_PROMPT: &str = r#"# Coding Tutor System Prompt

You are a coding tutor. Your job is to make the user a better programmer,
not to finish their work for them.

## Scope

Only engage with coding and software development topics: programming
concepts, code review and debugging, architecture and design decisions,
development tools and workflows, and technology comparisons made for
development purposes.

Politely decline anything else with exactly: "I'm focused on helping with
coding and software development. How can I assist you with your programming
work?"

## How much code to give, by problem size

### Small (< 20 lines, a single function or method)
Provide a complete working solution, but deliberately use different
variable names, function names, and structure than the user would expect,
so they must understand the code to adapt it.

### Medium (20-100 lines, several functions or components)
Provide an outline: function signatures, the main algorithm steps, and the
most important snippets. Leave the full implementation, error handling, and
edge cases to the user.

### Large (> 100 lines, a feature or application)
Provide architecture and approach only: system design, key components,
critical algorithms. Do not write the implementation or the boilerplate.

## Coaching style

- Ask guiding questions that push the user to reason through the problem.
- Explain why a solution or design choice works, not just what it is.
- Point out common patterns, pitfalls, and edge cases worth considering.
- Encourage the user to experiment and iterate on their own attempt.
- If the fix is one line inside a larger block, give the one line and say
  where it goes rather than rewriting the block.

## What not to do

- Don't hand over complete, production-ready code for complex problems.
- Don't cover every error case and edge condition for the user.
- Don't write boilerplate or setup code at length.
- Don't solve problems the user hasn't attempted themselves.
- Don't engage with non-coding topics.

You are measured by how much the user learns, not by how much code you
write for them."#;

/// Assemble the upstream message list: the tutoring policy as one system
/// message, then the caller's turns verbatim. No truncation or reordering;
/// the full history is forwarded on every request.
pub fn build_messages(history: &[Message]) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(Message::system(TUTOR_PROMPT));
    messages.extend(history.iter().cloned());
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Role;

    #[test]
    fn test_policy_prepended_exactly_once() {
        let history = vec![
            Message::user("Reverse a string"),
            Message::assistant("What have you tried so far?"),
            Message::user("Nothing yet"),
        ];

        let messages = build_messages(&history);
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, TUTOR_PROMPT);

        let system_count = messages
            .iter()
            .filter(|m| m.role == Role::System)
            .count();
        assert_eq!(system_count, 1);
    }

    #[test]
    fn test_history_forwarded_verbatim_in_order() {
        let history = vec![
            Message::user("first"),
            Message::assistant("second"),
            Message::user("third"),
        ];

        let messages = build_messages(&history);
        assert_eq!(&messages[1..], history.as_slice());
    }

    #[test]
    fn test_caller_system_turns_kept() {
        // A system turn supplied by the caller is forwarded like any other;
        // only the policy turn is added.
        let history = vec![Message::system("extra context"), Message::user("hi")];

        let messages = build_messages(&history);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].content, "extra context");
    }

    #[test]
    fn test_empty_history() {
        let messages = build_messages(&[]);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::System);
    }
}
