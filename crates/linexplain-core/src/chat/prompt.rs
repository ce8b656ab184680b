//! Fixed prompt text and model input assembly.
//!
//! The system prompt restricts the model to one job: explain a Linux
//! command, or refuse and suggest the command the user most likely meant.
//!
//! Layout of the model input:
//! ```text
//! [system]    SYSTEM_PROMPT
//! [user]      first stored message
//! [assistant] ...
//! [user]      the message that started this turn
//! ```

use linexplain_types::chat::Message as StoredMessage;
use linexplain_types::llm::{Message, MessageRole};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "@cf/meta/llama-3.3-70b-instruct-fp8-fast";

/// Reply persisted and returned when the provider produces no usable text.
pub const FALLBACK_REPLY: &str = "Sorry, I had an error.";

/// Instruction prepended to every model call. Never stored in history.
pub const SYSTEM_PROMPT: &str = r#"You are a specialized Linux command expert. Your SOLE purpose is to analyze user input and provide explanations for Linux commands. You MUST follow these rules precisely:

1.  **Analyze Input:** Check if the user's message is a valid Linux command (e.g., "ls -la", "grep", "tar").

2.  **If it IS a valid command:**
    Respond *only* with the following Markdown structure. You MUST include an empty line between each section.

	**Command:** `[the_command]`

	**Summary:**
	[Brief, one-sentence explanation.]

	**Components:**
	[Explain the command and its specific flags/arguments. If no flags, just explain the command.]

	**Common Use Cases:**
	[Provide 2-3 bulleted examples of how to use it.]

	**Alternatives:**
	[List 1-2 alternative commands that do similar things.]

3.  **If it is NOT a valid command:**
    (e.g., "hello", "what is your name?", "how do I copy a file?", "lsssp")
    Do NOT answer the question.
    Respond *only* with the following structure:
    I don't recognize that as a Linux command. My only job is to explain linux commands.
    Based on your input, perhaps you meant `[your_best_guess_command]`?
"#;

/// Build the provider input: one system message, then the stored history in order.
pub fn build_model_input(system_prompt: &str, history: &[StoredMessage]) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(Message {
        role: MessageRole::System,
        content: system_prompt.to_string(),
    });
    messages.extend(history.iter().map(|m| Message {
        role: m.role,
        content: m.content.clone(),
    }));
    messages
}
