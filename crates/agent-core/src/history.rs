//! Trailing-window trimming for client-supplied history.
//!
//! The orchestrator only ever forwards a bounded window of prior turns
//! to a backend, regardless of how much history the client sends.

use crate::message::ChatMessage;

/// Number of prior turns forwarded to a backend.
pub const HISTORY_WINDOW: usize = 10;

/// Return the last `max` messages of `messages`.
pub fn trailing_window(messages: &[ChatMessage], max: usize) -> &[ChatMessage] {
    let start = messages.len().saturating_sub(max);
    &messages[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turns(n: usize) -> Vec<ChatMessage> {
        (0..n).map(|i| ChatMessage::user(format!("m{}", i))).collect()
    }

    #[test]
    fn test_short_history_untrimmed() {
        let messages = turns(3);
        let window = trailing_window(&messages, HISTORY_WINDOW);
        assert_eq!(window.len(), 3);
        assert_eq!(window[0].content, "m0");
    }

    #[test]
    fn test_long_history_keeps_tail() {
        let messages = turns(25);
        let window = trailing_window(&messages, HISTORY_WINDOW);
        assert_eq!(window.len(), 10);
        assert_eq!(window[0].content, "m15");
        assert_eq!(window[9].content, "m24");
    }

    #[test]
    fn test_empty_history() {
        let window = trailing_window(&[], HISTORY_WINDOW);
        assert!(window.is_empty());
    }
}
