//! Conversation state machine for the assistant chat.
//!
//! A conversation owns the knowledge base it answers from plus an
//! append-only transcript. Submitting user text and delivering the bot
//! reply are separate transitions so the cosmetic "thinking" pause stays
//! outside the core: hosts sample a [`ReplyDelay`], wait it out (usually
//! on a task they can abort), then hand the [`PendingReply`] back to
//! [`Conversation::deliver`]. While a reply is outstanding the
//! conversation is busy and further submissions are rejected.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::knowledge::KnowledgeBase;
use crate::matcher;

/// Greeting seeded as the first transcript message.
pub const WELCOME_MESSAGE: &str = "Hello! I'm Neurify's AI Assistant. How can I help you today?";

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One transcript entry. Created on append and never edited; transcript
/// order is append order, the timestamp is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique within the conversation. Useful as a list key in hosts.
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

/// A submitted user turn whose bot reply has not been appended yet.
///
/// Returned by [`Conversation::submit`]. Hand it back to
/// [`Conversation::deliver`] once the host's delay has elapsed, or call
/// [`Conversation::cancel_pending`] if the turn is abandoned. Not
/// clonable, so each submission is answered at most once.
#[derive(Debug)]
pub struct PendingReply {
    query: String,
}

impl PendingReply {
    /// The user text the reply will answer.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Simulated thinking time before a bot reply: a fixed base plus a
/// uniformly drawn jitter. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyDelay {
    base: Duration,
    jitter: Duration,
}

impl ReplyDelay {
    pub const fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }

    /// Zero delay, for headless and test use.
    pub const fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Draw a delay in `base ..= base + jitter`.
    pub fn sample(&self) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        let extra = rand::thread_rng().gen_range(0..=jitter_ms);
        self.base + Duration::from_millis(extra)
    }
}

impl Default for ReplyDelay {
    /// One second plus up to half a second, the pause users expect from
    /// the chat widget.
    fn default() -> Self {
        Self::new(Duration::from_millis(1000), Duration::from_millis(500))
    }
}

/// Transcript plus the state of the current turn.
///
/// All mutation goes through `&mut self`, so one conversation is one
/// sequential timeline. Independent conversations share nothing.
pub struct Conversation {
    knowledge: KnowledgeBase,
    transcript: Vec<Message>,
    pending_input: String,
    busy: bool,
    next_id: u64,
}

impl Conversation {
    /// Start a conversation over `knowledge`, seeding the welcome message.
    pub fn new(knowledge: KnowledgeBase) -> Self {
        let welcome = Message {
            id: "welcome".to_string(),
            text: WELCOME_MESSAGE.to_string(),
            sender: Sender::Bot,
            timestamp: Utc::now(),
        };
        Self {
            knowledge,
            transcript: vec![welcome],
            pending_input: String::new(),
            busy: false,
            next_id: 1,
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// True while a bot reply is outstanding. Submissions are rejected
    /// until [`deliver`](Self::deliver) or
    /// [`cancel_pending`](Self::cancel_pending) runs.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The draft text the user is editing.
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Mutable access for hosts that edit the draft in place.
    pub fn pending_input_mut(&mut self) -> &mut String {
        &mut self.pending_input
    }

    pub fn set_pending_input(&mut self, input: impl Into<String>) {
        self.pending_input = input.into();
    }

    /// Commit the pending input as a user message.
    ///
    /// Empty or whitespace-only input is a silent no-op, as is submitting
    /// while a reply is already outstanding; both leave the transcript
    /// untouched and return `None`. Otherwise the trimmed text is appended
    /// as a user message, the draft is cleared, the conversation turns
    /// busy, and the returned [`PendingReply`] carries the text to answer.
    pub fn submit(&mut self) -> Option<PendingReply> {
        let text = self.pending_input.trim();
        if text.is_empty() {
            return None;
        }
        if self.busy {
            tracing::debug!("submission ignored, reply already outstanding");
            return None;
        }

        let text = text.to_string();
        self.push_message(Sender::User, text.clone());
        self.pending_input.clear();
        self.busy = true;
        tracing::debug!(len = text.len(), "user message submitted");
        Some(PendingReply { query: text })
    }

    /// Append the bot's answer for a previously submitted turn and leave
    /// the busy state.
    pub fn deliver(&mut self, pending: PendingReply) {
        let answer = matcher::answer_for(&pending.query, self.knowledge.entries()).to_string();
        self.push_message(Sender::Bot, answer);
        self.busy = false;
    }

    /// Wait out `delay`, then deliver. Blocks the caller for the duration;
    /// hosts that need to abandon the wait should spawn the sleep
    /// themselves and keep the task handle instead.
    pub async fn deliver_after(&mut self, pending: PendingReply, delay: Duration) {
        tokio::time::sleep(delay).await;
        self.deliver(pending);
    }

    /// Abandon the outstanding turn without appending a reply.
    pub fn cancel_pending(&mut self) {
        self.busy = false;
    }

    fn push_message(&mut self, sender: Sender, text: String) {
        let id = self.next_id.to_string();
        self.next_id += 1;
        self.transcript.push(Message {
            id,
            text,
            sender,
            timestamp: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{Category, KnowledgeBase, KnowledgeEntry};
    use crate::matcher::FALLBACK_ANSWER;

    fn conversation() -> Conversation {
        let kb = KnowledgeBase::new(vec![KnowledgeEntry::new(
            "greet",
            &["hello", "hi"],
            Category::General,
            "Hi there!",
        )])
        .unwrap();
        Conversation::new(kb)
    }

    fn submit(conv: &mut Conversation, text: &str) -> Option<PendingReply> {
        conv.set_pending_input(text);
        conv.submit()
    }

    #[test]
    fn test_new_conversation_seeds_welcome() {
        let conv = conversation();
        assert_eq!(conv.transcript().len(), 1);
        let welcome = &conv.transcript()[0];
        assert_eq!(welcome.id, "welcome");
        assert_eq!(welcome.sender, Sender::Bot);
        assert_eq!(welcome.text, WELCOME_MESSAGE);
        assert!(!conv.is_busy());
        assert!(conv.pending_input().is_empty());
    }

    #[test]
    fn test_empty_submit_is_silent_noop() {
        let mut conv = conversation();
        assert!(submit(&mut conv, "").is_none());
        assert_eq!(conv.transcript().len(), 1);
        assert!(!conv.is_busy());
    }

    #[test]
    fn test_whitespace_submit_is_silent_noop() {
        let mut conv = conversation();
        assert!(submit(&mut conv, "   \t ").is_none());
        assert_eq!(conv.transcript().len(), 1);
        assert!(!conv.is_busy());
    }

    #[test]
    fn test_submit_appends_user_message_and_sets_busy() {
        let mut conv = conversation();
        let pending = submit(&mut conv, "  hello world  ").unwrap();
        assert_eq!(pending.query(), "hello world");
        assert_eq!(conv.transcript().len(), 2);
        let msg = conv.transcript().last().unwrap();
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.text, "hello world");
        assert!(conv.is_busy());
        assert!(conv.pending_input().is_empty());
    }

    #[test]
    fn test_submit_while_busy_is_rejected() {
        let mut conv = conversation();
        let _pending = submit(&mut conv, "hello").unwrap();
        assert!(submit(&mut conv, "hello again").is_none());
        assert_eq!(conv.transcript().len(), 2);
    }

    #[test]
    fn test_deliver_appends_reply_and_clears_busy() {
        let mut conv = conversation();
        let pending = submit(&mut conv, "hello").unwrap();
        conv.deliver(pending);
        assert_eq!(conv.transcript().len(), 3);
        let reply = conv.transcript().last().unwrap();
        assert_eq!(reply.sender, Sender::Bot);
        assert_eq!(reply.text, "Hi there!");
        assert!(!conv.is_busy());
        // The next turn goes through again.
        assert!(submit(&mut conv, "hi once more").is_some());
    }

    #[test]
    fn test_deliver_falls_back_when_nothing_matches() {
        let mut conv = conversation();
        let pending = submit(&mut conv, "qwxyz").unwrap();
        conv.deliver(pending);
        assert_eq!(conv.transcript().last().unwrap().text, FALLBACK_ANSWER);
    }

    #[test]
    fn test_cancel_pending_clears_busy_without_reply() {
        let mut conv = conversation();
        let pending = submit(&mut conv, "hello").unwrap();
        conv.cancel_pending();
        drop(pending);
        assert_eq!(conv.transcript().len(), 2);
        assert!(!conv.is_busy());
    }

    #[test]
    fn test_each_turn_appends_one_user_and_one_bot_message() {
        let mut conv = conversation();
        for text in ["hello", "hi", "anything"] {
            let pending = submit(&mut conv, text).unwrap();
            conv.deliver(pending);
        }
        let users = conv.transcript().iter().filter(|m| m.sender == Sender::User).count();
        let bots = conv.transcript().iter().filter(|m| m.sender == Sender::Bot).count();
        assert_eq!(users, 3);
        // Welcome plus one reply per turn.
        assert_eq!(bots, 4);
    }

    #[test]
    fn test_message_ids_are_unique() {
        let mut conv = conversation();
        for text in ["hello", "hi"] {
            let pending = submit(&mut conv, text).unwrap();
            conv.deliver(pending);
        }
        let ids: Vec<&str> = conv.transcript().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["welcome", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_reply_delay_none_samples_zero() {
        assert_eq!(ReplyDelay::none().sample(), Duration::ZERO);
    }

    #[test]
    fn test_reply_delay_sample_stays_within_bounds() {
        let delay = ReplyDelay::new(Duration::from_millis(100), Duration::from_millis(50));
        for _ in 0..32 {
            let d = delay.sample();
            assert!(d >= Duration::from_millis(100));
            assert!(d <= Duration::from_millis(150));
        }
    }

    #[tokio::test]
    async fn test_deliver_after_appends_reply() {
        let mut conv = conversation();
        let pending = submit(&mut conv, "hello").unwrap();
        conv.deliver_after(pending, Duration::ZERO).await;
        assert!(!conv.is_busy());
        assert_eq!(conv.transcript().last().unwrap().text, "Hi there!");
    }
}
