//! Chat assistant ("Vivi"). Append-only transcript with scripted replies,
//! context-triggered messages and optional voice input.

use crate::domain::replies::{self, GENERIC_REPLIES, ReplySource, WELCOME};
use crate::domain::{ChatContext, ChatMessage, DomainError, Sender};
use crate::ports::{Clock, NotifierPort, SpeechPort, SpeechSettings};
use rand::Rng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Leading characters compared when suppressing repeated context messages.
const DEDUP_PREFIX_CHARS: usize = 20;

#[derive(Debug, Clone)]
pub struct ChatSettings {
    /// Reply delay is drawn from `[reply_delay_min, reply_delay_max)`.
    pub reply_delay_min: Duration,
    pub reply_delay_max: Duration,
    pub dedup_window: Duration,
    pub speech: SpeechSettings,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            reply_delay_min: Duration::from_millis(1000),
            reply_delay_max: Duration::from_millis(3000),
            dedup_window: Duration::from_secs(5),
            speech: SpeechSettings::default(),
        }
    }
}

pub struct ChatAssistant {
    clock: Arc<dyn Clock>,
    speech: Arc<dyn SpeechPort>,
    notifier: Arc<dyn NotifierPort>,
    rng: StdRng,
    settings: ChatSettings,
    transcript: Vec<ChatMessage>,
    draft: String,
    voice_enabled: bool,
    last_context: Option<ChatContext>,
}

impl ChatAssistant {
    /// Starts a transcript seeded with the welcome message.
    pub fn new(
        clock: Arc<dyn Clock>,
        speech: Arc<dyn SpeechPort>,
        notifier: Arc<dyn NotifierPort>,
        rng: StdRng,
        settings: ChatSettings,
    ) -> Self {
        let welcome = ChatMessage {
            id: "welcome".to_string(),
            sender: Sender::Assistant,
            text: WELCOME.to_string(),
            timestamp: clock.now(),
        };
        Self {
            clock,
            speech,
            notifier,
            rng,
            settings,
            transcript: vec![welcome],
            draft: String::new(),
            voice_enabled: true,
            last_context: None,
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Pending outgoing text (typed or dictated).
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn voice_enabled(&self) -> bool {
        self.voice_enabled
    }

    /// React to a context change. Appends at most one message; repeated or
    /// recently sent context messages are suppressed.
    pub fn observe(&mut self, context: &ChatContext) -> Option<&ChatMessage> {
        if self.last_context.as_ref() == Some(context) {
            return None;
        }
        self.last_context = Some(*context);

        let text = replies::context_message(context)?;
        if self.recently_said(text) {
            debug!(step = %context.step, "context message suppressed");
            return None;
        }
        Some(self.push(Sender::Assistant, text.to_string()))
    }

    /// Appends the user's message and clears the draft. Blank input is ignored.
    pub fn post(&mut self, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        self.draft.clear();
        Some(self.push(Sender::User, text.to_string()))
    }

    /// Waits the reply delay, then answers the last message if it came from the user.
    pub async fn reply(&mut self, context: Option<&ChatContext>) -> Option<&ChatMessage> {
        let question = self
            .transcript
            .last()
            .filter(|m| m.sender == Sender::User)?
            .text
            .clone();

        let delay = self.reply_delay();
        self.clock.sleep(delay).await;

        let reply = match replies::select_reply(&question, context) {
            ReplySource::Keyword(reply) | ReplySource::Step(reply) => reply,
            ReplySource::Generic => GENERIC_REPLIES[self.rng.gen_range(0..GENERIC_REPLIES.len())],
        };
        debug!(delay_ms = delay.as_millis() as u64, "assistant replied");
        Some(self.push(Sender::Assistant, reply.to_string()))
    }

    /// `post` followed by `reply`.
    pub async fn send(
        &mut self,
        text: &str,
        context: Option<&ChatContext>,
    ) -> Option<&ChatMessage> {
        self.post(text)?;
        self.reply(context).await
    }

    /// Posts whatever is in the draft.
    pub fn post_draft(&mut self) -> Option<&ChatMessage> {
        let text = std::mem::take(&mut self.draft);
        self.post(&text)
    }

    /// Sends whatever is in the draft.
    pub async fn send_draft(&mut self, context: Option<&ChatContext>) -> Option<&ChatMessage> {
        self.post_draft()?;
        self.reply(context).await
    }

    /// Dictate one utterance into the draft.
    ///
    /// `CapabilityUnavailable` disables voice input for the rest of the session;
    /// recognition errors leave it enabled. Both are reported as notices.
    pub async fn capture_voice(&mut self) -> Result<&str, DomainError> {
        if !self.voice_enabled {
            let err = DomainError::CapabilityUnavailable("voice input disabled".into());
            self.notifier.notify(&err.notice());
            return Err(err);
        }

        match self.speech.capture(&self.settings.speech).await {
            Ok(transcript) => {
                info!(chars = transcript.chars().count(), "voice transcript captured");
                self.draft = transcript;
                Ok(&self.draft)
            }
            Err(e) => {
                if matches!(e, DomainError::CapabilityUnavailable(_)) {
                    warn!(error = %e, "speech capture unavailable, disabling voice input");
                    self.voice_enabled = false;
                } else {
                    warn!(error = %e, "speech capture failed");
                }
                self.notifier.notify(&e.notice());
                Err(e)
            }
        }
    }

    fn reply_delay(&mut self) -> Duration {
        let min = self.settings.reply_delay_min.as_millis() as u64;
        let max = self.settings.reply_delay_max.as_millis() as u64;
        if max <= min {
            return self.settings.reply_delay_min;
        }
        Duration::from_millis(self.rng.gen_range(min..max))
    }

    fn recently_said(&self, text: &str) -> bool {
        let prefix: String = text.chars().take(DEDUP_PREFIX_CHARS).collect();
        let now = self.clock.now();
        self.transcript.iter().any(|m| {
            m.sender == Sender::Assistant
                && (now - m.timestamp)
                    .to_std()
                    .map(|age| age < self.settings.dedup_window)
                    .unwrap_or(true)
                && m.text.contains(&prefix)
        })
    }

    fn push(&mut self, sender: Sender, text: String) -> &ChatMessage {
        self.transcript.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            sender,
            text,
            timestamp: self.clock.now(),
        });
        &self.transcript[self.transcript.len() - 1]
    }
}
