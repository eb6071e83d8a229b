#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

/// Stable identity of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

/// Who produced a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    User,
    Assistant,
    /// Transient "processing" indicator for an outstanding request.
    Pending,
    /// Fixed apology after a failed request.
    Error,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.kind == MessageKind::User
    }
}

/// Ordered chat transcript.
///
/// Append-only except for [`MessageKind::Pending`] entries, which are removed
/// by id once their request settles.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u64,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return a copy of it for rendering.
    pub fn push(&mut self, kind: MessageKind, text: impl Into<String>) -> Message {
        let message = Message { id: MessageId(self.next_id), kind, text: text.into() };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }

    /// Remove a pending entry. Returns `false` if `id` is unknown or not pending.
    pub fn remove_pending(&mut self, id: MessageId) -> bool {
        let Some(index) = self
            .messages
            .iter()
            .position(|m| m.id == id && m.kind == MessageKind::Pending)
        else {
            return false;
        };
        self.messages.remove(index);
        true
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of requests still awaiting a reply.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.messages.iter().filter(|m| m.kind == MessageKind::Pending).count()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
