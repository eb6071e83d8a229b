use super::*;

// =============================================================
// Transcript basics
// =============================================================

#[test]
fn transcript_default_is_empty() {
    let transcript = Transcript::new();
    assert!(transcript.is_empty());
    assert_eq!(transcript.pending_count(), 0);
    assert!(transcript.last().is_none());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut transcript = Transcript::new();
    let a = transcript.push(MessageKind::User, "oi");
    let b = transcript.push(MessageKind::Assistant, "olá");
    assert!(a.id < b.id);
    assert_eq!(transcript.len(), 2);
    assert!(a.is_user());
    assert!(!b.is_user());
}

#[test]
fn push_preserves_order() {
    let mut transcript = Transcript::new();
    transcript.push(MessageKind::User, "1");
    transcript.push(MessageKind::Pending, "2");
    transcript.push(MessageKind::Assistant, "3");
    let texts: Vec<&str> = transcript.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["1", "2", "3"]);
}

// =============================================================
// Pending removal
// =============================================================

#[test]
fn remove_pending_drops_only_that_entry() {
    let mut transcript = Transcript::new();
    transcript.push(MessageKind::User, "a");
    let first = transcript.push(MessageKind::Pending, "...");
    let second = transcript.push(MessageKind::Pending, "...");

    assert!(transcript.remove_pending(second.id));
    assert_eq!(transcript.pending_count(), 1);
    assert!(transcript.messages().iter().any(|m| m.id == first.id));
}

#[test]
fn remove_pending_twice_is_false() {
    let mut transcript = Transcript::new();
    let pending = transcript.push(MessageKind::Pending, "...");
    assert!(transcript.remove_pending(pending.id));
    assert!(!transcript.remove_pending(pending.id));
}

#[test]
fn remove_pending_ignores_non_pending_entries() {
    let mut transcript = Transcript::new();
    let user = transcript.push(MessageKind::User, "a");
    assert!(!transcript.remove_pending(user.id));
    assert_eq!(transcript.len(), 1);
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut transcript = Transcript::new();
    let pending = transcript.push(MessageKind::Pending, "...");
    transcript.remove_pending(pending.id);
    let next = transcript.push(MessageKind::Assistant, "x");
    assert_ne!(next.id, pending.id);
}
