// ============================================================================
// NOTIFICATIONS - transient toasts
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::state::ReactiveState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast-success",
            NotificationKind::Error => "toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
    /// Set once the view layer has armed its dismiss timer
    pub scheduled: bool,
}

/// Toast queue shared by all viewmodels. Dismissal timing lives in the view layer.
#[derive(Clone, Default)]
pub struct NotificationCenter {
    items: ReactiveState<Vec<Notification>>,
    next_id: Rc<Cell<u64>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, kind: NotificationKind, text: impl Into<String>) -> u64 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let text = text.into();
        match kind {
            NotificationKind::Error => log::warn!("🔔 [TOAST] {}", text),
            NotificationKind::Success => log::info!("🔔 [TOAST] {}", text),
        }
        self.items.update(|items| {
            items.push(Notification {
                id,
                kind,
                text,
                scheduled: false,
            })
        });
        id
    }

    pub fn success(&self, text: impl Into<String>) -> u64 {
        self.push(NotificationKind::Success, text)
    }

    pub fn error(&self, text: impl Into<String>) -> u64 {
        self.push(NotificationKind::Error, text)
    }

    pub fn dismiss(&self, id: u64) {
        if self.items.borrow().iter().any(|n| n.id == id) {
            self.items.update(|items| items.retain(|n| n.id != id));
        }
    }

    pub fn active(&self) -> Vec<Notification> {
        self.items.get()
    }

    /// Ids that still need a dismiss timer. Marks them scheduled without notifying.
    pub fn take_unscheduled(&self) -> Vec<u64> {
        let mut items = self.items.borrow().clone();
        let ids: Vec<u64> = items
            .iter_mut()
            .filter(|n| !n.scheduled)
            .map(|n| {
                n.scheduled = true;
                n.id
            })
            .collect();
        if !ids.is_empty() {
            self.items.replace_silently(items);
        }
        ids
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.items.subscribe(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss() {
        let center = NotificationCenter::new();
        let a = center.success("Pet updated successfully!");
        let b = center.error("Failed to update pet");
        assert_ne!(a, b);
        assert_eq!(center.active().len(), 2);

        center.dismiss(a);
        let left = center.active();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].kind, NotificationKind::Error);

        center.dismiss(999);
        assert_eq!(center.active().len(), 1);
    }

    #[test]
    fn unscheduled_ids_are_handed_out_once() {
        let center = NotificationCenter::new();
        let a = center.success("one");
        assert_eq!(center.take_unscheduled(), vec![a]);
        assert!(center.take_unscheduled().is_empty());

        let b = center.error("two");
        assert_eq!(center.take_unscheduled(), vec![b]);
    }
}
