//! Confirmation Toast
//!
//! One message at a time. Every `show` hands out a ticket; the scheduled
//! dismissal passes that ticket back, and only the newest ticket may clear
//! the message, so a late timer from an older toast cannot hide a newer one.

pub const ADDED: &str = "Added to moodboard ✓";
pub const UPDATED: &str = "Item updated ✓";
pub const REMOVED: &str = "Item removed";
pub const LINK_CAPTURED: &str = "Link captured — fill in the details!";

/// Identifies one `show` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastSlot {
    message: Option<String>,
    generation: u64,
}

impl ToastSlot {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn show(&mut self, message: impl Into<String>) -> ToastTicket {
        self.generation = self.generation.wrapping_add(1);
        self.message = Some(message.into());
        ToastTicket(self.generation)
    }

    /// Clear the message if `ticket` belongs to the toast currently shown
    pub fn dismiss(&mut self, ticket: ToastTicket) -> bool {
        if ticket.0 == self.generation && self.message.is_some() {
            self.message = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_dismiss() {
        let mut slot = ToastSlot::default();
        assert_eq!(slot.message(), None);

        let ticket = slot.show(ADDED);
        assert_eq!(slot.message(), Some(ADDED));
        assert!(slot.dismiss(ticket));
        assert_eq!(slot.message(), None);
        assert!(!slot.dismiss(ticket));
    }

    #[test]
    fn test_newer_toast_survives_older_timer() {
        let mut slot = ToastSlot::default();
        let first = slot.show(ADDED);
        let second = slot.show(REMOVED);

        assert!(!slot.dismiss(first));
        assert_eq!(slot.message(), Some(REMOVED));
        assert!(slot.dismiss(second));
    }
}
