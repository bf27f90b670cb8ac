//! Notification dropdown state for the dashboard header.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// A single header notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub text: String,
    /// Relative time label, e.g. `"2ч назад"`.
    pub time: String,
    pub read: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
}

impl Default for NotificationsState {
    fn default() -> Self {
        Self { items: seed_notifications() }
    }
}

impl NotificationsState {
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    #[must_use]
    pub fn has_unread(&self) -> bool {
        self.unread_count() > 0
    }

    pub fn mark_read(&mut self, id: u32) {
        if let Some(n) = self.items.iter_mut().find(|n| n.id == id) {
            n.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.read = true;
        }
    }
}

fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            text: "Добро пожаловать в CCI! Заполни профиль.".to_owned(),
            time: "Только что".to_owned(),
            read: false,
        },
        Notification {
            id: 2,
            text: "Новое событие 'Хакатон 2025' добавлено.".to_owned(),
            time: "2ч назад".to_owned(),
            read: false,
        },
    ]
}
