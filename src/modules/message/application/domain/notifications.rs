use serde::Serialize;

use super::message::Message;

/// Sender groups shown in the dashboard dropdown.
pub const MAX_NOTIFICATION_GROUPS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationGroup {
    pub email: String,
    pub count: usize,
    pub latest: Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSummary {
    /// Every unread message, including senders beyond the kept groups.
    pub unread_count: usize,
    pub groups: Vec<NotificationGroup>,
}

impl NotificationSummary {
    /// Group unread messages by sender, most recently active sender first.
    pub fn from_unread(mut unread: Vec<Message>) -> Self {
        unread.retain(|m| !m.read);
        unread.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let unread_count = unread.len();
        let mut groups: Vec<NotificationGroup> = Vec::new();

        for message in unread {
            match groups.iter_mut().find(|g| g.email == message.email) {
                Some(group) => group.count += 1,
                None => groups.push(NotificationGroup {
                    email: message.email.clone(),
                    count: 1,
                    latest: message,
                }),
            }
        }
        groups.truncate(MAX_NOTIFICATION_GROUPS);

        Self {
            unread_count,
            groups,
        }
    }
}
