use shared::models::UnreadSummary;
use yew::AttrValue;

/// Everything a [`ChatRow`](crate::components::chat_row::ChatRow) needs to draw one chat.
///
/// Built by the list container on every pass and compared structurally, so a
/// freshly derived model equal to the previous one does not re-render the row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatRowViewModel {
    pub id: AttrValue,
    pub display_name: AttrValue,
    pub avatar_urls: Vec<AttrValue>,
    pub is_group: bool,
    /// Selects the contrasting colour pair; set for the chat currently open.
    pub is_highlighted: bool,
    pub is_online: bool,
    pub unread: Option<UnreadSummary>,
    /// Position in the rendered list; only staggers the entrance animation.
    pub render_index: usize,
}

impl ChatRowViewModel {
    /// Badge text for the unread counter, if any.
    pub fn unread_label(&self) -> Option<String> {
        self.unread
            .map(|summary| format!("{} New Message", summary.count))
    }
}
