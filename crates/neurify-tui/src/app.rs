use neurify_core::{
    Config, Conversation, KnowledgeBase, PendingReply, ReplyDelay, Service, ServiceCatalog, Theme,
};
use ratatui::widgets::ListState;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Chat,
    Services,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub screen: Screen,
    pub input_mode: InputMode,

    // Conversation state
    pub conversation: Conversation,
    pub reply_delay: ReplyDelay,
    pub reply_task: Option<JoinHandle<PendingReply>>,
    pub input_cursor: usize, // cursor position in the draft, in chars

    // Chat viewport
    pub chat_scroll: u16,
    pub chat_height: u16, // inner size of the chat area, set during render
    pub chat_width: u16,

    // Animation state
    pub animation_frame: u8, // 0-2 for ellipsis animation

    // Services catalog
    pub catalog: ServiceCatalog,
    pub service_state: ListState,
    pub detail_scroll: u16,
    pub detail_height: u16,
    pub detail_total_lines: u16,

    // Persisted preferences
    pub config: Config,
}

impl App {
    pub fn new() -> Self {
        let config = Config::load().unwrap_or_else(|_| Config::new());
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Self {
        let conversation = Conversation::new(KnowledgeBase::builtin());
        let catalog = ServiceCatalog::builtin();

        let mut service_state = ListState::default();
        service_state.select(Some(0));

        Self {
            should_quit: false,
            screen: Screen::Chat,
            // The chat opens ready to type, like the web widget.
            input_mode: InputMode::Editing,

            conversation,
            reply_delay: ReplyDelay::default(),
            reply_task: None,
            input_cursor: 0,

            chat_scroll: 0,
            chat_height: 0,
            chat_width: 0,

            animation_frame: 0,

            catalog,
            service_state,
            detail_scroll: 0,
            detail_height: 0,
            detail_total_lines: 0,

            config,
        }
    }

    pub fn theme(&self) -> Theme {
        self.config.theme
    }

    pub fn toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
        if let Err(err) = self.config.save() {
            tracing::warn!(%err, "failed to persist theme preference");
        }
    }

    pub fn switch_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Chat => Screen::Services,
            Screen::Services => Screen::Chat,
        };
        // Returning to the chat goes straight back to the draft
        if self.screen == Screen::Chat {
            self.input_mode = InputMode::Editing;
            self.input_cursor = self.conversation.pending_input().chars().count();
        } else {
            self.input_mode = InputMode::Normal;
        }
    }

    /// Commit the draft; on success schedule the delayed bot reply.
    pub fn submit_message(&mut self) {
        if let Some(pending) = self.conversation.submit() {
            let delay = self.reply_delay.sample();
            self.reply_task = Some(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                pending
            }));
            self.input_cursor = 0;
            // Keep the typing indicator in view
            self.scroll_chat_to_bottom();
        }
    }

    /// Deliver the bot reply once the scheduled delay has run out.
    pub async fn poll_reply(&mut self) {
        let finished = self
            .reply_task
            .as_ref()
            .map_or(false, |task| task.is_finished());
        if finished {
            if let Some(task) = self.reply_task.take() {
                match task.await {
                    Ok(pending) => {
                        self.conversation.deliver(pending);
                        self.scroll_chat_to_bottom();
                    }
                    // Join only fails when the task was aborted mid-wait.
                    Err(_) => self.conversation.cancel_pending(),
                }
            }
        }
    }

    /// Drop the scheduled reply, used on teardown so no answer lands
    /// after the screen is gone.
    pub fn abort_reply(&mut self) {
        if let Some(task) = self.reply_task.take() {
            task.abort();
            self.conversation.cancel_pending();
        }
    }

    /// Tick animation frame (called by Tick event)
    pub fn tick_animation(&mut self) {
        if self.conversation.is_busy() {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
    }

    /// Scroll the chat so the newest message (or the typing indicator)
    /// is visible.
    pub fn scroll_chat_to_bottom(&mut self) {
        // Use actual chat width for wrap calculation, default to 50 if not set
        let wrap_width = if self.chat_width > 0 {
            self.chat_width as usize
        } else {
            50
        };

        let mut total_lines: u16 = 0;

        for msg in self.conversation.transcript() {
            total_lines += 1; // Sender label line
            for line in msg.text.lines() {
                // Character count, not byte length, for proper UTF-8 handling
                let char_count = line.chars().count();
                if char_count == 0 {
                    total_lines += 1;
                } else {
                    total_lines += ((char_count / wrap_width) + 1) as u16;
                }
            }
            total_lines += 1; // Blank line after message
        }

        if self.conversation.is_busy() {
            total_lines += 2; // Label plus typing indicator
        }

        let visible_height = if self.chat_height > 0 {
            self.chat_height
        } else {
            20
        };

        if total_lines > visible_height {
            self.chat_scroll = total_lines.saturating_sub(visible_height);
        } else {
            self.chat_scroll = 0;
        }
    }

    // Services navigation
    pub fn selected_service(&self) -> Option<&Service> {
        self.service_state
            .selected()
            .and_then(|i| self.catalog.services().get(i))
    }

    pub fn services_nav_down(&mut self) {
        let len = self.catalog.len();
        if len > 0 {
            let i = self.service_state.selected().unwrap_or(0);
            self.service_state.select(Some((i + 1).min(len - 1)));
            self.detail_scroll = 0;
        }
    }

    pub fn services_nav_up(&mut self) {
        let i = self.service_state.selected().unwrap_or(0);
        self.service_state.select(Some(i.saturating_sub(1)));
        self.detail_scroll = 0;
    }

    pub fn services_nav_first(&mut self) {
        self.service_state.select(Some(0));
        self.detail_scroll = 0;
    }

    pub fn services_nav_last(&mut self) {
        let len = self.catalog.len();
        if len > 0 {
            self.service_state.select(Some(len - 1));
            self.detail_scroll = 0;
        }
    }

    // Detail pane scrolling
    pub fn detail_scroll_down(&mut self) {
        if self.detail_scroll < self.detail_total_lines.saturating_sub(self.detail_height) {
            self.detail_scroll = self.detail_scroll.saturating_add(1);
        }
    }

    pub fn detail_scroll_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn detail_half_page_down(&mut self) {
        let half_page = self.detail_height / 2;
        let max_scroll = self.detail_total_lines.saturating_sub(self.detail_height);
        self.detail_scroll = (self.detail_scroll + half_page).min(max_scroll);
    }

    pub fn detail_half_page_up(&mut self) {
        let half_page = self.detail_height / 2;
        self.detail_scroll = self.detail_scroll.saturating_sub(half_page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurify_core::Sender;

    fn app() -> App {
        App::with_config(Config::new())
    }

    #[test]
    fn test_starts_in_chat_with_editing_focus() {
        let app = app();
        assert_eq!(app.screen, Screen::Chat);
        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.conversation.transcript().len(), 1);
        assert!(app.reply_task.is_none());
    }

    #[test]
    fn test_switch_screen_round_trip() {
        let mut app = app();
        app.switch_screen();
        assert_eq!(app.screen, Screen::Services);
        assert_eq!(app.input_mode, InputMode::Normal);
        app.switch_screen();
        assert_eq!(app.screen, Screen::Chat);
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[test]
    fn test_services_nav_clamps_at_ends() {
        let mut app = app();
        app.services_nav_up();
        assert_eq!(app.service_state.selected(), Some(0));
        for _ in 0..100 {
            app.services_nav_down();
        }
        assert_eq!(app.service_state.selected(), Some(app.catalog.len() - 1));
    }

    #[test]
    fn test_services_nav_resets_detail_scroll() {
        let mut app = app();
        app.detail_scroll = 7;
        app.services_nav_down();
        assert_eq!(app.detail_scroll, 0);
    }

    #[test]
    fn test_tick_animation_only_runs_while_busy() {
        let mut app = app();
        app.tick_animation();
        assert_eq!(app.animation_frame, 0);
    }

    #[tokio::test]
    async fn test_submit_schedules_and_poll_delivers() {
        let mut app = app();
        app.reply_delay = ReplyDelay::none();
        app.conversation.set_pending_input("hello");
        app.submit_message();
        assert!(app.conversation.is_busy());
        assert!(app.reply_task.is_some());

        // Wait with a real sleep: the runtime must park for the spawned
        // task's timer to fire.
        for _ in 0..100 {
            app.poll_reply().await;
            if !app.conversation.is_busy() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(1)).await;
        }

        assert!(!app.conversation.is_busy());
        assert!(app.reply_task.is_none());
        let reply = app.conversation.transcript().last().unwrap();
        assert_eq!(reply.sender, Sender::Bot);
    }

    #[tokio::test]
    async fn test_abort_reply_cancels_outstanding_turn() {
        let mut app = app();
        app.conversation.set_pending_input("hello");
        app.submit_message();
        assert!(app.conversation.is_busy());

        app.abort_reply();
        assert!(!app.conversation.is_busy());
        assert!(app.reply_task.is_none());
        // The user message stays, no reply was appended.
        assert_eq!(app.conversation.transcript().len(), 2);
    }
}
