use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode, Screen};
use crate::tui::AppEvent;

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Resize(_, _) => {}
        AppEvent::Tick => app.tick_animation(),
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl-C quits from any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Editing => handle_editing_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    // Keys shared by both screens
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('t') => {
            app.toggle_theme();
            return;
        }
        KeyCode::Tab => {
            app.switch_screen();
            return;
        }
        _ => {}
    }

    match app.screen {
        Screen::Chat => handle_chat_normal(app, key),
        Screen::Services => handle_services_normal(app, key),
    }
}

fn handle_chat_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('i') | KeyCode::Enter => {
            app.input_mode = InputMode::Editing;
            // Cursor at the end of any existing draft
            app.input_cursor = app.conversation.pending_input().chars().count();
        }

        // Transcript scrolling
        KeyCode::Char('j') | KeyCode::Down => {
            app.chat_scroll = app.chat_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.chat_scroll = app.chat_scroll.saturating_sub(1);
        }
        KeyCode::Char('g') => app.chat_scroll = 0,
        KeyCode::Char('G') => app.scroll_chat_to_bottom(),

        _ => {}
    }
}

fn handle_services_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        // List selection
        KeyCode::Char('j') | KeyCode::Down => app.services_nav_down(),
        KeyCode::Char('k') | KeyCode::Up => app.services_nav_up(),
        KeyCode::Char('g') => app.services_nav_first(),
        KeyCode::Char('G') => app.services_nav_last(),

        // Detail pane scrolling
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.detail_half_page_down();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.detail_half_page_up();
        }
        KeyCode::Char('J') => app.detail_scroll_down(),
        KeyCode::Char('K') => app.detail_scroll_up(),

        _ => {}
    }
}

fn handle_editing_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            app.submit_message();
        }
        KeyCode::Backspace => {
            if app.input_cursor > 0 {
                app.input_cursor -= 1;
                let byte_pos = char_to_byte_index(app.conversation.pending_input(), app.input_cursor);
                app.conversation.pending_input_mut().remove(byte_pos);
            }
        }
        KeyCode::Delete => {
            let char_count = app.conversation.pending_input().chars().count();
            if app.input_cursor < char_count {
                let byte_pos = char_to_byte_index(app.conversation.pending_input(), app.input_cursor);
                app.conversation.pending_input_mut().remove(byte_pos);
            }
        }
        KeyCode::Left => {
            app.input_cursor = app.input_cursor.saturating_sub(1);
        }
        KeyCode::Right => {
            let char_count = app.conversation.pending_input().chars().count();
            app.input_cursor = (app.input_cursor + 1).min(char_count);
        }
        KeyCode::Home => {
            app.input_cursor = 0;
        }
        KeyCode::End => {
            app.input_cursor = app.conversation.pending_input().chars().count();
        }
        KeyCode::Char(c) => {
            let byte_pos = char_to_byte_index(app.conversation.pending_input(), app.input_cursor);
            app.conversation.pending_input_mut().insert(byte_pos, c);
            app.input_cursor += 1;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurify_core::{Config, ReplyDelay, Sender};

    fn app() -> App {
        App::with_config(Config::new())
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::from(code))
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_event(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_char_to_byte_index_handles_multibyte() {
        let s = "héllo";
        assert_eq!(char_to_byte_index(s, 0), 0);
        assert_eq!(char_to_byte_index(s, 1), 1);
        // é is two bytes wide
        assert_eq!(char_to_byte_index(s, 2), 3);
        assert_eq!(char_to_byte_index(s, 5), s.len());
        assert_eq!(char_to_byte_index(s, 99), s.len());
    }

    #[test]
    fn test_typing_edits_the_draft() {
        let mut app = app();
        type_str(&mut app, "hello");
        assert_eq!(app.conversation.pending_input(), "hello");
        assert_eq!(app.input_cursor, 5);
    }

    #[test]
    fn test_backspace_removes_char_before_cursor() {
        let mut app = app();
        type_str(&mut app, "héllo");
        handle_event(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.conversation.pending_input(), "héll");
        handle_event(&mut app, key(KeyCode::Left));
        handle_event(&mut app, key(KeyCode::Left));
        handle_event(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.conversation.pending_input(), "hll");
        assert_eq!(app.input_cursor, 1);
    }

    #[test]
    fn test_delete_removes_char_at_cursor() {
        let mut app = app();
        type_str(&mut app, "abc");
        handle_event(&mut app, key(KeyCode::Home));
        handle_event(&mut app, key(KeyCode::Delete));
        assert_eq!(app.conversation.pending_input(), "bc");
        assert_eq!(app.input_cursor, 0);
    }

    #[test]
    fn test_cursor_is_clamped_to_draft_length() {
        let mut app = app();
        type_str(&mut app, "ab");
        for _ in 0..5 {
            handle_event(&mut app, key(KeyCode::Right));
        }
        assert_eq!(app.input_cursor, 2);
        handle_event(&mut app, key(KeyCode::Home));
        handle_event(&mut app, key(KeyCode::Left));
        assert_eq!(app.input_cursor, 0);
    }

    #[test]
    fn test_enter_with_empty_draft_submits_nothing() {
        let mut app = app();
        handle_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.conversation.transcript().len(), 1);
        assert!(!app.conversation.is_busy());
        assert!(app.reply_task.is_none());
    }

    #[test]
    fn test_esc_leaves_editing_and_i_returns_to_end() {
        let mut app = app();
        type_str(&mut app, "draft");
        handle_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::Normal);
        app.input_cursor = 0;
        handle_event(&mut app, key(KeyCode::Char('i')));
        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.input_cursor, 5);
    }

    #[test]
    fn test_tab_switches_between_screens() {
        let mut app = app();
        handle_event(&mut app, key(KeyCode::Esc));
        handle_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.screen, Screen::Services);
        handle_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.screen, Screen::Chat);
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let mut app = app();
        let event = AppEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        handle_event(&mut app, event);
        assert!(app.should_quit);
    }

    #[test]
    fn test_plain_c_is_just_a_letter() {
        let mut app = app();
        handle_event(&mut app, key(KeyCode::Char('c')));
        assert!(!app.should_quit);
        assert_eq!(app.conversation.pending_input(), "c");
    }

    #[tokio::test]
    async fn test_enter_submits_and_reply_arrives() {
        let mut app = app();
        app.reply_delay = ReplyDelay::none();
        type_str(&mut app, "hello");
        handle_event(&mut app, key(KeyCode::Enter));
        assert!(app.conversation.is_busy());
        assert_eq!(app.conversation.transcript().len(), 2);
        // Still in editing mode, drafting the next message is allowed.
        assert_eq!(app.input_mode, InputMode::Editing);

        // A real sleep parks the runtime so the reply task's timer fires.
        for _ in 0..100 {
            app.poll_reply().await;
            if !app.conversation.is_busy() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(1)).await;
        }

        let reply = app.conversation.transcript().last().unwrap();
        assert_eq!(reply.sender, Sender::Bot);
        assert_eq!(app.conversation.transcript().len(), 3);
    }

    #[tokio::test]
    async fn test_enter_while_busy_is_ignored() {
        let mut app = app();
        type_str(&mut app, "hello");
        handle_event(&mut app, key(KeyCode::Enter));
        assert!(app.conversation.is_busy());

        type_str(&mut app, "second message");
        handle_event(&mut app, key(KeyCode::Enter));
        // The draft survives; nothing new was committed.
        assert_eq!(app.conversation.transcript().len(), 2);
        assert_eq!(app.conversation.pending_input(), "second message");

        app.abort_reply();
    }
}
