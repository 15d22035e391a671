use neurify_core::{Sender, Service, Theme};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode, Screen};

/// Widget colors derived from the persisted theme.
struct Palette {
    accent: Color,
    user: Color,
    bot: Color,
    dim: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            accent: Color::Cyan,
            user: Color::Cyan,
            bot: Color::Yellow,
            dim: Color::DarkGray,
        },
        Theme::Bright => Palette {
            accent: Color::Blue,
            user: Color::Blue,
            bot: Color::Magenta,
            dim: Color::Gray,
        },
    }
}

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(app, frame, header_area);

    match app.screen {
        Screen::Chat => render_chat_screen(app, frame, body_area),
        Screen::Services => render_services_screen(app, frame, body_area),
    }

    render_footer(app, frame, footer_area);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let colors = palette(app.theme());

    let title = Line::from(vec![
        Span::styled(" Neurify ", Style::default().fg(colors.accent).bold()),
        Span::styled("AI Marketing Agency ", Style::default().fg(Color::White)),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Gray),
        ),
        Span::raw(" "),
        Span::styled(
            format!("[{}]", app.theme().as_str()),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let header = Paragraph::new(title).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(header, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default().bg(Color::Blue).fg(Color::White),
        InputMode::Editing => Style::default().bg(Color::Yellow).fg(Color::Black),
    };

    let mode_text = match app.screen {
        Screen::Chat => " CHAT ",
        Screen::Services => " SERVICES ",
    };

    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let hints = match (app.screen, app.input_mode) {
        (Screen::Chat, InputMode::Editing) => vec![
            Span::styled(" Enter ", key_style),
            Span::styled(" send ", label_style),
            Span::styled(" Esc ", key_style),
            Span::styled(" stop typing ", label_style),
        ],
        (Screen::Chat, InputMode::Normal) => vec![
            Span::styled(" i ", key_style),
            Span::styled(" type ", label_style),
            Span::styled(" j/k ", key_style),
            Span::styled(" scroll ", label_style),
            Span::styled(" Tab ", key_style),
            Span::styled(" services ", label_style),
            Span::styled(" t ", key_style),
            Span::styled(" theme ", label_style),
            Span::styled(" q ", key_style),
            Span::styled(" quit ", label_style),
        ],
        (Screen::Services, _) => vec![
            Span::styled(" j/k ", key_style),
            Span::styled(" select ", label_style),
            Span::styled(" J/K ", key_style),
            Span::styled(" scroll ", label_style),
            Span::styled(" Tab ", key_style),
            Span::styled(" chat ", label_style),
            Span::styled(" t ", key_style),
            Span::styled(" theme ", label_style),
            Span::styled(" q ", key_style),
            Span::styled(" quit ", label_style),
        ],
    };

    let footer_content = Line::from(
        vec![
            Span::styled(mode_text, mode_style),
            Span::styled(" ", label_style),
        ]
        .into_iter()
        .chain(hints)
        .collect::<Vec<_>>(),
    );

    let footer = Paragraph::new(footer_content).style(Style::default().bg(Color::Black));
    frame.render_widget(footer, area);
}

fn render_chat_screen(app: &mut App, frame: &mut Frame, area: Rect) {
    let colors = palette(app.theme());

    let [chat_area, input_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

    // Store chat area dimensions for scroll calculations (inner size minus borders)
    app.chat_height = chat_area.height.saturating_sub(2);
    app.chat_width = chat_area.width.saturating_sub(2);

    let editing = app.input_mode == InputMode::Editing;

    let status = if app.conversation.is_busy() {
        "typing"
    } else {
        "online"
    };
    let chat_border = if editing { colors.dim } else { colors.accent };
    let chat_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(chat_border))
        .title(format!(" Neurify AI | {} ", status));

    let mut lines: Vec<Line> = Vec::new();

    for msg in app.conversation.transcript() {
        let label = match msg.sender {
            Sender::User => Span::styled(
                "You:",
                Style::default().fg(colors.user).add_modifier(Modifier::BOLD),
            ),
            Sender::Bot => Span::styled(
                "Assistant:",
                Style::default().fg(colors.bot).add_modifier(Modifier::BOLD),
            ),
        };
        lines.push(Line::from(label));
        for line in msg.text.lines() {
            lines.push(Line::from(line.to_string()));
        }
        lines.push(Line::default());
    }

    if app.conversation.is_busy() {
        lines.push(Line::from(Span::styled(
            "Assistant:",
            Style::default().fg(colors.bot).add_modifier(Modifier::BOLD),
        )));
        // Animated ellipsis: cycles through ".", "..", "..."
        let dots = ".".repeat((app.animation_frame as usize) + 1);
        lines.push(Line::from(Span::styled(
            format!("Typing{}", dots),
            Style::default().fg(colors.dim).add_modifier(Modifier::ITALIC),
        )));
    }

    let chat = Paragraph::new(Text::from(lines))
        .block(chat_block)
        .wrap(Wrap { trim: true })
        .scroll((app.chat_scroll, 0));

    frame.render_widget(chat, chat_area);

    // Draft input at the bottom
    let input_border = if editing { colors.accent } else { colors.dim };
    let input_title = if editing { " Message " } else { " Message (i to type) " };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(input_border))
        .title(input_title);

    // Calculate visible portion of input with horizontal scrolling
    // Inner width = total width - 2 (for borders)
    let inner_width = input_area.width.saturating_sub(2) as usize;
    let cursor_pos = app.input_cursor;

    let scroll_offset = if inner_width == 0 {
        0
    } else if cursor_pos >= inner_width {
        cursor_pos - inner_width + 1
    } else {
        0
    };

    let visible_text: String = app
        .conversation
        .pending_input()
        .chars()
        .skip(scroll_offset)
        .take(inner_width)
        .collect();

    let input = Paragraph::new(visible_text)
        .style(Style::default().fg(colors.user))
        .block(input_block);

    frame.render_widget(input, input_area);

    // Show cursor when editing
    if editing {
        let cursor_x = (cursor_pos - scroll_offset) as u16;
        frame.set_cursor_position((input_area.x + cursor_x + 1, input_area.y + 1));
    }
}

fn render_services_screen(app: &mut App, frame: &mut Frame, area: Rect) {
    let colors = palette(app.theme());

    let [list_area, detail_area] =
        Layout::horizontal([Constraint::Length(34), Constraint::Min(0)]).areas(area);

    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.accent))
        .title(" Services ");

    let items: Vec<ListItem> = app
        .catalog
        .services()
        .iter()
        .map(|s| ListItem::new(format!(" {} ", s.title)))
        .collect();

    let list = List::new(items)
        .block(list_block)
        .highlight_style(
            Style::default()
                .bg(colors.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, list_area, &mut app.service_state);

    // Detail pane for the selected service
    app.detail_height = detail_area.height.saturating_sub(2);
    let selected = app.selected_service().cloned();

    let detail_title = match &selected {
        Some(service) => format!(" {} ", service.title),
        None => " Service ".to_string(),
    };
    let detail_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.dim))
        .title(detail_title);

    let lines = match &selected {
        Some(service) => service_detail_lines(service, &colors),
        None => vec![Line::from("Select a service")],
    };

    // Count wrapped lines so scrolling stops at the bottom
    let wrap_width = (detail_area.width.saturating_sub(2) as usize).max(1);
    let mut total_lines: u16 = 0;
    for line in &lines {
        let char_count: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
        if char_count == 0 {
            total_lines += 1;
        } else {
            total_lines += ((char_count / wrap_width) + 1) as u16;
        }
    }
    app.detail_total_lines = total_lines;

    let detail = Paragraph::new(Text::from(lines))
        .block(detail_block)
        .wrap(Wrap { trim: true })
        .scroll((app.detail_scroll, 0));

    frame.render_widget(detail, detail_area);
}

fn service_detail_lines(service: &Service, colors: &Palette) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(Span::styled(
        service.tagline.clone(),
        Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
    lines.push(Line::from(service.description.clone()));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "What you get",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for feature in &service.features {
        lines.push(Line::from(Span::styled(
            format!("{}:", feature.title),
            Style::default().fg(colors.bot),
        )));
        for detail in &feature.details {
            lines.push(Line::from(format!("  • {}", detail)));
        }
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "How we work",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (i, step) in service.process.iter().enumerate() {
        lines.push(Line::from(format!("  {}. {}", i + 1, step)));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "Benefits",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for benefit in &service.benefits {
        lines.push(Line::from(format!("  • {}", benefit)));
    }

    if !service.faqs.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "FAQ",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for faq in &service.faqs {
            lines.push(Line::from(Span::styled(
                format!("Q: {}", faq.question),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
            lines.push(Line::from(format!("A: {}", faq.answer)));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", service.cta_text),
        Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
    )));

    lines
}
