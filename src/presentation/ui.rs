use crate::application::{App, Field, Screen};
use crate::domain::ProfileDetails;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    match &app.screen {
        Screen::Setup => render_setup_form(f, app),
        Screen::Details(details) => render_details(f, details),
    }
}

fn render_setup_form(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_greeting(f, app, chunks[1]);
    render_avatar(f, chunks[2]);
    render_text_field(f, app, Field::Name, "Name", "Enter your name", &app.name, chunks[3]);
    render_text_field(f, app, Field::Age, "Age", "Enter your age", &app.age_input, chunks[4]);
    render_verification(f, app, chunks[5]);
    render_continue_button(f, app, chunks[6]);
    render_status_bar(
        f,
        "Tab/Shift+Tab: move | Enter: next/activate | Space: press button | Esc: quit",
        chunks[8],
    );
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("tprof - Profile Setup")
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_greeting(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            app.greeting(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Complete your profile to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let greeting = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(greeting, area);
}

fn render_avatar(f: &mut Frame, area: Rect) {
    let figure = vec![
        Line::from(" o "),
        Line::from("/|\\"),
        Line::from("/ \\"),
    ];
    let avatar = Paragraph::new(figure)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(avatar, area);
}

fn render_text_field(
    f: &mut Frame,
    app: &App,
    field: Field,
    title: &str,
    placeholder: &str,
    text: &str,
    area: Rect,
) {
    let focused = app.focus == field;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let content = if text.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(text)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(Paragraph::new(Line::from(content)).block(block), area);

    if focused {
        let col = cursor_column(text, app.cursor_position).min(inner.width);
        f.set_cursor_position(Position::new(inner.x + col, inner.y));
    }
}

/// Terminal column of the edit point: `cursor_position` is a byte
/// offset into the field text, while the screen advances one cell per
/// character.
fn cursor_column(text: &str, cursor_position: usize) -> u16 {
    text[..cursor_position.min(text.len())].chars().count() as u16
}

fn render_verification(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Verification Status");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(12)])
        .split(inner);

    let label_style = if app.verified {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    };
    let label = Paragraph::new(Span::styled(app.verification_label(), label_style));
    f.render_widget(label, columns[0]);

    let focused = app.focus == Field::Verify;
    let button_style = if focused {
        Style::default().bg(Color::Blue).fg(Color::White)
    } else {
        Style::default().fg(Color::Blue)
    };
    let button = Paragraph::new(Span::styled(
        format!("[ {} ]", app.verify_button_caption()),
        button_style,
    ))
    .alignment(Alignment::Right);
    f.render_widget(button, columns[1]);
}

fn render_continue_button(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Field::Continue;
    let style = if focused {
        Style::default().bg(Color::Blue).fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(Span::styled("[ Continue ]", style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, area);
}

fn render_details(f: &mut Frame, details: &ProfileDetails) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let header = Paragraph::new("tprof - Details").style(Style::default().fg(Color::Cyan));
    f.render_widget(header, chunks[0]);

    let title = Paragraph::new(Span::styled(
        "Profile Details",
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[1]);

    let name_line = Paragraph::new(details.display_name()).alignment(Alignment::Center);
    f.render_widget(name_line, chunks[2]);

    let age_style = if details.age.is_some() {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let age_line = Paragraph::new(Span::styled(details.display_age(), age_style))
        .alignment(Alignment::Center);
    f.render_widget(age_line, chunks[3]);

    render_status_bar(f, "q or Esc: quit", chunks[5]);
}

fn render_status_bar(f: &mut Frame, hint: &str, area: Rect) {
    let status = Paragraph::new(hint)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, area);
}
