//! Tally TUI - Actor-based expense splitting tool
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events

mod app;
mod constants;
mod messages;
mod models;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::AppActor;
use messages::ui_events::{key_to_ui_event, AddFriendField, InputMode, Panel, SplitField};
use messages::{RenderState, UiEvent};
use models::format_amount;
use ui::{balance_color, balance_line, render_input};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", constants::LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn app actor
    let app_actor = AppActor::new(render_tx);
    tokio::spawn(app_actor.run(ui_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_panel,
                    current_state.input_mode,
                    current_state.show_help,
                    current_state.show_add_friend,
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Friends sidebar
            Constraint::Percentage(60), // Split form
        ])
        .split(main_chunks[0]);

    draw_friends_list(f, state, content_chunks[0]);
    draw_split_pane(f, state, content_chunks[1]);
    draw_status_bar(f, state, main_chunks[1]);

    // Popups
    if state.show_add_friend {
        draw_add_friend_popup(f, state, area);
    }

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_friends_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Friends;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let items: Vec<ListItem> = state
        .friends
        .iter()
        .map(|friend| {
            let is_selected = state.selected_friend == Some(friend.id);
            let marker = if is_selected { "> " } else { "  " };
            let name_line = Line::from(Span::styled(
                format!("{}{}", marker, friend.name),
                if is_selected {
                    Style::default().fg(Color::Yellow).bold()
                } else {
                    Style::default().bold()
                },
            ));
            let balance = Line::from(Span::styled(
                format!("  {}", balance_line(friend)),
                Style::default().fg(balance_color(friend.balance)),
            ));
            ListItem::new(vec![name_line, balance])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Friends (Enter:select a:add) "),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut list_state = ListState::default();
    list_state.select(Some(state.highlighted));

    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_split_pane(f: &mut Frame, state: &RenderState, area: Rect) {
    let Some(friend) = state.selected_friend_record() else {
        let placeholder = Paragraph::new("Select a friend to split a bill.")
            .block(Block::default().borders(Borders::ALL).title(" Split a Bill "))
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: false });
        f.render_widget(placeholder, area);
        return;
    };

    let is_focused = state.active_panel == Panel::Split;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" Split a Bill with {} ", friend.name));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Bill value
            Constraint::Length(3), // Your share
            Constraint::Length(3), // Friend's share (derived)
            Constraint::Length(3), // Who is paying
            Constraint::Min(0),
        ])
        .split(inner);

    let editing = state.input_mode == InputMode::Editing;

    let bill_focused = is_focused && state.split_field == SplitField::Bill;
    f.render_widget(
        render_input(&state.split.bill, " Bill value ", bill_focused, editing),
        chunks[0],
    );

    let share_focused = is_focused && state.split_field == SplitField::UserPaid;
    f.render_widget(
        render_input(&state.split.user_paid, " Your share ", share_focused, editing),
        chunks[1],
    );

    // Derived, read-only: always bill - your share
    let friend_share = state
        .split
        .friend_share()
        .map(format_amount)
        .unwrap_or_default();
    let friend_share_title = format!(" {}'s share ", friend.name);
    let derived = Paragraph::new(friend_share)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(friend_share_title),
        );
    f.render_widget(derived, chunks[2]);

    let payer_focused = is_focused && state.split_field == SplitField::Payer;
    let payer_style = if payer_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let payer = Paragraph::new(state.split.payer.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(payer_style)
            .title(" Who is paying (p:cycle) "),
    );
    f.render_widget(payer, chunks[3]);

    // Cursor at the end of the field being edited
    if editing && is_focused {
        let (content, field_area) = match state.split_field {
            SplitField::Bill => (state.split.bill.as_str(), chunks[0]),
            SplitField::UserPaid => (state.split.user_paid.as_str(), chunks[1]),
            SplitField::Payer => return,
        };
        let max_x = field_area.x + field_area.width.saturating_sub(2);
        let cursor_x = (field_area.x + content.len() as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, field_area.y + 1));
    }
}

fn draw_add_friend_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let popup_area = centered_rect(50, 35, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Add Friend (Enter:add Tab:field Esc:cancel) ")
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup_area);

    f.render_widget(Clear, popup_area);
    f.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Image URL
            Constraint::Min(0),
        ])
        .split(inner);

    let name_focused = state.add_friend_field == AddFriendField::Name;
    f.render_widget(
        render_input(&state.add_friend.name, " Friend's name ", name_focused, true),
        chunks[0],
    );

    let image_focused = state.add_friend_field == AddFriendField::Image;
    f.render_widget(
        render_input(
            &state.add_friend.image,
            " Friend's image URL ",
            image_focused,
            true,
        ),
        chunks[1],
    );

    let (content, field_area) = if name_focused {
        (state.add_friend.name.as_str(), chunks[0])
    } else {
        (state.add_friend.image.as_str(), chunks[1])
    };
    let max_x = field_area.x + field_area.width.saturating_sub(2);
    let cursor_x = (field_area.x + content.len() as u16 + 1).min(max_x);
    f.set_cursor_position(Position::new(cursor_x, field_area.y + 1));
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.show_add_friend {
        " Type a name | Tab:switch field | Enter:add | Esc:cancel "
    } else if state.input_mode == InputMode::Editing {
        " ESC:stop editing | Tab:next field | type an amount "
    } else if state.active_panel == Panel::Split {
        " e:edit field | ↑/↓:field | p:payer | s:split | Esc:close | ?:help "
    } else {
        " ↑/↓:navigate | Enter:select | a:add friend | Tab:panel | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 TALLY TUI - Keyboard Shortcuts

 FRIENDS
   ↑ / ↓              Navigate the list
   Enter / Space      Select or deselect a friend
   a                  Open the add-friend form

 SPLIT A BILL (friend selected)
   Tab                Jump between list and form
   ↑ / ↓              Move between fields
   e / Enter          Edit the focused amount
   p                  Cycle who is paying
   s                  Split the bill
   Esc                Close the form

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
