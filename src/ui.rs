use ratatui::{prelude::*, widgets::*};

use crate::models::{format_amount, Friend};

/// Renders a bordered text input field
pub fn render_input<'a>(
    content: &'a str,
    title: &'a str,
    is_focused: bool,
    is_editing: bool,
) -> Paragraph<'a> {
    let style = if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    Paragraph::new(content).block(block)
}

/// Color for a balance figure: green when the friend owes, red when you do
pub fn balance_color(balance: f64) -> Color {
    if balance > 0.0 {
        Color::Green
    } else if balance < 0.0 {
        Color::Red
    } else {
        Color::White
    }
}

/// One-line balance summary, worded from the user's point of view
pub fn balance_line(friend: &Friend) -> String {
    if friend.balance > 0.0 {
        format!("{} owes you ${}", friend.name, format_amount(friend.balance))
    } else if friend.balance < 0.0 {
        format!("You owe {} ${}", friend.name, format_amount(-friend.balance))
    } else {
        format!("You and {} are even", friend.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_AVATAR_URL;

    fn friend_with_balance(balance: f64) -> Friend {
        let mut friend = Friend::new("Sarah", DEFAULT_AVATAR_URL);
        friend.balance = balance;
        friend
    }

    #[test]
    fn test_balance_line_wording() {
        assert_eq!(
            balance_line(&friend_with_balance(20.0)),
            "Sarah owes you $20"
        );
        assert_eq!(balance_line(&friend_with_balance(-7.0)), "You owe Sarah $7");
        assert_eq!(
            balance_line(&friend_with_balance(0.0)),
            "You and Sarah are even"
        );
    }

    #[test]
    fn test_balance_color() {
        assert_eq!(balance_color(20.0), Color::Green);
        assert_eq!(balance_color(-7.0), Color::Red);
        assert_eq!(balance_color(0.0), Color::White);
    }
}
