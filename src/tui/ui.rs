use crate::tui::app::App;
use crate::tui::colors;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Card cell footprint, borders included
const CARD_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 5;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Card grid
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_search_bar(frame, app, chunks[0]);
    if app.is_loading {
        draw_loading(frame, chunks[1]);
    } else {
        draw_grid(frame, app, chunks[1]);
    }
    draw_status_bar(frame, app, chunks[2]);

    // Show cursor in search bar when focused
    if app.search.focused {
        let cursor_x =
            chunks[0].x + 1 + search_cursor_offset(&app.search.query, app.search.cursor_pos);
        let cursor_y = chunks[0].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

/// Cursor column inside the search bar, relative to its inner left edge.
/// `cursor_pos` is a byte offset; the cursor sits after the display width
/// of the query text up to it, behind the " \u{1F50D} " prefix (4 columns).
fn search_cursor_offset(query: &str, cursor_pos: usize) -> u16 {
    const PREFIX_WIDTH: u16 = 4;
    PREFIX_WIDTH + query[..cursor_pos].width() as u16
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.search.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search Pokémon ");

    let search_text = format!(" \u{1F50D} {}", app.search.query);
    let paragraph = Paragraph::new(search_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let message = Paragraph::new("\u{23F3} Loading Pokémon...")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    let y = area.y + area.height / 2;
    frame.render_widget(message, Rect::new(area.x, y.min(area.bottom().saturating_sub(1)), area.width, 1));
}

fn draw_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    let columns = (area.width / CARD_WIDTH).max(1) as usize;
    let rows = (area.height / CARD_HEIGHT).max(1) as usize;
    app.grid.columns = columns;
    app.grid.visible_rows = rows;

    if app.visible_count() == 0 {
        let marker = Paragraph::new("No Pokémon found!")
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        let y = area.y + area.height / 2;
        frame.render_widget(marker, Rect::new(area.x, y.min(area.bottom().saturating_sub(1)), area.width, 1));
        return;
    }

    let start = app.grid.scroll_row * columns;
    let end = (start + columns * rows).min(app.visible_count());

    for (slot, position) in (start..end).enumerate() {
        let card = match app.visible_card(position) {
            Some(card) => card,
            None => continue,
        };

        let col = (slot % columns) as u16;
        let row = (slot / columns) as u16;
        let card_area = Rect::new(
            area.x + col * CARD_WIDTH,
            area.y + row * CARD_HEIGHT,
            CARD_WIDTH.min(area.width.saturating_sub(col * CARD_WIDTH)),
            CARD_HEIGHT.min(area.height.saturating_sub(row * CARD_HEIGHT)),
        );
        if card_area.width < 4 || card_area.height < 3 {
            continue;
        }

        let is_selected = app.grid.selected == Some(position);
        let accent = colors::color_for_generation(card.id);

        let border_style = if is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" #{:04} ", card.id));

        let name_style = if is_selected {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(accent)
        };

        let lines = vec![
            Line::from(Span::styled(format!(" {}", card.display_name()), name_style)),
            Line::from(Span::styled(
                format!(" {}", crate::generation_label(card.id)),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                format!(" {}", colors::sprite_marker(card.image_url.is_some())),
                Style::default().fg(if card.image_url.is_some() {
                    Color::Green
                } else {
                    Color::DarkGray
                }),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), card_area);
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = if app.is_loading {
        format!(" \u{23F3} {}", app.status_message)
    } else {
        format!(
            " {} of {} Pokémon | {}",
            app.visible_count(),
            app.cards.len(),
            app.status_message
        )
    };

    let right_text = " Tab:Search  \u{2190}\u{2191}\u{2192}\u{2193}:Move  F5:Reload  Esc:Quit ";

    // Left-aligned text + padding + right-aligned help
    let available_width = area.width as usize;
    let left_len = left_text.chars().count();
    let right_len = right_text.chars().count();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        format!("{:width$}", left_text, width = available_width)
    };

    let status = Paragraph::new(status_str)
        .style(Style::default().fg(Color::White).bg(Color::Rgb(0, 95, 135)));

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_offset_counts_display_columns_not_bytes() {
        assert_eq!(search_cursor_offset("", 0), 4);
        assert_eq!(search_cursor_offset("pika", 4), 8);
        // 'é' is two bytes but one display column
        assert_eq!(search_cursor_offset("élan", 2), 5);
        assert_eq!(search_cursor_offset("élan", 5), 8);
    }
}
