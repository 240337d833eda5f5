//! Layout and drawing: legend, bordered cup grid, shadow, pause and game over.

use crate::app::Screen;
use crate::figure::FigureKind;
use crate::game::GameState;
use crate::geometry::Point;
use crate::theme::Theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Each cup cell renders as a 2-character glyph.
const TILE_FILLED: &str = "[]";
const TILE_SPACE: &str = "  ";
const CELL_WIDTH: u16 = 2;
const SIDEBAR_WIDTH: u16 = 22;

/// Draw the current screen. The renderer is read-only with respect to game
/// state; the shadow is queried, never written back.
pub fn draw(frame: &mut Frame, state: &GameState, theme: &Theme, screen: Screen, paused: bool) {
    let area = frame.area();
    let board = board_rect(area, state);
    draw_cup(frame, state, theme, board, screen);
    draw_legend(frame, state, theme, board);
    match screen {
        Screen::GameOver => draw_game_over(frame, state, theme, area),
        Screen::Playing if paused => draw_paused(frame, theme, area),
        Screen::Playing => {}
    }
}

/// Bordered board rect, centred with room for the sidebar on the right.
fn board_rect(area: Rect, state: &GameState) -> Rect {
    let bw = state.cup.width() as u16 * CELL_WIDTH + 2;
    let bh = state.cup.height() as u16 + 2;
    let total_w = bw + SIDEBAR_WIDTH;
    Rect {
        x: area.x + area.width.saturating_sub(total_w) / 2,
        y: area.y + area.height.saturating_sub(bh) / 2,
        width: bw.min(area.width),
        height: bh.min(area.height),
    }
}

/// Cup grid: settled cells from the cup, the falling figure and its shadow
/// overlaid on top. The falling figure wins over a coincident shadow or
/// settled cell; this is presentation only and never feeds back into the cup.
fn draw_cup(frame: &mut Frame, state: &GameState, theme: &Theme, board: Rect, screen: Screen) {
    let figure = state.figure_cells();
    let shadow = state.shadow_cells();
    let figure_style = Style::default()
        .fg(theme.figure_color(state.figure.kind.color_index()))
        .add_modifier(Modifier::BOLD);
    let shadow_style = Style::default().fg(theme.shadow);

    let mut lines = Vec::with_capacity(state.cup.height());
    for y in 0..state.cup.height() {
        let mut spans = Vec::with_capacity(state.cup.width());
        for x in 0..state.cup.width() {
            let here = Point::new(x as i32, y as i32);
            // No falling figure to overlay once the game has ended.
            if screen == Screen::Playing && figure.contains(&here) {
                spans.push(Span::styled(TILE_FILLED, figure_style));
            } else if let Some(crate::cup::CellState::Settled(kind)) = state.cup.get(x, y) {
                let style = Style::default()
                    .fg(theme.figure_color(kind.color_index()))
                    .add_modifier(Modifier::BOLD);
                spans.push(Span::styled(TILE_FILLED, style));
            } else if screen == Screen::Playing && shadow.contains(&here) {
                spans.push(Span::styled(TILE_FILLED, shadow_style));
            } else {
                spans.push(Span::raw(TILE_SPACE));
            }
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.div_line));
    frame.render_widget(Paragraph::new(lines).block(block), board);
}

/// Sidebar legend: score, next figure name with a mini preview, controls.
fn draw_legend(frame: &mut Frame, state: &GameState, theme: &Theme, board: Rect) {
    let x = board.x + board.width;
    let sidebar = Rect {
        x,
        y: board.y,
        width: SIDEBAR_WIDTH.min(frame.area().width.saturating_sub(x)),
        height: board.height,
    };

    let title_style = Style::default()
        .fg(theme.title)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(theme.main_fg);

    let mut lines = vec![
        Line::from(Span::styled(" cuptris", title_style)),
        Line::default(),
        Line::from(Span::styled(
            format!(" score: {}", state.score),
            text_style,
        )),
        Line::from(Span::styled(format!(" next:  {}", state.next.name()), text_style)),
        Line::default(),
    ];
    lines.extend(next_preview(state.next, theme));
    lines.extend([
        Line::default(),
        Line::from(Span::styled(" h/l  move", text_style)),
        Line::from(Span::styled(" u/i  rotate", text_style)),
        Line::from(Span::styled(" k    soft drop", text_style)),
        Line::from(Span::styled(" j    hard drop", text_style)),
        Line::from(Span::styled(" q    quit", text_style)),
    ]);

    frame.render_widget(Paragraph::new(lines), sidebar);
}

/// Mini grid of the next figure's template offsets.
fn next_preview(kind: FigureKind, theme: &Theme) -> Vec<Line<'static>> {
    let cells = kind.template();
    let style = Style::default()
        .fg(theme.figure_color(kind.color_index()))
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    for y in -1..=1 {
        let mut spans = vec![Span::raw(" ")];
        for x in -1..=2 {
            if cells.contains(&Point::new(x, y)) {
                spans.push(Span::styled(TILE_FILLED, style));
            } else {
                spans.push(Span::raw(TILE_SPACE));
            }
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn draw_paused(frame: &mut Frame, theme: &Theme, area: Rect) {
    let rect = centered_rect(area, 13, 3);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.div_line));
    let text = Paragraph::new(Line::from(Span::styled(
        "paused",
        Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(Clear, rect);
    frame.render_widget(text, rect);
}

fn draw_game_over(frame: &mut Frame, state: &GameState, theme: &Theme, area: Rect) {
    let rect = centered_rect(area, 30, 5);
    let title_style = Style::default()
        .fg(theme.title)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("game over!", title_style)),
        Line::from(Span::styled(
            format!("your score: {}", state.score),
            Style::default().fg(theme.main_fg),
        )),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(theme.main_fg),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.div_line));
    let text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(Clear, rect);
    frame.render_widget(text, rect);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
