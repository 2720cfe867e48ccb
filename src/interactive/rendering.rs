//! TUI rendering with ratatui
//!
//! Draws a [`ViewModel`] snapshot; nothing here touches game state.

use crate::game::view::RECENT_SEPARATOR;
use crate::game::{FeedbackView, GuessLetter, Phase, RecentStrip, ViewModel, WordListPage};
use crate::output::formatters::{TRACK_DOT, percent_label, rank_track};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const YELLOW: [u8; 3] = [0xf3, 0xda, 0x25];
const LIGHT_GRAY: [u8; 3] = [0xde, 0xde, 0xde];
const WHITE: [u8; 3] = [0xf5, 0xf5, 0xf5];

const STATUS_HEIGHT: u16 = 3;
const CONTROLS_HEIGHT: u16 = 1;
const STRIP_HEIGHT: u16 = 3;
const FEEDBACK_HEIGHT: u16 = 1;
const GUESS_HEIGHT: u16 = 3;
const BOARD_HEIGHT: u16 = 7;

/// Colours for fancy mode, plain attributes for simplified mode
#[derive(Debug, Clone, Copy)]
struct Theme {
    simplified: bool,
}

impl Theme {
    /// Foreground `rgb` dimmed toward black by `opacity`
    fn fg(self, rgb: [u8; 3], opacity: f64) -> Style {
        if self.simplified {
            if opacity < 0.5 {
                Style::default().add_modifier(Modifier::HIDDEN)
            } else {
                Style::default()
            }
        } else {
            Style::default().fg(fade(rgb, opacity))
        }
    }

    fn accent(self, opacity: f64) -> Style {
        self.fg(YELLOW, opacity).add_modifier(Modifier::BOLD)
    }

    fn muted(self) -> Style {
        if self.simplified {
            Style::default()
        } else {
            Style::default().fg(fade(LIGHT_GRAY, 1.0))
        }
    }

    /// Black on yellow, or reversed video
    fn highlight(self) -> Style {
        self.highlight_faded(1.0)
    }

    fn highlight_faded(self, opacity: f64) -> Style {
        if self.simplified {
            self.fg(WHITE, opacity).add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(fade(YELLOW, opacity))
                .add_modifier(Modifier::BOLD)
        }
    }

    fn block(self, title: &str) -> Block<'static> {
        let border_type = if self.simplified {
            BorderType::Plain
        } else {
            BorderType::Rounded
        };
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_type(border_type)
    }
}

fn fade(rgb: [u8; 3], opacity: f64) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    let [r, g, b] = rgb.map(|c| (f64::from(c) * opacity).round() as u8);
    Color::Rgb(r, g, b)
}

/// Status bar, main area and controls line
fn regions(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(CONTROLS_HEIGHT),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Inner width of the found-words strip and height of the main area for a terminal size
#[must_use]
pub fn word_list_area(area: Rect) -> (u16, u16) {
    let (_, main, _) = regions(area);
    (main.width.saturating_sub(2), main.height)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, view: &ViewModel, simplified: bool) {
    let theme = Theme { simplified };

    if view.phase == Phase::Splash {
        render_splash(f, view, theme, f.area());
        return;
    }

    let (status, main, controls) = regions(f.area());
    render_status(f, view, theme, status);
    render_controls(f, theme, controls);

    if let Some(page) = &view.word_list {
        render_word_list(f, page, theme, main);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(STRIP_HEIGHT),
            Constraint::Length(FEEDBACK_HEIGHT),
            Constraint::Length(GUESS_HEIGHT),
            Constraint::Min(BOARD_HEIGHT),
        ])
        .split(main);

    if let Some(recent) = &view.recent {
        render_recent(f, recent, theme, chunks[0]);
    }
    if let Some(feedback) = &view.feedback {
        render_feedback(f, feedback, theme, chunks[1]);
    }
    render_guess(f, view, theme, chunks[2]);
    render_board(f, view, theme, chunks[3]);
}

fn render_splash(f: &mut Frame, view: &ViewModel, theme: Theme, area: Rect) {
    let opacity = view.splash_opacity;
    let lines = vec![
        Line::from(Span::styled("🐝", theme.fg(WHITE, opacity))),
        Line::from(Span::styled("Terminal Bee", theme.accent(opacity))),
        Line::from(""),
        Line::from(Span::styled("How many words can you", theme.fg(WHITE, opacity))),
        Line::from(Span::styled("make with 7 letters?", theme.fg(WHITE, opacity))),
        Line::from(""),
        Line::from(Span::styled("[ Play ]", theme.highlight_faded(opacity))),
        Line::from(Span::styled("Enter or Space to start", theme.muted())),
    ];

    let height = lines.len() as u16;
    let top = area.height.saturating_sub(height) / 2;
    let inner = Rect::new(area.x, area.y + top, area.width, height.min(area.height));

    let splash = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(splash, inner);
}

fn render_status(f: &mut Frame, view: &ViewModel, theme: Theme, area: Rect) {
    let status = &view.status;
    let (before, after) = rank_track(status.rank);

    let line = Line::from(vec![
        Span::styled(status.rank.label, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(before, theme.accent(1.0)),
        Span::styled("(", theme.accent(1.0)),
        Span::styled(status.current_points.to_string(), theme.highlight()),
        Span::styled(")", theme.accent(1.0)),
        Span::styled(after, theme.muted()),
    ]);

    let percent = percent_label(status.current_points, status.total_points);
    let block = theme.block(&format!(
        "{} / {} points · {percent}",
        status.current_points, status.total_points
    ));
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_recent(f: &mut Frame, recent: &RecentStrip, theme: Theme, area: Rect) {
    let mut spans = Vec::new();

    // The ticker is a word fragment followed by its separator
    let split = recent.ticker.find(' ').unwrap_or(recent.ticker.len());
    let (word, gap) = recent.ticker.split_at(split);
    if recent.ticker_pangram {
        spans.push(Span::styled(word.to_string(), theme.highlight()));
    } else {
        spans.push(Span::raw(word.to_string()));
    }
    spans.push(Span::raw(gap.to_string()));

    for (i, older) in recent.older.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(RECENT_SEPARATOR));
        }
        if older.pangram {
            spans.push(Span::styled(older.text.clone(), theme.highlight()));
        } else {
            spans.push(Span::raw(older.text.clone()));
        }
    }

    let strip = Paragraph::new(Line::from(spans)).block(theme.block("Found words · Tab"));
    f.render_widget(strip, area);
}

fn render_word_list(f: &mut Frame, page: &WordListPage, theme: Theme, area: Rect) {
    let mut lines = vec![
        Line::from(format!("You have found {} words", page.found_count)),
        Line::from(""),
    ];

    for row in &page.rows {
        let mut spans = Vec::new();
        for (i, cell) in row.cells.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            if cell.pangram {
                spans.push(Span::styled(cell.text.clone(), theme.highlight()));
            } else {
                spans.push(Span::raw(cell.text.clone()));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(Span::styled(row.divider.clone(), theme.muted())));
    }

    if let Some(dots) = page.dots {
        let mut spans = Vec::new();
        for i in 0..dots.count {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if i == dots.current {
                theme.accent(1.0)
            } else {
                theme.muted()
            };
            spans.push(Span::styled(TRACK_DOT, style));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
    }

    let list =
        Paragraph::new(lines).block(theme.block("Found words · ←/→ to page · Tab to close"));
    f.render_widget(list, area);
}

fn render_feedback(f: &mut Frame, feedback: &FeedbackView, theme: Theme, area: Rect) {
    let opacity = feedback.opacity;
    let line = if feedback.rejected {
        let style = if theme.simplified {
            theme.fg(WHITE, opacity).add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(fade(WHITE, opacity)).bg(Color::Black)
        };
        Line::from(Span::styled(format!(" {} ", feedback.message), style))
    } else {
        let points = format!("+{}", feedback.points);
        let label_style = if feedback.pangram {
            theme.highlight_faded(opacity)
        } else {
            theme.fg(WHITE, opacity).add_modifier(Modifier::UNDERLINED)
        };
        Line::from(vec![
            Span::raw(" ".repeat(points.len() + 1)),
            Span::styled(format!(" {} ", feedback.message), label_style),
            Span::raw(" "),
            Span::styled(points, theme.accent(opacity)),
        ])
    };

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn guess_spans(guess: &[GuessLetter], cursor_visible: bool, theme: Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(guess.len() + 2);
    if cursor_visible {
        spans.push(Span::raw(" "));
    }
    for letter in guess {
        let style = if letter.is_center {
            theme.accent(1.0)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(letter.letter.to_string(), style));
    }
    if cursor_visible {
        spans.push(Span::styled("⎸", theme.accent(1.0)));
    }
    spans
}

fn render_guess(f: &mut Frame, view: &ViewModel, theme: Theme, area: Rect) {
    let line = Line::from(guess_spans(&view.guess, view.cursor_visible, theme));
    let guess = Paragraph::new(vec![Line::from(""), line]).alignment(Alignment::Center);
    f.render_widget(guess, area);
}

fn render_board(f: &mut Frame, view: &ViewModel, theme: Theme, area: Rect) {
    let outer_style = if theme.simplified {
        theme.fg(WHITE, view.outer_opacity)
    } else {
        theme
            .fg(WHITE, view.outer_opacity)
            .bg(Color::Rgb(0x30, 0x30, 0x30))
            .add_modifier(Modifier::BOLD)
    };
    let center_style = theme.highlight();

    let cell = |letter: char, style: Style| Span::styled(format!(" {letter} "), style);
    let gap = |width: usize| Span::raw(" ".repeat(width));
    let [top, top_left, top_right, bottom_left, bottom_right, bottom] = view.outer;

    let lines = vec![
        Line::from(vec![cell(top, outer_style)]),
        Line::from(""),
        Line::from(vec![cell(top_left, outer_style), gap(5), cell(top_right, outer_style)]),
        Line::from(vec![cell(view.center, center_style)]),
        Line::from(vec![
            cell(bottom_left, outer_style),
            gap(5),
            cell(bottom_right, outer_style),
        ]),
        Line::from(""),
        Line::from(vec![cell(bottom, outer_style)]),
    ];

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_controls(f: &mut Frame, theme: Theme, area: Rect) {
    let help = Paragraph::new(
        "Backspace: Delete | Space: Shuffle | Enter: Submit | Tab: Found words | Ctrl+R: Reset | Ctrl+C: Quit",
    )
    .alignment(Alignment::Center)
    .style(if theme.simplified {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    });
    f.render_widget(help, area);
}
