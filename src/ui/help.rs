use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const ACCENT: Color = Color::Rgb(187, 154, 247);
const DIM: Color = Color::Rgb(120, 120, 140);

pub fn render_help(f: &mut Frame) {
    let area = f.area();
    let width = area.width.saturating_sub(6).clamp(30, 72);
    let height = area.height.saturating_sub(4).clamp(10, 22);
    let popup = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
    .intersection(area);

    f.render_widget(Clear, popup);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Commands",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Mouse", Style::default().fg(ACCENT))),
        Line::from("  hover a strip: preview the value under the pointer"),
        Line::from("  click or drag: pick that value"),
        Line::from(""),
        Line::from(Span::styled("Keyboard", Style::default().fg(ACCENT))),
        Line::from("  Up/Down, j/k, Tab: choose channel"),
        Line::from("  Left/Right, h/l: adjust by 1  |  Shift or H/L: by 10"),
        Line::from("  r: reset  |  ?: toggle help  |  q/Esc/Ctrl+C: quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(DIM),
        )),
    ];

    let max_body_lines = height.saturating_sub(2) as usize;
    if lines.len() > max_body_lines {
        lines.truncate(max_body_lines);
    }

    let block = Block::default()
        .title(Span::styled(" Help ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    f.render_widget(paragraph, popup);
}
