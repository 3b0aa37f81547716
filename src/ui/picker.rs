use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::gradient::Strips;
use crate::input::{PointerEvent, PointerKind};
use crate::state::Channel;
use crate::ui::strip::RasterView;

const ACCENT: Color = Color::Rgb(187, 154, 247);
const DIM: Color = Color::Rgb(100, 100, 120);
const BORDER: Color = Color::Rgb(60, 60, 80);

/// Rows per gradient strip.
pub const STRIP_HEIGHT: u16 = 3;

/// Layout rectangles shared by drawing and mouse hit testing.
pub struct PickerLayout {
    pub title: Rect,
    pub strips_panel: Rect,
    pub swatch_panel: Rect,
    pub labels: Strips<Rect>,
    pub strips: Strips<Rect>,
    pub swatch: Rect,
    pub bottom: Rect,
}

impl PickerLayout {
    pub fn strip_sizes(&self) -> Strips<(u16, u16)> {
        Strips::new(
            (self.strips.hue.width, self.strips.hue.height),
            (self.strips.saturation.width, self.strips.saturation.height),
            (self.strips.lightness.width, self.strips.lightness.height),
        )
    }

    /// Build the pointer event for a terminal cell, if it is over a strip.
    pub fn hit(&self, column: u16, row: u16, kind: PointerKind) -> Option<PointerEvent> {
        Channel::ALL.iter().find_map(|&channel| {
            let rect = *self.strips.get(channel);
            let inside = column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height;
            inside.then(|| {
                PointerEvent::new(
                    channel,
                    kind,
                    (column - rect.x) as f64,
                    rect.width as f64,
                )
            })
        })
    }
}

/// Compute the layout rectangles for the picker screen.
pub fn get_layout_rects(area: Rect) -> PickerLayout {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(outer[1]);

    let strips_block = Block::default().borders(Borders::RIGHT);
    let strips_inner = strips_block.inner(columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(STRIP_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(STRIP_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(STRIP_HEIGHT),
            Constraint::Min(0),
        ])
        .split(strips_inner);

    // Two columns of margin on each side of a strip.
    let inset = |r: Rect| Rect::new(r.x + 2, r.y, r.width.saturating_sub(4), r.height);

    let swatch_block = Block::default().borders(Borders::ALL);
    let swatch = swatch_block.inner(columns[1]);

    PickerLayout {
        title: outer[0],
        strips_panel: columns[0],
        swatch_panel: columns[1],
        labels: Strips::new(inset(rows[1]), inset(rows[4]), inset(rows[7])),
        strips: Strips::new(inset(rows[2]), inset(rows[5]), inset(rows[8])),
        swatch,
        bottom: outer[2],
    }
}

pub fn render_picker(f: &mut Frame, app: &App, layout: &PickerLayout) {
    render_top_bar(f, app, layout.title);
    render_strips(f, app, layout);
    render_swatch(f, app, layout);
    render_bottom_bar(f, layout.bottom);
}

fn render_top_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        " HSL Picker",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(format!("  {}", msg), Style::default().fg(DIM)));
    }

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(BORDER)),
    );
    f.render_widget(title, area);
}

fn render_strips(f: &mut Frame, app: &App, layout: &PickerLayout) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(BORDER));
    f.render_widget(block, layout.strips_panel);

    let readouts = app.readouts();
    for channel in Channel::ALL {
        let focused = app.focus == channel;
        let value = readouts.value(channel);

        let label_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM)
        };
        let value_style = if value.previewing {
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC)
        } else {
            Style::default().fg(Color::White)
        };

        let label = Line::from(vec![
            Span::styled(if focused { "> " } else { "  " }, label_style),
            Span::styled(channel.label(), label_style),
            Span::styled(
                format!("  {}{}", value.text, channel.suffix()),
                value_style,
            ),
        ]);
        f.render_widget(Paragraph::new(label), *layout.labels.get(channel));

        f.render_widget(
            RasterView {
                raster: app.strips.get(channel),
            },
            *layout.strips.get(channel),
        );
    }
}

fn render_swatch(f: &mut Frame, app: &App, layout: &PickerLayout) {
    let block = Block::default()
        .title(Span::styled(" Color ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER));
    f.render_widget(block, layout.swatch_panel);

    let readouts = app.readouts();
    let swatch = app.state.rgba().to_ratatui_color();
    let tone = readouts.tone.to_ratatui_color();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", readouts.hex),
            Style::default().fg(tone).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", readouts.rgb),
            Style::default().fg(tone),
        )),
        Line::from(Span::styled(
            format!("  {}", readouts.hsl),
            Style::default().fg(tone),
        )),
        Line::from(""),
    ];

    // Cells are filled with the RGB form of this string.
    lines.push(Line::from(vec![
        Span::styled("  fill ", Style::default().fg(tone).add_modifier(Modifier::DIM)),
        Span::styled(readouts.swatch_css.clone(), Style::default().fg(tone)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  text ", Style::default().fg(tone).add_modifier(Modifier::DIM)),
        Span::styled(readouts.tone.hex(), Style::default().fg(tone)),
    ]));
    lines.push(Line::from(""));

    for value in &readouts.values {
        let mut style = Style::default().fg(value.tone.to_ratatui_color());
        if value.previewing {
            style = style.add_modifier(Modifier::ITALIC);
        }
        lines.push(Line::from(Span::styled(
            format!("  {} {}{}", value.channel.short(), value.text, value.channel.suffix()),
            style,
        )));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(swatch));
    f.render_widget(paragraph, layout.swatch);
}

fn render_bottom_bar(f: &mut Frame, area: Rect) {
    let spans = vec![
        Span::styled(" click", Style::default().fg(ACCENT)),
        Span::styled(":pick ", Style::default().fg(DIM)),
        Span::styled("\u{2191}/\u{2193}", Style::default().fg(ACCENT)),
        Span::styled(":channel ", Style::default().fg(DIM)),
        Span::styled("\u{2190}/\u{2192}", Style::default().fg(ACCENT)),
        Span::styled(":adjust ", Style::default().fg(DIM)),
        Span::styled("Shift+\u{2190}/\u{2192}", Style::default().fg(ACCENT)),
        Span::styled(":\u{00d7}10 ", Style::default().fg(DIM)),
        Span::styled("r", Style::default().fg(ACCENT)),
        Span::styled(":reset ", Style::default().fg(DIM)),
        Span::styled("?", Style::default().fg(ACCENT)),
        Span::styled(":help ", Style::default().fg(DIM)),
        Span::styled("q", Style::default().fg(ACCENT)),
        Span::styled(":quit", Style::default().fg(DIM)),
    ];

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
