use crate::tui::app::App;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::Color::White;
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table};

pub fn draw_app(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(build_header(app), chunks[0]);
    frame.render_widget(build_distance_table(app), chunks[2]);
    frame.render_widget(build_footer(app), chunks[3]);
}

fn distance_style(distance: f64, changed: bool) -> Style {
    if distance == f64::INFINITY {
        Style::default().add_modifier(Modifier::DIM)
    } else if changed {
        Style::default().fg(Color::Yellow).bold()
    } else if distance < 0.0 {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Green)
    }
}

fn format_distance(distance: f64) -> String {
    if distance == f64::INFINITY {
        format!("{:>10}", "inf")
    } else {
        format!("{:>10.3}", distance)
    }
}

fn build_header(app: &'_ App) -> Block<'_> {
    let (pass, relaxed) = app
        .current()
        .map(|p| (p.pass(), p.relaxed()))
        .unwrap_or((0, 0));

    Block::new()
        .title(Line::from(vec![
            Span::raw(" Bellgraph ").style(Style::default().bold().cyan()),
            Span::raw("-").style(Style::default().add_modifier(Modifier::DIM)),
            Span::raw(format!(" {} ", app.scenario())).style(Style::default().bold()),
            Span::raw(" Pass: ").style(Style::default().add_modifier(Modifier::DIM)),
            Span::raw(format!("{}/{}", pass, app.pass_count().saturating_sub(1)))
                .style(Style::default().bold()),
            Span::raw(" Relaxed: ").style(Style::default().add_modifier(Modifier::DIM)),
            Span::raw(format!("{}", relaxed)).style(Style::default().bold()),
            Span::raw(" "),
        ]))
        .title_alignment(Alignment::Center)
}

fn build_distance_table(app: &'_ App) -> Table<'_> {
    let rows = match app.current() {
        Some(record) => record
            .distances()
            .iter()
            .map(|(id, d)| {
                let before = app
                    .previous()
                    .and_then(|p| p.distances().get(id))
                    .unwrap_or(*d);
                let marker = if *id == app.source() { "*" } else { "" };

                Row::new(vec![
                    Cell::from(format!("{}{}", id.index(), marker)),
                    Cell::from(app.name(*id).to_owned()),
                    Cell::from(format_distance(*d))
                        .style(distance_style(*d, before != *d)),
                ])
            })
            .collect::<Vec<_>>(),
        None => Vec::new(),
    };

    Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(20),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new([
            Cell::from("Vertex"),
            Cell::from("Name"),
            Cell::from("  Distance"),
        ])
        .style(Style::default().bg(Color::DarkGray).fg(White)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::from(" Distance from Source ").style(Style::default().bold()),
            ]))
            .padding(Padding::horizontal(1)),
    )
}

fn build_footer(app: &'_ App) -> Paragraph<'_> {
    let status = match (app.is_last(), app.outcome()) {
        (false, _) => Span::raw("space: next pass  b: back  q: quit")
            .style(Style::default().add_modifier(Modifier::DIM)),
        (true, Ok(())) => {
            Span::raw("no negative cycle  (q: quit)").style(Style::default().green())
        }
        (true, Err(e)) => {
            Span::raw(format!("{}  (q: quit)", e)).style(Style::default().red().bold())
        }
    };
    Paragraph::new(Line::from(status))
}
