//! UI rendering

use crate::app::{App, Tab};
use arena_core::{ArenaEntry, Bug};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Arena => draw_arena(f, app, chunks[1]),
        Tab::Records => draw_records(f, app, chunks[1]),
        Tab::Tournament => draw_tournament(f, app, chunks[1]),
        Tab::Help => draw_help(f, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Bug Arena "))
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Arena => vec![
            ("↑/↓", "Select"),
            ("r/b", "Corner"),
            ("Space", "Fight"),
            ("s", "Save log"),
        ],
        Tab::Records => vec![("↑/↓", "Scroll")],
        Tab::Tournament => vec![("t", "Seed bracket"), ("Space", "Play round")],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();
    for (key, desc) in keys {
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }
    spans.push(Span::styled("[Tab]", Style::default().fg(Color::Cyan)));
    spans.push(Span::styled(" Next tab", Style::default().fg(Color::Gray)));
    spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled("[q]", Style::default().fg(Color::Cyan)));
    spans.push(Span::styled(" Quit", Style::default().fg(Color::Gray)));

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn corner_marker(app: &App, idx: usize) -> &'static str {
    if app.red_corner == Some(idx) {
        "[R] "
    } else if app.blue_corner == Some(idx) {
        "[B] "
    } else {
        "    "
    }
}

fn draw_arena(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    // Roster list with corner markers
    let items: Vec<ListItem> = app
        .arena
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let cursor = if i == app.selected { "> " } else { "  " };
            let marker = corner_marker(app, i);
            let style = if app.red_corner == Some(i) {
                Style::default().fg(Color::Red)
            } else if app.blue_corner == Some(i) {
                Style::default().fg(Color::Blue)
            } else if i == app.selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!(
                "{}{}{} ({})",
                cursor, marker, entry.bug.name, entry.record
            ))
            .style(style)
        })
        .collect();
    let roster =
        List::new(items).block(Block::default().borders(Borders::ALL).title(" Roster "));
    f.render_widget(roster, chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(chunks[1]);

    // Corner cards
    let corners = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(right[0]);
    draw_corner_card(
        f,
        corners[0],
        " Red corner ",
        Color::Red,
        app.red_corner.map(|i| &app.arena.entries()[i]),
    );
    draw_corner_card(
        f,
        corners[1],
        " Blue corner ",
        Color::Blue,
        app.blue_corner.map(|i| &app.arena.entries()[i]),
    );

    // Battle log, newest last
    let log_items: Vec<ListItem> = app
        .log
        .iter()
        .rev()
        .take(right[1].height.saturating_sub(2) as usize)
        .rev()
        .map(|m| ListItem::new(m.as_str()))
        .collect();
    let log =
        List::new(log_items).block(Block::default().borders(Borders::ALL).title(" Battle Log "));
    f.render_widget(log, right[1]);
}

fn draw_corner_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    entry: Option<&ArenaEntry>,
) {
    let text = match entry {
        Some(entry) => bug_lines(&entry.bug),
        None => vec![Line::from("empty - press [r] or [b] on the roster")],
    };
    let card = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(color)),
    );
    f.render_widget(card, area);
}

fn bug_lines(bug: &Bug) -> Vec<Line<'static>> {
    let trait_label = |label: Option<String>| label.unwrap_or_else(|| "—".to_string());
    vec![
        Line::from(Span::styled(
            bug.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            bug.species.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(format!(
            "ATK {:.0}  DEF {:.0}  SPD {:.0}",
            bug.attack, bug.defense, bug.speed
        )),
        Line::from(format!(
            "attack: {}",
            trait_label(bug.attack_type.map(|t| t.to_string()))
        )),
        Line::from(format!(
            "defense: {}",
            trait_label(bug.defense_type.map(|t| t.to_string()))
        )),
        Line::from(format!(
            "size: {}",
            trait_label(bug.size.map(|s| s.to_string()))
        )),
    ]
}

fn draw_records(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "{:<14} {:>7} {:>7} {:>8}  {}",
                "Name", "Record", "Win %", "Power", "Flair"
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    // Leaderboard order: most wins first.
    let mut entries: Vec<&ArenaEntry> = app.arena.entries().iter().collect();
    entries.sort_by(|a, b| b.record.wins.cmp(&a.record.wins));

    for entry in entries {
        let flair = entry
            .flair
            .map(|f| f.to_string())
            .unwrap_or_default();
        lines.push(Line::from(format!(
            "{:<14} {:>7} {:>6.1}% {:>8.0}  {}",
            entry.bug.name,
            entry.record.to_string(),
            entry.record.win_rate(),
            entry.bug.power_level(),
            flair
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{} battles fought", app.arena.history().len()),
        Style::default().fg(Color::DarkGray),
    )));

    let widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Records "));
    f.render_widget(widget, area);
}

fn draw_tournament(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    // Remaining field
    let remaining: Vec<ListItem> = match &app.tournament {
        Some(t) => t
            .remaining()
            .iter()
            .map(|slot| {
                let name = &app.arena.entries()[*slot].bug.name;
                ListItem::new(name.clone())
            })
            .collect(),
        None => vec![ListItem::new("press [t] to seed a bracket")],
    };
    let field =
        List::new(remaining).block(Block::default().borders(Borders::ALL).title(" In the hunt "));
    f.render_widget(field, chunks[0]);

    // Round-by-round results
    let mut lines: Vec<Line> = Vec::new();
    if let Some(tournament) = &app.tournament {
        for round in tournament.rounds() {
            lines.push(Line::from(Span::styled(
                format!("Round {}", round.number),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for m in &round.matches {
                let red = &app.arena.entries()[m.red].bug.name;
                let blue = &app.arena.entries()[m.blue].bug.name;
                let winner = &app.arena.entries()[m.winner].bug.name;
                lines.push(Line::from(format!(
                    "  {} vs {}  →  {}",
                    red, blue, winner
                )));
            }
            if let Some(bye) = round.bye {
                let name = &app.arena.entries()[bye].bug.name;
                lines.push(Line::from(format!("  {} advances on a bye", name)));
            }
        }
        if let Some(champion) = tournament.champion() {
            let name = &app.arena.entries()[champion].bug.name;
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("CHAMPION: {}", name),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        }
    }
    let rounds =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Rounds "));
    f.render_widget(rounds, chunks[1]);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("Stage battles between rostered bugs and watch the records stack up."),
        Line::from(""),
        Line::from("Arena tab:"),
        Line::from("  ↑/↓ or j/k   move the roster cursor"),
        Line::from("  r / b        put the highlighted bug in a corner"),
        Line::from("  Space        fight the staged matchup"),
        Line::from("  s            save the battle log to battle_history.json"),
        Line::from(""),
        Line::from("Bracket tab:"),
        Line::from("  t            seed a single-elimination bracket from the roster"),
        Line::from("  Space        play the next round"),
        Line::from(""),
        Line::from("Power comes from weighted stats, the type matchup, relative size,"),
        Line::from("and a little luck. Venom and chemical attackers ignore size."),
    ];
    let widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help "));
    f.render_widget(widget, area);
}
