use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Gauge, Paragraph, Widget},
};

use crate::app::App;
use crate::timer::TimerPhase;
use crate::ui::style::ACCENT;
use crate::util::string::StringUtils;

pub fn render_sidebar(app: &App, area: Rect, buf: &mut Buffer) {
    let participants = app.config.seed.participants.len() as u16;
    let learners = app.config.seed.top_learners.len() as u16;

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(participants + 3),
            Constraint::Min(learners + 2),
        ])
        .split(area);

    render_timer(app, sections[0], buf);
    render_study_room(app, sections[1], buf);
    render_top_learners(app, sections[2], buf);
}

fn render_timer(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .title(" Focus Timer ");
    let inner = block.inner(area);
    block.render(area, buf);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let (phase, color) = match app.timer.phase() {
        TimerPhase::Idle => ("paused", Color::Yellow),
        TimerPhase::Running => ("focusing", Color::Green),
        TimerPhase::Expired => ("complete", ACCENT),
    };

    Paragraph::new(vec![
        Line::from(app.timer.clock_label()).bold().fg(color).centered(),
        Line::from(phase).fg(Color::Gray).centered(),
    ])
    .render(rows[0], buf);

    Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio((app.timer.progress_percent() / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}%", app.timer.progress_percent()))
        .render(rows[1], buf);

    Paragraph::new(Line::from("space start/pause · r reset").fg(Color::DarkGray).centered())
        .render(rows[2], buf);
}

fn render_study_room(app: &App, area: Rect, buf: &mut Buffer) {
    let seed = &app.config.seed;
    let mut lines = vec![Line::from(format!(
        "{} studying now",
        StringUtils::maybe_pluralize_count(seed.online_participants(), ("student", "students"))
    ))
    .fg(Color::Green)];

    lines.extend(seed.participants.iter().map(|p| {
        let dot = if p.is_online { Span::from("●").fg(Color::Green) } else { Span::from("○").fg(Color::DarkGray) };
        Line::from(vec![Span::from(format!("{} {} ", p.avatar, p.name)), dot])
    }));

    Paragraph::new(lines)
        .block(Block::bordered().border_type(BorderType::Rounded).title(" Study Room "))
        .render(area, buf);
}

fn render_top_learners(app: &App, area: Rect, buf: &mut Buffer) {
    let lines: Vec<Line> = app
        .config
        .seed
        .leaderboard()
        .into_iter()
        .map(|l| {
            Line::from(vec![
                Span::from(format!("#{} ", l.rank)).bold().fg(ACCENT),
                Span::from(format!("{} {} ", l.avatar, l.name)),
                Span::from(format!("{} pts · {} · {} pages", l.points, l.study_time, l.pages_read)).fg(Color::Gray),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .block(Block::bordered().border_type(BorderType::Rounded).title(" Today's Top Learners "))
        .render(area, buf);
}
