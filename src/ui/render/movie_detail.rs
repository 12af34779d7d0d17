use super::Frame;
use crate::movies::MovieItem;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::utils::text_processing::join_present;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const BLOCK_TITLE: &str = "Details";

/// Render the detail of a single movie.
///
pub fn movie_detail(frame: &mut Frame, size: Rect, state: &mut State, movie: &MovieItem) {
    let theme = state.get_theme();
    let field = |label: &str, value: &str| {
        Line::from(vec![
            Span::styled(format!("{:<14}", label), styling::label_style(theme)),
            Span::styled(value.to_owned(), styling::normal_text_style(theme)),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            movie.title.to_owned(),
            styling::title_style(theme),
        )),
        Line::from(Span::styled(
            join_present(&[movie.rating.as_str(), movie.runtime.as_str()], " · "),
            styling::muted_text_style(theme),
        )),
        Line::from(""),
    ];
    for (label, value) in [
        ("Released", &movie.release_date),
        ("Review score", &movie.review_score),
        ("Poster", &movie.poster_url),
    ] {
        if !value.is_empty() {
            lines.push(field(label, value.as_str()));
        }
    }
    lines.push(Line::from(""));
    lines.extend(
        movie
            .synopsis
            .lines()
            .map(|line| {
                Line::from(Span::styled(
                    line.to_owned(),
                    styling::normal_text_style(theme),
                ))
            }),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(BLOCK_TITLE)
        .border_style(styling::normal_block_border_style(theme));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, size);
}

/// Render the empty detail pane shown before anything is selected.
///
pub fn placeholder(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let mut lines = vec![Line::from(""); (size.height / 2).saturating_sub(1) as usize];
    lines.push(Line::from(Span::styled(
        "Select a movie to see its details",
        styling::muted_text_style(theme),
    )));
    let block = Block::default()
        .borders(Borders::ALL)
        .title(BLOCK_TITLE)
        .border_style(styling::normal_block_border_style(theme));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, size);
}
