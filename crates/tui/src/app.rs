use std::{collections::HashMap, io, thread, time::Duration};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use tokio::{spawn, sync::mpsc};
use tracing::{debug, info, warn};

use gamedex_core::{
    catalog,
    config::{AppConfig, ThemePreference},
    models::{DealResult, GameRecord},
    promo::PromoFinder,
    view::{ViewEvent, ViewState, CATEGORY_TAGS},
};

const TICK_RATE: Duration = Duration::from_millis(250);
const CAROUSEL_CARD_WIDTH: u16 = 30;
const CAROUSEL_HEIGHT: u16 = 9;

#[derive(Debug, Clone)]
struct Theme {
    bg: Color,
    fg: Color,
    accent: Color,
    accent_alt: Color,
    muted: Color,
    selection_bg: Color,
    success: Color,
    warning: Color,
}

impl Theme {
    fn dark() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Cyan,
            accent_alt: Color::Blue,
            muted: Color::DarkGray,
            selection_bg: Color::DarkGray,
            success: Color::Green,
            warning: Color::Yellow,
        }
    }

    fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            accent_alt: Color::Cyan,
            muted: Color::Gray,
            selection_bg: Color::Gray,
            success: Color::Green,
            warning: Color::Magenta,
        }
    }

    fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Dark => Self::dark(),
            ThemePreference::Light => Self::light(),
        }
    }
}

/// Per-record promotion panel state for the active render pass.
#[derive(Debug, Clone)]
enum PromoPanel {
    Checking,
    Deal(DealResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Browse,
    Search,
}

#[derive(Debug)]
enum AppEvent {
    Input(Event),
    Tick,
    DealResolved {
        pass: u64,
        slug: String,
        result: DealResult,
    },
}

/// High-level application state for the catalog browser.
pub struct GamedexApp {
    config: AppConfig,
    catalog: Vec<GameRecord>,
    highlights: Vec<GameRecord>,
    view: ViewState,
    filtered: Vec<GameRecord>,
    promo: HashMap<String, PromoPanel>,
    render_pass: u64,
    finder: PromoFinder,
    input_mode: InputMode,
    search_input: String,
    cursor: usize,
    offset: usize,
    list_height: usize,
    carousel_offset: usize,
    status: String,
    theme: Theme,
    should_quit: bool,
    event_tx: Option<mpsc::Sender<AppEvent>>,
}

impl GamedexApp {
    pub fn new(config: AppConfig, catalog: Vec<GameRecord>) -> Self {
        let theme = Theme::for_preference(config.theme);
        let highlights = catalog::highlights(&catalog, config.highlight_count);
        Self {
            config,
            catalog,
            highlights,
            view: ViewState::default(),
            filtered: Vec::new(),
            promo: HashMap::new(),
            render_pass: 0,
            finder: PromoFinder::new(),
            input_mode: InputMode::Browse,
            search_input: String::new(),
            cursor: 0,
            offset: 0,
            list_height: 1,
            carousel_offset: 0,
            status: "Ready".to_string(),
            theme,
            should_quit: false,
            event_tx: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(128);
        spawn_input_thread(event_tx.clone());
        self.event_tx = Some(event_tx);

        self.refresh_results();
        self.status = format!("Loaded {} games", self.catalog.len());
        info!(total = self.catalog.len(), "Catalog ready");

        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if self.should_quit {
                break;
            }

            let maybe_event = event_rx.recv().await;
            if !self.process_app_event(maybe_event) {
                break;
            }

            if self.should_quit {
                break;
            }
        }

        restore_terminal(&mut terminal)?;
        self.event_tx = None;
        Ok(())
    }

    fn process_app_event(&mut self, maybe_event: Option<AppEvent>) -> bool {
        match maybe_event {
            Some(AppEvent::Input(event)) => {
                self.handle_input(event);
                true
            }
            Some(AppEvent::Tick) => {
                self.handle_tick();
                true
            }
            Some(AppEvent::DealResolved { pass, slug, result }) => {
                self.handle_deal(pass, slug, result);
                true
            }
            None => false,
        }
    }

    fn handle_tick(&mut self) {
        if self.input_mode == InputMode::Search {
            self.status = format!("Search: {}", self.search_input);
        }
    }

    /// Apply a resolved promotion if its render pass is still the active
    /// one; completions from superseded passes are discarded.
    fn handle_deal(&mut self, pass: u64, slug: String, result: DealResult) {
        if pass != self.render_pass {
            debug!(pass, current = self.render_pass, "Discarding stale promotion result");
            return;
        }
        self.promo.insert(slug, PromoPanel::Deal(result));
    }

    fn handle_input(&mut self, event: Event) {
        match event {
            Event::Key(key) => match self.input_mode {
                InputMode::Search => self.handle_search_key(key),
                InputMode::Browse => self.handle_browse_key(key),
            },
            Event::Resize(_, _) => {}
            Event::Mouse(_) => {}
            Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Browse;
                self.search_input = self.view.term().to_string();
                self.status = "Search cancelled".to_string();
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::Browse;
                self.apply_view_event(ViewEvent::SubmitSearch(self.search_input.clone()));
                self.status = if self.view.term().is_empty() {
                    "Showing all games".to_string()
                } else {
                    format!("Search: {} ({} results)", self.view.term(), self.filtered.len())
                };
            }
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            KeyCode::Char(c) => {
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                    self.search_input.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-1),
            KeyCode::Char('g') if key.modifiers.is_empty() => self.move_to(0),
            KeyCode::Char('G') => self.move_to_end(),
            KeyCode::Home => self.move_to(0),
            KeyCode::End => self.move_to_end(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Search;
                self.search_input = self.view.term().to_string();
                self.status = "Type to search, Enter to apply".to_string();
            }
            KeyCode::Tab => self.cycle_category(1),
            KeyCode::BackTab => self.cycle_category(-1),
            KeyCode::Char(c) if c.is_ascii_digit() && key.modifiers.is_empty() => {
                let index = (c as usize).wrapping_sub('1' as usize);
                if let Some(tag) = CATEGORY_TAGS.get(index) {
                    self.select_category(tag);
                }
            }
            KeyCode::Left => self.scroll_carousel(-1),
            KeyCode::Right => self.scroll_carousel(1),
            KeyCode::Char('t') if key.modifiers.is_empty() => self.toggle_theme(),
            KeyCode::Char('r') if key.modifiers.is_empty() => self.reset_view(),
            KeyCode::Esc => {
                if self.view.reset_visible() {
                    self.reset_view();
                }
            }
            _ => {}
        }
    }

    fn apply_view_event(&mut self, event: ViewEvent) {
        self.view.apply(event);
        self.refresh_results();
    }

    /// Recompute the filtered set and start a fresh promotion pass. Every
    /// call fully replaces the grid contents.
    fn refresh_results(&mut self) {
        self.filtered = catalog::filter(&self.catalog, self.view.term(), self.view.category());
        self.cursor = 0;
        self.offset = 0;
        self.start_promo_pass();
    }

    /// Spawn one promotion lookup per visible record that carries a slug.
    /// Lookups are fire-and-forget; completions come back through the app
    /// channel tagged with this pass.
    fn start_promo_pass(&mut self) {
        self.render_pass += 1;
        let pass = self.render_pass;
        self.promo.clear();

        let Some(tx) = self.event_tx.clone() else {
            return;
        };

        let mut targets: Vec<GameRecord> = Vec::new();
        if self.view.highlights_visible() {
            targets.extend(self.highlights.iter().cloned());
        }
        targets.extend(self.filtered.iter().cloned());

        for record in targets {
            // Slugless records get a static panel, never a lookup.
            let Some(slug) = record.slug.clone() else {
                continue;
            };
            if self.promo.contains_key(&slug) {
                continue;
            }
            self.promo.insert(slug.clone(), PromoPanel::Checking);

            let finder = self.finder.clone();
            let tx = tx.clone();
            spawn(async move {
                let result = finder.lookup(&record).await;
                let _ = tx.send(AppEvent::DealResolved { pass, slug, result }).await;
            });
        }
        debug!(pass, pending = self.promo.len(), "Promotion pass started");
    }

    fn select_category(&mut self, tag: &str) {
        self.apply_view_event(ViewEvent::SelectCategory(tag.to_string()));
        self.status = format!("Category: {}", category_label(self.view.category()));
    }

    fn cycle_category(&mut self, delta: isize) {
        let current = CATEGORY_TAGS
            .iter()
            .position(|tag| *tag == self.view.category())
            .unwrap_or(0);
        let len = CATEGORY_TAGS.len() as isize;
        let next = (current as isize + delta).rem_euclid(len) as usize;
        self.select_category(CATEGORY_TAGS[next]);
    }

    fn reset_view(&mut self) {
        self.search_input.clear();
        self.apply_view_event(ViewEvent::Reset);
        self.status = "Showing all games".to_string();
    }

    fn toggle_theme(&mut self) {
        let next = self.config.theme.toggled();
        self.theme = Theme::for_preference(next);
        match self.config.save_theme(next) {
            Ok(()) => self.status = format!("Theme: {}", next.as_str()),
            Err(err) => {
                warn!("Failed to persist theme: {err:#}");
                self.status = format!("Theme: {} (preference not saved)", next.as_str());
            }
        }
    }

    fn scroll_carousel(&mut self, delta: isize) {
        if !self.view.highlights_visible() || self.highlights.is_empty() {
            return;
        }
        let max = self.highlights.len().saturating_sub(1) as isize;
        let next = (self.carousel_offset as isize + delta).clamp(0, max);
        self.carousel_offset = next as usize;
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.filtered.is_empty() {
            return;
        }
        let len = self.filtered.len() as isize;
        let idx = (self.cursor as isize + delta).clamp(0, len - 1);
        self.cursor = idx as usize;
        self.ensure_cursor_visible();
    }

    fn move_to(&mut self, index: usize) {
        if self.filtered.is_empty() {
            return;
        }
        self.cursor = index.min(self.filtered.len() - 1);
        self.ensure_cursor_visible();
    }

    fn move_to_end(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.cursor = self.filtered.len() - 1;
        self.ensure_cursor_visible();
    }

    fn page_down(&mut self) {
        if self.filtered.is_empty() || self.list_height == 0 {
            return;
        }
        let delta = self.list_height.min(self.filtered.len());
        self.move_cursor(delta as isize);
    }

    fn page_up(&mut self) {
        if self.filtered.is_empty() || self.list_height == 0 {
            return;
        }
        let delta = self.list_height.min(self.filtered.len());
        self.move_cursor(-(delta as isize));
    }

    fn ensure_cursor_visible(&mut self) {
        if self.filtered.is_empty() || self.list_height == 0 {
            self.offset = 0;
            return;
        }
        let height = self.list_height;
        let max_offset = self.filtered.len().saturating_sub(height);

        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }

        if self.offset > max_offset {
            self.offset = max_offset;
        }
    }

    fn clamp_cursor(&mut self) {
        if self.filtered.is_empty() {
            self.cursor = 0;
            self.offset = 0;
        } else if self.cursor >= self.filtered.len() {
            self.cursor = self.filtered.len() - 1;
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let size = frame.size();
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.bg).fg(self.theme.fg)),
            size,
        );

        let show_carousel = self.view.highlights_visible() && !self.highlights.is_empty();
        let mut constraints = Vec::new();
        if show_carousel {
            constraints.push(Constraint::Length(CAROUSEL_HEIGHT));
        }
        constraints.push(Constraint::Length(3));
        constraints.push(Constraint::Min(8));
        constraints.push(Constraint::Length(4));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(size);

        let mut chunk_iter = chunks.iter();
        if show_carousel {
            if let Some(area) = chunk_iter.next() {
                self.render_highlights(frame, *area);
            }
        }
        let category_chunk = chunk_iter.next().copied().unwrap_or(size);
        let body_chunk = chunk_iter.next().copied().unwrap_or(size);
        let status_chunk = chunk_iter.next().copied().unwrap_or(size);

        self.render_categories(frame, category_chunk);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(body_chunk);

        self.render_grid(frame, body[0]);
        self.render_details(frame, body[1]);
        self.render_status(frame, status_chunk);
    }

    fn render_highlights(&mut self, frame: &mut Frame, area: Rect) {
        let title = format!(
            "Recent Releases ({}/{})",
            (self.carousel_offset + 1).min(self.highlights.len()),
            self.highlights.len()
        );
        let outer = Block::default().borders(Borders::ALL).title(title);
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        if self.highlights.is_empty() || inner.width == 0 {
            return;
        }

        let visible = (inner.width / CAROUSEL_CARD_WIDTH).max(1) as usize;
        let max_offset = self.highlights.len().saturating_sub(visible);
        if self.carousel_offset > max_offset {
            self.carousel_offset = max_offset;
        }
        let end = (self.carousel_offset + visible).min(self.highlights.len());
        let cards = &self.highlights[self.carousel_offset..end];

        let constraints: Vec<Constraint> = cards
            .iter()
            .map(|_| Constraint::Length(CAROUSEL_CARD_WIDTH))
            .collect();
        let slots = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(inner);

        let text_width = CAROUSEL_CARD_WIDTH.saturating_sub(2) as usize;
        for (slot, record) in slots.iter().zip(cards.iter()) {
            let card = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.accent_alt));
            let lines = vec![
                Line::from(Span::styled(
                    truncate(&record.name, text_width),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    record.year.to_string(),
                    Style::default().fg(self.theme.muted),
                )),
                Line::from(truncate(&record.description, text_width)),
                Line::from(Span::styled(
                    truncate(&record.link, text_width),
                    Style::default().fg(self.theme.accent_alt),
                )),
                self.promo_line(record, text_width),
            ];
            let paragraph = Paragraph::new(lines).block(card);
            frame.render_widget(paragraph, *slot);
        }
    }

    fn render_categories(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (idx, tag) in CATEGORY_TAGS.iter().enumerate() {
            let label = format!(" {}:{} ", idx + 1, category_label(tag));
            let style = if *tag == self.view.category() {
                Style::default()
                    .bg(self.theme.accent)
                    .fg(self.theme.bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.fg)
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }

        let block = Block::default().borders(Borders::ALL).title("Categories");
        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, area);
    }

    fn render_grid(&mut self, frame: &mut Frame, area: Rect) {
        // Two rows per entry: title line plus promotion line.
        let rows = area.height.saturating_sub(2) as usize;
        self.list_height = (rows / 2).max(1);
        self.clamp_cursor();
        self.ensure_cursor_visible();

        let heading = format!("{} ({})", self.view.heading(), self.filtered.len());
        let block = Block::default().borders(Borders::ALL).title(heading);

        if self.filtered.is_empty() {
            let message = if self.catalog.is_empty() {
                "No games available"
            } else {
                "No games match the current search"
            };
            let paragraph = Paragraph::new(message)
                .block(block)
                .style(Style::default().fg(self.theme.muted));
            frame.render_widget(paragraph, area);
            return;
        }

        let end = (self.offset + self.list_height).min(self.filtered.len());
        let visible = &self.filtered[self.offset..end];

        let mut list_state = ListState::default();
        let selected = self
            .cursor
            .saturating_sub(self.offset)
            .min(visible.len().saturating_sub(1));
        list_state.select(Some(selected));

        let text_width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = visible
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                let is_selected = self.cursor == self.offset + idx;
                let marker = if is_selected {
                    Span::styled(
                        "▶ ",
                        Style::default()
                            .fg(self.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::raw("  ")
                };
                let title = Span::styled(
                    record.display_name(),
                    Style::default()
                        .fg(self.theme.fg)
                        .add_modifier(Modifier::BOLD),
                );
                let mut promo = self.promo_line(record, text_width);
                promo.spans.insert(0, Span::raw("    "));
                ListItem::new(Text::from(vec![Line::from(vec![marker, title]), promo]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(self.theme.selection_bg));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_details(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Details");
        let Some(record) = self.filtered.get(self.cursor) else {
            let paragraph = Paragraph::new("Nothing selected")
                .block(block)
                .style(Style::default().fg(self.theme.muted));
            frame.render_widget(paragraph, area);
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(
                record.name.clone(),
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Released: {}", record.year),
                Style::default().fg(self.theme.muted),
            )),
            Line::from(""),
            Line::from(record.description.clone()),
            Line::from(""),
            Line::from(vec![
                Span::raw("Learn more: "),
                Span::styled(
                    record.link.clone(),
                    Style::default().fg(self.theme.accent_alt),
                ),
            ]),
            Line::from(""),
        ];
        lines.extend(self.promo_panel_lines(record));

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    /// Compact one-line promotion status used by cards and grid rows.
    fn promo_line(&self, record: &GameRecord, width: usize) -> Line<'static> {
        let Some(slug) = record.slug.as_deref() else {
            return Line::from(Span::styled(
                truncate("Cannot verify promotions.", width),
                Style::default().fg(self.theme.muted),
            ));
        };
        match self.promo.get(slug) {
            None | Some(PromoPanel::Checking) => Line::from(Span::styled(
                truncate("Checking promotions…", width),
                Style::default().fg(self.theme.warning),
            )),
            Some(PromoPanel::Deal(DealResult::NotFound)) => Line::from(Span::styled(
                truncate("No promotion right now.", width),
                Style::default().fg(self.theme.muted),
            )),
            Some(PromoPanel::Deal(DealResult::Found {
                price, vendor_name, ..
            })) => Line::from(Span::styled(
                truncate(&format!("Best price: ${price:.2} at {vendor_name}"), width),
                Style::default().fg(self.theme.success),
            )),
        }
    }

    /// Full promotion panel for the details pane.
    fn promo_panel_lines(&self, record: &GameRecord) -> Vec<Line<'static>> {
        let Some(slug) = record.slug.as_deref() else {
            return vec![Line::from(Span::styled(
                "Cannot verify promotions for this title.".to_string(),
                Style::default().fg(self.theme.muted),
            ))];
        };
        match self.promo.get(slug) {
            None | Some(PromoPanel::Checking) => vec![Line::from(Span::styled(
                "Checking promotions…".to_string(),
                Style::default().fg(self.theme.warning),
            ))],
            Some(PromoPanel::Deal(DealResult::NotFound)) => vec![Line::from(Span::styled(
                "No promotion found right now.".to_string(),
                Style::default().fg(self.theme.muted),
            ))],
            Some(PromoPanel::Deal(DealResult::Found {
                price,
                vendor_name,
                vendor_url,
            })) => vec![
                Line::from(Span::styled(
                    "On sale!".to_string(),
                    Style::default()
                        .fg(self.theme.success)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Best price: ${price:.2} at {vendor_name}")),
                Line::from(vec![
                    Span::raw("Store: "),
                    Span::styled(
                        vendor_url.clone(),
                        Style::default().fg(self.theme.accent_alt),
                    ),
                ]),
            ],
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Status");
        let primary = if self.input_mode == InputMode::Search {
            format!("Search: {}▏", self.search_input)
        } else {
            self.status.clone()
        };

        let mut hints = vec!["/ search", "Tab category", "t theme", "q quit"];
        if self.view.highlights_visible() {
            hints.push("←/→ carousel");
        }
        if self.view.reset_visible() {
            hints.push("Esc back");
        }
        let secondary = hints.join("  ·  ");

        let paragraph = Paragraph::new(vec![
            Line::from(primary),
            Line::from(Span::styled(secondary, Style::default().fg(self.theme.muted))),
        ])
        .block(block)
        .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

fn category_label(tag: &str) -> String {
    match tag {
        "all" => "All".to_string(),
        "rpg" => "RPG".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        }
    }
}

fn truncate(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    let mut result: String = text.chars().take(width.saturating_sub(1)).collect();
    result.push('…');
    result
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn spawn_input_thread(sender: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::poll(TICK_RATE) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.blocking_send(AppEvent::Input(evt)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if sender.blocking_send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}
