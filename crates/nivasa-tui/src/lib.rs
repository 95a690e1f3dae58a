// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use nivasa_app::{
    AppCommand, AppState, DialogState, Listing, TypeFilter, listing_by_id, visible_listings,
};
use nivasa_handoff::contact_message;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use url::Url;

const NO_RESULTS: &str = "ఫలితాలు లేవు";
const IMAGE_PLACEHOLDER: &str = "ఇల్లు చిత్రం";
const LOVABLE_BADGE: &str = "★ అత్యంత ప్రజాదరణ పొందిన ఇల్లు";
const DIRECTION_PREFIX: &str = "దిశ: ";
const DETAILS_HINT: &str = "⏎ ఇంకా వివరాలు తెలుసుకోండి";
const SELECTION_MARK: &str = "▸ ";

/// Seam between the view layer and the configured contact channel. The
/// TUI hands over the message text only; phone resolution, link building,
/// and the actual opener dispatch live behind this trait.
pub trait ContactRuntime {
    fn open_contact(&mut self, message: &str) -> Result<Url>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DialogFocus {
    #[default]
    CloseControl,
    ContactControl,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ViewData {
    selected: usize,
    dialog_focus: DialogFocus,
    help_visible: bool,
    status_token: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavCommand {
    ShowAll,
    ShowRent,
    ShowSale,
    NextType,
    PrevType,
    CycleFacing,
    ToggleLovable,
    SelectPrev,
    SelectNext,
    OpenDetails,
    Contact,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogCommand {
    Close,
    FocusNext,
    Activate,
    Contact,
}

pub fn run_app<R: ContactRuntime>(
    state: &mut AppState,
    catalog: &[Listing],
    runtime: &mut R,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, catalog, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, catalog, key)
                    {
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size().context("query terminal size")?;
                    let screen = Rect::new(0, 0, size.width, size.height);
                    handle_mouse_event(state, screen, mouse);
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(
        io::stdout(),
        terminal::LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("leave alternate screen")?;
    result
}

fn process_internal_events(state: &mut AppState, view_data: &ViewData, rx: &Receiver<InternalEvent>) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn handle_key_event<R: ContactRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    catalog: &[Listing],
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            view_data.help_visible = false;
        }
        return false;
    }

    if state.dialog == DialogState::Open {
        if let Some(command) = dialog_command_for_key(key) {
            apply_dialog_command(state, runtime, view_data, internal_tx, catalog, command);
        }
        return false;
    }

    match nav_command_for_key(key) {
        Some(NavCommand::Quit) => true,
        Some(command) => {
            apply_nav_command(state, runtime, view_data, internal_tx, catalog, command);
            false
        }
        None => false,
    }
}

fn nav_command_for_key(key: KeyEvent) -> Option<NavCommand> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('a'), KeyModifiers::NONE) => Some(NavCommand::ShowAll),
        (KeyCode::Char('r'), KeyModifiers::NONE) => Some(NavCommand::ShowRent),
        (KeyCode::Char('s'), KeyModifiers::NONE) => Some(NavCommand::ShowSale),
        (KeyCode::Tab, KeyModifiers::NONE) => Some(NavCommand::NextType),
        (KeyCode::BackTab, _) => Some(NavCommand::PrevType),
        (KeyCode::Char('d'), KeyModifiers::NONE) => Some(NavCommand::CycleFacing),
        (KeyCode::Char('m'), KeyModifiers::NONE) => Some(NavCommand::ToggleLovable),
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => Some(NavCommand::SelectPrev),
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            Some(NavCommand::SelectNext)
        }
        (KeyCode::Enter, _) => Some(NavCommand::OpenDetails),
        (KeyCode::Char('w'), KeyModifiers::NONE) => Some(NavCommand::Contact),
        (KeyCode::Char('?'), _) => Some(NavCommand::Help),
        (KeyCode::Char('q'), KeyModifiers::NONE) => Some(NavCommand::Quit),
        _ => None,
    }
}

fn dialog_command_for_key(key: KeyEvent) -> Option<DialogCommand> {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('x'), KeyModifiers::NONE) => Some(DialogCommand::Close),
        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => Some(DialogCommand::FocusNext),
        (KeyCode::Enter, _) => Some(DialogCommand::Activate),
        (KeyCode::Char('w'), KeyModifiers::NONE) => Some(DialogCommand::Contact),
        _ => None,
    }
}

fn apply_nav_command<R: ContactRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    catalog: &[Listing],
    command: NavCommand,
) {
    match command {
        NavCommand::ShowAll => set_type_filter(state, view_data, internal_tx, catalog, TypeFilter::All),
        NavCommand::ShowRent => {
            set_type_filter(state, view_data, internal_tx, catalog, TypeFilter::ForRent);
        }
        NavCommand::ShowSale => {
            set_type_filter(state, view_data, internal_tx, catalog, TypeFilter::ForSale);
        }
        NavCommand::NextType => {
            let next = rotate_type_filter(state.filter.type_filter, 1);
            set_type_filter(state, view_data, internal_tx, catalog, next);
        }
        NavCommand::PrevType => {
            let prev = rotate_type_filter(state.filter.type_filter, -1);
            set_type_filter(state, view_data, internal_tx, catalog, prev);
        }
        NavCommand::CycleFacing => {
            state.dispatch(AppCommand::CycleFacingFilter);
            clamp_selection(state, view_data, catalog);
            let status = match state.filter.facing {
                Some(facing) => format!("facing: {}", facing.as_str()),
                None => "facing: any".to_owned(),
            };
            emit_status(state, view_data, internal_tx, status);
        }
        NavCommand::ToggleLovable => {
            state.dispatch(AppCommand::ToggleMostLovable);
            clamp_selection(state, view_data, catalog);
            let status = if state.filter.most_lovable_only {
                "most lovable only"
            } else {
                "all listings"
            };
            emit_status(state, view_data, internal_tx, status);
        }
        NavCommand::SelectPrev => {
            view_data.selected = view_data.selected.saturating_sub(1);
        }
        NavCommand::SelectNext => {
            let visible = visible_listings(catalog, &state.filter);
            if view_data.selected + 1 < visible.len() {
                view_data.selected += 1;
            }
        }
        NavCommand::OpenDetails => {
            let visible = visible_listings(catalog, &state.filter);
            if let Some(listing) = visible.get(view_data.selected) {
                let id = listing.id;
                state.dispatch(AppCommand::OpenDialog(Some(id)));
                view_data.dialog_focus = DialogFocus::CloseControl;
            }
        }
        NavCommand::Contact => {
            request_contact(state, runtime, view_data, internal_tx, catalog);
        }
        NavCommand::Help => {
            view_data.help_visible = true;
        }
        NavCommand::Quit => {}
    }
}

fn apply_dialog_command<R: ContactRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    catalog: &[Listing],
    command: DialogCommand,
) {
    match command {
        DialogCommand::Close => {
            state.dispatch(AppCommand::CloseDialog);
        }
        DialogCommand::FocusNext => {
            view_data.dialog_focus = match view_data.dialog_focus {
                DialogFocus::CloseControl => DialogFocus::ContactControl,
                DialogFocus::ContactControl => DialogFocus::CloseControl,
            };
        }
        DialogCommand::Activate => match view_data.dialog_focus {
            DialogFocus::CloseControl => {
                state.dispatch(AppCommand::CloseDialog);
            }
            DialogFocus::ContactControl => {
                request_contact(state, runtime, view_data, internal_tx, catalog);
            }
        },
        DialogCommand::Contact => {
            request_contact(state, runtime, view_data, internal_tx, catalog);
        }
    }
}

/// Message policy shared by the floating contact key and the dialog's
/// contact control: the focused listing's location when one is set, the
/// generic enquiry otherwise.
fn request_contact<R: ContactRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    catalog: &[Listing],
) {
    let location = state
        .focused
        .and_then(|id| listing_by_id(catalog, id))
        .map(|listing| listing.location.clone());
    let message = contact_message(location.as_deref());

    match runtime.open_contact(&message) {
        Ok(url) => {
            let host = url.host_str().unwrap_or("chat").to_owned();
            emit_status(state, view_data, internal_tx, format!("opening {host}"));
        }
        Err(error) => {
            emit_status(state, view_data, internal_tx, format!("contact failed: {error:#}"));
        }
    }
}

fn set_type_filter(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    catalog: &[Listing],
    type_filter: TypeFilter,
) {
    state.dispatch(AppCommand::SetTypeFilter(type_filter));
    clamp_selection(state, view_data, catalog);
    emit_status(
        state,
        view_data,
        internal_tx,
        format!("type: {}", type_filter.as_str()),
    );
}

fn rotate_type_filter(current: TypeFilter, delta: isize) -> TypeFilter {
    let filters = TypeFilter::ALL;
    let position = filters
        .iter()
        .position(|filter| *filter == current)
        .unwrap_or(0) as isize;
    let len = filters.len() as isize;
    let next = (position + delta).rem_euclid(len) as usize;
    filters[next]
}

fn clamp_selection(state: &AppState, view_data: &mut ViewData, catalog: &[Listing]) {
    let visible = visible_listings(catalog, &state.filter);
    if visible.is_empty() {
        view_data.selected = 0;
    } else {
        view_data.selected = view_data.selected.min(visible.len() - 1);
    }
}

fn handle_mouse_event(state: &mut AppState, screen: Rect, mouse: MouseEvent) {
    if state.dialog != DialogState::Open {
        return;
    }
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return;
    }
    // A click on the scrim closes; a click on the dialog body does not.
    if scrim_hit(dialog_rect(screen), mouse.column, mouse.row) {
        state.dispatch(AppCommand::CloseDialog);
    }
}

fn scrim_hit(dialog: Rect, column: u16, row: u16) -> bool {
    !dialog.contains(Position::new(column, row))
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, catalog: &[Listing], view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let selected_filter = TypeFilter::ALL
        .iter()
        .position(|filter| *filter == state.filter.type_filter)
        .unwrap_or(0);
    let tabs = Tabs::new(TypeFilter::ALL.map(|filter| filter.as_str().to_owned()))
        .block(Block::default().title("nivasa").borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected_filter);
    frame.render_widget(tabs, layout[0]);

    let visible = visible_listings(catalog, &state.filter);
    if visible.is_empty() {
        let empty = Paragraph::new(NO_RESULTS)
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title("listings 0"));
        frame.render_widget(empty, layout[1]);
    } else {
        let (text, heights) = cards_text(&visible, view_data.selected);
        let scroll = cards_scroll(&heights, view_data.selected, layout[1].height.saturating_sub(2));
        let title = format!("listings {}/{}", visible.len(), catalog.len());
        let cards = Paragraph::new(text)
            .scroll((scroll, 0))
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(cards, layout[1]);
    }

    let status = status_text(state);
    let status_widget = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_widget, layout[2]);

    if state.dialog == DialogState::Open {
        let area = dialog_rect(frame.area());
        frame.render_widget(Clear, area);
        let dialog = Paragraph::new(dialog_lines(state, catalog, view_data)).block(
            Block::default()
                .title("వివరాలు")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(dialog, area);
    }

    if view_data.help_visible {
        let area = centered_rect(60, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

/// One card's display fragment; pure in the listing. The badge line only
/// exists for featured listings, and a missing image renders the
/// placeholder instead of a dangling file reference.
fn card_lines(listing: &Listing) -> Vec<Line<'static>> {
    let image = match &listing.image {
        Some(image) => format!("▒ {image}"),
        None => format!("▒ {IMAGE_PLACEHOLDER}"),
    };

    let mut lines = vec![
        Line::from(Span::styled(image, Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            listing.kind.label().to_owned(),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            nivasa_app::format_price(listing.price),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(listing.location.clone()),
        Line::from(format!("{DIRECTION_PREFIX}{}", listing.facing.label())),
    ];

    if listing.most_lovable {
        lines.push(Line::from(Span::styled(
            LOVABLE_BADGE.to_owned(),
            Style::default().fg(Color::Magenta),
        )));
    }

    lines
}

/// Assemble the visible cards into one scrollable text, marking the
/// selected card and appending its activation hint. Returns the rendered
/// lines plus each card's height for scroll bookkeeping.
fn cards_text(visible: &[&Listing], selected: usize) -> (Text<'static>, Vec<u16>) {
    let mut lines = Vec::new();
    let mut heights = Vec::with_capacity(visible.len());

    for (index, listing) in visible.iter().enumerate() {
        let mut card = card_lines(listing);
        let marker = if index == selected {
            Span::styled(SELECTION_MARK, Style::default().fg(Color::Cyan))
        } else {
            Span::raw("  ")
        };
        card[0].spans.insert(0, marker);

        if index == selected {
            card.push(Line::from(Span::styled(
                DETAILS_HINT.to_owned(),
                Style::default().fg(Color::Cyan),
            )));
        }
        card.push(Line::default());

        heights.push(card.len() as u16);
        lines.extend(card);
    }

    (Text::from(lines), heights)
}

/// Vertical scroll offset that keeps the selected card fully on screen.
fn cards_scroll(heights: &[u16], selected: usize, view_height: u16) -> u16 {
    let top: u16 = heights.iter().take(selected).sum();
    let height = heights.get(selected).copied().unwrap_or(0);
    let bottom = top.saturating_add(height);

    if bottom > view_height {
        bottom - view_height
    } else {
        0
    }
}

fn dialog_lines(state: &AppState, catalog: &[Listing], view_data: &ViewData) -> Vec<Line<'static>> {
    let mut lines = match state.focused.and_then(|id| listing_by_id(catalog, id)) {
        Some(listing) => card_lines(listing),
        None => vec![Line::from(nivasa_handoff::DEFAULT_MESSAGE.to_owned())],
    };

    lines.push(Line::default());
    lines.push(dialog_controls_line(view_data.dialog_focus));
    lines
}

fn dialog_controls_line(focus: DialogFocus) -> Line<'static> {
    let focused = Style::default().add_modifier(Modifier::REVERSED);
    let idle = Style::default();

    let (close_style, contact_style) = match focus {
        DialogFocus::CloseControl => (focused, idle),
        DialogFocus::ContactControl => (idle, focused),
    };

    Line::from(vec![
        Span::styled("[x] close", close_style),
        Span::raw("   "),
        Span::styled("[w] whatsapp", contact_style),
    ])
}

fn status_text(state: &AppState) -> String {
    match &state.status_line {
        Some(status) => status.clone(),
        None => {
            "a/r/s type · d facing · m lovable · ↑↓ select · ⏎ details · w chat · ? help · q quit"
                .to_owned()
        }
    }
}

fn help_text() -> String {
    [
        "a / r / s    show all / rentals / sales",
        "tab          cycle type filter",
        "d            cycle facing filter (any → east → west → north → south)",
        "m            toggle most-lovable-only",
        "↑/↓, k/j     move card selection",
        "enter        open details for the selected card",
        "w            WhatsApp enquiry (focused listing, or generic)",
        "x / esc      close the details dialog",
        "q, ctrl-q    quit",
    ]
    .join("\n")
}

fn dialog_rect(area: Rect) -> Rect {
    centered_rect(62, 56, area)
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::{
        ContactRuntime, DialogFocus, InternalEvent, NavCommand, ViewData, card_lines, cards_scroll,
        cards_text, dialog_command_for_key, dialog_rect, handle_key_event, handle_mouse_event,
        nav_command_for_key, rotate_type_filter, scrim_hit, status_text,
    };
    use anyhow::{Result, bail};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use nivasa_app::{AppCommand, AppState, DialogState, Listing, ListingId, TypeFilter};
    use nivasa_testkit::{listing, mixed_catalog};
    use ratatui::layout::Rect;
    use std::sync::mpsc::{self, Sender};
    use url::Url;

    #[derive(Debug, Default)]
    struct TestRuntime {
        messages: Vec<String>,
        fail_next: bool,
    }

    impl ContactRuntime for TestRuntime {
        fn open_contact(&mut self, message: &str) -> Result<Url> {
            if self.fail_next {
                bail!("opener unavailable");
            }
            self.messages.push(message.to_owned());
            Ok(Url::parse("https://wa.me/919347749926?text=hi").expect("static url"))
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    // The paired receiver is dropped; status-clear sends are best-effort
    // and ignore a closed channel.
    fn test_channel() -> Sender<InternalEvent> {
        let (tx, _rx) = mpsc::channel();
        tx
    }

    fn press(
        state: &mut AppState,
        runtime: &mut TestRuntime,
        view_data: &mut ViewData,
        catalog: &[Listing],
        code: KeyCode,
    ) -> bool {
        let tx = test_channel();
        handle_key_event(state, runtime, view_data, &tx, catalog, key(code))
    }

    #[test]
    fn nav_dispatch_table_maps_filter_keys() {
        assert_eq!(
            nav_command_for_key(key(KeyCode::Char('r'))),
            Some(NavCommand::ShowRent)
        );
        assert_eq!(
            nav_command_for_key(key(KeyCode::Char('d'))),
            Some(NavCommand::CycleFacing)
        );
        assert_eq!(
            nav_command_for_key(key(KeyCode::Char('m'))),
            Some(NavCommand::ToggleLovable)
        );
        assert_eq!(nav_command_for_key(key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn type_filter_rotation_wraps_both_ways() {
        assert_eq!(rotate_type_filter(TypeFilter::ForSale, 1), TypeFilter::All);
        assert_eq!(rotate_type_filter(TypeFilter::All, -1), TypeFilter::ForSale);
    }

    #[test]
    fn rent_key_sets_filter_and_status() {
        let catalog = mixed_catalog();
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();

        let quit = press(&mut state, &mut runtime, &mut view_data, &catalog, KeyCode::Char('r'));
        assert!(!quit);
        assert_eq!(state.filter.type_filter, TypeFilter::ForRent);
        assert_eq!(state.status_line.as_deref(), Some("type: rent"));
    }

    #[test]
    fn selection_clamps_when_filter_shrinks_visible_set() {
        let catalog = mixed_catalog();
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData {
            selected: 5,
            ..ViewData::default()
        };

        press(&mut state, &mut runtime, &mut view_data, &catalog, KeyCode::Char('m'));
        // Three featured listings remain; selection lands on the last one.
        assert_eq!(view_data.selected, 2);
    }

    #[test]
    fn enter_opens_dialog_for_selected_card() {
        let catalog = mixed_catalog();
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData {
            selected: 2,
            ..ViewData::default()
        };

        press(&mut state, &mut runtime, &mut view_data, &catalog, KeyCode::Enter);
        assert_eq!(state.dialog, DialogState::Open);
        assert_eq!(state.focused, Some(ListingId::new(3)));
        assert_eq!(view_data.dialog_focus, DialogFocus::CloseControl);
    }

    #[test]
    fn background_navigation_is_suppressed_while_dialog_open() {
        let catalog = mixed_catalog();
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();

        press(&mut state, &mut runtime, &mut view_data, &catalog, KeyCode::Enter);
        press(&mut state, &mut runtime, &mut view_data, &catalog, KeyCode::Char('j'));
        press(&mut state, &mut runtime, &mut view_data, &catalog, KeyCode::Down);
        assert_eq!(view_data.selected, 0);
        assert_eq!(state.dialog, DialogState::Open);
    }

    #[test]
    fn focused_listing_survives_close_and_feeds_contact_message() {
        let catalog = mixed_catalog();
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData {
            selected: 3,
            ..ViewData::default()
        };

        press(&mut state, &mut runtime, &mut view_data, &catalog, KeyCode::Enter);
        press(&mut state, &mut runtime, &mut view_data, &catalog, KeyCode::Esc);
        assert_eq!(state.dialog, DialogState::Closed);
        assert_eq!(state.focused, Some(ListingId::new(4)));

        press(&mut state, &mut runtime, &mut view_data, &catalog, KeyCode::Char('w'));
        assert_eq!(runtime.messages.len(), 1);
        assert!(runtime.messages[0].contains("Gachibowli"));
    }

    #[test]
    fn contact_without_focus_uses_generic_message() {
        let catalog = mixed_catalog();
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();

        press(&mut state, &mut runtime, &mut view_data, &catalog, KeyCode::Char('w'));
        assert_eq!(runtime.messages.len(), 1);
        assert_eq!(runtime.messages[0], nivasa_handoff::DEFAULT_MESSAGE);
        assert_eq!(state.status_line.as_deref(), Some("opening wa.me"));
    }

    #[test]
    fn contact_failure_surfaces_in_status_line() {
        let catalog = mixed_catalog();
        let mut state = AppState::default();
        let mut runtime = TestRuntime {
            fail_next: true,
            ..TestRuntime::default()
        };
        let mut view_data = ViewData::default();

        press(&mut state, &mut runtime, &mut view_data, &catalog, KeyCode::Char('w'));
        let status = state.status_line.expect("failure status set");
        assert!(status.contains("contact failed"));
        assert!(status.contains("opener unavailable"));
    }

    #[test]
    fn dialog_focus_cycles_and_activate_follows_focus() {
        let catalog = mixed_catalog();
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();

        press(&mut state, &mut runtime, &mut view_data, &catalog, KeyCode::Enter);
        assert_eq!(
            dialog_command_for_key(key(KeyCode::Tab)),
            Some(super::DialogCommand::FocusNext)
        );

        press(&mut state, &mut runtime, &mut view_data, &catalog, KeyCode::Tab);
        assert_eq!(view_data.dialog_focus, DialogFocus::ContactControl);

        press(&mut state, &mut runtime, &mut view_data, &catalog, KeyCode::Enter);
        assert_eq!(runtime.messages.len(), 1);
        assert_eq!(state.dialog, DialogState::Open);

        press(&mut state, &mut runtime, &mut view_data, &catalog, KeyCode::Tab);
        press(&mut state, &mut runtime, &mut view_data, &catalog, KeyCode::Enter);
        assert_eq!(state.dialog, DialogState::Closed);
    }

    #[test]
    fn scrim_click_closes_but_dialog_body_click_does_not() {
        let catalog = mixed_catalog();
        let mut state = AppState::default();
        let mut runtime = TestRuntime::default();
        let mut view_data = ViewData::default();
        let screen = Rect::new(0, 0, 100, 40);

        press(&mut state, &mut runtime, &mut view_data, &catalog, KeyCode::Enter);

        let dialog = dialog_rect(screen);
        let inside = (dialog.x + dialog.width / 2, dialog.y + dialog.height / 2);
        handle_mouse_event(&mut state, screen, click(inside.0, inside.1));
        assert_eq!(state.dialog, DialogState::Open);

        handle_mouse_event(&mut state, screen, click(0, 0));
        assert_eq!(state.dialog, DialogState::Closed);
        assert_eq!(state.focused, Some(ListingId::new(1)));
    }

    #[test]
    fn scrim_hit_is_pure_in_rect_and_position() {
        let dialog = Rect::new(10, 5, 20, 10);
        assert!(!scrim_hit(dialog, 15, 8));
        assert!(scrim_hit(dialog, 0, 0));
        assert!(scrim_hit(dialog, 30, 8));
    }

    #[test]
    fn card_shows_badge_only_when_featured() {
        let catalog = mixed_catalog();
        let plain: Vec<String> = card_lines(&catalog[1])
            .iter()
            .map(|line| line.to_string())
            .collect();
        let featured: Vec<String> = card_lines(&catalog[0])
            .iter()
            .map(|line| line.to_string())
            .collect();

        assert!(!plain.iter().any(|line| line.contains("అత్యంత")));
        assert!(featured.iter().any(|line| line.contains("అత్యంత")));
    }

    #[test]
    fn card_without_image_shows_placeholder() {
        let bare = listing(9, nivasa_app::TransactionKind::ForRent, 12_000, "Uppal");
        let lines: Vec<String> = card_lines(&bare)
            .iter()
            .map(|line| line.to_string())
            .collect();
        assert!(lines[0].contains("ఇల్లు చిత్రం"));

        let catalog = mixed_catalog();
        let lines: Vec<String> = card_lines(&catalog[0])
            .iter()
            .map(|line| line.to_string())
            .collect();
        assert!(lines[0].contains("images/house1.png"));
    }

    #[test]
    fn card_renders_formatted_price_and_direction() {
        let catalog = mixed_catalog();
        let lines: Vec<String> = card_lines(&catalog[3])
            .iter()
            .map(|line| line.to_string())
            .collect();
        assert!(lines.iter().any(|line| line.contains("₹1.2 కోట్లు")));
        assert!(lines.iter().any(|line| line.contains("దిశ: దక్షిణం")));
    }

    #[test]
    fn selected_card_carries_the_activation_hint() {
        let catalog = mixed_catalog();
        let visible: Vec<&Listing> = catalog.iter().collect();
        let (text, heights) = cards_text(&visible, 1);

        assert_eq!(heights.len(), visible.len());
        let rendered = text.to_string();
        assert!(rendered.contains("ఇంకా వివరాలు తెలుసుకోండి"));
        assert!(rendered.contains("▸"));
    }

    #[test]
    fn scroll_keeps_selected_card_in_view() {
        let heights = vec![7, 6, 7, 6];
        assert_eq!(cards_scroll(&heights, 0, 10), 0);
        // Third card ends at row 20; a 10-row viewport scrolls by 10.
        assert_eq!(cards_scroll(&heights, 2, 10), 10);
    }

    #[test]
    fn status_falls_back_to_key_hints() {
        let mut state = AppState::default();
        assert!(status_text(&state).contains("details"));

        state.dispatch(AppCommand::SetStatus("type: sale".to_owned()));
        assert_eq!(status_text(&state), "type: sale");
    }

    #[test]
    fn stale_status_clear_token_is_ignored() {
        let mut state = AppState::default();
        let (tx, rx) = mpsc::channel();
        let view_data = ViewData {
            status_token: 2,
            ..ViewData::default()
        };

        state.dispatch(AppCommand::SetStatus("type: rent".to_owned()));
        tx.send(InternalEvent::ClearStatus { token: 1 }).expect("send");
        super::process_internal_events(&mut state, &view_data, &rx);
        assert_eq!(state.status_line.as_deref(), Some("type: rent"));

        tx.send(InternalEvent::ClearStatus { token: 2 }).expect("send");
        super::process_internal_events(&mut state, &view_data, &rx);
        assert_eq!(state.status_line, None);
    }
}
