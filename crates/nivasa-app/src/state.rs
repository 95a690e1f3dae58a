// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::{DialogState, Facing, FilterState, ListingId, TypeFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub filter: FilterState,
    pub dialog: DialogState,
    pub focused: Option<ListingId>,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            filter: FilterState::default(),
            dialog: DialogState::Closed,
            focused: None,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    SetTypeFilter(TypeFilter),
    SetFacingFilter(Option<Facing>),
    CycleFacingFilter,
    ToggleMostLovable,
    OpenDialog(Option<ListingId>),
    CloseDialog,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    TypeFilterChanged(TypeFilter),
    FacingFilterChanged(Option<Facing>),
    MostLovableChanged(bool),
    DialogOpened,
    DialogClosed,
    FocusChanged(Option<ListingId>),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    /// The only mutation path for filter, dialog, and focus state. Each
    /// command maps to exactly one transition; callers re-render from the
    /// resulting state, never from the events alone.
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::SetTypeFilter(type_filter) => {
                self.filter.type_filter = type_filter;
                vec![AppEvent::TypeFilterChanged(type_filter)]
            }
            AppCommand::SetFacingFilter(facing) => {
                self.filter.facing = facing;
                vec![AppEvent::FacingFilterChanged(facing)]
            }
            AppCommand::CycleFacingFilter => {
                self.filter.facing = next_facing_filter(self.filter.facing);
                vec![AppEvent::FacingFilterChanged(self.filter.facing)]
            }
            AppCommand::ToggleMostLovable => {
                self.filter.most_lovable_only = !self.filter.most_lovable_only;
                vec![AppEvent::MostLovableChanged(self.filter.most_lovable_only)]
            }
            AppCommand::OpenDialog(listing) => {
                if self.dialog == DialogState::Open {
                    return vec![];
                }
                // A generic open resets the focus; a card open replaces it.
                self.focused = listing;
                self.dialog = DialogState::Open;
                vec![AppEvent::FocusChanged(self.focused), AppEvent::DialogOpened]
            }
            AppCommand::CloseDialog => {
                if self.dialog == DialogState::Closed {
                    return vec![];
                }
                // Focus is retained on close: the last-viewed listing keeps
                // feeding the default contact message until the next open.
                self.dialog = DialogState::Closed;
                vec![AppEvent::DialogClosed]
            }
            AppCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![AppEvent::StatusUpdated(message)]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }
}

/// Rotation order for the single-key direction selector: unset, then the
/// four compass directions, then unset again.
pub fn next_facing_filter(current: Option<Facing>) -> Option<Facing> {
    match current {
        None => Some(Facing::East),
        Some(Facing::East) => Some(Facing::West),
        Some(Facing::West) => Some(Facing::North),
        Some(Facing::North) => Some(Facing::South),
        Some(Facing::South) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCommand, AppEvent, AppState, next_facing_filter};
    use crate::model::{DialogState, Facing, ListingId, TypeFilter};

    #[test]
    fn type_filter_transition_is_exclusive() {
        let mut state = AppState::default();

        let events = state.dispatch(AppCommand::SetTypeFilter(TypeFilter::ForRent));
        assert_eq!(state.filter.type_filter, TypeFilter::ForRent);
        assert_eq!(events, vec![AppEvent::TypeFilterChanged(TypeFilter::ForRent)]);

        state.dispatch(AppCommand::SetTypeFilter(TypeFilter::ForSale));
        assert_eq!(state.filter.type_filter, TypeFilter::ForSale);
    }

    #[test]
    fn facing_filter_cycles_through_all_directions_and_back() {
        let mut state = AppState::default();
        let mut seen = vec![state.filter.facing];
        for _ in 0..5 {
            state.dispatch(AppCommand::CycleFacingFilter);
            seen.push(state.filter.facing);
        }

        assert_eq!(
            seen,
            vec![
                None,
                Some(Facing::East),
                Some(Facing::West),
                Some(Facing::North),
                Some(Facing::South),
                None,
            ],
        );
    }

    #[test]
    fn most_lovable_toggles() {
        let mut state = AppState::default();

        let events = state.dispatch(AppCommand::ToggleMostLovable);
        assert!(state.filter.most_lovable_only);
        assert_eq!(events, vec![AppEvent::MostLovableChanged(true)]);

        state.dispatch(AppCommand::ToggleMostLovable);
        assert!(!state.filter.most_lovable_only);
    }

    #[test]
    fn open_dialog_sets_focus_and_opens() {
        let mut state = AppState::default();

        let events = state.dispatch(AppCommand::OpenDialog(Some(ListingId::new(4))));
        assert_eq!(state.dialog, DialogState::Open);
        assert_eq!(state.focused, Some(ListingId::new(4)));
        assert_eq!(
            events,
            vec![
                AppEvent::FocusChanged(Some(ListingId::new(4))),
                AppEvent::DialogOpened,
            ],
        );
    }

    #[test]
    fn open_while_open_is_a_no_op() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenDialog(Some(ListingId::new(1))));

        let events = state.dispatch(AppCommand::OpenDialog(Some(ListingId::new(2))));
        assert!(events.is_empty());
        assert_eq!(state.focused, Some(ListingId::new(1)));
    }

    #[test]
    fn generic_open_resets_focus() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenDialog(Some(ListingId::new(2))));
        state.dispatch(AppCommand::CloseDialog);

        state.dispatch(AppCommand::OpenDialog(None));
        assert_eq!(state.dialog, DialogState::Open);
        assert_eq!(state.focused, None);
    }

    #[test]
    fn close_retains_focused_listing() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenDialog(Some(ListingId::new(3))));

        let events = state.dispatch(AppCommand::CloseDialog);
        assert_eq!(state.dialog, DialogState::Closed);
        assert_eq!(state.focused, Some(ListingId::new(3)));
        assert_eq!(events, vec![AppEvent::DialogClosed]);
    }

    #[test]
    fn close_when_closed_is_a_no_op() {
        let mut state = AppState::default();
        assert!(state.dispatch(AppCommand::CloseDialog).is_empty());
        assert_eq!(state.dialog, DialogState::Closed);
    }

    #[test]
    fn status_line_set_and_clear() {
        let mut state = AppState::default();

        state.dispatch(AppCommand::SetStatus("filter: rent".to_owned()));
        assert_eq!(state.status_line.as_deref(), Some("filter: rent"));

        let events = state.dispatch(AppCommand::ClearStatus);
        assert_eq!(state.status_line, None);
        assert_eq!(events, vec![AppEvent::StatusCleared]);
    }

    #[test]
    fn facing_rotation_helper_wraps() {
        assert_eq!(next_facing_filter(Some(Facing::South)), None);
        assert_eq!(next_facing_filter(None), Some(Facing::East));
    }
}
