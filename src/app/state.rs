//! Application state and view model computation.
//!
//! [`AppState`] owns the session parameters, the mounted [`Gallery`], the
//! selection, the detail overlay and the toast. Every user-visible change goes
//! through one of three update paths:
//!
//! - `refresh_gallery` refilters the catalog and fully re-renders the cards
//!   (search text, category);
//! - `apply_sample_input` rewrites preview text in place;
//! - `apply_sample_size` rewrites preview size and the readout in place.
//!
//! The terminal renderer draws from the gallery surface, not from the session,
//! so whatever the fast paths leave on the surface is what appears on screen.

use super::filter::{filter_catalog, name_match_range};
use super::modes::{EditField, InputMode};
use super::overlay::{overlay_title, DetailOverlay};
use super::session::{SessionState, SizeRange};
use super::toast::Toast;
use crate::domain::catalog::{self, CATALOG};
use crate::domain::{CategoryFilter, StyleDescriptor, ThemePreference};
use crate::gallery::{self, Card, Gallery};
use crate::ui::effects::{effect_for, letter_gap};
use crate::ui::helpers::{letter_spaced, truncate_to_width};
use crate::ui::layout::{self, OverlayFrame};
use crate::ui::theme::{Theme, ThemeSet};
use crate::ui::viewmodel::{
    CardView, EmptyState, FieldInfo, FooterInfo, HeaderInfo, OverlayView, TabInfo, ToastView,
    UIViewModel,
};
use std::collections::VecDeque;
use std::time::Duration;

/// Pane size used until the first render reports the real one.
const DEFAULT_VIEWPORT: (usize, usize) = (24, 80);

/// Columns taken by a card's borders and inner padding.
const CARD_CHROME_COLS: usize = 4;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Filter and preview parameters chosen by the user.
    pub session: SessionState,

    /// Mounted cards, result counter and size readout.
    pub gallery: Gallery,

    /// Index of the selected card within the gallery.
    pub selected_index: usize,

    pub input_mode: InputMode,

    pub overlay: DetailOverlay,

    pub toast: Toast,

    /// How long the copy confirmation stays up.
    pub toast_duration: Duration,

    /// Bounds and step of the size control.
    pub size_range: SizeRange,

    /// Light and dark palettes.
    pub themes: ThemeSet,

    /// Host color scheme, used when no preference is stored.
    pub system_prefers_dark: bool,

    /// Set once the user toggles the theme; a stored preference arriving
    /// later must not undo that.
    pub theme_chosen: bool,

    /// Pane size from the most recent render, as `(rows, cols)`.
    pub viewport: (usize, usize),

    /// Texts handed to the clipboard tool, oldest first, kept for the
    /// fallback path until their results arrive.
    pending_copies: VecDeque<String>,

    /// Raw escape sequences to write on the next render.
    pending_output: Vec<String>,
}

impl AppState {
    /// Creates the state and mounts the full catalog.
    #[must_use]
    pub fn new(
        session: SessionState,
        themes: ThemeSet,
        size_range: SizeRange,
        system_prefers_dark: bool,
        toast_duration: Duration,
    ) -> Self {
        let mut state = Self {
            session,
            gallery: Gallery::default(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            overlay: DetailOverlay::Closed,
            toast: Toast::default(),
            toast_duration,
            size_range,
            themes,
            system_prefers_dark,
            theme_chosen: false,
            viewport: DEFAULT_VIEWPORT,
            pending_copies: VecDeque::new(),
            pending_output: Vec::new(),
        };
        state.session.sample_size = size_range.clamp(state.session.sample_size);
        state.refresh_gallery();
        gallery::update_preview_size(&mut state.gallery, state.session.sample_size);
        state
    }

    /// Refilters the catalog and re-renders every card.
    ///
    /// Clamps the selection to the new result set.
    pub fn refresh_gallery(&mut self) {
        let visible = filter_catalog(
            CATALOG,
            self.session.active_category,
            &self.session.search_text,
        );
        gallery::render(
            &mut self.gallery,
            &visible,
            &self.session.sample_text,
            self.session.sample_size,
        );

        self.selected_index = self
            .selected_index
            .min(self.gallery.cards().len().saturating_sub(1));

        tracing::debug!(
            category = self.session.active_category.tag(),
            search = %self.session.search_text,
            result_count = self.gallery.result_count(),
            "gallery refreshed"
        );
    }

    /// Stores new search field contents and re-renders.
    pub fn apply_search_input(&mut self, raw: String) {
        self.session.set_search_input(raw);
        self.refresh_gallery();
    }

    /// Switches the category tab and re-renders.
    pub fn apply_category(&mut self, category: CategoryFilter) {
        self.session.active_category = category;
        self.refresh_gallery();
    }

    /// Stores new sample field contents and updates previews in place.
    pub fn apply_sample_input(&mut self, raw: String) {
        self.session.set_sample_input(raw);
        gallery::update_preview_text(&mut self.gallery, &self.session.sample_text);
    }

    /// Clamps and stores a preview size, updating previews in place.
    ///
    /// Returns `false` if the size did not change.
    pub fn apply_sample_size(&mut self, px: u32) -> bool {
        let px = self.size_range.clamp(px);
        if px == self.session.sample_size {
            return false;
        }
        self.session.sample_size = px;
        gallery::update_preview_size(&mut self.gallery, px);
        true
    }

    /// Sets the theme preference.
    pub fn apply_theme(&mut self, theme: ThemePreference) {
        self.session.theme = theme;
    }

    /// Palette for the current theme preference.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        self.themes.for_preference(self.session.theme)
    }

    /// The selected card, if any card is mounted.
    #[must_use]
    pub fn selected_card(&self) -> Option<&Card> {
        self.gallery.card(self.selected_index)
    }

    /// Descriptor behind the selected card's detail trigger.
    #[must_use]
    pub fn selected_descriptor(&self) -> Option<&'static StyleDescriptor> {
        self.selected_card()
            .and_then(|card| catalog::find_by_id(card.descriptor_id))
    }

    /// Cards per grid row for the current viewport.
    #[must_use]
    pub const fn grid_columns(&self) -> usize {
        layout::grid_columns(self.viewport.1)
    }

    pub fn move_selection_left(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_right(&mut self) {
        let last = self.gallery.cards().len().saturating_sub(1);
        self.selected_index = (self.selected_index + 1).min(last);
    }

    pub fn move_selection_up(&mut self) {
        let columns = self.grid_columns();
        if self.selected_index >= columns {
            self.selected_index -= columns;
        }
    }

    /// Moves one grid row down; from a short last row's gap it lands on the
    /// final card.
    pub fn move_selection_down(&mut self) {
        let len = self.gallery.cards().len();
        if len == 0 {
            return;
        }
        let columns = self.grid_columns();
        let last = len - 1;
        let target = self.selected_index + columns;
        if target <= last {
            self.selected_index = target;
        } else if self.selected_index / columns < last / columns {
            self.selected_index = last;
        }
    }

    /// Index of the card drawn at the 0-indexed cell (`line`, `column`).
    ///
    /// Uses the same windowing as [`compute_viewmodel`](Self::compute_viewmodel)
    /// for the stored viewport.
    #[must_use]
    pub fn card_at(&self, line: isize, column: usize) -> Option<usize> {
        let (rows, cols) = self.viewport;
        let row = usize::try_from(line).ok()? + 1;
        let grid_row = row.checked_sub(layout::GRID_TOP_ROW)? / layout::CARD_HEIGHT;
        let visible_rows = layout::grid_rows(rows);
        if grid_row >= visible_rows {
            return None;
        }

        let columns = layout::grid_columns(cols);
        let pitch = layout::card_width(cols, columns) + layout::CARD_GAP;
        let grid_col = column / pitch;
        if grid_col >= columns || column % pitch >= pitch - layout::CARD_GAP {
            return None;
        }

        let len = self.gallery.cards().len();
        let total_rows = len.div_ceil(columns);
        let first_row =
            layout::first_visible_row(self.selected_index / columns, total_rows, visible_rows);
        let index = (first_row + grid_row) * columns + grid_col;
        (index < len).then_some(index)
    }

    /// Records the text handed to the clipboard tool.
    pub fn begin_copy(&mut self, text: String) {
        self.pending_copies.push_back(text);
    }

    /// Takes the oldest copy in flight. Command results settle in the order
    /// the commands were issued.
    pub fn finish_copy(&mut self) -> Option<String> {
        self.pending_copies.pop_front()
    }

    /// Queues raw terminal output for the next render.
    pub fn queue_terminal_output(&mut self, sequence: String) {
        self.pending_output.push(sequence);
    }

    /// Drains queued terminal output.
    pub fn take_terminal_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending_output)
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    ///
    /// The card grid is windowed so the selected card's row stays visible.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let columns = layout::grid_columns(cols);
        let card_width = layout::card_width(cols, columns);
        let cards = self.gallery.cards();

        let total_rows = cards.len().div_ceil(columns);
        let visible_rows = layout::grid_rows(rows);
        let first_row =
            layout::first_visible_row(self.selected_index / columns, total_rows, visible_rows);
        let start = (first_row * columns).min(cards.len());
        let end = ((first_row + visible_rows) * columns).min(cards.len());

        let card_views = cards[start..end]
            .iter()
            .enumerate()
            .map(|(offset, card)| self.compute_card_view(card, start + offset, card_width))
            .collect();

        UIViewModel {
            header: self.compute_header(),
            tabs: self.compute_tabs(),
            search_field: FieldInfo {
                label: "검색",
                hotkey: '/',
                value: self.session.search_input.clone(),
                placeholder: "폰트 이름 또는 카테고리".to_string(),
                is_focused: self.input_mode.is_editing(EditField::Search),
            },
            sample_field: FieldInfo {
                label: "샘플",
                hotkey: 'e',
                value: self.session.sample_input.clone(),
                placeholder: self.session.placeholder.clone(),
                is_focused: self.input_mode.is_editing(EditField::SampleText),
            },
            size_readout: self.gallery.size_readout().to_string(),
            cards: card_views,
            columns,
            card_width,
            empty_state: self.gallery.is_empty().then(|| EmptyState {
                message: "검색 결과가 없습니다".to_string(),
                subtitle: "다른 검색어나 카테고리를 선택해 보세요".to_string(),
            }),
            overlay: self.compute_overlay(rows, cols),
            toast: self.toast.message().map(|message| ToastView {
                message: message.to_string(),
            }),
            footer: self.compute_footer(),
        }
    }

    fn compute_card_view(&self, card: &Card, index: usize, card_width: usize) -> CardView {
        let inner = card_width.saturating_sub(CARD_CHROME_COLS);
        let effect = effect_for(card.preview.style_class);
        let gap = letter_gap(card.preview.size_px) + usize::from(effect.spaced);

        let shape = |text: &str| {
            let text = if effect.uppercase {
                text.to_uppercase()
            } else {
                text.to_string()
            };
            truncate_to_width(&letter_spaced(&text, gap), inner)
        };

        CardView {
            id: card.descriptor_id,
            name: card.display_name.to_string(),
            category_label: card.category_label,
            style_class: card.preview.style_class,
            preview_text: shape(&card.preview.text),
            echo_text: card.preview.echo.as_deref().map(shape),
            size_readout: gallery::size_readout(card.preview.size_px),
            is_selected: index == self.selected_index,
            highlight: name_match_range(card.display_name, &self.session.search_text),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: "Fontlab".to_string(),
            result_count: self.gallery.result_count(),
            theme_label: match self.session.theme {
                ThemePreference::Light => "☀ 라이트",
                ThemePreference::Dark => "☾ 다크",
            },
        }
    }

    fn compute_tabs(&self) -> Vec<TabInfo> {
        CategoryFilter::tabs()
            .into_iter()
            .zip('0'..='9')
            .map(|(tab, hotkey)| TabInfo {
                hotkey,
                label: tab.label(),
                is_active: tab == self.session.active_category,
            })
            .collect()
    }

    fn compute_overlay(&self, rows: usize, cols: usize) -> Option<OverlayView> {
        let descriptor = self.overlay.descriptor()?;
        let frame = OverlayFrame::for_descriptor(descriptor, rows, cols);
        let all_lines: Vec<&str> = descriptor.raw_style_code.lines().collect();
        let fit = frame.code_rows();
        let is_clipped = all_lines.len() > fit;

        let code_lines = all_lines
            .iter()
            .take(fit)
            .map(|line| truncate_to_width(line, frame.inner_width()))
            .collect();

        Some(OverlayView {
            title: truncate_to_width(&overlay_title(descriptor), frame.inner_width()),
            code_lines,
            is_clipped,
            frame,
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.overlay.is_open() {
            "c: copy CSS  Esc/q/x: close  click outside: close"
        } else {
            match self.input_mode {
                InputMode::Editing(EditField::Search) => "Type to filter  Enter/Esc: done",
                InputMode::Editing(EditField::SampleText) => "Type sample text  Enter/Esc: done",
                InputMode::Normal => {
                    "hjkl/←↓↑→: move  Enter: CSS  /: search  e: sample  Tab/0-7: category  +/-: size  t: theme  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            SessionState::default(),
            ThemeSet::default(),
            SizeRange::default(),
            false,
            Duration::from_secs(2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn state_with_viewport(rows: usize, cols: usize) -> AppState {
        let mut state = AppState::default();
        state.viewport = (rows, cols);
        state
    }

    #[test]
    fn starts_with_full_catalog_and_readout() {
        let state = AppState::default();
        assert_eq!(state.gallery.result_count(), CATALOG.len());
        assert_eq!(state.gallery.size_readout(), "40px");
        assert_eq!(state.selected_descriptor().map(|d| d.id), Some("neon-glow"));
    }

    #[test]
    fn selection_is_clamped_after_refilter() {
        let mut state = AppState::default();
        state.selected_index = 20;
        state.apply_category(CategoryFilter::Only(Category::Modern));
        assert_eq!(state.gallery.result_count(), 2);
        assert_eq!(state.selected_index, 1);

        state.apply_search_input("없는이름".to_string());
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_card().is_none());
    }

    #[test]
    fn grid_navigation_moves_by_rows() {
        // 3 columns at 120 cols; 25 cards leave one card in the last row.
        let mut state = state_with_viewport(40, 120);
        state.move_selection_down();
        assert_eq!(state.selected_index, 3);
        state.move_selection_up();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);

        state.selected_index = 22;
        state.move_selection_down();
        assert_eq!(state.selected_index, 24);
        state.move_selection_down();
        assert_eq!(state.selected_index, 24);
        state.move_selection_right();
        assert_eq!(state.selected_index, 24);

        state.selected_index = 0;
        state.move_selection_left();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn size_is_clamped_to_range() {
        let mut state = AppState::default();
        assert!(state.apply_sample_size(500));
        assert_eq!(state.session.sample_size, 120);
        assert!(!state.apply_sample_size(121));
        assert_eq!(state.gallery.size_readout(), "120px");
    }

    #[test]
    fn viewmodel_highlights_name_hits() {
        let mut state = AppState::default();
        state.apply_search_input("선셋".to_string());
        let vm = state.compute_viewmodel(30, 80);
        assert_eq!(vm.header.result_count, 1);
        assert_eq!(vm.cards[0].highlight, Some((4, 6)));
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn viewmodel_shows_empty_state() {
        let mut state = AppState::default();
        state.apply_search_input("zzz".to_string());
        let vm = state.compute_viewmodel(30, 80);
        assert!(vm.cards.is_empty());
        assert!(vm.empty_state.is_some());
        assert_eq!(vm.header.result_count, 0);
    }

    #[test]
    fn viewmodel_windows_around_selection() {
        let mut state = state_with_viewport(19, 35);
        state.selected_index = 24;
        let vm = state.compute_viewmodel(19, 35);
        assert_eq!(vm.columns, 1);
        assert_eq!(vm.cards.len(), 2);
        assert!(vm.cards.last().is_some_and(|c| c.is_selected));
    }

    #[test]
    fn glitch_card_carries_echo() {
        let mut state = AppState::default();
        state.apply_search_input("글리치".to_string());
        state.apply_sample_input("ab".to_string());
        let vm = state.compute_viewmodel(30, 80);
        assert_eq!(vm.cards[0].echo_text.as_deref(), Some("ab"));
    }

    #[test]
    fn clicks_resolve_to_cards() {
        let state = state_with_viewport(40, 120);
        let top = (layout::GRID_TOP_ROW - 1) as isize;
        assert_eq!(state.card_at(top, 0), Some(0));
        assert_eq!(state.card_at(top + layout::CARD_HEIGHT as isize, 0), Some(3));
        let second_card_col = layout::card_width(120, 3) + layout::CARD_GAP;
        assert_eq!(state.card_at(top + 2, second_card_col), Some(1));
        assert_eq!(state.card_at(0, 0), None);
        assert_eq!(state.card_at(-1, 0), None);
    }

    #[test]
    fn card_views_carry_the_preview_size() {
        let mut state = AppState::default();
        state.apply_sample_size(64);
        let vm = state.compute_viewmodel(40, 120);
        assert_eq!(vm.size_readout, "64px");
        assert!(!vm.cards.is_empty());
        assert!(vm.cards.iter().all(|card| card.size_readout == "64px"));
    }

    #[test]
    fn copies_settle_in_issue_order() {
        let mut state = AppState::default();
        state.begin_copy("first".to_string());
        state.begin_copy("second".to_string());
        assert_eq!(state.finish_copy().as_deref(), Some("first"));
        assert_eq!(state.finish_copy().as_deref(), Some("second"));
        assert_eq!(state.finish_copy(), None);
    }

    #[test]
    fn terminal_output_drains_once() {
        let mut state = AppState::default();
        state.queue_terminal_output("seq".to_string());
        assert_eq!(state.take_terminal_output(), vec!["seq".to_string()]);
        assert!(state.take_terminal_output().is_empty());
    }
}
