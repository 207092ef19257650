//! Render surface abstraction and the in-memory gallery surface.

/// Preview element of a card: the sample text as it should be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Class name that selects the visual treatment.
    pub style_class: &'static str,
    /// Sample text shown in the preview.
    pub text: String,
    /// Display size in pixels.
    pub size_px: u32,
    /// Second copy of the sample text for layered effects. `Some` only for
    /// descriptors that require it, and always equal to `text` when present.
    pub echo: Option<String>,
}

/// One mounted card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Detail trigger: the id of the descriptor the card was built from.
    pub descriptor_id: &'static str,
    pub display_name: &'static str,
    pub category_label: &'static str,
    pub preview: Preview,
}

/// Minimal display surface the pipeline writes to.
///
/// Implementations decide how (or whether) to draw; the pipeline only relies
/// on full replacement of cards and in-place preview mutation.
pub trait RenderSurface {
    /// Drops every mounted card and mounts `cards` in order.
    fn replace_cards(&mut self, cards: Vec<Card>);

    /// Updates the visible result counter.
    fn set_result_count(&mut self, count: usize);

    /// Updates the numeric size readout next to the size control.
    fn set_size_readout(&mut self, readout: String);

    /// Visits every mounted preview in display order.
    fn for_each_preview(&mut self, visit: &mut dyn FnMut(&mut Preview));
}

/// The gallery as currently mounted.
///
/// This is what the terminal renderer draws; nothing in it is derived on the
/// fly, so a frame always shows exactly what the pipeline last wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    cards: Vec<Card>,
    result_count: usize,
    size_readout: String,
}

impl Gallery {
    /// Mounted cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card at `index`, if mounted.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub const fn result_count(&self) -> usize {
        self.result_count
    }

    #[must_use]
    pub fn size_readout(&self) -> &str {
        &self.size_readout
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl RenderSurface for Gallery {
    fn replace_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    fn set_result_count(&mut self, count: usize) {
        self.result_count = count;
    }

    fn set_size_readout(&mut self, readout: String) {
        self.size_readout = readout;
    }

    fn for_each_preview(&mut self, visit: &mut dyn FnMut(&mut Preview)) {
        for card in &mut self.cards {
            visit(&mut card.preview);
        }
    }
}
