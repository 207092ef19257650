//! Full render plus the sample-text and sample-size fast paths.
//!
//! `render` always rebuilds every card. The fast paths mutate mounted
//! previews in place and never touch the card list or the counter, so a text
//! or size change can't alter which entries are visible.

use super::surface::{Card, Preview, RenderSurface};
use crate::domain::StyleDescriptor;

/// Builds the card for one descriptor.
#[must_use]
pub fn build_card(descriptor: &StyleDescriptor, sample_text: &str, sample_size: u32) -> Card {
    Card {
        descriptor_id: descriptor.id,
        display_name: descriptor.display_name,
        category_label: descriptor.category_label,
        preview: Preview {
            style_class: descriptor.style_class,
            text: sample_text.to_string(),
            size_px: sample_size,
            echo: descriptor
                .requires_echo_attribute
                .then(|| sample_text.to_string()),
        },
    }
}

/// Replaces everything on `surface` with one card per visible descriptor and
/// sets the result counter.
pub fn render<S>(surface: &mut S, visible: &[&StyleDescriptor], sample_text: &str, sample_size: u32)
where
    S: RenderSurface + ?Sized,
{
    let _span = tracing::debug_span!("render_cards", card_count = visible.len()).entered();

    let cards = visible
        .iter()
        .map(|d| build_card(d, sample_text, sample_size))
        .collect();

    surface.replace_cards(cards);
    surface.set_result_count(visible.len());
}

/// Rewrites the text of every mounted preview, keeping echo attributes in sync.
pub fn update_preview_text<S>(surface: &mut S, sample_text: &str)
where
    S: RenderSurface + ?Sized,
{
    let mut updated = 0_usize;
    surface.for_each_preview(&mut |preview| {
        preview.text = sample_text.to_string();
        if let Some(echo) = preview.echo.as_mut() {
            sample_text.clone_into(echo);
        }
        updated += 1;
    });
    tracing::trace!(updated, "preview text updated in place");
}

/// Rewrites the display size of every mounted preview and the size readout.
pub fn update_preview_size<S>(surface: &mut S, sample_size: u32)
where
    S: RenderSurface + ?Sized,
{
    surface.for_each_preview(&mut |preview| preview.size_px = sample_size);
    surface.set_size_readout(size_readout(sample_size));
}

/// Readout text for the size control.
#[must_use]
pub fn size_readout(sample_size: u32) -> String {
    format!("{sample_size}px")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::filter::filter_catalog;
    use crate::domain::catalog::{find_by_id, CATALOG};
    use crate::domain::{Category, CategoryFilter};
    use crate::gallery::Gallery;

    /// Surface that counts how often each operation is used.
    #[derive(Default)]
    struct RecordingSurface {
        inner: Gallery,
        replacements: usize,
        count_updates: usize,
    }

    impl RenderSurface for RecordingSurface {
        fn replace_cards(&mut self, cards: Vec<Card>) {
            self.replacements += 1;
            self.inner.replace_cards(cards);
        }

        fn set_result_count(&mut self, count: usize) {
            self.count_updates += 1;
            self.inner.set_result_count(count);
        }

        fn set_size_readout(&mut self, readout: String) {
            self.inner.set_size_readout(readout);
        }

        fn for_each_preview(&mut self, visit: &mut dyn FnMut(&mut Preview)) {
            self.inner.for_each_preview(visit);
        }
    }

    #[test]
    fn echo_is_only_set_for_flagged_descriptors() {
        let glitch = build_card(find_by_id("glitch").expect("glitch"), "abc", 40);
        assert_eq!(glitch.preview.echo.as_deref(), Some("abc"));

        let fire = build_card(find_by_id("fire").expect("fire"), "abc", 40);
        assert_eq!(fire.preview.echo, None);
        assert_eq!(fire.preview.style_class, "font-fire");
    }

    #[test]
    fn render_replaces_previous_cards_and_sets_counter() {
        let mut surface = Gallery::default();
        render(&mut surface, &filter_catalog(CATALOG, CategoryFilter::All, ""), "x", 40);
        assert_eq!(surface.cards().len(), 25);

        let modern = filter_catalog(CATALOG, CategoryFilter::Only(Category::Modern), "");
        render(&mut surface, &modern, "x", 40);
        assert_eq!(surface.cards().len(), 2);
        assert_eq!(surface.result_count(), 2);
        assert_eq!(surface.cards()[0].descriptor_id, "stencil");
    }

    #[test]
    fn empty_render_shows_zero() {
        let mut surface = Gallery::default();
        render(&mut surface, &[], "x", 40);
        assert!(surface.is_empty());
        assert_eq!(surface.result_count(), 0);
    }

    #[test]
    fn text_update_keeps_cards_and_syncs_echo() {
        let mut surface = RecordingSurface::default();
        let futuristic = filter_catalog(CATALOG, CategoryFilter::Only(Category::Futuristic), "");
        render(&mut surface, &futuristic, "before", 40);

        update_preview_text(&mut surface, "after");

        assert_eq!(surface.replacements, 1);
        assert_eq!(surface.count_updates, 1);
        assert_eq!(surface.inner.result_count(), 3);
        for card in surface.inner.cards() {
            assert_eq!(card.preview.text, "after");
            match card.descriptor_id {
                "glitch" => assert_eq!(card.preview.echo.as_deref(), Some("after")),
                _ => assert_eq!(card.preview.echo, None),
            }
        }
    }

    #[test]
    fn size_update_touches_previews_and_readout_only() {
        let mut surface = RecordingSurface::default();
        render(&mut surface, &filter_catalog(CATALOG, CategoryFilter::All, ""), "t", 40);

        update_preview_size(&mut surface, 64);

        assert_eq!(surface.replacements, 1);
        assert!(surface.inner.cards().iter().all(|c| c.preview.size_px == 64));
        assert_eq!(surface.inner.size_readout(), "64px");
    }
}
