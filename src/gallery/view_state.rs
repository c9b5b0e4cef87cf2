use crate::gallery::content::{find_item, Category, GalleryItem, GALLERY};

/// Filter and lightbox selection for one mounted gallery.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryViewState {
    pub active: Category,
    pub selected: Option<u32>,
}

impl Default for GalleryViewState {
    fn default() -> Self {
        Self {
            active: Category::All,
            selected: None,
        }
    }
}

impl GalleryViewState {
    pub fn set_category(&mut self, category: Category) {
        self.active = category;
    }

    /// Unknown ids are accepted; `selected_item` resolves them to nothing.
    pub fn open_item(&mut self, id: u32) {
        self.selected = Some(id);
    }

    pub fn close_item(&mut self) {
        self.selected = None;
    }

    pub fn visible_items(&self) -> Vec<&'static GalleryItem> {
        GALLERY.iter().filter(|item| self.active.matches(item)).collect()
    }

    pub fn selected_item(&self) -> Option<&'static GalleryItem> {
        self.selected.and_then(find_item)
    }

    pub fn lightbox_open(&self) -> bool {
        self.selected_item().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(state: &GalleryViewState) -> Vec<u32> {
        state.visible_items().iter().map(|i| i.id).collect()
    }

    #[test]
    fn defaults_to_all_and_closed() {
        let state = GalleryViewState::default();
        assert_eq!(state.active, Category::All);
        assert!(state.selected.is_none());
        assert_eq!(ids(&state), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn drinks_filter_keeps_registry_order() {
        let mut state = GalleryViewState::default();
        state.set_category(Category::Drinks);
        assert_eq!(ids(&state), vec![1, 2, 3]);
    }

    #[test]
    fn every_category_matches_its_tag() {
        let mut state = GalleryViewState::default();
        for category in Category::ALL {
            state.set_category(category);
            let expected: Vec<u32> = GALLERY
                .iter()
                .filter(|i| category == Category::All || i.category == category)
                .map(|i| i.id)
                .collect();
            assert_eq!(ids(&state), expected, "{:?}", category);
        }
    }

    #[test]
    fn filter_change_moves_item_into_eager_slot() {
        use crate::gallery::visibility::{load_requested, loads_eagerly};

        let eager_ids = |state: &GalleryViewState| -> Vec<u32> {
            state
                .visible_items()
                .iter()
                .enumerate()
                .filter(|(index, _)| loads_eagerly(*index))
                .map(|(_, item)| item.id)
                .collect()
        };

        let mut state = GalleryViewState::default();
        assert_eq!(eager_ids(&state), vec![1, 2]);
        let index_before = ids(&state).iter().position(|id| *id == 4).unwrap();
        assert!(!loads_eagerly(index_before));

        state.set_category(Category::Events);
        assert_eq!(eager_ids(&state), vec![4, 5]);
        // Item 4 mounted lazily and was never observed, yet must load now.
        assert!(load_requested(false, loads_eagerly(0)));
    }

    #[test]
    fn switching_back_to_all_restores_everything() {
        let mut state = GalleryViewState::default();
        state.set_category(Category::Events);
        assert_eq!(ids(&state), vec![4, 5]);
        state.set_category(Category::All);
        assert_eq!(ids(&state).len(), GALLERY.len());
    }

    #[test]
    fn open_then_close_clears_selection() {
        let mut state = GalleryViewState::default();
        state.open_item(3);
        assert_eq!(state.selected_item().map(|i| i.id), Some(3));
        assert!(state.lightbox_open());
        state.close_item();
        assert!(state.selected.is_none());
        assert!(!state.lightbox_open());
    }

    #[test]
    fn unknown_id_renders_as_closed() {
        let mut state = GalleryViewState::default();
        state.open_item(42);
        assert_eq!(state.selected, Some(42));
        assert!(state.selected_item().is_none());
        assert!(!state.lightbox_open());
        state.close_item();
        assert!(state.selected.is_none());
    }

    #[test]
    fn selection_survives_filter_change() {
        let mut state = GalleryViewState::default();
        state.open_item(7);
        state.set_category(Category::Drinks);
        assert_eq!(state.selected_item().map(|i| i.id), Some(7));
    }
}
