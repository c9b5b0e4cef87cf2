/// Filter buckets shown above the gallery grid. `All` is the synthetic
/// "no filter" value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    All,
    Drinks,
    Creations,
    Events,
    Process,
    Ingredients,
}

impl Category {
    /// Button order in the filter bar.
    pub const ALL: [Category; 6] = [
        Category::All,
        Category::Drinks,
        Category::Creations,
        Category::Events,
        Category::Process,
        Category::Ingredients,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "Todos",
            Category::Drinks => "Drinks",
            Category::Creations => "Criações",
            Category::Events => "Eventos",
            Category::Process => "Processo",
            Category::Ingredients => "Ingredientes",
        }
    }

    pub fn matches(self, item: &GalleryItem) -> bool {
        self == Category::All || item.category == self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub id: u32,
    pub image: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl GalleryItem {
    /// Intrinsic aspect hint, falling back to the grid's 4:3 cell.
    pub fn aspect(&self) -> (u32, u32) {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => (w, h),
            _ => (4, 3),
        }
    }
}

pub static GALLERY: [GalleryItem; 8] = [
    GalleryItem {
        id: 1,
        image: "/galeria/foto1.png",
        title: "Texto sobre a foto",
        category: Category::Drinks,
        description: "Texto Explicativo",
        width: Some(1200),
        height: Some(900),
    },
    GalleryItem {
        id: 2,
        image: "/galeria/foto2.jpg",
        title: "Mixologia Moderna",
        category: Category::Drinks,
        description: "Drink autoral com técnicas moleculares",
        width: Some(1200),
        height: Some(900),
    },
    GalleryItem {
        id: 3,
        image: "/galeria/foto3.jpg",
        title: "Texto sobre a foto",
        category: Category::Drinks,
        description: "Texto Explicativo",
        width: None,
        height: None,
    },
    GalleryItem {
        id: 4,
        image: "/galeria/foto4.jpg",
        title: "Casamento dos Sonhos",
        category: Category::Events,
        description: "Bar personalizado para casamento",
        width: None,
        height: None,
    },
    GalleryItem {
        id: 5,
        image: "/galeria/foto5.jpg",
        title: "Evento Corporativo",
        category: Category::Events,
        description: "Open bar para empresa",
        width: None,
        height: None,
    },
    GalleryItem {
        id: 6,
        image: "/galeria/foto8.jpg",
        title: "Ingredientes Premium",
        category: Category::Ingredients,
        description: "Seleção de destilados especiais",
        width: None,
        height: None,
    },
    GalleryItem {
        id: 7,
        image: "/galeria/foto7.jpg",
        title: "Processo de layout",
        category: Category::Process,
        description: "Processo de criação",
        width: None,
        height: None,
    },
    GalleryItem {
        id: 8,
        image: "/galeria/foto6.jpg",
        title: "Drinks Autorais",
        category: Category::Creations,
        description: "Criações exclusivas da casa",
        width: None,
        height: None,
    },
];

pub fn find_item(id: u32) -> Option<&'static GalleryItem> {
    GALLERY.iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_positive() {
        let ids: HashSet<u32> = GALLERY.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), GALLERY.len());
        assert!(GALLERY.iter().all(|i| i.id > 0));
    }

    #[test]
    fn no_item_is_tagged_all() {
        assert!(GALLERY.iter().all(|i| i.category != Category::All));
    }

    #[test]
    fn find_item_misses_unknown_id() {
        assert_eq!(find_item(4).map(|i| i.title), Some("Casamento dos Sonhos"));
        assert!(find_item(0).is_none());
        assert!(find_item(99).is_none());
    }

    #[test]
    fn aspect_falls_back_to_four_by_three() {
        assert_eq!(GALLERY[0].aspect(), (1200, 900));
        assert_eq!(GALLERY[3].aspect(), (4, 3));
    }
}
