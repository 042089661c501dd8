//! Portfolio dataset and category filtering

/// Gallery categories offered by the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Weddings,
    Portraits,
    Corporate,
    Commercial,
    Events,
    Fashion,
}

impl Category {
    pub const ALL: &[Self] = &[
        Self::Weddings,
        Self::Portraits,
        Self::Corporate,
        Self::Commercial,
        Self::Events,
        Self::Fashion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Weddings => "Weddings",
            Self::Portraits => "Portraits",
            Self::Corporate => "Corporate",
            Self::Commercial => "Commercial",
            Self::Events => "Events",
            Self::Fashion => "Fashion",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Weddings => "weddings",
            Self::Portraits => "portraits",
            Self::Corporate => "corporate",
            Self::Commercial => "commercial",
            Self::Events => "events",
            Self::Fashion => "fashion",
        }
    }
}

/// Active gallery filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub image: &'static str,
    pub thumbnail: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub featured: bool,
    pub tags: &'static [&'static str],
}

pub const PORTFOLIO: &[PortfolioItem] = &[
    PortfolioItem {
        id: 1,
        title: "Wedding Celebration",
        category: Category::Weddings,
        image: "assets/images/Wedding1.jpeg",
        thumbnail: "assets/images/Wedding1.jpeg",
        description: "Beautiful wedding ceremony captured with traditional elegance and joy, showcasing the timeless beauty of Indian weddings.",
        date: "2024-12-01",
        location: "Mumbai, India",
        featured: true,
        tags: &["wedding", "traditional", "celebration", "indian"],
    },
    PortfolioItem {
        id: 2,
        title: "Bridal Portrait",
        category: Category::Portraits,
        image: "assets/images/wedding2.webp",
        thumbnail: "assets/images/wedding2.webp",
        description: "Stunning bridal portrait capturing the grace and beauty of the bride in traditional attire.",
        date: "2024-11-15",
        location: "Wedding Venue",
        featured: true,
        tags: &["bridal", "portrait", "traditional", "elegant"],
    },
    PortfolioItem {
        id: 3,
        title: "Ceremony Moments",
        category: Category::Weddings,
        image: "assets/images/Wedding3.avif",
        thumbnail: "assets/images/Wedding3.avif",
        description: "Intimate moments from the wedding ceremony, capturing emotions and traditions.",
        date: "2024-11-08",
        location: "Temple",
        featured: true,
        tags: &["ceremony", "tradition", "emotion", "culture"],
    },
    PortfolioItem {
        id: 4,
        title: "Reception Celebration",
        category: Category::Weddings,
        image: "assets/images/Wedding4.avif",
        thumbnail: "assets/images/Wedding4.avif",
        description: "Joyful reception moments capturing the celebration and happiness of the newlyweds.",
        date: "2024-10-20",
        location: "Banquet Hall",
        featured: true,
        tags: &["reception", "celebration", "joy", "family"],
    },
    PortfolioItem {
        id: 5,
        title: "Wedding Memories",
        category: Category::Portraits,
        image: "assets/images/Wedding5.jpg",
        thumbnail: "assets/images/Wedding5.jpg",
        description: "Cherished wedding memories captured with artistic photography and emotional storytelling.",
        date: "2024-10-05",
        location: "Garden Venue",
        featured: false,
        tags: &["memories", "artistic", "emotional", "storytelling"],
    },
    PortfolioItem {
        id: 6,
        title: "Corporate Headshot",
        category: Category::Corporate,
        image: "assets/images/Wedding1.jpeg",
        thumbnail: "assets/images/Wedding1.jpeg",
        description: "Professional corporate headshots for LinkedIn profiles and business branding.",
        date: "2024-09-28",
        location: "Corporate Office",
        featured: false,
        tags: &["corporate", "headshot", "professional", "business"],
    },
    PortfolioItem {
        id: 7,
        title: "Maternity Session",
        category: Category::Portraits,
        image: "assets/images/wedding2.webp",
        thumbnail: "assets/images/wedding2.webp",
        description: "Beautiful maternity portraits celebrating the miracle of new life.",
        date: "2024-09-15",
        location: "Studio",
        featured: false,
        tags: &["maternity", "pregnancy", "family", "celebration"],
    },
    PortfolioItem {
        id: 8,
        title: "Product Photography",
        category: Category::Commercial,
        image: "assets/images/Wedding3.avif",
        thumbnail: "assets/images/Wedding3.avif",
        description: "High-quality product photography for e-commerce and marketing campaigns.",
        date: "2024-09-01",
        location: "Studio",
        featured: false,
        tags: &["product", "commercial", "ecommerce", "marketing"],
    },
    PortfolioItem {
        id: 9,
        title: "Event Coverage",
        category: Category::Events,
        image: "assets/images/Wedding4.avif",
        thumbnail: "assets/images/Wedding4.avif",
        description: "Complete event photography covering corporate events, parties, and celebrations.",
        date: "2024-08-20",
        location: "Event Venue",
        featured: false,
        tags: &["event", "corporate", "party", "celebration"],
    },
    PortfolioItem {
        id: 10,
        title: "Fashion Editorial",
        category: Category::Fashion,
        image: "assets/images/Wedding5.jpg",
        thumbnail: "assets/images/Wedding5.jpg",
        description: "Creative fashion editorial photography with artistic styling and dramatic lighting.",
        date: "2024-08-10",
        location: "Studio",
        featured: false,
        tags: &["fashion", "editorial", "artistic", "styling"],
    },
    PortfolioItem {
        id: 11,
        title: "Graduation Ceremony",
        category: Category::Events,
        image: "assets/images/Wedding1.jpeg",
        thumbnail: "assets/images/Wedding1.jpeg",
        description: "Capturing the milestone moments of graduation ceremonies and celebrations.",
        date: "2024-07-25",
        location: "University",
        featured: false,
        tags: &["graduation", "milestone", "achievement", "ceremony"],
    },
    PortfolioItem {
        id: 12,
        title: "Food Photography",
        category: Category::Commercial,
        image: "assets/images/wedding2.webp",
        thumbnail: "assets/images/wedding2.webp",
        description: "Appetizing food photography for restaurants, menus, and culinary brands.",
        date: "2024-07-15",
        location: "Restaurant",
        featured: false,
        tags: &["food", "culinary", "restaurant", "appetizing"],
    },
];

/// Items matching the filter, in original dataset order.
pub fn filter(filter: Filter) -> Vec<&'static PortfolioItem> {
    PORTFOLIO
        .iter()
        .filter(|item| match filter {
            Filter::All => true,
            Filter::Only(cat) => item.category == cat,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_has_twelve_items_with_unique_ids() {
        assert_eq!(PORTFOLIO.len(), 12);
        let mut ids: Vec<u32> = PORTFOLIO.iter().map(|i| i.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn all_filter_preserves_dataset_order() {
        let all = filter(Filter::All);
        assert_eq!(all.len(), 12);
        let ids: Vec<u32> = all.iter().map(|i| i.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn weddings_filter_selects_exact_items_in_order() {
        let weddings = filter(Filter::Only(Category::Weddings));
        let ids: Vec<u32> = weddings.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn every_category_filter_is_consistent() {
        for &cat in Category::ALL {
            for item in filter(Filter::Only(cat)) {
                assert_eq!(item.category, cat);
            }
        }
        let total: usize = Category::ALL
            .iter()
            .map(|&c| filter(Filter::Only(c)).len())
            .sum();
        assert_eq!(total, PORTFOLIO.len());
    }

    #[test]
    fn category_slugs_are_lowercase_labels() {
        for &cat in Category::ALL {
            assert_eq!(cat.slug(), cat.label().to_lowercase());
        }
    }
}
