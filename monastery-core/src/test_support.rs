//! Fixtures shared by unit and behaviour tests across the workspace.

use crate::{Catalog, Event, Monastery, Review, TravelPackage};

/// Build a monastery with `review_count` placeholder reviews.
///
/// Name and location are neutral so no planner keyword fires unless the
/// caller edits the text fields.
#[must_use]
pub fn monastery_with_reviews(id: u64, rating: f32, review_count: usize) -> Monastery {
    let reviews = (0..review_count)
        .map(|n| Review::new(format!("Visitor {n}"), "recently", "Lovely visit."))
        .collect();
    Monastery::new(id, format!("Monastery {id}"), "Sikkim", rating, "Quiet retreat.")
        .with_reviews(reviews)
}

/// A small catalog modelled on the app's bundled mock data.
#[must_use]
pub fn sikkim_catalog() -> Catalog {
    let monasteries = vec![
        Monastery::new(
            1,
            "Tashiding Monastery",
            "Gyalshing, Sikkim",
            4.98,
            "Sacred monastery on a hilltop between the Rathong and Rangit rivers.",
        )
        .with_reviews(vec![
            Review::new("Anjali Sharma", "2 weeks ago", "The view is breathtaking."),
            Review::new("Rahul Mehta", "1 month ago", "Very peaceful."),
        ]),
        Monastery::new(
            2,
            "Rumtek Monastery",
            "Gangtok, Sikkim",
            4.94,
            "One of the largest monasteries in Sikkim, seat of the Karmapa.",
        )
        .with_reviews(vec![
            Review::new("Priya Verma", "3 weeks ago", "Grand architecture."),
            Review::new("Alex Johnson", "2 months ago", "Intricate murals."),
            Review::new("Karma Dorjee", "4 months ago", "A spiritual gem."),
        ]),
        Monastery::new(
            3,
            "Pemayangtse Monastery",
            "Pelling, Sikkim",
            4.9,
            "One of the oldest monasteries with a view of Kanchenjunga.",
        ),
        Monastery::new(
            4,
            "Dubdi Monastery",
            "Yuksom, Sikkim",
            4.9,
            "The first monastery established after the consecration of Yuksom.",
        ),
        Monastery::new(
            5,
            "Enchey Monastery",
            "Gangtok, Sikkim",
            4.7,
            "Known for the annual Cham dance festival, with murals of protective deities.",
        ),
        Monastery::new(
            6,
            "Phodong Monastery",
            "North Sikkim",
            4.5,
            "Rebuilt monastery with ancient frescoes.",
        ),
    ];
    let events = vec![
        Event::new(1, "Losar Festival", "Gangtok, Sikkim")
            .with_categories(["Festival", "Cultural", "Religious"])
            .with_highlights(["Traditional Cham Dance", "Monastery Prayers"]),
        Event::new(2, "Pang Lhabsol Festival", "Rumtek Monastery, Gangtok")
            .with_categories(["Festival", "Religious"])
            .with_highlights(["Warrior Dance"]),
    ];
    let packages = vec![
        TravelPackage::new(1, "Monastery Trail", ["Pelling", "Yuksom", "Tashiding"])
            .with_categories(["Spiritual", "Heritage"]),
        TravelPackage::new(2, "Gangtok Getaway", ["Gangtok", "Tsomgo Lake"])
            .with_categories(["Leisure"]),
    ];
    Catalog::new(monasteries, events, packages)
}
