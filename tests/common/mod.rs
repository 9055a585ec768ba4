use catalog_back::models::{Category, NewProduct};
use fake::Fake;
use fake::faker::lorem::en::Sentence;
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;

const NAMES: &[&str] = &[
    "Hat", "Pants", "Shirt", "Apple", "Banana", "Pots", "Towels", "Ford", "Chevy", "Hammer",
    "Wrench",
];

const CATEGORIES: &[Category] = &[
    Category::Unknown,
    Category::Cloths,
    Category::Food,
    Category::Housewares,
    Category::Automotive,
    Category::Tools,
];

/// A randomized product draft, fields drawn the way the catalog would see
/// them in practice: a name from a small pool (so name collisions happen),
/// a short lorem description, a price with two decimal places.
pub fn product() -> NewProduct {
    let mut rng = rand::thread_rng();
    NewProduct {
        name: (*NAMES.choose(&mut rng).unwrap()).to_string(),
        description: Sentence(3..8).fake(),
        price: Decimal::new(rng.gen_range(50..200_000), 2),
        available: rng.gen_bool(0.5),
        category: *CATEGORIES.choose(&mut rng).unwrap(),
    }
}

pub fn batch(count: usize) -> Vec<NewProduct> {
    (0..count).map(|_| product()).collect()
}

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .try_init();
}
