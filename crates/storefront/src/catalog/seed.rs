//! Launch catalog.

use aroma_core::{Audience, Category, Price, Product, ProductId};

const IMAGE_BASE: &str = "https://images.pexels.com/photos";

/// Build a Pexels image URL from a photo number.
fn image(photo: u32) -> String {
    format!("{IMAGE_BASE}/{photo}/pexels-photo-{photo}.jpeg")
}

struct Seed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    full_description: &'static str,
    price: i64,
    audience: Audience,
    category: Category,
    notes: &'static [&'static str],
    photos: [u32; 3],
    featured: bool,
    rating: f32,
    review_count: u32,
}

impl From<&Seed> for Product {
    fn from(seed: &Seed) -> Self {
        let images: Vec<String> = seed.photos.iter().copied().map(image).collect();
        let primary = images.first().cloned().unwrap_or_default();
        Self {
            id: ProductId::from(seed.id),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            full_description: seed.full_description.to_string(),
            price: Price::from_units(seed.price),
            size: "50ml".to_string(),
            audience: seed.audience,
            category: seed.category,
            notes: seed.notes.iter().map(ToString::to_string).collect(),
            image: primary,
            images,
            in_stock: true,
            featured: seed.featured,
            rating: seed.rating,
            review_count: seed.review_count,
        }
    }
}

const SEEDS: [Seed; 8] = [
    Seed {
        id: "1",
        name: "Midnight Elegance",
        description: "A sophisticated blend of bergamot and sandalwood",
        full_description: "Midnight Elegance captures the essence of a starlit evening with its sophisticated blend of bergamot, jasmine, and sandalwood. This luxurious fragrance opens with fresh citrus notes, transitions to a floral heart, and settles into a warm, woody base that lingers beautifully on the skin.",
        price: 185,
        audience: Audience::Unisex,
        category: Category::Oriental,
        notes: &["Bergamot", "Jasmine", "Sandalwood", "Vanilla"],
        photos: [965_990, 1_190_829, 1_961_795],
        featured: true,
        rating: 4.8,
        review_count: 127,
    },
    Seed {
        id: "2",
        name: "Rose Garden Dreams",
        description: "Delicate rose petals with hints of peony",
        full_description: "Rose Garden Dreams is a romantic floral fragrance that captures the beauty of a blooming garden at dawn. With top notes of fresh rose petals, a heart of peony and lily of the valley, and a base of soft musk, this perfume embodies feminine grace and elegance.",
        price: 165,
        audience: Audience::Women,
        category: Category::Floral,
        notes: &["Rose", "Peony", "Lily of the Valley", "Musk"],
        photos: [1_458_838, 1_337_477, 1_190_830],
        featured: true,
        rating: 4.6,
        review_count: 89,
    },
    Seed {
        id: "3",
        name: "Ocean Breeze",
        description: "Fresh aquatic notes with marine minerals",
        full_description: "Ocean Breeze brings the invigorating essence of the sea to your daily routine. This fresh aquatic fragrance combines marine minerals with crisp bergamot and a touch of driftwood, creating a clean, energizing scent perfect for the modern individual.",
        price: 145,
        audience: Audience::Men,
        category: Category::Aquatic,
        notes: &["Marine Minerals", "Bergamot", "Driftwood", "Sea Salt"],
        photos: [1_190_831, 965_989, 1_337_478],
        featured: false,
        rating: 4.4,
        review_count: 156,
    },
    Seed {
        id: "4",
        name: "Golden Amber",
        description: "Warm amber with exotic spices",
        full_description: "Golden Amber is a luxurious oriental fragrance that envelops you in warmth and sophistication. Rich amber forms the heart of this composition, enhanced by exotic spices like cardamom and cinnamon, and grounded by precious woods and vanilla.",
        price: 225,
        audience: Audience::Unisex,
        category: Category::Oriental,
        notes: &["Amber", "Cardamom", "Cinnamon", "Vanilla", "Sandalwood"],
        photos: [1_190_832, 1_458_839, 965_991],
        featured: true,
        rating: 4.9,
        review_count: 203,
    },
    Seed {
        id: "5",
        name: "Citrus Burst",
        description: "Energizing blend of citrus and herbs",
        full_description: "Citrus Burst is an invigorating fragrance that awakens the senses with its vibrant blend of fresh citrus fruits and aromatic herbs. Perfect for daytime wear, this energizing scent combines grapefruit, lemon, and basil for a refreshing experience.",
        price: 125,
        audience: Audience::Unisex,
        category: Category::Citrus,
        notes: &["Grapefruit", "Lemon", "Basil", "Green Tea"],
        photos: [1_337_479, 1_190_833, 1_458_840],
        featured: false,
        rating: 4.3,
        review_count: 78,
    },
    Seed {
        id: "6",
        name: "Velvet Noir",
        description: "Dark and mysterious with black currant",
        full_description: "Velvet Noir is a captivating fragrance that embodies mystery and allure. This dark composition opens with black currant and plum, develops into a heart of dark chocolate and coffee, and finishes with a base of leather and patchouli.",
        price: 195,
        audience: Audience::Women,
        category: Category::Oriental,
        notes: &["Black Currant", "Plum", "Dark Chocolate", "Coffee", "Leather"],
        photos: [1_961_795, 965_990, 1_190_829],
        featured: false,
        rating: 4.7,
        review_count: 142,
    },
    Seed {
        id: "7",
        name: "Forest Walk",
        description: "Earthy woods with pine and cedar",
        full_description: "Forest Walk captures the essence of a peaceful stroll through an ancient forest. This woody fragrance combines fresh pine needles with warm cedar and earthy moss, creating a grounding and natural scent that connects you with nature.",
        price: 155,
        audience: Audience::Men,
        category: Category::Woody,
        notes: &["Pine", "Cedar", "Moss", "Vetiver"],
        photos: [1_337_477, 1_190_830, 1_458_838],
        featured: false,
        rating: 4.5,
        review_count: 94,
    },
    Seed {
        id: "8",
        name: "Lavender Fields",
        description: "Calming lavender with chamomile",
        full_description: "Lavender Fields is a serene and calming fragrance inspired by the purple fields of Provence. This soothing composition blends pure lavender with gentle chamomile and soft vanilla, creating a peaceful and relaxing scent perfect for evening wear.",
        price: 135,
        audience: Audience::Unisex,
        category: Category::Floral,
        notes: &["Lavender", "Chamomile", "Vanilla", "White Musk"],
        photos: [1_190_830, 1_337_478, 965_989],
        featured: true,
        rating: 4.4,
        review_count: 67,
    },
];

/// The eight launch products, in display order.
pub(super) fn products() -> Vec<Product> {
    SEEDS.iter().map(Product::from).collect()
}
