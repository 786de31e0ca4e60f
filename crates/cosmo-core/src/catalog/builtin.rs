//! The storefront's built-in product list.
//!
//! Order matters: the local fallback recommendation walks this list front to back.

use super::model::Product;
use super::price::Price;

/// Raw catalog rows: id, name, price, image, description, category.
const BUILTIN_ROWS: &[(u32, &str, u64, &str, &str, &str)] = &[
    (
        1,
        "Wireless Noise-Cancelling Headphones",
        29999,
        "https://m.media-amazon.com/images/I/610NdWdTLiL.__AC_SX300_SY300_QL70_ML2_.jpg",
        "Premium bluetooth headphones with active noise cancellation.",
        "Electronics",
    ),
    (
        2,
        "Smart Fitness Watch",
        19999,
        "https://m.media-amazon.com/images/I/71CQ6esBqFL._AC_SX679_.jpg",
        "Track your workouts and health metrics with this advanced smartwatch.",
        "Wearables",
    ),
    (
        3,
        "Bluetooth Speaker",
        7999,
        "https://m.media-amazon.com/images/I/810dSwE0MoL._AC_SX679_.jpg",
        "Portable wireless speaker with deep bass and 20-hour battery life.",
        "Electronics",
    ),
    (
        4,
        "Running Shoes",
        12999,
        "https://m.media-amazon.com/images/I/71jGYKb6uiL._AC_SY575_.jpg",
        "Lightweight athletic shoes with cushioned support.",
        "Sports",
    ),
    (
        5,
        "Yoga Mat",
        4999,
        "https://m.media-amazon.com/images/I/71fDvjK2-CL.__AC_SX300_SY300_QL70_ML2_.jpg",
        "Non-slip exercise mat perfect for yoga and fitness.",
        "Sports",
    ),
    (
        6,
        "Electric Kettle",
        3999,
        "https://m.media-amazon.com/images/I/61WS0rothIL._AC_SX569_.jpg",
        "Fast boiling electric kettle with automatic shut-off.",
        "Home",
    ),
    (
        7,
        "Stainless Steel Water Bottle",
        1999,
        "https://m.media-amazon.com/images/I/61du0HKPT-L.__AC_SX300_SY300_QL70_ML2_.jpg",
        "Insulated water bottle that keeps drinks cold for 24 hours.",
        "Sports",
    ),
    (
        8,
        "Electric Toothbrush",
        4999,
        "https://m.media-amazon.com/images/I/71qj6MUVkIL._AC_SX425_.jpg",
        "Rechargeable electric toothbrush with smart timer.",
        "Health",
    ),
    (
        9,
        "Smart LED Bulbs",
        3499,
        "https://m.media-amazon.com/images/I/61gaO3Jny7L._AC_SX679_.jpg",
        "Wi-Fi-enabled LED bulbs controllable via smartphone.",
        "Smart Home",
    ),
    (
        10,
        "Fitness Tracker Watch",
        5999,
        "https://m.media-amazon.com/images/I/61AeGQhwjxL.__AC_SX300_SY300_QL70_ML2_.jpg",
        "Wearable fitness tracker that monitors heart rate and steps.",
        "Wearables",
    ),
    (
        11,
        "Portable Charger",
        2999,
        "https://m.media-amazon.com/images/I/51E4tGpWPmL._AC_SX679_.jpg",
        "High-capacity portable charger with dual USB ports.",
        "Electronics",
    ),
    (
        12,
        "Non-Stick Cookware Set",
        8999,
        "https://m.media-amazon.com/images/I/81-tPQ-u8vL.__AC_SX300_SY300_QL70_ML2_.jpg",
        "Durable non-stick cookware set for easy cooking.",
        "Home",
    ),
    (
        13,
        "Pet Grooming Kit",
        3999,
        "https://m.media-amazon.com/images/I/61R1ye6gGKL._AC_SX679_.jpg",
        "Complete grooming kit for dogs and cats.",
        "Pets",
    ),
    (
        14,
        "Kids' Building Blocks Set",
        2499,
        "https://m.media-amazon.com/images/I/91AUb4LJgBL._AC_SX425_.jpg",
        "Colorful building blocks set for creative play.",
        "Toys",
    ),
    (
        15,
        "Instant Pot Multi-Cooker",
        8999,
        "https://m.media-amazon.com/images/I/71++-bZz+4L._AC_SY300_SX300_.jpg",
        "Versatile multi-cooker that combines pressure cooking and slow cooking.",
        "Home",
    ),
    (
        16,
        "Electric Griddle",
        4999,
        "https://m.media-amazon.com/images/I/91gT1IJP7zL.__AC_SX300_SY300_QL70_ML2_.jpg",
        "Large electric griddle with non-stick surface.",
        "Home",
    ),
    (
        17,
        "Casual Sneakers",
        5999,
        "https://m.media-amazon.com/images/I/81n6HX9GxlL._AC_SX575_.jpg",
        "Comfortable casual sneakers designed for daily wear.",
        "Fashion",
    ),
    (
        18,
        "Gaming Mouse",
        3999,
        "https://m.media-amazon.com/images/I/713RxxjGIGL.__AC_SY300_SX300_QL70_ML2_.jpg",
        "Ergonomic gaming mouse with customizable DPI settings.",
        "Gaming",
    ),
    (
        19,
        "Coffee Maker",
        4999,
        "https://m.media-amazon.com/images/I/517yg6D6GxL._AC_SL1250_.jpg",
        "Programmable coffee maker with built-in grinder.",
        "Home",
    ),
    (
        20,
        "Air Fryer",
        7999,
        "https://m.media-amazon.com/images/I/61NKhAZRIUL.__AC_SY300_SX300_QL70_ML2_.jpg",
        "Healthy air fryer that cooks food using hot air circulation.",
        "Home",
    ),
    (
        21,
        "Smartphone Stand",
        1599,
        "https://m.media-amazon.com/images/I/61srjyM7TFL.__AC_SX300_SY300_QL70_ML2_.jpg",
        "Adjustable smartphone stand compatible with all smartphones.",
        "Electronics",
    ),
    (
        22,
        "Men Casual Shirt",
        2999,
        "https://m.media-amazon.com/images/I/81VfVizPknL._AC_SY500_.jpg",
        "Stylish casual shirt made from breathable cotton fabric.",
        "Fashion",
    ),
    (
        23,
        "Women Running Shoes",
        6999,
        "https://m.media-amazon.com/images/I/51xsDZHFhxL._AC_SY695_.jpg",
        "Lightweight running shoes designed for comfort during workouts.",
        "Sports",
    ),
    (
        24,
        "Wireless Charger",
        2599,
        "https://m.media-amazon.com/images/I/61-n1+G62UL._AC_SX300_SY300_.jpg",
        "Fast wireless charger compatible with all Qi-enabled devices.",
        "Electronics",
    ),
    (
        25,
        "Smart Home Security Camera",
        8999,
        "https://m.media-amazon.com/images/I/41EprViBuqL.__AC_SX300_SY300_QL70_ML2_.jpg",
        "1080p HD security camera with night vision and motion detection.",
        "Smart Home",
    ),
];

/// Returns the built-in storefront products in catalog order.
pub fn builtin_products() -> Vec<Product> {
    BUILTIN_ROWS
        .iter()
        .map(|&(id, name, cents, image, description, category)| Product {
            id,
            name: name.to_string(),
            price: Price::from_cents(cents),
            image: image.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        })
        .collect()
}
