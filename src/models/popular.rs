use serde_json::json;

use crate::models::place::RecommendationItem;

/// Fixed list of featured destinations returned with every recommendations
/// response. Hand-curated reference data: it is never filtered, ranked or
/// decorated against the query point, which is also why none of the entries
/// carry a distance.
pub fn popular_destinations() -> Vec<RecommendationItem> {
    vec![
        RecommendationItem {
            place_id: "ChIJnxBQRm2J0S0RvCbpniHjKog".to_string(),
            name: Some("Pura Ulun Danu".to_string()),
            description: Some("Ulun Danu Beratan Temple is a stunning water temple located on the shores of Beratan Lake. The temple is known for its beautiful architecture and serene surroundings. Visitors can explore the temple grounds, enjoy the scenic beauty, and learn about the cultural significance of the site. Ulun Danu Beratan Temple promises a serene and enriching cultural experience.".to_string()),
            region: Some("Lovina, Bali".to_string()),
            vicinity: Some("Danau Beratan, Candikuning".to_string()),
            types: Some("['hindu_temple', 'tourist_attraction', 'place_of_worship', 'point_of_interest', 'establishment']".to_string()),
            user_rating_total: Some(40813),
            distance: None,
            rating: Some(4.6),
            photos: json!("https://www.indonesia.travel/content/dam/indtravelrevamp/en/destinations/bali-nusa-tenggara/bali/bali/ulun-danu-beratan-iconic-temple-on-lake-beratan/ulun-danu.jpg"),
            location_url: "https://www.google.com/maps/search/?api=1&query=-8.2751807,115.1668234".to_string(),
            lat: Some(-8.2751807),
            lon: Some(115.1668234),
        },
        RecommendationItem {
            place_id: "ChIJ9xNYnp9z0i0RLqru0Tr_Y3I".to_string(),
            name: Some("Pulau Nusa Penida".to_string()),
            description: Some("Pulau Nusa Penida, also known as Nusa Penida, is a stunning island known for its rugged landscapes, pristine beaches, and vibrant marine life. The island offers a range of activities, including snorkeling, diving, and hiking. Visitors can explore the charming villages, enjoy the scenic views, and relax in the laid-back atmosphere. Pulau Nusa Penida is a must-visit for those seeking a tropical paradise with a blend of adventure and relaxation.".to_string()),
            region: Some("Nusa Penida, Bali".to_string()),
            vicinity: Some("Klungkung, Bali 80771".to_string()),
            types: Some("['tourist_attraction', 'point_of_interest', 'establishment']".to_string()),
            user_rating_total: Some(5000),
            distance: None,
            rating: Some(4.9),
            photos: json!("https://travellingindonesia.com/wp-content/uploads/2023/08/Nusa-Penida.jpeg"),
            location_url: "https://www.google.com/maps/search/?api=1&query=-8.7275,115.5444".to_string(),
            lat: Some(-8.7275),
            lon: Some(115.5444),
        },
        RecommendationItem {
            place_id: "ChIJkbJrRYFH0i0RggJb7CncdHE".to_string(),
            name: Some("Kuta Beach".to_string()),
            description: Some("Kuta Beach is one of Bali's most famous beaches, known for its vibrant atmosphere, soft sands, and excellent surfing conditions. The beach offers a lively environment perfect for sunbathing, swimming, and enjoying the coastal scenery. Visitors can explore the nearby shops, cafes, and nightlife, making it an ideal destination for a fun and dynamic beach experience. Kuta Beach captures the energetic spirit of Bali's coastal culture.".to_string()),
            region: Some("Kuta, Bali".to_string()),
            vicinity: Some("Jalan Pantai Kuta No.32, Legian".to_string()),
            types: Some("['tourist_attraction', 'point_of_interest', 'establishment']".to_string()),
            user_rating_total: Some(6000),
            distance: None,
            rating: Some(4.9),
            photos: json!("https://i2.wp.com/blog.tripcetera.com/id/wp-content/uploads/2020/03/leebudihart_76864081_2484833498431751_3194446755026370817_n.jpg"),
            location_url: "https://www.google.com/maps/search/?api=1&query=-8.722624899999998,115.1695272".to_string(),
            lat: Some(-8.7183),
            lon: Some(115.1691),
        },
        RecommendationItem {
            place_id: "ChIJq95xT4I30i0RaU3j93Diq8o".to_string(),
            name: Some("Pura Tanah Lot".to_string()),
            description: Some("Pura Tanah Lot is an iconic sea temple located on a rocky outcrop, offering breathtaking views of the ocean and dramatic sunsets. The temple is a significant cultural and religious site, attracting visitors from around the world. Visitors can explore the temple grounds, take in the stunning scenery, and experience the spiritual ambiance. Pura Tanah Lot is a must-visit destination that showcases Bali's cultural heritage and natural beauty.".to_string()),
            region: Some("Canggu, Bali".to_string()),
            vicinity: Some("Jl. By Pass Nyanyi Jalan Tanah Lot, Beraban".to_string()),
            types: Some("['tourist_attraction', 'point_of_interest', 'establishment']".to_string()),
            user_rating_total: Some(4000),
            distance: None,
            rating: Some(4.7),
            photos: json!("https://lh3.googleusercontent.com/gps-proxy/ALd4DhGwB9NEhe_3YA8DGHKqmXChNpOCeTZYp7Ab-Rj65QpWkPrGrxaJT6E_1m1C-bIf1owIuFympWHfZoT1aHk6LkdJbkAb56cF_cNMyv_N7cgdlHojJZqi9X8NpjXDR4KjUs2SHKLCmBp6WKYXlTzGcildy8_HZPyUUis26XmPFckgoJ8zVuXcHa0=w408-h272-k-no"),
            location_url: "https://www.google.com/maps/search/?api=1&query=-8.6208,115.0868".to_string(),
            lat: Some(-8.6208),
            lon: Some(115.0868),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::popular_destinations;

    #[test]
    fn popular_destinations_are_fixed_reference_data() {
        let destinations = popular_destinations();

        assert_eq!(destinations.len(), 4);
        assert!(destinations.iter().all(|item| item.distance.is_none()));
        assert_eq!(destinations[0].name.as_deref(), Some("Pura Ulun Danu"));
        assert_eq!(destinations[3].name.as_deref(), Some("Pura Tanah Lot"));
    }
}
