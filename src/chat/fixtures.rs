use crate::chat::catalog::PropertyCatalog;
use crate::models::{Availability, Listing};

fn listing(
    id: &str,
    name: &str,
    city: &str,
    bedrooms: u32,
    area: f64,
    price: f64,
    availability: Availability,
) -> Listing {
    Listing {
        id: id.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        bedrooms,
        area,
        price,
        currency: "INR".to_string(),
        availability,
        description: format!("{} in {}.", name, city),
        contact: format!("{}@zorever.com", id.to_lowercase()),
    }
}

pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing("P001", "Sunrise Apartments", "Mumbai", 2, 950.0, 8_500_000.0, Availability::Available),
        listing("P002", "Palm Villa", "Goa", 4, 3200.0, 42_000_000.0, Availability::UnderOffer),
        listing("P003", "Marina Studio", "Goa", 0, 420.0, 3_200_000.0, Availability::Available),
        listing("P004", "Green Valley Cottage", "Pune", 3, 1800.0, 12_750_000.0, Availability::Rented),
        listing("P005", "Sunrise Heights", "Bengaluru", 3, 1450.0, 15_000_000.0, Availability::Sold),
    ]
}

pub fn sample_catalog() -> PropertyCatalog {
    PropertyCatalog::new(sample_listings())
}
