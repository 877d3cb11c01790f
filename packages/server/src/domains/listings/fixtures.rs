//! Fixture dataset installed by the seed binary.

use super::models::listing::ListingInput;

fn listing(
    title: &str,
    description: &str,
    image_url: &str,
    price: f64,
    location: &str,
    country: &str,
) -> ListingInput {
    ListingInput {
        title: title.to_string(),
        description: description.to_string(),
        image_url: Some(image_url.to_string()),
        price,
        location: location.to_string(),
        country: country.to_string(),
    }
}

/// The fixed dataset the seed binary replaces the collection with.
pub fn fixtures() -> Vec<ListingInput> {
    vec![
        listing(
            "Cozy Beachfront Cottage",
            "Escape to this charming beachfront cottage for a relaxing getaway. Wake up to ocean views and fall asleep to the sound of the waves.",
            "https://images.unsplash.com/photo-1552733407-5d5c46c3bb3b",
            1500.0,
            "Malibu",
            "United States",
        ),
        listing(
            "Modern Loft in Downtown",
            "Stay in the heart of the city in this stylish loft apartment, walking distance from galleries, restaurants, and nightlife.",
            "https://images.unsplash.com/photo-1501785888041-af3ef285b470",
            1200.0,
            "New York City",
            "United States",
        ),
        listing(
            "Mountain Retreat",
            "Unplug and unwind in this peaceful mountain cabin, surrounded by hiking trails and panoramic alpine views.",
            "https://images.unsplash.com/photo-1571896349842-33c89424de2d",
            1000.0,
            "Aspen",
            "United States",
        ),
        listing(
            "Historic Villa in Tuscany",
            "Experience the charm of rural Italy in this restored sixteenth-century villa, set among rolling vineyards and olive groves.",
            "https://images.unsplash.com/photo-1566073771259-6a8506099945",
            2500.0,
            "Florence",
            "Italy",
        ),
        listing(
            "Secluded Treehouse Getaway",
            "Live among the treetops in this unique treehouse, a romantic hideaway built into a centuries-old Douglas fir.",
            "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4",
            800.0,
            "Portland",
            "United States",
        ),
        listing(
            "Canal-side Apartment",
            "A bright apartment overlooking one of the city's quietest canals, with bicycles included for exploring like a local.",
            "https://images.unsplash.com/photo-1534351590666-13e3e96b5017",
            1100.0,
            "Amsterdam",
            "Netherlands",
        ),
        listing(
            "Traditional Ryokan Stay",
            "Sleep on tatami, soak in the onsen, and enjoy a kaiseki dinner at this family-run inn near the old geisha district.",
            "https://images.unsplash.com/photo-1522798514-97ceb8c4f1c8",
            1800.0,
            "Kyoto",
            "Japan",
        ),
        listing(
            "Safari Lodge Tent",
            "Canvas luxury on the edge of the savanna. Watch wildlife gather at the watering hole from your private deck.",
            "https://images.unsplash.com/photo-1493246507139-91e8fad9978e",
            3000.0,
            "Serengeti",
            "Tanzania",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fixture_is_valid() {
        for fixture in fixtures() {
            assert!(
                fixture.validate().is_ok(),
                "fixture {:?} failed validation",
                fixture.title
            );
        }
    }

    #[test]
    fn fixtures_carry_image_urls() {
        // The seed data should never rely on the placeholder image.
        for fixture in fixtures() {
            assert!(fixture.image_url.is_some());
        }
    }
}
