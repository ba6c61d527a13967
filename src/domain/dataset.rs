//! Embedded classified-ad fixtures.

use crate::domain::model::{Listing, Platform, Section};

pub struct SeedListing {
    pub section: Section,
    pub title: &'static str,
    pub description: &'static str,
    pub contact: &'static str,
    pub platform: Option<Platform>,
    pub timestamp: Option<&'static str>,
}

impl SeedListing {
    pub fn to_listing(&self) -> Listing {
        Listing {
            section: self.section,
            title: self.title.to_string(),
            description: self.description.to_string(),
            contact: self.contact.to_string(),
            platform: self.platform,
            timestamp: self.timestamp.map(str::to_string),
        }
    }
}

pub const SEED_LISTINGS: &[SeedListing] = &[
    SeedListing {
        section: Section::ForSale,
        title: "Antique Sofa",
        description: "Vintage style, recently reupholstered. Perfect for a living room.",
        contact: "555-111-2222",
        platform: Some(Platform::Viber),
        timestamp: Some("2025-01-06T14:30:00Z"),
    },
    SeedListing {
        section: Section::ForSale,
        title: "Electric Scooter",
        description: "Eco-friendly and barely used. Includes charger.",
        contact: "555-333-4444",
        platform: None,
        timestamp: None,
    },
    SeedListing {
        section: Section::ForSale,
        title: "Kitchen Appliances",
        description: "Toaster and blender combo. Excellent condition.",
        contact: "555-555-6666",
        platform: Some(Platform::Signal),
        timestamp: None,
    },
    SeedListing {
        section: Section::RealEstate,
        title: "2-Bedroom Apartment",
        description: "Modern apartment in city center. Close to public transport.",
        contact: "555-777-8888",
        platform: None,
        timestamp: None,
    },
    SeedListing {
        section: Section::RealEstate,
        title: "Cozy Cottage",
        description: "Charming 3-bedroom cottage with a large garden.",
        contact: "555-999-0000",
        platform: None,
        timestamp: None,
    },
    SeedListing {
        section: Section::Vehicles,
        title: "Used Sedan",
        description: "2016 Toyota Corolla. Low mileage and great condition.",
        contact: "555-101-2020",
        platform: Some(Platform::Viber),
        timestamp: None,
    },
    SeedListing {
        section: Section::Vehicles,
        title: "Harley Davidson Bike",
        description: "Classic motorcycle, fully serviced, ready to ride.",
        contact: "555-303-4040",
        platform: None,
        timestamp: None,
    },
    SeedListing {
        section: Section::Jobs,
        title: "Office Assistant",
        description: "Part-time position in a friendly office environment.",
        contact: "jobs@company.com",
        platform: None,
        timestamp: None,
    },
    SeedListing {
        section: Section::Jobs,
        title: "Construction Worker",
        description: "Looking for experienced workers. Competitive pay.",
        contact: "555-505-6060",
        platform: None,
        timestamp: None,
    },
    SeedListing {
        section: Section::Jobs,
        title: "Graphic Designer",
        description: "Freelance opportunity for a creative individual.",
        contact: "555-707-8080",
        platform: Some(Platform::Signal),
        timestamp: None,
    },
    SeedListing {
        section: Section::Services,
        title: "Plumbing Services",
        description: "Reliable plumber available for all types of repairs.",
        contact: "555-909-1010",
        platform: Some(Platform::Sms),
        timestamp: None,
    },
    SeedListing {
        section: Section::Services,
        title: "Lawn Mowing",
        description: "Affordable lawn care services for all yard sizes.",
        contact: "555-111-1212",
        platform: None,
        timestamp: None,
    },
    SeedListing {
        section: Section::Miscellaneous,
        title: "Book Collection",
        description: "Selling a variety of novels and rare editions.",
        contact: "555-131-1414",
        platform: Some(Platform::Messenger),
        timestamp: None,
    },
    SeedListing {
        section: Section::Miscellaneous,
        title: "Vintage Camera",
        description: "Classic film camera, great for collectors.",
        contact: "555-151-1616",
        platform: None,
        timestamp: None,
    },
    SeedListing {
        section: Section::Announcements,
        title: "Charity Bake Sale",
        description: "Come support our community with delicious treats!",
        contact: "555-171-1818",
        platform: None,
        timestamp: None,
    },
    SeedListing {
        section: Section::Announcements,
        title: "Wedding Invitation",
        description: "You are warmly invited to our special day.",
        contact: "555-191-2020",
        platform: Some(Platform::Viber),
        timestamp: None,
    },
    SeedListing {
        section: Section::Personals,
        title: "Friendship Wanted",
        description: "Looking for a hiking partner. Enjoy the great outdoors.",
        contact: "555-212-2323",
        platform: None,
        timestamp: None,
    },
    SeedListing {
        section: Section::Personals,
        title: "Language Exchange",
        description: "Want to practice Spanish in exchange for English lessons.",
        contact: "555-242-2525",
        platform: None,
        timestamp: None,
    },
    SeedListing {
        section: Section::LostAndFound,
        title: "Lost Cat",
        description: "Black cat with green eyes. Last seen near Main Street.",
        contact: "555-262-2727",
        platform: None,
        timestamp: None,
    },
    SeedListing {
        section: Section::LostAndFound,
        title: "Found Bracelet",
        description: "Silver bracelet with engravings. Found in the park.",
        contact: "555-282-2929",
        platform: Some(Platform::Sms),
        timestamp: None,
    },
    SeedListing {
        section: Section::CommunityEvents,
        title: "Neighborhood Cleanup",
        description: "Join us to beautify our streets this Saturday.",
        contact: "555-303-3131",
        platform: None,
        timestamp: None,
    },
    SeedListing {
        section: Section::CommunityEvents,
        title: "Local Farmers Market",
        description: "Fresh produce and homemade goods every weekend.",
        contact: "555-323-3333",
        platform: Some(Platform::Call),
        timestamp: None,
    },
    SeedListing {
        section: Section::Pets,
        title: "Golden Retriever Puppies",
        description: "Adorable, playful puppies looking for a loving home.",
        contact: "555-343-3535",
        platform: Some(Platform::Messenger),
        timestamp: None,
    },
    SeedListing {
        section: Section::Pets,
        title: "Cat Adoption",
        description: "Sweet tabby cat, 2 years old, spayed and vaccinated.",
        contact: "555-363-3737",
        platform: None,
        timestamp: None,
    },
    SeedListing {
        section: Section::Education,
        title: "Math Tutoring",
        description: "Experienced tutor available for all grade levels.",
        contact: "555-383-3939",
        platform: Some(Platform::Whatsapp),
        timestamp: None,
    },
    SeedListing {
        section: Section::Education,
        title: "Music Lessons",
        description: "Piano and guitar lessons for beginners and intermediates.",
        contact: "555-404-4141",
        platform: None,
        timestamp: None,
    },
    SeedListing {
        section: Section::BusinessOpportunities,
        title: "Franchise Available",
        description: "Own your own coffee shop. Franchise opportunities open.",
        contact: "555-424-4343",
        platform: None,
        timestamp: None,
    },
    SeedListing {
        section: Section::BusinessOpportunities,
        title: "Tech Startup Investment",
        description: "Seeking partners for innovative tech project.",
        contact: "555-444-4545",
        platform: Some(Platform::Messenger),
        timestamp: None,
    },
    SeedListing {
        section: Section::Rentals,
        title: "Studio Apartment",
        description: "Affordable studio near downtown. Utilities included.",
        contact: "555-464-4747",
        platform: None,
        timestamp: None,
    },
    SeedListing {
        section: Section::Rentals,
        title: "Vacation Cabin",
        description: "Secluded cabin rental for weekend getaways.",
        contact: "555-484-4949",
        platform: Some(Platform::Whatsapp),
        timestamp: None,
    },
    SeedListing {
        section: Section::Wanted,
        title: "Looking for a Bike",
        description: "Seeking a used road bike in good condition.",
        contact: "555-505-5151",
        platform: Some(Platform::Messenger),
        timestamp: None,
    },
    SeedListing {
        section: Section::Wanted,
        title: "Roommate Needed",
        description: "Looking for a roommate for a 2-bedroom apartment.",
        contact: "555-525-5353",
        platform: Some(Platform::Call),
        timestamp: None,
    },
];

pub fn embedded_listings() -> Vec<Listing> {
    SEED_LISTINGS.iter().map(SeedListing::to_listing).collect()
}
