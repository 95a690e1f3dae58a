// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use nivasa_app::{Facing, Listing, ListingId, TransactionKind};

/// Minimal listing fixture; fields that tests rarely care about get
/// predictable defaults (no image, not featured).
pub fn listing(id: i64, kind: TransactionKind, price: i64, location: &str) -> Listing {
    Listing {
        id: ListingId::new(id),
        kind,
        price,
        location: location.to_owned(),
        facing: Facing::East,
        most_lovable: false,
        image: None,
    }
}

pub fn featured(mut listing: Listing) -> Listing {
    listing.most_lovable = true;
    listing
}

pub fn facing(mut listing: Listing, facing: Facing) -> Listing {
    listing.facing = facing;
    listing
}

pub fn with_image(mut listing: Listing, image: &str) -> Listing {
    listing.image = Some(image.to_owned());
    listing
}

/// Six listings shaped like the production catalog: three rentals of which
/// two are featured, three sales of which one is featured.
pub fn mixed_catalog() -> Vec<Listing> {
    vec![
        with_image(
            featured(listing(1, TransactionKind::ForRent, 25_000, "Jubilee Hills")),
            "images/house1.png",
        ),
        facing(
            listing(2, TransactionKind::ForSale, 8_500_000, "Film Nagar"),
            Facing::West,
        ),
        facing(
            featured(listing(3, TransactionKind::ForRent, 35_000, "Banjara Hills")),
            Facing::North,
        ),
        facing(
            featured(listing(4, TransactionKind::ForSale, 12_000_000, "Gachibowli")),
            Facing::South,
        ),
        listing(5, TransactionKind::ForRent, 18_000, "Kukatpally"),
        facing(
            listing(6, TransactionKind::ForSale, 6_500_000, "Madhapur"),
            Facing::West,
        ),
    ]
}
