// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::{Facing, Listing, ListingId, TransactionKind};

/// The fixed listing inventory. Built once at startup and never mutated;
/// every identifier is unique for the life of the process.
pub fn catalog() -> Vec<Listing> {
    vec![
        Listing {
            id: ListingId::new(1),
            kind: TransactionKind::ForRent,
            price: 25_000,
            location: "జూబ్లీ హిల్స్, హైదరాబాద్".to_owned(),
            facing: Facing::East,
            most_lovable: true,
            image: Some("images/house1.png".to_owned()),
        },
        Listing {
            id: ListingId::new(2),
            kind: TransactionKind::ForSale,
            price: 8_500_000,
            location: "ఫిల్మ్ నగర్, హైదరాబాద్".to_owned(),
            facing: Facing::West,
            most_lovable: false,
            image: Some("images/house2.png".to_owned()),
        },
        Listing {
            id: ListingId::new(3),
            kind: TransactionKind::ForRent,
            price: 35_000,
            location: "బంజారా హిల్స్, హైదరాబాద్".to_owned(),
            facing: Facing::North,
            most_lovable: true,
            image: Some("images/house3.png".to_owned()),
        },
        Listing {
            id: ListingId::new(4),
            kind: TransactionKind::ForSale,
            price: 12_000_000,
            location: "గాచిబోవ్లి, హైదరాబాద్".to_owned(),
            facing: Facing::South,
            most_lovable: true,
            image: Some("images/house4.png".to_owned()),
        },
        Listing {
            id: ListingId::new(5),
            kind: TransactionKind::ForRent,
            price: 18_000,
            location: "కుకట్పల్లి, హైదరాబాద్".to_owned(),
            facing: Facing::East,
            most_lovable: false,
            image: Some("images/house5.png".to_owned()),
        },
        Listing {
            id: ListingId::new(6),
            kind: TransactionKind::ForSale,
            price: 6_500_000,
            location: "మద్దపూర్, హైదరాబాద్".to_owned(),
            facing: Facing::West,
            most_lovable: false,
            image: Some("images/house6.png".to_owned()),
        },
    ]
}

pub fn listing_by_id(listings: &[Listing], id: ListingId) -> Option<&Listing> {
    listings.iter().find(|listing| listing.id == id)
}
