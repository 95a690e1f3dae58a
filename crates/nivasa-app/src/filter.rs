// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::{FilterState, Listing};

/// Stable filter over the catalog: survivors keep their original relative
/// order, and the three filter dimensions are AND-combined. An empty result
/// is a value, not an error; the caller decides how to present it.
pub fn visible_listings<'a>(listings: &'a [Listing], filter: &FilterState) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|listing| matches_filter(listing, filter))
        .collect()
}

fn matches_filter(listing: &Listing, filter: &FilterState) -> bool {
    if !filter.type_filter.matches(listing.kind) {
        return false;
    }

    if let Some(facing) = filter.facing
        && listing.facing != facing
    {
        return false;
    }

    if filter.most_lovable_only && !listing.most_lovable {
        return false;
    }

    true
}
