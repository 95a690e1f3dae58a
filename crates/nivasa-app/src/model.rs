// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ListingId(i64);

impl ListingId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ListingId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    ForRent,
    ForSale,
}

impl TransactionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ForRent => "rent",
            Self::ForSale => "sale",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "rent" => Some(Self::ForRent),
            "sale" => Some(Self::ForSale),
            _ => None,
        }
    }

    /// Telugu display label shown on cards; derived from the kind so the
    /// two can never disagree.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ForRent => "అద్దెకు",
            Self::ForSale => "అమ్మకానికి",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    East,
    West,
    North,
    South,
}

impl Facing {
    pub const ALL: [Self; 4] = [Self::East, Self::West, Self::North, Self::South];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::East => "east",
            Self::West => "west",
            Self::North => "north",
            Self::South => "south",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "east" => Some(Self::East),
            "west" => Some(Self::West),
            "north" => Some(Self::North),
            "south" => Some(Self::South),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::East => "తూర్పు",
            Self::West => "పడమర",
            Self::North => "ఉత్తరం",
            Self::South => "దక్షిణం",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub kind: TransactionKind,
    pub price: i64,
    pub location: String,
    pub facing: Facing,
    pub most_lovable: bool,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeFilter {
    All,
    ForRent,
    ForSale,
}

impl TypeFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::ForRent, Self::ForSale];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::ForRent => "rent",
            Self::ForSale => "sale",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "rent" => Some(Self::ForRent),
            "sale" => Some(Self::ForSale),
            _ => None,
        }
    }

    pub const fn matches(self, kind: TransactionKind) -> bool {
        match self {
            Self::All => true,
            Self::ForRent => matches!(kind, TransactionKind::ForRent),
            Self::ForSale => matches!(kind, TransactionKind::ForSale),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    pub type_filter: TypeFilter,
    pub facing: Option<Facing>,
    pub most_lovable_only: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            type_filter: TypeFilter::All,
            facing: None,
            most_lovable_only: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Open,
}
