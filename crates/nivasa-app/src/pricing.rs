// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// Compact rupee rendering in Indian units. Thresholds are inclusive
/// upward: exactly one crore renders in crores, not lakhs.
pub fn format_price(price: i64) -> String {
    if price >= 10_000_000 {
        return format!("₹{:.1} కోట్లు", price as f64 / 10_000_000.0);
    }
    if price >= 100_000 {
        return format!("₹{:.1} లక్షలు", price as f64 / 100_000.0);
    }
    if price >= 1_000 {
        return format!("₹{:.0}K", price as f64 / 1_000.0);
    }
    format!("₹{price}")
}
