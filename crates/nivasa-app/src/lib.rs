// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod catalog;
pub mod filter;
pub mod model;
pub mod pricing;
pub mod state;

pub use catalog::*;
pub use filter::*;
pub use model::*;
pub use pricing::*;
pub use state::*;
