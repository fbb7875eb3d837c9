//! # Configuration
//!
//! Deployment-time constants of the association. Everything else (manager,
//! payment token, initial quota) is supplied to `init`.
//!
//! ## Residence scheme
//!
//! A residence code is the decimal number `block·1000 + floor·100 + unit`,
//! so `2102` is block 2, floor 1, unit 2. Codes are validated arithmetically;
//! no residence table is ever stored.

use condominium_interface::Category;

/// Blocks are numbered `1..=BLOCKS`.
pub const BLOCKS: u32 = 3;

/// Floors per block, numbered `1..=FLOORS`.
pub const FLOORS: u32 = 5;

/// Units per floor, numbered `1..=UNITS`.
pub const UNITS: u32 = 5;

/// Length of one quota accounting period (30 days).
pub const QUOTA_PERIOD_SECS: u64 = 30 * 24 * 60 * 60;

/// Ballots required before a topic of `category` may be closed.
pub fn minimum_votes(category: Category) -> u32 {
    match category {
        Category::Decision => 5,
        Category::Spent => 10,
        Category::ChangeManager => 15,
        Category::ChangeQuota => 20,
    }
}
