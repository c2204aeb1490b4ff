//! # Card Data Crate
//!
//! This crate holds the domain types shared by the conversation and scoring
//! crates, and loads the read-only credit card catalog.
//!
//! ## Main Components
//!
//! - **types**: Card products, spend categories, the `Catalog` index
//! - **profile**: The `UserProfile` built up by the conversation
//! - **parser**: Parse a JSON catalog document into card structs
//! - **index**: Build and validate a `Catalog`
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use card_data::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/credit_cards.json"))?;
//! let card = catalog.get_card("hdfc-regalia").unwrap();
//! println!("{} from {}", card.name, card.issuer);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod profile;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use profile::{SpendingHabits, UserProfile};
pub use types::{
    // Type aliases
    CardId,
    Rupees,
    // Core types
    Catalog,
    CategoryMap,
    CreditCardProduct,
    Eligibility,
    // Enums
    RewardType,
    SpendCategory,
};
