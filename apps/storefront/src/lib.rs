//! # pecaaq-storefront: Storefront Shell
//!
//! The orchestration layer of the PeçaAq storefront. It wires discrete
//! input events to the pure pipeline in `pecaaq-core` and pushes plain
//! data into an injected render sink.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Control Flow                             │
//! │                                                                         │
//! │  InputEvent ──► Storefront::handle()                                   │
//! │                      │                                                  │
//! │       filter/sort?   │   page nav?                                     │
//! │            │         │       │                                         │
//! │            ▼         │       ▼                                         │
//! │   re-run pipeline    │   re-slice only                                 │
//! │   reset page to 1    │   (clamped)                                     │
//! │            │         │       │                                         │
//! │            └─────────┴───────┘                                         │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │              RenderSink (plain data: page view, facets,                │
//! │              suggestions, cart count - never markup)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod error;
pub mod events;
pub mod render;
pub mod storefront;

pub use cart::Cart;
pub use error::{AppError, ErrorCode};
pub use events::InputEvent;
pub use render::{FacetsView, ProductCard, ProductPage, RenderSink, TextRenderer};
pub use storefront::Storefront;
