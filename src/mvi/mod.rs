//! Model-View-Intent (MVI) primitives shared by every slice.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Consumer
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: Plain data describing one resource domain
//! - **Intent**: Async phase results and synchronous mutations
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
