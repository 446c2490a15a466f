//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] session entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod error;
mod landmarks;
mod session;

pub use error::BridgeError;
pub use session::{
    // WASM entry points
    configure_session,
    process_frame,
    reset_session,
    get_counts,
    get_profile,
    // Internal API
    Counts,
    FrameOutput,
};
