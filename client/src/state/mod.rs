//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`nav`, `disclosure`, `display_mode`) so the
//! header can compose small, browser-independent models that are tested
//! without a DOM.

pub mod disclosure;
pub mod display_mode;
pub mod nav;
