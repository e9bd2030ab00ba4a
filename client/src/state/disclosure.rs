//! Mobile navigation disclosure state machine.
//!
//! DESIGN
//! ======
//! The panel is either `Closed` or `Open`. Every UI event that can change it
//! goes through [`Disclosure::on`] so the transition table lives in one
//! place instead of scattered boolean flips.
//!
//! ```text
//!   Closed --MenuButton--> Open
//!   Open --CloseButton | EntrySelected | OutsideDismiss | RouteChanged--> Closed
//! ```

#[cfg(test)]
#[path = "disclosure_test.rs"]
mod disclosure_test;

/// Open/closed state of the mobile navigation panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

/// UI events that drive the disclosure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosureEvent {
    /// The "Menu" button was activated.
    MenuButton,
    /// The close button inside the panel was activated.
    CloseButton,
    /// A navigation entry inside the panel was chosen.
    EntrySelected,
    /// Click on the overlay outside the panel, or Escape.
    OutsideDismiss,
    /// The router moved to a different path.
    RouteChanged,
}

impl Disclosure {
    /// Next state after `event`. Events that do not apply leave the state unchanged.
    #[must_use]
    pub fn on(self, event: DisclosureEvent) -> Self {
        match (self, event) {
            (Self::Closed, DisclosureEvent::MenuButton) => Self::Open,
            (
                Self::Open,
                DisclosureEvent::CloseButton
                | DisclosureEvent::EntrySelected
                | DisclosureEvent::OutsideDismiss
                | DisclosureEvent::RouteChanged,
            ) => Self::Closed,
            (state, _) => state,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}
