mod roster;

pub use roster::{RosterError, RosterLoader, RosterRecord};
