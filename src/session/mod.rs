//! The form session controller: a single owned state machine moving between
//! wizard, display and edit modes, plus the timers for its transient effects.

pub mod clock;
pub mod controller;
pub mod events;
pub mod state;
pub mod timers;
pub mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{FormSession, EDIT_SAVED_MESSAGE, SUBMITTED_MESSAGE};
pub use events::{FormEvent, Transition};
pub use state::{Mode, SessionState};
pub use timers::{EffectKind, TimerToken, TransientSlot, TransientTimings};
pub use view::{FieldView, PresentationCue, SessionView};
