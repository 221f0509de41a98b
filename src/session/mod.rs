//! A running game session.
//!
//! `SessionActor` serializes player events and the 1 Hz countdown onto one
//! task; `SessionHandle` is the cloneable front end. The countdown interval is
//! acquired when the round starts and released when it ends or when the
//! session is torn down.

pub mod actor;
pub mod messages;

pub use actor::{SessionActor, SessionHandle};
pub use messages::{ScoreChange, SessionMessage, SessionSnapshot};
