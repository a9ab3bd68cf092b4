//! A single form that sends a name to the server and shows the greeting it gets back.
//!
//! The `greet` server function is the only remote call. On the web build the fullstack macro
//! turns it into a client stub that posts to `/api/greet`; on the server build it runs the
//! handler directly.

pub mod api;
pub mod form;

pub use api::{greet, greeting_for};
pub use form::{handle_submit, submit_greeting, FormSignals, GreetForm, SubmitView, Submission};
