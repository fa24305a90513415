//! Client for the torch extraction service

pub mod client;

pub use client::{PollOutcome, SubmitOutcome, TorchClient, TorchError};
