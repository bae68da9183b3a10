//! Backend API client for storymap.
//!
//! This crate provides the network half of the story-map board: fetching
//! project snapshots, mutating stories, and driving wireframe generation
//! jobs to completion.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - [`ApiClient`]: the main API client with optional bearer-token auth
//! - [`NewStory`] and [`StoryMove`]: mutation payloads
//! - [`spawn_poll`], [`PollHandle`], and [`PollEvent`]: the cancellable
//!   wireframe job poll loop
//! - [`Error`]: error types for API operations
//!
//! # Authentication
//!
//! The client attaches a bearer token to every request when one is
//! configured. A 401 response maps to [`Error::Unauthorized`], which the
//! UI surfaces as a session-expired message rather than a generic
//! failure. Tokens are handled with [`secrecy::SecretString`] to prevent
//! accidental logging of credentials.
//!
//! # Polling
//!
//! Wireframe generation runs as a backend job. [`spawn_poll`] checks the
//! job status after an initial delay, then at a fixed interval, and emits
//! a single [`PollEvent::Resolved`] when the job leaves the pending
//! state:
//!
//! ```no_run
//! use std::time::Duration;
//! use storymap_api::{ApiClient, PollEvent, spawn_poll};
//!
//! # async fn example(client: std::sync::Arc<ApiClient>) -> storymap_api::Result<()> {
//! let job_id = client.generate_wireframe(1).await?;
//!
//! let poll_client = std::sync::Arc::clone(&client);
//! let (handle, mut events) = spawn_poll(
//!     move || {
//!         let client = std::sync::Arc::clone(&poll_client);
//!         async move { client.wireframe_status(1).await }
//!     },
//!     Duration::from_millis(1200),
//!     Duration::from_millis(1500),
//! );
//!
//! while let Some(event) = events.recv().await {
//!     if let PollEvent::Resolved { status, .. } = event {
//!         println!("wireframe job finished: {status:?}");
//!     }
//! }
//! # handle.cancel();
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod poller;

pub use client::{ApiClient, GenerateResponse, NewStory, StoryMove, WireframeStatusResponse};
pub use error::{Error, Result};
pub use poller::{PollEvent, PollHandle, spawn_poll};
