//! Docshelf — document catalog client core
//!
//! Fetches documents from an HTTP catalog API, sorts them, creates new ones,
//! and delivers live creation notifications from a persistent push feed. The
//! core is a plain library: presentation layers consume its services and
//! feed it events.
//!
//! ```rust,no_run
//! use docshelf::di::{create_application_container, ApplicationConfig};
//! use docshelf::application::{DocumentService, NotificationManager, SortBy};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let container = create_application_container(ApplicationConfig {
//!     api_base_url: "https://catalog.example.com/api".into(),
//!     events_url: "https://catalog.example.com/events".into(),
//! })?;
//!
//! let documents = container.resolve::<DocumentService>()?;
//! documents.fetch_documents().await?;
//! let by_name = documents.sort_documents(SortBy::Name);
//!
//! let notifications = container.resolve::<NotificationManager>()?;
//! notifications.on_notification(|event| {
//!     println!("{} created {}", event.user_name, event.document_title);
//! });
//! notifications.connect()?;
//! # let _ = by_name;
//! # Ok(())
//! # }
//! ```

pub use docshelf_application as application;
pub use docshelf_di as di;
pub use docshelf_domain as domain;
pub use docshelf_events as events;
pub use docshelf_http as http;
