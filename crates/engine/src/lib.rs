//! # Relist Engine
//!
//! Turns records fetched for a parent record into a renderable list and
//! tracks how much of it is visible.
//!
//! ## Usage
//!
//! ```rust
//! use relist_engine::{RelatedListController, StaticLookup};
//! use relist_types::{ListConfig, RawRecord};
//! use serde_json::json;
//!
//! let config = ListConfig {
//!     record_id: Some("001A".into()),
//!     child_object_api_name: Some("Product2".into()),
//!     lookup_field_api_name: Some("Account__c".into()),
//!     fields_list: Some("Name,ProductCode".into()),
//!     ..ListConfig::default()
//! };
//! let record: RawRecord = serde_json::from_value(json!({"Id": "01t1", "Name": "Widget"}))?;
//! let lookup = StaticLookup::records(vec![record]);
//!
//! let mut controller = RelatedListController::new(config);
//! let runtime = tokio::runtime::Builder::new_current_thread().build()?;
//! runtime.block_on(controller.activate(&lookup))?;
//!
//! let surface = controller.render();
//! assert_eq!(surface.rows.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **`view`**: configuration checks and record-to-row shaping
//! - **`display`**: collapse and show-all state
//! - **`navigation`**: "see more" destination
//! - **`lookup`**: the lookup service port and its adapters
//! - **`controller`**: activation sequencing and the render surface

pub mod controller;
pub mod display;
pub mod error;
pub mod lookup;
pub mod navigation;
pub mod view;

pub use controller::{Activation, Applied, LoadStatus, RelatedListController, RenderSurface, RequestTicket};
pub use display::{DisplayState, DisplayStateController};
pub use error::{CONFIGURATION_ERROR_MESSAGE, ViewError};
pub use lookup::{HttpRecordLookup, RecordLookup, StaticLookup};
pub use navigation::{NavigationResolver, NavigationStrategy, resolve_navigation};
pub use view::{RecordViewBuilder, ViewModel};
