//! # List Controller
//!
//! [`RelatedListController`] ties the builder, the display state and the
//! lookup together for one list instance.
//!
//! Activation is split into two steps so hosts that drive the lookup
//! themselves (on another task, behind a queue, ...) can still use it:
//!
//! 1. [`RelatedListController::begin_activation`] resets the display state,
//!    validates configuration and issues a [`RequestTicket`].
//! 2. [`RelatedListController::complete_activation`] applies the lookup
//!    outcome, but only if the ticket is still the latest one issued. A slow
//!    response to an earlier activation never overwrites a newer one.
//!
//! [`RelatedListController::activate`] runs both steps against a
//! [`RecordLookup`] for the common case.

use relist_types::config::non_blank;
use relist_types::{ColumnSpec, ListConfig, LookupRejection, LookupRequest, NavigationIntent, RawRecord, ViewRow};
use relist_util::card_title;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::display::{DisplayState, DisplayStateController};
use crate::error::ViewError;
use crate::lookup::RecordLookup;
use crate::navigation::resolve_navigation;
use crate::view::{RecordViewBuilder, ViewModel};

/// Identifies one activation's lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket {
    pub seq: u64,
}

/// Result of [`RelatedListController::begin_activation`].
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    /// Configuration is complete; send `request` and report back with `ticket`.
    Ready(RequestTicket, LookupRequest),
    /// Configuration is incomplete. The error is already applied.
    Rejected(ViewError),
}

/// Whether a completion changed the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    /// Superseded by a later activation; discarded.
    Stale,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Everything a renderer needs for one frame of the list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSurface {
    pub card_title: String,
    pub columns: Vec<ColumnSpec>,
    /// Visible rows only.
    pub rows: Vec<ViewRow>,
    pub total_rows: usize,
    pub error: Option<String>,
    pub collapse_icon: &'static str,
    pub toggle_label: &'static str,
    pub is_loading: bool,
    pub has_records: bool,
    pub has_error: bool,
    pub no_records_no_error: bool,
    pub can_show_more: bool,
    pub is_collapsible: bool,
    pub is_collapsed: bool,
    pub show_all: bool,
}

#[derive(Debug, Clone)]
pub struct RelatedListController {
    config: ListConfig,
    builder: RecordViewBuilder,
    display: DisplayStateController,
    model: ViewModel,
    error: Option<ViewError>,
    status: LoadStatus,
    latest_seq: u64,
}

impl RelatedListController {
    pub fn new(config: ListConfig) -> Self {
        Self {
            builder: RecordViewBuilder::new(&config),
            display: DisplayStateController::new(config.record_limit, config.collapsible),
            model: ViewModel::empty(config.shape),
            error: None,
            status: LoadStatus::Idle,
            latest_seq: 0,
            config,
        }
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// The field specification is re-parsed and any lookup still in flight
    /// becomes stale. Call [`Self::activate`] again to refetch.
    pub fn update_config(&mut self, config: ListConfig) {
        let seq = self.latest_seq + 1;
        *self = Self::new(config);
        self.latest_seq = seq;
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn error(&self) -> Option<&ViewError> {
        self.error.as_ref()
    }

    pub fn display_state(&self) -> DisplayState {
        self.display.state()
    }

    /// Every fetched row, ignoring the display state.
    pub fn rows(&self) -> &[ViewRow] {
        &self.model.rows
    }

    pub fn visible_rows(&self) -> &[ViewRow] {
        self.display.visible_rows(&self.model.rows)
    }

    pub fn toggle_collapse(&mut self) {
        self.display.toggle_collapse();
    }

    pub fn toggle_show_all(&mut self) {
        self.display.toggle_show_all();
    }

    pub fn navigation(&self) -> NavigationIntent {
        resolve_navigation(&self.config)
    }

    pub fn begin_activation(&mut self) -> Activation {
        self.latest_seq += 1;
        self.display.reset();
        let ticket = RequestTicket { seq: self.latest_seq };

        match self.builder.lookup_request() {
            Ok(request) => {
                debug!(seq = ticket.seq, parent_id = %request.parent_id, "activation started");
                self.model = ViewModel::empty(self.config.shape);
                self.error = None;
                self.status = LoadStatus::Loading;
                Activation::Ready(ticket, request)
            }
            Err(error) => {
                warn!(seq = ticket.seq, %error, "activation rejected");
                self.fail(error.clone());
                Activation::Rejected(error)
            }
        }
    }

    pub fn complete_activation(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Vec<RawRecord>, LookupRejection>,
    ) -> Applied {
        if ticket.seq != self.latest_seq {
            debug!(seq = ticket.seq, latest = self.latest_seq, "discarding stale lookup result");
            return Applied::Stale;
        }

        match outcome {
            Ok(records) => {
                self.model = self.builder.build(&records);
                self.error = None;
                self.status = LoadStatus::Ready;
                info!(seq = ticket.seq, rows = self.model.rows.len(), "related records loaded");
            }
            Err(rejection) => {
                let error = ViewError::from_rejection(&rejection);
                warn!(seq = ticket.seq, %error, "lookup failed");
                self.fail(error);
            }
        }
        Applied::Current
    }

    /// Fetch through `lookup` and apply the result.
    ///
    /// Returns the error now shown by the list, if any.
    pub async fn activate(&mut self, lookup: &dyn RecordLookup) -> Result<(), ViewError> {
        let (ticket, request) = match self.begin_activation() {
            Activation::Ready(ticket, request) => (ticket, request),
            Activation::Rejected(error) => return Err(error),
        };

        let outcome = lookup.fetch_related(&request).await;
        self.complete_activation(ticket, outcome);
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    pub fn render(&self) -> RenderSurface {
        let total_rows = self.model.rows.len();
        let has_records = total_rows > 0;
        let has_error = self.error.is_some();
        let state = self.display.state();

        RenderSurface {
            card_title: card_title(non_blank(&self.config.child_relationship_name)),
            columns: self.model.columns.clone(),
            rows: self.visible_rows().to_vec(),
            total_rows,
            error: self.error.as_ref().map(ToString::to_string),
            collapse_icon: self.display.collapse_icon(),
            toggle_label: self.display.toggle_label(),
            is_loading: self.status == LoadStatus::Loading,
            has_records,
            has_error,
            no_records_no_error: !has_records && !has_error,
            can_show_more: self.display.can_show_more(total_rows),
            is_collapsible: self.display.is_collapsible(),
            is_collapsed: state.is_collapsed,
            show_all: state.show_all,
        }
    }

    fn fail(&mut self, error: ViewError) {
        self.model = ViewModel::empty(self.config.shape);
        self.error = Some(error);
        self.status = LoadStatus::Failed;
    }
}
