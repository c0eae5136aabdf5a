//! File tree view state machine.
//!
//! Every fetch is issued a ticket carrying a sequence number. Only the
//! result for the latest ticket is applied; anything older is dropped, so a
//! slow response for a previous repository can never replace a newer tree.
//! The current tree stays in place until its replacement is fully built.

use crate::error::ApiError;
use crate::expansion::ExpansionState;
use crate::tree::traversal::find_file;
use crate::tree::{DirectoryNode, TreeBuilder};
use crate::types::{FileRecord, RepositoryId, RequestSeq};
use crate::views::TreeView;
use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

pub const LOADING_MESSAGE: &str = "Loading files...";
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load files";
pub const EMPTY_TITLE: &str = "No files yet";
pub const EMPTY_CALL_TO_ACTION: &str = "Start by adding some files to this repository";

/// Handle for one outstanding fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    repository: RepositoryId,
    seq: RequestSeq,
}

impl FetchTicket {
    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn seq(&self) -> RequestSeq {
        self.seq
    }
}

/// What the file tree currently shows
#[derive(Debug, Clone)]
pub enum ViewState {
    /// No repository opened yet.
    Idle,
    /// First fetch for the repository is outstanding.
    Loading,
    /// The last fetch attempt failed; no automatic retry.
    Error { message: String },
    /// The repository has no files.
    Empty,
    Ready {
        tree: DirectoryNode,
        file_count: usize,
        loaded_at: DateTime<Utc>,
        /// A refetch is outstanding; `tree` is the previous result.
        refreshing: bool,
    },
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            ViewState::Loading
                | ViewState::Ready {
                    refreshing: true,
                    ..
                }
        )
    }
}

/// File tree view for one repository at a time.
#[derive(Debug)]
pub struct FileTreeView {
    repository: Option<RepositoryId>,
    state: ViewState,
    expansion: ExpansionState,
    latest_seq: RequestSeq,
    builder: TreeBuilder,
}

impl Default for FileTreeView {
    fn default() -> Self {
        Self::new(TreeBuilder::new())
    }
}

impl FileTreeView {
    pub fn new(builder: TreeBuilder) -> Self {
        Self {
            repository: None,
            state: ViewState::Idle,
            expansion: ExpansionState::new(),
            latest_seq: 0,
            builder,
        }
    }

    /// Show `repository`, on mount or when the repository id changes.
    ///
    /// A different repository starts from a fresh expansion state and a
    /// loading view; reopening the current one behaves like [`refresh`].
    ///
    /// [`refresh`]: FileTreeView::refresh
    pub fn open(&mut self, repository: &str) -> FetchTicket {
        if self.repository.as_deref() != Some(repository) {
            info!(repository, "Opening repository");
            self.repository = Some(repository.to_string());
            self.expansion = ExpansionState::new();
            self.state = ViewState::Loading;
        } else {
            self.mark_refreshing();
        }
        self.issue(repository.to_string())
    }

    /// Refetch the current repository, e.g. after the editor saved a file.
    ///
    /// Returns `None` when no repository is open.
    pub fn refresh(&mut self) -> Option<FetchTicket> {
        let repository = self.repository.clone()?;
        self.mark_refreshing();
        Some(self.issue(repository))
    }

    fn mark_refreshing(&mut self) {
        match &mut self.state {
            ViewState::Ready { refreshing, .. } => *refreshing = true,
            state => *state = ViewState::Loading,
        }
    }

    fn issue(&mut self, repository: RepositoryId) -> FetchTicket {
        self.latest_seq += 1;
        debug!(repository = %repository, seq = self.latest_seq, "Issued fetch");
        FetchTicket {
            repository,
            seq: self.latest_seq,
        }
    }

    /// Apply the outcome of the fetch behind `ticket`.
    ///
    /// Returns false, leaving the view untouched, when the ticket has been
    /// superseded by a later `open` or `refresh`.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<FileRecord>, ApiError>,
    ) -> bool {
        if ticket.seq != self.latest_seq || self.repository.as_deref() != Some(&ticket.repository)
        {
            debug!(
                repository = %ticket.repository,
                seq = ticket.seq,
                latest = self.latest_seq,
                "Discarding stale fetch result"
            );
            return false;
        }

        self.state = match result {
            Err(e) => {
                error!(repository = %ticket.repository, error = %e, "Error fetching files");
                ViewState::Error {
                    message: FETCH_ERROR_MESSAGE.to_string(),
                }
            }
            Ok(records) if records.is_empty() => ViewState::Empty,
            Ok(records) => match self.builder.build(&records) {
                Ok(tree) => {
                    info!(
                        repository = %ticket.repository,
                        records = records.len(),
                        "Loaded file tree"
                    );
                    ViewState::Ready {
                        tree,
                        file_count: records.len(),
                        loaded_at: Utc::now(),
                        refreshing: false,
                    }
                }
                Err(e) => {
                    error!(repository = %ticket.repository, error = %e, "Rejected file tree");
                    ViewState::Error {
                        message: e.to_string(),
                    }
                }
            },
        };
        true
    }

    /// Flip a directory open or closed. Returns whether it is open afterwards.
    pub fn toggle(&mut self, path: &str) -> bool {
        self.expansion.toggle(path)
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expansion.is_expanded(path)
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn expansion_mut(&mut self) -> &mut ExpansionState {
        &mut self.expansion
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    pub fn latest_seq(&self) -> RequestSeq {
        self.latest_seq
    }

    pub fn tree(&self) -> Option<&DirectoryNode> {
        match &self.state {
            ViewState::Ready { tree, .. } => Some(tree),
            _ => None,
        }
    }

    /// Visible rows of the loaded tree.
    pub fn view(&self) -> Option<TreeView<'_>> {
        self.tree()
            .map(|tree| TreeView::project(tree, &self.expansion))
    }

    pub fn find_file(&self, path: &str) -> Option<&FileRecord> {
        find_file(self.tree()?, path)
    }
}
