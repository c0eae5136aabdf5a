//! Repository browser: the file tree view wired to a content service and an
//! editor collaborator.

use super::state::{FetchTicket, FileTreeView};
use crate::error::ApiError;
use crate::expansion::ExpansionState;
use crate::selection::{EditorCollaborator, SelectOutcome, SelectionCoordinator, UnsavedPolicy};
use crate::service::{ContentService, SaveFileRequest};
use crate::session::Session;
use crate::tree::TreeBuilder;
use tracing::info;

pub struct RepositoryBrowser<S: ContentService, E: EditorCollaborator> {
    service: S,
    session: Session,
    view: FileTreeView,
    selection: SelectionCoordinator<E>,
}

impl<S: ContentService, E: EditorCollaborator> RepositoryBrowser<S, E> {
    pub fn new(service: S, session: Session, editor: E) -> Self {
        Self::with_options(
            service,
            session,
            editor,
            TreeBuilder::new(),
            UnsavedPolicy::default(),
        )
    }

    pub fn with_options(
        service: S,
        session: Session,
        editor: E,
        builder: TreeBuilder,
        policy: UnsavedPolicy,
    ) -> Self {
        Self {
            service,
            session,
            view: FileTreeView::new(builder),
            selection: SelectionCoordinator::with_policy(editor, policy),
        }
    }

    /// Show `repository` and load its files.
    ///
    /// Switching to another repository also drops the current selection.
    pub async fn open(&mut self, repository: &str) -> bool {
        if self.view.repository() != Some(repository) {
            self.selection.clear();
        }
        let ticket = self.view.open(repository);
        self.run(ticket).await
    }

    /// Refetch the open repository. Returns false when nothing is open or
    /// the result was superseded.
    pub async fn refresh(&mut self) -> bool {
        match self.view.refresh() {
            Some(ticket) => self.run(ticket).await,
            None => false,
        }
    }

    /// Notification that the editor wrote a file back.
    pub async fn on_file_save(&mut self) -> bool {
        info!("File saved, refreshing tree");
        self.refresh().await
    }

    /// Write a file to the open repository, then reload the tree.
    pub async fn save_file(&mut self, request: &SaveFileRequest) -> Result<(), ApiError> {
        let repository = self
            .view
            .repository()
            .map(str::to_string)
            .ok_or_else(|| ApiError::InvalidInput("no repository is open".to_string()))?;
        self.service
            .save_file(&self.session, &repository, request)
            .await?;
        info!(repository = %repository, path = %request.path, "Saved file");
        self.on_file_save().await;
        Ok(())
    }

    async fn run(&mut self, ticket: FetchTicket) -> bool {
        let result = self
            .service
            .fetch_files(&self.session, ticket.repository())
            .await;
        self.view.complete_fetch(&ticket, result)
    }

    /// Flip a directory open or closed. Returns whether it is open afterwards.
    pub fn toggle(&mut self, path: &str) -> bool {
        self.view.toggle(path)
    }

    /// Hand the file at `path` to the editor. `None` if no such file is loaded.
    pub fn select_file(&mut self, path: &str) -> Option<SelectOutcome> {
        let record = self.view.find_file(path)?.clone();
        Some(self.selection.select_file(record))
    }

    /// Expansion state of the open repository, for restoring a saved layout.
    pub fn expansion_mut(&mut self) -> &mut ExpansionState {
        self.view.expansion_mut()
    }

    pub fn view(&self) -> &FileTreeView {
        &self.view
    }

    pub fn selection(&self) -> &SelectionCoordinator<E> {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionCoordinator<E> {
        &mut self.selection
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}
