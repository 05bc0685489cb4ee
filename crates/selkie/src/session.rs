//! Stateful mindmap session for a document viewer.
//!
//! One session tracks one open document: which view the user is in, the
//! lazily computed forest and Mermaid description, and the rendered
//! artifact when an external renderer has produced one. Rendering itself
//! stays outside; the session hands out [`RenderRequest`]s and checks the
//! ticket when a result comes back, so results from an abandoned document
//! or layout are discarded instead of applied.

use std::fmt::Display;
use std::future::Future;

use tracing::debug;

use selkie_core::{Document, Engine, LayoutType, MindmapNode};

/// How the viewer is presenting the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Rendered markdown; mindmap features are live.
    #[default]
    Rendered,
    /// Raw markdown source; mindmap features are off.
    Raw,
}

/// Where the mindmap stands for the loaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No document, or the raw view is active.
    Idle,
    /// A document is loaded; synthesis has not run yet.
    Detecting,
    /// Synthesis ran and found no marked structure.
    Empty,
    /// A description is available for rendering.
    Ready,
    /// The last render attempt failed. The description is retained so the
    /// viewer can show it and retry.
    Error { message: String },
}

/// Ties a render request to the session state that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTicket {
    epoch: u64,
}

/// Work order handed to an external renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub ticket: RenderTicket,
    /// Element id for the artifact, unique within this session.
    pub diagram_id: String,
    /// Mermaid text to render.
    pub description: String,
}

/// What became of a render result handed back to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The result was current and was recorded.
    Applied,
    /// The session had moved on; the result was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct MindmapSession {
    engine: Engine,
    view_mode: ViewMode,
    document: Option<Document>,
    forest: Option<Vec<MindmapNode>>,
    title: Option<String>,
    description: Option<String>,
    artifact: Option<String>,
    state: SessionState,
    layout: LayoutType,
    /// Bumped whenever outstanding render results become invalid.
    epoch: u64,
    diagram_seq: u64,
}

impl Default for MindmapSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MindmapSession {
    pub fn new() -> Self {
        Self::with_engine(Engine::new())
    }

    /// Session whose initial layout comes from the engine's config.
    pub fn with_engine(engine: Engine) -> Self {
        let layout = engine.layout_type();
        Self {
            engine,
            view_mode: ViewMode::default(),
            document: None,
            forest: None,
            title: None,
            description: None,
            artifact: None,
            state: SessionState::Idle,
            layout,
            epoch: 0,
            diagram_seq: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn layout(&self) -> LayoutType {
        self.layout
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn forest(&self) -> Option<&[MindmapNode]> {
        self.forest.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Mermaid text for the current forest and layout.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Rendered artifact, when a render has completed for this epoch.
    pub fn artifact(&self) -> Option<&str> {
        self.artifact.as_deref()
    }

    /// Replaces the open document. Outstanding render results become
    /// stale and every derived output is dropped.
    pub fn load_document(&mut self, markdown: &str) {
        self.epoch += 1;
        self.document = Some(self.engine.parse_document(markdown));
        self.forest = None;
        self.title = None;
        self.description = None;
        self.artifact = None;
        self.view_mode = ViewMode::Rendered;
        self.state = SessionState::Detecting;
        debug!(epoch = self.epoch, "document loaded");
    }

    /// Switches between rendered and raw views. Entering the raw view
    /// drops derived outputs and invalidates outstanding renders; coming
    /// back puts the loaded document up for detection again.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode == mode {
            return;
        }
        self.view_mode = mode;
        match mode {
            ViewMode::Raw => {
                self.epoch += 1;
                self.forest = None;
                self.title = None;
                self.description = None;
                self.artifact = None;
                self.state = SessionState::Idle;
            }
            ViewMode::Rendered => {
                self.state = if self.document.is_some() {
                    SessionState::Detecting
                } else {
                    SessionState::Idle
                };
            }
        }
    }

    /// Runs synthesis if it has not run for this document yet. Safe to
    /// call repeatedly; an existing description is kept as is.
    pub fn generate(&mut self) -> &SessionState {
        if self.view_mode == ViewMode::Raw || self.document.is_none() {
            self.state = SessionState::Idle;
            return &self.state;
        }
        if self.forest.is_none() {
            if let Some(doc) = self.document.as_ref() {
                let forest = self.engine.extract(doc);
                let title = self.engine.derive_title(doc);
                debug!(roots = forest.len(), "extracted mindmap forest");
                self.forest = Some(forest);
                self.title = Some(title);
            }
        }
        if self.has_nodes() {
            if self.description.is_none() {
                self.description = self.describe_current();
            }
            self.state = SessionState::Ready;
        } else {
            self.description = None;
            self.state = SessionState::Empty;
        }
        &self.state
    }

    /// Advances to the next layout and rewrites the description for it.
    /// Any outstanding render becomes stale. Works from the error state
    /// too, where it doubles as a retry.
    pub fn cycle_layout(&mut self) -> LayoutType {
        self.layout = self.layout.cycle();
        self.epoch += 1;
        self.artifact = None;
        debug!(layout = self.layout.as_str(), "layout cycled");
        if self.has_nodes() {
            self.description = self.describe_current();
            self.state = SessionState::Ready;
        } else if self.forest.is_some() {
            self.description = None;
            self.state = SessionState::Empty;
        } else {
            self.state = if self.document.is_some() && self.view_mode == ViewMode::Rendered {
                SessionState::Detecting
            } else {
                SessionState::Idle
            };
        }
        self.layout
    }

    /// Hands out a render work order when a description is ready.
    pub fn begin_render(&mut self) -> Option<RenderRequest> {
        if self.state != SessionState::Ready {
            return None;
        }
        let description = self.description.clone()?;
        self.diagram_seq += 1;
        Some(RenderRequest {
            ticket: RenderTicket { epoch: self.epoch },
            diagram_id: format!("mindmap-{}", self.diagram_seq),
            description,
        })
    }

    /// Records the outcome of a render the viewer was waiting on. Failure
    /// moves the session to the error state but keeps the description.
    pub fn apply_render(
        &mut self,
        ticket: RenderTicket,
        result: Result<String, String>,
    ) -> RenderOutcome {
        if ticket.epoch != self.epoch {
            debug!(
                ticket = ticket.epoch,
                current = self.epoch,
                "discarding stale render result"
            );
            return RenderOutcome::Stale;
        }
        match result {
            Ok(artifact) => {
                self.artifact = Some(artifact);
                self.state = SessionState::Ready;
            }
            Err(message) => {
                self.artifact = None;
                self.state = SessionState::Error { message };
            }
        }
        RenderOutcome::Applied
    }

    /// Records a background render. Failure here is not an error state;
    /// the session just stays ready to render on demand.
    pub fn apply_prerender(
        &mut self,
        ticket: RenderTicket,
        result: Result<String, String>,
    ) -> RenderOutcome {
        if ticket.epoch != self.epoch {
            return RenderOutcome::Stale;
        }
        match result {
            Ok(artifact) => {
                self.artifact = Some(artifact);
            }
            Err(message) => {
                self.artifact = None;
                debug!(error = %message, "prerender failed; rendering stays on demand");
            }
        }
        RenderOutcome::Applied
    }

    /// Drives one on-demand render through an external renderer. `None`
    /// when the session has nothing to render.
    pub async fn render_with<F, Fut, E>(&mut self, render: F) -> Option<RenderOutcome>
    where
        F: FnOnce(RenderRequest) -> Fut,
        Fut: Future<Output = Result<String, E>>,
        E: Display,
    {
        let request = self.begin_render()?;
        let ticket = request.ticket;
        let result = render(request).await.map_err(|err| err.to_string());
        Some(self.apply_render(ticket, result))
    }

    /// Background variant of [`render_with`](Self::render_with): runs
    /// synthesis if needed and records the artifact best-effort.
    pub async fn prerender_with<F, Fut, E>(&mut self, render: F) -> Option<RenderOutcome>
    where
        F: FnOnce(RenderRequest) -> Fut,
        Fut: Future<Output = Result<String, E>>,
        E: Display,
    {
        if self.state == SessionState::Detecting {
            self.generate();
        }
        let request = self.begin_render()?;
        let ticket = request.ticket;
        let result = render(request).await.map_err(|err| err.to_string());
        Some(self.apply_prerender(ticket, result))
    }

    fn has_nodes(&self) -> bool {
        self.forest.as_ref().is_some_and(|forest| !forest.is_empty())
    }

    fn describe_current(&self) -> Option<String> {
        let forest = self.forest.as_ref()?;
        if forest.is_empty() {
            return None;
        }
        let title = self.title.as_deref().unwrap_or("Mindmap");
        Some(self.engine.describe(title, forest, self.layout))
    }
}
