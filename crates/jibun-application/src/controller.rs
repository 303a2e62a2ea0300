//! The view controller.
//!
//! [`TimerController`] owns the application model and executes the commands
//! its transitions emit: fire-and-forget persistence writes and advice
//! requests against the external collaborator. Requests carry a generation
//! token that is invalidated on every screen change, so a response that
//! arrives after the user has navigated away is dropped instead of being
//! applied to state.

use std::sync::Arc;

use jibun_core::advice::{AdviceProvider, RequestKind};
use jibun_core::prompt::{
    ADVICE_FALLBACK, ANALYSIS_FALLBACK, PREDICTION_FALLBACK, advice_prompt, history_prompt,
    prediction_prompt,
};
use jibun_core::state::{Action, AppModel, Command};
use jibun_core::storage::{
    HistoryRepository, ModeRepository, PersonaRepository, UserNameRepository,
};

/// Per-kind request generations.
///
/// A fetch captures the current generation for its kind; any screen change
/// bumps all three, so the captured token no longer matches when the
/// response lands.
#[derive(Debug, Default)]
struct RequestTokens {
    advice: u64,
    prediction: u64,
    analysis: u64,
}

impl RequestTokens {
    fn current(&self, kind: RequestKind) -> u64 {
        match kind {
            RequestKind::Advice => self.advice,
            RequestKind::Prediction => self.prediction,
            RequestKind::Analysis => self.analysis,
        }
    }

    fn is_current(&self, kind: RequestKind, token: u64) -> bool {
        self.current(kind) == token
    }

    fn invalidate_all(&mut self) {
        self.advice += 1;
        self.prediction += 1;
        self.analysis += 1;
    }
}

/// Owns all application state and runs the effects of each transition.
pub struct TimerController {
    model: AppModel,
    history_repo: Arc<dyn HistoryRepository>,
    mode_repo: Arc<dyn ModeRepository>,
    persona_repo: Arc<dyn PersonaRepository>,
    user_name_repo: Arc<dyn UserNameRepository>,
    provider: Arc<dyn AdviceProvider>,
    tokens: RequestTokens,
}

impl TimerController {
    /// Loads the four persisted slices and builds the controller on Home.
    ///
    /// Slice loads are infallible by contract: a broken store starts the
    /// application with defaults rather than an error.
    pub async fn load(
        history_repo: Arc<dyn HistoryRepository>,
        mode_repo: Arc<dyn ModeRepository>,
        persona_repo: Arc<dyn PersonaRepository>,
        user_name_repo: Arc<dyn UserNameRepository>,
        provider: Arc<dyn AdviceProvider>,
    ) -> Self {
        let model = AppModel::restore(
            history_repo.load().await,
            mode_repo.load().await,
            persona_repo.load().await,
            user_name_repo.load().await,
        );
        Self {
            model,
            history_repo,
            mode_repo,
            persona_repo,
            user_name_repo,
            provider,
            tokens: RequestTokens::default(),
        }
    }

    /// Read access to the current state for rendering.
    pub fn model(&self) -> &AppModel {
        &self.model
    }

    /// Applies one action and executes the commands it emits.
    pub async fn dispatch(&mut self, action: Action) {
        let view_before = self.model.view();
        let commands = self.model.apply(action);
        if self.model.view() != view_before {
            self.tokens.invalidate_all();
        }
        for command in commands {
            self.run(command).await;
        }
    }

    async fn run(&mut self, command: Command) {
        match command {
            Command::PersistHistory => {
                if let Err(e) = self.history_repo.save(self.model.history()).await {
                    tracing::warn!("Failed to persist history: {}", e);
                }
            }
            Command::PersistMode => {
                if let Err(e) = self.mode_repo.save(self.model.mode()).await {
                    tracing::warn!("Failed to persist AI mode: {}", e);
                }
            }
            Command::PersistPersona => {
                if let Err(e) = self.persona_repo.save(self.model.persona()).await {
                    tracing::warn!("Failed to persist persona: {}", e);
                }
            }
            Command::PersistUserName => {
                if let Err(e) = self.user_name_repo.save(self.model.user_name()).await {
                    tracing::warn!("Failed to persist user name: {}", e);
                }
            }
            Command::FetchAdvice => self.fetch(RequestKind::Advice).await,
            Command::FetchPrediction => self.fetch(RequestKind::Prediction).await,
            Command::FetchAnalysis => self.fetch(RequestKind::Analysis).await,
        }
    }

    async fn fetch(&mut self, kind: RequestKind) {
        let token = self.tokens.current(kind);
        let (prompt, fallback) = match kind {
            RequestKind::Advice => (
                advice_prompt(self.model.mode(), self.model.persona(), self.model.working()),
                ADVICE_FALLBACK,
            ),
            RequestKind::Prediction => (
                prediction_prompt(self.model.mode(), self.model.persona(), self.model.working()),
                PREDICTION_FALLBACK,
            ),
            RequestKind::Analysis => (
                history_prompt(self.model.mode(), self.model.persona(), self.model.history()),
                ANALYSIS_FALLBACK,
            ),
        };

        let text = match self.provider.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("{:?} request failed: {}", kind, e);
                fallback.to_string()
            }
        };
        self.apply_response(kind, token, text);
    }

    /// Applies a response only if its token is still the current generation.
    fn apply_response(&mut self, kind: RequestKind, token: u64, text: String) {
        if !self.tokens.is_current(kind, token) {
            tracing::debug!("Dropping stale {:?} response", kind);
            return;
        }
        match kind {
            RequestKind::Advice => self.model.resolve_advice(text),
            RequestKind::Prediction => self.model.resolve_prediction(text),
            RequestKind::Analysis => self.model.resolve_analysis(text),
        }
    }
}
