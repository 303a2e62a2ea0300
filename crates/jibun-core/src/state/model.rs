//! Application state container and view transitions.
//!
//! The whole UI state lives in one owned [`AppModel`] with single-writer
//! semantics: callers dispatch an [`Action`], the model applies the
//! transition (or silently ignores it when the guard fails), and returns the
//! [`Command`]s the caller must execute - persistence writes and advice
//! requests. Side effects are never performed here.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::activity::{Activity, Category};
use crate::history::HistoryRecord;
use crate::mode::AiMode;
use crate::persona::{Persona, QuizAnswers};

/// The five mutually exclusive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Home,
    Input,
    Personality,
    Result,
    History,
}

/// A user-triggered state transition.
#[derive(Debug, Clone)]
pub enum Action {
    /// Home: start entering today's activities
    StartInput,
    /// Home: open the history screen
    ViewHistory,
    /// Home: open the personality quiz
    TakeQuiz,
    /// Home: switch the AI mode
    SetMode(AiMode),
    /// Home: store a display name (ignored when blank)
    SetUserName(String),
    /// Home: forget the stored display name
    ClearUserName,
    /// Input: append an activity to the working list
    AddActivity {
        name: String,
        hour: Option<u32>,
        minute: Option<u32>,
        category: Category,
    },
    /// Input: finish the session and show the result
    Finish,
    /// Personality: score the quiz and return home
    SubmitQuiz { answers: QuizAnswers },
    /// Result: discard the session and enter a new one
    Again,
    /// Result: request the one-month prediction
    RequestPrediction,
    /// History: request the whole-history analysis
    RequestAnalysis,
    /// History: empty the collection (no-op unless confirmed)
    ClearHistory { confirmed: bool },
    /// Any screen with a home button: return home
    GoHome,
}

/// An effect the caller must carry out after a transition.
///
/// Persistence commands are fire-and-forget; fetch commands are guarded by
/// request tokens in the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PersistHistory,
    PersistMode,
    PersistPersona,
    PersistUserName,
    FetchAdvice,
    FetchPrediction,
    FetchAnalysis,
}

/// All user-entered and derived application state.
#[derive(Debug, Clone)]
pub struct AppModel {
    view: View,
    working: Vec<Activity>,
    history: Vec<HistoryRecord>,
    mode: AiMode,
    persona: Option<Persona>,
    user_name: Option<String>,
    advice: String,
    advice_loading: bool,
    prediction: String,
    prediction_loading: bool,
    analysis: String,
    analysis_loading: bool,
}

impl Default for AppModel {
    fn default() -> Self {
        Self::restore(Vec::new(), AiMode::default(), None, None)
    }
}

impl AppModel {
    /// Builds the model from the four persisted slices, starting on Home.
    pub fn restore(
        history: Vec<HistoryRecord>,
        mode: AiMode,
        persona: Option<Persona>,
        user_name: Option<String>,
    ) -> Self {
        Self {
            view: View::Home,
            working: Vec::new(),
            history,
            mode,
            persona,
            user_name,
            advice: String::new(),
            advice_loading: false,
            prediction: String::new(),
            prediction_loading: false,
            analysis: String::new(),
            analysis_loading: false,
        }
    }

    /// Applies one action, returning the commands the caller must execute.
    ///
    /// Actions that are invalid for the current view, or whose guard fails,
    /// are silent no-ops returning no commands.
    pub fn apply(&mut self, action: Action) -> Vec<Command> {
        match (self.view, action) {
            (View::Home, Action::StartInput) => {
                self.set_view(View::Input);
                vec![]
            }
            (View::Home, Action::ViewHistory) => {
                self.set_view(View::History);
                vec![]
            }
            (View::Home, Action::TakeQuiz) => {
                self.set_view(View::Personality);
                vec![]
            }
            (View::Home, Action::SetMode(mode)) => {
                if self.mode == mode {
                    return vec![];
                }
                self.mode = mode;
                vec![Command::PersistMode]
            }
            (View::Home, Action::SetUserName(name)) => {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    return vec![];
                }
                self.user_name = Some(trimmed.to_string());
                vec![Command::PersistUserName]
            }
            (View::Home, Action::ClearUserName) => {
                if self.user_name.is_none() {
                    return vec![];
                }
                self.user_name = None;
                vec![Command::PersistUserName]
            }
            (
                View::Input,
                Action::AddActivity {
                    name,
                    hour,
                    minute,
                    category,
                },
            ) => {
                if name.is_empty() || (hour.is_none() && minute.is_none()) {
                    return vec![];
                }
                self.working.push(Activity::new(
                    name,
                    hour.unwrap_or(0),
                    minute.unwrap_or(0),
                    category,
                ));
                vec![]
            }
            (View::Input, Action::Finish) => {
                if self.working.is_empty() {
                    return vec![];
                }
                self.set_view(View::Result);
                self.advice_loading = true;
                vec![Command::FetchAdvice]
            }
            (View::Personality, Action::SubmitQuiz { answers }) => {
                self.persona = Some(Persona::compute(&answers));
                self.set_view(View::Home);
                vec![Command::PersistPersona]
            }
            (View::Result, Action::Again) => {
                self.working.clear();
                self.set_view(View::Input);
                vec![]
            }
            (View::Result, Action::RequestPrediction) => {
                if self.working.is_empty() || self.prediction_loading {
                    return vec![];
                }
                self.prediction.clear();
                self.prediction_loading = true;
                vec![Command::FetchPrediction]
            }
            (View::Result, Action::GoHome) => {
                self.history.push(HistoryRecord::snapshot_now(&self.working));
                self.working.clear();
                self.set_view(View::Home);
                vec![Command::PersistHistory]
            }
            (View::History, Action::RequestAnalysis) => {
                if self.history.is_empty() || self.analysis_loading {
                    return vec![];
                }
                self.analysis.clear();
                self.analysis_loading = true;
                vec![Command::FetchAnalysis]
            }
            (View::History, Action::ClearHistory { confirmed }) => {
                if !confirmed {
                    return vec![];
                }
                self.history.clear();
                vec![Command::PersistHistory]
            }
            (View::Input | View::Personality | View::History, Action::GoHome) => {
                self.set_view(View::Home);
                vec![]
            }
            // Anything else is invalid for the current screen.
            _ => vec![],
        }
    }

    /// Switches screens, dropping advice text tied to the screen being left.
    fn set_view(&mut self, view: View) {
        if self.view == view {
            return;
        }
        if self.view == View::Result {
            self.advice.clear();
            self.advice_loading = false;
            self.prediction.clear();
            self.prediction_loading = false;
        }
        if self.view == View::History {
            self.analysis.clear();
            self.analysis_loading = false;
        }
        self.view = view;
    }

    /// Stores an arrived advice response and clears the loading flag.
    pub fn resolve_advice(&mut self, text: String) {
        self.advice = text;
        self.advice_loading = false;
    }

    /// Stores an arrived prediction response and clears the loading flag.
    pub fn resolve_prediction(&mut self, text: String) {
        self.prediction = text;
        self.prediction_loading = false;
    }

    /// Stores an arrived analysis response and clears the loading flag.
    pub fn resolve_analysis(&mut self, text: String) {
        self.analysis = text;
        self.analysis_loading = false;
    }

    /// Minutes spent per category across the working list, in category order.
    pub fn category_minutes(&self) -> Vec<(Category, u32)> {
        Category::iter()
            .map(|category| {
                let minutes = self
                    .working
                    .iter()
                    .filter(|a| a.category == category)
                    .map(Activity::duration_minutes)
                    .sum();
                (category, minutes)
            })
            .collect()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn working(&self) -> &[Activity] {
        &self.working
    }

    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    pub fn mode(&self) -> AiMode {
        self.mode
    }

    pub fn persona(&self) -> Option<Persona> {
        self.persona
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn advice(&self) -> &str {
        &self.advice
    }

    pub fn advice_loading(&self) -> bool {
        self.advice_loading
    }

    pub fn prediction(&self) -> &str {
        &self.prediction
    }

    pub fn prediction_loading(&self) -> bool {
        self.prediction_loading
    }

    pub fn analysis(&self) -> &str {
        &self.analysis
    }

    pub fn analysis_loading(&self) -> bool {
        self.analysis_loading
    }
}
