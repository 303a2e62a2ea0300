use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use strum::IntoEnumIterator;

use jibun_application::TimerController;
use jibun_core::activity::Category;
use jibun_core::mode::AiMode;
use jibun_core::persona::{QUIZ_QUESTIONS, QuizAnswer};
use jibun_core::state::{Action, AppModel, View};
use jibun_infrastructure::json_store::JsonSliceStore;
use jibun_infrastructure::repositories::{
    JsonHistoryRepository, JsonModeRepository, JsonPersonaRepository, JsonUserNameRepository,
};
use jibun_interaction::ProxyClient;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        let commands = [
            "input", "history", "quiz", "mode", "name", "add", "done", "submit", "predict",
            "analyze", "again", "clear", "home", "quit",
        ];
        Self {
            commands: commands.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if !line.is_empty() && !line.contains(' ') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let first = line.split_whitespace().next().unwrap_or("");
        if self.commands.iter().any(|cmd| cmd == first) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if !line.is_empty() && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

fn render(model: &AppModel) {
    println!();
    match model.view() {
        View::Home => render_home(model),
        View::Input => render_input(model),
        View::Personality => render_personality(),
        View::Result => render_result(model),
        View::History => render_history(model),
    }
}

fn render_home(model: &AppModel) {
    let mode = model.mode();
    println!("{}", mode.home_title().bright_magenta().bold());
    println!("{}", mode.home_subtitle().bright_black());
    if let Some(name) = model.user_name() {
        println!("{}", format!("こんにちは、{}さん！", name).green());
    }
    if let Some(persona) = model.persona() {
        println!(
            "{}",
            format!("性格タイプ: {}", persona.display_name()).cyan()
        );
        println!("{}", persona.description().bright_black());
    }
    println!();
    println!(
        "{}",
        format!("AIモード: {}", mode.display_name()).bright_blue()
    );
    println!(
        "{}",
        "input | history | quiz | mode <名前> | name <名前> | quit".bright_black()
    );
}

fn render_input(model: &AppModel) {
    println!("{}", "今日は何をした？".bright_magenta().bold());
    if model.working().is_empty() {
        println!("{}", "まだ記録がありません".bright_black());
    } else {
        for activity in model.working() {
            println!("  {}", activity.prompt_line());
        }
    }
    println!();
    println!(
        "{}",
        "add <名前> <時間> <分> <カテゴリ> | done | home".bright_black()
    );
    println!(
        "{}",
        format!(
            "カテゴリ: {}",
            Category::iter()
                .map(|c| c.label())
                .collect::<Vec<_>>()
                .join(" / ")
        )
        .bright_black()
    );
}

fn render_personality() {
    println!("{}", "性格診断".bright_magenta().bold());
    for (question, choices) in QUIZ_QUESTIONS.iter() {
        println!();
        println!("{}", question.cyan());
        for choice in choices {
            println!("  {}", choice);
        }
    }
    println!();
    println!(
        "{}",
        "submit <a-d> <a-d> <a-d> (スキップは -) | home".bright_black()
    );
}

fn render_result(model: &AppModel) {
    println!("{}", model.mode().result_heading().bright_magenta().bold());
    for activity in model.working() {
        println!("  {}", activity.prompt_line());
    }
    println!();
    for (category, minutes) in model.category_minutes() {
        if minutes == 0 {
            continue;
        }
        println!(
            "  {}",
            format!("{}: {}時間{}分", category.label(), minutes / 60, minutes % 60).cyan()
        );
    }
    println!();
    if model.advice_loading() {
        println!("{}", "アドバイスを考え中...".yellow());
    } else if !model.advice().is_empty() {
        for line in model.advice().lines() {
            println!("{}", line.bright_blue());
        }
    }
    if model.prediction_loading() {
        println!("{}", "明日を予測中...".yellow());
    } else if !model.prediction().is_empty() {
        println!();
        println!("{}", "明日の予測:".bright_magenta());
        for line in model.prediction().lines() {
            println!("{}", line.bright_blue());
        }
    }
    println!();
    println!("{}", "predict | again | home".bright_black());
}

fn render_history(model: &AppModel) {
    println!("{}", "これまでの記録".bright_magenta().bold());
    if model.history().is_empty() {
        println!("{}", model.mode().empty_history_message().bright_black());
    } else {
        for record in model.history() {
            println!();
            println!("{}", record.date.green());
            for activity in &record.activities {
                println!("  {}", activity.prompt_line());
            }
        }
    }
    if model.analysis_loading() {
        println!("{}", "分析中...".yellow());
    } else if !model.analysis().is_empty() {
        println!();
        for line in model.analysis().lines() {
            println!("{}", line.bright_blue());
        }
    }
    println!();
    println!("{}", "analyze | clear | home".bright_black());
}

fn parse_category(word: &str) -> Option<Category> {
    match word {
        "work" => Some(Category::Work),
        "study" => Some(Category::Study),
        "housework" => Some(Category::Housework),
        "rest" => Some(Category::Rest),
        "other" => Some(Category::Other),
        label => Category::from_label(label),
    }
}

fn parse_quiz_answer(word: &str) -> Option<QuizAnswer> {
    word.parse::<QuizAnswer>().ok()
}

/// Parses one line of input against the current screen.
///
/// Returns the action to dispatch, or `None` with a printed hint when the
/// input does not fit the screen's vocabulary.
fn parse(view: View, line: &str) -> Option<Action> {
    let mut words = line.split_whitespace();
    let command = words.next()?;
    let rest: Vec<&str> = words.collect();

    match (view, command) {
        (View::Home, "input" | "start") => Some(Action::StartInput),
        (View::Home, "history") => Some(Action::ViewHistory),
        (View::Home, "quiz") => Some(Action::TakeQuiz),
        (View::Home, "mode") => match rest.first().and_then(|w| w.parse::<AiMode>().ok()) {
            Some(mode) => Some(Action::SetMode(mode)),
            None => {
                let names = AiMode::iter().map(|m| m.to_string()).collect::<Vec<_>>();
                println!(
                    "{}",
                    format!("モードを選んでね: {}", names.join(" / ")).yellow()
                );
                None
            }
        },
        (View::Home, "name") => match rest.as_slice() {
            ["clear"] => Some(Action::ClearUserName),
            [] => {
                println!("{}", "name <名前> または name clear".yellow());
                None
            }
            parts => Some(Action::SetUserName(parts.join(" "))),
        },
        (View::Input, "add") => {
            if rest.is_empty() {
                println!("{}", "add <名前> <時間> <分> <カテゴリ>".yellow());
                return None;
            }
            let name = rest[0].to_string();
            let hour = rest.get(1).and_then(|w| w.parse().ok());
            let minute = rest.get(2).and_then(|w| w.parse().ok());
            let category = rest
                .get(3)
                .and_then(|w| parse_category(w))
                .unwrap_or_default();
            Some(Action::AddActivity {
                name,
                hour,
                minute,
                category,
            })
        }
        (View::Input, "done" | "finish") => Some(Action::Finish),
        (View::Personality, "submit") => {
            let mut answers = [None, None, None];
            for (slot, word) in answers.iter_mut().zip(rest.iter()) {
                *slot = parse_quiz_answer(word);
            }
            Some(Action::SubmitQuiz { answers })
        }
        (View::Result, "predict") => Some(Action::RequestPrediction),
        (View::Result, "again") => Some(Action::Again),
        (View::History, "analyze") => Some(Action::RequestAnalysis),
        (View::History, "clear") => Some(Action::ClearHistory { confirmed: false }),
        (_, "home" | "back") => Some(Action::GoHome),
        _ => {
            println!("{}", "このコマンドはここでは使えません".bright_black());
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    // ===== Backend Initialization =====
    let store = JsonSliceStore::open_default()?;
    let provider = Arc::new(ProxyClient::from_env());

    let mut controller = TimerController::load(
        Arc::new(JsonHistoryRepository::new(store.clone())),
        Arc::new(JsonModeRepository::new(store.clone())),
        Arc::new(JsonPersonaRepository::new(store.clone())),
        Arc::new(JsonUserNameRepository::new(store)),
        provider,
    )
    .await;

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== じぶんタイマー ===".bright_magenta().bold());
    println!(
        "{}",
        "記録して、AIにアドバイスをもらおう。'quit' で終了。".bright_black()
    );

    render(controller.model());

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "また明日！".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                let Some(action) = parse(controller.model().view(), trimmed) else {
                    continue;
                };

                // clear asks for confirmation before committing
                let action = if matches!(action, Action::ClearHistory { confirmed: false }) {
                    let answer = rl.readline(&"全ての記録を削除する？ (yes/no) ".yellow())?;
                    if answer.trim() != "yes" {
                        println!("{}", "キャンセルしました".bright_black());
                        continue;
                    }
                    Action::ClearHistory { confirmed: true }
                } else {
                    action
                };

                let needs_wait = matches!(
                    action,
                    Action::Finish | Action::RequestPrediction | Action::RequestAnalysis
                );
                if needs_wait {
                    println!("{}", "AIに聞いています...".yellow());
                }

                controller.dispatch(action).await;
                render(controller.model());
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C を検出。'quit' で終了できます。".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D を検出。終了します。".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
