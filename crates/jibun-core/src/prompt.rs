//! Prompt construction for the advice collaborator.
//!
//! Builds the Japanese prompts sent to the Gemini proxy from the current
//! mode, the derived persona (if any), and the formatted activity data.

use crate::activity::Activity;
use crate::history::HistoryRecord;
use crate::mode::AiMode;
use crate::persona::Persona;

/// Fallback text shown when an advice request fails.
pub const ADVICE_FALLBACK: &str = "アドバイス取得に失敗しました";
/// Fallback text shown when a monthly prediction request fails.
pub const PREDICTION_FALLBACK: &str = "予測の取得に失敗しました";
/// Fallback text shown when a history analysis request fails.
pub const ANALYSIS_FALLBACK: &str = "分析の取得に失敗しました";

fn persona_note(persona: Option<Persona>) -> String {
    match persona {
        Some(p) => format!("ユーザーの性格: {}\n{}", p.display_name(), p.prompt_note()),
        None => String::new(),
    }
}

fn activity_lines(activities: &[Activity]) -> String {
    activities
        .iter()
        .map(Activity::prompt_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the advice prompt for the result screen.
pub fn advice_prompt(mode: AiMode, persona: Option<Persona>, activities: &[Activity]) -> String {
    format!(
        "{}\n{}\n以下の1日の活動配分をもとに、生活バランスや改善点について日本語でアドバイスしてください。活動一覧:\n{}",
        mode.advice_instruction(),
        persona_note(persona),
        activity_lines(activities)
    )
}

/// Builds the one-month prediction prompt for the result screen.
pub fn prediction_prompt(
    mode: AiMode,
    persona: Option<Persona>,
    activities: &[Activity],
) -> String {
    format!(
        "{}\n{}\n以下の活動配分を毎日このまま続けた場合、1ヶ月後にどのような生活や健康、作業効率の変化が起きるかを日本語で予測してください。箇条書きで「良くなる点」「悪くなる可能性」「短い対策（1〜2行）」をそれぞれ2〜3項目ずつ示してください。活動一覧:\n{}",
        mode.prediction_instruction(),
        persona_note(persona),
        activity_lines(activities)
    )
}

/// Builds the whole-history analysis prompt for the history screen.
pub fn history_prompt(mode: AiMode, persona: Option<Persona>, history: &[HistoryRecord]) -> String {
    let sections = history
        .iter()
        .map(|record| {
            let lines = record
                .activities
                .iter()
                .map(|a| format!("- {}", a.prompt_line()))
                .collect::<Vec<_>>()
                .join("\n");
            format!("日付: {}\n{}", record.date, lines)
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "{}\n{}\n以下はあなたの過去の記録（日時ごとの活動一覧）です。各日の活動を参考に、全体の傾向、良い点、改善点、具体的な次のアクション（短く）をそれぞれ2〜3項目ずつ日本語で示してください。履歴:\n{}",
        mode.advice_instruction(),
        persona_note(persona),
        sections
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::Category;
    use chrono::{Local, TimeZone};

    fn work_eight_hours() -> Vec<Activity> {
        vec![Activity::new("Work", 8, 0, Category::Work)]
    }

    #[test]
    fn test_advice_prompt_contains_formatted_activity() {
        let prompt = advice_prompt(AiMode::Gal, None, &work_eight_hours());
        assert!(prompt.contains("Work(仕事): 8時間0分"));
        assert!(prompt.contains(AiMode::Gal.advice_instruction()));
    }

    #[test]
    fn test_advice_prompt_includes_persona_note() {
        let prompt = advice_prompt(AiMode::Cool, Some(Persona::Planner), &work_eight_hours());
        assert!(prompt.contains("ユーザーの性格: 計画型"));
        assert!(prompt.contains(Persona::Planner.prompt_note()));
    }

    #[test]
    fn test_advice_prompt_without_persona_has_no_note() {
        let prompt = advice_prompt(AiMode::Cool, None, &work_eight_hours());
        assert!(!prompt.contains("ユーザーの性格"));
    }

    #[test]
    fn test_prediction_prompt_uses_prediction_instruction() {
        let prompt = prediction_prompt(AiMode::Business, None, &work_eight_hours());
        assert!(prompt.contains(AiMode::Business.prediction_instruction()));
        assert!(prompt.contains("1ヶ月後"));
    }

    #[test]
    fn test_history_prompt_sections() {
        let at = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 0).unwrap();
        let record = HistoryRecord::snapshot(&work_eight_hours(), at);
        let prompt = history_prompt(AiMode::Healing, None, &[record]);
        assert!(prompt.contains("日付: 2026/01/02 03:04"));
        assert!(prompt.contains("- Work(仕事): 8時間0分"));
    }

    #[test]
    fn test_multiple_activities_one_line_each() {
        let activities = vec![
            Activity::new("Work", 8, 0, Category::Work),
            Activity::new("昼寝", 0, 30, Category::Rest),
        ];
        let prompt = advice_prompt(AiMode::Gal, None, &activities);
        assert!(prompt.contains("Work(仕事): 8時間0分\n昼寝(休憩): 0時間30分"));
    }
}
