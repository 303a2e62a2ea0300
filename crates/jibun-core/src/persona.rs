//! Personality quiz and persona derivation.
//!
//! The persona is derived by a deterministic scoring function over three
//! categorical quiz answers and is used to bias advice prompt content.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One answer choice in the personality quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum QuizAnswer {
    A,
    B,
    C,
    D,
}

impl QuizAnswer {
    /// The persona this answer counts toward.
    pub fn persona(&self) -> Persona {
        match self {
            QuizAnswer::A => Persona::Planner,
            QuizAnswer::B => Persona::Creative,
            QuizAnswer::C => Persona::Social,
            QuizAnswer::D => Persona::Calm,
        }
    }
}

/// The three quiz answers; `None` means the question was skipped.
pub type QuizAnswers = [Option<QuizAnswer>; 3];

/// The derived personality category.
///
/// Variant order matters: ties are broken by first-declared-wins, so an
/// all-empty answer set (a four-way zero-score tie) resolves to `Calm`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// 安定型 - steady, sustainable pace
    Calm,
    /// 計画型 - plans ahead, works the list
    Planner,
    /// クリエイティブ型 - free-form, idea driven
    Creative,
    /// 社交型 - social, event driven
    Social,
}

impl Persona {
    /// Derives the persona from three quiz answers.
    ///
    /// Each answer adds one point to its persona; the persona with the
    /// strictly highest count wins, ties going to the first-declared variant.
    pub fn compute(answers: &QuizAnswers) -> Persona {
        use strum::IntoEnumIterator;

        let mut best = Persona::Calm;
        let mut best_score = -1i32;
        for candidate in Persona::iter() {
            let score = answers
                .iter()
                .flatten()
                .filter(|a| a.persona() == candidate)
                .count() as i32;
            if score > best_score {
                best = candidate;
                best_score = score;
            }
        }
        best
    }

    /// Japanese display name, e.g. 計画型.
    pub fn display_name(&self) -> &'static str {
        match self {
            Persona::Calm => "安定型",
            Persona::Planner => "計画型",
            Persona::Creative => "クリエイティブ型",
            Persona::Social => "社交型",
        }
    }

    /// Short description shown on the home screen.
    pub fn description(&self) -> &'static str {
        match self {
            Persona::Calm => {
                "落ち着いて持続するタイプ。無理のないリズムと回復の時間を重視します。"
            }
            Persona::Planner => {
                "予定を立ててコツコツこなすのが得意。時間管理と優先順位の提案を重視します。"
            }
            Persona::Creative => {
                "自由な発想で取り組むタイプ。柔軟なスケジュールの工夫を提案します。"
            }
            Persona::Social => {
                "人との交流やイベントを大事にする傾向があります。休憩と交流のバランスを提案します。"
            }
        }
    }

    /// Behavioral note appended to AI prompts for this persona.
    pub fn prompt_note(&self) -> &'static str {
        match self {
            Persona::Calm => {
                "このユーザーは安定型です。疲労回復や持続可能性を重視したゆったりした提案を心がけてください。"
            }
            Persona::Planner => {
                "このユーザーは計画型です。具体的なToDoや時間割、優先順位付けを含む実行可能な提案を出してください。"
            }
            Persona::Creative => {
                "このユーザーはクリエイティブ型です。柔軟で創造的な代替案やバッファを取り入れたスケジュール提案を優先してください。"
            }
            Persona::Social => {
                "このユーザーは社交型です。交流やチーム作業を取り入れた提案、他者との予定調整を考慮してください。"
            }
        }
    }
}

/// The quiz questions and their choice texts, in screen order.
///
/// Choices are listed A through D; the mapping to personas lives on
/// [`QuizAnswer::persona`].
pub const QUIZ_QUESTIONS: [(&str, [&str; 4]); 3] = [
    (
        "質問1: 予定を立てる時、あなたは？",
        [
            "A: しっかり計画を立てる",
            "B: アイデアや気分で決める",
            "C: 友達や同僚と合わせる",
            "D: 無理せずゆるく",
        ],
    ),
    (
        "質問2: 仕事や勉強の進め方は？",
        [
            "A: リストや締切で管理する",
            "B: アイデアを優先して動く",
            "C: 誰かと一緒に進めるのが好き",
            "D: 着実に続ける",
        ],
    ),
    (
        "質問3: 休日の過ごし方は？",
        [
            "A: 予定を作って動く",
            "B: 創作や趣味に没頭する",
            "C: 友達と会う",
            "D: 家でゆっくり過ごす",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_majority_wins() {
        // planner:2, creative:1, social:0, calm:0
        let answers = [
            Some(QuizAnswer::A),
            Some(QuizAnswer::A),
            Some(QuizAnswer::B),
        ];
        assert_eq!(Persona::compute(&answers), Persona::Planner);
    }

    #[test]
    fn test_all_empty_resolves_to_calm() {
        let answers: QuizAnswers = [None, None, None];
        assert_eq!(Persona::compute(&answers), Persona::Calm);
    }

    #[test]
    fn test_single_answer() {
        let answers = [None, Some(QuizAnswer::C), None];
        assert_eq!(Persona::compute(&answers), Persona::Social);
    }

    #[test]
    fn test_two_way_tie_goes_to_first_declared() {
        // planner:1, creative:1 - planner is declared before creative
        let answers = [Some(QuizAnswer::A), Some(QuizAnswer::B), None];
        assert_eq!(Persona::compute(&answers), Persona::Planner);
    }

    #[test]
    fn test_string_round_trip() {
        use strum::IntoEnumIterator;
        for persona in Persona::iter() {
            assert_eq!(persona.to_string().parse::<Persona>().unwrap(), persona);
        }
        assert!("wizard".parse::<Persona>().is_err());
    }
}
