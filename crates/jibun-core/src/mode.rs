//! AI mode domain model.
//!
//! The mode selects one of five fixed presentation/prompt-style variants.
//! Each per-mode text table is an exhaustive `match` so adding or removing a
//! mode is a compile-time-checked change.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The stylistic variant controlling both rendering and AI prompt phrasing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AiMode {
    /// ギャル - upbeat gyaru phrasing
    Gal,
    /// ヒーリング - gentle, calming phrasing
    Healing,
    /// クール - terse, composed phrasing
    Cool,
    /// ツンデレ - tsundere phrasing
    Tsundere,
    /// ビジネス - businesslike phrasing
    Business,
}

impl Default for AiMode {
    fn default() -> Self {
        AiMode::Gal
    }
}

impl AiMode {
    /// Japanese display name used in the mode selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            AiMode::Gal => "ギャル",
            AiMode::Healing => "ヒーリング",
            AiMode::Cool => "クール",
            AiMode::Tsundere => "ツンデレ",
            AiMode::Business => "ビジネス",
        }
    }

    /// Prompt instruction for advice requests.
    pub fn advice_instruction(&self) -> &'static str {
        match self {
            AiMode::Gal => {
                "語尾やテンションはギャル語で、ただし一人称で「ギャル」や「うち」などは使わず、生活バランスや改善点について日本語でかわいくアドバイスしてください。絶対に自分をギャルと名乗らないこと。"
            }
            AiMode::Healing => {
                "語調は穏やかでヒーリング系（優しく落ち着いた口調）にしてください。リラックスや回復を促す表現を用いて、優しくアドバイスしてください。"
            }
            AiMode::Cool => {
                "語調はクールで落ち着いたトーンにし、簡潔で洗練された表現でアドバイスしてください。感情表現は抑えめに。"
            }
            AiMode::Tsundere => {
                "語調はツンデレ風（照れ隠し・素直でないけど内心は気にかけている）にしてください。ただし攻撃的や傷つける表現は避けてください。"
            }
            AiMode::Business => {
                "語調はビジネスライクでプロフェッショナルに、具体的かつ実行可能な改善案を簡潔に提示してください。"
            }
        }
    }

    /// Prompt instruction for monthly prediction requests.
    pub fn prediction_instruction(&self) -> &'static str {
        match self {
            AiMode::Gal => {
                "語尾やテンションはギャル語で、ただし一人称で「ギャル」や「うち」などは使わず、1ヶ月後の変化を日本語でかわいく予測してください。"
            }
            AiMode::Healing => {
                "語調は穏やかでヒーリング系（優しく落ち着いた口調）で、1ヶ月後にどのような変化があるかを優しく予測してください。"
            }
            AiMode::Cool => "語調はクールで落ち着いたトーンで、1ヶ月後の影響を簡潔に予測してください。",
            AiMode::Tsundere => "語調はツンデレ風で、1ヶ月後の変化を少し照れた感じで述べてください。",
            AiMode::Business => {
                "語調はビジネスライクでプロフェッショナルに、1ヶ月後に予想される業務上や生活面の影響を簡潔に予測してください。"
            }
        }
    }

    /// Home screen title.
    pub fn home_title(&self) -> &'static str {
        match self {
            AiMode::Gal => "じぶんタイマー💖",
            AiMode::Healing => "じぶんタイマー — ゆったりケア💧",
            AiMode::Cool => "Jibun Timer — Focus Mode",
            AiMode::Tsundere => "じぶんタイマー（べ、別に見てやってもいいけど）",
            AiMode::Business => "Productivity Timer",
        }
    }

    /// Home screen subtitle.
    pub fn home_subtitle(&self) -> &'static str {
        match self {
            AiMode::Gal => "健康マジ大事っしょ？！キラキラしてこ☆",
            AiMode::Healing => "無理せず、毎日をやさしく整えよう",
            AiMode::Cool => "シンプルに時間を可視化して効率化",
            AiMode::Tsundere => "ちゃんと入力しなさいよね…（心配なんだから）",
            AiMode::Business => "効率的な時間配分で成果を最大化する",
        }
    }

    /// Result screen heading.
    pub fn result_heading(&self) -> &'static str {
        match self {
            AiMode::Gal => "💖 あなたの1日の配分 💖",
            AiMode::Healing => "🌿 あなたの1日の配分 🌿",
            AiMode::Cool => "📊 Your Daily Breakdown",
            AiMode::Tsundere => "💢 あなたの1日の配分（見てやるわ）",
            AiMode::Business => "📈 あなたの1日の配分",
        }
    }

    /// Message shown when the history collection is empty.
    pub fn empty_history_message(&self) -> &'static str {
        match self {
            AiMode::Gal => "記録がないよ💦 まずはちょっとだけでも活動を追加してみてね！",
            AiMode::Healing => "まだ記録がありません。無理せず少しずつ始めましょう。",
            AiMode::Cool => "No records yet. Add activities to visualize your day.",
            AiMode::Tsundere => "記録がないんだから…別に困ってないんだからね！でも入力しなさいよ！",
            AiMode::Business => "履歴がありません。まずは活動を登録してください。",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_string_round_trip() {
        for mode in AiMode::iter() {
            let s = mode.to_string();
            assert_eq!(s.parse::<AiMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_known_serializations() {
        assert_eq!(AiMode::Gal.to_string(), "gal");
        assert_eq!("tsundere".parse::<AiMode>().unwrap(), AiMode::Tsundere);
    }

    #[test]
    fn test_unknown_string_is_an_error() {
        assert!("sparkle".parse::<AiMode>().is_err());
        assert!("".parse::<AiMode>().is_err());
    }

    #[test]
    fn test_default_is_gal() {
        assert_eq!(AiMode::default(), AiMode::Gal);
    }

    #[test]
    fn test_instructions_differ_per_kind() {
        for mode in AiMode::iter() {
            assert_ne!(mode.advice_instruction(), mode.prediction_instruction());
        }
    }
}
