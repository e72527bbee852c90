//! Target script detection.
//!
//! A string counts as translated when it contains at least one code point
//! from the target script's range. The default target is the CJK Unified
//! Ideographs block.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Named presets, lower-case, with their inclusive code point ranges.
const PRESETS: &[(&str, u32, u32)] = &[
    ("han", 0x4E00, 0x9FFF),
    ("kana", 0x3040, 0x30FF),
    ("hangul", 0xAC00, 0xD7AF),
    ("cyrillic", 0x0400, 0x04FF),
    ("arabic", 0x0600, 0x06FF),
    ("greek", 0x0370, 0x03FF),
    ("hebrew", 0x0590, 0x05FF),
    ("thai", 0x0E00, 0x0E7F),
    ("devanagari", 0x0900, 0x097F),
];

/// An inclusive range of Unicode code points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TargetScript {
    start: u32,
    end: u32,
}

impl TargetScript {
    /// CJK Unified Ideographs, `U+4E00..=U+9FFF`.
    pub const HAN: TargetScript = TargetScript {
        start: 0x4E00,
        end: 0x9FFF,
    };

    /// Build a custom range. Fails if `start > end`.
    pub fn range(start: u32, end: u32) -> Result<Self, TypeError> {
        if start > end {
            return Err(TypeError::InvalidRange(format!("U+{start:04X}-U+{end:04X}")));
        }
        Ok(Self { start, end })
    }

    /// Look up a named preset such as `han` or `cyrillic`.
    pub fn preset(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        PRESETS
            .iter()
            .find(|(n, _, _)| *n == name)
            .map(|&(_, start, end)| Self { start, end })
    }

    /// Names of the built-in presets.
    pub fn preset_names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|(n, _, _)| *n)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// True if `c` lies within the range.
    pub fn contains(&self, c: char) -> bool {
        (self.start..=self.end).contains(&u32::from(c))
    }

    /// True if `s` contains at least one code point from the range.
    pub fn matches(&self, s: &str) -> bool {
        s.chars().any(|c| self.contains(c))
    }
}

impl Default for TargetScript {
    fn default() -> Self {
        Self::HAN
    }
}

impl fmt::Display for TargetScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match PRESETS
            .iter()
            .find(|&&(_, start, end)| start == self.start && end == self.end)
        {
            Some((name, _, _)) => f.write_str(name),
            None => write!(f, "U+{:04X}-U+{:04X}", self.start, self.end),
        }
    }
}

impl FromStr for TargetScript {
    type Err = TypeError;

    /// Accepts a preset name, `U+XXXX-U+YYYY`, or bare `XXXX-YYYY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(script) = Self::preset(s) {
            return Ok(script);
        }
        let Some((lo, hi)) = s.split_once('-') else {
            return Err(TypeError::UnknownScript(s.to_owned()));
        };
        let start = parse_code_point(lo).ok_or_else(|| TypeError::InvalidRange(s.to_owned()))?;
        let end = parse_code_point(hi).ok_or_else(|| TypeError::InvalidRange(s.to_owned()))?;
        Self::range(start, end)
    }
}

fn parse_code_point(s: &str) -> Option<u32> {
    let s = s.trim();
    let hex = s
        .strip_prefix("U+")
        .or_else(|| s.strip_prefix("u+"))
        .unwrap_or(s);
    let value = u32::from_str_radix(hex, 16).ok()?;
    (value <= u32::from(char::MAX)).then_some(value)
}

impl TryFrom<String> for TargetScript {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TargetScript> for String {
    fn from(script: TargetScript) -> Self {
        script.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_is_han() {
        let script = TargetScript::default();
        assert!(script.matches("你好"));
        assert!(script.matches("Hello 世界"));
        assert!(!script.matches("Hello"));
        assert!(!script.matches(""));
        assert!(!script.matches("こんにちは"));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let script = TargetScript::HAN;
        assert!(script.contains('\u{4E00}'));
        assert!(script.contains('\u{9FFF}'));
        assert!(!script.contains('\u{4DFF}'));
        assert!(!script.contains('\u{A000}'));
    }

    #[test]
    fn parse_presets_case_insensitively() {
        assert_eq!("han".parse::<TargetScript>().unwrap(), TargetScript::HAN);
        let cyrillic: TargetScript = "Cyrillic".parse().unwrap();
        assert!(cyrillic.matches("Привет"));
        assert!(!cyrillic.matches("hello"));
        assert_eq!(TargetScript::preset_names().count(), PRESETS.len());
    }

    #[test]
    fn parse_custom_ranges() {
        let script: TargetScript = "U+3040-U+309F".parse().unwrap();
        assert_eq!((script.start(), script.end()), (0x3040, 0x309F));
        let bare: TargetScript = "3040-309f".parse().unwrap();
        assert_eq!(bare, script);
        assert!(script.matches("ひらがな"));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            "klingon".parse::<TargetScript>(),
            Err(TypeError::UnknownScript("klingon".into()))
        );
        assert!(matches!(
            "U+9FFF-U+4E00".parse::<TargetScript>(),
            Err(TypeError::InvalidRange(_))
        ));
        assert!(matches!(
            "U+ZZZZ-U+0041".parse::<TargetScript>(),
            Err(TypeError::InvalidRange(_))
        ));
        assert!(matches!(
            "0-FFFFFFFF".parse::<TargetScript>(),
            Err(TypeError::InvalidRange(_))
        ));
    }

    #[test]
    fn display_uses_preset_name_when_known() {
        assert_eq!(TargetScript::HAN.to_string(), "han");
        let custom = TargetScript::range(0x41, 0x5A).unwrap();
        assert_eq!(custom.to_string(), "U+0041-U+005A");
    }

    #[test]
    fn serde_uses_string_form() {
        let json = serde_json::to_string(&TargetScript::HAN).unwrap();
        assert_eq!(json, "\"han\"");
        let back: TargetScript = serde_json::from_str("\"U+0041-U+005A\"").unwrap();
        assert_eq!(back, TargetScript::range(0x41, 0x5A).unwrap());
        assert!(serde_json::from_str::<TargetScript>("\"nope\"").is_err());
    }

    proptest! {
        #[test]
        fn display_then_parse_is_identity(start in 0u32..0x10000, len in 0u32..0x1000) {
            let script = TargetScript::range(start, start + len).unwrap();
            prop_assert_eq!(script.to_string().parse::<TargetScript>().unwrap(), script);
        }

        #[test]
        fn ascii_never_matches_han(s in "[ -~]*") {
            prop_assert!(!TargetScript::HAN.matches(&s));
        }
    }
}
