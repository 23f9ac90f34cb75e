use crate::config::TypingConfig;
use crate::timeline::Step;

pub const TITLE_SELECTOR: &str = ".hero-title";

#[derive(Debug, Clone, PartialEq)]
pub enum TypingFrame {
    Clear,
    Text(String),
    CursorOn,
    CursorOff,
}

pub fn plan(text: &str, config: &TypingConfig) -> Vec<Step<TypingFrame>> {
    let mut steps = vec![Step::new(0, TypingFrame::Clear)];

    let mut prefix = String::with_capacity(text.len());
    let mut at = 0;
    for ch in text.chars() {
        at = config.tick_ms.saturating_add(at);
        prefix.push(ch);
        steps.push(Step::new(at, TypingFrame::Text(prefix.clone())));
    }

    if !prefix.is_empty() {
        steps.push(Step::new(at, TypingFrame::CursorOn));
        steps.push(Step::new(at.saturating_add(config.cursor_ms), TypingFrame::CursorOff));
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TypingConfig {
        TypingConfig {
            enabled: true,
            start_delay_ms: 1500,
            tick_ms: 80,
            cursor_ms: 3000,
        }
    }

    #[test]
    fn one_frame_per_character() {
        let steps = plan("Hi!", &config());
        assert_eq!(
            steps,
            vec![
                Step::new(0, TypingFrame::Clear),
                Step::new(80, TypingFrame::Text("H".into())),
                Step::new(160, TypingFrame::Text("Hi".into())),
                Step::new(240, TypingFrame::Text("Hi!".into())),
                Step::new(240, TypingFrame::CursorOn),
                Step::new(3240, TypingFrame::CursorOff),
            ]
        );
    }

    #[test]
    fn multibyte_characters_are_typed_whole() {
        let steps = plan("né✓", &config());
        let texts: Vec<_> = steps
            .iter()
            .filter_map(|s| match &s.action {
                TypingFrame::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["n", "né", "né✓"]);
    }

    #[test]
    fn huge_ticks_saturate_instead_of_wrapping() {
        let config = TypingConfig {
            tick_ms: u32::MAX / 2,
            cursor_ms: u32::MAX,
            ..config()
        };
        let steps = plan("abcd", &config);
        let times: Vec<u32> = steps.iter().map(|s| s.at_ms).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(steps.last().map(|s| s.at_ms), Some(u32::MAX));
    }

    #[test]
    fn empty_title_only_clears() {
        assert_eq!(plan("", &config()), vec![Step::new(0, TypingFrame::Clear)]);
    }
}
