use crate::config::CoordinatorConfig;
use crate::parallax;
use crate::scroll_top;
use crate::scrollspy::{self, SectionBoundary};
use crate::scrub::TriggerRegion;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutSnapshot {
    pub sections: Vec<SectionBoundary>,
    pub scroll_height: f64,
    pub client_height: f64,
    pub parallax_layers: usize,
    pub scrub_regions: Vec<Option<TriggerRegion>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollFrame {
    pub active_section: Option<String>,
    pub scroll_top_visible: bool,
    pub hero_offset: f64,
    pub layer_offsets: Vec<f64>,
    pub progress_percent: f64,
    pub scrub_values: Vec<Option<f64>>,
}

impl ScrollFrame {
    pub fn compute(config: &CoordinatorConfig, scroll: f64, layout: &LayoutSnapshot) -> Self {
        let scrub_values = config
            .scrub
            .iter()
            .zip(layout.scrub_regions.iter())
            .map(|(decl, region)| region.map(|r| decl.value_at(r.progress(scroll))))
            .collect();

        Self {
            active_section: scrollspy::active_section(&layout.sections, scroll, config.scrollspy_offset)
                .map(str::to_string),
            scroll_top_visible: scroll_top::is_visible(scroll, config.scroll_top_threshold),
            hero_offset: parallax::hero_offset(scroll, &config.parallax),
            layer_offsets: parallax::layer_offsets(scroll, layout.parallax_layers, &config.parallax),
            progress_percent: scroll_top::progress_percent(
                scroll,
                layout.scroll_height,
                layout.client_height,
            ),
            scrub_values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{fragment_target, scroll_destination};
    use crate::reveal::{hidden_style, RevealRegistry};

    fn layout() -> LayoutSnapshot {
        LayoutSnapshot {
            sections: vec![
                SectionBoundary::new("hero", 0.0, 700.0),
                SectionBoundary::new("abstract", 700.0, 500.0),
                SectionBoundary::new("methods", 1200.0, 800.0),
                SectionBoundary::new("results", 2000.0, 900.0),
            ],
            scroll_height: 2900.0,
            client_height: 900.0,
            parallax_layers: 2,
            scrub_regions: vec![Some(TriggerRegion::of_element(0.0, 700.0)); 3],
        }
    }

    #[test]
    fn top_of_page() {
        let config = CoordinatorConfig::default();
        let frame = ScrollFrame::compute(&config, 0.0, &layout());
        assert!(!frame.scroll_top_visible);
        assert_eq!(frame.active_section.as_deref(), Some("hero"));
        assert_eq!(frame.progress_percent, 0.0);
        assert_eq!(frame.scrub_values, vec![Some(0.0), Some(1.0), Some(1.0)]);

        // Everything below the fold starts hidden and stays hidden while the
        // observer reports it as outside the viewport.
        let mut reveals = RevealRegistry::with_len(8);
        for index in 0..8 {
            let style = hidden_style(index, &config.reveal);
            assert!(style.contains(&("opacity", "0".to_string())));
        }
        for index in 2..8 {
            assert!(!reveals.observe(index, false));
            assert!(!reveals.is_revealed(index));
        }
        assert!(reveals.observe(0, true));
        assert!(reveals.is_revealed(0));
        assert_eq!(reveals.revealed_count(), 1);
    }

    #[test]
    fn past_the_threshold() {
        let config = CoordinatorConfig::default();
        let frame = ScrollFrame::compute(&config, 400.0, &layout());
        assert!(frame.scroll_top_visible);
        assert_eq!(frame.active_section.as_deref(), Some("hero"));
        assert_eq!(frame.progress_percent, 20.0);
        assert_eq!(frame.layer_offsets.len(), 2);
    }

    #[test]
    fn clicking_methods_scrolls_below_the_header() {
        let config = CoordinatorConfig::default();
        let target = fragment_target("#methods").unwrap();
        let section = layout()
            .sections
            .into_iter()
            .find(|s| s.id == target)
            .unwrap();
        assert_eq!(scroll_destination(section.top, config.header_offset), 1120.0);

        let frame = ScrollFrame::compute(&config, 1120.0, &layout());
        assert_eq!(frame.active_section.as_deref(), Some("methods"));
    }

    #[test]
    fn page_without_hero_has_no_active_link_at_top() {
        let mut layout = layout();
        layout.sections.remove(0);
        let frame = ScrollFrame::compute(&CoordinatorConfig::default(), 0.0, &layout);
        assert_eq!(frame.active_section, None);
    }

    #[test]
    fn missing_trigger_skips_its_tween() {
        let mut layout = layout();
        layout.scrub_regions[2] = None;
        let frame = ScrollFrame::compute(&CoordinatorConfig::default(), 350.0, &layout);
        assert_eq!(frame.scrub_values[2], None);
        assert_eq!(frame.scrub_values[0], Some(-75.0));
    }

    #[test]
    fn identical_offsets_give_identical_frames() {
        let config = CoordinatorConfig::default();
        assert_eq!(
            ScrollFrame::compute(&config, 987.0, &layout()),
            ScrollFrame::compute(&config, 987.0, &layout())
        );
    }
}
