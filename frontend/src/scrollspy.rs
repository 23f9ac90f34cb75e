use web_sys::HtmlElement;

pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBoundary {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBoundary {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Id of the first section, in document order, whose `[top, top + height)`
/// range holds `scroll + probe_offset`. `None` above the first section or in
/// a gap between sections.
pub fn active_section(sections: &[SectionBoundary], scroll: f64, probe_offset: f64) -> Option<&str> {
    let position = scroll + probe_offset;
    sections
        .iter()
        .find(|section| section.contains(position))
        .map(|section| section.id.as_str())
}

pub fn active_link(bindings: &[Option<String>], active: Option<&str>) -> Option<usize> {
    let active = active?;
    bindings.iter().position(|b| b.as_deref() == Some(active))
}

pub struct NavLinks {
    links: Vec<HtmlElement>,
    bindings: Vec<Option<String>>,
}

impl NavLinks {
    pub fn new(links: Vec<HtmlElement>) -> Self {
        let bindings = links.iter().map(|l| l.get_attribute("data-section")).collect();
        Self { links, bindings }
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn mark(&self, active: Option<&str>) {
        for link in &self.links {
            let _ = link.class_list().remove_1(ACTIVE_CLASS);
        }
        if let Some(index) = active_link(&self.bindings, active) {
            let _ = self.links[index].class_list().add_1(ACTIVE_CLASS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn page() -> Vec<SectionBoundary> {
        vec![
            SectionBoundary::new("hero", 0.0, 700.0),
            SectionBoundary::new("abstract", 700.0, 500.0),
            SectionBoundary::new("methods", 1200.0, 800.0),
            SectionBoundary::new("results", 2000.0, 600.0),
        ]
    }

    #[test]
    fn probe_offset_shifts_the_boundary() {
        let sections = page();
        assert_eq!(active_section(&sections, 599.0, 100.0), Some("hero"));
        assert_eq!(active_section(&sections, 600.0, 100.0), Some("abstract"));
    }

    #[test]
    fn nothing_active_above_first_section() {
        let sections = vec![SectionBoundary::new("abstract", 500.0, 400.0)];
        assert_eq!(active_section(&sections, 0.0, 100.0), None);
    }

    #[test]
    fn nothing_active_past_the_last_section() {
        assert_eq!(active_section(&page(), 5000.0, 100.0), None);
    }

    #[test]
    fn overlapping_sections_resolve_to_document_order() {
        let sections = vec![
            SectionBoundary::new("outer", 0.0, 1000.0),
            SectionBoundary::new("inner", 200.0, 200.0),
        ];
        assert_eq!(active_section(&sections, 250.0, 0.0), Some("outer"));
    }

    #[test]
    fn first_duplicate_binding_wins() {
        let bindings = vec![
            Some("hero".to_string()),
            None,
            Some("methods".to_string()),
            Some("methods".to_string()),
        ];
        assert_eq!(active_link(&bindings, Some("methods")), Some(2));
        assert_eq!(active_link(&bindings, Some("contact")), None);
        assert_eq!(active_link(&bindings, None), None);
    }

    proptest! {
        #[test]
        fn inside_one_section_marks_exactly_that_link(index in 0usize..4, fraction in 0.0f64..1.0) {
            let sections = page();
            let target = &sections[index];
            let position = target.top + fraction * target.height;
            prop_assume!(target.contains(position));
            let scroll = position - 100.0;

            let active = active_section(&sections, scroll, 100.0);
            prop_assert_eq!(active, Some(target.id.as_str()));

            let bindings: Vec<Option<String>> = sections.iter().map(|s| Some(s.id.clone())).collect();
            prop_assert_eq!(active_link(&bindings, active), Some(index));
        }

        #[test]
        fn classification_is_idempotent(scroll in -500.0f64..4000.0) {
            let sections = page();
            prop_assert_eq!(
                active_section(&sections, scroll, 100.0),
                active_section(&sections, scroll, 100.0)
            );
        }
    }
}
