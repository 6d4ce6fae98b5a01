//! Active-section selection for in-page navigation.

/// Visibility ratio at which a section counts as in view.
pub const SPY_THRESHOLD: f64 = 0.3;

/// One observer report for one section.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionSample {
    pub section_id: String,
    pub is_intersecting: bool,
}

impl IntersectionSample {
    pub fn new(section_id: impl Into<String>, is_intersecting: bool) -> Self {
        Self {
            section_id: section_id.into(),
            is_intersecting,
        }
    }
}

/// How to pick a winner when several sections enter the viewport in the same
/// observer batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// The last intersecting entry of the batch wins.
    #[default]
    LastReported,
    /// The intersecting section listed first wins.
    DocumentOrder,
}

/// Which of an ordered set of sections is the active one.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    sections: Vec<String>,
    active: Option<String>,
    tie_break: TieBreak,
}

impl ScrollSpy {
    pub fn new(sections: Vec<String>, tie_break: TieBreak) -> Self {
        Self {
            sections,
            active: None,
            tie_break,
        }
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, section_id: &str) -> bool {
        self.active.as_deref() == Some(section_id)
    }

    /// Apply one observer batch. Returns `true` if the active section changed.
    ///
    /// Only entries that are intersecting can select a section; entries
    /// leaving the viewport never clear the current selection. Ids that are
    /// not registered are ignored.
    pub fn apply_batch(&mut self, batch: &[IntersectionSample]) -> bool {
        let entering = batch
            .iter()
            .filter(|s| s.is_intersecting)
            .filter_map(|s| self.position(&s.section_id).map(|pos| (pos, s)));

        let winner = match self.tie_break {
            TieBreak::LastReported => entering.last(),
            TieBreak::DocumentOrder => entering.min_by_key(|(pos, _)| *pos),
        };

        match winner {
            Some((_, sample)) if !self.is_active(&sample.section_id) => {
                self.active = Some(sample.section_id.clone());
                true
            }
            _ => false,
        }
    }

    fn position(&self, section_id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s == section_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy(tie_break: TieBreak) -> ScrollSpy {
        ScrollSpy::new(
            vec![
                "overview".to_string(),
                "itinerary".to_string(),
                "inclusions".to_string(),
                "reviews".to_string(),
            ],
            tie_break,
        )
    }

    #[test]
    fn test_starts_without_active_section() {
        assert_eq!(spy(TieBreak::default()).active(), None);
    }

    #[test]
    fn test_single_entry_activates() {
        let mut spy = spy(TieBreak::LastReported);
        assert!(spy.apply_batch(&[IntersectionSample::new("itinerary", true)]));
        assert_eq!(spy.active(), Some("itinerary"));
        assert!(!spy.apply_batch(&[IntersectionSample::new("itinerary", true)]));
    }

    #[test]
    fn test_simultaneous_entries_last_reported_wins() {
        let mut spy = spy(TieBreak::LastReported);
        spy.apply_batch(&[
            IntersectionSample::new("overview", true),
            IntersectionSample::new("itinerary", true),
        ]);
        assert_eq!(spy.active(), Some("itinerary"));

        spy.apply_batch(&[
            IntersectionSample::new("reviews", true),
            IntersectionSample::new("inclusions", true),
        ]);
        assert_eq!(spy.active(), Some("inclusions"));
    }

    #[test]
    fn test_simultaneous_entries_document_order_wins() {
        let mut spy = spy(TieBreak::DocumentOrder);
        spy.apply_batch(&[
            IntersectionSample::new("reviews", true),
            IntersectionSample::new("itinerary", true),
        ]);
        assert_eq!(spy.active(), Some("itinerary"));
    }

    #[test]
    fn test_leaving_and_unknown_entries_are_ignored() {
        let mut spy = spy(TieBreak::LastReported);
        spy.apply_batch(&[IntersectionSample::new("overview", true)]);
        assert!(!spy.apply_batch(&[
            IntersectionSample::new("overview", false),
            IntersectionSample::new("gallery", true),
        ]));
        assert_eq!(spy.active(), Some("overview"));
    }
}
