use smallvec::SmallVec;

use crate::error::{StoryError, StoryResult};

/// Notification produced by [`ScrollTracker::observe`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepEvent {
    /// The scroll position crossed into a new step.
    Active(usize),
    /// In-step position, `fraction` in [0, 1].
    Progress { index: usize, fraction: f64 },
}

/// Maps a one-dimensional scroll offset onto step activations.
///
/// Steps occupy contiguous extents along the scroll axis; every
/// observation yields at most one `Active` crossing plus the current
/// `Progress`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTracker {
    // starts of each step, ascending, with the overall end appended
    offsets: Vec<f64>,
    active: Option<usize>,
}

impl ScrollTracker {
    /// `extents` holds `(top, height)` per step, in order. Extents must
    /// tile the scroll axis without gaps.
    pub fn from_extents(extents: &[(f64, f64)]) -> StoryResult<Self> {
        if extents.is_empty() {
            return Err(StoryError::InvalidData(
                "scroll tracker needs at least one step extent".to_owned(),
            ));
        }
        let mut offsets = Vec::with_capacity(extents.len() + 1);
        let mut expected_top = extents[0].0;
        if !expected_top.is_finite() {
            return Err(StoryError::InvalidData(
                "step extents must be finite".to_owned(),
            ));
        }
        for (index, &(top, height)) in extents.iter().enumerate() {
            if !top.is_finite() || !height.is_finite() || height <= 0.0 {
                return Err(StoryError::InvalidData(format!(
                    "step {index} extent must be finite with positive height"
                )));
            }
            if (top - expected_top).abs() > 1e-6 {
                return Err(StoryError::InvalidData(format!(
                    "step {index} leaves a gap in the scroll axis"
                )));
            }
            offsets.push(top);
            expected_top = top + height;
        }
        offsets.push(expected_top);
        Ok(Self {
            offsets,
            active: None,
        })
    }

    /// Equal-height steps starting at offset zero.
    pub fn uniform(steps: usize, step_height: f64) -> StoryResult<Self> {
        if steps == 0 {
            return Err(StoryError::InvalidData(
                "scroll tracker needs at least one step extent".to_owned(),
            ));
        }
        let extents: Vec<(f64, f64)> = (0..steps)
            .map(|index| (index as f64 * step_height, step_height))
            .collect();
        Self::from_extents(&extents)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Folds a scroll position into events. Positions before the first
    /// step clamp to its start; positions past the end clamp to full
    /// progress of the last step.
    pub fn observe(&mut self, scroll: f64) -> StoryResult<SmallVec<[StepEvent; 2]>> {
        if !scroll.is_finite() {
            return Err(StoryError::InvalidData(
                "scroll position must be finite".to_owned(),
            ));
        }
        let last = self.len() - 1;
        let index = self
            .offsets
            .partition_point(|&top| top <= scroll)
            .saturating_sub(1)
            .min(last);
        let top = self.offsets[index];
        let height = self.offsets[index + 1] - top;
        let fraction = ((scroll - top) / height).clamp(0.0, 1.0);

        let mut events = SmallVec::new();
        if self.active != Some(index) {
            self.active = Some(index);
            events.push(StepEvent::Active(index));
        }
        events.push(StepEvent::Progress { index, fraction });
        Ok(events)
    }
}
