use tracing::{debug, trace};

use crate::error::{StoryError, StoryResult};

use super::{StageContext, StepHandler};

struct NamedStep {
    name: String,
    handler: Box<dyn StepHandler>,
}

/// Ordered list of story steps plus the catch-up bookkeeping.
///
/// Activation replays every skipped step so the stage always reflects
/// the cumulative effect of steps `0..=index`, no matter how fast or
/// in which direction the reader scrolled.
pub struct Storyboard {
    steps: Vec<NamedStep>,
    last_activated: Option<usize>,
}

/// Collects steps in authored order; indices are assigned by position.
#[derive(Default)]
pub struct StoryboardBuilder {
    steps: Vec<NamedStep>,
}

impl StoryboardBuilder {
    #[must_use]
    pub fn step(mut self, name: impl Into<String>, handler: impl StepHandler + 'static) -> Self {
        self.steps.push(NamedStep {
            name: name.into(),
            handler: Box::new(handler),
        });
        self
    }

    pub fn build(self) -> StoryResult<Storyboard> {
        if self.steps.is_empty() {
            return Err(StoryError::InvalidData(
                "storyboard needs at least one step".to_owned(),
            ));
        }
        Ok(Storyboard {
            steps: self.steps,
            last_activated: None,
        })
    }
}

impl Storyboard {
    #[must_use]
    pub fn builder() -> StoryboardBuilder {
        StoryboardBuilder::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn last_activated(&self) -> Option<usize> {
        self.last_activated
    }

    #[must_use]
    pub fn step_name(&self, index: usize) -> Option<&str> {
        self.steps.get(index).map(|step| step.name.as_str())
    }

    /// Runs the enters between the previous activation (exclusive) and
    /// `index` (inclusive), descending when scrolling backwards.
    pub fn activate(&mut self, index: usize, ctx: &mut StageContext<'_>) -> StoryResult<()> {
        if index >= self.steps.len() {
            return Err(StoryError::StepOutOfRange {
                index,
                len: self.steps.len(),
            });
        }
        match self.last_activated {
            Some(previous) if previous == index => {}
            Some(previous) if index > previous => {
                for step in previous + 1..=index {
                    self.enter_step(step, ctx)?;
                }
            }
            Some(previous) => {
                for step in (index..previous).rev() {
                    self.enter_step(step, ctx)?;
                }
            }
            None => {
                for step in 0..=index {
                    self.enter_step(step, ctx)?;
                }
            }
        }
        self.last_activated = Some(index);
        Ok(())
    }

    /// Forwards in-step scroll progress, clamped to [0, 1].
    pub fn update(
        &self,
        index: usize,
        progress: f64,
        ctx: &mut StageContext<'_>,
    ) -> StoryResult<()> {
        let step = self
            .steps
            .get(index)
            .ok_or(StoryError::StepOutOfRange {
                index,
                len: self.steps.len(),
            })?;
        if !progress.is_finite() {
            return Err(StoryError::InvalidData(format!(
                "progress for step `{}` must be finite",
                step.name
            )));
        }
        let progress = progress.clamp(0.0, 1.0);
        trace!(index, step = step.name.as_str(), progress, "step update");
        step.handler.update(ctx, progress)
    }

    fn enter_step(&self, index: usize, ctx: &mut StageContext<'_>) -> StoryResult<()> {
        let step = &self.steps[index];
        debug!(index, step = step.name.as_str(), "step enter");
        step.handler.enter(ctx)
    }
}
