use crate::error::{EngineError, Result};

/// How a setup step collects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Up to [`MULTISELECT_CAP`] options may be selected together.
    Multiselect,
    /// Exactly one option; selecting another replaces it.
    Single,
    /// Yes/no. Behaves like `Single` with two options.
    Toggle,
}

/// One step of the guided setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDef {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub kind: StepKind,
    pub options: &'static [&'static str],
}

/// Selection cap for multiselect steps.
pub const MULTISELECT_CAP: usize = 3;

/// The fixed setup sequence.
pub const STEPS: &[StepDef] = &[
    StepDef {
        title: "What matters to you?",
        subtitle: "Select top 3 categories",
        kind: StepKind::Multiselect,
        options: &["Education", "Work", "Finance", "Family", "Health", "Social"],
    },
    StepDef {
        title: "Describe your role",
        subtitle: "Helps us tune urgency",
        kind: StepKind::Single,
        options: &["Student", "Professional", "Entrepreneur", "Creator"],
    },
    StepDef {
        title: "Urgency Alerts",
        subtitle: "When should we interrupt?",
        kind: StepKind::Single,
        options: &["Time-sensitive only", "All mentions", "Never"],
    },
    StepDef {
        title: "Financial Updates",
        subtitle: "Track spending?",
        kind: StepKind::Single,
        options: &["Large transactions", "All activity", "None"],
    },
    StepDef {
        title: "Family Priority",
        subtitle: "Always let family through?",
        kind: StepKind::Toggle,
        options: &["Yes", "No"],
    },
    StepDef {
        title: "Distraction Level",
        subtitle: "How strict are we?",
        kind: StepKind::Single,
        options: &["Strict Focus", "Balanced", "Permissive"],
    },
    StepDef {
        title: "Focus Hours",
        subtitle: "Best time for deep work",
        kind: StepKind::Single,
        options: &["Morning", "Afternoon", "Evening"],
    },
];

/// Outcome of an `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Continued,
    Completed,
}

/// The stepwise setup flow. Answers live only as long as the wizard;
/// nothing is persisted past completion in this design.
#[derive(Debug, Clone)]
pub struct Wizard {
    step: usize,
    answers: Vec<Vec<String>>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: 0,
            answers: vec![Vec::new(); STEPS.len()],
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        STEPS.len()
    }

    pub fn current_step(&self) -> &'static StepDef {
        &STEPS[self.step]
    }

    /// Derived progress for the indicator bar, in (0, 1].
    pub fn progress(&self) -> f32 {
        (self.step + 1) as f32 / STEPS.len() as f32
    }

    /// Selected option labels for a step, in selection order.
    pub fn selections(&self, step: usize) -> Result<&[String]> {
        self.answers
            .get(step)
            .map(Vec::as_slice)
            .ok_or_else(|| EngineError::NotFound(format!("onboarding step {step}")))
    }

    /// Select (or toggle) an option on a step.
    ///
    /// Multiselect toggles membership and silently refuses additions
    /// beyond the cap; removal is always allowed. Single and toggle
    /// steps replace the previous answer. An unanswered step is fine.
    pub fn select_option(&mut self, step: usize, option: &str) -> Result<()> {
        let def = STEPS
            .get(step)
            .ok_or_else(|| EngineError::NotFound(format!("onboarding step {step}")))?;
        if !def.options.contains(&option) {
            return Err(EngineError::NotFound(format!(
                "option {option:?} on step {step}"
            )));
        }

        let selected = &mut self.answers[step];
        match def.kind {
            StepKind::Multiselect => {
                if let Some(pos) = selected.iter().position(|s| s == option) {
                    selected.remove(pos);
                } else if selected.len() < MULTISELECT_CAP {
                    selected.push(option.to_string());
                }
                // At the cap the addition is dropped without error.
            }
            StepKind::Single | StepKind::Toggle => {
                selected.clear();
                selected.push(option.to_string());
            }
        }
        Ok(())
    }

    /// Move to the next step, or signal completion from the final one.
    /// No step requires an answer.
    pub fn advance(&mut self) -> Advance {
        if self.step + 1 < STEPS.len() {
            self.step += 1;
            Advance::Continued
        } else {
            Advance::Completed
        }
    }

    /// Bail out of setup from any step, discarding everything gathered.
    pub fn skip(&mut self) -> Advance {
        self.reset();
        Advance::Completed
    }
}
