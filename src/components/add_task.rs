//! Add-task wizard
//!
//! Three steps: name, description, priority. Each step must be valid before
//! the next one is offered. Values already given on the command line skip
//! their step.

use chore_core::{Priority, TaskDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Name,
    Description,
    Priority,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskWizard {
    step: WizardStep,
    name: String,
    description: String,
    priority: Priority,
    priority_chosen: bool,
}

impl Default for AddTaskWizard {
    fn default() -> Self {
        Self {
            step: WizardStep::Name,
            name: String::new(),
            description: String::new(),
            priority: Priority::default(),
            priority_chosen: false,
        }
    }
}

impl AddTaskWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with some answers filled in. Blank values count as missing.
    /// When both name and description are given up front the priority step
    /// is skipped too, falling back to the default priority.
    pub fn prefilled(name: Option<String>, description: Option<String>, priority: Option<Priority>) -> Self {
        let name = name.filter(|n| !n.trim().is_empty());
        let description = description.filter(|d| !d.trim().is_empty());
        let non_interactive = name.is_some() && description.is_some();

        let mut wizard = Self {
            name: name.unwrap_or_default(),
            description: description.unwrap_or_default(),
            priority: priority.unwrap_or_default(),
            priority_chosen: priority.is_some() || non_interactive,
            ..Self::default()
        };
        wizard.step = wizard.first_open_step();
        wizard
    }

    fn first_open_step(&self) -> WizardStep {
        if self.name.is_empty() {
            WizardStep::Name
        } else if self.description.is_empty() {
            WizardStep::Description
        } else if !self.priority_chosen {
            WizardStep::Priority
        } else {
            WizardStep::Done
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn is_done(&self) -> bool {
        self.step == WizardStep::Done
    }

    /// 1-based step number out of 3; `None` when done
    pub fn progress(&self) -> Option<(usize, usize)> {
        let current = match self.step {
            WizardStep::Name => 1,
            WizardStep::Description => 2,
            WizardStep::Priority => 3,
            WizardStep::Done => return None,
        };
        Some((current, 3))
    }

    pub fn prompt(&self) -> Option<&'static str> {
        match self.step {
            WizardStep::Name => Some("Enter the task name (e.g. Grocery Run)"),
            WizardStep::Description => Some("Enter the task description (e.g. We need food for a large dinner)"),
            WizardStep::Priority => Some("Select task priority [low/medium/high] (default low)"),
            WizardStep::Done => None,
        }
    }

    /// Answer the current step. On error the wizard stays on that step.
    pub fn submit(&mut self, input: &str) -> Result<WizardStep, String> {
        let input = input.trim();
        match self.step {
            WizardStep::Name => {
                if input.is_empty() {
                    return Err("Task name is required.".to_string());
                }
                self.name = input.to_string();
            }
            WizardStep::Description => {
                if input.is_empty() {
                    return Err("Task description is required.".to_string());
                }
                self.description = input.to_string();
            }
            WizardStep::Priority => {
                if !input.is_empty() {
                    self.priority = Priority::parse(input).map_err(|e| e.to_string())?;
                }
                self.priority_chosen = true;
            }
            WizardStep::Done => {}
        }
        self.step = self.first_open_step();
        Ok(self.step)
    }

    /// The finished draft, or `None` while steps remain
    pub fn into_draft(self) -> Option<TaskDraft> {
        self.is_done()
            .then(|| TaskDraft::new(self.name, self.description).with_priority(self.priority))
    }
}
