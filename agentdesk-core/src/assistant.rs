//! Scripted Assistant
//!
//! Stand-ins for the model calls of the planning demo. Every call builds the
//! prompt a real model would receive, then answers with a fixed reply and
//! extracts the list from it. The reply never depends on the input.
//!
//! | stage                 | reply list | strip          |
//! |-----------------------|------------|----------------|
//! | feature ideas         | numbered   | none           |
//! | task breakdown        | numbered   | none           |
//! | sub-tasks             | bulleted   | none           |
//! | presentation outline  | numbered   | `(Tasks: ...)` |

pub mod prompts;
pub mod responses;

use crate::extraction::{AnnotationStrip, Extractor, ListStyle};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Removes the task summary the outline reply appends to some titles.
pub const TASKS_ANNOTATION: AnnotationStrip = AnnotationStrip::keyword("Tasks:");

/// One scripted assistant interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    FeatureIdeas,
    TaskBreakdown,
    SubTasks,
    PresentationOutline,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::FeatureIdeas,
        Stage::TaskBreakdown,
        Stage::SubTasks,
        Stage::PresentationOutline,
    ];

    /// Kebab-case name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Stage::FeatureIdeas => "feature-ideas",
            Stage::TaskBreakdown => "tasks",
            Stage::SubTasks => "sub-tasks",
            Stage::PresentationOutline => "outline",
        }
    }

    /// The fixed reply for this stage.
    pub fn response(self) -> &'static str {
        match self {
            Stage::FeatureIdeas => responses::FEATURE_IDEAS,
            Stage::TaskBreakdown => responses::TASK_BREAKDOWN,
            Stage::SubTasks => responses::SUB_TASKS,
            Stage::PresentationOutline => responses::PRESENTATION_OUTLINE,
        }
    }

    pub fn extractor(self) -> Extractor {
        match self {
            Stage::FeatureIdeas | Stage::TaskBreakdown => Extractor::new(ListStyle::Numbered),
            Stage::SubTasks => Extractor::new(ListStyle::Bulleted),
            Stage::PresentationOutline => {
                Extractor::with_strip(ListStyle::Numbered, TASKS_ANNOTATION)
            }
        }
    }

    /// Log `prompt`, then extract the items of the fixed reply.
    pub fn answer(self, prompt: &str) -> Vec<String> {
        debug!(stage = self.name(), prompt_len = prompt.len(), "prompt built");
        debug!(stage = self.name(), "{}", prompt);
        self.extractor().extract(self.response())
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized stage name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stage '{0}' (expected one of: feature-ideas, tasks, sub-tasks, outline)")]
pub struct ParseStageError(pub String);

impl FromStr for Stage {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.name() == s)
            .ok_or_else(|| ParseStageError(s.to_string()))
    }
}

/// Product feature ideas found in a chat transcript.
pub fn extract_feature_ideas(chat_log: &str) -> Vec<String> {
    Stage::FeatureIdeas.answer(&prompts::feature_ideas(chat_log))
}

/// High-level project tasks for a feature idea.
pub fn breakdown_feature_into_tasks(feature_idea: &str) -> Vec<String> {
    Stage::TaskBreakdown.answer(&prompts::task_breakdown(feature_idea))
}

/// Concrete sub-tasks for one high-level task.
pub fn suggest_sub_tasks(task: &str) -> Vec<String> {
    Stage::SubTasks.answer(&prompts::sub_tasks(task))
}

/// Slide titles for a stakeholder presentation.
pub fn generate_presentation_outline(feature_idea: &str, tasks: &[String]) -> Vec<String> {
    Stage::PresentationOutline.answer(&prompts::presentation_outline(feature_idea, tasks))
}
