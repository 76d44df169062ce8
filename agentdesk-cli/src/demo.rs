//! The three-stage planning walkthrough.
//!
//! Brainstorming in the comms hub, planning in the task manager, then an
//! outline in the presentation builder. Every assistant reply is scripted;
//! what the user "picks" is recorded in the [`Workspace`] as the story goes.

use crate::narration::{NarrationError, Narrator};
use agentdesk_core::assistant;
use agentdesk_core::workspace::Workspace;
use tracing::info;

pub const MOCK_CHAT_LOG: &str = "
    Alice: Hey team, I'm finding it hard to keep track of action items from our chats.
    Bob: I agree! Messages just get buried. Maybe we could flag messages as tasks?
    Charlie: Or a way to categorize conversations by project? That would help too.
    Alice: Good idea, Charlie! And what about important dates? I missed that meeting reminder yesterday.
    Bob: Oh, a calendar view or integration would be amazing.
    David: I also think the notifications are a bit much. Can we customize them?
    Alice: Yes, like only get notified for direct mentions in some chats.
    ";

/// Used when no feature idea could be extracted from the chat.
pub const FALLBACK_FEATURE_IDEA: &str = "Default Feature Idea if extraction fails";

/// The idea the task manager's scripted replies were written for. It differs
/// from the idea picked in stage 1, and the narrator says so.
pub const REFINED_FEATURE_IDEA: &str = "AI-powered In-Chat Meeting Scheduler & Summarizer";

const SUMMARIZATION_HINT: &str = "chat summarization";

/// What the user ended up with after the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub feature_ideas: Vec<String>,
    pub selected_idea: String,
    pub tasks: Vec<String>,
    pub chosen_task: Option<String>,
    pub sub_tasks: Vec<String>,
    pub outline: Vec<String>,
}

/// The task to break down further: the summarization task if present,
/// otherwise the third task, otherwise the first.
pub fn choose_task(tasks: &[String]) -> Option<&str> {
    tasks
        .iter()
        .find(|task| task.contains(SUMMARIZATION_HINT))
        .or_else(|| tasks.get(2))
        .or_else(|| tasks.first())
        .map(String::as_str)
}

/// First extracted idea, or the fallback when nothing was extracted.
pub fn select_feature_idea(ideas: &[String]) -> &str {
    ideas.first().map_or(FALLBACK_FEATURE_IDEA, String::as_str)
}

pub fn run_demo<N: Narrator + ?Sized>(
    narrator: &mut N,
    workspace: &mut Workspace,
) -> Result<DemoReport, NarrationError> {
    introduction(narrator)?;

    let (feature_ideas, selected_idea) = brainstorm(narrator, workspace)?;
    let (tasks, chosen_task, sub_tasks) = plan(narrator, workspace, &selected_idea)?;
    let outline = outline(narrator, workspace, &tasks)?;

    conclusion(narrator, workspace)?;

    Ok(DemoReport {
        feature_ideas,
        selected_idea,
        tasks,
        chosen_task,
        sub_tasks,
        outline,
    })
}

fn introduction<N: Narrator + ?Sized>(narrator: &mut N) -> Result<(), NarrationError> {
    narrator.header("Welcome to the Agent Computer Demo!")?;
    narrator.say("We'll demonstrate how an AI assistant can collaborate with a user to plan a new product feature,")?;
    narrator.say("from brainstorming through to generating a presentation outline.")?;
    narrator.say("This is a simulation using pre-defined AI responses to showcase the workflow.")?;
    narrator.pause()
}

fn brainstorm<N: Narrator + ?Sized>(
    narrator: &mut N,
    workspace: &mut Workspace,
) -> Result<(Vec<String>, String), NarrationError> {
    info!("stage 1: comms hub");
    narrator.header("Stage 1: Comms Hub (Brainstorming)")?;

    let loaded = workspace.load_transcript(MOCK_CHAT_LOG);
    info!(messages = loaded, "chat transcript loaded");

    narrator.user_action("Pastes the following chat discussion into the Comms Hub:")?;
    narrator.say("-------------------- CHAT LOG START --------------------")?;
    for message in workspace.chat_history() {
        narrator.say(&message.to_string())?;
    }
    narrator.say("--------------------- CHAT LOG END ---------------------")?;
    narrator.linger()?;

    let ideas = assistant::extract_feature_ideas(MOCK_CHAT_LOG);
    narrator.assistant_response(
        "Analyzing the discussion... Here are some potential feature ideas I found:",
        &ideas,
        true,
    )?;

    let selected = select_feature_idea(&ideas).to_string();
    narrator.user_action(&format!("Great, let's proceed with: '{}'", selected))?;
    narrator.pause()?;
    Ok((ideas, selected))
}

fn plan<N: Narrator + ?Sized>(
    narrator: &mut N,
    workspace: &mut Workspace,
    selected_idea: &str,
) -> Result<(Vec<String>, Option<String>, Vec<String>), NarrationError> {
    info!("stage 2: task manager");
    narrator.header("Stage 2: Task Manager (Planning)")?;
    narrator.user_action(&format!(
        "Okay, let's create a project plan for '{}'.",
        selected_idea
    ))?;
    narrator.say(&format!(
        "(Narrator: For a richer task breakdown, let's assume the user refined their idea to: '{}')",
        REFINED_FEATURE_IDEA
    ))?;
    narrator.user_action(&format!(
        "Okay, let's create a project plan for '{}'.",
        REFINED_FEATURE_IDEA
    ))?;

    let tasks = assistant::breakdown_feature_into_tasks(REFINED_FEATURE_IDEA);
    for task in &tasks {
        workspace.create_project_task(task.as_str(), Vec::new());
    }
    narrator.assistant_response(
        &format!(
            "Okay, I've broken down '{}' into these high-level tasks:",
            REFINED_FEATURE_IDEA
        ),
        &tasks,
        true,
    )?;

    let chosen = choose_task(&tasks).map(str::to_string);
    let mut sub_tasks = Vec::new();
    if let Some(task) = &chosen {
        narrator.user_action(&format!("Can you suggest some sub-tasks for: '{}'?", task))?;
        sub_tasks = assistant::suggest_sub_tasks(task);
        if let Some(entry) = workspace.project_task_mut(task) {
            entry.sub_tasks.extend(sub_tasks.iter().cloned());
        }
        narrator.assistant_response("Certainly! Here are some sub-tasks:", &sub_tasks, true)?;
    }

    narrator.pause()?;
    Ok((tasks, chosen, sub_tasks))
}

fn outline<N: Narrator + ?Sized>(
    narrator: &mut N,
    workspace: &mut Workspace,
    tasks: &[String],
) -> Result<Vec<String>, NarrationError> {
    info!("stage 3: presentation builder");
    narrator.header("Stage 3: Presentation Builder (Outline)")?;
    narrator.user_action(&format!(
        "Now, I need to prepare a stakeholder update for '{}'. Can you draft a presentation outline?",
        REFINED_FEATURE_IDEA
    ))?;

    let outline = assistant::generate_presentation_outline(REFINED_FEATURE_IDEA, tasks);
    for title in &outline {
        workspace.add_presentation_slide(title.as_str(), Vec::new());
    }

    narrator.say("(Narrator: The input feature idea and tasks guide the assistant, but the example output is pre-set for a different topic to show a typical structure.)")?;
    narrator.linger()?;
    narrator.assistant_response(
        "Here's a draft presentation outline based on the feature and our task plan:",
        &outline,
        true,
    )?;
    narrator.pause()?;
    Ok(outline)
}

fn conclusion<N: Narrator + ?Sized>(
    narrator: &mut N,
    workspace: &Workspace,
) -> Result<(), NarrationError> {
    narrator.header("Demo Complete!")?;
    narrator.say("As you saw, the (simulated) assistant collaborated with the user throughout the workflow:")?;
    narrator.say("- Assisting with idea generation in the Comms Hub.")?;
    narrator.say("- Helping with task breakdown and sub-task suggestion in the Task Manager.")?;
    narrator.say("- Drafting a presentation outline in the Presentation Builder.")?;
    narrator.say("")?;
    narrator.say(&format!(
        "Workspace: {} chat messages, {} project tasks, {} slides.",
        workspace.chat_history().len(),
        workspace.project_tasks().len(),
        workspace.presentation_slides().len()
    ))?;
    narrator.say("")?;
    narrator.say("This illustrates the 'Agent Computer' concept where AI acts as a helpful partner,")?;
    narrator.say("integrating across different tools and stages of a project.")?;
    narrator.say("")?;
    narrator.say("Thank you for watching!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narration::ConsoleNarrator;
    use agentdesk_config::{load_defaults, PacingConfig};
    use std::io::Cursor;

    /// Records narrator calls instead of rendering them.
    #[derive(Default)]
    struct Recorder {
        headers: Vec<String>,
        responses: Vec<(String, Vec<String>)>,
        pauses: usize,
    }

    impl Narrator for Recorder {
        fn header(&mut self, title: &str) -> Result<(), NarrationError> {
            self.headers.push(title.to_string());
            Ok(())
        }

        fn say(&mut self, _line: &str) -> Result<(), NarrationError> {
            Ok(())
        }

        fn user_action(&mut self, _action: &str) -> Result<(), NarrationError> {
            Ok(())
        }

        fn assistant_response(
            &mut self,
            intro: &str,
            items: &[String],
            _numbered: bool,
        ) -> Result<(), NarrationError> {
            self.responses.push((intro.to_string(), items.to_vec()));
            Ok(())
        }

        fn linger(&mut self) -> Result<(), NarrationError> {
            Ok(())
        }

        fn pause(&mut self) -> Result<(), NarrationError> {
            self.pauses += 1;
            Ok(())
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_choose_task_prefers_summarization() {
        let tasks = strings(&["a", "b", "Implement chat summarization model", "d"]);
        assert_eq!(choose_task(&tasks), Some("Implement chat summarization model"));
    }

    #[test]
    fn test_choose_task_fallbacks() {
        assert_eq!(choose_task(&strings(&["a", "b", "c", "d"])), Some("c"));
        assert_eq!(choose_task(&strings(&["a", "b"])), Some("a"));
        assert_eq!(choose_task(&[]), None);
    }

    #[test]
    fn test_select_feature_idea_falls_back() {
        assert_eq!(select_feature_idea(&[]), FALLBACK_FEATURE_IDEA);
        assert_eq!(select_feature_idea(&strings(&["x", "y"])), "x");
    }

    #[test]
    fn test_demo_report_and_workspace() {
        let mut recorder = Recorder::default();
        let mut workspace = Workspace::new();
        let report = run_demo(&mut recorder, &mut workspace).unwrap();

        assert_eq!(report.selected_idea, "Message tagging or categorization system.");
        assert_eq!(report.tasks.len(), 5);
        assert_eq!(
            report.chosen_task.as_deref(),
            Some("Implement AI model for chat summarization to identify key discussion points and action items.")
        );
        assert_eq!(report.sub_tasks.len(), 4);
        assert_eq!(report.outline.len(), 7);

        assert_eq!(workspace.chat_history().len(), 7);
        assert_eq!(workspace.chat_history()[2].sender, "Charlie");
        assert_eq!(workspace.project_tasks().len(), 5);
        assert_eq!(workspace.project_tasks()[2].sub_tasks, report.sub_tasks);
        assert!(workspace.project_tasks()[0].sub_tasks.is_empty());
        assert_eq!(workspace.presentation_slides().len(), 7);

        assert_eq!(recorder.headers.len(), 5);
        assert_eq!(recorder.responses.len(), 4);
        assert_eq!(recorder.responses[3].1, report.outline);
        assert_eq!(recorder.pauses, 4);
    }

    #[test]
    fn test_console_run_mentions_refined_idea() {
        let config = load_defaults().unwrap();
        let mut narrator = ConsoleNarrator::new(
            Vec::new(),
            Cursor::new(&b""[..]),
            &config.narration,
            PacingConfig::instant(),
        );
        run_demo(&mut narrator, &mut Workspace::new()).unwrap();
        let out = String::from_utf8(narrator.into_inner()).unwrap();

        assert!(out.contains("Alice: Hey team, I'm finding it hard to keep track of action items from our chats."));
        assert!(out.contains("let's assume the user refined their idea to: 'AI-powered In-Chat Meeting Scheduler & Summarizer'"));
        assert!(out.contains("  7. Questions & Open Kitchen Discussion"));
        assert!(out.contains("Workspace: 7 chat messages, 5 project tasks, 7 slides."));
        assert!(!out.contains("Press Enter"));
    }
}
