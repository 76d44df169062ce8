//! In-memory planning workspace
//!
//! Holds what the demo produces along the way: the chat transcript, the
//! project tasks and the presentation slides. Everything lives in an owned
//! [`Workspace`]; lists are append-only and accept duplicates.

use serde::Serialize;
use std::fmt;

/// A single line of a chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub sender: String,
    pub text: String,
}

impl ChatMessage {
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
        }
    }

    /// Parse a `Sender: text` transcript line.
    ///
    /// The sender ends at the first `": "`. Blank lines and lines without a
    /// sender return `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let (sender, text) = line.trim().split_once(": ")?;
        let sender = sender.trim();
        if sender.is_empty() {
            return None;
        }
        Some(Self::new(sender, text.trim()))
    }
}

impl fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.sender, self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectTask {
    pub name: String,
    pub sub_tasks: Vec<String>,
    pub status: TaskStatus,
}

impl ProjectTask {
    pub fn new(name: impl Into<String>, sub_tasks: Vec<String>) -> Self {
        Self {
            name: name.into(),
            sub_tasks,
            status: TaskStatus::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationSlide {
    pub title: String,
    pub bullet_points: Vec<String>,
}

impl PresentationSlide {
    pub fn new(title: impl Into<String>, bullet_points: Vec<String>) -> Self {
        Self {
            title: title.into(),
            bullet_points,
        }
    }
}

/// Chat history, project tasks and slides for one demo run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Workspace {
    chat: Vec<ChatMessage>,
    tasks: Vec<ProjectTask>,
    slides: Vec<PresentationSlide>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_chat_message(
        &mut self,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> &ChatMessage {
        self.chat.push(ChatMessage::new(sender, text));
        &self.chat[self.chat.len() - 1]
    }

    /// Append every `Sender: text` line of `transcript`; returns how many were added.
    pub fn load_transcript(&mut self, transcript: &str) -> usize {
        let before = self.chat.len();
        self.chat
            .extend(transcript.lines().filter_map(ChatMessage::parse_line));
        self.chat.len() - before
    }

    pub fn chat_history(&self) -> &[ChatMessage] {
        &self.chat
    }

    pub fn create_project_task(
        &mut self,
        name: impl Into<String>,
        sub_tasks: Vec<String>,
    ) -> &ProjectTask {
        self.tasks.push(ProjectTask::new(name, sub_tasks));
        &self.tasks[self.tasks.len() - 1]
    }

    pub fn project_tasks(&self) -> &[ProjectTask] {
        &self.tasks
    }

    /// First task with the given name.
    pub fn project_task_mut(&mut self, name: &str) -> Option<&mut ProjectTask> {
        self.tasks.iter_mut().find(|task| task.name == name)
    }

    pub fn add_presentation_slide(
        &mut self,
        title: impl Into<String>,
        bullet_points: Vec<String>,
    ) -> &PresentationSlide {
        self.slides.push(PresentationSlide::new(title, bullet_points));
        &self.slides[self.slides.len() - 1]
    }

    pub fn presentation_slides(&self) -> &[PresentationSlide] {
        &self.slides
    }

    pub fn clear(&mut self) {
        self.chat.clear();
        self.tasks.clear();
        self.slides.clear();
    }
}
