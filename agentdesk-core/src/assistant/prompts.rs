//! Prompt builders.
//!
//! These produce the text that would be sent to a model for each stage. The
//! scripted assistant logs them and never reads them back, so changing a
//! prompt cannot change a reply.

pub fn feature_ideas(chat_log: &str) -> String {
    format!(
        "Analyze the following chat log and identify 2-3 distinct product feature ideas discussed or implied.
Return these ideas as a concise, numbered list of short text descriptions, each on a new line.
For example:
1. Feature One Description
2. Feature Two Description

Chat Log:
---
{chat_log}
---
Identified Feature Ideas:
"
    )
}

pub fn task_breakdown(feature_idea: &str) -> String {
    format!(
        "Analyze the following product feature idea and generate a list of 3-5 distinct,
high-level project tasks required to implement it.
Present these tasks as a clearly formatted numbered list, each task on a new line.

Feature Idea: \"{feature_idea}\"

High-level tasks:
"
    )
}

pub fn sub_tasks(task: &str) -> String {
    format!(
        "Given the following high-level project task, break it down into 2-4 specific sub-tasks.
Present these sub-tasks as a clearly formatted bulleted or dashed list, each on a new line.

High-Level Task: \"{task}\"

Sub-tasks:
"
    )
}

/// Outline prompt; `tasks` are rendered as a dashed list.
pub fn presentation_outline(feature_idea: &str, tasks: &[String]) -> String {
    let tasks = tasks
        .iter()
        .map(|task| format!("- {}", task))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "I need to create a presentation for a new product feature.
Please generate a list of 5-7 relevant and engaging slide titles for this presentation.
The presentation should have a logical flow, such as:
1.  Introduction/Hook
2.  Problem Statement
3.  Introducing the Solution (our feature)
4.  Key Aspects/Benefits of the Feature
5.  How it Works / Key Project Phases (incorporating the provided tasks)
6.  Call to Action / Next Steps / Q&A

Product Feature Idea:
\"{feature_idea}\"

High-Level Project Tasks:
{tasks}

Please return *only* the slide titles as a numbered list, each on a new line.
For example:
1. Title for Slide 1
2. Title for Slide 2
...
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_embed_their_input() {
        assert!(feature_ideas("Alice: hi").contains("---\nAlice: hi\n---"));
        assert!(task_breakdown("Dark mode").contains("Feature Idea: \"Dark mode\""));
        assert!(sub_tasks("Ship it").contains("High-Level Task: \"Ship it\""));
    }

    #[test]
    fn test_outline_prompt_lists_tasks_as_dashes() {
        let tasks = vec!["Build engine.".to_string(), "Design UI.".to_string()];
        let prompt = presentation_outline("Editor", &tasks);
        assert!(prompt.contains("High-Level Project Tasks:\n- Build engine.\n- Design UI.\n"));
    }
}
