//! Canned assistant replies.
//!
//! Each reply is written the way a model would answer the matching prompt in
//! [`super::prompts`]: a line of prose followed by the requested list.

pub const FEATURE_IDEAS: &str = "
    Okay, I've analyzed the chat log. Here are the feature ideas:
    1. Message tagging or categorization system.
    2. Enhanced notification preferences for different chat types.
    3. Calendar integration for scheduling discussed events.
    ";

pub const TASK_BREAKDOWN: &str = "
    Okay, here are the high-level tasks for \"AI-powered In-Chat Meeting Scheduler & Summarizer\":
    1. Design and integrate natural language processing (NLP) for understanding scheduling requests and chat content.
    2. Develop calendar integration module for checking availability and booking meetings.
    3. Implement AI model for chat summarization to identify key discussion points and action items.
    4. Create user interface elements for initiating scheduling, viewing summaries, and managing settings.
    5. Build backend infrastructure to support asynchronous processing of summarization and scheduling tasks.
    ";

pub const SUB_TASKS: &str = "
    Understood. Here are some sub-tasks for \"Implement AI model for chat summarization to identify key discussion points and action items\":
    - Research and select appropriate pre-trained summarization models (e.g., T5, BART).
    - Fine-tune selected model on a dataset of representative chat conversations.
    - Develop an API endpoint for the summarization service.
    - Integrate the summarization API with the main application chat interface.
    ";

pub const PRESENTATION_OUTLINE: &str = "
    Okay, based on the feature and the provided tasks, here's a suggested presentation outline:

    1.  Igniting Culinary Creativity: Introducing Your Personal AI Recipe Chef
    2.  The Daily Dilemma: What's for Dinner? (And Why It's Hard)
    3.  Solution on the Menu: The AI-Powered Recipe Recommendation Engine
    4.  Taste the Future: Key Features & Personalized Benefits
    5.  From Concept to Kitchen: Our Development Journey (Tasks: User Profiling, Database Integration, Algorithm Training, UI Design)
    6.  Beyond the Recipe: Expanding Your Culinary Horizons
    7.  Questions & Open Kitchen Discussion
    ";
