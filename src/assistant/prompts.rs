//! Canned assistant text and the system instruction.

use super::{Profile, SiteContext};

/// Returned when the generation service produced no text.
pub const FALLBACK_RESPONSE: &str = "Sorry, I couldn't generate a response.";

/// Shown to the visitor when the generation call fails outright.
pub const APOLOGY_MESSAGE: &str =
    "Sorry, I'm having a little trouble connecting right now. Please try again in a moment.";

/// Scripted opener shown before the visitor says anything.
pub const GREETING: &str = "Hello! I'm Clark's AI assistant. Select a question below to get started.";

/// Starter questions offered next to the greeting.
pub const SUGGESTED_QUESTIONS: [&str; 3] = [
    "What are your top 3 technical skills?",
    "Tell me about your RJS Payroll System project.",
    "Are you available for freelance work?",
];

/// Behavioral policy placed ahead of the context.
#[must_use]
pub fn format_policy(profile: &Profile) -> String {
    let owner = &profile.owner_name;
    format!(
        r#"You are a friendly and helpful AI assistant for {full_name}'s personal portfolio website. Your name is "{assistant}".
Your goal is to answer questions from visitors about {owner}'s skills, projects, blog posts, background, education, achievements, testimonials, and availability.
Be conversational, concise, and professional. Use markdown for formatting, especially for lists. Ensure list items are on new lines.
Use the context provided below to answer questions. If the answer isn't in the context, say that you don't have that information but that {owner} would be happy to answer directly.
When a user asks how to contact {owner} or for a link, you should provide a direct markdown link to the contact section like this: "{link}"."#,
        full_name = profile.full_name,
        assistant = profile.assistant_name,
        link = profile.contact_link,
    )
}

/// Policy followed by every context section under its heading.
#[must_use]
pub fn format_system_instruction(profile: &Profile, context: &SiteContext) -> String {
    format!(
        r"{policy}

{contact}

**Context on About {owner}:**
{about}

**Context on Projects:**
{projects}

**Context on Skills:**
{skills}

**Context on Writings/Blog Posts:**
{articles}

**Context on Testimonials:**
{testimonials}
",
        policy = format_policy(profile),
        owner = profile.owner_name,
        contact = context.contact,
        about = context.about,
        projects = context.projects,
        skills = context.skills,
        articles = context.articles,
        testimonials = context.testimonials,
    )
}
