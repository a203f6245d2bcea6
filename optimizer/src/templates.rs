use serde::Serialize;

/// A ready-made prompt from the built-in gallery. `prompt` contains
/// `[bracketed]` placeholders the user fills in before optimizing.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PromptTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub prompt: &'static str,
}

/// The fixed template gallery.
#[must_use]
pub fn built_in_templates() -> &'static [PromptTemplate] {
    BUILT_IN_TEMPLATES
}

const BUILT_IN_TEMPLATES: &[PromptTemplate] = &[
    PromptTemplate {
        id: "professional",
        title: "Professional analysis report",
        description: "Produce a detailed professional analysis report on a given topic",
        prompt: "Please provide a detailed professional analysis report on [topic]. The report \
                 should include:\n1. An overview of the current situation\n2. Analysis of key \
                 trends\n3. The main challenges involved\n4. Predictions for future \
                 development\n5. Recommended response strategies\n\nMake sure the analysis is \
                 deep and comprehensive, citing relevant data and research to support your \
                 points.",
    },
    PromptTemplate {
        id: "content",
        title: "Content creation assistant",
        description: "Help create all kinds of content, including articles, stories, and scripts",
        prompt: "Please help me write a [article/story/script] about [topic]. The content should \
                 have the following qualities:\n1. An engaging opening\n2. A fluid structure\n3. \
                 Vivid descriptions\n4. Compelling development\n5. A meaningful ending\n\nThe \
                 style should be [style], suitable for [target audience], roughly [word count] \
                 words.",
    },
    PromptTemplate {
        id: "programming",
        title: "Programming help",
        description: "Prompt template for writing, debugging, and optimizing code",
        prompt: "I am building a [project/feature] in [programming language]. I need to \
                 implement the following:\n\n[feature description]\n\nPlease provide code that \
                 implements it, including:\n1. A clear code structure\n2. Necessary comments\n3. \
                 Efficient algorithms\n4. Handling of potential errors\n\nThe code should follow \
                 the best practices and design patterns of [programming language].",
    },
    PromptTemplate {
        id: "education",
        title: "Study tutoring",
        description: "Template for explanations and tutoring across subjects",
        prompt: "As an experienced [subject] teacher, please explain [concept/topic] to a \
                 student at the [education level] level.\n\nThe explanation should include:\n1. \
                 A simple, accessible definition\n2. A detailed account of the key principles\n3. \
                 Practical real-life examples\n4. Connections to related concepts\n5. \
                 Clarification of common misconceptions\n\nPlease use plain language and offer \
                 analogies to help with difficult ideas.",
    },
    PromptTemplate {
        id: "conversation",
        title: "Conversation scenarios",
        description: "Simulate conversation scenarios such as interviews and debates",
        prompt: "Please simulate a [interview/debate/discussion] about [topic].\n\nYou will play \
                 [role 1], and I will play [role 2].\n\nScenario:\n[describe the background and \
                 conditions in detail]\n\nPlease open the first round of the conversation and \
                 continue it based on my responses. Keep the dialogue in character, \
                 professional, and accurate, and demonstrate [specific trait or skill].",
    },
    PromptTemplate {
        id: "business",
        title: "Business planning",
        description: "Help draft business plans, marketing strategies, and other business documents",
        prompt: "Please create a [business plan/marketing strategy/market analysis] for a \
                 [startup/established] company in the [industry] sector.\n\nCompany \
                 background:\n[company description]\n\nGoals:\n[business goals]\n\nThe document \
                 should include:\n1. Executive summary\n2. Market analysis\n3. Competitor \
                 analysis\n4. Strategy details\n5. Implementation timeline\n6. Budget \
                 considerations\n7. Expected outcomes and evaluation methods\n\nMake sure the \
                 proposal is professional, practical, and grounded in data-driven insight.",
    },
];
