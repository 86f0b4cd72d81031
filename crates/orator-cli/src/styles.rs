//! Style and audience guidance tables
//!
//! Plain configuration data consumed by the prompt composer; lookups are
//! case-insensitive and fall back to a neutral entry for unknown names.

const STYLE_TEMPLATES: &[(&str, &str)] = &[
    (
        "motivational",
        "Energetic and uplifting, building momentum toward a clear call to action.",
    ),
    (
        "formal",
        "Measured and precise, with polished transitions and a respectful tone.",
    ),
    (
        "humorous",
        "Light and playful, using gentle humor to keep the audience engaged.",
    ),
    (
        "persuasive",
        "Argument-driven, building a case with evidence and rhetorical questions.",
    ),
    (
        "informative",
        "Clear and structured, explaining ideas step by step without jargon.",
    ),
    (
        "inspirational",
        "Story-led and emotive, painting a vivid picture of what is possible.",
    ),
    (
        "storytelling",
        "Narrative throughout, anchored in a single concrete story arc.",
    ),
    (
        "academic",
        "Rigorous and careful with claims, suited to a lecture or conference setting.",
    ),
    (
        "celebratory",
        "Warm and congratulatory, honoring people and milestones by name.",
    ),
    (
        "solemn",
        "Quiet and dignified, appropriate for remembrance or difficult news.",
    ),
    (
        "conversational",
        "Relaxed and direct, as if speaking with friends over coffee.",
    ),
    (
        "dramatic",
        "Built around tension and release, with deliberate pauses and strong imagery.",
    ),
];

const AUDIENCE_GUIDANCE: &[(&str, &str)] = &[
    (
        "general public",
        "Mixed backgrounds; avoid specialist terms and explain any needed context.",
    ),
    (
        "business professionals",
        "Time-pressed and results-oriented; lead with outcomes and keep it crisp.",
    ),
    (
        "students",
        "Curious but easily distracted; use concrete examples and direct address.",
    ),
    (
        "technical experts",
        "Fluent in the field; precision matters more than simplification.",
    ),
    (
        "children",
        "Short sentences, vivid images, and simple everyday words.",
    ),
    (
        "community gathering",
        "Neighbors and families; warm, inclusive, and locally grounded.",
    ),
];

const DEFAULT_STYLE: &str =
    "Natural and engaging, with a clear opening, body, and closing.";
const DEFAULT_AUDIENCE: &str =
    "A general audience; keep the language accessible and concrete.";

/// Guidance text for a named style, falling back to a neutral default
pub fn style_guidance(name: &str) -> &'static str {
    lookup(STYLE_TEMPLATES, name).unwrap_or(DEFAULT_STYLE)
}

/// Guidance text for a named audience, falling back to a neutral default
pub fn audience_guidance(name: &str) -> &'static str {
    lookup(AUDIENCE_GUIDANCE, name).unwrap_or(DEFAULT_AUDIENCE)
}

/// All style entries as (name, guidance) pairs
pub fn style_entries() -> &'static [(&'static str, &'static str)] {
    STYLE_TEMPLATES
}

/// All audience entries as (name, guidance) pairs
pub fn audience_entries() -> &'static [(&'static str, &'static str)] {
    AUDIENCE_GUIDANCE
}

/// Names of the known styles
pub fn style_names() -> Vec<&'static str> {
    STYLE_TEMPLATES.iter().map(|(name, _)| *name).collect()
}

/// Names of the known audiences
pub fn audience_names() -> Vec<&'static str> {
    AUDIENCE_GUIDANCE.iter().map(|(name, _)| *name).collect()
}

fn lookup(table: &'static [(&'static str, &'static str)], name: &str) -> Option<&'static str> {
    let name = name.trim().to_lowercase();
    table
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, guidance)| *guidance)
}
