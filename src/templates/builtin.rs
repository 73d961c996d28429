// Built-in prompt templates

/// Built-in template names
pub const SCRIPT_GENERATION: &str = "script_generation";
pub const SCRIPT_GENERATION_ENHANCED: &str = "script_generation_enhanced";

/// Get a specific built-in template
pub fn get_builtin_template(name: &str) -> Option<&'static str> {
    match name {
        SCRIPT_GENERATION => Some(SCRIPT_GENERATION_TEMPLATE),
        SCRIPT_GENERATION_ENHANCED => Some(SCRIPT_GENERATION_ENHANCED_TEMPLATE),
        _ => None,
    }
}

/// List all built-in template names
pub fn list_builtin_templates() -> Vec<&'static str> {
    vec![SCRIPT_GENERATION, SCRIPT_GENERATION_ENHANCED]
}

const SCRIPT_GENERATION_TEMPLATE: &str = r#"You are a video scriptwriter. Write a complete script and shot-by-shot storyboard for the video described below.

## Creator's Idea
{{ idea }}

## Details
- **Topic**: {{ topic | default(value="(infer from the idea)") }}
- **Target audience**: {{ audience | default(value="(infer from the idea)") }}
- **Viewer outcome**: {{ goal | default(value="(infer from the idea)") }}
{% if unique_angle %}- **Unique angle**: {{ unique_angle }}
{% endif %}{% if credibility %}- **Credibility**: {{ credibility }}
{% endif %}
{% if answers %}## Discovery Answers
{% for item in answers %}
**Q: {{ item.question }}**
A: {{ item.answer }}
{% endfor %}
{% endif %}
## Output
1. A title and a one-sentence hook
2. The full script, split into scenes
3. For each scene: on-screen visuals, b-roll notes, and approximate duration
4. A closing call to action
"#;

const SCRIPT_GENERATION_ENHANCED_TEMPLATE: &str = r#"You are a senior video strategist and scriptwriter working through the Content Assembly Line.

The creator's input was classified as **{{ level }}** ({{ level_name }}).
{{ reasoning }}

## Creator's Idea
{{ idea }}

## Creative Brief
- **Topic**: {{ topic | default(value="(infer from the idea)") }}
- **Target audience**: {{ audience | default(value="(infer from the idea)") }}
- **Viewer outcome**: {{ goal | default(value="(infer from the idea)") }}
- **Unique angle (UAV)**: {{ unique_angle | default(value="(propose one and state it explicitly)") }}
- **Credibility (SPCL)**: {{ credibility | default(value="(suggest how the creator can establish trust)") }}
{% for key, value in extra %}- **{{ key }}**: {{ value }}
{% endfor %}
{% if answers %}## Discovery Answers
{% for item in answers %}
**Q: {{ item.question }}**
A: {{ item.answer }}
{% endfor %}
{% endif %}
## Assembly Steps
1. Hook: open with the most surprising or high-stakes line for this audience (first 5 seconds)
2. Promise: state the outcome the viewer gets by watching to the end
3. Body: deliver the content in clear beats, each tied back to the unique angle
4. Proof: weave in the credibility signals naturally, never as a résumé
5. Call to action: one specific next step

## Output
- Title options (3)
- Full script with scene markers and timing
- Storyboard table: scene, visuals, on-screen text, b-roll, duration
- Thumbnail concept
"#;
