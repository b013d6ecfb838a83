// Shared prompt fragments.
// Each agent keeps its own prompts.rs alongside it; only cross-cutting pieces live here.

/// Persona line shared by the screening and analysis prompts.
pub const RECRUITER_PERSONA: &str = "You are a Human Resources specialist with extensive \
    experience in résumé analysis.";

/// Appended to every prompt whose answer is parsed as a JSON object.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond ONLY with the structured JSON object and use \
    only the keys listed above, spelled exactly as given. \
    Do NOT add explanations or notes outside the JSON.";

/// Substitutes `{name}` placeholders in one pass. Substituted values are never rescanned,
/// so user text containing `{job}` or similar stays as written. Unknown braces are kept.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let matched = vars
            .iter()
            .find(|(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'));
        match matched {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}
