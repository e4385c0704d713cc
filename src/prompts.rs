pub const WEATHER_WORDS: &str = include_str!("../data/prompts/weather_words.txt");
pub const PLACE_TALES: &str = include_str!("../data/prompts/place_tales.txt");
pub const AI_VISION: &str = include_str!("../data/prompts/ai_vision.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}
