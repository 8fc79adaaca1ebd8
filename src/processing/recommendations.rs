//! Learning suggestions for missing skills

pub const ALL_SET_MESSAGE: &str = "You're all set!";

/// One suggested course line per missing skill, in the order given
pub fn recommend<I, S>(missing_skills: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<String> = missing_skills
        .into_iter()
        .map(|skill| {
            let title = title_case(skill.as_ref());
            format!("- Learn {}: Intro to {} (Coursera/Udemy)", title, title)
        })
        .collect();

    if lines.is_empty() {
        ALL_SET_MESSAGE.to_string()
    } else {
        lines.join("\n")
    }
}

/// Upper-case each letter that follows a non-letter, lower-case the rest
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            result.push(c);
            prev_is_letter = false;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_empty() {
        assert_eq!(recommend(Vec::<String>::new()), ALL_SET_MESSAGE);
    }

    #[test]
    fn test_recommend_single_skill() {
        let text = recommend(["python"]);
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("Python"));
        assert_eq!(text, "- Learn Python: Intro to Python (Coursera/Udemy)");
    }

    #[test]
    fn test_recommend_keeps_given_order() {
        let text = recommend(["sql", "docker"]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Sql"));
        assert!(lines[1].contains("Docker"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("POWER bi"), "Power Bi");
    }
}
