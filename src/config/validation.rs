use regex::Regex;
use std::sync::OnceLock;

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

/// Expand ${VAR_NAME} references using the given lookup. Unknown variables are left as-is.
pub fn expand_with<F>(value: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    env_var_pattern()
        .replace_all(value, |caps: &regex::Captures<'_>| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::expand_with;

    #[test]
    fn expands_known_and_keeps_unknown() {
        let lookup = |name: &str| match name {
            "HOST" => Some("localhost:9000".to_string()),
            _ => None,
        };
        assert_eq!(
            expand_with("http://${HOST}/json?key=${MISSING}", lookup),
            "http://localhost:9000/json?key=${MISSING}"
        );
    }

    #[test]
    fn leaves_plain_strings_alone() {
        assert_eq!(expand_with("http://ip-api.com/json/", |_| None), "http://ip-api.com/json/");
    }
}
