use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

static TOML_REGEX: OnceLock<Regex> = OnceLock::new();

fn toml_regex() -> &'static Regex {
    TOML_REGEX.get_or_init(|| {
        let pattern = r"^[[:space:]]*\+\+\+(\r?\n(?s).*?(?-s))\+\+\+[[:space:]]*(?:$|(?:\r?\n((?s).*(?-s))$))";
        Regex::new(pattern).expect("failed to compile regex for TOML front matter")
    })
}

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("no TOML front matter found")]
    Missing,

    #[error("invalid TOML front matter: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug)]
pub struct RawTomlFrontMatter<'a>(&'a str);

impl RawTomlFrontMatter<'_> {
    fn deserialize<T>(&self) -> Result<T, toml::de::Error>
    where
        T: serde::de::DeserializeOwned,
    {
        toml::from_str(self.0)
    }
}

/// Splits `content` into its `+++`-delimited TOML front matter and the
/// remaining body.
pub fn parse_front_matter<T>(content: &str) -> Result<(T, &str), FrontMatterError>
where
    T: serde::de::DeserializeOwned,
{
    let captures = toml_regex()
        .captures(content)
        .ok_or(FrontMatterError::Missing)?;

    let front_matter = RawTomlFrontMatter(captures.get(1).map_or("", |m| m.as_str()));
    let body = captures.get(2).map_or("", |m| m.as_str());

    Ok((front_matter.deserialize()?, body))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct FrontMatter {
        title: String,
    }

    #[test]
    fn test_parse_front_matter() {
        let text = indoc! {r#"
            +++
            title = "Hello"
            +++
            Some body text.
        "#};

        let (front_matter, body) = parse_front_matter::<FrontMatter>(text).unwrap();

        assert_eq!(
            front_matter,
            FrontMatter {
                title: "Hello".to_string()
            }
        );
        assert_eq!(body, "Some body text.\n");
    }

    #[test]
    fn test_front_matter_without_body() {
        let (front_matter, body) =
            parse_front_matter::<FrontMatter>("+++\ntitle = \"Bare\"\n+++").unwrap();

        assert_eq!(front_matter.title, "Bare");
        assert_eq!(body, "");
    }

    #[test]
    fn test_missing_front_matter() {
        assert!(matches!(
            parse_front_matter::<FrontMatter>("title = \"Hello\""),
            Err(FrontMatterError::Missing)
        ));
    }

    #[test]
    fn test_invalid_front_matter() {
        assert!(matches!(
            parse_front_matter::<FrontMatter>("+++\nname = 1\n+++\n"),
            Err(FrontMatterError::Toml(_))
        ));
    }
}
