use serde::{Deserialize, Serialize};

use crate::models::{MonitorId, TagSet};

/// Placement applied to newly managed windows whose identity matches.
///
/// Each present field must be a substring of the corresponding window
/// property; absent fields match anything.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Rule {
    pub class: Option<String>,
    pub instance: Option<String>,
    pub title: Option<String>,
    pub tags: TagSet,
    pub floating: bool,
    pub monitor: Option<MonitorId>,
}

impl Rule {
    #[must_use]
    pub fn matches(&self, class: &str, instance: &str, title: &str) -> bool {
        fn contains(pattern: Option<&String>, value: &str) -> bool {
            pattern.map_or(true, |p| value.contains(p.as_str()))
        }
        contains(self.title.as_ref(), title)
            && contains(self.class.as_ref(), class)
            && contains(self.instance.as_ref(), instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rule_matches_everything() {
        assert!(Rule::default().matches("Firefox", "Navigator", "broken"));
    }

    #[test]
    fn fields_match_as_substrings() {
        let rule = Rule {
            class: Some("irefo".to_owned()),
            title: Some("Mozilla".to_owned()),
            ..Rule::default()
        };
        assert!(rule.matches("Firefox", "Navigator", "Start - Mozilla Firefox"));
        assert!(!rule.matches("Firefox", "Navigator", "broken"));
        assert!(!rule.matches("Gimp", "gimp", "Mozilla"));
    }
}
