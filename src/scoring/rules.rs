/// Hand-tuned confidence adjustments evaluated in priority order.
///
/// A table is scanned top to bottom against the upper-cased team names and
/// the first matching rule wins. Adding or removing a heuristic is a data
/// change only.
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub enum Matcher {
    /// Either team name contains the token
    Contains(&'static str),
    /// A single team name contains every token
    TeamContainsAll(&'static [&'static str]),
    /// One team contains the first token and the other the second, either order
    Fixture(&'static str, &'static str),
}

impl Matcher {
    fn matches(&self, home: &str, away: &str) -> bool {
        match self {
            Matcher::Contains(token) => home.contains(token) || away.contains(token),
            Matcher::TeamContainsAll(tokens) => {
                let all_in = |team: &str| tokens.iter().all(|t| team.contains(t));
                all_in(home) || all_in(away)
            }
            Matcher::Fixture(a, b) => {
                (home.contains(a) && away.contains(b)) || (home.contains(b) && away.contains(a))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Rule {
    pub name: &'static str,
    pub matcher: Matcher,
    /// Confidence delta in percentage points
    pub adjustment: i32,
}

impl Rule {
    pub const fn new(name: &'static str, matcher: Matcher, adjustment: i32) -> Self {
        Rule {
            name,
            matcher,
            adjustment,
        }
    }
}

/// First rule in `rules` matching the pair, compared case-insensitively.
pub fn first_match<'a>(rules: &'a [Rule], home: &str, away: &str) -> Option<&'a Rule> {
    if rules.is_empty() {
        return None;
    }
    let home = home.to_uppercase();
    let away = away.to_uppercase();
    rules.iter().find(|r| r.matcher.matches(&home, &away))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &[Rule] = &[
        Rule::new("melbourne_derby", Matcher::Fixture("MELBOURNE VICTORY", "MELBOURNE CITY"), -5),
        Rule::new("victory_home_form", Matcher::TeamContainsAll(&["MELBOURNE", "VICTORY"]), 28),
        Rule::new("sydney", Matcher::Contains("SYDNEY"), 6),
    ];

    #[test]
    fn first_matching_rule_wins() {
        let rule = first_match(RULES, "Melbourne Victory", "Melbourne City").unwrap();
        assert_eq!(rule.name, "melbourne_derby");
    }

    #[test]
    fn fixture_matches_either_order() {
        let rule = first_match(RULES, "Melbourne City", "Melbourne Victory").unwrap();
        assert_eq!(rule.name, "melbourne_derby");
    }

    #[test]
    fn contains_all_requires_one_team_with_every_token() {
        let rule = first_match(RULES, "Melbourne Victory", "Perth Glory").unwrap();
        assert_eq!(rule.adjustment, 28);
        // tokens split across two teams do not count
        assert!(first_match(RULES, "Melbourne City", "Victory Park").is_none());
    }

    #[test]
    fn case_insensitive() {
        let rule = first_match(RULES, "perth glory", "sydney fc").unwrap();
        assert_eq!(rule.name, "sydney");
    }

    #[test]
    fn no_match_or_empty_table() {
        assert!(first_match(RULES, "Adelaide United", "Perth Glory").is_none());
        assert!(first_match(&[], "Melbourne Victory", "Sydney FC").is_none());
    }
}
