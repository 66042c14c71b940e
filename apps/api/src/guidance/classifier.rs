//! Suggestion classifier — an ordered rule table per category.
//!
//! Each category owns a list of `(needles, result set)` rules checked top to
//! bottom against the lower-cased query. The first rule with any needle
//! contained in the query wins; otherwise the table's fallback set applies.
//! Pure and deterministic: no I/O, no randomness, no state across calls.
//!
//! The sets are placeholders until a real recommendation backend exists.

use crate::guidance::models::{Category, ResultItem};

/// Replaced by the raw query when a card is rendered.
const QUERY_PLACEHOLDER: &str = "{query}";

// ────────────────────────────────────────────────────────────────────────────
// Rule table types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct CardTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub link: Option<&'static str>,
}

impl CardTemplate {
    fn render(&self, query: &str) -> ResultItem {
        ResultItem {
            title: self.title.replace(QUERY_PLACEHOLDER, query),
            description: self.description.replace(QUERY_PLACEHOLDER, query),
            link: self.link.map(str::to_string),
        }
    }
}

#[derive(Debug)]
pub struct ResultSet {
    pub name: &'static str,
    pub cards: &'static [CardTemplate],
}

#[derive(Debug)]
pub struct Rule {
    /// Lower-case substrings; any one of them matches.
    pub needles: &'static [&'static str],
    pub set: &'static ResultSet,
}

impl Rule {
    fn matches(&self, query_lower: &str) -> bool {
        self.needles.iter().any(|n| query_lower.contains(n))
    }
}

#[derive(Debug)]
pub struct RuleTable {
    pub rules: &'static [Rule],
    pub fallback: &'static ResultSet,
}

impl RuleTable {
    pub fn for_category(category: Category) -> &'static RuleTable {
        match category {
            Category::JobApps => &JOB_APPS,
            Category::RelatedCareers => &RELATED_CAREERS,
            Category::SuggestMajor => &SUGGEST_MAJOR,
        }
    }

    /// First matching rule's set, or the fallback.
    pub fn select(&self, query: &str) -> &'static ResultSet {
        let query_lower = query.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&query_lower))
            .map(|rule| rule.set)
            .unwrap_or(self.fallback)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Result sets
// ────────────────────────────────────────────────────────────────────────────

pub static JOB_POSTINGS: ResultSet = ResultSet {
    name: "job_postings",
    cards: &[
        CardTemplate {
            title: "Junior {query} Role",
            description: "Entry level position at TechCorp. Great for recent graduates.",
            link: Some("#"),
        },
        CardTemplate {
            title: "Senior {query} Specialist",
            description: "Leading industry player seeks experienced professional.",
            link: Some("#"),
        },
        CardTemplate {
            title: "{query} Intern",
            description: "Summer internship program with mentorship opportunities.",
            link: Some("#"),
        },
    ],
};

pub static SOFTWARE_CAREERS: ResultSet = ResultSet {
    name: "software_careers",
    cards: &[
        CardTemplate {
            title: "Software Engineer",
            description: "Design and build software applications.",
            link: None,
        },
        CardTemplate {
            title: "Data Scientist",
            description: "Analyze complex data to help make decisions.",
            link: None,
        },
        CardTemplate {
            title: "Product Manager",
            description: "Oversee the development of products.",
            link: None,
        },
    ],
};

pub static DESIGN_CAREERS: ResultSet = ResultSet {
    name: "design_careers",
    cards: &[
        CardTemplate {
            title: "UX Designer",
            description: "Design user experiences for products.",
            link: None,
        },
        CardTemplate {
            title: "Graphic Designer",
            description: "Create visual concepts to communicate ideas.",
            link: None,
        },
        CardTemplate {
            title: "Art Director",
            description: "Manage design staff and creative vision.",
            link: None,
        },
    ],
};

pub static GENERIC_CAREERS: ResultSet = ResultSet {
    name: "generic_careers",
    cards: &[
        CardTemplate {
            title: "Consultant",
            description: "Professional consultant in the field of {query}.",
            link: None,
        },
        CardTemplate {
            title: "Researcher",
            description: "Academic or industrial research in {query}.",
            link: None,
        },
        CardTemplate {
            title: "Teacher/Professor",
            description: "Educating others about {query}.",
            link: None,
        },
    ],
};

pub static TECHNICAL_MAJORS: ResultSet = ResultSet {
    name: "technical_majors",
    cards: &[
        CardTemplate {
            title: "Computer Science",
            description: "Study of computation, automation, and information.",
            link: None,
        },
        CardTemplate {
            title: "Software Engineering",
            description: "Systematic application of engineering to software.",
            link: None,
        },
        CardTemplate {
            title: "Mathematics",
            description: "Abstract science of number, quantity, and space.",
            link: None,
        },
    ],
};

pub static HEALTH_MAJORS: ResultSet = ResultSet {
    name: "health_majors",
    cards: &[
        CardTemplate {
            title: "Biology",
            description: "Study of life and living organisms.",
            link: None,
        },
        CardTemplate {
            title: "Chemistry",
            description: "Scientific study of the properties and behavior of matter.",
            link: None,
        },
        CardTemplate {
            title: "Nursing",
            description: "Profession focused on the care of individuals.",
            link: None,
        },
    ],
};

pub static GENERIC_MAJORS: ResultSet = ResultSet {
    name: "generic_majors",
    cards: &[
        CardTemplate {
            title: "Business Administration",
            description: "Versatile degree for many corporate roles.",
            link: None,
        },
        CardTemplate {
            title: "Communications",
            description: "Focus on how messages are created and interpreted.",
            link: None,
        },
        CardTemplate {
            title: "Liberal Arts",
            description: "Broad education in arts and sciences.",
            link: None,
        },
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Rule tables (order is the tie-break)
// ────────────────────────────────────────────────────────────────────────────

static JOB_APPS: RuleTable = RuleTable {
    rules: &[],
    fallback: &JOB_POSTINGS,
};

static RELATED_CAREERS: RuleTable = RuleTable {
    rules: &[
        Rule {
            needles: &["computer", "software"],
            set: &SOFTWARE_CAREERS,
        },
        Rule {
            needles: &["art", "design"],
            set: &DESIGN_CAREERS,
        },
    ],
    fallback: &GENERIC_CAREERS,
};

static SUGGEST_MAJOR: RuleTable = RuleTable {
    rules: &[
        Rule {
            needles: &["developer", "engineer"],
            set: &TECHNICAL_MAJORS,
        },
        Rule {
            needles: &["doctor", "nurse"],
            set: &HEALTH_MAJORS,
        },
    ],
    fallback: &GENERIC_MAJORS,
};

// ────────────────────────────────────────────────────────────────────────────
// Entry points
// ────────────────────────────────────────────────────────────────────────────

/// Selected set name plus the rendered cards, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub set: &'static str,
    pub results: Vec<ResultItem>,
}

pub fn classify(category: Category, query: &str) -> Classification {
    let set = RuleTable::for_category(category).select(query);
    Classification {
        set: set.name,
        results: set.cards.iter().map(|card| card.render(query)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(items: &[ResultItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_every_category_returns_three_items() {
        for category in Category::ALL {
            for query in ["History", "Software Engineer", "x", "Graphic Design", "Nurse"] {
                assert_eq!(classify(category, query).results.len(), 3, "{category} / {query}");
            }
        }
    }

    #[test]
    fn test_job_apps_titles_contain_query() {
        let query = "Marine Biologist";
        let results = classify(Category::JobApps, query).results;
        assert!(results.iter().all(|r| r.title.contains(query)));
        assert_eq!(
            titles(&results),
            vec![
                "Junior Marine Biologist Role",
                "Senior Marine Biologist Specialist",
                "Marine Biologist Intern",
            ]
        );
        assert!(results.iter().all(|r| r.link.as_deref() == Some("#")));
    }

    #[test]
    fn test_job_apps_ignores_keywords() {
        assert_eq!(classify(Category::JobApps, "Software Developer").set, "job_postings");
    }

    #[test]
    fn test_related_careers_computer_science() {
        let c = classify(Category::RelatedCareers, "Computer Science");
        assert_eq!(c.set, "software_careers");
        assert_eq!(
            titles(&c.results),
            vec!["Software Engineer", "Data Scientist", "Product Manager"]
        );
        assert!(c.results.iter().all(|r| r.link.is_none()));
    }

    #[test]
    fn test_related_careers_graphic_design() {
        let c = classify(Category::RelatedCareers, "Graphic Design");
        assert_eq!(c.set, "design_careers");
        assert_eq!(
            titles(&c.results),
            vec!["UX Designer", "Graphic Designer", "Art Director"]
        );
    }

    #[test]
    fn test_related_careers_history_falls_back() {
        let c = classify(Category::RelatedCareers, "History");
        assert_eq!(c.set, "generic_careers");
        assert_eq!(
            c.results[0].description,
            "Professional consultant in the field of History."
        );
        assert_eq!(c.results[1].description, "Academic or industrial research in History.");
        assert_eq!(c.results[2].description, "Educating others about History.");
    }

    #[test]
    fn test_related_careers_first_rule_wins() {
        // Contains both "software" and "design"; software rule is listed first.
        assert_eq!(
            classify(Category::RelatedCareers, "Software Design").set,
            "software_careers"
        );
    }

    #[test]
    fn test_related_careers_substring_match() {
        // "Martial" contains "art".
        assert_eq!(classify(Category::RelatedCareers, "Martial").set, "design_careers");
    }

    #[test]
    fn test_suggest_major_software_engineer() {
        let c = classify(Category::SuggestMajor, "Software Engineer");
        assert_eq!(c.set, "technical_majors");
        assert_eq!(
            titles(&c.results),
            vec!["Computer Science", "Software Engineering", "Mathematics"]
        );
    }

    #[test]
    fn test_suggest_major_doctor() {
        let c = classify(Category::SuggestMajor, "Doctor");
        assert_eq!(c.set, "health_majors");
        assert_eq!(titles(&c.results), vec!["Biology", "Chemistry", "Nursing"]);
    }

    #[test]
    fn test_suggest_major_artist_falls_back() {
        let c = classify(Category::SuggestMajor, "Artist");
        assert_eq!(c.set, "generic_majors");
        assert_eq!(
            titles(&c.results),
            vec!["Business Administration", "Communications", "Liberal Arts"]
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(classify(Category::SuggestMajor, "NURSE").set, "health_majors");
        assert_eq!(classify(Category::RelatedCareers, "cOmPuTeR").set, "software_careers");
    }

    #[test]
    fn test_fallback_interpolates_raw_query() {
        let c = classify(Category::RelatedCareers, "Ancient HISTORY");
        assert!(c.results[0].description.contains("Ancient HISTORY"));
    }

    #[test]
    fn test_classification_is_deterministic() {
        for category in Category::ALL {
            assert_eq!(classify(category, "Web Developer"), classify(category, "Web Developer"));
        }
    }

    #[test]
    fn test_all_tables_have_three_card_sets() {
        for category in Category::ALL {
            let table = RuleTable::for_category(category);
            assert_eq!(table.fallback.cards.len(), 3);
            assert!(table.rules.iter().all(|r| r.set.cards.len() == 3));
        }
    }
}
