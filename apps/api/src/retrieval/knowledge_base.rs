//! Curated verse sets served when the model call or its answer is unusable.
//!
//! Matching is an ordered list of keyword rules over the lower-cased topic.
//! The first rule with a keyword contained in the topic wins; otherwise the
//! default set (scripture in general) is returned. `lookup` never fails.

use crate::models::Verse;

struct StaticVerse {
    reference: &'static str,
    text: &'static str,
    explanation: &'static str,
}

impl StaticVerse {
    fn to_verse(&self) -> Verse {
        Verse {
            reference: self.reference.to_string(),
            text: self.text.to_string(),
            explanation: self.explanation.to_string(),
        }
    }
}

struct FallbackRule {
    keywords: &'static [&'static str],
    verses: [StaticVerse; 3],
}

impl FallbackRule {
    fn matches(&self, lower_topic: &str) -> bool {
        self.keywords.iter().any(|k| lower_topic.contains(k))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Curated table (priority order)
// ────────────────────────────────────────────────────────────────────────────

static RULES: [FallbackRule; 5] = [
    FallbackRule {
        keywords: &["love", "compassion"],
        verses: [
            StaticVerse {
                reference: "John 3:16",
                text: "For God so loved the world that he gave his one and only Son, that whoever believes in him shall not perish but have eternal life.",
                explanation: "This verse demonstrates the concept of sacrificial love and is often studied in educational contexts about religious expressions of love.",
            },
            StaticVerse {
                reference: "1 Corinthians 13:4-7",
                text: "Love is patient, love is kind. It does not envy, it does not boast, it is not proud. It does not dishonor others, it is not self-seeking, it is not easily angered, it keeps no record of wrongs. Love does not delight in evil but rejoices with the truth. It always protects, always trusts, always hopes, always perseveres.",
                explanation: "This passage is frequently studied in educational settings as it provides a comprehensive definition of love from a biblical perspective.",
            },
            StaticVerse {
                reference: "1 John 4:19",
                text: "We love because he first loved us.",
                explanation: "This verse is studied to understand the theological concept that divine love precedes and enables human love.",
            },
        ],
    },
    FallbackRule {
        keywords: &["forgive", "forgiveness"],
        verses: [
            StaticVerse {
                reference: "Matthew 6:14-15",
                text: "For if you forgive other people when they sin against you, your heavenly Father will also forgive you. But if you do not forgive others their sins, your Father will not forgive your sins.",
                explanation: "This verse from the Sermon on the Mount is studied to understand the reciprocal nature of forgiveness in biblical teaching.",
            },
            StaticVerse {
                reference: "Colossians 3:13",
                text: "Bear with each other and forgive one another if any of you has a grievance against someone. Forgive as the Lord forgave you.",
                explanation: "This verse is examined in educational contexts to understand how forgiveness is modeled after divine forgiveness in Christian theology.",
            },
            StaticVerse {
                reference: "Ephesians 4:32",
                text: "Be kind and compassionate to one another, forgiving each other, just as in Christ God forgave you.",
                explanation: "This verse is studied to understand the connection between compassion and forgiveness in religious ethical teachings.",
            },
        ],
    },
    FallbackRule {
        keywords: &["faith", "trust", "belief"],
        verses: [
            StaticVerse {
                reference: "Hebrews 11:1",
                text: "Now faith is confidence in what we hope for and assurance about what we do not see.",
                explanation: "This verse is often studied in educational contexts as it provides a definition of faith from a biblical perspective.",
            },
            StaticVerse {
                reference: "Romans 10:17",
                text: "Consequently, faith comes from hearing the message, and the message is heard through the word about Christ.",
                explanation: "This verse is examined to understand the development of faith in religious educational contexts.",
            },
            StaticVerse {
                reference: "James 2:26",
                text: "As the body without the spirit is dead, so faith without deeds is dead.",
                explanation: "This verse is studied to understand the relationship between faith and action in religious ethical teachings.",
            },
        ],
    },
    FallbackRule {
        keywords: &["hope", "perseverance", "endurance"],
        verses: [
            StaticVerse {
                reference: "Romans 5:3-5",
                text: "Not only so, but we also glory in our sufferings, because we know that suffering produces perseverance; perseverance, character; and character, hope. And hope does not put us to shame, because God's love has been poured out into our hearts through the Holy Spirit, who has been given to us.",
                explanation: "This passage is studied to understand the development of hope through adversity in religious contexts.",
            },
            StaticVerse {
                reference: "Hebrews 10:23",
                text: "Let us hold unswervingly to the hope we profess, for he who promised is faithful.",
                explanation: "This verse is examined in educational settings to understand the concept of hope based on divine faithfulness.",
            },
            StaticVerse {
                reference: "Romans 15:13",
                text: "May the God of hope fill you with all joy and peace as you trust in him, so that you may overflow with hope by the power of the Holy Spirit.",
                explanation: "This verse is studied to understand the source of hope in Christian theology.",
            },
        ],
    },
    FallbackRule {
        keywords: &["wisdom", "knowledge"],
        verses: [
            StaticVerse {
                reference: "Proverbs 1:7",
                text: "The fear of the LORD is the beginning of knowledge, but fools despise wisdom and instruction.",
                explanation: "This verse is studied in educational contexts to understand the biblical foundation of wisdom and knowledge.",
            },
            StaticVerse {
                reference: "James 1:5",
                text: "If any of you lacks wisdom, you should ask God, who gives generously to all without finding fault, and it will be given to you.",
                explanation: "This verse is examined to understand the source of wisdom in biblical teaching.",
            },
            StaticVerse {
                reference: "Proverbs 3:13-14",
                text: "Blessed are those who find wisdom, those who gain understanding, for she is more profitable than silver and yields better returns than gold.",
                explanation: "This passage is studied to understand the value placed on wisdom in biblical literature.",
            },
        ],
    },
];

static DEFAULT_VERSES: [StaticVerse; 3] = [
    StaticVerse {
        reference: "Psalm 119:105",
        text: "Your word is a lamp for my feet, a light on my path.",
        explanation: "This verse is studied in educational contexts to understand the role of scripture as guidance in religious traditions.",
    },
    StaticVerse {
        reference: "2 Timothy 3:16-17",
        text: "All Scripture is God-breathed and is useful for teaching, rebuking, correcting and training in righteousness, so that the servant of God may be thoroughly equipped for every good work.",
        explanation: "This passage is examined in religious education to understand the purpose and authority of scripture.",
    },
    StaticVerse {
        reference: "Joshua 1:8",
        text: "Keep this Book of the Law always on your lips; meditate on it day and night, so that you may be careful to do everything written in it. Then you will be prosperous and successful.",
        explanation: "This verse is studied to understand the importance of scripture meditation in religious practice.",
    },
];

/// Returns the curated verses for `topic`. Always exactly 3 entries.
pub fn lookup(topic: &str) -> Vec<Verse> {
    let lower_topic = topic.to_lowercase();

    let verses = RULES
        .iter()
        .find(|rule| rule.matches(&lower_topic))
        .map(|rule| &rule.verses)
        .unwrap_or(&DEFAULT_VERSES);

    verses.iter().map(StaticVerse::to_verse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn references(verses: &[Verse]) -> Vec<&str> {
        verses.iter().map(|v| v.reference.as_str()).collect()
    }

    #[test]
    fn test_love_topic_returns_love_set() {
        let verses = lookup("The concept of love in biblical teachings");
        assert_eq!(
            references(&verses),
            vec!["John 3:16", "1 Corinthians 13:4-7", "1 John 4:19"]
        );
    }

    #[test]
    fn test_love_wins_over_lower_priority_keywords() {
        // "forgive", "faith", "hope" and "wisdom" all rank below love.
        let verses = lookup("Forgive with faith, hope, wisdom and LOVE");
        assert_eq!(verses[0].reference, "John 3:16");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(lookup("COMPASSION")[0].reference, "John 3:16");
        assert_eq!(lookup("Forgiveness")[0].reference, "Matthew 6:14-15");
    }

    #[test]
    fn test_each_category_first_reference() {
        assert_eq!(lookup("forgive others")[0].reference, "Matthew 6:14-15");
        assert_eq!(lookup("trust in hard times")[0].reference, "Hebrews 11:1");
        assert_eq!(lookup("belief")[0].reference, "Hebrews 11:1");
        assert_eq!(lookup("endurance")[0].reference, "Romans 5:3-5");
        assert_eq!(lookup("knowledge")[0].reference, "Proverbs 1:7");
    }

    #[test]
    fn test_matching_is_plain_substring() {
        // "forgiving" does not contain "forgive".
        assert_eq!(lookup("forgiving")[0].reference, "Psalm 119:105");
        // "hopeful" does contain "hope".
        assert_eq!(lookup("hopeful")[0].reference, "Romans 5:3-5");
    }

    #[test]
    fn test_unmatched_topic_returns_default_set() {
        let verses = lookup("stewardship of creation");
        assert_eq!(
            references(&verses),
            vec!["Psalm 119:105", "2 Timothy 3:16-17", "Joshua 1:8"]
        );
    }

    #[test]
    fn test_empty_topic_returns_default_set() {
        assert_eq!(lookup("")[0].reference, "Psalm 119:105");
    }

    #[test]
    fn test_every_path_returns_exactly_three_verses() {
        for topic in [
            "love", "forgive", "faith", "hope", "wisdom", "anything else",
        ] {
            assert_eq!(lookup(topic).len(), 3, "topic: {topic}");
        }
    }

    #[test]
    fn test_lookup_is_deterministic() {
        assert_eq!(lookup("hope and perseverance"), lookup("hope and perseverance"));
    }

    #[test]
    fn test_fallback_entries_have_no_blank_fields() {
        let all = RULES.iter().flat_map(|r| r.verses.iter()).chain(DEFAULT_VERSES.iter());
        for verse in all {
            assert!(!verse.reference.is_empty());
            assert!(!verse.text.is_empty());
            assert!(!verse.explanation.is_empty());
        }
    }
}
