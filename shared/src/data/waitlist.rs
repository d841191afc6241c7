//! Waitlist questionnaire definition.

/// Option label that enables a question's free-text field.
pub const OTHER_OPTION: &str = "Other";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Radio group, one value per key
    SingleSelect,
    /// Checkbox group, a set of values per key
    MultiSelect,
}

impl QuestionKind {
    /// `type` attribute of the rendered `<input>`.
    pub fn input_type(&self) -> &'static str {
        match self {
            QuestionKind::SingleSelect => "radio",
            QuestionKind::MultiSelect => "checkbox",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub key: &'static str,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub options: &'static [&'static str],
    /// Key of the free-text field shown when [`OTHER_OPTION`] is selected.
    pub other_key: Option<&'static str>,
}

impl Question {
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| *o == option)
    }

    /// Numbered label, e.g. `"3. What's your biggest challenge..."`.
    pub fn label(&self, index: usize) -> String {
        format!("{}. {}", index + 1, self.prompt)
    }
}

pub const WAITLIST_QUESTIONS: &[Question] = &[
    Question {
        key: "role",
        prompt: "What's your primary role in the creative industry?",
        kind: QuestionKind::SingleSelect,
        options: &[
            "Independent Filmmaker/Director",
            "Producer/Executive Producer",
            "Screenwriter/Content Creator",
            "Investor/Film Financier",
            "Creative Services Provider (VFX, animation,Post-production, music scores etc.)",
            "Film Enthusiast/Potential Investor",
            OTHER_OPTION,
        ],
        other_key: Some("roleOther"),
    },
    Question {
        key: "experience",
        prompt: "What's your experience with blockchain/crypto?",
        kind: QuestionKind::SingleSelect,
        options: &[
            "Complete beginner - never used crypto",
            "Some knowledge - own crypto but never used DeFi (Decentralized Finance",
            "Moderate - used DeFi platforms before",
            "Advanced - actively developed or invested in blockchain projects",
        ],
        other_key: None,
    },
    Question {
        key: "challenge",
        prompt: "What's your biggest challenge in film and video content financing today?",
        kind: QuestionKind::SingleSelect,
        options: &[
            "Finding initial capital to start projects",
            "Maintaining creative control and digital rights management (DRM) while securing funding",
            "Connecting with the right investors who understand my vision",
            "Managing multiple funding sources and stakeholders",
            "Lack of transparency in traditional funding processes",
            OTHER_OPTION,
        ],
        other_key: Some("challengeOther"),
    },
    Question {
        key: "feature",
        prompt: "Which CineX feature excites you most?",
        kind: QuestionKind::SingleSelect,
        options: &[
            "Co-EP (Collaborative Executive Producer) investment model",
            "NFT-based film asset ownership",
            "Transparent, blockchain-verified funding",
            "Community-driven project selection",
            "Revenue sharing through smart contracts",
        ],
        other_key: None,
    },
    Question {
        key: "investment",
        prompt: "How much would you typically invest in independent film projects?",
        kind: QuestionKind::SingleSelect,
        options: &[
            "$100 - $1,000",
            "$1,000 - $5,000",
            "$5,000 - $25,000",
            "$25,000 - $100,000",
            "$100,000+",
            "I'm primarily seeking funding, not investing",
        ],
        other_key: None,
    },
    Question {
        key: "confidence",
        prompt: "If you had these two features or instances on CineX, what would make you most confident investing or raising funding for your film project through a platform like CineX?",
        kind: QuestionKind::MultiSelect,
        options: &[
            "Previous successful projects on the platform",
            "Clear legal framework and compliance",
            "Strong community of verified creatives",
            "Detailed project analytics and transparency",
            "Integration with traditional film distribution",
        ],
        other_key: None,
    },
    Question {
        key: "heardFrom",
        prompt: "How did you hear about CineX?",
        kind: QuestionKind::SingleSelect,
        options: &[
            "Telegram community",
            "Stacks ecosystem event/community",
            "Social media (specify platform)",
            "Word of mouth/referral",
            "Other blockchain/film community",
        ],
        other_key: None,
    },
    Question {
        key: "updates",
        prompt: "What's the best way to keep you updated on CineX progress?",
        kind: QuestionKind::SingleSelect,
        options: &[
            "Email newsletters",
            "Telegram community updates",
            "In-app notifications",
            "Monthly video updates",
            "Community calls/AMAs (Ask Me Anything)",
        ],
        other_key: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questionnaire_shape() {
        assert_eq!(WAITLIST_QUESTIONS.len(), 8);

        let multi: Vec<&str> = WAITLIST_QUESTIONS
            .iter()
            .filter(|q| q.kind == QuestionKind::MultiSelect)
            .map(|q| q.key)
            .collect();
        assert_eq!(multi, ["confidence"]);

        for question in WAITLIST_QUESTIONS {
            assert_eq!(question.other_key.is_some(), question.has_option(OTHER_OPTION));
        }
    }

    #[test]
    fn test_label_is_numbered_from_one() {
        assert_eq!(
            WAITLIST_QUESTIONS[3].label(3),
            "4. Which CineX feature excites you most?"
        );
    }
}
