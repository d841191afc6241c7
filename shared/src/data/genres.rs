//! Genre catalogue behind the project explorer's filter select.

use crate::utils::to_kebab_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreCategory {
    pub name: &'static str,
    pub genres: &'static [&'static str],
}

impl GenreCategory {
    /// `(value, label)` pairs for the `<option>` elements of this group.
    pub fn options(&self) -> Vec<(String, &'static str)> {
        self.genres.iter().map(|g| (to_kebab_case(g), *g)).collect()
    }

    /// Whether `value` is one of this group's option values.
    pub fn contains_value(&self, value: &str) -> bool {
        self.genres.iter().any(|g| to_kebab_case(g) == value)
    }
}

/// Project category to the genre group it is listed under.
const CATEGORY_GROUPS: &[(&str, &str)] = &[
    ("Film", "Film & Video"),
    ("Animation", "Film & Video"),
    ("Music", "Audio & Music"),
    ("Podcast", "Audio & Music"),
    ("Art", "Art & Design"),
    ("Comedy", "Performing Arts"),
];

/// Genre group for a project category, matched case-insensitively.
pub fn group_for_category(category: &str) -> Option<&'static GenreCategory> {
    let (_, group) = CATEGORY_GROUPS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(category))?;
    GENRE_CATEGORIES.iter().find(|g| g.name == *group)
}

pub const GENRE_CATEGORIES: &[GenreCategory] = &[
    GenreCategory {
        name: "Film & Video",
        genres: &[
            "Animation",
            "Documentary",
            "Feature Film",
            "Short Film",
            "Music Video",
            "Web Series",
            "TV Series",
            "Experimental Film",
            "Nollywood",
            "Bollywood",
            "Hollywood",
            "Silent Film",
            "Foreign Language Film",
        ],
    },
    GenreCategory {
        name: "Audio & Music",
        genres: &[
            "Album/LP",
            "EP (Extended Play)",
            "Single",
            "Music Production",
            "Soundtrack / Film Score",
            "Podcast",
            "Audiobook",
            "Radio Show / Audio Drama",
            "Live Concert Recording",
        ],
    },
    GenreCategory {
        name: "Performing Arts",
        genres: &[
            "Theatre / Play",
            "Musical",
            "Dance Performance",
            "Stand-up Comedy Special",
            "Immersive Experience",
            "Circus Arts",
            "Opera",
        ],
    },
    GenreCategory {
        name: "Publishing & Written Word",
        genres: &[
            "Fiction Novel",
            "Non-Fiction Book",
            "Comic Book / Graphic Novel",
            "Art Book",
            "Poetry Collection",
            "Magazine / Zine",
            "Children's Book",
            "Screenplay / Script",
        ],
    },
    GenreCategory {
        name: "Games",
        genres: &[
            "Video Game (Indie)",
            "Mobile Game",
            "Tabletop Game / Board Game",
            "Card Game",
            "Role-Playing Game (RPG)",
        ],
    },
    GenreCategory {
        name: "Digital & New Media",
        genres: &[
            "Storytelling (Interactive/Digital)",
            "Vlogging / YouTube Content",
            "VR / AR Experience",
            "Interactive Narrative",
            "Educational Content Series",
        ],
    },
    GenreCategory {
        name: "Art & Design",
        genres: &[
            "Photography Exhibition/Book",
            "Illustration Series",
            "Fashion Collection/Show",
            "Public Art Installation",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_shape() {
        assert_eq!(GENRE_CATEGORIES.len(), 7);
        assert_eq!(GENRE_CATEGORIES[0].genres.len(), 13);
    }

    #[test]
    fn test_options_use_kebab_values() {
        let options = GENRE_CATEGORIES[1].options();
        assert_eq!(options[0], ("albumlp".to_string(), "Album/LP"));
        assert_eq!(options[1], ("ep-extended-play".to_string(), "EP (Extended Play)"));
    }

    #[test]
    fn test_category_groups_resolve() {
        for category in ["Film", "Animation", "Music", "Podcast", "Art", "comedy"] {
            assert!(group_for_category(category).is_some(), "{category}");
        }
        assert!(group_for_category("Cooking").is_none());

        let group = group_for_category("Comedy").unwrap();
        assert_eq!(group.name, "Performing Arts");
        assert!(group.contains_value("stand-up-comedy-special"));
        assert!(!group.contains_value("feature-film"));
    }
}
