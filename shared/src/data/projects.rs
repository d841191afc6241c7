//! Placeholder project listing and the funding math behind the project cards.

use crate::data::genres::group_for_category;
use crate::utils::to_kebab_case;

/// Display-only summary of a crowdfunding project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub id: String,
    pub title: String,
    pub creator: String,
    pub category: String,
    pub description: String,
    pub funding_current: u64,
    pub funding_goal: u64,
    pub days_left: u32,
}

impl ProjectSummary {
    /// `current * 100 / goal`, unclamped. A zero goal reports 0.
    pub fn funding_percentage(&self) -> f64 {
        if self.funding_goal == 0 {
            return 0.0;
        }
        self.funding_current as f64 * 100.0 / self.funding_goal as f64
    }

    /// Width of the progress bar fill, in percent of the track.
    pub fn progress_width(&self) -> f64 {
        self.funding_percentage().clamp(0.0, 100.0)
    }

    pub fn days_left_label(&self) -> String {
        match self.days_left {
            1 => "1 day left".to_string(),
            n => format!("{} days left", n),
        }
    }

    /// Case-insensitive match over title, creator and description. Blank queries match.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        [&self.title, &self.creator, &self.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    /// Matches a genre filter value. An empty value means "All Genres".
    ///
    /// A project matches every genre in its category's group, so a "Film"
    /// project shows up under any "Film & Video" genre.
    pub fn matches_genre(&self, genre: &str) -> bool {
        if genre.is_empty()
            || self.category.eq_ignore_ascii_case(genre)
            || to_kebab_case(&self.category) == genre
        {
            return true;
        }

        group_for_category(&self.category).is_some_and(|group| group.contains_value(genre))
    }
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    title: &str,
    creator: &str,
    category: &str,
    description: &str,
    funding_current: u64,
    funding_goal: u64,
    days_left: u32,
) -> ProjectSummary {
    ProjectSummary {
        id: id.to_string(),
        title: title.to_string(),
        creator: creator.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        funding_current,
        funding_goal,
        days_left,
    }
}

/// The fixed six-project listing.
pub fn placeholder_projects() -> Vec<ProjectSummary> {
    vec![
        project(
            "1",
            "Echoes of the Void",
            "Jane Doe",
            "Film",
            "A sci-fi film exploring the mysteries of deep space and human connection.",
            75_000,
            100_000,
            15,
        ),
        project(
            "2",
            "Cyber Sunset",
            "John Smith",
            "Music",
            "A synthwave album inspired by retro-futurism and city nights.",
            45_000,
            50_000,
            30,
        ),
        project(
            "3",
            "The Last Artisan",
            "Emily White",
            "Art",
            "A documentary and gallery show about traditional crafts in the modern world.",
            120_000,
            200_000,
            45,
        ),
        project(
            "4",
            "Forgotten Melodies",
            "Michael Brown",
            "Podcast",
            "A podcast series reviving lost music and the stories behind them.",
            25_000,
            60_000,
            20,
        ),
        project(
            "5",
            "Beneath the Surface",
            "Sarah Green",
            "Animation",
            "An animated short about ocean life and environmental change.",
            95_000,
            100_000,
            5,
        ),
        project(
            "6",
            "City of Glass",
            "David Black",
            "Comedy",
            "A stand-up comedy special about life in a futuristic city.",
            30_000,
            150_000,
            60,
        ),
    ]
}

/// First `count` projects, shown as featured campaigns on the home page.
pub fn featured_projects(count: usize) -> Vec<ProjectSummary> {
    placeholder_projects().into_iter().take(count).collect()
}

/// Apply the explorer's search box and genre selector.
pub fn filter_projects<'a>(
    projects: &'a [ProjectSummary],
    query: &str,
    genre: &str,
) -> Vec<&'a ProjectSummary> {
    projects
        .iter()
        .filter(|p| p.matches_query(query) && p.matches_genre(genre))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_funding(current: u64, goal: u64) -> ProjectSummary {
        let mut p = placeholder_projects().remove(0);
        p.funding_current = current;
        p.funding_goal = goal;
        p
    }

    #[test]
    fn test_funding_percentage_three_quarters() {
        let p = with_funding(75_000, 100_000);
        assert_eq!(p.funding_percentage(), 75.0);
        assert_eq!(crate::utils::format_percentage(p.funding_percentage()), "75%");
    }

    #[test]
    fn test_overfunded_text_unclamped_bar_clamped() {
        let p = with_funding(150_000, 100_000);
        assert_eq!(p.funding_percentage(), 150.0);
        assert_eq!(p.progress_width(), 100.0);
    }

    #[test]
    fn test_zero_goal_reports_zero() {
        let p = with_funding(10, 0);
        assert_eq!(p.funding_percentage(), 0.0);
        assert_eq!(p.progress_width(), 0.0);
    }

    #[test]
    fn test_days_left_label() {
        let mut p = with_funding(1, 2);
        p.days_left = 1;
        assert_eq!(p.days_left_label(), "1 day left");
        p.days_left = 15;
        assert_eq!(p.days_left_label(), "15 days left");
    }

    #[test]
    fn test_placeholder_listing() {
        let projects = placeholder_projects();
        assert_eq!(projects.len(), 6);
        assert_eq!(featured_projects(3).len(), 3);
        assert_eq!(featured_projects(3)[0].title, "Echoes of the Void");
    }

    #[test]
    fn test_filter_by_query_and_genre() {
        let projects = placeholder_projects();

        let hits = filter_projects(&projects, "SYNTHWAVE", "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Cyber Sunset");

        let hits = filter_projects(&projects, "", "podcast");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Cyber Sunset");
        assert_eq!(hits[1].title, "Forgotten Melodies");

        assert_eq!(filter_projects(&projects, "  ", "").len(), 6);
        assert!(filter_projects(&projects, "jane", "music").is_empty());
    }

    #[test]
    fn test_genre_filter_uses_category_group() {
        let projects = placeholder_projects();

        let titles = |genre: &str| -> Vec<String> {
            filter_projects(&projects, "", genre)
                .into_iter()
                .map(|p| p.title.clone())
                .collect()
        };

        assert_eq!(titles("feature-film"), ["Echoes of the Void", "Beneath the Surface"]);
        assert_eq!(titles("stand-up-comedy-special"), ["City of Glass"]);
        assert_eq!(titles("illustration-series"), ["The Last Artisan"]);
        assert!(titles("fiction-novel").is_empty());
    }

    #[test]
    fn test_small_and_near_complete_percentages() {
        let p = with_funding(7, 100);
        assert_eq!(p.funding_percentage(), 7.0);
        assert_eq!(crate::utils::format_percentage(p.funding_percentage()), "7%");

        for (current, expected) in [(29, "29%"), (57, "57%")] {
            let p = with_funding(current, 100);
            assert_eq!(crate::utils::format_percentage(p.funding_percentage()), expected);
        }

        let p = with_funding(999_999, 1_000_000);
        assert_eq!(crate::utils::format_percentage(p.funding_percentage()), "99.9%");
        assert!(p.progress_width() < 100.0);
    }
}
