use strum::EnumIter;

/// Diet advice tier for an amount of burned calories.
#[derive(Clone, Copy, Debug, EnumIter, Eq, Hash, PartialEq)]
pub enum CalorieBand {
    LightSnack,
    BalancedSnack,
    SmallMeal,
    HeartyMeal,
}

impl CalorieBand {
    /// Bands are right-open: 200, 500 and 800 belong to the upper band.
    /// Anything below 200, negative values included, is a light snack.
    pub fn for_calories(calories: f64) -> Self {
        if calories < 200.0 {
            CalorieBand::LightSnack
        } else if calories < 500.0 {
            CalorieBand::BalancedSnack
        } else if calories < 800.0 {
            CalorieBand::SmallMeal
        } else {
            CalorieBand::HeartyMeal
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            CalorieBand::LightSnack => {
                "Consider light snacks like a piece of fruit or a small handful of nuts."
            }
            CalorieBand::BalancedSnack => {
                "You could have a balanced snack, such as yogurt with granola or a smoothie."
            }
            CalorieBand::SmallMeal => {
                "A small meal with lean protein, whole grains, and vegetables would be beneficial."
            }
            CalorieBand::HeartyMeal => {
                "A hearty meal with a good balance of protein, carbs, and fats is recommended."
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MediaLink {
    pub title: &'static str,
    pub thumbnail: Option<&'static str>,
    pub link: &'static str,
}

pub const VIDEOS: [MediaLink; 2] = [
    MediaLink {
        title: "Top 5 Benefits of Exercise | Why Exercise is Important",
        thumbnail: Some("https://img.youtube.com/vi/dQw4w9WgXcQ/mqdefault.jpg"),
        link: "https://www.youtube.com/user/FitnessBlender",
    },
    MediaLink {
        title: "Exercise and Weight Loss | The Ultimate Guide",
        thumbnail: Some("https://img.youtube.com/vi/3C2WThErFZ0/mqdefault.jpg"),
        link: "https://www.youtube.com/user/yogawithadriene",
    },
];

pub const ARTICLES: [MediaLink; 2] = [
    MediaLink {
        title: "10 Benefits of Regular Exercise",
        thumbnail: None,
        link: "https://www.healthline.com/nutrition/10-benefits-of-exercise",
    },
    MediaLink {
        title: "How Much Exercise Do You Really Need?",
        thumbnail: None,
        link: "https://www.mayoclinic.org/healthy-lifestyle/fitness/in-depth/exercise/art-20048389",
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Recommendation {
    pub calories: f64,
    pub band: CalorieBand,
    pub videos: &'static [MediaLink],
    pub articles: &'static [MediaLink],
}

impl Recommendation {
    pub fn for_calories(calories: f64) -> Self {
        Self {
            calories,
            band: CalorieBand::for_calories(calories),
            videos: &VIDEOS,
            articles: &ARTICLES,
        }
    }

    pub fn advice(&self) -> &'static str {
        self.band.advice()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn bands_calories() {
        let test_data = [
            (-50.0, CalorieBand::LightSnack),
            (0.0, CalorieBand::LightSnack),
            (150.0, CalorieBand::LightSnack),
            (199.99, CalorieBand::LightSnack),
            (200.0, CalorieBand::BalancedSnack),
            (499.5, CalorieBand::BalancedSnack),
            (500.0, CalorieBand::SmallMeal),
            (799.0, CalorieBand::SmallMeal),
            (799.9, CalorieBand::SmallMeal),
            (800.0, CalorieBand::HeartyMeal),
            (1500.0, CalorieBand::HeartyMeal),
            (f64::INFINITY, CalorieBand::HeartyMeal),
        ];

        for (i, (calories, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(
                CalorieBand::for_calories(calories),
                expected_output,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn every_band_has_distinct_advice() {
        let advice: HashSet<_> = CalorieBand::iter().map(|band| band.advice()).collect();

        assert_eq!(advice.len(), CalorieBand::iter().count());
    }

    #[test]
    fn recommendation_carries_static_media() {
        let low = Recommendation::for_calories(10.0);
        let high = Recommendation::for_calories(10_000.0);

        assert_eq!(low.videos, high.videos);
        assert_eq!(low.articles, high.articles);
        assert_eq!(low.videos.len(), 2);
        assert_eq!(low.articles.len(), 2);
        assert!(low.videos.iter().all(|video| video.thumbnail.is_some()));
        assert!(low.articles.iter().all(|article| article.thumbnail.is_none()));
    }

    #[test]
    fn recommendation_advice_follows_band() {
        let recommendation = Recommendation::for_calories(650.0);

        assert_eq!(recommendation.band, CalorieBand::SmallMeal);
        assert_eq!(recommendation.advice(), CalorieBand::SmallMeal.advice());
    }
}
