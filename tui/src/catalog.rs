use serde::{Deserialize, Serialize};

use crate::error::TuiResult;
use crate::utils::paths;

const ASSET_BASE: &str = "http://commondatastorage.googleapis.com/gtv_template_assets/";

fn default_duration() -> u32 {
    600
}

/// A single playable video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default = "default_duration")]
    pub duration_secs: u32,
}

impl Video {
    fn sample(file: &str, title: &str, description: &str, duration_secs: u32) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            url: format!("{}{}", ASSET_BASE, file),
            duration_secs,
        }
    }
}

/// A named group of videos shown as one menu row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub videos: Vec<Video>,
}

/// The video library backing both screens. Loaded from `catalog.toml` when
/// the user has one, otherwise populated with the built-in sample data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "category")]
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Load the catalog from the user's catalog file
    pub fn load() -> TuiResult<Self> {
        let path = paths::get_catalog_path();
        let content = std::fs::read_to_string(&path)?;
        let catalog: Catalog = toml::from_str(&content)?;
        Ok(catalog)
    }

    /// Load the catalog, falling back to the sample data (and writing it out
    /// as an editable starting point) when no usable file exists
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(catalog) if !catalog.categories.is_empty() => catalog,
            _ => {
                let catalog = Catalog::default();
                let _ = catalog.save_to_file();
                catalog
            }
        }
    }

    /// Save the catalog to the user's catalog file
    pub fn save_to_file(&self) -> TuiResult<()> {
        paths::ensure_config_dir()?;
        let path = paths::get_catalog_path();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn videos(&self, category: usize) -> &[Video] {
        self.categories
            .get(category)
            .map(|c| c.videos.as_slice())
            .unwrap_or(&[])
    }

    pub fn video(&self, category: usize, item: usize) -> Option<&Video> {
        self.videos(category).get(item)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let videos = sample_videos();
        let pick = |indexes: &[usize]| -> Vec<Video> {
            indexes.iter().map(|&i| videos[i].clone()).collect()
        };
        Catalog {
            categories: vec![
                Category {
                    name: "Dev Events".to_string(),
                    videos: pick(&[3, 4, 9, 10, 11]),
                },
                Category {
                    name: "Technology".to_string(),
                    videos: pick(&[5, 6, 7, 8]),
                },
                Category {
                    name: "Conferences".to_string(),
                    videos: pick(&[0, 1, 2, 3]),
                },
                Category {
                    name: "Keynotes".to_string(),
                    videos: pick(&[0, 1, 2, 4]),
                },
                Category {
                    name: "Talks".to_string(),
                    videos: pick(&[5, 7, 8, 12, 13, 14]),
                },
                Category {
                    name: "Events".to_string(),
                    videos: pick(&[9, 10, 11, 12, 13, 14]),
                },
            ],
        }
    }
}

fn sample_videos() -> Vec<Video> {
    vec![
        Video::sample("IO2010-Keynote-day1.mp4", "2010 Day 1 Keynote", "Moscone Center", 4585),
        Video::sample("IO2010-Keynote-day2-android.mp4", "2010 Day 2 Keynote", "Moscone Center", 4210),
        Video::sample("IO2009-Keynote-day1.mp4", "2009 Day 1 Keynote", "Moscone Center", 3975),
        Video::sample("GDD2010-Highlights.mp4", "2010 Highlights", "Google Developer Day", 754),
        Video::sample("GDD2010-BR-Keynote.mp4", "2010 Keynote", "Brazil", 3642),
        Video::sample("ChromeFrame.mp4", "Using Google Chrome Frame", "Alex Russell", 1860),
        Video::sample("CWS-HowTo.mp4", "Uploading your App", "Moscone Center", 512),
        Video::sample(
            "CWS-GettingStarted.mp4",
            "Getting Started with Apps for the Chrome Web Store",
            "Arne Roomann-Kurrik",
            1424,
        ),
        Video::sample(
            "Chrome-Accessibility.mp4",
            "Google Chrome Extensions and Accessibility",
            "Rachel Shearer",
            1736,
        ),
        Video::sample("CF1-AppsMarketplace-Part1.mp4", "Campfire Part 1", "Moscone Center", 842),
        Video::sample("CF1-AppsMarketplace-Part2.mp4", "Campfire Part 2", "Moscone Center", 765),
        Video::sample("CF1-AppsMarketplace-Part3.mp4", "Campfire Part 3", "Moscone Center", 698),
        Video::sample("CF1-AppsMarketplace-Part4.mp4", "Campfire Part 4", "Moscone Center", 912),
        Video::sample("CF1-AppsMarketplace-Part5.mp4", "Campfire Part 5", "Moscone Center", 655),
        Video::sample("CF1-AppsMarketplace-Part6.mp4", "Campfire Part 6", "Moscone Center", 540),
    ]
}
