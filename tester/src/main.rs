use std::fs;

use catalog::Vlog;
use chrono::{Duration, Utc};

const MOCK_DATA_PATH: &str = "mock_data.json";

const SAMPLES: [(&str, &str, &str, &str); 6] = [
    ("Sunrise over the Dolomites", "Travel", "Maya", "dQw4w9WgXcQ"),
    ("Hand-pulled noodles at home", "Food", "Kenji", "9bZkp7q19f0"),
    ("Building a split keyboard", "Tech", "Priya", "kJQP7kiw5Fk"),
    ("Morning routine that stuck", "Lifestyle", "Tomás", "3JZ_D3ELwOQ"),
    ("Learning the cello at 40", "Music", "Ada", "L_jWHffIx5E"),
    ("Cycling the Danube in a week", "Travel", "Jonas", "fJ9rUzIMcZQ"),
];

fn main() -> anyhow::Result<()> {
    let now = Utc::now();

    let vlogs: Vec<Vlog> = SAMPLES
        .iter()
        .enumerate()
        .map(|(index, (title, category, creator, video))| Vlog {
            id: format!("mock{index}"),
            title: title.to_string(),
            description: format!("{title}, filmed and edited by {creator}. Full story inside."),
            video_url: format!("https://www.youtube.com/embed/{video}"),
            category: category.to_string(),
            creator_name: creator.to_string(),
            likes: (index as i64 * 7) % 11,
            dislikes: index as i64 % 3,
            created_at: now - Duration::days(index as i64 * 9),
        })
        .collect();

    println!("Vlogs written: {}", vlogs.len());

    fs::write(MOCK_DATA_PATH, serde_json::to_vec_pretty(&vlogs)?)?;

    Ok(())
}
