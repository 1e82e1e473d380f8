use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const PLACEHOLDER_BASE_URL: &str = "https://via.placeholder.com/150/3b82f6/ffffff";

/// Photo entity - a bar check-in, immutable once stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub bar_name: String,
    pub lat: f64,
    pub lng: f64,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

impl Photo {
    pub fn new(bar_name: String, lat: f64, lng: f64, url: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            bar_name,
            lat,
            lng,
            url,
            uploaded_at: Utc::now(),
        }
    }
}

/// Placeholder image URL labelled with the bar name, used when no upload URL is given
pub fn placeholder_url(bar_name: &str) -> String {
    let label: String = bar_name
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect();
    format!("{}?text={}", PLACEHOLDER_BASE_URL, label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_url_encodes_bar_name() {
        let url = placeholder_url("Joe's Bar");
        assert_eq!(
            url,
            "https://via.placeholder.com/150/3b82f6/ffffff?text=Joe%27s%20Bar"
        );
    }
}
