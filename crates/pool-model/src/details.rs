use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Token metadata stored on-chain as a JSON string next to the pool.
///
/// The creation form writes this payload and every card reads it back, so
/// the key casing is part of the on-chain format: social links and the tag
/// are capitalized, the rest is lowercase. Missing keys decode to empty
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolDetails {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: String,
    pub video: String,
    #[serde(rename = "Website")]
    pub website: String,
    #[serde(rename = "Twitter")]
    pub twitter: String,
    #[serde(rename = "Telegram")]
    pub telegram: String,
    #[serde(rename = "Tag")]
    pub tag: String,
}

impl PoolDetails {
    pub fn parse(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Payload for the creation call.
    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Whether the detail page gets a video panel.
    pub fn has_video(&self) -> bool {
        !self.video.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_on_chain_keys() {
        let details = PoolDetails::parse(
            r#"{
                "name": "Falco",
                "symbol": "FAL",
                "description": "launch test",
                "image": "https://img.example/falco.png",
                "Website": "https://falco.example",
                "Twitter": "https://x.com/falco",
                "Tag": "Meme"
            }"#,
        )
        .unwrap();

        assert_eq!(details.name, "Falco");
        assert_eq!(details.website, "https://falco.example");
        assert_eq!(details.tag, "Meme");

        // Keys absent from the payload decode to empty strings.
        assert_eq!(details.telegram, "");
        assert!(!details.has_video());
    }

    #[test]
    fn test_round_trips_through_json() {
        let details = PoolDetails {
            name: "Falco".to_string(),
            symbol: "FAL".to_string(),
            tag: "DeFi".to_string(),
            video: "https://video.example/f".to_string(),
            ..PoolDetails::default()
        };

        let json = details.to_json().unwrap();
        assert!(json.contains(r#""Tag":"DeFi""#));
        assert_eq!(PoolDetails::parse(&json).unwrap(), details);
    }

    #[test]
    fn test_rejects_malformed_payload() {
        assert!(PoolDetails::parse("{ name: Falco }").is_err());
    }
}
