use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed set of analysis dimensions feeding the ensemble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technical,
    Sentiment,
    Fundamental,
    Onchain,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Technical,
        Category::Sentiment,
        Category::Fundamental,
        Category::Onchain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technical => "technical",
            Category::Sentiment => "sentiment",
            Category::Fundamental => "fundamental",
            Category::Onchain => "onchain",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "technical" => Ok(Category::Technical),
            "sentiment" => Ok(Category::Sentiment),
            "fundamental" => Ok(Category::Fundamental),
            "onchain" | "on-chain" => Ok(Category::Onchain),
            _ => anyhow::bail!(
                "Invalid category: {}. Must be one of 'technical', 'sentiment', 'fundamental', 'onchain'",
                s
            ),
        }
    }
}
