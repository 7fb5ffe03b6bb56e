use serde::{Deserialize, Serialize};

/// The fixed set of clients every section is partitioned by.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Client {
    #[default]
    Biga,
    Tricolor,
}

impl Client {
    pub const ALL: [Client; 2] = [Client::Biga, Client::Tricolor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Client::Biga => "Biga",
            Client::Tricolor => "Tricolor",
        }
    }
}

impl std::fmt::Display for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Client {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Biga" => Ok(Client::Biga),
            "Tricolor" => Ok(Client::Tricolor),
            _ => Err(anyhow::anyhow!("Unknown client: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_from_str() {
        assert_eq!("Biga".parse::<Client>().unwrap(), Client::Biga);
        assert_eq!("Tricolor".parse::<Client>().unwrap(), Client::Tricolor);
        assert!("biga".parse::<Client>().is_err());
        assert!("".parse::<Client>().is_err());
    }

    #[test]
    fn test_client_serializes_as_display_name() {
        let json = serde_json::to_string(&Client::Tricolor).unwrap();
        assert_eq!(json, "\"Tricolor\"");
    }
}
