//! The closed set of LLM backends a prompt can be routed to.

use std::fmt;
use std::str::FromStr;

/// Which upstream LLM service handles a prompt.
///
/// Each variant has a distinct request/response shape that the client
/// normalizes into plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Chat-completions API with a role-tagged message list (primary)
    #[default]
    OpenAi,
    /// Inference API taking a single input string (secondary)
    HuggingFace,
}

impl Backend {
    /// All known backends, primary first.
    pub const ALL: [Backend; 2] = [Backend::OpenAi, Backend::HuggingFace];
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::OpenAi => write!(f, "openai"),
            Backend::HuggingFace => write!(f, "huggingface"),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Ok(Backend::OpenAi),
            "huggingface" => Ok(Backend::HuggingFace),
            other => Err(format!("unknown backend: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for backend in Backend::ALL {
            assert_eq!(backend.to_string().parse::<Backend>(), Ok(backend));
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        assert!("claude-at-home".parse::<Backend>().is_err());
    }
}
