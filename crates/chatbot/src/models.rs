use std::error::Error;
use std::fmt::{self, Display};
use std::str::FromStr;

/// A symbolic model key, mapped to a provider model identifier.
///
/// Keys are parsed from configuration at startup, so an unknown key
/// fails there instead of at a call site deep inside a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelKey {
    /// OpenAI GPT-4o.
    Gpt4o,
    /// OpenAI GPT-4o mini.
    Gpt4oMini,
    /// Gemma 3 4B instruction-tuned, typically served locally.
    Gemma34b,
}

impl ModelKey {
    /// Returns the model identifier to send to the provider.
    #[inline]
    pub fn identifier(&self) -> &'static str {
        match self {
            ModelKey::Gpt4o => "gpt-4o",
            ModelKey::Gpt4oMini => "gpt-4o-mini",
            ModelKey::Gemma34b => "gemma-3-4b-it",
        }
    }
}

impl FromStr for ModelKey {
    type Err = UnknownModelKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gpt-4o" => Ok(ModelKey::Gpt4o),
            "gpt-4o-mini" => Ok(ModelKey::Gpt4oMini),
            "gemma-3-4b-it" => Ok(ModelKey::Gemma34b),
            _ => Err(UnknownModelKey(s.to_owned())),
        }
    }
}

/// The error returned when parsing an unknown model key.
#[derive(Clone, Debug)]
pub struct UnknownModelKey(String);

impl Display for UnknownModelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown model key: {:?} (expected one of gpt-4o, gpt-4o-mini, \
             gemma-3-4b-it)",
            self.0
        )
    }
}

impl Error for UnknownModelKey {}
