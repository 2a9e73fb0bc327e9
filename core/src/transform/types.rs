//! transform/types.rs
//! Step and chain types plus their descriptor spelling.

use std::fmt;
use std::str::FromStr;

use crate::constants::step_names::{BASE64, GZIP, IDENTITY, STEP_SEPARATOR};
use crate::headers::DescriptorError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransformStep {
    /// gzip member at the configured level.
    Gzip,
    /// Standard padded base64 (RFC 4648).
    Base64,
    /// Pass-through.
    Identity,
}

impl TransformStep {
    pub fn name(&self) -> &'static str {
        match self {
            TransformStep::Gzip => GZIP,
            TransformStep::Base64 => BASE64,
            TransformStep::Identity => IDENTITY,
        }
    }
}

impl FromStr for TransformStep {
    type Err = DescriptorError;

    /// An empty token is identity, so `gz>>b64` parses.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            GZIP => Ok(TransformStep::Gzip),
            BASE64 => Ok(TransformStep::Base64),
            IDENTITY | "" => Ok(TransformStep::Identity),
            other => Err(DescriptorError::UnknownStep { step: other.to_string() }),
        }
    }
}

impl fmt::Display for TransformStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformChain {
    steps: Vec<TransformStep>,
}

impl TransformChain {
    pub fn new(steps: Vec<TransformStep>) -> Self {
        Self { steps }
    }

    /// Parse `step>step>...`.
    pub fn parse(chain: &str) -> Result<Self, DescriptorError> {
        let steps = chain
            .split(STEP_SEPARATOR)
            .map(TransformStep::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[TransformStep] {
        &self.steps
    }
}

impl fmt::Display for TransformChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", STEP_SEPARATOR)?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_renders_v1_chain() {
        let chain = TransformChain::parse("gz>b64").unwrap();
        assert_eq!(chain.steps(), &[TransformStep::Gzip, TransformStep::Base64]);
        assert_eq!(chain.to_string(), "gz>b64");
    }

    #[test]
    fn empty_token_is_identity() {
        let chain = TransformChain::parse("gz>>b64").unwrap();
        assert_eq!(chain.steps()[1], TransformStep::Identity);
    }

    #[test]
    fn unknown_token_is_rejected() {
        let err = TransformChain::parse("gz>rot13").unwrap_err();
        assert_eq!(err, DescriptorError::UnknownStep { step: "rot13".into() });
    }
}
