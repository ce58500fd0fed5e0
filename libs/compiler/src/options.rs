//! # Options
//!
//! Run-time switches for one compilation and the stage selector used by
//! [`crate::emit`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tiny_ast::GeneratorOptions;
use tiny_parser::LexerOptions;

/// Options for [`crate::compile_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompileOptions {
    pub lexer: LexerOptions,
    pub generator: GeneratorOptions,
}

impl CompileOptions {
    /// Accept string literals that run to end of input.
    pub fn lenient_strings(mut self, enabled: bool) -> Self {
        self.lexer.allow_unterminated_strings = enabled;
        self
    }

    /// Escape `\` and `"` in generated string literals.
    pub fn escape_strings(mut self, enabled: bool) -> Self {
        self.generator.escape_strings = enabled;
        self
    }
}

/// Pipeline artifact to stop at and print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// Token sequence, as JSON.
    Tokens,
    /// Source syntax tree, as JSON.
    SourceTree,
    /// Target syntax tree, as JSON.
    TargetTree,
    /// Generated code.
    #[default]
    Code,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Tokens, Stage::SourceTree, Stage::TargetTree, Stage::Code];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Tokens => "tokens",
            Self::SourceTree => "source-tree",
            Self::TargetTree => "target-tree",
            Self::Code => "code",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown stage '{0}', expected one of tokens, source-tree, target-tree, code")]
pub struct UnknownStage(pub String);

impl FromStr for Stage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.name() == s)
            .ok_or_else(|| UnknownStage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names_round_trip() {
        for stage in Stage::ALL {
            assert_eq!(stage.name().parse::<Stage>(), Ok(stage));
        }
        assert_eq!("ast".parse::<Stage>(), Err(UnknownStage("ast".to_string())));
    }

    #[test]
    fn test_stage_serde_matches_name() {
        let json = serde_json::to_string(&Stage::SourceTree).unwrap();
        assert_eq!(json, "\"source-tree\"");
    }

    #[test]
    fn test_option_builders() {
        let options = CompileOptions::default().lenient_strings(true).escape_strings(true);
        assert!(options.lexer.allow_unterminated_strings);
        assert!(options.generator.escape_strings);
        assert_eq!(CompileOptions::default().generator, GeneratorOptions::default());
    }
}
