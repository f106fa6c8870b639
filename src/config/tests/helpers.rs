//! Shared test helpers for configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::BoardConfig;

/// Configuration source, lowest precedence first.
#[derive(Debug, Clone, Copy)]
pub enum Layer {
    Defaults,
    File,
    Environment,
    Cli,
}

impl Layer {
    fn push(self, composer: &mut MergeComposer, value: Value) {
        match self {
            Self::Defaults => composer.push_defaults(value),
            Self::File => composer.push_file(value, None),
            Self::Environment => composer.push_environment(value),
            Self::Cli => composer.push_cli(value),
        }
    }
}

/// Merges `layers` in order into a [`BoardConfig`].
pub fn merge_layers(layers: Vec<(Layer, Value)>) -> BoardConfig {
    let mut composer = MergeComposer::new();
    for (layer, value) in layers {
        layer.push(&mut composer, value);
    }

    BoardConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}
