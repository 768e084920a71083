use relay::core::{ChainConfig, RelayError};
use relay::prelude::*;

trait Stage: Action<Vec<String>> {
    fn label(&self) -> &str;
}

#[derive(Clone)]
struct Push(&'static str);

impl Action<Vec<String>> for Push {
    fn call(&mut self, log: &mut Vec<String>) -> bool {
        log.push(self.0.to_string());
        true
    }
}

impl Stage for Push {
    fn label(&self) -> &str {
        self.0
    }
}

#[test]
fn facade_reexports_every_crate() {
    let config = ChainConfig::default().with_run_name("facade");
    assert_eq!(config.display_name(), "facade");

    let err = RelayError::EmptyValue;
    assert!(matches!(err, RelayError::EmptyValue));

    let _: relay::chain::Nil = relay::chain::Nil;
    let _: relay::polymorphic::PolymorphicValue<str> = PolymorphicValue::empty();
}

#[test]
fn polymorphic_stage_runs_in_chain() {
    let mut stage: PolymorphicValue<dyn Stage> = polymorphic!(Push("first") => dyn Stage);
    assert_eq!(stage.label(), "first");

    let mut log = Vec::new();
    stage.call(&mut log);

    let mut chain: DynamicChain<Vec<String>> = DynamicChain::from_action(Push("second"));
    chain |= Try::new(gate(|log: &mut Vec<String>| log.len() > 5))
        .fallback(effect(|log: &mut Vec<String>| log.push("short".to_string())));
    chain.invoke(&mut log);

    assert_eq!(log, vec!["first", "second", "short"]);
}

#[test]
fn empty_value_is_recoverable() {
    let stage: PolymorphicValue<dyn Stage> = PolymorphicValue::empty();
    assert_eq!(stage.try_get().err(), Some(RelayError::EmptyValue));
}

#[test]
fn config_round_trips_through_json() {
    let config = ChainConfig::default()
        .with_tags(vec!["nightly".to_string()])
        .with_metadata("retries", serde_json::json!(3));

    let text = serde_json::to_string(&config).unwrap();
    let parsed: ChainConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
