//! `context_from_config` con una estrategia "store": cada build recibe `id` y
//! `created_at` de la estrategia, y el store compartido por el contexto
//! rechaza ids repetidos entre builds.

use ectypes::config::{DefaultStrategy, EctypesConfig};
use ectypes::generators::{email, sequence};
use ectypes::{context_from_config, Blueprint, EctypesError};

#[test]
fn store_config_builds_and_keeps_ids() {
    let cfg = EctypesConfig::from_lookup(|key| match key {
                                             "ECTYPES_DEFAULT_STRATEGY" => Some("store".to_string()),
                                             _ => None,
                                         }).expect("valid config");
    assert_eq!(cfg.default_strategy, DefaultStrategy::Store);

    let mut ctx = context_from_config(&cfg);
    ctx.add(Blueprint::new("User").field("login", sequence("user"))
                                  .field("email", email("example.test")))
       .unwrap();

    let user = tokio_test::block_on(ctx.build("User", None)).unwrap();
    assert_eq!(user["login"], serde_json::json!("user1"));
    assert!(user["id"].is_string());
    assert!(user["created_at"].is_string());
}

#[test]
fn store_config_rejects_repeated_id_across_builds() {
    let cfg = EctypesConfig { default_strategy: DefaultStrategy::Store,
                              ..EctypesConfig::default() };
    let mut ctx = context_from_config(&cfg);
    ctx.add(Blueprint::new("User").field("login", sequence("user"))).unwrap();

    let fixed_id = || serde_json::Map::from_iter([("id".to_string(), serde_json::json!("u-1"))]);
    let first = tokio_test::block_on(ctx.build("User", Some(fixed_id()))).unwrap();
    assert_eq!(first["id"], serde_json::json!("u-1"));

    let err = tokio_test::block_on(ctx.build("User", Some(fixed_id()))).unwrap_err();
    assert!(matches!(err, EctypesError::StrategyFailed { .. }));
    assert_eq!(err.to_string(), "User with id 'u-1' already stored");
}

#[test]
fn default_config_requires_blueprint_strategies() {
    let mut ctx = context_from_config(&EctypesConfig::default());
    let err = ctx.add(Blueprint::new("User")).unwrap_err();
    assert!(matches!(err, EctypesError::MissingStrategy { .. }));
}
