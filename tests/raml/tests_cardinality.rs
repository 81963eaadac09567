//! One document, two families: accessors whose multiplicity differs.

#![allow(clippy::unwrap_used)]

use raml_model::ResolveError;
use raml_model::raml::{self, v08, v10};
use rstest::rstest;

use crate::helpers::source_fixtures::{MINIMAL_API, RAML_08_API, RAML_10_API, parse};
use crate::helpers::view_helpers::find_resource;

#[rstest]
#[case(RAML_10_API, Some("application/json"))]
#[case(RAML_08_API, Some("application/json"))]
#[case(MINIMAL_API, None)]
fn test_v08_media_type_takes_first(#[case] source: &str, #[case] expected: Option<&str>) {
    let root = parse(source);
    let api: v08::Api = raml::create_api(&root);
    let value = api.media_type().unwrap().map(|m| m.value().unwrap().unwrap());
    assert_eq!(value.as_deref(), expected);
}

#[rstest]
#[case(RAML_10_API, &["application/json", "application/xml"])]
#[case(RAML_08_API, &["application/json"])]
#[case(MINIMAL_API, &[])]
fn test_v10_media_type_lists_all(#[case] source: &str, #[case] expected: &[&str]) {
    let root = parse(source);
    let api: v10::Api = raml::create_api(&root);
    let values: Vec<_> = api
        .media_type()
        .unwrap()
        .iter()
        .map(|m| m.value().unwrap().unwrap())
        .collect();
    assert_eq!(values, expected);
}

#[test]
fn test_v10_type_single_value_is_one_element_list() {
    let root = parse(RAML_08_API);
    let api: v10::Api = raml::create_api(&root);
    let get = api.resources().unwrap()[0].methods().unwrap().remove(0);
    let limit = get.query_parameters().unwrap().remove(0);
    assert_eq!(limit.type_names().unwrap(), vec!["integer".to_string()]);
}

#[test]
fn test_v08_type_over_list_fails_only_that_accessor() {
    let root = parse(RAML_10_API);
    let v10_api: v10::Api = raml::create_api(&root);
    let id_resource = find_resource(v10_api.resources().unwrap(), "/users/{id}");
    assert_eq!(id_resource.uri_parameters().unwrap().len(), 1);

    let api: v08::Api = raml::create_api(&root);
    let users = api.resources().unwrap().remove(0);
    let item = users.resources().unwrap().remove(0);
    let id = item.uri_parameters().unwrap().remove(0);

    let err = id.type_name().unwrap_err();
    assert_eq!(err.accessor(), "type");
    assert!(matches!(err.cause(), Some(ResolveError::Conversion { .. })));
    assert_eq!(id.name().unwrap().as_deref(), Some("id"));
}
