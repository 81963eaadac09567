#![allow(clippy::unwrap_used)]

use raml_model::Scalar;
use raml_model::raml::{self, v08};

use crate::helpers::source_fixtures::{RAML_08_API, SHORTHAND_PARAMETERS_API, parse};

#[test]
fn test_api_metadata() {
    let root = parse(RAML_08_API);
    let api: v08::Api = raml::create_api(&root);
    assert_eq!(api.title().unwrap().as_deref(), Some("Legacy API"));
    assert_eq!(api.version().unwrap(), Some(Scalar::Integer(1)));
    assert_eq!(
        api.base_uri().unwrap().as_deref(),
        Some("http://legacy.example.com")
    );
}

#[test]
fn test_single_media_type() {
    let root = parse(RAML_08_API);
    let api: v08::Api = raml::create_api(&root);
    let media_type = api.media_type().unwrap().unwrap();
    assert_eq!(media_type.value().unwrap().as_deref(), Some("application/json"));
}

#[test]
fn test_resource_method_and_response() {
    let root = parse(RAML_08_API);
    let api: v08::Api = raml::create_api(&root);
    let items = api.resources().unwrap().remove(0);
    assert_eq!(items.resource_path().unwrap().as_deref(), Some("/items"));

    let get = items.methods().unwrap().remove(0);
    assert_eq!(get.method().unwrap().as_deref(), Some("get"));

    let ok = get.responses().unwrap().remove(0);
    assert_eq!(ok.code().unwrap().as_deref(), Some("200"));
    assert_eq!(ok.description().unwrap().as_deref(), Some("Items"));
}

#[test]
fn test_parameter_type_is_single() {
    let root = parse(RAML_08_API);
    let api: v08::Api = raml::create_api(&root);
    let get = api.resources().unwrap()[0].methods().unwrap().remove(0);
    let limit = get.query_parameters().unwrap().remove(0);
    assert_eq!(limit.name().unwrap().as_deref(), Some("limit"));
    assert_eq!(limit.type_name().unwrap().as_deref(), Some("integer"));
    assert_eq!(limit.required().unwrap(), Some(true));
    assert_eq!(limit.default_value().unwrap(), None);
}

#[test]
fn test_shorthand_parameter_type() {
    let root = parse(SHORTHAND_PARAMETERS_API);
    let api: v08::Api = raml::create_api(&root);
    let get = api.resources().unwrap()[0].methods().unwrap().remove(0);
    let q = get.query_parameters().unwrap().remove(0);
    assert_eq!(q.name().unwrap().as_deref(), Some("q"));
    assert_eq!(q.type_name().unwrap().as_deref(), Some("string"));
}
