#![allow(clippy::unwrap_used)]

use raml_model::Scalar;
use raml_model::model::View;
use raml_model::raml::{self, Protocol, v10};
use rstest::rstest;

use crate::helpers::source_fixtures::{MINIMAL_API, RAML_10_API, SHORTHAND_PARAMETERS_API, parse};
use crate::helpers::view_helpers::{find_resource, resource_paths};

#[test]
fn test_api_metadata() {
    let root = parse(RAML_10_API);
    let api: v10::Api = raml::create_api(&root);
    assert_eq!(api.title().unwrap().as_deref(), Some("My API"));
    assert_eq!(api.version().unwrap(), Some(Scalar::from("v1")));
    assert_eq!(
        api.base_uri().unwrap().as_deref(),
        Some("https://api.example.com/{version}")
    );
    assert_eq!(api.description().unwrap(), None);
}

#[test]
fn test_protocols_are_normalized() {
    let root = parse(RAML_10_API);
    let api: v10::Api = raml::create_api(&root);
    assert_eq!(api.protocols().unwrap(), vec![Protocol::Http, Protocol::Https]);
}

#[test]
fn test_documentation_items() {
    let root = parse(RAML_10_API);
    let api: v10::Api = raml::create_api(&root);
    let titles: Vec<_> = api
        .documentation()
        .unwrap()
        .iter()
        .map(|d| d.title().unwrap().unwrap())
        .collect();
    assert_eq!(titles, ["Home", "Limits"]);
}

#[test]
fn test_top_level_resources_in_order() {
    let root = parse(RAML_10_API);
    let api: v10::Api = raml::create_api(&root);
    let resources = api.resources().unwrap();
    assert_eq!(resource_paths(&resources), ["/users", "/orders"]);
    assert_eq!(resources[0].instance().delegate_type(), "Resource");
}

#[test]
fn test_nested_resource_path() {
    let root = parse(RAML_10_API);
    let api: v10::Api = raml::create_api(&root);
    let users = &api.resources().unwrap()[0];
    let nested = users.resources().unwrap();
    assert_eq!(resource_paths(&nested), ["/users/{id}"]);
    assert_eq!(nested[0].relative_uri().unwrap().as_deref(), Some("/{id}"));
}

#[rstest]
#[case("/users", Some("Users"))]
#[case("/orders", Some("/orders"))]
#[case("/users/{id}", Some("/{id}"))]
fn test_display_name(#[case] path: &str, #[case] expected: Option<&str>) {
    let root = parse(RAML_10_API);
    let api: v10::Api = raml::create_api(&root);
    let resource = find_resource(api.resources().unwrap(), path);
    assert_eq!(resource.display_name().unwrap().as_deref(), expected);
}

#[rstest]
#[case("/users", &["get"])]
#[case("/users/{id}", &["delete"])]
#[case("/orders", &[])]
fn test_methods(#[case] path: &str, #[case] expected: &[&str]) {
    let root = parse(RAML_10_API);
    let api: v10::Api = raml::create_api(&root);
    let resource = find_resource(api.resources().unwrap(), path);
    let methods: Vec<_> = resource
        .methods()
        .unwrap()
        .iter()
        .map(|m| m.method().unwrap().unwrap())
        .collect();
    assert_eq!(methods, expected);
}

#[test]
fn test_responses_keyed_by_code() {
    let root = parse(RAML_10_API);
    let api: v10::Api = raml::create_api(&root);
    let users = find_resource(api.resources().unwrap(), "/users");
    let get = users.methods().unwrap().remove(0);
    let responses = get.responses().unwrap();
    let codes: Vec<_> = responses.iter().map(|r| r.code().unwrap().unwrap()).collect();
    assert_eq!(codes, ["200", "404"]);
    assert_eq!(responses[0].description().unwrap().as_deref(), Some("OK"));
    assert_eq!(responses[1].description().unwrap(), None);
}

#[test]
fn test_query_parameter() {
    let root = parse(RAML_10_API);
    let api: v10::Api = raml::create_api(&root);
    let users = find_resource(api.resources().unwrap(), "/users");
    let get = users.methods().unwrap().remove(0);
    let params = get.query_parameters().unwrap();
    assert_eq!(params.len(), 1);
    let page = &params[0];
    assert_eq!(page.name().unwrap().as_deref(), Some("page"));
    assert_eq!(page.display_name().unwrap().as_deref(), Some("page"));
    assert_eq!(page.type_names().unwrap(), vec!["integer".to_string()]);
    assert_eq!(page.required().unwrap(), Some(false));
    assert_eq!(page.default_value().unwrap(), Some(Scalar::Integer(1)));
    assert!(page.enum_values().unwrap().is_empty());
}

#[test]
fn test_uri_parameter_with_type_list() {
    let root = parse(RAML_10_API);
    let api: v10::Api = raml::create_api(&root);
    let item = find_resource(api.resources().unwrap(), "/users/{id}");
    let id = item.uri_parameters().unwrap().remove(0);
    assert_eq!(
        id.type_names().unwrap(),
        vec!["string".to_string(), "number".to_string()]
    );
}

#[test]
fn test_repeated_traversal_is_identical() {
    let root = parse(RAML_10_API);
    let api: v10::Api = raml::create_api(&root);
    let first = resource_paths(&api.resources().unwrap());
    let second = resource_paths(&api.resources().unwrap());
    assert_eq!(first, second);
}

#[test]
fn test_minimal_document() {
    let root = parse(MINIMAL_API);
    let api: v10::Api = raml::create_api(&root);
    assert_eq!(api.title().unwrap().as_deref(), Some("Bare"));
    assert!(api.resources().unwrap().is_empty());
    assert!(api.media_type().unwrap().is_empty());
    assert!(api.protocols().unwrap().is_empty());
    assert_eq!(api.version().unwrap(), None);
}

#[test]
fn test_schema_view_matches_create_api() {
    let root = parse(RAML_10_API);
    let via_schema: v10::Api = raml::schema().view(&root);
    let direct: v10::Api = raml::create_api(&root);
    assert_eq!(
        resource_paths(&via_schema.resources().unwrap()),
        resource_paths(&direct.resources().unwrap())
    );
}

#[rstest]
#[case("/users", "get")]
#[case("/users/{id}", "delete")]
fn test_method_knows_its_resource_path(#[case] path: &str, #[case] verb: &str) {
    let root = parse(RAML_10_API);
    let api: v10::Api = raml::create_api(&root);
    let resource = find_resource(api.resources().unwrap(), path);
    let method = resource.methods().unwrap().remove(0);
    assert_eq!(method.method().unwrap().as_deref(), Some(verb));
    assert_eq!(method.resource_path().unwrap().as_deref(), Some(path));
}

#[test]
fn test_shorthand_query_parameters() {
    let root = parse(SHORTHAND_PARAMETERS_API);
    let api: v10::Api = raml::create_api(&root);
    let get = api.resources().unwrap()[0].methods().unwrap().remove(0);
    let params = get.query_parameters().unwrap();

    let names: Vec<_> = params.iter().map(|p| p.name().unwrap().unwrap()).collect();
    assert_eq!(names, ["q", "page"]);
    assert_eq!(params[0].instance().delegate_type(), "Parameter");
    assert_eq!(params[1].type_names().unwrap(), vec!["integer".to_string()]);
    assert_eq!(params[1].display_name().unwrap().as_deref(), Some("page"));
    assert_eq!(params[1].required().unwrap(), None);
}
