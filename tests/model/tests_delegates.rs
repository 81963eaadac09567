#![allow(clippy::unwrap_used)]

use raml_model::model::{
    BoxedDelegate, Delegate, DelegateResult, DelegateValue, ResolveError, Schema, View, select,
};
use raml_model::view_interface;
use raml_model::{Node, NodeRef};
use rstest::rstest;

view_interface! {
    pub struct Member("Member") {
        name("name") -> one<String>;
    }
}

view_interface! {
    /// A team whose members come from a delegate.
    pub struct Team("Team") {
        name("name") -> one<String>;
        lead("lead") -> view<Member>;
        members("members") -> views<Member>;
        labels("labels") -> many<String>;
        motto("motto") -> view<Member>;
    }
}

/// Returns `people` for both `lead` and `members`, so one representation
/// serves a single-valued and a list-valued accessor.
struct TeamDelegate<'a> {
    node: NodeRef<'a>,
}

impl<'a> Delegate<'a> for TeamDelegate<'a> {
    fn type_name(&self) -> &'static str {
        "TeamDelegate"
    }

    fn node(&self) -> Option<NodeRef<'a>> {
        Some(self.node)
    }

    fn invoke(&self, accessor: &str) -> Option<DelegateResult<'a>> {
        match accessor {
            "lead" | "members" => Some(Ok(DelegateValue::list(select::items(select::property(
                self.node, "people",
            ))))),
            "labels" => Some(Ok("core".into())),
            "motto" => Some(Ok("ship it".into())),
            _ => None,
        }
    }
}

fn team<'a>(node: NodeRef<'a>) -> Result<BoxedDelegate<'a>, ResolveError> {
    Ok(Box::new(TeamDelegate { node }))
}

fn team_schema() -> Schema {
    Schema::new().register_delegate("Team", team)
}

fn people(names: &[&str]) -> Node {
    Node::object([
        ("name", Node::from("Core")),
        (
            "people",
            Node::array(names.iter().map(|n| Node::object([("name", Node::from(*n))]))),
        ),
    ])
}

#[rstest]
#[case(&[], None, 0)]
#[case(&["Ada"], Some("Ada"), 1)]
#[case(&["Ada", "Grace", "Alan"], Some("Ada"), 3)]
fn test_delegate_list_bridges_to_both_cardinalities(
    #[case] names: &[&str],
    #[case] lead: Option<&str>,
    #[case] count: usize,
) {
    let schema = team_schema();
    let root = people(names);
    let team: Team = schema.view(&root);

    let resolved = team.lead().unwrap().map(|m| m.name().unwrap().unwrap());
    assert_eq!(resolved.as_deref(), lead);
    assert_eq!(team.members().unwrap().len(), count);
}

#[test]
fn test_members_keep_delegate_order() {
    let schema = team_schema();
    let root = people(&["Ada", "Grace", "Alan"]);
    let team: Team = schema.view(&root);
    let names: Vec<_> = team
        .members()
        .unwrap()
        .iter()
        .map(|m| m.name().unwrap().unwrap())
        .collect();
    assert_eq!(names, ["Ada", "Grace", "Alan"]);
}

#[test]
fn test_single_delegate_value_read_as_list() {
    let schema = team_schema();
    let root = people(&[]);
    let team: Team = schema.view(&root);
    assert_eq!(team.labels().unwrap(), vec!["core".to_string()]);
}

#[test]
fn test_unimplemented_accessor_falls_through_to_tree() {
    let schema = team_schema();
    let root = people(&[]);
    let team: Team = schema.view(&root);
    assert_eq!(team.instance().delegate_type(), "TeamDelegate");
    assert_eq!(team.name().unwrap().as_deref(), Some("Core"));
}

#[test]
fn test_delegate_string_for_view_accessor_is_string_view() {
    let schema = team_schema();
    let root = people(&[]);
    let team: Team = schema.view(&root);
    let motto = team.motto().unwrap().unwrap();
    assert_eq!(motto.instance().delegate_type(), "StringType");
    // A detached string has no node to read other accessors from
    assert!(motto.name().is_err());
}
