//! RAML 0.8 views.
//!
//! Differs from [`v10`](super::v10) in cardinality: an API has a single
//! default `mediaType` and a parameter a single `type`. Protocols are
//! declared on the API only.

use super::Protocol;
use crate::view_interface;

view_interface! {
    /// Root of a RAML 0.8 API definition.
    pub struct Api("Api") {
        title("title") -> one<String>;
        version("version") -> raw<Scalar>;
        base_uri("baseUri") -> one<String>;
        protocols("protocols") -> many<Protocol>;
        media_type("mediaType") -> view<MimeType>;
        documentation("documentation") -> views<DocumentationItem>;
        resources("resources") -> views<Resource>;
    }
}

view_interface! {
    pub struct MimeType("MimeType") {
        value("value") -> one<String>;
    }
}

view_interface! {
    pub struct DocumentationItem("DocumentationItem") {
        title("title") -> one<String>;
        content("content") -> one<String>;
    }
}

view_interface! {
    pub struct Resource("Resource") {
        relative_uri("relativeUri") -> one<String>;
        resource_path("resourcePath") -> one<String>;
        display_name("displayName") -> one<String>;
        description("description") -> one<String>;
        uri_parameters("uriParameters") -> views<Parameter>;
        methods("methods") -> views<Method>;
        resources("resources") -> views<Resource>;
    }
}

view_interface! {
    pub struct Method("Method") {
        method("method") -> one<String>;
        description("description") -> one<String>;
        query_parameters("queryParameters") -> views<Parameter>;
        headers("headers") -> views<Parameter>;
        responses("responses") -> views<Response>;
    }
}

view_interface! {
    pub struct Response("Response") {
        code("code") -> one<String>;
        description("description") -> one<String>;
        headers("headers") -> views<Parameter>;
    }
}

view_interface! {
    pub struct Parameter("Parameter") {
        name("name") -> one<String>;
        display_name("displayName") -> one<String>;
        description("description") -> one<String>;
        type_name("type") -> one<String>;
        required("required") -> one<bool>;
        default_value("default") -> raw<Scalar>;
        enum_values("enum") -> many<String>;
        example("example") -> raw<Scalar>;
    }
}
