//! RAML 1.0 views.
//!
//! `mediaType`, `protocols` and parameter `type` are lists here; a single
//! value in the document reads as a one-element list.

use super::Protocol;
use crate::view_interface;

view_interface! {
    /// Root of a RAML 1.0 API definition.
    pub struct Api("Api") {
        title("title") -> one<String>;
        description("description") -> one<String>;
        /// The version exactly as written (`v1`, `1.0`, `2`).
        version("version") -> raw<Scalar>;
        base_uri("baseUri") -> one<String>;
        protocols("protocols") -> many<Protocol>;
        /// Default media types, in declaration order.
        media_type("mediaType") -> views<MimeType>;
        documentation("documentation") -> views<DocumentationItem>;
        resources("resources") -> views<Resource>;
    }
}

view_interface! {
    /// A media type such as `application/json`.
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
    /// A resource and everything nested under it.
    pub struct Resource("Resource") {
        relative_uri("relativeUri") -> one<String>;
        /// Path from the API root, e.g. `/users/{id}`.
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
        /// Path of the resource declaring this method.
        resource_path("resourcePath") -> one<String>;
        display_name("displayName") -> one<String>;
        description("description") -> one<String>;
        protocols("protocols") -> many<Protocol>;
        query_parameters("queryParameters") -> views<Parameter>;
        headers("headers") -> views<Parameter>;
        responses("responses") -> views<Response>;
    }
}

view_interface! {
    pub struct Response("Response") {
        /// Status code as written in the document.
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
        type_names("type") -> many<String>;
        required("required") -> one<bool>;
        default_value("default") -> raw<Scalar>;
        enum_values("enum") -> many<String>;
        example("example") -> raw<Scalar>;
    }
}
