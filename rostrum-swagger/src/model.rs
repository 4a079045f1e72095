//! Input records describing a service and its operations
//!
//! These are plain values handed to the builders. They are usually filled in
//! by a framework integration or by `rostrum-config` from a description file.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Status used by upstream collaborators for the implicit fallback response.
pub const DEFAULT_STATUS: &str = "default";

/// Resource path mapped to the operations mounted on it.
///
/// Iteration order is insertion order, so the generated `apis` array is
/// stable for a given input.
pub type Resources = IndexMap<String, Vec<Operation>>;

/// Service level description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub title: String,
    pub api_version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub terms_of_service: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub licence_name: Option<String>,
    #[serde(default)]
    pub licence_url: Option<String>,
    /// Host (and optional port) the operations are served from
    #[serde(default)]
    pub host: Option<String>,
    /// Path fragment every operation is mounted under
    #[serde(default)]
    pub base_path: Option<String>,
}

impl ServiceInfo {
    /// Create a description with only the required fields set
    pub fn new(title: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            api_version: api_version.into(),
            description: None,
            terms_of_service: None,
            contact_email: None,
            licence_name: None,
            licence_url: None,
            host: None,
            base_path: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn terms_of_service(mut self, url: impl Into<String>) -> Self {
        self.terms_of_service = Some(url.into());
        self
    }

    pub fn contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = Some(email.into());
        self
    }

    pub fn licence_name(mut self, name: impl Into<String>) -> Self {
        self.licence_name = Some(name.into());
        self
    }

    pub fn licence_url(mut self, url: impl Into<String>) -> Self {
        self.licence_url = Some(url.into());
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = Some(path.into());
        self
    }
}

/// One HTTP verb bound to a path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// HTTP verb in any case; rendered upper-cased
    pub method: String,
    /// Identifier unique within the path
    pub nickname: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub produces: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub responses: Vec<ResponseDescription>,
}

impl Operation {
    pub fn new(method: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            nickname: nickname.into(),
            summary: None,
            description: None,
            produces: Vec::new(),
            parameters: Vec::new(),
            responses: Vec::new(),
        }
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a produced media type
    pub fn produces(mut self, media_type: impl Into<String>) -> Self {
        self.produces.push(media_type.into());
        self
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Add a response description; use [`DEFAULT_STATUS`] for the fallback response
    pub fn response(mut self, status: impl Into<String>, description: impl Into<String>) -> Self {
        self.responses
            .push(ResponseDescription::new(status, description));
        self
    }
}

/// Operation parameter as reported by the framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Framework category tag such as `PathParameters` or `body`
    pub param_type: String,
    #[serde(default)]
    pub required: bool,
    /// Primitive or model type name
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        param_type: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
            required: false,
            type_name: type_name.into(),
            description: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Documented response of an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDescription {
    /// Numeric status code, or [`DEFAULT_STATUS`]
    pub status: String,
    pub description: String,
}

impl ResponseDescription {
    pub fn new(status: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            description: description.into(),
        }
    }

    /// Whether this is the implicit fallback response
    pub fn is_default(&self) -> bool {
        self.status == DEFAULT_STATUS
    }
}
