//! Swagger 1.2 document types
//!
//! Field declaration order is the key order of the rendered document.

use crate::error::{Result, SwaggerError};
use serde::{Deserialize, Serialize};

/// Version literal written to `swaggerVersion`
pub const SWAGGER_VERSION: &str = "1.2";

/// Swagger 1.2 resource listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaggerDocument {
    pub swagger_version: String,
    pub info: Info,
    pub apis: Vec<ApiObject>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub base_path: Option<String>,
    pub api_version: String,
}

impl SwaggerDocument {
    /// Generic ordered JSON view of the document
    pub fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self)
            .map_err(|e| SwaggerError::Serialization(format!("Failed to serialize document: {}", e)))
    }

    /// Look up the API object for a path
    pub fn api(&self, path: &str) -> Option<&ApiObject> {
        self.apis.iter().find(|api| api.path == path)
    }
}

/// API information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub terms_of_service_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub license_url: Option<String>,
}

/// Operations available on one path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiObject {
    pub path: String,
    pub operations: Vec<OperationObject>,
}

/// Operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationObject {
    pub method: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub summary: Option<String>,
    pub produces: Vec<String>,
    pub parameters: Vec<ParameterObject>,
    pub response_messages: Vec<ResponseMessage>,
}

/// Parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterObject {
    pub name: String,
    pub param_type: ParamLocation,
    pub required: bool,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

/// Where a parameter is carried on the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Body,
    Path,
    Cookie,
    Query,
    Form,
    Header,
    /// Category the mapping does not know about
    Unknown,
}

impl ParamLocation {
    /// Map a framework category tag onto its location.
    ///
    /// Unrecognised tags map to [`ParamLocation::Unknown`].
    pub fn from_category(category: &str) -> Self {
        match category {
            "body" => ParamLocation::Body,
            "PathParameters" => ParamLocation::Path,
            "CookieParameters" => ParamLocation::Cookie,
            "QueryParameters" => ParamLocation::Query,
            "FormParameters" => ParamLocation::Form,
            "HeaderParameters" => ParamLocation::Header,
            _ => ParamLocation::Unknown,
        }
    }

    /// Value written to `paramType`
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamLocation::Body => "body",
            ParamLocation::Path => "path",
            ParamLocation::Cookie => "cookie",
            ParamLocation::Query => "query",
            ParamLocation::Form => "form",
            ParamLocation::Header => "header",
            ParamLocation::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub code: i32,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert_eq!(ParamLocation::from_category("body"), ParamLocation::Body);
        assert_eq!(
            ParamLocation::from_category("PathParameters"),
            ParamLocation::Path
        );
        assert_eq!(
            ParamLocation::from_category("CookieParameters"),
            ParamLocation::Cookie
        );
        assert_eq!(
            ParamLocation::from_category("QueryParameters"),
            ParamLocation::Query
        );
        assert_eq!(
            ParamLocation::from_category("FormParameters"),
            ParamLocation::Form
        );
        assert_eq!(
            ParamLocation::from_category("HeaderParameters"),
            ParamLocation::Header
        );
    }

    #[test]
    fn test_unknown_categories() {
        for category in ["", "Body", "pathparameters", "MatrixParameters", "query"] {
            assert_eq!(
                ParamLocation::from_category(category),
                ParamLocation::Unknown,
                "category {:?}",
                category
            );
        }
    }

    #[test]
    fn test_location_serializes_lowercase() {
        let json = serde_json::to_string(&ParamLocation::Header).unwrap();
        assert_eq!(json, "\"header\"");

        let json = serde_json::to_string(&ParamLocation::Unknown).unwrap();
        assert_eq!(json, "\"unknown\"");
        assert_eq!(ParamLocation::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_info_omits_absent_fields() {
        let info = Info {
            title: "Petstore".to_string(),
            description: None,
            terms_of_service_url: None,
            contact: Some("api@example.com".to_string()),
            license: None,
            license_url: None,
        };

        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(json, r#"{"title":"Petstore","contact":"api@example.com"}"#);
    }

    #[test]
    fn test_to_value_keeps_key_order() {
        let doc = SwaggerDocument {
            swagger_version: SWAGGER_VERSION.to_string(),
            info: Info {
                title: "Petstore".to_string(),
                description: None,
                terms_of_service_url: None,
                contact: None,
                license: None,
                license_url: None,
            },
            apis: vec![],
            base_path: None,
            api_version: "1.0.0".to_string(),
        };

        let value = doc.to_value().unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["swaggerVersion", "info", "apis", "apiVersion"]);
        assert!(doc.api("/pet").is_none());
    }

    #[test]
    fn test_parameter_object_key_order() {
        let param = ParameterObject {
            name: "petId".to_string(),
            param_type: ParamLocation::Path,
            required: true,
            type_name: "integer".to_string(),
            description: Some("ID of pet".to_string()),
        };

        let json = serde_json::to_string(&param).unwrap();
        assert_eq!(
            json,
            r#"{"name":"petId","paramType":"path","required":true,"type":"integer","description":"ID of pet"}"#
        );
    }
}
