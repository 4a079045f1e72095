//! Swagger 1.2 document generation for Rostrum
//!
//! This crate turns a description of a service and the operations mounted on
//! each of its paths into a Swagger 1.2 resource listing. It only describes
//! shape; serving the document is left to the surrounding application.
//!
//! ## Features
//!
//! - 📝 **Pure builders** - Every part of the document is a free function over plain values
//! - 📋 **Ordered output** - Key order is fixed and `apis` follows the resource map
//! - 🌐 **Forgiving base path** - Unusable hosts or paths drop `basePath` instead of failing
//! - 📤 **JSON/YAML Export** - Compact, pretty and YAML renderings
//!
//! ## Quick Start
//!
//! ```
//! use rostrum_swagger::{
//!     swagger_v1_2, render, Operation, OutputFormat, Parameter, Resources, ServiceInfo,
//! };
//!
//! let info = ServiceInfo::new("Swagger Petstore", "1.0.0")
//!     .description("A sample server")
//!     .host("petstore.swagger.io")
//!     .base_path("/v2");
//!
//! let mut resources = Resources::new();
//! resources.insert(
//!     "/pet/{petId}".to_string(),
//!     vec![
//!         Operation::new("get", "getPetById")
//!             .summary("Find pet by ID")
//!             .produces("application/json")
//!             .parameter(Parameter::new("petId", "PathParameters", "integer").required(true))
//!             .response("200", "successful operation")
//!             .response("404", "Pet not found")
//!             .response("default", "Unexpected error"),
//!     ],
//! );
//!
//! let doc = swagger_v1_2(&info, &resources).unwrap();
//! let op = &doc.apis[0].operations[0];
//! assert_eq!(op.method, "GET");
//! assert_eq!(op.parameters[0].param_type.as_str(), "path");
//! assert_eq!(op.response_messages.len(), 2);
//!
//! let json = render(&doc, OutputFormat::Json).unwrap();
//! assert!(json.starts_with(r#"{"swaggerVersion":"1.2""#));
//! ```

pub mod base_path;
pub mod builder;
pub mod document;
pub mod error;
pub mod model;
pub mod render;

pub use base_path::{resolve_base_path, BasePath};
pub use builder::*;
pub use document::*;
pub use error::{BasePathError, Result, SwaggerError};
pub use model::*;
pub use render::{render, to_json, to_json_pretty, to_yaml, OutputFormat};
