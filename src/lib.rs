// Rostrum - Swagger 1.2 documents for Rust services
//
// Describe a service and its operations with plain typed values and get back
// a Swagger 1.2 document, ready to encode as JSON or YAML.

// Re-export the document builders
pub use rostrum_swagger::*;

// Re-export logging
pub use rostrum_log;

// Re-export optional crates
#[cfg(feature = "config")]
pub use rostrum_config;

/// Prelude for common imports.
///
/// ```
/// use rostrum::prelude::*;
///
/// let info = ServiceInfo::new("Petstore", "1.0.0");
/// let mut resources = Resources::new();
/// resources.insert(
///     "/pet".to_string(),
///     vec![Operation::new("get", "findPets").response("200", "OK")],
/// );
///
/// let doc = swagger_v1_2(&info, &resources).unwrap();
/// assert_eq!(doc.apis[0].operations[0].method, "GET");
/// ```
pub mod prelude {
    pub use rostrum_swagger::{
        BasePath, OutputFormat, Operation, Parameter, Resources, ResponseDescription,
        ServiceInfo, SwaggerDocument, SwaggerError, render, swagger_v1_2,
    };

    #[cfg(feature = "config")]
    pub use rostrum_config::{ApiDescription, DescriptionBuilder, load_description};
}
