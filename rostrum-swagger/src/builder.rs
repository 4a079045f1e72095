//! Builders turning service and operation records into a Swagger 1.2 document

use crate::base_path::resolve_base_path;
use crate::document::*;
use crate::error::{Result, SwaggerError};
use crate::model::{Operation, Parameter, ResponseDescription, Resources, ServiceInfo};
use rostrum_log::debug;

const TARGET: &str = "rostrum::swagger";

/// Build the complete Swagger 1.2 document for a service.
///
/// The only failure is a response status that is neither numeric nor
/// `default`; an unusable host or base path just leaves `basePath` out.
///
/// ```
/// use rostrum_swagger::{swagger_v1_2, Operation, Resources, ServiceInfo};
///
/// let info = ServiceInfo::new("Petstore", "1.0.0")
///     .host("petstore.swagger.io")
///     .base_path("/v2");
///
/// let mut resources = Resources::new();
/// resources.insert(
///     "/pet".to_string(),
///     vec![Operation::new("post", "addPet").response("405", "Invalid input")],
/// );
///
/// let doc = swagger_v1_2(&info, &resources).unwrap();
/// assert_eq!(doc.swagger_version, "1.2");
/// assert_eq!(doc.base_path.as_deref(), Some("http://petstore.swagger.io/v2"));
/// assert_eq!(doc.apis[0].operations[0].method, "POST");
/// ```
pub fn swagger_v1_2(info: &ServiceInfo, resources: &Resources) -> Result<SwaggerDocument> {
    debug!(
        target: TARGET,
        "Building Swagger {} document for '{}' ({} paths)",
        SWAGGER_VERSION,
        info.title,
        resources.len()
    );

    let document = SwaggerDocument {
        swagger_version: SWAGGER_VERSION.to_string(),
        info: swagger_info(info),
        apis: apis(resources)?,
        base_path: resolve_base_path(info.host.as_deref(), info.base_path.as_deref()),
        api_version: info.api_version.clone(),
    };

    debug!(
        target: TARGET,
        "Built document with {} operations",
        document
            .apis
            .iter()
            .map(|api| api.operations.len())
            .sum::<usize>()
    );

    Ok(document)
}

/// Build the `info` object; absent fields are left out
pub fn swagger_info(info: &ServiceInfo) -> Info {
    Info {
        title: info.title.clone(),
        description: info.description.clone(),
        terms_of_service_url: info.terms_of_service.clone(),
        contact: info.contact_email.clone(),
        license: info.licence_name.clone(),
        license_url: info.licence_url.clone(),
    }
}

/// Build one API object per path, in the order of the mapping
pub fn apis(resources: &Resources) -> Result<Vec<ApiObject>> {
    resources
        .iter()
        .map(|(path, operations)| api_object(path, operations).map_err(|e| e.in_path(path)))
        .collect()
}

fn api_object(path: &str, operations: &[Operation]) -> Result<ApiObject> {
    Ok(ApiObject {
        path: path.to_string(),
        operations: operations
            .iter()
            .map(operation_object)
            .collect::<Result<_>>()?,
    })
}

/// Build the object for a single operation
pub fn operation_object(operation: &Operation) -> Result<OperationObject> {
    Ok(OperationObject {
        method: operation.method.to_uppercase(),
        nickname: operation.nickname.clone(),
        notes: operation.description.clone(),
        summary: operation.summary.clone(),
        produces: operation.produces.clone(),
        parameters: operation.parameters.iter().map(parameter_object).collect(),
        response_messages: response_messages(&operation.nickname, &operation.responses)?,
    })
}

/// Build a parameter object, resolving its location from the category tag
pub fn parameter_object(param: &Parameter) -> ParameterObject {
    ParameterObject {
        name: param.name.clone(),
        param_type: ParamLocation::from_category(&param.param_type),
        required: param.required,
        type_name: param.type_name.clone(),
        description: param.description.clone(),
    }
}

/// Build the response messages of an operation, skipping the `default` entry
pub fn response_messages(
    nickname: &str,
    responses: &[ResponseDescription],
) -> Result<Vec<ResponseMessage>> {
    responses
        .iter()
        .filter(|response| !response.is_default())
        .map(|response| {
            let code = response.status.parse::<i32>().map_err(|source| {
                SwaggerError::InvalidResponseStatus {
                    nickname: nickname.to_string(),
                    status: response.status.clone(),
                    source,
                }
            })?;

            Ok(ResponseMessage {
                code,
                message: response.description.clone(),
            })
        })
        .collect()
}
