//! Integration tests for rostrum-swagger

use pretty_assertions::assert_eq;
use rostrum_swagger::*;
use serde_json::json;

fn petstore_info() -> ServiceInfo {
    ServiceInfo::new("Swagger Petstore", "1.0.0")
        .description("This is a sample server Petstore server.")
        .terms_of_service("http://helloreverb.com/terms/")
        .contact_email("apiteam@wordnik.com")
        .licence_name("Apache 2.0")
        .licence_url("http://www.apache.org/licenses/LICENSE-2.0.html")
        .host("petstore.swagger.io")
        .base_path("/v2")
}

fn petstore_resources() -> Resources {
    let mut resources = Resources::new();
    resources.insert(
        "/pet".to_string(),
        vec![
            Operation::new("put", "updatePet")
                .summary("Update an existing pet")
                .produces("application/json")
                .parameter(
                    Parameter::new("body", "body", "Pet")
                        .required(true)
                        .description("Pet object that needs to be added to the store"),
                )
                .response("400", "Invalid ID supplied")
                .response("404", "Pet not found")
                .response("default", "Unexpected error"),
            Operation::new("post", "addPet")
                .summary("Add a new pet to the store")
                .produces("application/json")
                .parameter(Parameter::new("body", "body", "Pet").required(true))
                .response("405", "Invalid input"),
        ],
    );
    resources.insert(
        "/pet/{petId}".to_string(),
        vec![
            Operation::new("get", "getPetById")
                .summary("Find pet by ID")
                .description("Returns a single pet")
                .produces("application/json")
                .produces("application/xml")
                .parameter(
                    Parameter::new("petId", "PathParameters", "integer")
                        .required(true)
                        .description("ID of pet to return"),
                )
                .parameter(Parameter::new("api_key", "HeaderParameters", "string"))
                .response("200", "successful operation")
                .response("default", "Unexpected error"),
        ],
    );
    resources
}

#[test]
fn test_petstore_document() {
    let doc = swagger_v1_2(&petstore_info(), &petstore_resources()).unwrap();

    let expected = json!({
        "swaggerVersion": "1.2",
        "info": {
            "title": "Swagger Petstore",
            "description": "This is a sample server Petstore server.",
            "termsOfServiceUrl": "http://helloreverb.com/terms/",
            "contact": "apiteam@wordnik.com",
            "license": "Apache 2.0",
            "licenseUrl": "http://www.apache.org/licenses/LICENSE-2.0.html"
        },
        "apis": [
            {
                "path": "/pet",
                "operations": [
                    {
                        "method": "PUT",
                        "nickname": "updatePet",
                        "summary": "Update an existing pet",
                        "produces": ["application/json"],
                        "parameters": [
                            {
                                "name": "body",
                                "paramType": "body",
                                "required": true,
                                "type": "Pet",
                                "description": "Pet object that needs to be added to the store"
                            }
                        ],
                        "responseMessages": [
                            { "code": 400, "message": "Invalid ID supplied" },
                            { "code": 404, "message": "Pet not found" }
                        ]
                    },
                    {
                        "method": "POST",
                        "nickname": "addPet",
                        "summary": "Add a new pet to the store",
                        "produces": ["application/json"],
                        "parameters": [
                            { "name": "body", "paramType": "body", "required": true, "type": "Pet" }
                        ],
                        "responseMessages": [
                            { "code": 405, "message": "Invalid input" }
                        ]
                    }
                ]
            },
            {
                "path": "/pet/{petId}",
                "operations": [
                    {
                        "method": "GET",
                        "nickname": "getPetById",
                        "notes": "Returns a single pet",
                        "summary": "Find pet by ID",
                        "produces": ["application/json", "application/xml"],
                        "parameters": [
                            {
                                "name": "petId",
                                "paramType": "path",
                                "required": true,
                                "type": "integer",
                                "description": "ID of pet to return"
                            },
                            { "name": "api_key", "paramType": "header", "required": false, "type": "string" }
                        ],
                        "responseMessages": [
                            { "code": 200, "message": "successful operation" }
                        ]
                    }
                ]
            }
        ],
        "basePath": "http://petstore.swagger.io/v2",
        "apiVersion": "1.0.0"
    });

    assert_eq!(doc.to_value().unwrap(), expected);
}

#[test]
fn test_top_level_key_order() {
    let doc = swagger_v1_2(&petstore_info(), &petstore_resources()).unwrap();
    let value = doc.to_value().unwrap();

    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        keys,
        vec!["swaggerVersion", "info", "apis", "basePath", "apiVersion"]
    );
}

#[test]
fn test_minimal_service() {
    let doc = swagger_v1_2(&ServiceInfo::new("Minimal", "0.1"), &Resources::new()).unwrap();

    assert_eq!(
        doc.to_value().unwrap(),
        json!({
            "swaggerVersion": "1.2",
            "info": { "title": "Minimal" },
            "apis": [],
            "basePath": "http://",
            "apiVersion": "0.1"
        })
    );
}

#[test]
fn test_unresolvable_base_path_keeps_document() {
    let info = petstore_info().host("petstore swagger io");
    let doc = swagger_v1_2(&info, &petstore_resources()).unwrap();

    assert!(doc.base_path.is_none());
    assert_eq!(doc.apis.len(), 2);

    let value = doc.to_value().unwrap();
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["swaggerVersion", "info", "apis", "apiVersion"]);
}

#[test]
fn test_unknown_parameter_categories() {
    let mut resources = Resources::new();
    resources.insert(
        "/search".to_string(),
        vec![Operation::new("get", "search")
            .parameter(Parameter::new("q", "QueryParameters", "string"))
            .parameter(Parameter::new("m", "MatrixParameters", "string"))
            .parameter(Parameter::new("s", "SessionParameters", "string"))],
    );

    let doc = swagger_v1_2(&ServiceInfo::new("Search", "1"), &resources).unwrap();
    let locations: Vec<_> = doc.apis[0].operations[0]
        .parameters
        .iter()
        .map(|p| p.param_type.as_str())
        .collect();
    assert_eq!(locations, vec!["query", "unknown", "unknown"]);
}

#[test]
fn test_bad_status_aborts_document() {
    let mut resources = petstore_resources();
    resources.insert(
        "/store/order".to_string(),
        vec![Operation::new("post", "placeOrder").response("2xx", "OK")],
    );

    let err = swagger_v1_2(&petstore_info(), &resources).unwrap_err();
    assert_eq!(
        err.to_string(),
        "path '/store/order': operation 'placeOrder' has invalid response status '2xx': invalid digit found in string"
    );
}

#[test]
fn test_document_lookup_and_rendering() {
    let doc = swagger_v1_2(&petstore_info(), &petstore_resources()).unwrap();

    let api = doc.api("/pet/{petId}").unwrap();
    assert_eq!(api.operations[0].nickname, "getPetById");
    assert!(doc.api("/user").is_none());

    let yaml = render(&doc, OutputFormat::Yaml).unwrap();
    assert!(yaml.contains("basePath: http://petstore.swagger.io/v2"));
    assert!(yaml.contains("paramType: header"));
}
