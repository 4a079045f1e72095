// API description file contents

use rostrum_swagger::{Operation, Resources, ServiceInfo};
use serde::{Deserialize, Serialize};

/// Everything needed to build a document: the service and its resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDescription {
    pub info: ServiceInfo,
    #[serde(default)]
    pub resources: Vec<ResourceSection>,
}

/// One `[[resources]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSection {
    pub path: String,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

/// Values that replace the file's settings, usually taken from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub host: Option<String>,
    pub base_path: Option<String>,
    pub api_version: Option<String>,
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        self.host.is_none() && self.base_path.is_none() && self.api_version.is_none()
    }
}

impl ApiDescription {
    pub fn new(info: ServiceInfo) -> Self {
        Self {
            info,
            resources: Vec::new(),
        }
    }

    /// Resource map in file order; sections repeating a path are merged
    pub fn resources(&self) -> Resources {
        let mut resources = Resources::new();
        for section in &self.resources {
            resources
                .entry(section.path.clone())
                .or_default()
                .extend(section.operations.iter().cloned());
        }
        resources
    }

    /// Split into the inputs of [`rostrum_swagger::swagger_v1_2`]
    pub fn into_parts(self) -> (ServiceInfo, Resources) {
        let resources = self.resources();
        (self.info, resources)
    }

    /// Replace host, base path and API version where an override is set
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(host) = &overrides.host {
            self.info.host = Some(host.clone());
        }
        if let Some(base_path) = &overrides.base_path {
            self.info.base_path = Some(base_path.clone());
        }
        if let Some(version) = &overrides.api_version {
            self.info.api_version = version.clone();
        }
    }

    /// Number of operations over all resources
    pub fn operation_count(&self) -> usize {
        self.resources.iter().map(|r| r.operations.len()).sum()
    }
}
